#[cfg(test)]
mod tests {
    use std::cell::{Cell, RefCell};
    use std::rc::Rc;
    use std::time::Duration;

    use adorn_core::*;

    use crate::behaviour::extra_click_action;
    use crate::testing::{FakeHost, TestDrawable, decor, init_logger, with_right_decoration};
    use crate::*;

    fn counting_button(label: &str) -> (Rc<ButtonBehaviour>, Rc<Cell<u32>>) {
        let clicks = Rc::new(Cell::new(0));
        let button = ButtonBehaviour::from_fn(label, {
            let clicks = clicks.clone();
            move |_slot: Slot, _host: &dyn FieldHost| clicks.set(clicks.get() + 1)
        });
        (Rc::new(button), clicks)
    }

    fn tap(controller: &CompoundDrawablesController, x: f32, y: f32) -> bool {
        let down = controller.dispatch_touch_event(&PointerEvent::down(x, y));
        let up = controller.dispatch_touch_event(&PointerEvent::up(x, y));
        down && up
    }

    fn same(a: &Rc<dyn Drawable>, b: &Rc<TestDrawable>) -> bool {
        std::ptr::addr_eq(Rc::as_ptr(a), Rc::as_ptr(b))
    }

    #[test]
    fn test_right_slot_press_and_click() {
        let (_host, controller, icon) = with_right_decoration();
        let seen = Rc::new(RefCell::new(Vec::new()));
        controller.set_compound_drawable_behaviour(
            Slot::Right,
            Rc::new(ButtonBehaviour::from_fn("Search", {
                let seen = seen.clone();
                move |slot: Slot, _host: &dyn FieldHost| seen.borrow_mut().push(slot)
            })),
        );
        let view = controller.virtual_view(Slot::Right);
        assert_eq!(view.rect(), Rect::from_ltrb(170.0, 15.0, 190.0, 35.0));

        assert!(controller.dispatch_touch_event(&PointerEvent::down(180.0, 25.0)));
        assert!(view.is_pressed());
        assert_eq!(icon.hotspot(), Some(Vec2::new(10.0, 10.0)));
        assert!(has_state(&icon.last().unwrap(), state_id::PRESSED));

        assert!(controller.dispatch_touch_event(&PointerEvent::up(180.0, 25.0)));
        assert!(!view.is_pressed());
        assert_eq!(*seen.borrow(), vec![Slot::Right]);
    }

    #[test]
    fn test_move_out_of_slop_releases_without_click() {
        let (_host, controller, _icon) = with_right_decoration();
        let (button, clicks) = counting_button("Search");
        controller.set_compound_drawable_behaviour(Slot::Right, button);
        let view = controller.virtual_view(Slot::Right);

        assert!(controller.dispatch_touch_event(&PointerEvent::down(180.0, 25.0)));
        // still consumed, the gesture belongs to the slot
        assert!(controller.dispatch_touch_event(&PointerEvent::moved(5.0, 5.0)));
        assert!(!view.is_pressed());

        assert!(!controller.dispatch_touch_event(&PointerEvent::up(180.0, 25.0)));
        assert_eq!(clicks.get(), 0);
    }

    #[test]
    fn test_move_within_slop_keeps_press() {
        let (_host, controller, icon) = with_right_decoration();
        let view = controller.virtual_view(Slot::Right);

        assert!(controller.dispatch_touch_event(&PointerEvent::down(180.0, 25.0)));
        assert!(controller.dispatch_touch_event(&PointerEvent::moved(195.0, 38.0)));
        assert!(view.is_pressed());
        assert_eq!(icon.hotspot(), Some(Vec2::new(25.0, 23.0)));
    }

    #[test]
    fn test_slop_extends_hit_area() {
        let (_host, controller, _icon) = with_right_decoration();
        let view = controller.virtual_view(Slot::Right);

        assert!(view.on_touch_event(&PointerEvent::down(197.0, 25.0)));
        assert!(!view.on_touch_event(&PointerEvent::cancel(197.0, 25.0)));
        assert!(!view.on_touch_event(&PointerEvent::down(199.0, 25.0)));
        assert!(!view.on_touch_event(&PointerEvent::down(100.0, 25.0)));
    }

    #[test]
    fn test_every_slot_hit_tests_its_rect() {
        init_logger();
        let host = FakeHost::new();
        let controller = host.controller();
        let icons: Vec<_> = (0..4).map(|_| TestDrawable::new(10.0, 10.0)).collect();
        controller.set_compound_drawables([
            decor(&icons[0]),
            decor(&icons[1]),
            decor(&icons[2]),
            decor(&icons[3]),
        ]);
        let slop = host.touch_slop();

        for slot in Slot::ALL {
            let view = controller.virtual_view(slot);
            let r = view.rect();
            assert!(!r.is_empty(), "{slot:?} not laid out");

            let center = PointerEvent::down(r.x + r.w / 2.0, r.y + r.h / 2.0);
            assert!(view.on_touch_event(&center), "{slot:?} missed its center");
            view.on_touch_event(&PointerEvent::cancel(0.0, 0.0));

            let far = PointerEvent::down(r.right() + slop + 1.0, r.bottom() + slop + 1.0);
            assert!(!view.on_touch_event(&far), "{slot:?} took a far touch");
            assert!(!view.is_pressed());
        }
    }

    #[test]
    fn test_overlapping_slots_dispatch_left_first() {
        init_logger();
        let host = FakeHost::new();
        host.size.set(Size::new(20.0, 20.0));
        host.padding.set(PaddingValues::all(0.0));
        let controller = host.controller();
        let left = TestDrawable::new(20.0, 20.0);
        let top = TestDrawable::new(20.0, 20.0);
        controller.set_compound_drawables([decor(&left), decor(&top), None, None]);
        assert_eq!(
            controller.virtual_view(Slot::Left).rect(),
            controller.virtual_view(Slot::Top).rect()
        );

        assert!(controller.dispatch_touch_event(&PointerEvent::down(10.0, 10.0)));
        assert!(controller.virtual_view(Slot::Left).is_pressed());
        assert!(!controller.virtual_view(Slot::Top).is_pressed());
    }

    #[test]
    fn test_disabled_host_ignores_touches() {
        let (host, controller, _icon) = with_right_decoration();
        host.enabled.set(false);

        assert!(!controller.dispatch_touch_event(&PointerEvent::down(180.0, 25.0)));
        assert!(!controller.virtual_view(Slot::Right).is_pressed());
    }

    #[test]
    fn test_empty_slots_never_consume() {
        let (_host, controller, _icon) = with_right_decoration();
        let left = controller.virtual_view(Slot::Left);
        assert!(left.rect().is_empty());
        assert!(!left.on_touch_event(&PointerEvent::down(0.0, 0.0)));
        assert!(!controller.dispatch_touch_event(&PointerEvent::down(-1e9, f32::MAX)));
    }

    #[test]
    fn test_cancel_is_idempotent_and_forces_redraw() {
        let (host, controller, _icon) = with_right_decoration();
        let view = controller.virtual_view(Slot::Right);

        controller.dispatch_touch_event(&PointerEvent::down(180.0, 25.0));
        assert!(!controller.dispatch_touch_event(&PointerEvent::cancel(180.0, 25.0)));
        assert!(!view.is_pressed());

        let redraws = host.invalidations.get();
        assert!(!controller.dispatch_touch_event(&PointerEvent::outside(180.0, 25.0)));
        assert!(!view.is_pressed());
        assert_eq!(host.invalidations.get(), redraws + 1);
    }

    #[test]
    fn test_drawable_state_changed_is_idempotent() {
        let (host, controller, icon) = with_right_decoration();
        host.focused.set(true);

        let before = host.invalidations.get();
        controller.drawable_state_changed();
        assert_eq!(host.invalidations.get(), before + 1);
        assert!(has_state(&icon.last().unwrap(), state_id::FOCUSED));

        let pushes = icon.pushes().len();
        controller.drawable_state_changed();
        assert_eq!(host.invalidations.get(), before + 1);
        assert_eq!(icon.pushes().len(), pushes);
    }

    #[test]
    fn test_state_set_dump() {
        let (host, controller, icon) = with_right_decoration();
        host.status.set(FieldStatus::restore(true, false));
        controller.drawable_state_changed();
        controller.dispatch_touch_event(&PointerEvent::down(180.0, 25.0));

        insta::assert_snapshot!(
            dump_states(&icon.last().unwrap()),
            @"ENABLED, focused, PRESSED, checkable, checked, ERROR, success"
        );
    }

    #[test]
    fn test_ripple_drawables_never_look_focused() {
        init_logger();
        let host = FakeHost::new();
        host.focused.set(true);
        let controller = host.controller();
        let icon = TestDrawable::new(20.0, 20.0);
        let ripple = TestDrawable::ripple(20.0, 20.0);
        controller.set_compound_drawables([decor(&icon), None, decor(&ripple), None]);

        assert!(has_state(&icon.last().unwrap(), state_id::FOCUSED));
        assert!(!has_state(&ripple.last().unwrap(), state_id::FOCUSED));
    }

    #[test]
    fn test_custom_states_follow_builtins() {
        let (host, controller, icon) = with_right_decoration();
        {
            let mut states = host.states.borrow_mut();
            states.register_custom_states(&[100, 101]);
            states.set_custom_states(&[100, -101]);
        }
        controller.drawable_state_changed();

        assert_eq!(&host.custom_states()[..], &[100, -101]);
        insta::assert_snapshot!(
            dump_states(&icon.last().unwrap()),
            @"ENABLED, focused, pressed, checkable, checked, error, success, 100, -101"
        );
    }

    #[test]
    fn test_wrapped_drawables_are_handed_to_host() {
        let (host, controller, icon) = with_right_decoration();
        let installed = host.installed(2).unwrap();
        assert!(installed.is_locked());
        assert!(same(installed.inner(), &icon));
        assert!(Rc::ptr_eq(&installed, &controller.drawable(Slot::Right).unwrap()));
        assert!(host.installed(0).is_none());
        assert!(host.layout_requests.get() >= 1);
    }

    #[test]
    fn test_replacing_behaviour_round_trip() {
        let (_host, controller, _icon) = with_right_decoration();
        let (button, clicks) = counting_button("Go");
        controller.set_compound_drawable_behaviour(Slot::Right, button.clone());
        assert_eq!(
            controller.accessibility().visible_virtual_views().as_slice(),
            &[Slot::Right]
        );

        controller.set_compound_drawable_behaviour(Slot::Right, NoneBehaviour::shared());
        assert!(controller.accessibility().visible_virtual_views().is_empty());
        assert!(
            !controller
                .compound_drawable_behaviour(Slot::Right)
                .is_important_for_accessibility()
        );
        assert!(tap(&controller, 180.0, 25.0));
        assert_eq!(clicks.get(), 0);

        // detached, so it can move to another slot
        controller.set_compound_drawable_behaviour(Slot::Left, button);
    }

    #[test]
    fn test_default_behaviour_is_none() {
        let (_host, controller, _icon) = with_right_decoration();
        for slot in Slot::ALL {
            let b = controller.compound_drawable_behaviour(slot);
            assert!(!b.is_important_for_accessibility());
            assert!(b.content_description().is_empty());
        }
    }

    #[test]
    #[should_panic(expected = "already attached")]
    fn test_behaviour_cannot_serve_two_slots() {
        let (_host, controller, _icon) = with_right_decoration();
        let toggle = Rc::new(ToggleButton::default());
        controller.set_compound_drawable_behaviour(Slot::Right, toggle.clone());
        controller.set_compound_drawable_behaviour(Slot::Left, toggle);
    }

    #[test]
    #[should_panic(expected = "not attached")]
    fn test_detached_behaviour_panics_on_click() {
        ClearButton::new().on_click();
    }

    #[test]
    fn test_clear_button_visibility_follows_empty_boundary() {
        let (host, controller, icon) = with_right_decoration();
        controller.set_compound_drawable_behaviour(Slot::Right, Rc::new(ClearButton::new()));
        let view = controller.virtual_view(Slot::Right);

        assert!(!view.is_visible());
        assert!(!host.installed(2).unwrap().is_visible());
        assert!(!controller.dispatch_touch_event(&PointerEvent::down(180.0, 25.0)));

        host.set_text("a");
        assert!(view.is_visible());
        let jumps = icon.jumps();
        let redraws = host.invalidations.get();
        host.set_text("ab");
        host.set_text("abc");
        assert!(view.is_visible());
        assert_eq!(icon.jumps(), jumps);
        assert_eq!(host.invalidations.get(), redraws);

        host.set_text("");
        assert!(!view.is_visible());
        assert_eq!(icon.jumps(), jumps + 1);
    }

    #[test]
    fn test_clear_button_click_clears_and_focuses() {
        let (host, controller, _icon) = with_right_decoration();
        host.set_text("hello");
        controller.set_compound_drawable_behaviour(Slot::Right, Rc::new(ClearButton::new()));
        assert!(controller.virtual_view(Slot::Right).is_visible());

        assert!(tap(&controller, 180.0, 25.0));
        assert_eq!(host.text(), "");
        assert_eq!(host.focus_requests.get(), 1);
        assert!(!controller.virtual_view(Slot::Right).is_visible());
    }

    #[test]
    fn test_clear_button_detach_restores_visibility() {
        let (host, controller, _icon) = with_right_decoration();
        controller.set_compound_drawable_behaviour(Slot::Right, Rc::new(ClearButton::new()));
        assert_eq!(host.text_changes().subscriber_count(), 1);

        controller.set_compound_drawable_behaviour(Slot::Right, NoneBehaviour::shared());
        assert!(controller.virtual_view(Slot::Right).is_visible());
        assert_eq!(host.text_changes().subscriber_count(), 0);
    }

    #[test]
    fn test_toggle_flips_on_click_and_resets_on_detach() {
        let (_host, controller, icon) = with_right_decoration();
        controller.set_compound_drawable_behaviour(Slot::Right, Rc::new(ToggleButton::default()));
        let view = controller.virtual_view(Slot::Right);
        assert!(view.is_checkable());
        assert!(has_state(&icon.last().unwrap(), state_id::CHECKABLE));

        tap(&controller, 180.0, 25.0);
        assert!(view.is_checked());
        assert!(has_state(&icon.last().unwrap(), state_id::CHECKED));
        tap(&controller, 180.0, 25.0);
        assert!(!view.is_checked());
        tap(&controller, 180.0, 25.0);

        controller.set_compound_drawable_behaviour(Slot::Right, NoneBehaviour::shared());
        assert!(!view.is_checked());
        assert!(!view.is_checkable());
        let last = icon.last().unwrap();
        assert!(!has_state(&last, state_id::CHECKED));
        assert!(!has_state(&last, state_id::CHECKABLE));
    }

    #[test]
    fn test_password_button_toggles_obscuring() {
        let (host, controller, icon) = with_right_decoration();
        host.obscured.set(true);
        host.set_text("secret");
        let password = Rc::new(PasswordButton::new());
        controller.set_compound_drawable_behaviour(Slot::Right, password.clone());
        let view = controller.virtual_view(Slot::Right);

        assert!(!view.is_checked());
        assert_eq!(password.content_description(), "Show password");

        assert!(tap(&controller, 180.0, 25.0));
        assert!(!host.obscured.get());
        assert!(view.is_checked());
        assert!(has_state(&icon.last().unwrap(), state_id::CHECKED));
        assert_eq!(password.content_description(), "Hide password");
        assert_eq!(host.selection.get(), Some(6));
    }

    #[test]
    fn test_password_button_reads_obscuring_at_attach() {
        let (host, controller, _icon) = with_right_decoration();
        host.obscured.set(false);
        host.set_text("visible");
        controller.set_compound_drawable_behaviour(Slot::Right, Rc::new(PasswordButton::new()));
        assert!(controller.virtual_view(Slot::Right).is_checked());
    }

    #[test]
    fn test_relative_slots_resolve_per_call() {
        init_logger();
        let host = FakeHost::new();
        let controller = host.controller();
        let start = TestDrawable::new(20.0, 20.0);

        host.direction.set(TextDirection::Rtl);
        controller.set_compound_drawables_relative([decor(&start), None, None, None]);
        assert!(controller.drawable(Slot::Left).is_none());
        assert!(same(controller.drawable(Slot::Right).unwrap().inner(), &start));
        assert_eq!(
            controller.virtual_view(Slot::Right).rect(),
            Rect::from_ltrb(170.0, 15.0, 190.0, 35.0)
        );

        host.direction.set(TextDirection::Ltr);
        controller.set_compound_drawables_relative([decor(&start), None, None, None]);
        assert!(controller.drawable(Slot::Right).is_none());
        assert!(same(controller.drawable(Slot::Left).unwrap().inner(), &start));
    }

    #[test]
    fn test_relative_behaviour_lands_on_physical_slot() {
        let (host, controller, _icon) = with_right_decoration();
        host.direction.set(TextDirection::Rtl);
        let (button, _clicks) = counting_button("Go");
        controller.set_compound_drawable_behaviour_relative(RelativeSlot::End, button);

        let left = controller.compound_drawable_behaviour(Slot::Left);
        let right = controller.compound_drawable_behaviour(Slot::Right);
        assert_eq!(left.content_description(), "Go");
        assert!(right.content_description().is_empty());
    }

    #[test]
    fn test_pending_drawables_merge_on_attach() {
        init_logger();
        let host = FakeHost::new();
        let controller = host.controller();
        let raw_left = TestDrawable::new(16.0, 16.0);
        let raw_right = TestDrawable::new(16.0, 16.0);
        let label = TestDrawable::new(30.0, 12.0);
        host.set_raw([decor(&raw_left), None, decor(&raw_right), None]);

        controller.set_pending_drawable(RelativeSlot::End, decor(&label));
        assert!(controller.has_pending_drawables());
        controller.on_attached_to_window();

        assert!(!controller.has_pending_drawables());
        assert!(same(controller.drawable(Slot::Left).unwrap().inner(), &raw_left));
        assert!(same(controller.drawable(Slot::Right).unwrap().inner(), &label));
        assert!(same(host.installed(2).unwrap().inner(), &label));
    }

    #[test]
    fn test_pending_drawables_follow_rtl() {
        init_logger();
        let host = FakeHost::new();
        host.direction.set(TextDirection::Rtl);
        let controller = host.controller();
        let raw_left = TestDrawable::new(16.0, 16.0);
        let label = TestDrawable::new(30.0, 12.0);
        host.set_raw([decor(&raw_left), None, None, None]);

        controller.set_pending_drawable(RelativeSlot::Start, decor(&label));
        controller.on_attached_to_window();

        assert!(same(controller.drawable(Slot::Left).unwrap().inner(), &raw_left));
        assert!(same(controller.drawable(Slot::Right).unwrap().inner(), &label));
    }

    #[test]
    fn test_press_refresh_runs_while_pressed() {
        let (host, controller, _icon) = with_right_decoration();
        controller.set_refresh_while_pressed(true);
        let view = controller.virtual_view(Slot::Right);

        controller.dispatch_touch_event(&PointerEvent::down(180.0, 25.0));
        assert_eq!(host.task_delays(), vec![Duration::from_millis(40)]);

        let redraws = host.invalidations.get();
        assert_eq!(host.run_tasks(), 1);
        assert_eq!(host.invalidations.get(), redraws + 1);
        assert_eq!(host.pending_tasks(), 1);
        assert_eq!(view.refresh_ticks(), 1);

        controller.dispatch_touch_event(&PointerEvent::up(180.0, 25.0));
        let redraws = host.invalidations.get();
        assert_eq!(host.run_tasks(), 1);
        assert_eq!(host.pending_tasks(), 0);
        assert_eq!(host.invalidations.get(), redraws);
        assert_eq!(view.refresh_ticks(), 1);
    }

    #[test]
    fn test_attach_installs_host_decorations_without_labels() {
        init_logger();
        let host = FakeHost::new();
        let controller = host.controller();
        let icon = TestDrawable::new(20.0, 20.0);
        host.set_raw([None, None, decor(&icon), None]);
        host.set_text("pw");
        controller.set_compound_drawable_behaviour(Slot::Right, Rc::new(ClearButton::new()));
        assert!(!controller.has_pending_drawables());

        controller.on_attached_to_window();

        assert!(same(controller.drawable(Slot::Right).unwrap().inner(), &icon));
        assert!(same(host.installed(2).unwrap().inner(), &icon));
        assert_eq!(
            controller.virtual_view(Slot::Right).rect(),
            Rect::from_ltrb(170.0, 15.0, 190.0, 35.0)
        );
        assert!(tap(&controller, 180.0, 25.0));
        assert_eq!(host.text(), "");
    }

    #[test]
    fn test_cancel_after_disable_releases_press() {
        let (host, controller, icon) = with_right_decoration();
        controller.set_refresh_while_pressed(true);
        let view = controller.virtual_view(Slot::Right);
        controller.dispatch_touch_event(&PointerEvent::down(180.0, 25.0));
        assert!(view.is_pressed());

        host.enabled.set(false);
        assert!(!controller.dispatch_touch_event(&PointerEvent::cancel(180.0, 25.0)));
        assert!(!view.is_pressed());
        assert!(!has_state(&icon.last().unwrap(), state_id::PRESSED));

        for _ in 0..5 {
            host.run_tasks();
        }
        assert_eq!(host.pending_tasks(), 0);
        assert_eq!(view.refresh_ticks(), 0);
    }

    #[test]
    fn test_disabling_host_drops_press() {
        let (host, controller, icon) = with_right_decoration();
        controller.set_refresh_while_pressed(true);
        let view = controller.virtual_view(Slot::Right);
        controller.dispatch_touch_event(&PointerEvent::down(180.0, 25.0));

        host.enabled.set(false);
        controller.drawable_state_changed();
        assert!(!view.is_pressed());
        assert!(!has_state(&icon.last().unwrap(), state_id::PRESSED));
        assert!(!has_state(&icon.last().unwrap(), state_id::ENABLED));

        assert_eq!(host.run_tasks(), 1);
        assert_eq!(host.pending_tasks(), 0);
        // the release is not a click and later events are ignored
        assert!(!controller.dispatch_touch_event(&PointerEvent::up(180.0, 25.0)));
    }

    #[test]
    fn test_press_refresh_is_off_by_default() {
        let (host, controller, _icon) = with_right_decoration();
        controller.dispatch_touch_event(&PointerEvent::down(180.0, 25.0));
        assert_eq!(host.pending_tasks(), 0);
    }

    #[derive(Default)]
    struct RecordingBridge {
        published: Vec<Vec<SemNode>>,
    }

    impl A11yBridge for RecordingBridge {
        fn publish_tree(&mut self, nodes: &[SemNode]) {
            self.published.push(nodes.to_vec());
        }

        fn focus_changed(&mut self, _node: Option<&SemNode>) {}
    }

    #[test]
    fn test_accessibility_nodes_and_actions() {
        let (_host, controller, _icon) = with_right_decoration();
        let (button, clicks) = counting_button("Search");
        controller.set_compound_drawable_behaviour(Slot::Right, button);
        let a11y = controller.accessibility();

        assert_eq!(
            a11y.virtual_view_at(Vec2::new(180.0, 25.0)),
            NodeId::Virtual(Slot::Right)
        );
        assert_eq!(a11y.virtual_view_at(Vec2::new(100.0, 25.0)), NodeId::Host);

        let node = a11y.populate_node(Slot::Right);
        assert_eq!(node.label.as_deref(), Some("Search"));
        assert_eq!(node.rect, Rect::from_ltrb(170.0, 15.0, 190.0, 35.0));
        assert_eq!(node.role, Role::Button);
        assert!(node.clickable);
        assert_eq!(node.actions, vec![A11yAction::Click, extra_click_action()]);

        assert!(a11y.perform_action(NodeId::Virtual(Slot::Right), &A11yAction::Click));
        assert!(a11y.perform_action(NodeId::Virtual(Slot::Right), &extra_click_action()));
        assert!(!a11y.perform_action(NodeId::Host, &A11yAction::Click));
        assert!(!a11y.perform_action(NodeId::Virtual(Slot::Left), &A11yAction::Click));
        assert_eq!(clicks.get(), 2);

        let mut bridge = RecordingBridge::default();
        a11y.publish(&mut bridge);
        assert_eq!(bridge.published.len(), 1);
        assert_eq!(bridge.published[0], vec![node]);
    }

    #[test]
    fn test_hidden_slots_are_not_exposed() {
        let (host, controller, _icon) = with_right_decoration();
        controller.set_compound_drawable_behaviour(Slot::Right, Rc::new(ClearButton::new()));
        let a11y = controller.accessibility();
        assert!(a11y.visible_virtual_views().is_empty());
        assert_eq!(a11y.virtual_view_at(Vec2::new(180.0, 25.0)), NodeId::Host);

        host.set_text("x");
        let node = controller.accessibility().populate_node(Slot::Right);
        assert_eq!(node.label.as_deref(), Some("Clear text"));
    }

    #[test]
    fn test_password_node_reports_checked() {
        let (host, controller, _icon) = with_right_decoration();
        host.obscured.set(true);
        host.set_text("pw");
        controller.set_compound_drawable_behaviour(Slot::Right, Rc::new(PasswordButton::new()));

        let a11y = controller.accessibility();
        let node = a11y.populate_node(Slot::Right);
        assert_eq!(node.role, Role::Switch);
        assert_eq!(node.checked, Some(false));
        assert_eq!(node.label.as_deref(), Some("Show password"));

        assert!(a11y.perform_action(NodeId::Virtual(Slot::Right), &A11yAction::Click));
        let node = a11y.populate_node(Slot::Right);
        assert_eq!(node.checked, Some(true));
        assert_eq!(node.label.as_deref(), Some("Hide password"));
    }
}
