use std::cell::RefCell;
use std::rc::{Rc, Weak};

use adorn_core::{PointerEvent, PointerEventKind, RelativeSlot, Slot, resolve_relative};

use crate::accessibility::AccessibilityDelegate;
use crate::behaviour::{Behaviour, NoneBehaviour};
use crate::drawable::{Drawable, StatefulDrawable};
use crate::host::{FieldHost, HostMetrics};
use crate::layout::CompoundLayout;
use crate::virtual_view::VirtualView;

pub type Drawables = [Option<Rc<dyn Drawable>>; 4];

type Behaviours = Rc<RefCell<[Rc<dyn Behaviour>; 4]>>;

/// Owns the four decoration slots of one text field.
///
/// The host forwards its touch events, layout passes, attach notification
/// and drawable-state refreshes here. Slots are always indexed physically
/// (left, top, right, bottom); the `*_relative` setters resolve start/end
/// against the host's layout direction at call time.
pub struct CompoundDrawablesController {
    host: Weak<dyn FieldHost>,
    views: [Rc<VirtualView>; 4],
    behaviours: Behaviours,
    pending: RefCell<Drawables>,
}

impl CompoundDrawablesController {
    pub fn new(host: Weak<dyn FieldHost>) -> Self {
        let behaviours: Behaviours = Rc::new(RefCell::new(std::array::from_fn(|_| {
            NoneBehaviour::shared()
        })));
        let views = Slot::ALL.map(|slot| {
            let behaviours = Rc::downgrade(&behaviours);
            VirtualView::new(
                slot,
                host.clone(),
                Rc::new(move |view: &VirtualView| {
                    let Some(behaviours) = behaviours.upgrade() else {
                        return;
                    };
                    let behaviour = behaviours.borrow()[view.index()].clone();
                    behaviour.on_click();
                }),
            )
        });
        Self {
            host,
            views,
            behaviours,
            pending: RefCell::new(Default::default()),
        }
    }

    pub fn host(&self) -> Option<Rc<dyn FieldHost>> {
        self.host.upgrade()
    }

    pub fn virtual_views(&self) -> &[Rc<VirtualView>; 4] {
        &self.views
    }

    pub fn virtual_view(&self, slot: Slot) -> &Rc<VirtualView> {
        &self.views[slot.index()]
    }

    pub fn drawable(&self, slot: Slot) -> Option<Rc<StatefulDrawable>> {
        self.views[slot.index()].drawable()
    }

    /// Installs decorations, left/top/right/bottom. Each is wrapped so that
    /// its state comes only from its slot, handed to the host, then laid out.
    pub fn set_compound_drawables(&self, drawables: Drawables) {
        let wrapped: [Option<Rc<StatefulDrawable>>; 4] =
            drawables.map(|d| d.map(StatefulDrawable::wrap));
        for (view, d) in self.views.iter().zip(wrapped.iter()) {
            view.set_drawable(d.clone());
        }
        if let Some(host) = self.host() {
            host.set_compound_drawables(wrapped);
            host.request_layout();
        }
        self.on_layout();
    }

    /// Installs decorations given as start/top/end/bottom.
    pub fn set_compound_drawables_relative(&self, drawables: Drawables) {
        let Some(host) = self.host() else {
            return;
        };
        self.set_compound_drawables(resolve_relative(drawables, host.layout_direction()));
    }

    /// Queues a decoration to install on [`Self::on_attached_to_window`],
    /// overriding what the host has in that slot at the time.
    pub fn set_pending_drawable(&self, slot: RelativeSlot, drawable: Option<Rc<dyn Drawable>>) {
        self.pending.borrow_mut()[slot as usize] = drawable;
    }

    pub fn has_pending_drawables(&self) -> bool {
        self.pending.borrow().iter().any(Option::is_some)
    }

    /// Merges pending decorations with the host's current ones and installs
    /// the result through the relative path.
    pub fn on_attached_to_window(&self) {
        let Some(host) = self.host() else {
            return;
        };
        let dir = host.layout_direction();
        // host order is physical; bring it into relative order first
        let mut merged = resolve_relative(host.compound_drawables(), dir);
        let pending = std::mem::take(&mut *self.pending.borrow_mut());
        for (slot, d) in merged.iter_mut().zip(pending) {
            if d.is_some() {
                *slot = d;
            }
        }
        self.set_compound_drawables_relative(merged);
    }

    /// Assigns each slot its rect from the host geometry and refreshes its
    /// state.
    pub fn on_layout(&self) {
        let Some(host) = self.host() else {
            return;
        };
        let metrics = HostMetrics::of(&*host);
        for (view, layout) in self.views.iter().zip(CompoundLayout::ALL) {
            view.layout(&layout, &metrics);
            view.invalidate_drawable_state();
        }
    }

    /// Offers a pointer event to the slots in left, top, right, bottom order.
    /// Returns `true` if a slot consumed it; the host must not handle it then.
    pub fn dispatch_touch_event(&self, event: &PointerEvent) -> bool {
        let Some(host) = self.host() else {
            return false;
        };
        // a disabled host still lets a press in flight end
        let ends_press = matches!(
            event.event,
            PointerEventKind::Cancel | PointerEventKind::Outside
        );
        if !host.is_enabled() && !ends_press {
            return false;
        }
        log::trace!("{} touch {}", host.debug_name(), event.short());
        self.views.iter().any(|v| v.on_touch_event(event))
    }

    /// The host's drawable state changed (focus, enabled, status, custom
    /// states): recompute every slot.
    pub fn drawable_state_changed(&self) {
        let enabled = self.host().is_some_and(|h| h.is_enabled());
        for view in &self.views {
            if !enabled {
                view.release_press();
            }
            view.invalidate_drawable_state();
        }
    }

    /// Redraw while a slot is held, for drawables animating their pressed
    /// state.
    pub fn set_refresh_while_pressed(&self, enabled: bool) {
        for view in &self.views {
            view.set_refresh_while_pressed(enabled);
        }
    }

    pub fn compound_drawable_behaviour(&self, slot: Slot) -> Rc<dyn Behaviour> {
        self.behaviours.borrow()[slot.index()].clone()
    }

    /// Replaces the behaviour of a slot. The old one is detached before the
    /// new one is attached.
    #[doc(alias = "set_compound_drawable_click_strategy")]
    pub fn set_compound_drawable_behaviour(&self, slot: Slot, behaviour: Rc<dyn Behaviour>) {
        let view = &self.views[slot.index()];
        let old = std::mem::replace(
            &mut self.behaviours.borrow_mut()[slot.index()],
            NoneBehaviour::shared(),
        );
        old.on_detach();
        behaviour.on_attach(view);
        view.set_checkable(behaviour.is_checkable());
        if !behaviour.is_checkable() {
            view.set_checked(false);
        }
        self.behaviours.borrow_mut()[slot.index()] = behaviour;
        view.invalidate_drawable_state();
    }

    pub fn set_compound_drawable_behaviour_relative(
        &self,
        slot: RelativeSlot,
        behaviour: Rc<dyn Behaviour>,
    ) {
        let Some(host) = self.host() else {
            return;
        };
        self.set_compound_drawable_behaviour(slot.resolve(host.layout_direction()), behaviour);
    }

    /// Detaches every behaviour, e.g. before the host goes away.
    pub fn clear_behaviours(&self) {
        for slot in Slot::ALL {
            self.set_compound_drawable_behaviour(slot, NoneBehaviour::shared());
        }
    }

    pub fn accessibility(&self) -> AccessibilityDelegate<'_> {
        AccessibilityDelegate::new(self)
    }
}
