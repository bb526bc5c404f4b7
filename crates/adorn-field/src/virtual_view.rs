use std::cell::{Cell, RefCell};
use std::fmt;
use std::rc::{Rc, Weak};
use std::time::Duration;

use adorn_core::{
    PointerEvent, PointerEventKind, Rect, Slot, StateCache, StateSet, Vec2, ViewStates,
    dump_states,
};

use crate::drawable::StatefulDrawable;
use crate::host::{FieldHost, HostMetrics};
use crate::layout::LayoutStrategy;

/// Interval of the redraw loop that runs while a slot is held down.
pub const PRESS_REFRESH_INTERVAL: Duration = Duration::from_millis(40);

pub type ClickListener = Rc<dyn Fn(&VirtualView)>;

/// One decoration slot of a field: its rect, its drawable, and the
/// interaction flags that make up its state set.
///
/// A slot without a drawable has an empty rect and ignores all touches.
pub struct VirtualView {
    slot: Slot,
    me: Weak<VirtualView>,
    host: Weak<dyn FieldHost>,
    rect: Cell<Rect>,
    drawable: RefCell<Option<Rc<StatefulDrawable>>>,
    pressed: Cell<bool>,
    checkable: Cell<bool>,
    checked: Cell<bool>,
    visible: Cell<bool>,
    cache: RefCell<StateCache>,
    on_click: ClickListener,
    refresh_while_pressed: Cell<bool>,
    refresh_pending: Cell<bool>,
    refresh_ticks: Cell<u64>,
}

impl fmt::Debug for VirtualView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("VirtualView")
            .field("slot", &self.slot)
            .field("rect", &self.rect.get())
            .field("has_drawable", &self.has_drawable())
            .field("pressed", &self.pressed.get())
            .field("checkable", &self.checkable.get())
            .field("checked", &self.checked.get())
            .field("visible", &self.visible.get())
            .finish()
    }
}

impl VirtualView {
    pub fn new(slot: Slot, host: Weak<dyn FieldHost>, on_click: ClickListener) -> Rc<Self> {
        Rc::new_cyclic(|me| Self {
            slot,
            me: me.clone(),
            host,
            rect: Cell::new(Rect::EMPTY),
            drawable: RefCell::new(None),
            pressed: Cell::new(false),
            checkable: Cell::new(false),
            checked: Cell::new(false),
            visible: Cell::new(true),
            cache: RefCell::new(StateCache::new()),
            on_click,
            refresh_while_pressed: Cell::new(false),
            refresh_pending: Cell::new(false),
            refresh_ticks: Cell::new(0),
        })
    }

    pub fn slot(&self) -> Slot {
        self.slot
    }

    pub fn index(&self) -> usize {
        self.slot.index()
    }

    /// `None` once the host has been dropped.
    pub fn host(&self) -> Option<Rc<dyn FieldHost>> {
        self.host.upgrade()
    }

    pub fn rect(&self) -> Rect {
        self.rect.get()
    }

    pub fn drawable(&self) -> Option<Rc<StatefulDrawable>> {
        self.drawable.borrow().clone()
    }

    pub fn has_drawable(&self) -> bool {
        self.drawable.borrow().is_some()
    }

    /// Replaces the drawable. Without one the rect collapses to empty; with
    /// one the rect is assigned on the next [`VirtualView::layout`].
    pub fn set_drawable(&self, drawable: Option<Rc<StatefulDrawable>>) {
        if let Some(d) = &drawable {
            d.set_visible(self.visible.get());
        } else {
            self.rect.set(Rect::EMPTY);
            self.pressed.set(false);
        }
        *self.drawable.borrow_mut() = drawable;
    }

    pub fn is_pressed(&self) -> bool {
        self.pressed.get()
    }

    /// Drops a press without clicking. The caller refreshes the state.
    pub(crate) fn release_press(&self) {
        self.pressed.set(false);
    }

    pub fn is_checkable(&self) -> bool {
        self.checkable.get()
    }

    pub fn set_checkable(&self, checkable: bool) {
        self.checkable.set(checkable);
    }

    pub fn is_checked(&self) -> bool {
        self.checked.get()
    }

    pub fn set_checked(&self, checked: bool) {
        self.checked.set(checked);
    }

    pub fn is_visible(&self) -> bool {
        self.visible.get()
    }

    /// Shows or hides the slot. Hidden slots keep their rect and drawable but
    /// are skipped by touch dispatch, accessibility and rendering.
    pub fn set_visible(&self, visible: bool) {
        if self.visible.replace(visible) == visible {
            return;
        }
        if !visible {
            self.pressed.set(false);
        }
        if let Some(d) = self.drawable() {
            d.set_visible(visible);
            d.jump_to_current_state();
        }
        if let Some(host) = self.host() {
            host.invalidate();
        }
    }

    pub fn is_enabled(&self) -> bool {
        self.host().is_some_and(|h| h.is_enabled())
    }

    /// Host focus, except for ripple drawables.
    pub fn is_focused(&self) -> bool {
        if self.drawable().is_some_and(|d| d.is_ripple()) {
            return false;
        }
        self.host().is_some_and(|h| h.is_focused())
    }

    pub fn is_in_error(&self) -> bool {
        self.host().is_some_and(|h| h.status().error())
    }

    pub fn is_in_success(&self) -> bool {
        self.host().is_some_and(|h| h.status().success())
    }

    pub fn view_states(&self) -> ViewStates {
        let mut flags = ViewStates::empty();
        flags.set(ViewStates::ENABLED, self.is_enabled());
        flags.set(ViewStates::FOCUSED, self.is_focused());
        flags.set(ViewStates::PRESSED, self.pressed.get());
        flags.set(ViewStates::CHECKABLE, self.checkable.get());
        flags.set(ViewStates::CHECKED, self.checkable.get() && self.checked.get());
        flags.set(ViewStates::ERROR, self.is_in_error());
        flags.set(ViewStates::SUCCESS, self.is_in_success());
        flags
    }

    /// Current state set: builtin predicates followed by the host's custom
    /// states. Equal inputs yield the same `Rc`.
    pub fn state(&self) -> StateSet {
        let custom = self.host().map(|h| h.custom_states()).unwrap_or_default();
        self.cache.borrow_mut().state_set(self.view_states(), &custom)
    }

    pub fn layout(&self, strategy: &dyn LayoutStrategy, metrics: &HostMetrics) {
        let rect = match self.drawable() {
            Some(d) => strategy.layout(d.intrinsic_size(), metrics),
            None => Rect::EMPTY,
        };
        self.rect.set(rect);
    }

    /// Pushes the current state set to the drawable and requests a redraw
    /// if its rendering changed.
    pub fn invalidate_drawable_state(&self) -> bool {
        let Some(drawable) = self.drawable() else {
            return false;
        };
        let state = self.state();
        let changed = drawable.push_state(&state);
        let host = self.host();
        log::debug!(
            "{}[{}] = State[{}]:'{}'",
            host.as_ref().map(|h| h.debug_name()).unwrap_or_default(),
            self.index(),
            u8::from(changed),
            dump_states(&state)
        );
        if changed && let Some(host) = host {
            host.invalidate();
        }
        changed
    }

    /// Handles one pointer event. Returns `true` if the slot consumed it.
    pub fn on_touch_event(&self, event: &PointerEvent) -> bool {
        if !self.visible.get() {
            return false;
        }
        let rect = self.rect.get();
        if rect.is_empty() {
            return false;
        }
        let Some(host) = self.host() else {
            return false;
        };
        let p = event.position;
        let inside = rect.contains_with_slop(p, host.touch_slop());
        match event.event {
            PointerEventKind::Down(_) => {
                if !inside {
                    return false;
                }
                self.dispatch_down(p);
                true
            }
            PointerEventKind::Move => {
                if !self.pressed.get() {
                    return false;
                }
                self.set_hotspot(p);
                if !inside {
                    self.dispatch_up(p, false);
                }
                true
            }
            PointerEventKind::Up(_) => {
                if !self.pressed.get() {
                    return false;
                }
                self.dispatch_up(p, inside);
                inside
            }
            PointerEventKind::Cancel | PointerEventKind::Outside => {
                self.dispatch_up(p, false);
                host.invalidate();
                false
            }
        }
    }

    fn dispatch_down(&self, p: Vec2) {
        self.pressed.set(true);
        self.set_hotspot(p);
        self.invalidate_drawable_state();
        self.schedule_press_refresh();
    }

    fn dispatch_up(&self, p: Vec2, click: bool) {
        self.pressed.set(false);
        self.set_hotspot(p);
        self.invalidate_drawable_state();
        if click && self.has_drawable() {
            (self.on_click)(self);
        }
    }

    fn set_hotspot(&self, p: Vec2) {
        if let Some(d) = self.drawable() {
            d.set_hotspot(self.rect.get().to_local(p));
        }
    }

    pub fn set_refresh_while_pressed(&self, enabled: bool) {
        self.refresh_while_pressed.set(enabled);
    }

    /// Redraws issued by the press refresh loop so far.
    pub fn refresh_ticks(&self) -> u64 {
        self.refresh_ticks.get()
    }

    fn schedule_press_refresh(&self) {
        if !self.refresh_while_pressed.get() || self.refresh_pending.get() {
            return;
        }
        let Some(host) = self.host() else {
            return;
        };
        self.refresh_pending.set(true);
        let me = self.me.clone();
        host.post_delayed(
            PRESS_REFRESH_INTERVAL,
            Box::new(move || {
                if let Some(view) = me.upgrade() {
                    view.on_press_refresh();
                }
            }),
        );
    }

    fn on_press_refresh(&self) {
        self.refresh_pending.set(false);
        if !self.pressed.get() {
            return;
        }
        if let Some(host) = self.host() {
            self.refresh_ticks.set(self.refresh_ticks.get() + 1);
            host.invalidate();
        }
        self.schedule_press_refresh();
    }
}
