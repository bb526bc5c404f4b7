use std::cell::{Cell, RefCell};
use std::fmt;
use std::rc::Rc;

use adorn_core::{Size, StateId, StateSet, Vec2};

/// Something a host can render as a decoration: an icon, a ripple, a text
/// label. Rendering itself stays with the host; the subsystem only needs the
/// intrinsic size and forwards state, hotspot and visibility.
pub trait Drawable {
    fn intrinsic_size(&self) -> Size;

    /// Reacts to a new state set. Returns `true` if what the drawable renders
    /// changed (a redraw is needed). Stateless drawables keep the default.
    fn on_state_change(&self, _states: &[StateId]) -> bool {
        false
    }

    /// Touch position relative to the drawable, for ripple origins.
    fn set_hotspot(&self, _local: Vec2) {}

    /// Finishes running state transitions immediately.
    fn jump_to_current_state(&self) {}

    /// Ripple-style drawables render a persistent highlight when focused, so
    /// slots never report focus to them.
    fn is_ripple(&self) -> bool {
        false
    }
}

/// Wraps a decoration so that state changes only come from the subsystem.
///
/// While locked (the default), [`StatefulDrawable::set_state`] is ignored:
/// state the host would push incidentally (its own drawable-state refresh)
/// does not reach the inner drawable. [`StatefulDrawable::push_state`] always
/// goes through. Pushing the same `Rc` again is a no-op, which is what makes
/// repeated refreshes free.
pub struct StatefulDrawable {
    inner: Rc<dyn Drawable>,
    locked: Cell<bool>,
    visible: Cell<bool>,
    current: RefCell<Option<StateSet>>,
}

impl fmt::Debug for StatefulDrawable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("StatefulDrawable")
            .field("locked", &self.locked.get())
            .field("visible", &self.visible.get())
            .field("current", &self.current.borrow())
            .field("size", &self.inner.intrinsic_size())
            .finish()
    }
}

impl StatefulDrawable {
    pub fn wrap(inner: Rc<dyn Drawable>) -> Rc<Self> {
        Rc::new(Self {
            inner,
            locked: Cell::new(true),
            visible: Cell::new(true),
            current: RefCell::new(None),
        })
    }

    pub fn inner(&self) -> &Rc<dyn Drawable> {
        &self.inner
    }

    pub fn is_locked(&self) -> bool {
        self.locked.get()
    }

    pub fn set_locked(&self, locked: bool) {
        self.locked.set(locked);
    }

    /// External state push. Dropped while locked.
    pub fn set_state(&self, states: &StateSet) -> bool {
        if self.locked.get() {
            return false;
        }
        self.push_state(states)
    }

    /// The subsystem's own state push; ignores the lock.
    /// Returns `true` if the inner drawable's rendering changed.
    pub fn push_state(&self, states: &StateSet) -> bool {
        {
            let mut current = self.current.borrow_mut();
            if current.as_ref().is_some_and(|c| Rc::ptr_eq(c, states)) {
                return false;
            }
            *current = Some(states.clone());
        }
        self.inner.on_state_change(states)
    }

    pub fn state(&self) -> Option<StateSet> {
        self.current.borrow().clone()
    }

    pub fn intrinsic_size(&self) -> Size {
        self.inner.intrinsic_size()
    }

    pub fn set_hotspot(&self, local: Vec2) {
        self.inner.set_hotspot(local);
    }

    pub fn jump_to_current_state(&self) {
        self.inner.jump_to_current_state();
    }

    pub fn is_ripple(&self) -> bool {
        self.inner.is_ripple()
    }

    /// Hosts skip drawing invisible decorations.
    pub fn is_visible(&self) -> bool {
        self.visible.get()
    }

    pub(crate) fn set_visible(&self, visible: bool) {
        self.visible.set(visible);
    }
}
