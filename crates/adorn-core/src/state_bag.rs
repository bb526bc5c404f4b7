use smallvec::SmallVec;

use crate::states::{MAX_CUSTOM_STATES, StateId, is_builtin};

/// Extra boolean states a host contributes to every slot's state set.
///
/// The key set is written once via [`CustomStates::register_custom_states`];
/// afterwards only values change. Misuse is a programming error and panics.
pub trait CustomStates {
    /// Registers the custom state ids, all initially inactive.
    ///
    /// # Panics
    /// When called a second time, or when an id is non-positive, collides
    /// with a builtin id, is duplicated, or there are more than
    /// [`MAX_CUSTOM_STATES`] ids.
    fn register_custom_states(&mut self, states: &[StateId]);

    /// Sets one registered state. Returns `true` when the value changed.
    ///
    /// # Panics
    /// When `id` was not registered.
    fn set_custom_state(&mut self, id: StateId, enabled: bool) -> bool;

    /// Sets several states from signed ids (`id` = on, `-id` = off).
    /// Returns `true` when any value changed.
    ///
    /// # Panics
    /// When any `abs(id)` was not registered.
    fn set_custom_states(&mut self, states: &[StateId]) -> bool;

    /// Signed values of all registered states, in registration order.
    fn custom_states(&self) -> SmallVec<[StateId; 8]>;

    fn custom_state_count(&self) -> usize;
}

#[derive(Clone, Debug, Default)]
pub struct CustomStateBag {
    registered: bool,
    // registration order matters, so no map here
    entries: Vec<(StateId, bool)>,
}

impl CustomStateBag {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_registered(&self) -> bool {
        self.registered
    }

    fn entry_mut(&mut self, id: StateId) -> &mut (StateId, bool) {
        match self.entries.iter_mut().find(|(k, _)| *k == id) {
            Some(e) => e,
            None => panic!("custom state {id} has not been registered"),
        }
    }
}

impl CustomStates for CustomStateBag {
    fn register_custom_states(&mut self, states: &[StateId]) {
        assert!(
            !self.registered,
            "custom states have already been registered ({} states)",
            self.entries.len()
        );
        assert!(
            states.len() <= MAX_CUSTOM_STATES,
            "at most {MAX_CUSTOM_STATES} custom states are supported, got {}",
            states.len()
        );
        for (i, &id) in states.iter().enumerate() {
            assert!(id > 0, "custom state ids must be positive, got {id}");
            assert!(!is_builtin(id), "custom state {id} collides with a builtin state");
            assert!(
                !states[..i].contains(&id),
                "custom state {id} registered twice"
            );
        }
        self.entries = states.iter().map(|&id| (id, false)).collect();
        self.registered = true;
        log::debug!("registered custom states {states:?}");
    }

    fn set_custom_state(&mut self, id: StateId, enabled: bool) -> bool {
        let entry = self.entry_mut(id);
        let changed = entry.1 != enabled;
        entry.1 = enabled;
        changed
    }

    fn set_custom_states(&mut self, states: &[StateId]) -> bool {
        let mut changed = false;
        for &v in states {
            changed |= self.set_custom_state(v.abs(), v > 0);
        }
        changed
    }

    fn custom_states(&self) -> SmallVec<[StateId; 8]> {
        self.entries
            .iter()
            .map(|&(id, on)| if on { id } else { -id })
            .collect()
    }

    fn custom_state_count(&self) -> usize {
        self.entries.len()
    }
}
