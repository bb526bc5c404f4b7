//! # View state sets
//!
//! Drawables react to a *state set*: a vector of signed state ids where a
//! positive id means "in this state" and the negated id means "not in this
//! state".
//!
//! The builtin predicates are always emitted in this fixed order, which is
//! also the bit order of [`ViewStates`] and therefore part of the cache key:
//!
//! | bit | id                   | meaning                                  |
//! |-----|----------------------|------------------------------------------|
//! | 0   | [`state_id::ENABLED`]   | host is enabled                       |
//! | 1   | [`state_id::FOCUSED`]   | host has input focus (never for ripples) |
//! | 2   | [`state_id::PRESSED`]   | slot is pressed                       |
//! | 3   | [`state_id::CHECKABLE`] | slot behaviour is a toggle            |
//! | 4   | [`state_id::CHECKED`]   | toggle is on (only when checkable)    |
//! | 5   | [`state_id::ERROR`]     | host is in error                      |
//! | 6   | [`state_id::SUCCESS`]   | host is in success                    |
//!
//! Custom host states (see [`crate::CustomStateBag`]) follow the builtins in
//! registration order.
//!
//! [`StateCache`] memoizes one `Rc<[StateId]>` per distinct combination, so
//! equal flags always yield the *same* allocation and consumers can detect
//! "no change" with `Rc::ptr_eq`.

use std::collections::HashMap;
use std::rc::Rc;

use bitflags::bitflags;
use smallvec::SmallVec;

/// Identifier of a drawable state. Positive ids only; the sign carries
/// activity inside a [`StateSet`].
pub type StateId = i32;

/// Shared, immutable state vector pushed to drawables.
pub type StateSet = Rc<[StateId]>;

pub mod state_id {
    use super::StateId;

    pub const ENABLED: StateId = 1;
    pub const FOCUSED: StateId = 2;
    pub const PRESSED: StateId = 3;
    pub const CHECKABLE: StateId = 4;
    pub const CHECKED: StateId = 5;
    pub const ERROR: StateId = 6;
    pub const SUCCESS: StateId = 7;

    /// Highest id reserved for builtins; custom ids must be above it.
    pub const LAST_BUILTIN: StateId = SUCCESS;
}

bitflags! {
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
    pub struct ViewStates: u32 {
        const ENABLED = 1 << 0;
        const FOCUSED = 1 << 1;
        const PRESSED = 1 << 2;
        const CHECKABLE = 1 << 3;
        const CHECKED = 1 << 4;
        const ERROR = 1 << 5;
        const SUCCESS = 1 << 6;
    }
}

/// Builtin flags paired with their ids, in emission order.
const BUILTINS: [(ViewStates, StateId); 7] = [
    (ViewStates::ENABLED, state_id::ENABLED),
    (ViewStates::FOCUSED, state_id::FOCUSED),
    (ViewStates::PRESSED, state_id::PRESSED),
    (ViewStates::CHECKABLE, state_id::CHECKABLE),
    (ViewStates::CHECKED, state_id::CHECKED),
    (ViewStates::ERROR, state_id::ERROR),
    (ViewStates::SUCCESS, state_id::SUCCESS),
];

pub const BUILTIN_STATE_COUNT: usize = BUILTINS.len();

/// Upper bound for custom states per host (they share a `u32` cache key).
pub const MAX_CUSTOM_STATES: usize = 32;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
struct StateKey {
    flags: ViewStates,
    custom_len: u8,
    custom_mask: u32,
}

/// Lazily filled table of state sets, owned by one virtual view.
#[derive(Debug, Default)]
pub struct StateCache {
    entries: HashMap<StateKey, StateSet>,
}

impl StateCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the state set for `flags` followed by the signed `custom`
    /// values. Built once per distinct combination and reused afterwards.
    pub fn state_set(&mut self, flags: ViewStates, custom: &[StateId]) -> StateSet {
        assert!(
            custom.len() <= MAX_CUSTOM_STATES,
            "at most {MAX_CUSTOM_STATES} custom states are supported, got {}",
            custom.len()
        );
        let custom_mask = custom
            .iter()
            .enumerate()
            .fold(0u32, |acc, (i, v)| acc | (u32::from(*v > 0) << i));
        let key = StateKey {
            flags,
            custom_len: custom.len() as u8,
            custom_mask,
        };
        self.entries
            .entry(key)
            .or_insert_with(|| build_state_set(flags, custom))
            .clone()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }
}

fn build_state_set(flags: ViewStates, custom: &[StateId]) -> StateSet {
    let mut out: SmallVec<[StateId; 16]> = SmallVec::new();
    for (flag, id) in BUILTINS {
        out.push(if flags.contains(flag) { id } else { -id });
    }
    out.extend_from_slice(custom);
    Rc::from(out.as_slice())
}

pub fn is_builtin(id: StateId) -> bool {
    (1..=state_id::LAST_BUILTIN).contains(&id)
}

/// `true` when `id` is present with a positive sign.
pub fn has_state(set: &[StateId], id: StateId) -> bool {
    set.contains(&id)
}

fn builtin_name(id: StateId) -> Option<&'static str> {
    match id {
        state_id::ENABLED => Some("enabled"),
        state_id::FOCUSED => Some("focused"),
        state_id::PRESSED => Some("pressed"),
        state_id::CHECKABLE => Some("checkable"),
        state_id::CHECKED => Some("checked"),
        state_id::ERROR => Some("error"),
        state_id::SUCCESS => Some("success"),
        _ => None,
    }
}

/// Human readable form of a state set: active states upper case, inactive
/// ones lower case, custom ids as signed numbers.
pub fn dump_states(set: &[StateId]) -> String {
    set.iter()
        .map(|v| match builtin_name(v.abs()) {
            Some(name) if *v > 0 => name.to_uppercase(),
            Some(name) => name.to_string(),
            None => v.to_string(),
        })
        .collect::<Vec<_>>()
        .join(", ")
}
