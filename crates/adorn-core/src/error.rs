use thiserror::Error;

/// A slot index outside `0..4`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
#[error("slot index {0} out of range (expected 0..4)")]
pub struct SlotIndexError(pub usize);
