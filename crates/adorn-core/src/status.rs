use serde::{Deserialize, Serialize};

/// Application-level validation flags of a field. At most one is set.
///
/// This is the only field state meant to survive host recreation; hosts
/// persist it as-is (two booleans).
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldStatus {
    #[serde(default)]
    error: bool,
    #[serde(default)]
    success: bool,
}

impl FieldStatus {
    pub const NEUTRAL: FieldStatus = FieldStatus {
        error: false,
        success: false,
    };

    pub fn error(&self) -> bool {
        self.error
    }

    pub fn success(&self) -> bool {
        self.success
    }

    /// Sets the error flag; turning it on clears success.
    /// Returns `true` when anything changed.
    pub fn set_error(&mut self, error: bool) -> bool {
        let before = *self;
        self.error = error;
        if error {
            self.success = false;
        }
        before != *self
    }

    /// Sets the success flag; turning it on clears error.
    /// Returns `true` when anything changed.
    pub fn set_success(&mut self, success: bool) -> bool {
        let before = *self;
        self.success = success;
        if success {
            self.error = false;
        }
        before != *self
    }

    /// Rebuilds a status from persisted flags. Error wins if both are set.
    pub fn restore(error: bool, success: bool) -> Self {
        let mut s = FieldStatus::NEUTRAL;
        s.set_success(success);
        s.set_error(error);
        s
    }
}
