// src/exit.rs
//! Standardized process exit codes for `newscheck`.
//!
//! Provides a stable contract for scripts and automation.

use std::process::Termination;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(i32)]
pub enum NewsCheckExit {
    /// Operation completed successfully (warnings may have been shown).
    Success = 0,
    /// Generic error (e.g. IO, config, export write).
    Error = 1,
    /// The uploaded file failed validation (empty, missing columns, unreadable).
    InvalidInput = 2,
}

impl NewsCheckExit {
    #[must_use]
    pub fn code(self) -> i32 {
        self as i32
    }
}

impl Termination for NewsCheckExit {
    fn report(self) -> std::process::ExitCode {
        #[allow(clippy::cast_sign_loss, clippy::cast_possible_truncation)]
        std::process::ExitCode::from(self.code() as u8)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn codes_are_distinct() {
        assert_eq!(NewsCheckExit::Success.code(), 0);
        assert_eq!(NewsCheckExit::Error.code(), 1);
        assert_eq!(NewsCheckExit::InvalidInput.code(), 2);
    }
}
