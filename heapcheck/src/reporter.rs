// heapcheck - heapcheck
// Module: Error Reporting
// SW-REQ-ID: REQ_HEAP_003
//
// Copyright (c) 2025 The Heapcheck Project Developers
// Licensed under the MIT license.
// SPDX-License-Identifier: MIT

//! Turns violations into errors on the channel the execution mode demands.
//!
//! While an image is being built a violation aborts the build; inside a
//! running image it becomes a recoverable invalid argument error. The
//! message is the same in both modes.

use alloc::string::ToString;
use core::fmt;

use heapcheck_error::{Error, Result};
use tracing::debug;

use crate::validation::{ValidationOutcome, Violation};

/// Where the verification runs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ExecutionMode {
    /// Ahead-of-time image build
    Build,
    /// The built image running as a normal process
    Run,
}

impl ExecutionMode {
    /// Lower-case name of the mode
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Build => "build",
            Self::Run => "run",
        }
    }
}

impl fmt::Display for ExecutionMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Reports violations according to a fixed [`ExecutionMode`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ErrorReporter {
    mode: ExecutionMode,
}

impl ErrorReporter {
    /// Create a reporter for the given mode
    #[must_use]
    pub const fn new(mode: ExecutionMode) -> Self {
        Self { mode }
    }

    /// The mode this reporter was created for
    #[must_use]
    pub const fn mode(&self) -> ExecutionMode {
        self.mode
    }

    /// Convert a violation into the error for this mode.
    #[must_use]
    pub fn report(&self, violation: &Violation) -> Error {
        let message = violation.to_string();
        debug!(mode = self.mode.as_str(), "Reporting violation: {}", message);
        match self.mode {
            ExecutionMode::Build => Error::build_aborted(message),
            ExecutionMode::Run => Error::invalid_argument(message),
        }
    }

    /// Pass valid outcomes through and report invalid ones.
    pub fn check(&self, outcome: ValidationOutcome) -> Result<()> {
        match outcome {
            ValidationOutcome::Valid => Ok(()),
            ValidationOutcome::Invalid(violation) => Err(self.report(&violation)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{size::ByteSize, validation::Quantity};

    fn violation() -> Violation {
        Violation {
            actual:      ByteSize::gib(2),
            actual_name: Quantity::MinHeapSize,
            limit:       ByteSize::gib(1),
            limit_name:  Quantity::MaxHeapSize,
        }
    }

    #[test]
    fn test_build_mode_aborts() {
        let error = ErrorReporter::new(ExecutionMode::Build).report(&violation());
        assert!(error.is_build_abort());
    }

    #[test]
    fn test_run_mode_raises_invalid_argument() {
        let error = ErrorReporter::new(ExecutionMode::Run).report(&violation());
        assert!(error.is_invalid_argument());
    }

    #[test]
    fn test_message_is_mode_independent() {
        let build = ErrorReporter::new(ExecutionMode::Build).report(&violation());
        let run = ErrorReporter::new(ExecutionMode::Run).report(&violation());
        assert_eq!(build.message(), run.message());
    }

    #[test]
    fn test_valid_outcome_passes() {
        assert!(ErrorReporter::new(ExecutionMode::Build).check(ValidationOutcome::Valid).is_ok());
        assert_eq!(ExecutionMode::Run.to_string(), "run");
    }
}
