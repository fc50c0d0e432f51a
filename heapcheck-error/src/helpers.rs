// heapcheck - heapcheck-error
// Module: Error Helpers
// SW-REQ-ID: REQ_ERROR_001
//
// Copyright (c) 2025 The Heapcheck Project Developers
// Licensed under the MIT license.
// SPDX-License-Identifier: MIT

//! Error helper functions for common error patterns.

use crate::{codes, Error, ErrorCategory};

/// Create an error for a size literal that does not fit the word width
#[must_use]
pub const fn size_literal_overflow_error() -> Error {
    Error {
        category: ErrorCategory::Parse,
        code:     codes::SIZE_LITERAL_OVERFLOW,
        message:  alloc::borrow::Cow::Borrowed("Size literal exceeds the target word width"),
    }
}

/// Create an error for a build feature invoked outside of its phase
#[must_use]
pub const fn build_phase_error(message: &'static str) -> Error {
    Error {
        category: ErrorCategory::Build,
        code:     codes::BUILD_PHASE_ERROR,
        message:  alloc::borrow::Cow::Borrowed(message),
    }
}
