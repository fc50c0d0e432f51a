// heapcheck - heapcheck-error
// Module: Error Handling
// SW-REQ-ID: REQ_ERROR_001
//
// Copyright (c) 2025 The Heapcheck Project Developers
// Licensed under the MIT license.
// SPDX-License-Identifier: MIT

//! Heapcheck error handling library
//!
//! Every failure in heapcheck is described by a [`Error`] carrying an
//! [`ErrorCategory`], a stable numeric code from [`codes`], and a
//! human-readable message.
//!
//! # Error Categories
//!
//! ## Parameter Errors (5000-5099)
//! - A heap size option is invalid for the current target (run mode)
//!
//! ## Build Errors (6000-6099)
//! - The image build was aborted because of a misconfiguration (build mode)
//!
//! ## Parse and Configuration Errors (7000-7199)
//! - Malformed size literals
//! - Inconsistent configuration documents
//!
//! # Usage
//!
//! ```
//! use heapcheck_error::{codes, Error, ErrorCategory};
//!
//! let error = Error::invalid_argument("The specified maximum heap size (8g) is too large.");
//! assert_eq!(error.category, ErrorCategory::Parameter);
//! assert_eq!(error.code, codes::INVALID_ARGUMENT);
//! assert!(error.is_invalid_argument());
//! ```

#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)] // Rule 2
#![deny(clippy::all)]
#![warn(clippy::pedantic)]
#![deny(missing_docs)]
#![allow(clippy::module_name_repetitions)]

extern crate alloc;

/// Error codes for heapcheck
pub mod codes;
/// Error and error handling types
pub mod errors;
pub mod helpers;

pub use errors::{Error, ErrorCategory};
pub use helpers::*;

/// A specialized `Result` type for heapcheck operations.
pub type Result<T> = core::result::Result<T, Error>;

/// Error conversion trait for converting to specific error categories
///
/// Implemented by the error types of the higher layers so they can be
/// classified without matching on their variants.
pub trait ToErrorCategory {
    /// Convert the error to a specific category
    fn to_category(&self) -> ErrorCategory;
}
