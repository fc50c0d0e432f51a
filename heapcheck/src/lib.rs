// heapcheck - heapcheck
// Module: Library Root
// SW-REQ-ID: REQ_HEAP_001
//
// Copyright (c) 2025 The Heapcheck Project Developers
// Licensed under the MIT license.
// SPDX-License-Identifier: MIT

//! Heap size option verification.
//!
//! Validates user-supplied heap sizing before it can cause silently wrong
//! behavior in the garbage collector:
//!
//! - every configured size must fit the largest address space the target
//!   can map,
//! - the minimum heap size must not exceed the maximum heap size,
//! - the maximum new generation size must not exceed the maximum heap size.
//!
//! The same checks run while an image is built and again when the image
//! starts. Failures abort the build in the first case and surface as
//! invalid argument errors in the second; the message is identical.
//!
//! ```
//! use heapcheck::{ByteSize, HeapOptions, HeapSizeVerifier};
//! use heapcheck_platform::FixedAddressSpace;
//!
//! let options = HeapOptions::new(ByteSize::gib(2), ByteSize::gib(1), ByteSize::ZERO);
//! let limit = FixedAddressSpace(ByteSize::gib(64).bytes());
//!
//! let error = HeapSizeVerifier::runtime(&limit).verify_heap_options(&options).unwrap_err();
//! assert!(error.is_invalid_argument());
//! assert_eq!(
//!     error.message(),
//!     "The specified minimum heap size (2g) must not be larger than the maximum heap size (1g)."
//! );
//! ```

#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]
#![deny(missing_docs)]
#![warn(clippy::pedantic)]

extern crate alloc;

pub mod hosted;
pub mod options;
pub mod reporter;
pub mod size;
pub mod validation;
pub mod verifier;

pub use heapcheck_error::{Error, ErrorCategory, Result};
pub use hosted::verify_hosted_heap_options;
pub use options::HeapOptions;
pub use reporter::{ErrorReporter, ExecutionMode};
pub use size::ByteSize;
pub use validation::{
    check_against_address_space, check_ordering, Quantity, ValidationOutcome, Violation,
};
pub use verifier::HeapSizeVerifier;
