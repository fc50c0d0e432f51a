// heapcheck - heapcheck-platform
// Module: Library Root
// SW-REQ-ID: REQ_PLATFORM_001
//
// Copyright (c) 2025 The Heapcheck Project Developers
// Licensed under the MIT license.
// SPDX-License-Identifier: MIT

//! Heapcheck platform layer.
//!
//! Provides the [`AddressSpaceLimitProvider`] trait through which the heap
//! verifier learns the largest address space the current target can ever
//! map, together with the providers used by the build pipeline and the
//! command-line front end.

#![no_std] // Rule: Enforce no_std
#![deny(missing_docs)] // Rule 9: Require documentation.
#![deny(clippy::panic)] // Rule 3: No panic!.
#![deny(clippy::unwrap_used)] // Rule 3: No unwrap.
#![deny(clippy::expect_used)] // Rule 3: No expect.
#![warn(clippy::pedantic)] // Rule 8: Enable pedantic lints.

pub mod address_space;

pub use address_space::{
    AddressSpaceLimitProvider, CompressedAddressSpace, FixedAddressSpace,
    PointerWidthAddressSpace, COMPRESSED_REFERENCE_BITS,
};
