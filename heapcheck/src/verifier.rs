// heapcheck - heapcheck
// Module: Heap Size Verifier
// SW-REQ-ID: REQ_HEAP_001
//
// Copyright (c) 2025 The Heapcheck Project Developers
// Licensed under the MIT license.
// SPDX-License-Identifier: MIT

//! Verification of heap size options against the address space and each
//! other.
//!
//! [`HeapSizeVerifier::verify_heap_options`] runs five checks in a fixed
//! order and stops at the first failure:
//!
//! 1. maximum heap size against the address space
//! 2. minimum heap size against the address space
//! 3. maximum new generation size against the address space
//! 4. minimum heap size against the maximum heap size
//! 5. maximum new generation size against the maximum heap size
//!
//! Each check is also available on its own for callers that change a single
//! option after startup.

use heapcheck_error::Result;
use heapcheck_platform::AddressSpaceLimitProvider;
use tracing::{debug, trace};

use crate::{
    options::HeapOptions,
    reporter::{ErrorReporter, ExecutionMode},
    size::ByteSize,
    validation::{check_against_address_space, check_ordering, Quantity},
};

/// Runs heap size checks and reports failures for one execution mode.
///
/// The verifier holds no state besides the mode and the provider, so one
/// instance can be shared between threads.
#[derive(Clone, Copy)]
pub struct HeapSizeVerifier<'p> {
    provider: &'p dyn AddressSpaceLimitProvider,
    reporter: ErrorReporter,
}

impl core::fmt::Debug for HeapSizeVerifier<'_> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("HeapSizeVerifier")
            .field("mode", &self.reporter.mode())
            .finish_non_exhaustive()
    }
}

impl<'p> HeapSizeVerifier<'p> {
    /// Create a verifier for the given mode and address space provider
    #[must_use]
    pub fn new(mode: ExecutionMode, provider: &'p dyn AddressSpaceLimitProvider) -> Self {
        Self {
            provider,
            reporter: ErrorReporter::new(mode),
        }
    }

    /// Verifier that aborts the image build on failure
    #[must_use]
    pub fn hosted(provider: &'p dyn AddressSpaceLimitProvider) -> Self {
        Self::new(ExecutionMode::Build, provider)
    }

    /// Verifier that raises invalid argument errors on failure
    #[must_use]
    pub fn runtime(provider: &'p dyn AddressSpaceLimitProvider) -> Self {
        Self::new(ExecutionMode::Run, provider)
    }

    /// The execution mode failures are reported for
    #[must_use]
    pub const fn mode(&self) -> ExecutionMode {
        self.reporter.mode()
    }

    /// Query the provider; never cached.
    #[must_use]
    pub fn address_space_size(&self) -> ByteSize {
        let size = ByteSize::new(self.provider.max_address_space_size());
        trace!("Largest possible address space is {}", size);
        size
    }

    /// Run all five checks in order, stopping at the first failure.
    pub fn verify_heap_options(&self, options: &HeapOptions) -> Result<()> {
        debug!(
            mode = self.mode().as_str(),
            "Verifying heap options: min={} max={} new={}",
            options.min_heap_size,
            options.max_heap_size,
            options.max_new_size
        );

        self.verify_max_heap_size_against_address_space(options.max_heap_size)?;
        self.verify_min_heap_size_against_address_space(options.min_heap_size)?;
        self.verify_max_new_size_against_address_space(options.max_new_size)?;
        self.verify_min_heap_size_against_max_heap_size(options.min_heap_size, options.max_heap_size)?;
        self.verify_max_new_size_against_max_heap_size(options.max_new_size, options.max_heap_size)
    }

    /// Check 1: the maximum heap size fits the address space
    pub fn verify_max_heap_size_against_address_space(&self, max_heap_size: ByteSize) -> Result<()> {
        self.verify_against_address_space(max_heap_size, Quantity::MaxHeapSize)
    }

    /// Check 2: the minimum heap size fits the address space
    pub fn verify_min_heap_size_against_address_space(&self, min_heap_size: ByteSize) -> Result<()> {
        self.verify_against_address_space(min_heap_size, Quantity::MinHeapSize)
    }

    /// Check 3: the maximum new generation size fits the address space
    pub fn verify_max_new_size_against_address_space(&self, max_new_size: ByteSize) -> Result<()> {
        self.verify_against_address_space(max_new_size, Quantity::MaxNewSize)
    }

    /// Check 4: the minimum heap size does not exceed a set maximum heap size
    pub fn verify_min_heap_size_against_max_heap_size(
        &self,
        min_heap_size: ByteSize,
        max_heap_size: ByteSize,
    ) -> Result<()> {
        debug!("Checking {} against {}", Quantity::MinHeapSize, Quantity::MaxHeapSize);
        self.reporter
            .check(check_ordering(min_heap_size, Quantity::MinHeapSize, max_heap_size))
    }

    /// Check 5: the maximum new generation size does not exceed a set maximum
    /// heap size
    pub fn verify_max_new_size_against_max_heap_size(
        &self,
        max_new_size: ByteSize,
        max_heap_size: ByteSize,
    ) -> Result<()> {
        debug!("Checking {} against {}", Quantity::MaxNewSize, Quantity::MaxHeapSize);
        self.reporter
            .check(check_ordering(max_new_size, Quantity::MaxNewSize, max_heap_size))
    }

    fn verify_against_address_space(&self, actual: ByteSize, name: Quantity) -> Result<()> {
        debug!("Checking {} against {}", name, Quantity::AddressSpace);
        let address_space_size = self.address_space_size();
        self.reporter
            .check(check_against_address_space(actual, name, address_space_size))
    }
}
