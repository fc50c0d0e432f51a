// heapcheck - heapcheck
// Module: Build-Time Entry Point
// SW-REQ-ID: REQ_HEAP_004
//
// Copyright (c) 2025 The Heapcheck Project Developers
// Licensed under the MIT license.
// SPDX-License-Identifier: MIT

//! Entry point for image build pipelines.
//!
//! A pipeline calls [`verify_hosted_heap_options`] once, before analysing
//! the program, with the heap options resolved from the build flags. It is
//! the only caller that forces build-mode reporting; code running inside an
//! image uses [`HeapSizeVerifier::runtime`] instead.

use heapcheck_error::Result;
use heapcheck_platform::AddressSpaceLimitProvider;
use tracing::info;

use crate::{options::HeapOptions, verifier::HeapSizeVerifier};

/// Verify all heap options in build mode.
///
/// At build time this is a GC-independent sanity check of every heap size
/// setting. A failure is a build abort carrying the message for the
/// operator.
pub fn verify_hosted_heap_options(
    options: &HeapOptions,
    provider: &dyn AddressSpaceLimitProvider,
) -> Result<()> {
    HeapSizeVerifier::hosted(provider).verify_heap_options(options)?;
    info!(
        "Heap options verified: min={} max={} new={}",
        options.min_heap_size, options.max_heap_size, options.max_new_size
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use heapcheck_platform::FixedAddressSpace;

    use super::*;
    use crate::size::ByteSize;

    #[test]
    fn test_hosted_failure_is_build_abort() {
        let options = HeapOptions::new(ByteSize::gib(2), ByteSize::gib(1), ByteSize::ZERO);
        let error =
            verify_hosted_heap_options(&options, &FixedAddressSpace(ByteSize::gib(64).bytes()))
                .unwrap_err();
        assert!(error.is_build_abort());
    }

    #[test]
    fn test_hosted_success() {
        let options = HeapOptions::new(ByteSize::mib(256), ByteSize::gib(1), ByteSize::mib(512));
        assert!(verify_hosted_heap_options(&options, &FixedAddressSpace(usize::MAX)).is_ok());
    }
}
