// Copyright (c) 2025 The Heapcheck Project Developers
// Licensed under the MIT license.
// SPDX-License-Identifier: MIT

#![allow(clippy::unwrap_used)]
//! End-to-end heap option scenarios in both execution modes.

use heapcheck::{ByteSize, ExecutionMode, HeapOptions, HeapSizeVerifier};
use heapcheck_error::codes;
use heapcheck_platform::{CompressedAddressSpace, FixedAddressSpace};

const MIN_OVER_MAX: &str =
    "The specified minimum heap size (2g) must not be larger than the maximum heap size (1g).";

fn limit_64g() -> FixedAddressSpace {
    FixedAddressSpace(ByteSize::gib(64).bytes())
}

#[test]
#[cfg(target_pointer_width = "64")]
fn min_above_max_fails_check_four() {
    let options = HeapOptions::new(ByteSize::gib(2), ByteSize::gib(1), ByteSize::ZERO);
    let limit = limit_64g();

    let error = HeapSizeVerifier::runtime(&limit).verify_heap_options(&options).unwrap_err();
    assert_eq!(error.message(), MIN_OVER_MAX);
    assert_eq!(error.code, codes::INVALID_ARGUMENT);
}

#[test]
fn check_four_reported_before_check_five() {
    // Both orderings are violated; only the minimum heap size is reported.
    let options = HeapOptions::new(ByteSize::gib(2), ByteSize::gib(1), ByteSize::gib(3));
    let limit = FixedAddressSpace(usize::MAX);

    let error = HeapSizeVerifier::runtime(&limit).verify_heap_options(&options).unwrap_err();
    assert_eq!(error.message(), MIN_OVER_MAX);
}

#[test]
fn max_new_above_max_fails_check_five() {
    let options = HeapOptions::new(ByteSize::mib(64), ByteSize::gib(1), ByteSize::gib(2));
    let limit = FixedAddressSpace(usize::MAX);

    let error = HeapSizeVerifier::runtime(&limit).verify_heap_options(&options).unwrap_err();
    assert_eq!(
        error.message(),
        "The specified maximum new generation size (2g) must not be larger than the maximum heap size (1g)."
    );
}

#[test]
fn all_unset_passes_for_any_limit() {
    let options = HeapOptions::default();
    for limit in [0, 1, 1024, usize::MAX] {
        let provider = FixedAddressSpace(limit);
        for mode in [ExecutionMode::Build, ExecutionMode::Run] {
            assert!(HeapSizeVerifier::new(mode, &provider).verify_heap_options(&options).is_ok());
        }
    }
}

#[test]
fn same_inputs_same_message_in_both_modes() {
    let options = HeapOptions::new(ByteSize::gib(2), ByteSize::gib(1), ByteSize::ZERO);
    let limit = FixedAddressSpace(usize::MAX);

    let build = HeapSizeVerifier::hosted(&limit).verify_heap_options(&options).unwrap_err();
    let run = HeapSizeVerifier::runtime(&limit).verify_heap_options(&options).unwrap_err();

    assert!(build.is_build_abort());
    assert!(run.is_invalid_argument());
    assert_eq!(build.message(), MIN_OVER_MAX);
    assert_eq!(run.message(), MIN_OVER_MAX);
}

#[test]
fn sizes_equal_to_address_space_pass_and_one_more_fails() {
    let limit = ByteSize::mib(512);
    let provider = FixedAddressSpace(limit.bytes());
    let verifier = HeapSizeVerifier::runtime(&provider);

    let at_limit = HeapOptions::new(limit, limit, limit);
    assert!(verifier.verify_heap_options(&at_limit).is_ok());

    let above = ByteSize::new(limit.bytes() + 1);
    let error = verifier
        .verify_heap_options(&HeapOptions::new(limit, ByteSize::ZERO, above))
        .unwrap_err();
    assert_eq!(
        error.message(),
        "The specified maximum new generation size (536870913) must not be larger than the largest possible address space (512m)."
    );
}

#[test]
#[cfg(target_pointer_width = "64")]
fn compressed_references_bound_the_heap() {
    let provider = CompressedAddressSpace::new(3);
    let options = HeapOptions::new(ByteSize::gib(1), ByteSize::gib(48), ByteSize::ZERO);

    let error = HeapSizeVerifier::hosted(&provider).verify_heap_options(&options).unwrap_err();
    assert!(error.is_build_abort());
    assert_eq!(
        error.message(),
        "The specified maximum heap size (48g) must not be larger than the largest possible address space (32g)."
    );
}

#[test]
fn verifier_is_shareable_across_threads() {
    let provider = FixedAddressSpace(usize::MAX);
    let verifier = HeapSizeVerifier::runtime(&provider);
    let good = HeapOptions::new(ByteSize::mib(16), ByteSize::mib(64), ByteSize::mib(32));
    let bad = HeapOptions::new(ByteSize::mib(128), ByteSize::mib(64), ByteSize::ZERO);

    std::thread::scope(|scope| {
        let handles: Vec<_> = (0..8)
            .map(|i| {
                let options = if i % 2 == 0 { good } else { bad };
                scope.spawn(move || verifier.verify_heap_options(&options).is_ok())
            })
            .collect();
        for (i, handle) in handles.into_iter().enumerate() {
            assert_eq!(handle.join().unwrap(), i % 2 == 0);
        }
    });
}
