// heapcheck - heapcheck
// Module: Validation Primitives
// SW-REQ-ID: REQ_HEAP_001
//
// Copyright (c) 2025 The Heapcheck Project Developers
// Licensed under the MIT license.
// SPDX-License-Identifier: MIT

//! The two comparison primitives every heap check is built from.
//!
//! Both are pure: they compare their arguments and describe a violation,
//! leaving the decision of how to report it to
//! [`ErrorReporter`](crate::reporter::ErrorReporter).

use core::fmt;

use crate::size::ByteSize;

/// A named quantity that can appear in a violation message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Quantity {
    /// The minimum heap size option
    MinHeapSize,
    /// The maximum heap size option
    MaxHeapSize,
    /// The maximum young generation size option
    MaxNewSize,
    /// The largest address space the target can map
    AddressSpace,
}

impl Quantity {
    /// The label used in user-facing messages
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::MinHeapSize => "minimum heap size",
            Self::MaxHeapSize => "maximum heap size",
            Self::MaxNewSize => "maximum new generation size",
            Self::AddressSpace => "largest possible address space",
        }
    }
}

impl fmt::Display for Quantity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A value that is larger than the limit it must respect.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Violation {
    /// The offending value
    pub actual:      ByteSize,
    /// What the offending value is
    pub actual_name: Quantity,
    /// The limit that was exceeded
    pub limit:       ByteSize,
    /// What the limit is
    pub limit_name:  Quantity,
}

impl fmt::Display for Violation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "The specified {} ({}) must not be larger than the {} ({}).",
            self.actual_name, self.actual, self.limit_name, self.limit
        )
    }
}

/// Result of a single check, consumed immediately by the reporter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationOutcome {
    /// The check passed
    Valid,
    /// The check failed
    Invalid(Violation),
}

impl ValidationOutcome {
    /// Whether the check passed
    #[must_use]
    pub const fn is_valid(&self) -> bool {
        matches!(self, Self::Valid)
    }

    /// The violation, if the check failed
    #[must_use]
    pub const fn violation(&self) -> Option<&Violation> {
        match self {
            Self::Valid => None,
            Self::Invalid(violation) => Some(violation),
        }
    }
}

/// Compare a size option with the address space limit.
///
/// Zero is not treated specially here; it trivially fits.
#[must_use]
pub const fn check_against_address_space(
    actual: ByteSize,
    actual_name: Quantity,
    address_space_size: ByteSize,
) -> ValidationOutcome {
    if actual.above_than(address_space_size) {
        ValidationOutcome::Invalid(Violation {
            actual,
            actual_name,
            limit: address_space_size,
            limit_name: Quantity::AddressSpace,
        })
    } else {
        ValidationOutcome::Valid
    }
}

/// Compare a size option with the maximum heap size.
///
/// A zero `max_heap_size` is the "unset" sentinel and disables the check.
#[must_use]
pub const fn check_ordering(
    actual: ByteSize,
    actual_name: Quantity,
    max_heap_size: ByteSize,
) -> ValidationOutcome {
    if !max_heap_size.is_zero() && actual.above_than(max_heap_size) {
        ValidationOutcome::Invalid(Violation {
            actual,
            actual_name,
            limit: max_heap_size,
            limit_name: Quantity::MaxHeapSize,
        })
    } else {
        ValidationOutcome::Valid
    }
}
