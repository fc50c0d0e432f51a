// heapcheck - heapcheck
// Module: Heap Size Options
// SW-REQ-ID: REQ_HEAP_001
//
// Copyright (c) 2025 The Heapcheck Project Developers
// Licensed under the MIT license.
// SPDX-License-Identifier: MIT

//! The three user-configurable heap size options.

use crate::size::ByteSize;

/// Already-parsed heap size options.
///
/// A zero `max_heap_size` or `max_new_size` means "unset / no cap".
/// `min_heap_size` has no unset value.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default, rename_all = "kebab-case", deny_unknown_fields))]
pub struct HeapOptions {
    /// Minimum heap size
    pub min_heap_size: ByteSize,
    /// Maximum heap size, zero when unset
    pub max_heap_size: ByteSize,
    /// Maximum young generation size, zero when unset
    pub max_new_size:  ByteSize,
}

impl HeapOptions {
    /// Create options from the three sizes
    #[must_use]
    pub const fn new(min_heap_size: ByteSize, max_heap_size: ByteSize, max_new_size: ByteSize) -> Self {
        Self {
            min_heap_size,
            max_heap_size,
            max_new_size,
        }
    }

    /// Replace the minimum heap size
    #[must_use]
    pub const fn with_min_heap_size(mut self, size: ByteSize) -> Self {
        self.min_heap_size = size;
        self
    }

    /// Replace the maximum heap size
    #[must_use]
    pub const fn with_max_heap_size(mut self, size: ByteSize) -> Self {
        self.max_heap_size = size;
        self
    }

    /// Replace the maximum young generation size
    #[must_use]
    pub const fn with_max_new_size(mut self, size: ByteSize) -> Self {
        self.max_new_size = size;
        self
    }

    /// Whether a maximum heap size was configured
    #[must_use]
    pub const fn has_max_heap_size(&self) -> bool {
        !self.max_heap_size.is_zero()
    }
}
