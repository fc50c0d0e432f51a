// heapcheck - heapcheck-platform
// Module: Address Space Limits
// SW-REQ-ID: REQ_PLATFORM_001, REQ_MEMORY_001
//
// Copyright (c) 2025 The Heapcheck Project Developers
// Licensed under the MIT license.
// SPDX-License-Identifier: MIT

//! Address space limit discovery.
//!
//! A provider answers a single question: what is the largest byte range any
//! heap size option could legally describe on the current target. The
//! answer depends on the architecture and on the reference mode (raw
//! pointers versus compressed references), so callers must query it on
//! every check instead of caching it.

use core::fmt::Debug;

/// Width in bits of a compressed reference before shifting
pub const COMPRESSED_REFERENCE_BITS: u32 = 32;

/// Trait for address space limit providers
pub trait AddressSpaceLimitProvider: Send + Sync {
    /// Largest address space size, in bytes, that the target can represent.
    fn max_address_space_size(&self) -> usize;
}

/// Uncompressed references: the full native pointer range.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PointerWidthAddressSpace;

impl AddressSpaceLimitProvider for PointerWidthAddressSpace {
    fn max_address_space_size(&self) -> usize {
        usize::MAX
    }
}

/// Compressed references relative to a heap base.
///
/// A 32-bit reference shifted left by `shift` bits reaches
/// `2^(32 + shift)` bytes, saturated at the native pointer range.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CompressedAddressSpace {
    /// Object alignment shift applied when decoding a reference
    pub shift: u32,
}

impl CompressedAddressSpace {
    /// Create a provider for the given reference shift
    #[must_use]
    pub const fn new(shift: u32) -> Self {
        Self { shift }
    }
}

impl AddressSpaceLimitProvider for CompressedAddressSpace {
    fn max_address_space_size(&self) -> usize {
        let bits = COMPRESSED_REFERENCE_BITS.saturating_add(self.shift);
        if bits >= usize::BITS {
            usize::MAX
        } else {
            1usize << bits
        }
    }
}

/// A constant limit, used for explicit overrides.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedAddressSpace(pub usize);

impl AddressSpaceLimitProvider for FixedAddressSpace {
    fn max_address_space_size(&self) -> usize {
        self.0
    }
}

impl<F> AddressSpaceLimitProvider for F
where
    F: Fn() -> usize + Send + Sync,
{
    fn max_address_space_size(&self) -> usize {
        self()
    }
}
