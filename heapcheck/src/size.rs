// heapcheck - heapcheck
// Module: Byte Sizes
// SW-REQ-ID: REQ_HEAP_002
//
// Copyright (c) 2025 The Heapcheck Project Developers
// Licensed under the MIT license.
// SPDX-License-Identifier: MIT

//! Word-width byte quantities and their compact textual form.
//!
//! A [`ByteSize`] renders as the shortest `<integer><suffix>` literal that
//! still denotes the exact value, using the binary units `k`, `m`, `g` and
//! `t`. Parsing accepts the same literals, so formatting followed by parsing
//! reproduces every value.

use alloc::format;
use core::{fmt, str::FromStr};

use heapcheck_error::{size_literal_overflow_error, Error, Result};

/// Unit suffixes in ascending order of magnitude
const UNITS: [&str; 5] = ["", "k", "m", "g", "t"];

/// Factor between two consecutive units
const UNIT_FACTOR: usize = 1024;

/// One kibibyte
pub(crate) const KIB: usize = 1 << 10;
/// One mebibyte
pub(crate) const MIB: usize = 1 << 20;
/// One gibibyte
pub(crate) const GIB: usize = 1 << 30;

/// An unsigned, pointer-sized byte count.
///
/// Only comparison, division and remainder are ever applied, so no
/// operation on a `ByteSize` can underflow.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ByteSize(usize);

impl ByteSize {
    /// Zero bytes, also the "unset" value of optional limits
    pub const ZERO: Self = Self(0);

    /// Wrap a raw byte count
    #[must_use]
    pub const fn new(bytes: usize) -> Self {
        Self(bytes)
    }

    /// `n` kibibytes, saturating at the word width
    #[must_use]
    pub const fn kib(n: usize) -> Self {
        Self(n.saturating_mul(KIB))
    }

    /// `n` mebibytes, saturating at the word width
    #[must_use]
    pub const fn mib(n: usize) -> Self {
        Self(n.saturating_mul(MIB))
    }

    /// `n` gibibytes, saturating at the word width
    #[must_use]
    pub const fn gib(n: usize) -> Self {
        Self(n.saturating_mul(GIB))
    }

    /// The raw byte count
    #[must_use]
    pub const fn bytes(self) -> usize {
        self.0
    }

    /// Whether this is the zero sentinel
    #[must_use]
    pub const fn is_zero(self) -> bool {
        self.0 == 0
    }

    /// Unsigned "above" comparison; equal values are not above each other.
    #[must_use]
    pub const fn above_than(self, other: Self) -> bool {
        self.0 > other.0
    }
}

impl From<usize> for ByteSize {
    fn from(bytes: usize) -> Self {
        Self(bytes)
    }
}

impl From<ByteSize> for usize {
    fn from(size: ByteSize) -> Self {
        size.0
    }
}

impl fmt::Display for ByteSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut value = self.0;
        let mut index = 0;
        // Zero is divisible by anything; it stays at byte granularity.
        while value != 0 && value % UNIT_FACTOR == 0 && index < UNITS.len() - 1 {
            value /= UNIT_FACTOR;
            index += 1;
        }
        write!(f, "{value}{}", UNITS[index])
    }
}

/// Power of 1024 denoted by a lower-case unit suffix
fn unit_exponent(suffix: u8) -> Option<u32> {
    match suffix {
        b'k' => Some(1),
        b'm' => Some(2),
        b'g' => Some(3),
        b't' => Some(4),
        _ => None,
    }
}

impl FromStr for ByteSize {
    type Err = Error;

    fn from_str(literal: &str) -> Result<Self> {
        let (digits, exponent) = match literal.as_bytes().last() {
            Some(last) if last.is_ascii_alphabetic() => {
                let exponent = unit_exponent(last.to_ascii_lowercase()).ok_or_else(|| {
                    Error::invalid_size_literal(format!(
                        "Invalid size literal '{literal}': unknown unit suffix"
                    ))
                })?;
                (&literal[..literal.len() - 1], exponent)
            },
            _ => (literal, 0),
        };

        if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
            return Err(Error::invalid_size_literal(format!(
                "Invalid size literal '{literal}': expected <digits>[k|m|g|t]"
            )));
        }

        // Only digits remain, so the sole parse failure is overflow.
        let value: usize = digits.parse().map_err(|_| size_literal_overflow_error())?;
        let multiplier = 1u64
            .checked_shl(10 * exponent)
            .and_then(|m| usize::try_from(m).ok())
            .ok_or_else(size_literal_overflow_error)?;

        value
            .checked_mul(multiplier)
            .map(Self)
            .ok_or_else(size_literal_overflow_error)
    }
}

#[cfg(feature = "serde")]
mod serde_impls {
    use core::fmt;

    use serde::{
        de::{self, Visitor},
        Deserialize, Deserializer, Serialize, Serializer,
    };

    use super::ByteSize;

    impl Serialize for ByteSize {
        fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
            serializer.collect_str(self)
        }
    }

    struct ByteSizeVisitor;

    impl Visitor<'_> for ByteSizeVisitor {
        type Value = ByteSize;

        fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            f.write_str("a byte count or a size literal such as \"512m\"")
        }

        fn visit_u64<E: de::Error>(self, v: u64) -> Result<ByteSize, E> {
            usize::try_from(v)
                .map(ByteSize::new)
                .map_err(|_| E::custom("byte count exceeds the target word width"))
        }

        fn visit_i64<E: de::Error>(self, v: i64) -> Result<ByteSize, E> {
            usize::try_from(v)
                .map(ByteSize::new)
                .map_err(|_| E::custom("byte count must be a non-negative word-sized integer"))
        }

        fn visit_str<E: de::Error>(self, v: &str) -> Result<ByteSize, E> {
            v.parse().map_err(E::custom)
        }
    }

    impl<'de> Deserialize<'de> for ByteSize {
        fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
            deserializer.deserialize_any(ByteSizeVisitor)
        }
    }
}
