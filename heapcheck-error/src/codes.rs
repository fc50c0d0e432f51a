// heapcheck - heapcheck-error
// Module: Error Codes
// SW-REQ-ID: REQ_ERROR_001
//
// Copyright (c) 2025 The Heapcheck Project Developers
// Licensed under the MIT license.
// SPDX-License-Identifier: MIT

//! Error codes for heapcheck

// Parameter error codes (5000-5099)
/// Invalid argument error
pub const INVALID_ARGUMENT: u16 = 5002;

// Build error codes (6000-6099)
/// The image build was aborted by a user error
pub const BUILD_ABORTED: u16 = 6000;
/// A build feature was invoked outside of its phase
pub const BUILD_PHASE_ERROR: u16 = 6001;

// Parse error codes (7000-7099)
/// Malformed size literal
pub const INVALID_SIZE_LITERAL: u16 = 7000;
/// Size literal does not fit the target word width
pub const SIZE_LITERAL_OVERFLOW: u16 = 7001;

// Configuration error codes (7100-7199)
/// Inconsistent or unreadable configuration
pub const CONFIGURATION_ERROR: u16 = 7100;

