// heapcheck - heapcheck-error
// Module: Error Types
// SW-REQ-ID: REQ_ERROR_001
//
// Copyright (c) 2025 The Heapcheck Project Developers
// Licensed under the MIT license.
// SPDX-License-Identifier: MIT

use alloc::borrow::Cow;
use core::fmt;

use crate::{codes, ToErrorCategory};

/// `Error` categories for heapcheck operations
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum ErrorCategory {
    /// Parameter-related errors (invalid arguments, out of range options)
    Parameter     = 18,
    /// Build pipeline errors (aborted image builds)
    Build         = 21,
    /// Parse errors
    Parse         = 10,
    /// Configuration document errors
    Configuration = 22,
}

impl ErrorCategory {
    /// Short lower-case name of the category, used in log fields
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Parameter => "parameter",
            Self::Build => "build",
            Self::Parse => "parse",
            Self::Configuration => "configuration",
        }
    }
}

impl fmt::Display for ErrorCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Heapcheck `Error` type
///
/// Categorized error with a stable code and a message. The message is
/// rendered verbatim by `Display`, so it can be shown to an operator as is.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Error {
    /// `Error` category
    pub category: ErrorCategory,
    /// `Error` code
    pub code:     u16,
    /// `Error` message
    pub message:  Cow<'static, str>,
}

impl Error {
    /// Create a new error.
    #[must_use]
    pub fn new(category: ErrorCategory, code: u16, message: impl Into<Cow<'static, str>>) -> Self {
        Self {
            category,
            code,
            message: message.into(),
        }
    }

    /// Create a recoverable invalid argument error
    #[must_use]
    pub fn invalid_argument(message: impl Into<Cow<'static, str>>) -> Self {
        Self::new(ErrorCategory::Parameter, codes::INVALID_ARGUMENT, message)
    }

    /// Create a build abort carrying the message to surface to the operator
    #[must_use]
    pub fn build_aborted(message: impl Into<Cow<'static, str>>) -> Self {
        Self::new(ErrorCategory::Build, codes::BUILD_ABORTED, message)
    }

    /// Create a size literal parse error
    #[must_use]
    pub fn invalid_size_literal(message: impl Into<Cow<'static, str>>) -> Self {
        Self::new(ErrorCategory::Parse, codes::INVALID_SIZE_LITERAL, message)
    }

    /// Create a configuration error
    #[must_use]
    pub fn configuration(message: impl Into<Cow<'static, str>>) -> Self {
        Self::new(ErrorCategory::Configuration, codes::CONFIGURATION_ERROR, message)
    }

    /// The message without category or code decoration
    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Check if this is a run-mode invalid argument error
    #[must_use]
    pub fn is_invalid_argument(&self) -> bool {
        self.category == ErrorCategory::Parameter && self.code == codes::INVALID_ARGUMENT
    }

    /// Check if this error aborts an image build
    #[must_use]
    pub fn is_build_abort(&self) -> bool {
        self.category == ErrorCategory::Build && self.code == codes::BUILD_ABORTED
    }

    /// Check if this is a parse error
    #[must_use]
    pub fn is_parse_error(&self) -> bool {
        self.category == ErrorCategory::Parse
    }

    /// Check if this is a configuration error
    #[must_use]
    pub fn is_configuration_error(&self) -> bool {
        self.category == ErrorCategory::Configuration
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

#[cfg(feature = "std")]
impl std::error::Error for Error {}

impl ToErrorCategory for Error {
    fn to_category(&self) -> ErrorCategory {
        self.category
    }
}

#[cfg(test)]
mod tests {
    use alloc::string::ToString;

    use super::*;

    #[test]
    fn test_display_is_message_verbatim() {
        let error = Error::build_aborted("The specified minimum heap size (2g) must not be larger than the maximum heap size (1g).");
        assert_eq!(
            error.to_string(),
            "The specified minimum heap size (2g) must not be larger than the maximum heap size (1g)."
        );
    }

    #[test]
    fn test_channel_predicates_are_exclusive() {
        let run = Error::invalid_argument("bad");
        let build = Error::build_aborted("bad");

        assert!(run.is_invalid_argument());
        assert!(!run.is_build_abort());
        assert!(build.is_build_abort());
        assert!(!build.is_invalid_argument());
        assert_eq!(run.message(), build.message());
    }

    #[test]
    fn test_category_names() {
        assert_eq!(ErrorCategory::Parameter.to_string(), "parameter");
        assert_eq!(ErrorCategory::Build.as_str(), "build");
        assert_eq!(Error::configuration("x").to_category(), ErrorCategory::Configuration);
    }

    #[test]
    fn test_configuration_predicate() {
        let error = Error::configuration("limit and compressed-shift are exclusive");
        assert!(error.is_configuration_error());
        assert!(!error.is_parse_error());
        assert!(!error.is_invalid_argument());
        assert!(!Error::invalid_size_literal("1q").is_configuration_error());
    }
}
