//! Error types for the heapcheck build pipeline

use heapcheck_error::{ErrorCategory, ToErrorCategory};
use thiserror::Error;

/// Errors raised while configuring or running a build pipeline
#[derive(Debug, Error)]
pub enum BuildError {
    /// The build was aborted; the message is shown to the operator verbatim
    #[error("{0}")]
    Aborted(String),

    /// Inconsistent configuration values
    #[error("Configuration error: {0}")]
    Config(String),

    /// A feature was registered or invoked outside of its phase
    #[error("Build phase error: {0}")]
    Phase(String),

    /// Reading a configuration file failed
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// A configuration file is not valid TOML for the expected schema
    #[error("Invalid configuration file: {0}")]
    Toml(#[from] toml::de::Error),
}

/// Result type for build pipeline operations
pub type BuildResult<T> = Result<T, BuildError>;

impl BuildError {
    /// Whether this error aborted the build
    pub fn is_abort(&self) -> bool {
        matches!(self, BuildError::Aborted(_))
    }
}

impl From<heapcheck_error::Error> for BuildError {
    fn from(error: heapcheck_error::Error) -> Self {
        let message = error.message().to_string();
        match error.category {
            ErrorCategory::Build if error.is_build_abort() => BuildError::Aborted(message),
            ErrorCategory::Build => BuildError::Phase(message),
            ErrorCategory::Parse | ErrorCategory::Configuration | ErrorCategory::Parameter => {
                BuildError::Config(message)
            },
        }
    }
}

impl ToErrorCategory for BuildError {
    fn to_category(&self) -> ErrorCategory {
        match self {
            BuildError::Aborted(_) | BuildError::Phase(_) => ErrorCategory::Build,
            BuildError::Config(_) | BuildError::Io(_) => ErrorCategory::Configuration,
            BuildError::Toml(_) => ErrorCategory::Parse,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_abort_displays_message_only() {
        let error = BuildError::from(heapcheck_error::Error::build_aborted("stop here"));
        assert!(error.is_abort());
        assert_eq!(error.to_string(), "stop here");
        assert_eq!(error.to_category(), ErrorCategory::Build);
    }

    #[test]
    fn test_parse_error_becomes_config() {
        let error = BuildError::from(heapcheck_error::Error::invalid_size_literal("bad literal"));
        assert!(matches!(error, BuildError::Config(ref m) if m == "bad literal"));
        assert_eq!(error.to_category(), ErrorCategory::Configuration);
    }

    #[test]
    fn test_phase_error_conversion() {
        let error = BuildError::from(heapcheck_error::build_phase_error("too late"));
        assert!(matches!(error, BuildError::Phase(_)));
        assert!(!error.is_abort());
    }
}
