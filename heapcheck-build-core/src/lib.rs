//! Heapcheck Build Core - image build integration for heap verification
//!
//! This library connects the heap size verifier to an ahead-of-time image
//! build. It loads the heap configuration, resolves the address space
//! provider, and runs the registered build features before the program is
//! analysed.
//!
//! # Architecture
//!
//! - **Configuration**: TOML documents with environment overrides
//!   ([`HeapCheckConfig`])
//! - **Features**: participants notified at build phases ([`BuildFeature`])
//! - **Pipeline**: runs features once and stops at the first abort
//!   ([`BuildPipeline`])

#![forbid(unsafe_code)]
// Lints configured in Cargo.toml

pub mod config;
pub mod error;
pub mod feature;
pub mod pipeline;

// Public API
pub use config::{AddressSpace, AddressSpaceConfig, HeapCheckConfig};
pub use error::{BuildError, BuildResult};
pub use feature::{BeforeAnalysisAccess, BuildFeature, HostedHeapSizeFeature};
pub use pipeline::{BuildPipeline, PhaseReport};

/// Build core version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
