//! # Heap Check Daemon (heapcheckd)
//!
//! Verifies heap size options the way an image build or a running image
//! would, and reports the first violation.
//!
//! ## Usage
//!
//! ```bash
//! heapcheckd [--config <file>] [--min-heap-size <size>] [--max-heap-size <size>]
//!            [--max-new-size <size>] [--address-space-limit <size> | --compressed-shift <n>]
//!            [--mode build|run]
//! ```
//!
//! Sizes are byte counts or literals such as `512m` or `4g`. Options given on
//! the command line override `HEAPCHECK_*` environment variables, which in
//! turn override the configuration file.
//!
//! In `build` mode (the default) the checks run as the before-analysis hook
//! of a build pipeline and a violation aborts the build with exit status 1.
//! In `run` mode the checks run directly and a violation is reported as an
//! invalid argument with exit status 2. Configuration problems exit with
//! status 3.

#![warn(missing_docs)]

use std::{env, path::PathBuf, process::ExitCode};

use anyhow::{Context, Result};
use clap::{error::ErrorKind, Parser, ValueEnum};
use heapcheck::{ByteSize, HeapSizeVerifier};
use heapcheck_build_core::{AddressSpaceConfig, BuildError, BuildPipeline, HeapCheckConfig};
use heapcheck_platform::AddressSpaceLimitProvider;
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

/// Exit status of an aborted build
const EXIT_BUILD_ABORTED: u8 = 1;
/// Exit status of an invalid argument in run mode
const EXIT_INVALID_ARGUMENT: u8 = 2;
/// Exit status of an unusable configuration
const EXIT_CONFIGURATION: u8 = 3;

/// Heap Check Daemon CLI arguments
#[derive(Parser, Debug)]
#[command(version, about)]
struct Args {
    /// Path to a TOML heap configuration file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Minimum heap size
    #[arg(long, value_name = "SIZE")]
    min_heap_size: Option<ByteSize>,

    /// Maximum heap size, 0 for no cap
    #[arg(long, value_name = "SIZE")]
    max_heap_size: Option<ByteSize>,

    /// Maximum new generation size, 0 for no cap
    #[arg(long, value_name = "SIZE")]
    max_new_size: Option<ByteSize>,

    /// Fixed address space limit instead of the native pointer width
    #[arg(long, value_name = "SIZE", conflicts_with = "compressed_shift")]
    address_space_limit: Option<ByteSize>,

    /// Use compressed references with the given shift
    #[arg(long, value_name = "SHIFT")]
    compressed_shift: Option<u32>,

    /// Report failures as a build abort or as an invalid argument
    #[arg(long, value_enum, default_value_t = Mode::Build)]
    mode: Mode,
}

/// Execution mode selected on the command line
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Mode {
    /// Image build: failures abort the build
    Build,
    /// Running image: failures are invalid arguments
    Run,
}

fn main() -> ExitCode {
    initialize_tracing();

    let args = match Args::try_parse() {
        Ok(args) => args,
        Err(e) => {
            // Usage errors are configuration problems, not invalid arguments.
            if e.print().is_err() {
                eprintln!("{e}");
            }
            return ExitCode::from(exit_code_for_usage(&e));
        },
    };

    match run(&args) {
        Ok(summary) => {
            println!("{summary}");
            ExitCode::SUCCESS
        },
        Err(e) => {
            eprintln!("Error: {e:#}");
            ExitCode::from(exit_code_for(&e))
        },
    }
}

/// Initialize the tracing system for logging
fn initialize_tracing() {
    let format = env::var("RUST_LOG_FORMAT").unwrap_or_else(|_| "pretty".to_string());
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_writer(std::io::stderr);

    match format.as_str() {
        "json" => subscriber.json().init(),
        "compact" => subscriber.compact().init(),
        _ => subscriber.pretty().init(),
    }
}

/// Merge the configuration file, environment and command line
fn resolve_config(args: &Args) -> Result<HeapCheckConfig> {
    let mut config = match &args.config {
        Some(path) => HeapCheckConfig::load(path)
            .with_context(|| format!("Failed to load configuration from {}", path.display()))?,
        None => HeapCheckConfig::default(),
    };

    config
        .apply_process_env()
        .context("Invalid heap option in environment")?;

    if let Some(size) = args.min_heap_size {
        config.heap.min_heap_size = size;
    }
    if let Some(size) = args.max_heap_size {
        config.heap.max_heap_size = size;
    }
    if let Some(size) = args.max_new_size {
        config.heap.max_new_size = size;
    }
    if args.address_space_limit.is_some() || args.compressed_shift.is_some() {
        config.address_space = AddressSpaceConfig {
            limit:            args.address_space_limit,
            compressed_shift: args.compressed_shift,
        };
    }

    debug!("Resolved configuration: {:?}", config);
    Ok(config)
}

/// Verify the resolved options and describe the result
fn run(args: &Args) -> Result<String> {
    let config = resolve_config(args)?;
    let provider = config.address_space.provider()?;

    match args.mode {
        Mode::Build => {
            info!("Running image build before-analysis phase");
            let mut pipeline = BuildPipeline::with_default_features(&config)?;
            let report = pipeline.run_before_analysis()?;
            debug!(
                "Before-analysis phase ran {} feature(s) in {:?}",
                report.features.len(),
                report.duration
            );
        },
        Mode::Run => {
            info!("Verifying heap options of running image");
            HeapSizeVerifier::runtime(&provider).verify_heap_options(&config.heap)?;
        },
    }

    Ok(format!(
        "Heap options verified ({} mode): min-heap-size={} max-heap-size={} max-new-size={} address-space={}",
        match args.mode {
            Mode::Build => "build",
            Mode::Run => "run",
        },
        config.heap.min_heap_size,
        config.heap.max_heap_size,
        config.heap.max_new_size,
        ByteSize::new(provider.max_address_space_size()),
    ))
}

/// Map a command-line parsing failure to the process exit status
fn exit_code_for_usage(error: &clap::Error) -> u8 {
    match error.kind() {
        ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => 0,
        _ => EXIT_CONFIGURATION,
    }
}

/// Map a failure to the process exit status
fn exit_code_for(error: &anyhow::Error) -> u8 {
    if let Some(build_error) = error.downcast_ref::<BuildError>() {
        return if build_error.is_abort() {
            EXIT_BUILD_ABORTED
        } else {
            EXIT_CONFIGURATION
        };
    }
    match error.downcast_ref::<heapcheck_error::Error>() {
        Some(e) if e.is_invalid_argument() => EXIT_INVALID_ARGUMENT,
        Some(e) if e.is_build_abort() => EXIT_BUILD_ABORTED,
        _ => EXIT_CONFIGURATION,
    }
}
