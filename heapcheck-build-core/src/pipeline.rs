//! Image build pipeline
//!
//! The pipeline owns the resolved configuration and the registered build
//! features. Only the before-analysis phase is modelled; it runs once, in
//! registration order, and the first failing feature stops the build.

use std::time::{Duration, Instant};

use heapcheck::HeapOptions;
use heapcheck_error::build_phase_error;
use tracing::{debug, error, info};

use crate::{
    config::{AddressSpace, HeapCheckConfig},
    error::{BuildError, BuildResult},
    feature::{BeforeAnalysisAccess, BuildFeature, HostedHeapSizeFeature},
};

/// Outcome of a completed phase
#[derive(Debug, Default)]
pub struct PhaseReport {
    /// Features that ran, in order
    pub features: Vec<&'static str>,
    /// Wall time spent in the phase
    pub duration: Duration,
}

/// Drives build features through the image build phases
pub struct BuildPipeline {
    heap_options:     HeapOptions,
    address_space:    AddressSpace,
    features:         Vec<Box<dyn BuildFeature>>,
    analysis_started: bool,
}

impl BuildPipeline {
    /// Create a pipeline without any features
    pub fn new(config: &HeapCheckConfig) -> BuildResult<Self> {
        Ok(Self {
            heap_options:     config.heap,
            address_space:    config.address_space.provider()?,
            features:         Vec::new(),
            analysis_started: false,
        })
    }

    /// Create a pipeline with the automatically registered features
    pub fn with_default_features(config: &HeapCheckConfig) -> BuildResult<Self> {
        let mut pipeline = Self::new(config)?;
        pipeline.register(Box::new(HostedHeapSizeFeature))?;
        Ok(pipeline)
    }

    /// Register a feature; only allowed before analysis starts
    pub fn register(&mut self, feature: Box<dyn BuildFeature>) -> BuildResult<()> {
        if self.analysis_started {
            return Err(build_phase_error("Features must be registered before analysis").into());
        }
        debug!("Registered build feature {}", feature.name());
        self.features.push(feature);
        Ok(())
    }

    /// Names of the registered features, in order
    pub fn feature_names(&self) -> Vec<&'static str> {
        self.features.iter().map(|f| f.name()).collect()
    }

    /// The heap options the features see
    pub fn heap_options(&self) -> &HeapOptions {
        &self.heap_options
    }

    /// Run the before-analysis hooks.
    ///
    /// The first call runs every feature once; later calls do nothing.
    pub fn run_before_analysis(&mut self) -> BuildResult<PhaseReport> {
        if self.analysis_started {
            debug!("Before-analysis phase already ran");
            return Ok(PhaseReport::default());
        }
        self.analysis_started = true;

        let start_time = Instant::now();
        let access = BeforeAnalysisAccess {
            heap_options:  &self.heap_options,
            address_space: &self.address_space,
        };

        let mut report = PhaseReport::default();
        for feature in &self.features {
            info!("Running before-analysis hook of {}", feature.name());
            if let Err(e) = feature.before_analysis(&access) {
                if let BuildError::Aborted(message) = &e {
                    error!("Build aborted by {}: {}", feature.name(), message);
                }
                return Err(e);
            }
            report.features.push(feature.name());
        }
        report.duration = start_time.elapsed();
        Ok(report)
    }
}
