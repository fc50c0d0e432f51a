//! Build features and the before-analysis hook
//!
//! A build feature is notified at fixed phases of an image build. The heap
//! size feature is registered automatically and checks the heap options
//! before the program is analysed.

use heapcheck::HeapOptions;
use heapcheck_platform::AddressSpaceLimitProvider;

use crate::error::BuildResult;

/// What a feature can see before analysis starts
pub struct BeforeAnalysisAccess<'a> {
    /// Heap options resolved from the build flags
    pub heap_options:  &'a HeapOptions,
    /// Address space limit of the image being built
    pub address_space: &'a dyn AddressSpaceLimitProvider,
}

/// A participant in the image build
pub trait BuildFeature: Send + Sync {
    /// Name used in logs
    fn name(&self) -> &'static str;

    /// Called once, before program analysis
    fn before_analysis(&self, access: &BeforeAnalysisAccess<'_>) -> BuildResult<()>;
}

/// Verifies all heap size options at build time
#[derive(Debug, Clone, Copy, Default)]
pub struct HostedHeapSizeFeature;

impl BuildFeature for HostedHeapSizeFeature {
    fn name(&self) -> &'static str {
        "hosted-heap-size-verifier"
    }

    fn before_analysis(&self, access: &BeforeAnalysisAccess<'_>) -> BuildResult<()> {
        heapcheck::verify_hosted_heap_options(access.heap_options, access.address_space)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use heapcheck::ByteSize;
    use heapcheck_platform::FixedAddressSpace;

    use super::*;
    use crate::error::BuildError;

    #[test]
    fn test_heap_feature_aborts_build() {
        let options = HeapOptions::new(ByteSize::gib(2), ByteSize::gib(1), ByteSize::ZERO);
        let limit = FixedAddressSpace(usize::MAX);
        let access = BeforeAnalysisAccess {
            heap_options:  &options,
            address_space: &limit,
        };

        let error = HostedHeapSizeFeature.before_analysis(&access).unwrap_err();
        assert!(matches!(
            error,
            BuildError::Aborted(ref m)
                if m == "The specified minimum heap size (2g) must not be larger than the maximum heap size (1g)."
        ));
    }
}
