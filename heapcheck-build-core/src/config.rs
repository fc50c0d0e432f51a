//! Configuration management for heapcheck
//!
//! Heap options and the address space mode are read from a TOML document,
//! then overridden by `HEAPCHECK_*` environment variables. Command-line
//! flags are applied last by the front end.

use std::path::Path;

use heapcheck::{ByteSize, HeapOptions};
use heapcheck_platform::{
    AddressSpaceLimitProvider, CompressedAddressSpace, FixedAddressSpace,
    PointerWidthAddressSpace,
};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{BuildError, BuildResult};

/// Environment variable overriding the minimum heap size
pub const ENV_MIN_HEAP_SIZE: &str = "HEAPCHECK_MIN_HEAP_SIZE";
/// Environment variable overriding the maximum heap size
pub const ENV_MAX_HEAP_SIZE: &str = "HEAPCHECK_MAX_HEAP_SIZE";
/// Environment variable overriding the maximum new generation size
pub const ENV_MAX_NEW_SIZE: &str = "HEAPCHECK_MAX_NEW_SIZE";

/// Top-level configuration document
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "kebab-case", deny_unknown_fields)]
pub struct HeapCheckConfig {
    /// Heap size options, zero when not given
    pub heap:          HeapOptions,
    /// How the address space limit is determined
    pub address_space: AddressSpaceConfig,
}

/// Address space section of the configuration
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "kebab-case", deny_unknown_fields)]
pub struct AddressSpaceConfig {
    /// Fixed limit override
    pub limit:            Option<ByteSize>,
    /// Compressed reference shift
    pub compressed_shift: Option<u32>,
}

/// The provider selected by an [`AddressSpaceConfig`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AddressSpace {
    /// Native pointer width
    PointerWidth(PointerWidthAddressSpace),
    /// Compressed references
    Compressed(CompressedAddressSpace),
    /// Explicit limit
    Fixed(FixedAddressSpace),
}

impl AddressSpaceLimitProvider for AddressSpace {
    fn max_address_space_size(&self) -> usize {
        match self {
            AddressSpace::PointerWidth(p) => p.max_address_space_size(),
            AddressSpace::Compressed(p) => p.max_address_space_size(),
            AddressSpace::Fixed(p) => p.max_address_space_size(),
        }
    }
}

impl AddressSpaceConfig {
    /// Resolve the configured provider
    pub fn provider(&self) -> BuildResult<AddressSpace> {
        match (self.limit, self.compressed_shift) {
            (Some(_), Some(_)) => Err(BuildError::Config(
                "address-space.limit and address-space.compressed-shift are mutually exclusive"
                    .to_string(),
            )),
            (Some(limit), None) => Ok(AddressSpace::Fixed(FixedAddressSpace(limit.bytes()))),
            (None, Some(shift)) => Ok(AddressSpace::Compressed(CompressedAddressSpace::new(shift))),
            (None, None) => Ok(AddressSpace::PointerWidth(PointerWidthAddressSpace)),
        }
    }
}

impl HeapCheckConfig {
    /// Parse a configuration document
    pub fn from_toml_str(content: &str) -> BuildResult<Self> {
        let config: Self = toml::from_str(content)?;
        config.address_space.provider()?;
        Ok(config)
    }

    /// Load a configuration file
    pub fn load(path: &Path) -> BuildResult<Self> {
        debug!("Loading heap configuration from {}", path.display());
        let content = std::fs::read_to_string(path)?;
        Self::from_toml_str(&content)
    }

    /// Apply `HEAPCHECK_*` overrides using the given variable lookup
    pub fn apply_env_overrides<F>(&mut self, lookup: F) -> BuildResult<()>
    where
        F: Fn(&str) -> Option<String>,
    {
        let overrides: [(&str, &mut ByteSize); 3] = [
            (ENV_MIN_HEAP_SIZE, &mut self.heap.min_heap_size),
            (ENV_MAX_HEAP_SIZE, &mut self.heap.max_heap_size),
            (ENV_MAX_NEW_SIZE, &mut self.heap.max_new_size),
        ];

        for (name, slot) in overrides {
            if let Some(value) = lookup(name) {
                *slot = value
                    .parse()
                    .map_err(|e| BuildError::Config(format!("{name}: {e}")))?;
                debug!("{} overrides heap option with {}", name, slot);
            }
        }
        Ok(())
    }

    /// Apply `HEAPCHECK_*` overrides from the process environment
    pub fn apply_process_env(&mut self) -> BuildResult<()> {
        self.apply_env_overrides(|name| std::env::var(name).ok())
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    #[test]
    fn test_default_config() {
        let config = HeapCheckConfig::default();
        assert_eq!(config.heap, HeapOptions::default());
        assert_eq!(
            config.address_space.provider().unwrap(),
            AddressSpace::PointerWidth(PointerWidthAddressSpace)
        );
    }

    #[test]
    fn test_parse_document() {
        let config = HeapCheckConfig::from_toml_str(
            r#"
[heap]
min-heap-size = "256m"
max-heap-size = "4g"
max-new-size = 1073741824

[address-space]
compressed-shift = 3
"#,
        )
        .unwrap();

        assert_eq!(config.heap.min_heap_size, ByteSize::mib(256));
        assert_eq!(config.heap.max_heap_size, ByteSize::gib(4));
        assert_eq!(config.heap.max_new_size, ByteSize::gib(1));
        assert_eq!(
            config.address_space.provider().unwrap(),
            AddressSpace::Compressed(CompressedAddressSpace::new(3))
        );
    }

    #[test]
    fn test_conflicting_address_space_rejected() {
        let result = HeapCheckConfig::from_toml_str(
            r#"
[address-space]
limit = "64g"
compressed-shift = 3
"#,
        );
        assert!(matches!(result, Err(BuildError::Config(_))));
    }

    #[test]
    fn test_unknown_keys_rejected() {
        let result = HeapCheckConfig::from_toml_str("[heap]\nmax-perm-size = \"1g\"\n");
        assert!(matches!(result, Err(BuildError::Toml(_))));
    }

    #[test]
    fn test_env_overrides() {
        let env: HashMap<&str, &str> =
            [(ENV_MAX_HEAP_SIZE, "2g"), (ENV_MAX_NEW_SIZE, "512m")].into_iter().collect();
        let mut config = HeapCheckConfig::from_toml_str("[heap]\nmax-heap-size = \"8g\"\n").unwrap();

        config
            .apply_env_overrides(|name| env.get(name).map(|v| (*v).to_string()))
            .unwrap();

        assert_eq!(config.heap.min_heap_size, ByteSize::ZERO);
        assert_eq!(config.heap.max_heap_size, ByteSize::gib(2));
        assert_eq!(config.heap.max_new_size, ByteSize::mib(512));
    }

    #[test]
    fn test_env_override_parse_error_names_variable() {
        let mut config = HeapCheckConfig::default();
        let error = config
            .apply_env_overrides(|name| (name == ENV_MIN_HEAP_SIZE).then(|| "lots".to_string()))
            .unwrap_err();
        assert!(error.to_string().contains(ENV_MIN_HEAP_SIZE));
    }
}
