//! Engine configuration loader.

use std::path::Path;

use ability_core::EngineConfig;

use crate::loaders::{LoadResult, read_file};

/// Loader for engine configuration from TOML files.
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load config data from a TOML file.
    ///
    /// Missing keys fall back to [`EngineConfig::default`].
    pub fn load(path: &Path) -> LoadResult<EngineConfig> {
        let content = read_file(path)?;
        Self::parse(&content)
    }

    /// Parse config data from TOML text.
    pub fn parse(content: &str) -> LoadResult<EngineConfig> {
        let config: EngineConfig = toml::from_str(content)
            .map_err(|e| anyhow::anyhow!("Failed to parse config TOML: {}", e))?;

        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_file_uses_defaults() {
        assert_eq!(ConfigLoader::parse("").unwrap(), EngineConfig::default());
    }

    #[test]
    fn scaling_switch_is_read() {
        let config = ConfigLoader::parse("use_new_actives_scaling = true").unwrap();
        assert!(config.use_new_actives_scaling);
    }

    #[test]
    fn wrong_type_is_rejected() {
        let err = ConfigLoader::parse("use_new_actives_scaling = \"yes\"").unwrap_err();
        assert!(err.to_string().contains("Failed to parse config TOML"));
    }
}
