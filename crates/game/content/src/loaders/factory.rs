//! Content factory for building a registry from data files.

use std::path::{Path, PathBuf};

use ability_core::{AbilityEffect, EngineConfig, EnhancerDefinition, ShearDefinition};

use crate::loaders::{ConfigLoader, EffectLoader, EnhancerLoader, LoadResult, ShearLoader};
use crate::registry::ContentRegistry;

/// Content factory that loads ability content from a data directory.
///
/// # Directory Structure
///
/// ```text
/// data_dir/
/// ├── config.toml
/// ├── enhancers.ron
/// ├── shears.ron
/// └── effects.ron
/// ```
///
/// Every file is optional when building a registry; missing ones contribute
/// nothing (or the default config).
pub struct ContentFactory {
    data_dir: PathBuf,
}

impl ContentFactory {
    /// Creates a new content factory pointing to a data directory.
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
        }
    }

    /// Load engine configuration from `config.toml`.
    pub fn load_config(&self) -> LoadResult<EngineConfig> {
        ConfigLoader::load(&self.data_dir.join("config.toml"))
    }

    /// Load enhancer definitions from `enhancers.ron`.
    pub fn load_enhancers(&self) -> LoadResult<Vec<EnhancerDefinition>> {
        EnhancerLoader::load(&self.data_dir.join("enhancers.ron"))
    }

    /// Load shear definitions from `shears.ron`.
    pub fn load_shears(&self) -> LoadResult<Vec<ShearDefinition>> {
        ShearLoader::load(&self.data_dir.join("shears.ron"))
    }

    /// Load timed ability effects from `effects.ron`.
    pub fn load_effects(&self) -> LoadResult<Vec<AbilityEffect>> {
        EffectLoader::load(&self.data_dir.join("effects.ron"))
    }

    /// Load every file present into a registry.
    pub fn load_registry(&self) -> LoadResult<ContentRegistry> {
        let config = if self.has("config.toml") {
            self.load_config()?
        } else {
            EngineConfig::default()
        };
        let mut registry = ContentRegistry::new(config);

        if self.has("enhancers.ron") {
            for enhancer in self.load_enhancers()? {
                registry.insert_enhancer(enhancer);
            }
        }
        if self.has("shears.ron") {
            for shear in self.load_shears()? {
                registry.insert_shear(shear);
            }
        }
        if self.has("effects.ron") {
            for effect in self.load_effects()? {
                registry.insert_effect(effect);
            }
        }

        Ok(registry)
    }

    /// Returns the data directory path.
    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }

    fn has(&self, file: &str) -> bool {
        self.data_dir.join(file).is_file()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_factory_paths() {
        let factory = ContentFactory::new("/tmp/data");
        assert_eq!(factory.data_dir(), Path::new("/tmp/data"));
    }

    #[test]
    fn missing_files_yield_an_empty_registry() {
        let dir = tempfile::tempdir().unwrap();
        let registry = ContentFactory::new(dir.path()).load_registry().unwrap();

        assert_eq!(registry.config, EngineConfig::default());
        assert_eq!(registry.enhancers().count(), 0);
    }

    #[test]
    fn loads_present_files() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("config.toml"), "use_new_actives_scaling = true").unwrap();
        std::fs::write(
            dir.path().join("enhancers.ron"),
            r#"(enhancers: [(name: "Serenity", properties: [PowerRegenerationRate], curve: PerLevel(1))])"#,
        )
        .unwrap();

        let registry = ContentFactory::new(dir.path()).load_registry().unwrap();

        assert!(registry.config.use_new_actives_scaling);
        assert!(registry.enhancer("Serenity").is_some());
        assert_eq!(registry.shears().count(), 0);
    }

    #[test]
    fn invalid_file_fails_the_whole_load() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("shears.ron"), "(shears: [").unwrap();

        assert!(ContentFactory::new(dir.path()).load_registry().is_err());
    }
}
