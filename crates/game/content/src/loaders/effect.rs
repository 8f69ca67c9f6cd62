//! Timed ability effect loader.

use std::path::Path;

use ability_core::AbilityEffect;
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::loaders::{LoadResult, ensure_unique, read_file};

/// Effect catalog structure for RON files.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EffectCatalog {
    pub effects: Vec<AbilityEffect>,
}

/// Loader for timed ability effects from RON files.
pub struct EffectLoader;

impl EffectLoader {
    pub fn load(path: &Path) -> LoadResult<Vec<AbilityEffect>> {
        let content = read_file(path)?;
        let effects =
            Self::parse(&content).map_err(|e| anyhow::anyhow!("{}: {}", path.display(), e))?;

        info!(path = %path.display(), count = effects.len(), "loaded ability effects");
        Ok(effects)
    }

    pub fn parse(content: &str) -> LoadResult<Vec<AbilityEffect>> {
        let catalog: EffectCatalog = ron::from_str(content)
            .map_err(|e| anyhow::anyhow!("Failed to parse effect catalog RON: {}", e))?;

        ensure_unique(
            "ability effect",
            catalog.effects.iter().map(|effect| effect.name.as_str()),
        )?;

        Ok(catalog.effects)
    }
}
