//! Buff shear catalog loader.

use std::path::Path;

use ability_core::ShearDefinition;
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::loaders::{LoadResult, ensure_unique, read_file};

/// Shear catalog structure for RON files.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ShearCatalog {
    pub shears: Vec<ShearDefinition>,
}

/// Loader for shear catalogs from RON files.
pub struct ShearLoader;

impl ShearLoader {
    /// Load a shear catalog from a RON file.
    pub fn load(path: &Path) -> LoadResult<Vec<ShearDefinition>> {
        let content = read_file(path)?;
        let shears =
            Self::parse(&content).map_err(|e| anyhow::anyhow!("{}: {}", path.display(), e))?;

        info!(path = %path.display(), count = shears.len(), "loaded shears");
        Ok(shears)
    }

    /// Parse and validate a shear catalog from RON text.
    pub fn parse(content: &str) -> LoadResult<Vec<ShearDefinition>> {
        let catalog: ShearCatalog = ron::from_str(content)
            .map_err(|e| anyhow::anyhow!("Failed to parse shear catalog RON: {}", e))?;

        for shear in &catalog.shears {
            shear.validate()?;
        }
        ensure_unique(
            "shear",
            catalog.shears.iter().map(|shear| shear.spell.name.as_str()),
        )?;

        Ok(catalog.shears)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ability_core::{BuffCatalog, HandlerKind, ShearTarget};

    #[test]
    fn parses_typed_and_catalog_shears() {
        let shears = ShearLoader::parse(
            r#"(shears: [
                (
                    spell: (name: "Strength Shear", spell_type: "StrengthShear", value: 75.0, power: 8),
                    target: SpellType("StrengthBuff"),
                    delve_type: "Strength",
                ),
                (
                    spell: (name: "Unmake", spell_type: "RandomBuffShear"),
                    target: Catalog([DamageShield, DamageAdd]),
                    delve_type: "Random",
                ),
            ])"#,
        )
        .unwrap();

        assert_eq!(shears[0].target, ShearTarget::SpellType("StrengthBuff".to_string()));
        assert_eq!(shears[0].spell.power, 8);
        assert_eq!(shears[0].spell.cast_time_ms, 0);
        assert_eq!(
            shears[1].target,
            ShearTarget::Catalog(BuffCatalog::new([
                HandlerKind::DamageShield,
                HandlerKind::DamageAdd
            ]))
        );
    }

    #[test]
    fn rejects_empty_catalog() {
        let err = ShearLoader::parse(
            r#"(shears: [(spell: (name: "Nothing"), target: Catalog([]), delve_type: "Random")])"#,
        )
        .unwrap_err();
        assert!(err.to_string().contains("empty buff catalog"));
    }

    #[test]
    fn rejects_percent_cost_above_full_pool() {
        let err = ShearLoader::parse(
            r#"(shears: [(
                spell: (name: "Drain All", spell_type: "StrengthShear", power: -2147483648),
                target: SpellType("StrengthBuff"),
                delve_type: "Strength",
            )])"#,
        )
        .unwrap_err();
        assert!(err.to_string().contains("at most 100% is supported"));
    }

    #[test]
    fn rejects_unknown_handler() {
        let err = ShearLoader::parse(
            r#"(shears: [(spell: (name: "Odd"), target: Catalog([Levitate]), delve_type: "Random")])"#,
        )
        .unwrap_err();
        assert!(err.to_string().contains("Failed to parse shear catalog RON"));
    }
}
