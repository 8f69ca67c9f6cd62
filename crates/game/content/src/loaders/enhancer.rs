//! Property enhancer catalog loader.

use std::path::Path;

use ability_core::EnhancerDefinition;
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::loaders::{LoadResult, ensure_unique, read_file};

/// Enhancer catalog structure for RON files.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EnhancerCatalog {
    pub enhancers: Vec<EnhancerDefinition>,
}

/// Loader for enhancer catalogs from RON files.
pub struct EnhancerLoader;

impl EnhancerLoader {
    /// Load an enhancer catalog from a RON file.
    pub fn load(path: &Path) -> LoadResult<Vec<EnhancerDefinition>> {
        let content = read_file(path)?;
        let enhancers = Self::parse(&content)
            .map_err(|e| anyhow::anyhow!("{}: {}", path.display(), e))?;

        info!(path = %path.display(), count = enhancers.len(), "loaded enhancers");
        Ok(enhancers)
    }

    /// Parse and validate an enhancer catalog from RON text.
    pub fn parse(content: &str) -> LoadResult<Vec<EnhancerDefinition>> {
        let catalog: EnhancerCatalog = ron::from_str(content)
            .map_err(|e| anyhow::anyhow!("Failed to parse enhancer catalog RON: {}", e))?;

        for enhancer in &catalog.enhancers {
            enhancer.validate()?;
        }
        ensure_unique(
            "enhancer",
            catalog.enhancers.iter().map(|enhancer| enhancer.name.as_str()),
        )?;

        Ok(catalog.enhancers)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ability_core::{AmountCurve, Property, UpdateKind};

    #[test]
    fn parses_optional_fields_with_defaults() {
        let enhancers = EnhancerLoader::parse(
            r#"(enhancers: [
                (name: "Augmented Strength", properties: [Strength], curve: Table([4, 8, 12])),
                (
                    name: "Toughness",
                    description: "More hit points.",
                    properties: [MaxHealth],
                    curve: PerLevel(3),
                    value_unit: "%",
                    update_kind: Health,
                ),
            ])"#,
        )
        .unwrap();

        assert_eq!(enhancers.len(), 2);
        assert_eq!(enhancers[0].curve, AmountCurve::Table(vec![4, 8, 12]));
        assert!(enhancers[0].description.is_empty());
        assert_eq!(enhancers[0].update_kind, UpdateKind::None);
        assert_eq!(enhancers[1].properties.as_slice(), &[Property::MaxHealth]);
        assert_eq!(enhancers[1].value_unit, "%");
    }

    #[test]
    fn rejects_enhancer_without_properties() {
        let err = EnhancerLoader::parse(
            r#"(enhancers: [(name: "Empty", properties: [], curve: Zero)])"#,
        )
        .unwrap_err();
        assert!(err.to_string().contains("does not enhance any property"));
    }

    #[test]
    fn rejects_duplicate_names() {
        let err = EnhancerLoader::parse(
            r#"(enhancers: [
                (name: "Serenity", properties: [PowerRegenerationRate], curve: PerLevel(1)),
                (name: "Serenity", properties: [HealthRegenerationRate], curve: PerLevel(1)),
            ])"#,
        )
        .unwrap_err();
        assert!(err.to_string().contains("Duplicate enhancer `Serenity`"));
    }

    #[test]
    fn load_reports_the_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("enhancers.ron");
        std::fs::write(&path, "(enhancers: [(name: \"Broken\"").unwrap();

        let err = EnhancerLoader::load(&path).unwrap_err();
        assert!(err.to_string().contains("enhancers.ron"));
    }
}
