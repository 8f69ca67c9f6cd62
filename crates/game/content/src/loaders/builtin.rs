//! Built-in content embedded at compile time.

use tracing::info;

use crate::loaders::{ConfigLoader, EffectLoader, EnhancerLoader, LoadResult, ShearLoader};
use crate::registry::ContentRegistry;

const CONFIG_TOML: &str = include_str!("../../data/config.toml");
const ENHANCERS_RON: &str = include_str!("../../data/enhancers.ron");
const SHEARS_RON: &str = include_str!("../../data/shears.ron");
const EFFECTS_RON: &str = include_str!("../../data/effects.ron");

/// Builds a registry from the embedded data files.
pub fn load_builtin() -> LoadResult<ContentRegistry> {
    let config = ConfigLoader::parse(CONFIG_TOML)
        .map_err(|e| anyhow::anyhow!("built-in config.toml: {}", e))?;
    let mut registry = ContentRegistry::new(config);

    for enhancer in EnhancerLoader::parse(ENHANCERS_RON)
        .map_err(|e| anyhow::anyhow!("built-in enhancers.ron: {}", e))?
    {
        registry.insert_enhancer(enhancer);
    }
    for shear in
        ShearLoader::parse(SHEARS_RON).map_err(|e| anyhow::anyhow!("built-in shears.ron: {}", e))?
    {
        registry.insert_shear(shear);
    }
    for effect in EffectLoader::parse(EFFECTS_RON)
        .map_err(|e| anyhow::anyhow!("built-in effects.ron: {}", e))?
    {
        registry.insert_effect(effect);
    }

    info!(
        enhancers = registry.enhancers().count(),
        shears = registry.shears().count(),
        effects = registry.effects().count(),
        "loaded built-in content"
    );
    Ok(registry)
}
