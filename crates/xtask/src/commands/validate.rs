//! Validate a content directory.
//!
//! Loads every catalog with the same loaders the runtime uses, then flags
//! records that load fine but cannot behave as their author likely meant.

use std::path::PathBuf;

use ability_content::{ContentFactory, ContentRegistry, load_builtin};
use ability_core::{EngineConfig, ShearTarget};
use anyhow::{Context, Result};
use clap::Parser;
use console::style;

/// Validate content data
#[derive(Parser)]
pub struct Validate {
    /// Content directory; the built-in content is checked when omitted
    #[arg(value_name = "DIR")]
    data_dir: Option<PathBuf>,
}

impl Validate {
    pub fn execute(self) -> Result<()> {
        let registry = match &self.data_dir {
            Some(dir) => ContentFactory::new(dir)
                .load_registry()
                .with_context(|| format!("Failed to load content from {}", dir.display()))?,
            None => load_builtin().context("Failed to load built-in content")?,
        };

        let source = self
            .data_dir
            .as_ref()
            .map(|dir| dir.display().to_string())
            .unwrap_or_else(|| "built-in content".to_string());
        println!("{} {}", style("Content:").bold().cyan(), source);
        println!(
            "  {} enhancers, {} shears, {} timed effects",
            registry.enhancers().count(),
            registry.shears().count(),
            registry.effects().count()
        );
        println!(
            "  use_new_actives_scaling = {}",
            registry.config.use_new_actives_scaling
        );

        for warning in lint(&registry) {
            println!("{} {}", style("!").yellow().bold(), warning);
        }

        println!("{} content is valid", style("✓").green().bold());
        Ok(())
    }
}

fn lint(registry: &ContentRegistry) -> Vec<String> {
    let mut warnings = Vec::new();

    for enhancer in registry.enhancers() {
        if enhancer.curve.amount_for_level(1) == 0 {
            warnings.push(format!("enhancer `{}` grants nothing at level 1", enhancer.name));
        }
    }

    for shear in registry.shears() {
        if let ShearTarget::SpellType(spell_type) = &shear.target
            && spell_type == EngineConfig::MESMERIZE_SPELL_TYPE
        {
            warnings.push(format!(
                "shear `{}` targets mesmerize, which is broken before any search",
                shear.spell.name
            ));
        }
        if shear.spell.client_effect == 0 {
            warnings.push(format!("shear `{}` has no client effect", shear.spell.name));
        }
    }

    warnings
}
