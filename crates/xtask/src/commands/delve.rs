//! Print delve output for loaded content.
//!
//! Content comes from `--data-dir`, `ABILITY_DATA_DIR`, or the built-in
//! catalogs, in that order.

use std::path::PathBuf;

use ability_runtime::{AbilityService, RuntimeConfig};
use anyhow::{Context, Result};
use clap::Parser;
use console::style;
use serde::Serialize;

/// Print delve text
#[derive(Parser)]
pub struct Delve {
    /// What to describe
    #[arg(value_enum)]
    kind: DelveKind,

    /// Record name (e.g. "Avoidance of Magic"); every record when omitted
    #[arg(value_name = "NAME")]
    name: Option<String>,

    /// Content directory (defaults to ABILITY_DATA_DIR, then built-in content)
    #[arg(short, long, value_name = "DIR")]
    data_dir: Option<PathBuf>,

    /// Override the realm-ability pricing table
    #[arg(long, value_enum)]
    scaling: Option<Scaling>,

    /// Output format
    #[arg(short, long, value_enum, default_value = "text")]
    format: OutputFormat,
}

#[derive(Clone, Copy, clap::ValueEnum)]
enum DelveKind {
    Ability,
    Shear,
    Effect,
}

#[derive(Clone, Copy, clap::ValueEnum)]
enum Scaling {
    /// Three levels, (level + 1) * 5 points
    Classic,
    /// Five levels, 5/5/5/7/8 points
    Graduated,
}

#[derive(Clone, Copy, clap::ValueEnum)]
enum OutputFormat {
    /// Delve lines as a client shows them
    Text,
    /// JSON array of `{ name, lines }`
    Json,
}

#[derive(Serialize)]
struct DelveEntry {
    name: String,
    lines: Vec<String>,
}

impl Delve {
    pub fn execute(self) -> Result<()> {
        let mut config = RuntimeConfig::from_env();
        if let Some(dir) = self.data_dir.clone() {
            config.data_dir = Some(dir);
        }
        if let Some(scaling) = self.scaling {
            config.use_new_actives_scaling = Some(matches!(scaling, Scaling::Graduated));
        }

        let service = AbilityService::from_config(&config).context("Failed to load content")?;
        let entries = self.collect(&service)?;

        match self.format {
            OutputFormat::Text => print_text(&entries),
            OutputFormat::Json => {
                let json = serde_json::to_string_pretty(&entries)
                    .context("Failed to serialize delve output to JSON")?;
                println!("{}", json);
            }
        }

        Ok(())
    }

    fn collect(&self, service: &AbilityService) -> Result<Vec<DelveEntry>> {
        let content = service.content();
        let names: Vec<String> = match (&self.name, self.kind) {
            (Some(name), _) => vec![name.clone()],
            (None, DelveKind::Ability) => content.enhancers().map(|e| e.name.clone()).collect(),
            (None, DelveKind::Shear) => content.shears().map(|s| s.spell.name.clone()).collect(),
            (None, DelveKind::Effect) => content.effects().map(|e| e.name.clone()).collect(),
        };

        names
            .into_iter()
            .map(|name| -> Result<DelveEntry> {
                let lines = match self.kind {
                    DelveKind::Ability => service.delve_ability(&name)?,
                    DelveKind::Shear => service.delve_shear(&name)?,
                    DelveKind::Effect => {
                        let effect = content
                            .effect(&name)
                            .with_context(|| format!("No timed effect named `{}`", name))?;
                        effect.delve_info(effect.duration_ms)
                    }
                };
                Ok(DelveEntry { name, lines })
            })
            .collect()
    }
}

fn print_text(entries: &[DelveEntry]) {
    for entry in entries {
        println!("{}", style(&entry.name).bold().cyan());
        for line in &entry.lines {
            println!("  {}", line);
        }
        println!();
    }
}
