//! Content loaders for reading ability data from files.
//!
//! Each loader parses one RON/TOML format and validates every record before
//! returning it, so nothing malformed reaches the engine. The same parsers
//! back the embedded built-in content in [`builtin`].

pub mod builtin;
pub mod config;
pub mod effect;
pub mod enhancer;
pub mod factory;
pub mod shear;

pub use builtin::load_builtin;
pub use config::ConfigLoader;
pub use effect::EffectLoader;
pub use enhancer::EnhancerLoader;
pub use factory::ContentFactory;
pub use shear::ShearLoader;

use std::collections::BTreeSet;
use std::path::Path;

/// Common result type for loaders.
pub type LoadResult<T> = anyhow::Result<T>;

/// Helper function to read file contents.
pub(crate) fn read_file(path: &Path) -> LoadResult<String> {
    std::fs::read_to_string(path)
        .map_err(|e| anyhow::anyhow!("Failed to read file {}: {}", path.display(), e))
}

/// Fails on the first name that appears twice in `names`.
pub(crate) fn ensure_unique<'a>(
    kind: &str,
    names: impl IntoIterator<Item = &'a str>,
) -> LoadResult<()> {
    let mut seen = BTreeSet::new();
    for name in names {
        if !seen.insert(name) {
            anyhow::bail!("Duplicate {} `{}`", kind, name);
        }
    }
    Ok(())
}
