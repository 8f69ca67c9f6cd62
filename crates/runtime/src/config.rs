//! Runtime configuration and the live scaling switch.

use std::env;
use std::path::PathBuf;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use ability_core::ConfigOracle;

/// Host settings read at startup.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RuntimeConfig {
    /// Overrides the content `use_new_actives_scaling` value when set.
    pub use_new_actives_scaling: Option<bool>,
    /// Directory with `config.toml` and RON catalogs; built-in content when unset.
    pub data_dir: Option<PathBuf>,
}

impl RuntimeConfig {
    /// Builds configuration from the process environment.
    ///
    /// A `.env` file in the working directory is loaded first if present.
    ///
    /// Environment variables:
    /// - `USE_NEW_ACTIVES_RAS_SCALING` - Graduated realm-ability pricing (default: from content)
    /// - `ABILITY_DATA_DIR` - Content data directory (default: built-in content)
    pub fn from_env() -> Self {
        // Load .env file if it exists (silently ignore if not found)
        let _ = dotenvy::dotenv();
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Builds configuration from an arbitrary key lookup.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(raw) = lookup("USE_NEW_ACTIVES_RAS_SCALING") {
            // Accept a bare variable as "true"
            config.use_new_actives_scaling = Some(parse_flag(&raw).unwrap_or(raw.trim().is_empty()));
        }

        config.data_dir = lookup("ABILITY_DATA_DIR")
            .filter(|dir| !dir.trim().is_empty())
            .map(PathBuf::from);

        config
    }
}

fn parse_flag(raw: &str) -> Option<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}

/// Shared, flippable `use_new_actives_scaling` flag.
///
/// Clones observe the same value, so a server command can switch pricing
/// while every trained enhancer keeps reading it through [`ConfigOracle`].
#[derive(Clone, Debug, Default)]
pub struct ScalingSwitch {
    enabled: Arc<AtomicBool>,
}

impl ScalingSwitch {
    pub fn new(enabled: bool) -> Self {
        Self {
            enabled: Arc::new(AtomicBool::new(enabled)),
        }
    }

    pub fn set(&self, enabled: bool) {
        self.enabled.store(enabled, Ordering::Relaxed);
    }

    pub fn get(&self) -> bool {
        self.enabled.load(Ordering::Relaxed)
    }
}

impl ConfigOracle for ScalingSwitch {
    fn use_new_actives_scaling(&self) -> bool {
        self.get()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lookup(pairs: &'static [(&'static str, &'static str)]) -> impl Fn(&str) -> Option<String> {
        move |key: &str| {
            pairs
                .iter()
                .find(|(k, _)| *k == key)
                .map(|(_, v)| v.to_string())
        }
    }

    #[test]
    fn unset_variables_leave_defaults() {
        assert_eq!(RuntimeConfig::from_lookup(|_| None), RuntimeConfig::default());
    }

    #[test]
    fn scaling_flag_accepts_common_spellings() {
        let on = RuntimeConfig::from_lookup(lookup(&[("USE_NEW_ACTIVES_RAS_SCALING", "True")]));
        assert_eq!(on.use_new_actives_scaling, Some(true));

        let off = RuntimeConfig::from_lookup(lookup(&[("USE_NEW_ACTIVES_RAS_SCALING", "0")]));
        assert_eq!(off.use_new_actives_scaling, Some(false));

        let bare = RuntimeConfig::from_lookup(lookup(&[("USE_NEW_ACTIVES_RAS_SCALING", "")]));
        assert_eq!(bare.use_new_actives_scaling, Some(true));

        let junk = RuntimeConfig::from_lookup(lookup(&[("USE_NEW_ACTIVES_RAS_SCALING", "maybe")]));
        assert_eq!(junk.use_new_actives_scaling, Some(false));
    }

    #[test]
    fn data_dir_is_read() {
        let config = RuntimeConfig::from_lookup(lookup(&[("ABILITY_DATA_DIR", "/srv/abilities")]));
        assert_eq!(config.data_dir, Some(PathBuf::from("/srv/abilities")));
    }

    #[test]
    fn switch_clones_share_state() {
        let switch = ScalingSwitch::new(false);
        let observer = switch.clone();

        switch.set(true);
        assert!(observer.use_new_actives_scaling());
    }
}
