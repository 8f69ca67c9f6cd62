//! Configuration oracle for exposing server rule switches to the engine.

use crate::config::EngineConfig;

/// Provides access to runtime configuration values.
///
/// Values are read on every call and never cached by the engine, so a host
/// may flip them while enhancers stay loaded.
pub trait ConfigOracle: Send + Sync {
    /// Returns true when the graduated (five level) realm-ability scaling is in use.
    fn use_new_actives_scaling(&self) -> bool;
}

impl ConfigOracle for EngineConfig {
    fn use_new_actives_scaling(&self) -> bool {
        self.use_new_actives_scaling
    }
}
