//! Application state for the duty pay engine API.

use std::sync::Arc;

use crate::config::ConfigLoader;

/// Shared application state.
///
/// Holds the loaded configuration, which is immutable for the lifetime of
/// the server.
#[derive(Clone)]
pub struct AppState {
    config: Arc<ConfigLoader>,
}

impl AppState {
    /// Creates a new application state with the given configuration loader.
    pub fn new(config: ConfigLoader) -> Self {
        Self {
            config: Arc::new(config),
        }
    }

    /// Returns a reference to the configuration loader.
    pub fn config(&self) -> &ConfigLoader {
        &self.config
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::RuleConfig;

    #[test]
    fn test_clones_share_configuration() {
        let loader = ConfigLoader::from_parts(RuleConfig::default(), vec![]).unwrap();
        let state = AppState::new(loader);
        let clone = state.clone();
        assert!(std::ptr::eq(state.config(), clone.config()));
    }
}
