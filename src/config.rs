use cosmic::cosmic_config::{self, CosmicConfigEntry, cosmic_config_derive::CosmicConfigEntry};
use serde::{Deserialize, Serialize};

pub const CONFIG_VERSION: u64 = 1;

fn default_dismiss_icon() -> String {
    "window-close-symbolic".into()
}

/// Global tag defaults, applied by hosts when building tags.
#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize, CosmicConfigEntry)]
pub struct MarqueConfig {
    /// Whether tags draw a border unless a tag overrides it.
    pub bordered: bool,
    /// Icon name for the dismiss control.
    pub dismiss_icon: String,
    /// Lay tags out right-to-left.
    pub rtl: bool,
    pub debug_logging: bool,
}

impl Default for MarqueConfig {
    fn default() -> Self {
        Self {
            bordered: true,
            dismiss_icon: default_dismiss_icon(),
            rtl: false,
            debug_logging: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let config = MarqueConfig::default();
        assert!(config.bordered);
        assert!(!config.rtl);
        assert_eq!(config.dismiss_icon, "window-close-symbolic");
    }
}
