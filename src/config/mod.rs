pub mod actions;
pub mod key;
pub mod keybindings;
pub mod loader;
pub mod resolver;

pub use actions::*;
use keybindings::KeybindingsConfig;
pub use loader::{load, save_theme};
pub use resolver::KeyResolver;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ThemeConfig {
    pub name: String,
}

impl Default for ThemeConfig {
    fn default() -> Self {
        Self {
            name: "Catppuccin Mocha".to_string(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct AppConfig {
    #[serde(default)]
    pub theme: ThemeConfig,
    #[serde(default)]
    pub keybindings: KeybindingsConfig,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_toml_falls_back_to_defaults() {
        let config: AppConfig = toml::from_str("").expect("empty config parses");
        assert_eq!(config.theme.name, "Catppuccin Mocha");
    }

    #[test]
    fn partial_toml_overrides_only_named_keys() {
        let config: AppConfig = toml::from_str(
            r#"
            [theme]
            name = "Catppuccin Latte"
            "#,
        )
        .expect("partial config parses");
        assert_eq!(config.theme.name, "Catppuccin Latte");
    }

    #[test]
    fn config_round_trips_through_toml() {
        let config = AppConfig::default();
        let serialized = toml::to_string_pretty(&config).expect("serializes");
        let parsed: AppConfig = toml::from_str(&serialized).expect("parses back");
        assert_eq!(parsed.theme.name, config.theme.name);
    }
}
