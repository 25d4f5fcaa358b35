// Runtime configuration read from environment variables. There are no
// config files; the settings record always starts in memory.

use crate::settings::{AccessibilitySettings, Theme};
use anyhow::{Context, Result};

pub const PLAIN_VAR: &str = "ACCESSIBLE_SLMS_PLAIN";
pub const THEME_VAR: &str = "ACCESSIBLE_SLMS_THEME";
pub const FONT_SIZE_VAR: &str = "ACCESSIBLE_SLMS_FONT_SIZE";

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Config {
    /// Force the plain line console even on a terminal.
    pub plain: bool,
    /// Record the session starts from.
    pub initial: AccessibilitySettings,
}

impl Config {
    /// Build the config from the process environment.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build the config from any key lookup; unset keys keep their defaults.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Config::default();

        if let Some(raw) = lookup(PLAIN_VAR) {
            config.plain = matches!(raw.trim().to_ascii_lowercase().as_str(), "1" | "true" | "yes");
        }
        if let Some(raw) = lookup(THEME_VAR) {
            config.initial.theme = raw
                .trim()
                .parse::<Theme>()
                .with_context(|| format!("{} must be 'Light' or 'Dark', got {:?}", THEME_VAR, raw))?;
        }
        if let Some(raw) = lookup(FONT_SIZE_VAR) {
            let size: u32 = raw
                .trim()
                .parse()
                .with_context(|| format!("{} must be a whole number, got {:?}", FONT_SIZE_VAR, raw))?;
            if size == 0 {
                anyhow::bail!("{} must be a positive font size", FONT_SIZE_VAR);
            }
            config.initial.font_size = size;
        }

        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn empty_environment_gives_defaults() {
        let config = Config::from_lookup(lookup(&[])).unwrap();
        assert_eq!(config, Config::default());
        assert_eq!(config.initial.font_size, 12);
    }

    #[test]
    fn seeds_theme_and_font_size() {
        let config = Config::from_lookup(lookup(&[
            (THEME_VAR, "Dark"),
            (FONT_SIZE_VAR, " 18 "),
            (PLAIN_VAR, "true"),
        ]))
        .unwrap();
        assert!(config.plain);
        assert_eq!(config.initial.theme, Theme::Dark);
        assert_eq!(config.initial.font_size, 18);
    }

    #[test]
    fn rejects_bad_values_naming_the_variable() {
        let err = Config::from_lookup(lookup(&[(THEME_VAR, "Blue")])).unwrap_err();
        assert!(err.to_string().contains(THEME_VAR));

        let err = Config::from_lookup(lookup(&[(FONT_SIZE_VAR, "big")])).unwrap_err();
        assert!(err.to_string().contains(FONT_SIZE_VAR));

        let err = Config::from_lookup(lookup(&[(FONT_SIZE_VAR, "0")])).unwrap_err();
        assert!(err.to_string().contains(FONT_SIZE_VAR));
    }
}
