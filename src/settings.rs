// Settings module: the in-memory accessibility record and the typed
// actions the accessibility menu maps onto. Nothing here talks to the
// terminal, which keeps the record easy to test on its own.

use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Colour theme. The text form is exactly `Light` or `Dark`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

#[derive(Debug, Error, PartialEq, Eq)]
#[error("Invalid theme choice. Please enter 'Light' or 'Dark'.")]
pub struct UnknownTheme(pub String);

impl Theme {
    pub fn as_str(&self) -> &'static str {
        match self {
            Theme::Light => "Light",
            Theme::Dark => "Dark",
        }
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Theme {
    type Err = UnknownTheme;

    /// Case sensitive on purpose: only the two literals are accepted.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Light" => Ok(Theme::Light),
            "Dark" => Ok(Theme::Dark),
            other => Err(UnknownTheme(other.to_string())),
        }
    }
}

/// The five accessibility preferences a user can change from the menu.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AccessibilitySettings {
    pub screen_reader: bool,
    pub magnifier: bool,
    pub theme: Theme,
    pub font_size: u32,
    pub color_inversion: bool,
}

pub const DEFAULT_FONT_SIZE: u32 = 12;

impl Default for AccessibilitySettings {
    fn default() -> Self {
        AccessibilitySettings {
            screen_reader: false,
            magnifier: false,
            theme: Theme::Light,
            font_size: DEFAULT_FONT_SIZE,
            color_inversion: false,
        }
    }
}

fn on_off(flag: bool) -> &'static str {
    if flag {
        "Enabled"
    } else {
        "Disabled"
    }
}

impl AccessibilitySettings {
    /// Render the status lines shown under "Current Accessibility Settings:".
    pub fn status_lines(&self) -> Vec<String> {
        vec![
            format!("Screen Reader Support: {}", on_off(self.screen_reader)),
            format!("Magnifier: {}", on_off(self.magnifier)),
            format!("Theme: {}", self.theme),
            format!("Font Size: {}", self.font_size),
            format!("Color Inversion: {}", on_off(self.color_inversion)),
        ]
    }

    pub fn toggle_screen_reader(&mut self) {
        self.screen_reader = !self.screen_reader;
    }

    pub fn toggle_magnifier(&mut self) {
        self.magnifier = !self.magnifier;
    }

    pub fn toggle_color_inversion(&mut self) {
        self.color_inversion = !self.color_inversion;
    }
}

/// One entry of the accessibility menu, numbered 1-5 on screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SettingsAction {
    ToggleScreenReader,
    ToggleMagnifier,
    ChangeTheme,
    AdjustFontSize,
    ToggleColorInversion,
}

#[derive(Debug, Error, PartialEq, Eq)]
#[error("Invalid choice.")]
pub struct InvalidChoice(pub i64);

impl SettingsAction {
    pub const ALL: [SettingsAction; 5] = [
        SettingsAction::ToggleScreenReader,
        SettingsAction::ToggleMagnifier,
        SettingsAction::ChangeTheme,
        SettingsAction::AdjustFontSize,
        SettingsAction::ToggleColorInversion,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            SettingsAction::ToggleScreenReader => "Enable Screen Reader Support",
            SettingsAction::ToggleMagnifier => "Enable Magnifier",
            SettingsAction::ChangeTheme => "Change Theme (Light/Dark)",
            SettingsAction::AdjustFontSize => "Adjust Font Size",
            SettingsAction::ToggleColorInversion => "Enable Color Inversion",
        }
    }
}

impl TryFrom<i64> for SettingsAction {
    type Error = InvalidChoice;

    fn try_from(choice: i64) -> Result<Self, Self::Error> {
        match choice {
            1 => Ok(SettingsAction::ToggleScreenReader),
            2 => Ok(SettingsAction::ToggleMagnifier),
            3 => Ok(SettingsAction::ChangeTheme),
            4 => Ok(SettingsAction::AdjustFontSize),
            5 => Ok(SettingsAction::ToggleColorInversion),
            other => Err(InvalidChoice(other)),
        }
    }
}
