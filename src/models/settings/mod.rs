// Settings module
// Persisted as settings.toml in the user's config directory

use serde::{Deserialize, Serialize};

/// Theme names accepted in the settings file.
pub const THEME_NAMES: [&str; 3] = ["light", "dark", "system"];

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub theme: String,
    /// Initial and minimum window width
    pub window_width: f32,
    /// Initial and minimum window height
    pub window_height: f32,
    /// Space above the grid reserved for the month title
    pub header_height: f32,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            theme: "light".to_string(),
            window_width: 800.0,
            window_height: 600.0,
            header_height: 40.0,
        }
    }
}

impl Settings {
    pub fn validate(&self) -> Result<(), String> {
        if !THEME_NAMES.contains(&self.theme.as_str()) {
            return Err(format!(
                "Unknown theme '{}', expected one of {}",
                self.theme,
                THEME_NAMES.join(", ")
            ));
        }
        if !(self.window_width.is_finite() && self.window_width > 0.0) {
            return Err(format!("window_width must be positive, got {}", self.window_width));
        }
        if !(self.window_height.is_finite() && self.window_height > 0.0) {
            return Err(format!(
                "window_height must be positive, got {}",
                self.window_height
            ));
        }
        if !(self.header_height.is_finite() && self.header_height >= 0.0) {
            return Err(format!(
                "header_height must be non-negative, got {}",
                self.header_height
            ));
        }
        if self.header_height >= self.window_height {
            return Err("header_height must leave room for the grid".to_string());
        }
        Ok(())
    }
}
