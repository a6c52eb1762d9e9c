//! Game settings and preferences
//!
//! Persisted as JSON: LocalStorage on the web, an optional file for the
//! native runner.

use serde::{Deserialize, Serialize};

use crate::consts::{DEFAULT_PLAYFIELD_HEIGHT, DEFAULT_PLAYFIELD_WIDTH};
use crate::sim::Playfield;
use crate::sim::layout::GRID_WIDTH;

/// Smallest playfield the block grid, ball serve and paddle all fit in
pub const MIN_PLAYFIELD_WIDTH: f32 = GRID_WIDTH;
pub const MIN_PLAYFIELD_HEIGHT: f32 = 320.0;

/// Game settings/preferences
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    // === Playfield ===
    /// Playfield width in pixels
    pub playfield_width: f32,
    /// Playfield height in pixels
    pub playfield_height: f32,

    // === Visuals ===
    /// Faint grid drawn behind the blocks
    pub show_grid: bool,

    // === Audio ===
    /// Master volume (0.0 - 1.0)
    pub master_volume: f32,
    /// Sound effects volume (0.0 - 1.0)
    pub sfx_volume: f32,
    pub muted: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            playfield_width: DEFAULT_PLAYFIELD_WIDTH,
            playfield_height: DEFAULT_PLAYFIELD_HEIGHT,

            show_grid: true,

            master_volume: 0.8,
            sfx_volume: 1.0,
            muted: false,
        }
    }
}

impl Settings {
    /// LocalStorage key (used only in wasm32)
    #[allow(dead_code)]
    const STORAGE_KEY: &'static str = "brick_breaker_settings";

    /// Parse settings from JSON; missing fields keep their defaults
    pub fn from_json(json: &str) -> serde_json::Result<Self> {
        let settings: Self = serde_json::from_str(json)?;
        Ok(settings.sanitized())
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }

    /// Clamp out-of-range values instead of rejecting them
    pub fn sanitized(mut self) -> Self {
        let defaults = Self::default();
        if !self.playfield_width.is_finite() {
            self.playfield_width = defaults.playfield_width;
        }
        if !self.playfield_height.is_finite() {
            self.playfield_height = defaults.playfield_height;
        }
        self.playfield_width = self.playfield_width.max(MIN_PLAYFIELD_WIDTH);
        self.playfield_height = self.playfield_height.max(MIN_PLAYFIELD_HEIGHT);
        self.master_volume = clamp_volume(self.master_volume);
        self.sfx_volume = clamp_volume(self.sfx_volume);
        self
    }

    pub fn playfield(&self) -> Playfield {
        Playfield::new(self.playfield_width, self.playfield_height)
    }

    /// Volume actually applied to sound effects
    pub fn effective_volume(&self) -> f32 {
        if self.muted {
            0.0
        } else {
            self.master_volume * self.sfx_volume
        }
    }

    /// Flip mute, returning the new state
    pub fn toggle_muted(&mut self) -> bool {
        self.muted = !self.muted;
        self.muted
    }

    /// Load settings from LocalStorage (WASM only)
    #[cfg(target_arch = "wasm32")]
    pub fn load() -> Self {
        let storage = web_sys::window()
            .and_then(|w| w.local_storage().ok())
            .flatten();

        if let Some(storage) = storage {
            if let Ok(Some(json)) = storage.get_item(Self::STORAGE_KEY) {
                match Self::from_json(&json) {
                    Ok(settings) => {
                        log::info!("Loaded settings from LocalStorage");
                        return settings;
                    }
                    Err(e) => log::warn!("Ignoring stored settings: {}", e),
                }
            }
        }

        log::info!("Using default settings");
        Self::default()
    }

    /// Save settings to LocalStorage (WASM only)
    #[cfg(target_arch = "wasm32")]
    pub fn save(&self) {
        let storage = web_sys::window()
            .and_then(|w| w.local_storage().ok())
            .flatten();

        let Some(storage) = storage else {
            log::warn!("LocalStorage unavailable - settings not saved");
            return;
        };
        match self.to_json() {
            Ok(json) => {
                let _ = storage.set_item(Self::STORAGE_KEY, &json);
                log::info!("Settings saved");
            }
            Err(e) => log::warn!("Failed to serialize settings: {}", e),
        }
    }

    /// Load settings from a JSON file, falling back to defaults (native only)
    #[cfg(not(target_arch = "wasm32"))]
    pub fn load_from(path: &std::path::Path) -> Self {
        let json = match std::fs::read_to_string(path) {
            Ok(json) => json,
            Err(e) => {
                log::warn!("Cannot read settings {}: {}", path.display(), e);
                return Self::default();
            }
        };

        match Self::from_json(&json) {
            Ok(settings) => {
                log::info!("Loaded settings from {}", path.display());
                settings
            }
            Err(e) => {
                log::warn!("Invalid settings {}: {}", path.display(), e);
                Self::default()
            }
        }
    }
}

fn clamp_volume(vol: f32) -> f32 {
    if vol.is_finite() { vol.clamp(0.0, 1.0) } else { 0.0 }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let settings = Settings::default();
        assert_eq!(settings.playfield(), Playfield::new(800.0, 600.0));
        assert!(settings.show_grid);
        assert!((settings.effective_volume() - 0.8).abs() < 1e-6);
    }

    #[test]
    fn test_partial_json_keeps_defaults() {
        let settings = Settings::from_json(r#"{ "muted": true }"#).expect("parse");
        assert!(settings.muted);
        assert_eq!(settings.playfield_width, 800.0);
        assert_eq!(settings.effective_volume(), 0.0);
    }

    #[test]
    fn test_out_of_range_values_are_clamped() {
        let settings = Settings::from_json(
            r#"{ "playfield_width": 100, "playfield_height": 50, "master_volume": 3.5, "sfx_volume": -1 }"#,
        )
        .expect("parse");
        assert_eq!(settings.playfield_width, MIN_PLAYFIELD_WIDTH);
        assert_eq!(settings.playfield_height, MIN_PLAYFIELD_HEIGHT);
        assert_eq!(settings.master_volume, 1.0);
        assert_eq!(settings.sfx_volume, 0.0);
    }

    #[test]
    fn test_invalid_json_is_an_error() {
        assert!(Settings::from_json("{ not json").is_err());
        assert!(Settings::from_json(r#"{ "muted": "yes" }"#).is_err());
    }

    #[test]
    fn test_json_round_trip() {
        let settings = Settings {
            playfield_width: 1024.0,
            show_grid: false,
            ..Default::default()
        };
        let json = settings.to_json().expect("serialize");
        assert_eq!(Settings::from_json(&json).expect("parse"), settings);
    }

    #[test]
    fn test_toggle_muted_silences_effects() {
        let mut settings = Settings::default();
        assert!(settings.toggle_muted());
        assert_eq!(settings.effective_volume(), 0.0);

        assert!(!settings.toggle_muted());
        assert!((settings.effective_volume() - 0.8).abs() < 1e-6);
    }

    #[cfg(not(target_arch = "wasm32"))]
    #[test]
    fn test_load_missing_file_falls_back() {
        let settings = Settings::load_from(std::path::Path::new("/nonexistent/brick.json"));
        assert_eq!(settings, Settings::default());
    }
}
