//! Game settings and preferences
//!
//! Persisted in LocalStorage. Settings describe how a game is dealt and shown,
//! never an in-progress game.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::consts::*;
use crate::sim::{GameRules, PyramidLayout, ValueSet};

/// Game settings/preferences
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    // === Deal ===
    /// Pyramid height
    pub layer_count: usize,
    /// Number of tile colours
    pub group_count: u8,
    /// Seed values dealt to every group
    pub values: Vec<u32>,

    // === Layout ===
    pub cell_width: f32,
    pub cell_height: f32,
    /// Pointer offset from a held cell's anchor
    pub grab_offset: (f32, f32),

    // === Visual Effects ===
    /// Merge effect lifetime
    pub effect_duration_ms: f64,
    /// Draw values on cells
    pub show_values: bool,

    // === Accessibility ===
    /// Reduced motion (merge effects hold still)
    pub reduced_motion: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            layer_count: LAYER_COUNT,
            group_count: GROUP_COUNT,
            values: GROUP_VALUES.to_vec(),

            cell_width: CELL_WIDTH,
            cell_height: CELL_HEIGHT,
            grab_offset: GRAB_OFFSET,

            effect_duration_ms: EFFECT_DURATION_MS,
            show_values: true,

            reduced_motion: false,
        }
    }
}

impl Settings {
    /// Parse settings JSON; missing fields fall back to defaults
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }

    pub fn cell_size(&self) -> Vec2 {
        Vec2::new(self.cell_width, self.cell_height)
    }

    /// Rules for a pyramid centred horizontally on `origin.x`
    pub fn rules(&self, origin: Vec2) -> GameRules {
        GameRules {
            layout: PyramidLayout {
                layer_count: self.layer_count,
                origin,
                cell_size: self.cell_size(),
            },
            group_count: self.group_count,
            values: ValueSet(self.values.clone()),
            grab_offset: Vec2::new(self.grab_offset.0, self.grab_offset.1),
        }
    }

    /// LocalStorage key
    #[allow(dead_code)]
    const STORAGE_KEY: &'static str = "pyramerge_settings";

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

        if let Some(storage) = storage {
            if let Ok(json) = self.to_json() {
                let _ = storage.set_item(Self::STORAGE_KEY, &json);
                log::info!("Settings saved");
            }
        }
    }

    /// Native stubs
    #[cfg(not(target_arch = "wasm32"))]
    pub fn load() -> Self {
        Self::default()
    }

    #[cfg(not(target_arch = "wasm32"))]
    pub fn save(&self) {
        // No-op for native
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_consts() {
        let s = Settings::default();
        assert_eq!(s.layer_count, 6);
        assert_eq!(s.group_count, 4);
        assert_eq!(s.values.len(), 14);
        assert_eq!(s.grab_offset, (28.0, 16.0));
        assert_eq!(s.effect_duration_ms, 2500.0);
    }

    #[test]
    fn test_json_roundtrip() {
        let mut s = Settings::default();
        s.layer_count = 4;
        s.reduced_motion = true;
        let back = Settings::from_json(&s.to_json().unwrap()).unwrap();
        assert_eq!(back, s);
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let s = Settings::from_json(r#"{"layer_count": 2, "group_count": 2, "values": [2, 2]}"#)
            .unwrap();
        assert_eq!(s.layer_count, 2);
        assert_eq!(s.values, vec![2, 2]);
        assert_eq!(s.cell_width, CELL_WIDTH);
        assert!(s.show_values);
    }

    #[test]
    fn test_bad_json_is_error() {
        assert!(Settings::from_json("{\"layer_count\": \"six\"}").is_err());
    }

    #[test]
    fn test_rules() {
        let rules = Settings::default().rules(Vec2::new(320.0, 240.0));
        assert_eq!(rules.layout.layer_count, 6);
        assert_eq!(rules.layout.origin, Vec2::new(320.0, 240.0));
        assert_eq!(rules.layout.cell_size, Vec2::new(64.0, 74.0));
        assert_eq!(rules.grab_offset, Vec2::new(28.0, 16.0));
    }
}
