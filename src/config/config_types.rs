// src/config/config_types.rs
//
// Config tables as they appear in config.toml.
// Every field has a default so a partial file is still valid.

use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct WindowConfig {
    pub title: String,
    pub width: u32,
    pub height: u32,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            title: "notchfill".to_string(),
            width: 800,
            height: 800,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct StyleConfig {
    pub background: String,
    pub palette: Vec<String>,
    pub size_factor: f32,
    pub stroke_factor: f32,
}

impl Default for StyleConfig {
    fn default() -> Self {
        Self {
            background: "#BDBDBD".to_string(),
            palette: ["#F44336", "#4CAF50", "#3F51B5", "#FF9800", "#03A9F4"]
                .iter()
                .map(|c| c.to_string())
                .collect(),
            size_factor: 5.6,
            stroke_factor: 90.0,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct AnimationConfig {
    pub scale_step: f32,       // Scale added per tick
    pub tick_interval_ms: u64, // Delay between ticks
}

impl Default for AnimationConfig {
    fn default() -> Self {
        Self {
            scale_step: 1.0,
            tick_interval_ms: 20,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct OscConfig {
    pub enabled: bool,
    pub rx_port: u16,
}

impl Default for OscConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            rx_port: 9000,
        }
    }
}
