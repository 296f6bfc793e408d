// src/config/settings.rs
//
// Validated, immutable settings built once from Config and handed to the
// renderer at construction.

use nannou::prelude::*;
use std::time::Duration;

use super::{Config, ConfigError};

#[derive(Debug, Clone, PartialEq)]
pub struct Settings {
    background: Rgb,
    palette: Vec<Rgb>,
    size_factor: f32,
    stroke_factor: f32,
    scale_step: f32,
    tick_interval: Duration,
}

impl Settings {
    pub fn from_config(config: &Config) -> Result<Self, ConfigError> {
        let style = &config.style;
        let animation = &config.animation;

        if style.palette.is_empty() {
            return Err(ConfigError::EmptyPalette);
        }
        if style.size_factor <= 0.0 {
            return Err(ConfigError::Invalid {
                field: "style.size_factor",
                reason: "must be positive",
            });
        }
        if style.stroke_factor <= 0.0 {
            return Err(ConfigError::Invalid {
                field: "style.stroke_factor",
                reason: "must be positive",
            });
        }
        if !(animation.scale_step > 0.0 && animation.scale_step <= 1.0) {
            return Err(ConfigError::Invalid {
                field: "animation.scale_step",
                reason: "must be in (0, 1]",
            });
        }
        if animation.tick_interval_ms == 0 {
            return Err(ConfigError::Invalid {
                field: "animation.tick_interval_ms",
                reason: "must be at least 1",
            });
        }

        let palette = style
            .palette
            .iter()
            .map(|c| parse_hex_color(c))
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self {
            background: parse_hex_color(&style.background)?,
            palette,
            size_factor: style.size_factor,
            stroke_factor: style.stroke_factor,
            scale_step: animation.scale_step,
            tick_interval: Duration::from_millis(animation.tick_interval_ms),
        })
    }

    pub fn background(&self) -> Rgb {
        self.background
    }

    /// Number of palette entries, never zero.
    pub fn palette_len(&self) -> usize {
        self.palette.len()
    }

    pub fn size_factor(&self) -> f32 {
        self.size_factor
    }

    pub fn stroke_factor(&self) -> f32 {
        self.stroke_factor
    }

    pub fn scale_step(&self) -> f32 {
        self.scale_step
    }

    pub fn tick_interval(&self) -> Duration {
        self.tick_interval
    }

    /// Palette color for a node index, wrapping past the end.
    pub fn color(&self, index: usize) -> Rgb {
        self.palette[index % self.palette.len()]
    }
}

impl Default for Settings {
    fn default() -> Self {
        // the built-in config always validates
        match Self::from_config(&Config::default()) {
            Ok(settings) => settings,
            Err(e) => unreachable!("default config is invalid: {}", e),
        }
    }
}

/// Parses `#RRGGBB` (leading `#` optional) into a linear 0..1 rgb.
pub fn parse_hex_color(hex: &str) -> Result<Rgb, ConfigError> {
    let digits = hex.trim().trim_start_matches('#');
    if digits.len() != 6 || !digits.chars().all(|c| c.is_ascii_hexdigit()) {
        return Err(ConfigError::InvalidColor(hex.to_string()));
    }

    let value =
        u32::from_str_radix(digits, 16).map_err(|_| ConfigError::InvalidColor(hex.to_string()))?;
    let channel = |shift: u32| ((value >> shift) & 0xFF) as f32 / 255.0;

    Ok(rgb(channel(16), channel(8), channel(0)))
}
