//! Carousel tuning and application configuration.
//!
//! `CarouselConfig` is shared by the server and the browser bundle. The server
//! builds it with `Config::from_env()` after calling `dotenvy::dotenv()` and
//! embeds the result in the page as JSON; the hydrate entry point reads it back.

use serde::{Deserialize, Serialize};

use crate::core::error::ConfigError;

/// Default auto-rotation step in degrees per frame
pub const DEFAULT_AUTO_ROTATE_SPEED: f64 = 0.5;

/// Default degrees of rotation per pixel of horizontal drag
pub const DEFAULT_SENSITIVITY: f64 = 0.5;

/// Default per-frame velocity multiplier while coasting
pub const DEFAULT_DECAY: f64 = 0.95;

/// Default velocity below which coasting stops
pub const DEFAULT_VELOCITY_EPSILON: f64 = 0.01;

/// Default lower bound for the ring radius in pixels
pub const DEFAULT_MIN_RADIUS: f64 = 300.0;

/// Default horizontal gap between cards in pixels
pub const DEFAULT_GAP: f64 = 20.0;

/// Default quiet period before a resize triggers a relayout
pub const DEFAULT_RESIZE_DEBOUNCE_MS: u32 = 250;

/// Element id of the `<script>` tag carrying the serialized config
pub const EMBEDDED_CONFIG_ID: &str = "carousel-config";

/// Tuning constants for the carousel controller
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CarouselConfig {
    /// Degrees added per frame when nothing holds the carousel
    pub auto_rotate_speed: f64,
    /// Degrees per pixel of pointer movement while dragging
    pub sensitivity: f64,
    /// Velocity multiplier applied each coasting frame
    pub decay: f64,
    /// Coasting stops once |velocity| falls to this value
    pub velocity_epsilon: f64,
    /// Minimum ring radius in pixels
    pub min_radius: f64,
    /// Gap between neighbouring cards in pixels
    pub gap: f64,
    /// Resize debounce window in milliseconds
    pub resize_debounce_ms: u32,
}

impl Default for CarouselConfig {
    fn default() -> Self {
        Self {
            auto_rotate_speed: DEFAULT_AUTO_ROTATE_SPEED,
            sensitivity: DEFAULT_SENSITIVITY,
            decay: DEFAULT_DECAY,
            velocity_epsilon: DEFAULT_VELOCITY_EPSILON,
            min_radius: DEFAULT_MIN_RADIUS,
            gap: DEFAULT_GAP,
            resize_debounce_ms: DEFAULT_RESIZE_DEBOUNCE_MS,
        }
    }
}

impl CarouselConfig {
    /// Check every field against its allowed range
    pub fn validate(&self) -> Result<(), ConfigError> {
        let finite = [
            ("auto_rotate_speed", self.auto_rotate_speed),
            ("sensitivity", self.sensitivity),
            ("decay", self.decay),
            ("velocity_epsilon", self.velocity_epsilon),
            ("min_radius", self.min_radius),
            ("gap", self.gap),
        ];
        for (field, value) in finite {
            if !value.is_finite() {
                return Err(ConfigError::OutOfRange {
                    field,
                    reason: format!("{value} is not finite"),
                });
            }
        }

        if self.decay <= 0.0 || self.decay >= 1.0 {
            return Err(ConfigError::OutOfRange {
                field: "decay",
                reason: format!("{} is not in (0, 1)", self.decay),
            });
        }
        if self.velocity_epsilon <= 0.0 {
            return Err(ConfigError::OutOfRange {
                field: "velocity_epsilon",
                reason: format!("{} must be positive", self.velocity_epsilon),
            });
        }
        if self.min_radius < 0.0 {
            return Err(ConfigError::OutOfRange {
                field: "min_radius",
                reason: format!("{} is negative", self.min_radius),
            });
        }
        if self.gap < 0.0 {
            return Err(ConfigError::OutOfRange {
                field: "gap",
                reason: format!("{} is negative", self.gap),
            });
        }
        Ok(())
    }

    /// Decode and validate the JSON the server embeds in the page head
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: CarouselConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Serialize for embedding in the page head
    pub fn to_json(&self) -> Result<String, ConfigError> {
        Ok(serde_json::to_string(self)?)
    }
}

/// Application configuration loaded from environment variables.
#[derive(Debug, Clone, Default)]
pub struct Config {
    /// Carousel tuning, with any `CAROUSEL_*` overrides applied
    pub carousel: CarouselConfig,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Call `dotenvy::dotenv()` before this to load from `.env` file.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build configuration from an arbitrary key lookup
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut carousel = CarouselConfig::default();

        if let Some(v) = parse_f64(&lookup, "CAROUSEL_AUTO_ROTATE_SPEED")? {
            carousel.auto_rotate_speed = v;
        }
        if let Some(v) = parse_f64(&lookup, "CAROUSEL_SENSITIVITY")? {
            carousel.sensitivity = v;
        }
        if let Some(v) = parse_f64(&lookup, "CAROUSEL_DECAY")? {
            carousel.decay = v;
        }
        if let Some(v) = parse_f64(&lookup, "CAROUSEL_VELOCITY_EPSILON")? {
            carousel.velocity_epsilon = v;
        }
        if let Some(v) = parse_f64(&lookup, "CAROUSEL_MIN_RADIUS")? {
            carousel.min_radius = v;
        }
        if let Some(v) = parse_f64(&lookup, "CAROUSEL_GAP")? {
            carousel.gap = v;
        }
        if let Some(raw) = lookup("CAROUSEL_RESIZE_DEBOUNCE_MS") {
            carousel.resize_debounce_ms =
                raw.trim().parse().map_err(|_| ConfigError::InvalidValue {
                    key: "CAROUSEL_RESIZE_DEBOUNCE_MS".to_string(),
                    value: raw.clone(),
                })?;
        }

        carousel.validate()?;
        Ok(Self { carousel })
    }
}

fn parse_f64<F>(lookup: &F, key: &str) -> Result<Option<f64>, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    match lookup(key) {
        None => Ok(None),
        Some(raw) => raw
            .trim()
            .parse::<f64>()
            .map(Some)
            .map_err(|_| ConfigError::InvalidValue {
                key: key.to_string(),
                value: raw,
            }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_defaults_are_valid() {
        let config = CarouselConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.auto_rotate_speed, 0.5);
        assert_eq!(config.sensitivity, 0.5);
        assert_eq!(config.decay, 0.95);
        assert_eq!(config.min_radius, 300.0);
        assert_eq!(config.gap, 20.0);
        assert_eq!(config.resize_debounce_ms, 250);
    }

    #[test]
    fn test_from_lookup_without_overrides() {
        let config = Config::from_lookup(lookup_from(&[])).unwrap();
        assert_eq!(config.carousel, CarouselConfig::default());
    }

    #[test]
    fn test_from_lookup_applies_overrides() {
        let config = Config::from_lookup(lookup_from(&[
            ("CAROUSEL_AUTO_ROTATE_SPEED", "1.25"),
            ("CAROUSEL_DECAY", " 0.9 "),
            ("CAROUSEL_RESIZE_DEBOUNCE_MS", "100"),
        ]))
        .unwrap();

        assert_eq!(config.carousel.auto_rotate_speed, 1.25);
        assert_eq!(config.carousel.decay, 0.9);
        assert_eq!(config.carousel.resize_debounce_ms, 100);
        assert_eq!(config.carousel.sensitivity, DEFAULT_SENSITIVITY);
    }

    #[test]
    fn test_from_lookup_rejects_garbage() {
        let err = Config::from_lookup(lookup_from(&[("CAROUSEL_GAP", "wide")])).unwrap_err();
        assert_eq!(
            err,
            ConfigError::InvalidValue {
                key: "CAROUSEL_GAP".to_string(),
                value: "wide".to_string(),
            }
        );
    }

    #[test]
    fn test_from_lookup_rejects_out_of_range_decay() {
        let err = Config::from_lookup(lookup_from(&[("CAROUSEL_DECAY", "1.5")])).unwrap_err();
        assert!(matches!(err, ConfigError::OutOfRange { field: "decay", .. }));
    }

    #[test]
    fn test_validate_rejects_non_finite() {
        let config = CarouselConfig {
            sensitivity: f64::NAN,
            ..Default::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ConfigError::OutOfRange {
                field: "sensitivity",
                ..
            })
        ));
    }

    #[test]
    fn test_validate_rejects_zero_epsilon_and_negative_sizes() {
        let zero_eps = CarouselConfig {
            velocity_epsilon: 0.0,
            ..Default::default()
        };
        assert!(zero_eps.validate().is_err());

        let negative_radius = CarouselConfig {
            min_radius: -1.0,
            ..Default::default()
        };
        assert!(negative_radius.validate().is_err());

        let negative_gap = CarouselConfig {
            gap: -0.5,
            ..Default::default()
        };
        assert!(negative_gap.validate().is_err());
    }

    #[test]
    fn test_json_partial_fills_defaults() {
        let config = CarouselConfig::from_json(r#"{"auto_rotate_speed": 2.0}"#).unwrap();
        assert_eq!(config.auto_rotate_speed, 2.0);
        assert_eq!(config.decay, DEFAULT_DECAY);
    }

    #[test]
    fn test_json_survives_embedding() {
        let config = CarouselConfig {
            min_radius: 420.0,
            ..Default::default()
        };
        let json = config.to_json().unwrap();
        assert_eq!(CarouselConfig::from_json(&json).unwrap(), config);
    }

    #[test]
    fn test_json_rejects_invalid_values() {
        assert!(matches!(
            CarouselConfig::from_json(r#"{"decay": 0.0}"#),
            Err(ConfigError::OutOfRange { field: "decay", .. })
        ));
        assert!(matches!(
            CarouselConfig::from_json("[]"),
            Err(ConfigError::Malformed(_))
        ));
    }
}
