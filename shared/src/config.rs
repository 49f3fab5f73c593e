//! Control ranges and initial values, stored as TOML by the backend.

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

pub const DEFAULT_COLOR: &str = "#ff0000";

#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
#[serde(default)]
pub struct GeneratorConfig {
    pub app: AppSection,
    pub controls: ControlsConfig,
}

impl GeneratorConfig {
    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(content)?)
    }

    pub fn to_toml(&self) -> Result<String, ConfigError> {
        Ok(toml::to_string_pretty(self)?)
    }

    /// Repairs values the UI cannot represent and returns one warning per fix.
    ///
    /// An unsupported version replaces the whole config with defaults.
    pub fn validate_and_fix(&mut self) -> Vec<String> {
        if !self.app.is_supported_version() {
            let warning = format!(
                "Unsupported config version '{}', recreated with defaults",
                self.app.version
            );
            *self = Self::default();
            return vec![warning];
        }
        self.controls.validate_and_fix()
    }
}

// Versioning metadata so future format changes can be migrated.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct AppSection {
    pub version: String,
}

impl AppSection {
    pub const CURRENT_VERSION: &'static str = "1.0.0";

    pub fn is_supported_version(&self) -> bool {
        matches!(self.version.as_str(), "1.0.0")
    }
}

impl Default for AppSection {
    fn default() -> Self {
        Self {
            version: Self::CURRENT_VERSION.to_string(),
        }
    }
}

/// Bounds and initial value of an integer slider, in pixels.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub struct SliderRange {
    pub min: i64,
    pub max: i64,
    pub step: i64,
    pub default: i64,
}

impl SliderRange {
    pub const fn new(min: i64, max: i64, default: i64) -> Self {
        Self { min, max, step: 1, default }
    }

    fn validate_and_fix(&mut self, name: &str, warnings: &mut Vec<String>) {
        if self.min > self.max {
            std::mem::swap(&mut self.min, &mut self.max);
            warnings.push(format!("{name}: min was above max, swapped"));
        }
        if self.step <= 0 {
            self.step = 1;
            warnings.push(format!("{name}: step must be positive, reset to 1"));
        }
        let clamped = self.default.clamp(self.min, self.max);
        if clamped != self.default {
            warnings.push(format!(
                "{name}: default {} outside {}..={}, clamped to {clamped}",
                self.default, self.min, self.max
            ));
            self.default = clamped;
        }
    }
}

/// Bounds and initial value of the opacity slider.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq)]
pub struct OpacityRange {
    pub min: f64,
    pub max: f64,
    pub step: f64,
    pub default: f64,
}

impl Default for OpacityRange {
    fn default() -> Self {
        Self {
            min: 0.0,
            max: 1.0,
            step: 0.1,
            default: 0.8,
        }
    }
}

impl OpacityRange {
    fn validate_and_fix(&mut self, warnings: &mut Vec<String>) {
        let fallback = Self::default();
        if !(self.min.is_finite() && self.max.is_finite() && self.step.is_finite()) {
            *self = fallback;
            warnings.push("opacity: non-finite bounds, reset to defaults".to_string());
            return;
        }
        if self.min > self.max {
            std::mem::swap(&mut self.min, &mut self.max);
            warnings.push("opacity: min was above max, swapped".to_string());
        }
        let (min, max) = (self.min.clamp(0.0, 1.0), self.max.clamp(0.0, 1.0));
        if (min, max) != (self.min, self.max) {
            warnings.push(format!("opacity: bounds clamped to {min}..={max}"));
            self.min = min;
            self.max = max;
        }
        if self.step <= 0.0 {
            self.step = fallback.step;
            warnings.push(format!("opacity: step must be positive, reset to {}", fallback.step));
        }
        let clamped = if self.default.is_nan() {
            fallback.default.clamp(self.min, self.max)
        } else {
            self.default.clamp(self.min, self.max)
        };
        if clamped != self.default {
            warnings.push(format!("opacity: default {} clamped to {clamped}", self.default));
            self.default = clamped;
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct ControlsConfig {
    // Plain values stay ahead of the tables so TOML output keeps them at the
    // top of `[controls]`.
    pub color: String,
    pub inset: bool,
    pub h_shadow: SliderRange,
    pub v_shadow: SliderRange,
    pub blur_radius: SliderRange,
    pub spread_radius: SliderRange,
    pub opacity: OpacityRange,
}

impl Default for ControlsConfig {
    fn default() -> Self {
        Self {
            color: DEFAULT_COLOR.to_string(),
            inset: false,
            h_shadow: SliderRange::new(-100, 100, 10),
            v_shadow: SliderRange::new(-100, 100, 10),
            blur_radius: SliderRange::new(0, 100, 5),
            spread_radius: SliderRange::new(-50, 50, 0),
            opacity: OpacityRange::default(),
        }
    }
}

impl ControlsConfig {
    fn validate_and_fix(&mut self) -> Vec<String> {
        let mut warnings = Vec::new();
        self.h_shadow.validate_and_fix("h_shadow", &mut warnings);
        self.v_shadow.validate_and_fix("v_shadow", &mut warnings);
        self.blur_radius.validate_and_fix("blur_radius", &mut warnings);
        self.spread_radius.validate_and_fix("spread_radius", &mut warnings);
        self.opacity.validate_and_fix(&mut warnings);
        if !is_hex_color(&self.color) {
            warnings.push(format!(
                "color: '{}' is not #rrggbb, reset to {DEFAULT_COLOR}",
                self.color
            ));
            self.color = DEFAULT_COLOR.to_string();
        }
        warnings
    }
}

/// `true` for `#rrggbb`, the only form a color picker reports.
pub fn is_hex_color(color: &str) -> bool {
    color.len() == 7
        && color.starts_with('#')
        && color[1..].chars().all(|c| c.is_ascii_hexdigit())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_survive_a_toml_round_trip() {
        let config = GeneratorConfig::default();
        let text = config.to_toml().unwrap();
        assert!(text.contains("color = \"#ff0000\""));
        assert_eq!(GeneratorConfig::from_toml(&text).unwrap(), config);
    }

    #[test]
    fn partial_files_fall_back_to_defaults() {
        let config = GeneratorConfig::from_toml(
            r#"
            [controls]
            inset = true

            [controls.blur_radius]
            min = 0
            max = 40
            step = 2
            default = 12
            "#,
        )
        .unwrap();
        assert!(config.controls.inset);
        assert_eq!(config.controls.blur_radius.max, 40);
        assert_eq!(config.controls.blur_radius.default, 12);
        assert_eq!(config.controls.h_shadow, SliderRange::new(-100, 100, 10));
        assert_eq!(config.app.version, AppSection::CURRENT_VERSION);
    }

    #[test]
    fn invalid_toml_is_a_parse_error() {
        let error = GeneratorConfig::from_toml("[controls\ncolor = 1").unwrap_err();
        assert!(matches!(error, ConfigError::Parse(_)));
    }

    #[test]
    fn validate_repairs_ranges_and_color() {
        let mut config = GeneratorConfig::default();
        config.controls.h_shadow = SliderRange { min: 50, max: -50, step: 0, default: 80 };
        config.controls.opacity.default = 3.0;
        config.controls.color = "red".to_string();

        let warnings = config.validate_and_fix();

        assert_eq!(config.controls.h_shadow, SliderRange { min: -50, max: 50, step: 1, default: 50 });
        assert_eq!(config.controls.opacity.default, 1.0);
        assert_eq!(config.controls.color, DEFAULT_COLOR);
        assert_eq!(warnings.len(), 5);
    }

    #[test]
    fn validate_keeps_a_valid_config() {
        let mut config = GeneratorConfig::default();
        assert!(config.validate_and_fix().is_empty());
        assert_eq!(config, GeneratorConfig::default());
    }

    #[test]
    fn unsupported_version_is_recreated() {
        let mut config = GeneratorConfig::default();
        config.app.version = "0.1.0".to_string();
        config.controls.inset = true;

        let warnings = config.validate_and_fix();

        assert_eq!(warnings.len(), 1);
        assert_eq!(config, GeneratorConfig::default());
    }

    #[test]
    fn non_finite_opacity_bounds_reset() {
        let mut config = GeneratorConfig::default();
        config.controls.opacity.max = f64::INFINITY;
        config.validate_and_fix();
        assert_eq!(config.controls.opacity, OpacityRange::default());
    }

    #[test]
    fn config_serializes_to_json_for_transport() {
        let config = GeneratorConfig::default();
        let json = serde_json::to_string(&config).unwrap();
        let restored: GeneratorConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(restored, config);
    }

    #[test]
    fn hex_color_check() {
        assert!(is_hex_color("#00ffAA"));
        assert!(!is_hex_color("#00ffA"));
        assert!(!is_hex_color("00ffAA0"));
        assert!(!is_hex_color("#00ffAG"));
    }
}
