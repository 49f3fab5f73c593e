use serde::{Deserialize, Serialize};

pub mod config;
pub mod controls;
pub mod error;
pub mod format;
pub mod generator;
pub mod numeric;
pub mod params;

pub use config::{ControlsConfig, GeneratorConfig, OpacityRange, SliderRange};
pub use controls::{ControlId, ControlKind, ControlReading, ControlSource, ControlValue};
pub use error::{ClipboardError, ConfigError};
pub use format::{css_declaration, format_box_shadow, hex_to_rgba};
pub use generator::{Clipboard, Notifier, ShadowGenerator, ShadowSurface};
pub use numeric::{ParsedInt, parse_float, parse_int, to_fixed_one};
pub use params::ShadowParams;

// ===== MESSAGE TYPES =====

#[derive(Serialize, Deserialize, Debug)]
pub enum UpMsg {
    LoadConfig,
}

#[derive(Serialize, Deserialize, Debug)]
pub enum DownMsg {
    ConfigLoaded(GeneratorConfig),
    ConfigError(String),
}
