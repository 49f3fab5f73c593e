//! The page controls and the raw values read from them.

use crate::config::ControlsConfig;
use crate::numeric::{parse_float, parse_int};
use crate::params::ShadowParams;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ControlKind {
    IntegerSlider,
    ColorPicker,
    DecimalSlider,
    Checkbox,
}

/// Every control the generator reads, keyed by its DOM id.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ControlId {
    HorizontalOffset,
    VerticalOffset,
    BlurRadius,
    SpreadRadius,
    Color,
    Opacity,
    Inset,
}

impl ControlId {
    /// Page order.
    pub const ALL: [ControlId; 7] = [
        ControlId::HorizontalOffset,
        ControlId::VerticalOffset,
        ControlId::BlurRadius,
        ControlId::SpreadRadius,
        ControlId::Color,
        ControlId::Opacity,
        ControlId::Inset,
    ];

    pub const fn dom_id(self) -> &'static str {
        match self {
            ControlId::HorizontalOffset => "h-shadow",
            ControlId::VerticalOffset => "v-shadow",
            ControlId::BlurRadius => "blur-radius",
            ControlId::SpreadRadius => "spread-radius",
            ControlId::Color => "shadow-color",
            ControlId::Opacity => "shadow-color-opacity",
            ControlId::Inset => "shadow-inset",
        }
    }

    pub const fn kind(self) -> ControlKind {
        match self {
            ControlId::HorizontalOffset
            | ControlId::VerticalOffset
            | ControlId::BlurRadius
            | ControlId::SpreadRadius => ControlKind::IntegerSlider,
            ControlId::Color => ControlKind::ColorPicker,
            ControlId::Opacity => ControlKind::DecimalSlider,
            ControlId::Inset => ControlKind::Checkbox,
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            ControlId::HorizontalOffset => "Horizontal offset",
            ControlId::VerticalOffset => "Vertical offset",
            ControlId::BlurRadius => "Blur radius",
            ControlId::SpreadRadius => "Spread radius",
            ControlId::Color => "Shadow color",
            ControlId::Opacity => "Opacity",
            ControlId::Inset => "Inset",
        }
    }
}

/// A value as a widget reports it: text for sliders and the color picker,
/// the checked state for the checkbox.
#[derive(Debug, Clone, PartialEq)]
pub enum ControlValue {
    Text(String),
    Checked(bool),
}

/// Raw, unparsed state of every control.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ControlReading {
    pub h_shadow: String,
    pub v_shadow: String,
    pub blur_radius: String,
    pub spread_radius: String,
    pub shadow_color: String,
    pub opacity: String,
    pub inset: bool,
}

impl ControlReading {
    /// What the widgets hold right after being built from `config`.
    pub fn from_config(config: &ControlsConfig) -> Self {
        Self {
            h_shadow: config.h_shadow.default.to_string(),
            v_shadow: config.v_shadow.default.to_string(),
            blur_radius: config.blur_radius.default.to_string(),
            spread_radius: config.spread_radius.default.to_string(),
            shadow_color: config.color.clone(),
            opacity: config.opacity.default.to_string(),
            inset: config.inset,
        }
    }

    fn text_slot(&mut self, control: ControlId) -> Option<&mut String> {
        match control {
            ControlId::HorizontalOffset => Some(&mut self.h_shadow),
            ControlId::VerticalOffset => Some(&mut self.v_shadow),
            ControlId::BlurRadius => Some(&mut self.blur_radius),
            ControlId::SpreadRadius => Some(&mut self.spread_radius),
            ControlId::Color => Some(&mut self.shadow_color),
            ControlId::Opacity => Some(&mut self.opacity),
            ControlId::Inset => None,
        }
    }

    pub fn value(&self, control: ControlId) -> ControlValue {
        let text = match control {
            ControlId::HorizontalOffset => &self.h_shadow,
            ControlId::VerticalOffset => &self.v_shadow,
            ControlId::BlurRadius => &self.blur_radius,
            ControlId::SpreadRadius => &self.spread_radius,
            ControlId::Color => &self.shadow_color,
            ControlId::Opacity => &self.opacity,
            ControlId::Inset => return ControlValue::Checked(self.inset),
        };
        ControlValue::Text(text.clone())
    }

    /// Stores a widget value. Returns `false` when the value kind does not
    /// match the control (text for the checkbox or a checked state for a
    /// slider) and leaves the reading untouched.
    pub fn set(&mut self, control: ControlId, value: ControlValue) -> bool {
        match (control, value) {
            (ControlId::Inset, ControlValue::Checked(checked)) => {
                self.inset = checked;
                true
            }
            (control, ControlValue::Text(text)) => match self.text_slot(control) {
                Some(slot) => {
                    *slot = text;
                    true
                }
                None => false,
            },
            (_, ControlValue::Checked(_)) => false,
        }
    }

    /// Parses the raw values. Malformed numbers become `NaN`, never errors.
    pub fn to_params(&self) -> ShadowParams {
        ShadowParams {
            horizontal_offset: parse_int(&self.h_shadow),
            vertical_offset: parse_int(&self.v_shadow),
            blur_radius: parse_int(&self.blur_radius),
            spread_radius: parse_int(&self.spread_radius),
            color: self.shadow_color.clone(),
            opacity: parse_float(&self.opacity),
            inset: self.inset,
        }
    }
}

/// Where the generator reads control values from.
pub trait ControlSource {
    fn read(&self) -> ControlReading;
}

impl ControlSource for ControlReading {
    fn read(&self) -> ControlReading {
        self.clone()
    }
}
