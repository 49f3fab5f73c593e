use crate::numeric::ParsedInt;

/// One snapshot of the shadow parameters.
///
/// Built from the controls on every update and dropped as soon as it has been
/// turned into CSS text.
#[derive(Debug, Clone, PartialEq)]
pub struct ShadowParams {
    pub horizontal_offset: ParsedInt,
    pub vertical_offset: ParsedInt,
    /// Non-negative by slider range only.
    pub blur_radius: ParsedInt,
    pub spread_radius: ParsedInt,
    /// `#rrggbb` as delivered by the color picker. Not validated.
    pub color: String,
    pub opacity: f64,
    pub inset: bool,
}

impl ShadowParams {
    pub fn new(
        horizontal_offset: impl Into<ParsedInt>,
        vertical_offset: impl Into<ParsedInt>,
        blur_radius: impl Into<ParsedInt>,
        spread_radius: impl Into<ParsedInt>,
        color: impl Into<String>,
        opacity: f64,
        inset: bool,
    ) -> Self {
        Self {
            horizontal_offset: horizontal_offset.into(),
            vertical_offset: vertical_offset.into(),
            blur_radius: blur_radius.into(),
            spread_radius: spread_radius.into(),
            color: color.into(),
            opacity,
            inset,
        }
    }
}
