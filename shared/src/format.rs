//! CSS text generation for `box-shadow`.

use std::fmt;

use crate::numeric::{ParsedInt, parse_int_radix, to_fixed_one};
use crate::params::ShadowParams;

pub const INSET_KEYWORD: &str = "inset";

fn hex_channel(hex: &str, offset: usize) -> ParsedInt {
    let pair: String = hex.chars().skip(offset).take(2).collect();
    parse_int_radix(&pair, 16)
}

/// Converts `#rrggbb` plus an opacity into `rgba(r, g, b, a)`.
///
/// Channels are read from the two characters at offsets 1, 3 and 5. A channel
/// that does not start with a hex digit renders as `NaN`.
pub fn hex_to_rgba(hex: &str, opacity: f64) -> String {
    format!(
        "rgba({}, {}, {}, {})",
        hex_channel(hex, 1),
        hex_channel(hex, 3),
        hex_channel(hex, 5),
        to_fixed_one(opacity),
    )
}

/// The `box-shadow` value for `params`.
///
/// The inset slot is always followed by a space, so an outset shadow starts
/// with a single leading space.
pub fn format_box_shadow(params: &ShadowParams) -> String {
    params.to_string()
}

/// The full declaration shown in the code display.
pub fn css_declaration(box_shadow: &str) -> String {
    format!("box-shadow: {box_shadow};")
}

impl fmt::Display for ShadowParams {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let inset = if self.inset { INSET_KEYWORD } else { "" };
        write!(
            f,
            "{inset} {}px {}px {}px {}px {}",
            self.horizontal_offset,
            self.vertical_offset,
            self.blur_radius,
            self.spread_radius,
            hex_to_rgba(&self.color, self.opacity),
        )
    }
}
