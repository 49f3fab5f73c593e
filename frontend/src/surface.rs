use shared::ShadowSurface;
use zoon::*;

pub const PREVIEW_ELEMENT_ID: &str = "element";
pub const CODE_ELEMENT_ID: &str = "code";

/// Preview element and code display, bound to the page through signals.
///
/// `apply_preview` is the only writer of the preview style and `render_code`
/// the only writer of the code text.
#[derive(Clone, Debug, Default)]
pub struct PreviewSurface {
    box_shadow: Mutable<String>,
    code: Mutable<String>,
}

impl ShadowSurface for PreviewSurface {
    fn apply_preview(&self, box_shadow: &str) {
        self.box_shadow.set_neq(box_shadow.to_owned());
    }

    fn render_code(&self, declaration: &str) {
        self.code.set_neq(declaration.to_owned());
    }

    fn code_text(&self) -> String {
        self.code.get_cloned()
    }
}

impl PreviewSurface {
    pub fn preview_element(&self) -> impl Element {
        let box_shadow = self.box_shadow.clone();
        El::new()
            .s(Width::exact(200))
            .s(Height::exact(200))
            .s(Align::center())
            .s(RoundedCorners::all(8))
            .s(Background::new().color("rgb(255, 255, 255)"))
            .update_raw_el(move |raw_el| {
                raw_el
                    .attr("id", PREVIEW_ELEMENT_ID)
                    .style_signal("box-shadow", box_shadow.signal_cloned())
            })
    }

    pub fn code_element(&self) -> impl Element {
        RawHtmlEl::new("code")
            .attr("id", CODE_ELEMENT_ID)
            .style("font-family", "'Fira Code', monospace")
            .style("white-space", "pre")
            .child(Text::with_signal(self.code.signal_cloned()))
    }
}
