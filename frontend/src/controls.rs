//! The control panel: sliders, color picker and inset checkbox.

use shared::{
    ControlId, ControlKind, ControlReading, ControlSource, ControlValue, ControlsConfig,
    parse_float, to_fixed_one,
};
use zoon::*;

use crate::surface::PreviewSurface;

pub type WebShadowGenerator = shared::ShadowGenerator<ShadowControls, PreviewSurface>;

/// Current values of all controls plus the config the widgets were built from.
///
/// Widgets are built from `config` with the current values as their initial
/// state and report edits back through [`ShadowControls::set`]. Replacing the
/// config rebuilds the panel.
#[derive(Clone, Debug)]
pub struct ShadowControls {
    reading: Mutable<ControlReading>,
    config: Mutable<ControlsConfig>,
}

impl ShadowControls {
    pub fn new(config: ControlsConfig) -> Self {
        Self {
            reading: Mutable::new(ControlReading::from_config(&config)),
            config: Mutable::new(config),
        }
    }

    pub fn set(&self, control: ControlId, value: ControlValue) {
        if !self.reading.lock_mut().set(control, value) {
            zoon::eprintln!("Ignored mismatched value for control '{}'", control.dom_id());
        }
    }

    /// Resets every control to the defaults of `config`.
    pub fn reset(&self, config: ControlsConfig) {
        self.reading.set(ControlReading::from_config(&config));
        self.config.set(config);
    }

    fn opacity_label_signal(&self) -> impl Signal<Item = String> + use<> {
        self.reading
            .signal_ref(|reading| to_fixed_one(parse_float(&reading.opacity)))
    }
}

impl ControlSource for ShadowControls {
    fn read(&self) -> ControlReading {
        self.reading.get_cloned()
    }
}

/// Panel with one row per control, rebuilt whenever the config changes.
pub fn controls_panel(generator: WebShadowGenerator) -> impl Element {
    let config_signal = generator.controls().config.signal_cloned();
    El::new().s(Width::fill()).child_signal(config_signal.map(move |config| {
        let reading = generator.controls().read();
        Column::new()
            .s(Gap::new().y(12))
            .s(Width::fill())
            .items(
                ControlId::ALL
                    .into_iter()
                    .map(|control| control_row(&generator, &config, &reading, control)),
            )
    }))
}

fn control_row(
    generator: &WebShadowGenerator,
    config: &ControlsConfig,
    reading: &ControlReading,
    control: ControlId,
) -> impl Element {
    let label = RawHtmlEl::new("label")
        .attr("for", control.dom_id())
        .style("min-width", "140px")
        .child(Text::new(control.label()));

    let input = control_input(generator, config, reading.value(control), control);

    let value_label = (control.kind() == ControlKind::DecimalSlider).then(|| {
        El::new()
            .s(Width::exact(32))
            .child(Text::with_signal(generator.controls().opacity_label_signal()))
    });

    Row::new()
        .s(Gap::new().x(12))
        .s(Align::new().center_y())
        .item(label)
        .item(input)
        .item(value_label)
}

fn control_input(
    generator: &WebShadowGenerator,
    config: &ControlsConfig,
    value: ControlValue,
    control: ControlId,
) -> RawHtmlEl<web_sys::HtmlElement> {
    let input = RawHtmlEl::new("input").attr("id", control.dom_id());

    let input = match control.kind() {
        ControlKind::IntegerSlider => {
            let range = match control {
                ControlId::HorizontalOffset => config.h_shadow,
                ControlId::VerticalOffset => config.v_shadow,
                ControlId::BlurRadius => config.blur_radius,
                _ => config.spread_radius,
            };
            input
                .attr("type", "range")
                .attr("min", &range.min.to_string())
                .attr("max", &range.max.to_string())
                .attr("step", &range.step.to_string())
        }
        ControlKind::DecimalSlider => input
            .attr("type", "range")
            .attr("min", &config.opacity.min.to_string())
            .attr("max", &config.opacity.max.to_string())
            .attr("step", &config.opacity.step.to_string()),
        ControlKind::ColorPicker => input.attr("type", "color"),
        ControlKind::Checkbox => input.attr("type", "checkbox"),
    };

    match value {
        ControlValue::Text(text) => {
            let generator = generator.clone();
            input
                .attr("value", &text)
                .event_handler(move |event: zoon::events::Input| {
                    if let Some(element) = event.dyn_target::<web_sys::HtmlInputElement>() {
                        generator.controls().set(control, ControlValue::Text(element.value()));
                        generator.update();
                    }
                })
        }
        ControlValue::Checked(checked) => {
            let generator = generator.clone();
            let input = if checked { input.attr("checked", "") } else { input };
            input.event_handler(move |event: zoon::events::Change| {
                if let Some(element) = event.dyn_target::<web_sys::HtmlInputElement>() {
                    generator.controls().set(control, ControlValue::Checked(element.checked()));
                    generator.update();
                }
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use futures::StreamExt;
    use shared::{ShadowGenerator, ShadowSurface};

    use super::*;

    fn web_generator() -> WebShadowGenerator {
        ShadowGenerator::new(
            ShadowControls::new(ControlsConfig::default()),
            PreviewSurface::default(),
        )
    }

    #[test]
    fn non_numeric_input_renders_nan() {
        let generator = web_generator();

        generator.controls().set(ControlId::VerticalOffset, ControlValue::Text("abc".into()));
        let box_shadow = generator.update();

        assert_eq!(box_shadow, " 10px NaNpx 5px 0px rgba(255, 0, 0, 0.8)");
        assert!(generator.surface().code_text().contains("NaNpx"));
    }

    #[test]
    fn mismatched_value_is_ignored() {
        let generator = web_generator();

        generator.controls().set(ControlId::Inset, ControlValue::Text("true".into()));
        generator.controls().set(ControlId::BlurRadius, ControlValue::Checked(true));

        assert_eq!(
            generator.controls().read(),
            ControlReading::from_config(&ControlsConfig::default())
        );
    }

    #[test]
    fn reset_discards_edits() {
        let generator = web_generator();
        generator.controls().set(ControlId::Opacity, ControlValue::Text("0.3".into()));

        let mut config = ControlsConfig::default();
        config.opacity.default = 0.5;
        generator.controls().reset(config.clone());

        assert_eq!(generator.controls().read(), ControlReading::from_config(&config));
        assert_eq!(generator.controls().config.get_cloned(), config);
        assert_eq!(generator.update(), " 10px 10px 5px 0px rgba(255, 0, 0, 0.5)");
    }

    #[tokio::test]
    async fn opacity_label_shows_one_decimal() {
        let controls = ShadowControls::new(ControlsConfig::default());
        controls.set(ControlId::Opacity, ControlValue::Text("0.75".into()));

        let label = controls.opacity_label_signal().to_stream().next().await;

        assert_eq!(label.as_deref(), Some("0.8"));
    }
}
