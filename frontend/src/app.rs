//! ShadowGeneratorApp - owns the generator, its Actors and the page layout

use std::sync::Arc;

use shared::{ClipboardError, GeneratorConfig, ShadowGenerator, UpMsg, css_declaration};
use zoon::*;

use crate::clipboard::{CopyStatus, copy_status_actor, start_copy};
use crate::connection::{ConnectionAdapter, down_msg_actor};
use crate::controls::{ShadowControls, WebShadowGenerator, controls_panel};
use crate::dataflow::{Actor, Relay, relay};
use crate::surface::PreviewSurface;

pub struct ShadowGeneratorApp {
    generator: WebShadowGenerator,

    /// Backend connection, used once at startup to fetch the control config
    connection: Arc<ConnectionAdapter>,

    // === EVENT-SOURCE RELAYS ===
    /// Clipboard write finished, carrying its outcome
    clipboard_write_finished_relay: Relay<Result<(), ClipboardError>>,

    copy_status: Actor<CopyStatus>,
    down_msg_actor: Actor<()>,
}

impl ShadowGeneratorApp {
    /// Builds the generator from the built-in defaults and renders it once,
    /// then asks the backend for the configured defaults.
    pub fn new() -> Self {
        let config = GeneratorConfig::default();
        let generator = ShadowGenerator::new(
            ShadowControls::new(config.controls),
            PreviewSurface::default(),
        );
        let box_shadow = generator.update();
        zoon::println!("Initial render: {}", css_declaration(&box_shadow));

        let (clipboard_write_finished_relay, clipboard_write_finished_stream) = relay();
        let copy_status = copy_status_actor(clipboard_write_finished_stream);

        let (connection, down_msg_stream) = ConnectionAdapter::new();
        let down_msg_actor = down_msg_actor(generator.clone(), down_msg_stream);
        let connection = Arc::new(connection);

        Task::start({
            let connection = connection.clone();
            async move { connection.send_up_msg(UpMsg::LoadConfig).await }
        });

        Self {
            generator,
            connection,
            clipboard_write_finished_relay,
            copy_status,
            down_msg_actor,
        }
    }

    /// Root UI element. Takes ownership so the Actors live as long as the page.
    pub fn root(self) -> impl Element {
        let Self {
            generator,
            connection,
            clipboard_write_finished_relay,
            copy_status,
            down_msg_actor,
        } = self;

        Column::new()
            .s(Width::fill())
            .s(Height::screen())
            .s(Padding::all(32))
            .s(Gap::new().y(32))
            .s(Font::new().family([
                FontFamily::new("Inter"),
                FontFamily::new("system-ui"),
                FontFamily::SansSerif,
            ]))
            .item(
                El::new()
                    .s(Font::new().size(24).weight(FontWeight::Bold))
                    .child(Text::new("Box Shadow Generator")),
            )
            .item(
                Row::new()
                    .s(Gap::new().x(64))
                    .item(El::new().s(Width::exact(420)).child(controls_panel(generator.clone())))
                    .item(
                        El::new()
                            .s(Padding::all(64))
                            .child(generator.surface().preview_element()),
                    ),
            )
            .item(code_row(&generator, clipboard_write_finished_relay, &copy_status))
            .after_remove(move |_| drop((connection, copy_status, down_msg_actor)))
    }
}

fn code_row(
    generator: &WebShadowGenerator,
    clipboard_write_finished_relay: Relay<Result<(), ClipboardError>>,
    copy_status: &Actor<CopyStatus>,
) -> impl Element {
    let copy_generator = generator.clone();

    Row::new()
        .s(Gap::new().x(16))
        .s(Align::new().center_y())
        .item(
            El::new()
                .s(Padding::new().x(12).y(8))
                .s(RoundedCorners::all(4))
                .s(Background::new().color("rgb(241, 245, 249)"))
                .child(generator.surface().code_element()),
        )
        .item(
            Button::new()
                .s(Padding::new().x(16).y(8))
                .s(RoundedCorners::all(4))
                .s(Background::new().color("rgb(37, 99, 235)"))
                .s(Font::new().color("rgb(255, 255, 255)"))
                .label("Copy")
                .on_press(move || start_copy(&copy_generator, &clipboard_write_finished_relay)),
        )
        .item(
            El::new()
                .s(Font::new().size(12).color("rgb(100, 116, 139)"))
                .child(Text::with_signal(copy_status.signal().map(|status| match status {
                    CopyStatus::Copied => "Copied",
                    CopyStatus::Idle | CopyStatus::Failed => "",
                }))),
        )
}
