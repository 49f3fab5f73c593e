//! The read → format → present pipeline behind the page.

use std::future::Future;

use crate::controls::ControlSource;
use crate::error::ClipboardError;
use crate::format::{css_declaration, format_box_shadow};
use crate::params::ShadowParams;

pub const COPY_CONFIRMATION: &str = "Code copied to clipboard!";

/// The preview element and the code display.
pub trait ShadowSurface {
    /// Sets the preview element's `box-shadow` style. Invalid CSS is the
    /// renderer's problem, not ours.
    fn apply_preview(&self, box_shadow: &str);

    fn render_code(&self, declaration: &str);

    /// The declaration currently shown in the code display.
    fn code_text(&self) -> String;
}

#[allow(async_fn_in_trait)]
pub trait Clipboard {
    async fn write_text(&self, text: &str) -> Result<(), ClipboardError>;
}

/// Shows a blocking notice to the user.
pub trait Notifier {
    fn notify(&self, message: &str);
}

/// Recomputes the shadow from the controls and pushes it to the surface.
///
/// Built once at startup with the control source and surface it works on.
/// It holds no state of its own: the code display is the only thing kept
/// between updates.
#[derive(Debug, Clone)]
pub struct ShadowGenerator<C, S> {
    controls: C,
    surface: S,
}

impl<C, S> ShadowGenerator<C, S>
where
    C: ControlSource,
    S: ShadowSurface,
{
    pub fn new(controls: C, surface: S) -> Self {
        Self { controls, surface }
    }

    pub fn controls(&self) -> &C {
        &self.controls
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    pub fn collect_params(&self) -> ShadowParams {
        self.controls.read().to_params()
    }

    pub fn apply_preview(&self, box_shadow: &str) {
        self.surface.apply_preview(box_shadow);
    }

    pub fn render_code(&self, box_shadow: &str) {
        self.surface.render_code(&css_declaration(box_shadow));
    }

    /// Runs the whole pipeline once and returns the `box-shadow` value.
    ///
    /// Hosts call this on startup and after every control change.
    pub fn update(&self) -> String {
        let box_shadow = format_box_shadow(&self.collect_params());
        self.apply_preview(&box_shadow);
        self.render_code(&box_shadow);
        box_shadow
    }

    /// Copies the displayed declaration to `clipboard`.
    ///
    /// The text is captured when this is called, so updates made while the
    /// write is pending do not change what gets copied.
    pub fn copy_to_clipboard<'a, B, N>(
        &self,
        clipboard: &'a B,
        notifier: &'a N,
    ) -> impl Future<Output = Result<(), ClipboardError>> + use<'a, B, N, C, S>
    where
        B: Clipboard,
        N: Notifier,
    {
        copy_text(self.surface.code_text(), clipboard, notifier)
    }
}

/// Writes `text` to `clipboard` and confirms through `notifier` on success.
///
/// A failed write is handed back to the caller without any notice.
async fn copy_text<B, N>(text: String, clipboard: &B, notifier: &N) -> Result<(), ClipboardError>
where
    B: Clipboard,
    N: Notifier,
{
    match clipboard.write_text(&text).await {
        Ok(()) => {
            notifier.notify(COPY_CONFIRMATION);
            Ok(())
        }
        Err(error) => Err(error),
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;

    use futures::executor::block_on;

    use super::*;
    use crate::config::ControlsConfig;
    use crate::controls::{ControlId, ControlReading, ControlValue};

    #[derive(Default)]
    struct RecordingSurface {
        preview: RefCell<String>,
        code: RefCell<String>,
    }

    impl ShadowSurface for RecordingSurface {
        fn apply_preview(&self, box_shadow: &str) {
            *self.preview.borrow_mut() = box_shadow.to_string();
        }

        fn render_code(&self, declaration: &str) {
            *self.code.borrow_mut() = declaration.to_string();
        }

        fn code_text(&self) -> String {
            self.code.borrow().clone()
        }
    }

    #[derive(Default)]
    struct SharedControls(RefCell<ControlReading>);

    impl SharedControls {
        fn set(&self, control: ControlId, value: ControlValue) {
            self.0.borrow_mut().set(control, value);
        }
    }

    impl ControlSource for SharedControls {
        fn read(&self) -> ControlReading {
            self.0.borrow().clone()
        }
    }

    #[derive(Default)]
    struct RecordingClipboard {
        written: RefCell<Vec<String>>,
        reject: bool,
    }

    impl Clipboard for RecordingClipboard {
        async fn write_text(&self, text: &str) -> Result<(), ClipboardError> {
            if self.reject {
                return Err(ClipboardError::WriteRejected("NotAllowedError".to_string()));
            }
            self.written.borrow_mut().push(text.to_string());
            Ok(())
        }
    }

    #[derive(Default)]
    struct RecordingNotifier(RefCell<Vec<String>>);

    impl Notifier for RecordingNotifier {
        fn notify(&self, message: &str) {
            self.0.borrow_mut().push(message.to_string());
        }
    }

    fn default_generator() -> ShadowGenerator<SharedControls, RecordingSurface> {
        let reading = ControlReading::from_config(&ControlsConfig::default());
        ShadowGenerator::new(SharedControls(RefCell::new(reading)), RecordingSurface::default())
    }

    #[test]
    fn first_update_reflects_the_defaults() {
        let generator = default_generator();
        let value = generator.update();

        assert_eq!(value, " 10px 10px 5px 0px rgba(255, 0, 0, 0.8)");
        assert_eq!(*generator.surface().preview.borrow(), value);
        assert_eq!(
            generator.surface().code_text(),
            "box-shadow:  10px 10px 5px 0px rgba(255, 0, 0, 0.8);"
        );
    }

    #[test]
    fn update_follows_control_changes() {
        let generator = default_generator();
        generator.update();

        generator.controls().set(ControlId::Inset, ControlValue::Checked(true));
        generator.controls().set(ControlId::Color, ControlValue::Text("#ffffff".into()));
        generator.controls().set(ControlId::Opacity, ControlValue::Text("0.5".into()));
        let value = generator.update();

        assert_eq!(value, "inset 10px 10px 5px 0px rgba(255, 255, 255, 0.5)");
        assert_eq!(
            generator.surface().code_text(),
            "box-shadow: inset 10px 10px 5px 0px rgba(255, 255, 255, 0.5);"
        );
    }

    #[test]
    fn malformed_input_does_not_block_the_pipeline() {
        let generator = default_generator();
        generator.controls().set(ControlId::HorizontalOffset, ControlValue::Text(String::new()));

        let value = generator.update();

        assert_eq!(value, " NaNpx 10px 5px 0px rgba(255, 0, 0, 0.8)");
        assert_eq!(*generator.surface().preview.borrow(), value);
    }

    #[test]
    fn copy_writes_the_displayed_code_and_confirms() {
        let generator = default_generator();
        generator.update();
        let clipboard = RecordingClipboard::default();
        let notifier = RecordingNotifier::default();

        let result = block_on(generator.copy_to_clipboard(&clipboard, &notifier));

        assert_eq!(result, Ok(()));
        assert_eq!(
            *clipboard.written.borrow(),
            vec!["box-shadow:  10px 10px 5px 0px rgba(255, 0, 0, 0.8);".to_string()]
        );
        assert_eq!(*notifier.0.borrow(), vec![COPY_CONFIRMATION.to_string()]);
    }

    #[test]
    fn copy_uses_the_text_shown_when_invoked() {
        let generator = default_generator();
        generator.update();
        let clipboard = RecordingClipboard::default();
        let notifier = RecordingNotifier::default();

        let pending = generator.copy_to_clipboard(&clipboard, &notifier);
        generator.controls().set(ControlId::BlurRadius, ControlValue::Text("40".into()));
        generator.update();
        block_on(pending).unwrap();

        assert_eq!(
            *clipboard.written.borrow(),
            vec!["box-shadow:  10px 10px 5px 0px rgba(255, 0, 0, 0.8);".to_string()]
        );
        assert!(generator.surface().code_text().contains("40px"));
    }

    #[test]
    fn rejected_copy_returns_the_error_without_notice() {
        let generator = default_generator();
        generator.update();
        let clipboard = RecordingClipboard { reject: true, ..Default::default() };
        let notifier = RecordingNotifier::default();

        let result = block_on(generator.copy_to_clipboard(&clipboard, &notifier));

        assert_eq!(
            result,
            Err(ClipboardError::WriteRejected("NotAllowedError".to_string()))
        );
        assert!(clipboard.written.borrow().is_empty());
        assert!(notifier.0.borrow().is_empty());
    }
}
