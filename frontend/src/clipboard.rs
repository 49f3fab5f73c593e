use futures::StreamExt;
use futures::channel::mpsc::UnboundedReceiver;
use shared::{Clipboard, ClipboardError, Notifier};
use wasm_bindgen_futures::{JsFuture, spawn_local};

use crate::controls::WebShadowGenerator;
use crate::dataflow::{Actor, Relay};

/// Outcome of the latest copy request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CopyStatus {
    #[default]
    Idle,
    Copied,
    Failed,
}

impl From<&Result<(), ClipboardError>> for CopyStatus {
    fn from(result: &Result<(), ClipboardError>) -> Self {
        match result {
            Ok(()) => CopyStatus::Copied,
            Err(_) => CopyStatus::Failed,
        }
    }
}

/// `navigator.clipboard` of the current window.
pub struct WebClipboard;

pub static WEB_CLIPBOARD: WebClipboard = WebClipboard;

impl Clipboard for WebClipboard {
    async fn write_text(&self, text: &str) -> Result<(), ClipboardError> {
        let window = web_sys::window().ok_or(ClipboardError::Unavailable)?;
        let promise = window.navigator().clipboard().write_text(text);
        JsFuture::from(promise)
            .await
            .map(|_| ())
            .map_err(|error| ClipboardError::WriteRejected(format!("{error:?}")))
    }
}

/// Blocking `window.alert`.
pub struct AlertNotifier;

pub static ALERT_NOTIFIER: AlertNotifier = AlertNotifier;

impl Notifier for AlertNotifier {
    fn notify(&self, message: &str) {
        let Some(window) = web_sys::window() else {
            return;
        };
        if let Err(error) = window.alert_with_message(message) {
            zoon::eprintln!("Failed to show notice: {:?}", error);
        }
    }
}

/// Copies the code shown right now and reports the outcome through
/// `clipboard_write_finished_relay`.
///
/// The text is taken before this returns. The write itself runs on a local
/// task, so a slow permission prompt does not block the page.
pub fn start_copy(
    generator: &WebShadowGenerator,
    clipboard_write_finished_relay: &Relay<Result<(), ClipboardError>>,
) {
    let copy = generator.copy_to_clipboard(&WEB_CLIPBOARD, &ALERT_NOTIFIER);
    let clipboard_write_finished_relay = clipboard_write_finished_relay.clone();
    spawn_local(async move {
        let result = copy.await;
        if let Err(error) = clipboard_write_finished_relay.try_send(result) {
            zoon::eprintln!("Copy result dropped: {}", error);
        }
    });
}

/// Tracks the outcome of finished clipboard writes. A failure is only logged;
/// the page shows no error.
pub fn copy_status_actor(
    mut clipboard_write_finished_stream: UnboundedReceiver<Result<(), ClipboardError>>,
) -> Actor<CopyStatus> {
    Actor::new(CopyStatus::Idle, async move |status| {
        while let Some(result) = clipboard_write_finished_stream.next().await {
            if let Err(error) = &result {
                zoon::eprintln!("Clipboard error: {}", error);
            }
            status.set(CopyStatus::from(&result));
        }
    })
}
