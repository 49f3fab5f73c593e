//! Event channel from UI handlers to Actors.

use futures::channel::mpsc::{UnboundedReceiver, UnboundedSender, unbounded};
#[cfg(debug_assertions)]
use std::sync::{Arc, OnceLock};

/// Sending half of an event stream.
///
/// Name relays after the event source: `copy_button_pressed_relay`, not
/// `copy_relay`. In debug builds a relay remembers the first call site that
/// sent through it and rejects sends from any other call site, so every event
/// has exactly one origin.
#[derive(Clone, Debug)]
pub struct Relay<T>
where
    T: Clone + Send + Sync + 'static,
{
    sender: UnboundedSender<T>,
    #[cfg(debug_assertions)]
    emit_location: Arc<OnceLock<&'static std::panic::Location<'static>>>,
}

#[derive(Debug, Clone)]
pub enum RelayError {
    /// The receiving stream was dropped.
    ChannelClosed,
    #[cfg(debug_assertions)]
    MultipleEmitters {
        previous: &'static std::panic::Location<'static>,
        current: &'static std::panic::Location<'static>,
    },
}

impl std::fmt::Display for RelayError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RelayError::ChannelClosed => write!(f, "receiving stream was dropped"),
            #[cfg(debug_assertions)]
            RelayError::MultipleEmitters { previous, current } => {
                write!(f, "sent from {current}, but this relay belongs to {previous}")
            }
        }
    }
}

impl<T> Relay<T>
where
    T: Clone + Send + Sync + 'static,
{
    pub fn new() -> (Self, UnboundedReceiver<T>) {
        let (sender, receiver) = unbounded();
        let relay = Relay {
            sender,
            #[cfg(debug_assertions)]
            emit_location: Arc::new(OnceLock::new()),
        };
        (relay, receiver)
    }

    #[cfg(debug_assertions)]
    #[track_caller]
    fn check_single_source(&self) -> Result<(), RelayError> {
        let caller = std::panic::Location::caller();
        match self.emit_location.set(caller) {
            Ok(()) => Ok(()),
            Err(_) => {
                let previous = *self.emit_location.get().unwrap_or(&caller);
                if previous == caller {
                    Ok(())
                } else {
                    Err(RelayError::MultipleEmitters { previous, current: caller })
                }
            }
        }
    }

    #[track_caller]
    pub fn try_send(&self, value: T) -> Result<(), RelayError> {
        #[cfg(debug_assertions)]
        self.check_single_source()?;

        self.sender
            .unbounded_send(value)
            .map_err(|_| RelayError::ChannelClosed)
    }
}

pub fn relay<T>() -> (Relay<T>, UnboundedReceiver<T>)
where
    T: Clone + Send + Sync + 'static,
{
    Relay::new()
}

#[cfg(test)]
mod tests {
    use super::*;
    use futures::StreamExt;

    #[tokio::test]
    async fn events_arrive_in_order() {
        let (copy_button_pressed_relay, mut stream) = relay::<String>();

        for text in ["box-shadow: a;", "box-shadow: b;"] {
            copy_button_pressed_relay.try_send(text.to_string()).unwrap();
        }

        assert_eq!(stream.next().await.as_deref(), Some("box-shadow: a;"));
        assert_eq!(stream.next().await.as_deref(), Some("box-shadow: b;"));
    }

    #[tokio::test]
    async fn try_send_fails_once_the_stream_is_gone() {
        let (relay, stream) = Relay::<String>::new();
        drop(stream);

        assert!(matches!(
            relay.try_send("lost".to_string()),
            Err(RelayError::ChannelClosed)
        ));
    }

    #[cfg(debug_assertions)]
    #[test]
    fn second_call_site_is_rejected_in_debug() {
        fn send_from_elsewhere(relay: &Relay<String>) -> Result<(), RelayError> {
            relay.try_send("second".to_string())
        }

        let (relay, _stream) = relay::<String>();
        relay.try_send("first".to_string()).unwrap();

        assert!(matches!(
            send_from_elsewhere(&relay),
            Err(RelayError::MultipleEmitters { .. })
        ));
    }
}
