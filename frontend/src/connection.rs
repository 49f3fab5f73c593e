use futures::StreamExt;
use futures::channel::mpsc::{UnboundedReceiver, unbounded};
use shared::{DownMsg, UpMsg};
use zoon::*;

use crate::controls::WebShadowGenerator;
use crate::dataflow::Actor;

/// Backend connection that forwards every `DownMsg` into a stream.
pub struct ConnectionAdapter {
    connection: Connection<UpMsg, DownMsg>,
}

impl ConnectionAdapter {
    pub fn new() -> (Self, UnboundedReceiver<DownMsg>) {
        let (message_sender, message_stream) = unbounded();

        let connection = Connection::new(move |down_msg, _| {
            let _ = message_sender.unbounded_send(down_msg);
        });

        (ConnectionAdapter { connection }, message_stream)
    }

    pub async fn send_up_msg(&self, up_msg: UpMsg) {
        if let Err(error) = self.connection.send_up_msg(up_msg).await {
            zoon::eprintln!("Failed to send message: {:?}", error);
        }
    }
}

/// Applies backend messages to the generator as they arrive.
pub fn down_msg_actor(
    generator: WebShadowGenerator,
    mut down_msg_stream: UnboundedReceiver<DownMsg>,
) -> Actor<()> {
    Actor::new((), async move |_state| {
        while let Some(down_msg) = down_msg_stream.next().await {
            handle_down_msg(down_msg, &generator);
        }
    })
}

fn handle_down_msg(down_msg: DownMsg, generator: &WebShadowGenerator) {
    match down_msg {
        DownMsg::ConfigLoaded(mut config) => {
            for warning in config.validate_and_fix() {
                zoon::eprintln!("Config warning: {}", warning);
            }
            generator.controls().reset(config.controls);
            let box_shadow = generator.update();
            zoon::println!("Config applied: {}", shared::css_declaration(&box_shadow));
        }
        DownMsg::ConfigError(error) => {
            zoon::eprintln!("Config error, keeping built-in defaults: {}", error);
        }
    }
}
