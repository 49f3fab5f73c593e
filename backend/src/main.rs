use std::path::Path;

use moon::*;
use shared::{DownMsg, UpMsg};

mod config_store;

use config_store::CONFIG_FILE_PATH;

async fn frontend() -> Frontend {
    Frontend::new()
        .title("Box Shadow Generator")
        .index_by_robots(false)
}

async fn up_msg_handler(req: UpMsgRequest<UpMsg>) {
    let (session_id, cor_id) = (req.session_id, req.cor_id);

    match req.up_msg {
        UpMsg::LoadConfig => load_config(session_id, cor_id).await,
    }
}

async fn load_config(session_id: SessionId, cor_id: CorId) {
    let down_msg = match config_store::load_or_create(Path::new(CONFIG_FILE_PATH)) {
        Ok(config) => {
            log::info!("Serving config from {CONFIG_FILE_PATH}");
            DownMsg::ConfigLoaded(config)
        }
        Err(error) => {
            log::error!("{error:#}");
            DownMsg::ConfigError(format!("{error:#}"))
        }
    };
    send_down_msg(down_msg, session_id, cor_id).await;
}

async fn send_down_msg(msg: DownMsg, session_id: SessionId, cor_id: CorId) {
    if let Some(session) = sessions::by_session_id().wait_for(session_id).await {
        session.send_down_msg(&msg, cor_id).await;
    } else {
        log::debug!("Session closed before the reply was sent");
    }
}

#[moon::main]
async fn main() -> std::io::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    log::info!("Config file: {CONFIG_FILE_PATH}");
    start(frontend, up_msg_handler, |_| {}).await
}
