mod input;
mod render;

use std::time::Duration;

use clap::Parser;
use pychat::config::ConfigError;
use pychat::form::MessageForm;
use pychat::session::{self, SessionEnd, UiEvent};
use pychat::{ChatClient, ChatError, ClientConfig, transport};
use tokio::io::{AsyncBufReadExt, BufReader};
use tokio::sync::mpsc;

use crate::render::TerminalRenderer;

#[derive(Debug, thiserror::Error)]
enum CliError {
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error(transparent)]
    Chat(#[from] ChatError),
    #[error("disconnected: {0}")]
    Disconnected(String),
}

/// Command-line overrides. Each flag falls back to its `PYCHAT_*` variable;
/// anything still unset keeps the [`ClientConfig::from_env`] default.
#[derive(Parser, Debug)]
#[command(name = "pychat", about = "Terminal client for pychat direct messages")]
struct Cli {
    #[arg(long, env = "PYCHAT_SERVER_URL")]
    server_url: Option<String>,

    #[arg(long, env = "PYCHAT_SESSION_COOKIE", help = "Cookie header value of a logged-in session")]
    session_cookie: Option<String>,

    #[arg(long, env = "PYCHAT_RECIPIENT_ID", help = "User id of the conversation to open")]
    recipient_id: Option<String>,

    #[arg(long, env = "PYCHAT_TYPING_TIMEOUT_MS")]
    typing_timeout_ms: Option<u64>,

    #[arg(long, env = "PYCHAT_CONNECT_TIMEOUT_SECS")]
    connect_timeout_secs: Option<u64>,
}

impl Cli {
    fn apply(self, mut config: ClientConfig) -> ClientConfig {
        if let Some(url) = self.server_url {
            config.server_url = url;
        }
        if let Some(cookie) = self.session_cookie {
            config.session_cookie = Some(cookie);
        }
        if let Some(id) = self.recipient_id {
            config.recipient_id = id;
        }
        if let Some(ms) = self.typing_timeout_ms {
            config.typing_timeout = Duration::from_millis(ms);
        }
        if let Some(secs) = self.connect_timeout_secs {
            config.connect_timeout = Duration::from_secs(secs);
        }
        config
    }
}

#[tokio::main]
async fn main() -> Result<(), CliError> {
    let _ = dotenvy::dotenv();
    tracing_subscriber::fmt().with_writer(std::io::stderr).init();

    let cli = Cli::parse();
    let config = cli.apply(ClientConfig::from_env()?);

    let conn = transport::connect(&config).await?;
    let mut client = ChatClient::new(
        conn.channel,
        TerminalRenderer::new(std::io::stdout()),
        MessageForm::new(config.recipient_id.clone()),
        config.typing_timeout,
    );

    let (ui_tx, ui_rx) = mpsc::unbounded_channel();
    let reader = tokio::spawn(read_stdin(ui_tx));

    let end = session::run(&mut client, conn.events, ui_rx).await;
    reader.abort();
    conn.task.abort();

    match end {
        SessionEnd::Quit | SessionEnd::UiClosed => Ok(()),
        SessionEnd::Disconnected(reason) => Err(CliError::Disconnected(reason)),
    }
}

async fn read_stdin(tx: mpsc::UnboundedSender<UiEvent>) {
    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    loop {
        let line = match lines.next_line().await {
            Ok(Some(line)) => line,
            Ok(None) => break,
            Err(error) => {
                tracing::warn!(%error, "stdin read failed");
                break;
            }
        };
        for event in input::parse_line(&line) {
            if tx.send(event).is_err() {
                return;
            }
        }
    }
}

#[cfg(test)]
#[path = "main_test.rs"]
mod tests;
