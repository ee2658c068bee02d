#![recursion_limit = "256"]
//! # Main Entry Point
//!
//! Initializes the bot:
//! - Domain: Configuration and Types
//! - Infrastructure: Matrix, Healthcheck
//! - Application: Loader, Parser, Formatter, Router
//! - Interface: Command Handlers
//!

mod application;
mod domain;
mod infrastructure;
mod interface;
mod strings;

use anyhow::{Context, Result};
use clap::Parser;
use matrix_sdk::{
    config::SyncSettings,
    room::Room,
    ruma::events::room::{
        member::{MembershipState, StrippedRoomMemberEvent},
        message::{MessageType, SyncRoomMessageEvent},
    },
};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::{Duration, SystemTime, UNIX_EPOCH};
use tracing_appender::non_blocking::WorkerGuard;

use crate::application::router::CommandRouter;
use crate::domain::config::AppConfig;
use crate::domain::paths;
use crate::domain::types::IncomingMessage;
use crate::infrastructure::{health, matrix::MatrixService};
use crate::strings::logs;

#[derive(Parser, Debug)]
#[command(name = "memo-bot", about = "Chat bot serving notes and solutions from Markdown files")]
struct Cli {
    /// Path to the YAML configuration file
    #[arg(long, default_value = paths::DEFAULT_CONFIG_PATH)]
    config: PathBuf,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // 1. Load Configuration
    let mut config = AppConfig::load(&cli.config)?;

    // 2. Logging Setup
    let _guard = init_logging(&config.documents.data_dir)?;
    tracing::info!("{}", logs::config_loaded(&cli.config.display().to_string()));
    config.apply_overrides(|key| std::env::var(key).ok());
    let config = Arc::new(config);

    // 3. Healthcheck
    let health = health::start(config.server.port)
        .await
        .context("Failed to start healthcheck server")?;
    tracing::info!("{}", logs::healthcheck_listening(&health.addr.to_string()));

    // 4. Matrix Setup
    let client = infrastructure::matrix::connect(&config.services.matrix).await?;

    // 5. Event Handlers
    let start_time = SystemTime::now();
    let router = Arc::new(CommandRouter::new(config.clone()));

    client.add_event_handler(move |ev: SyncRoomMessageEvent, room: Room| {
        let router = router.clone();
        async move { handle_message(ev, room, router, start_time).await }
    });

    // Handle Invites
    client.add_event_handler(|ev: StrippedRoomMemberEvent, room: Room| async move {
        if ev.content.membership == MembershipState::Invite
            && let Err(e) = room.join().await
        {
            tracing::warn!("Failed to join {}: {}", room.room_id(), e);
        }
    });

    // 6. Sync until shutdown
    tracing::info!("{}", logs::BOT_STARTED);
    tracing::info!("{}", logs::SYNC_LOOP_START);
    let sync_client = client.clone();
    let mut sync_handle =
        tokio::spawn(async move { sync_client.sync(SyncSettings::default()).await });

    tokio::select! {
        res = &mut sync_handle => match res {
            Ok(Err(e)) => tracing::error!("{}", logs::sync_loop_fail(&e.to_string())),
            Err(e) => tracing::error!("Matrix Sync Panic: {}", e),
            Ok(Ok(())) => {}
        },
        signal = tokio::signal::ctrl_c() => {
            match signal {
                Ok(()) => tracing::info!("{}", logs::SHUTDOWN),
                Err(e) => tracing::error!("{}", logs::shutdown_fail(&e.to_string())),
            }
            sync_handle.abort();
        }
    }

    health.shutdown().await;
    Ok(())
}

/// Filters Matrix events down to fresh text messages from other users and
/// hands them to the router's per-message boundary.
async fn handle_message(
    ev: SyncRoomMessageEvent,
    room: Room,
    router: Arc<CommandRouter>,
    start_time: SystemTime,
) {
    let Some(original_msg) = ev.as_original() else {
        return;
    };

    // Ignore events older than start_time
    let ts = ev.origin_server_ts();
    let event_time = UNIX_EPOCH + Duration::from_millis(ts.get().into());
    if event_time < start_time {
        return;
    }

    let MessageType::Text(text_content) = &original_msg.content.msgtype else {
        return;
    };
    if original_msg.sender == room.own_user_id() {
        return;
    }
    tracing::info!("Received message from {}: \n{}", original_msg.sender, text_content.body);

    let message = IncomingMessage {
        event_id: original_msg.event_id.to_string(),
        sender: original_msg.sender.to_string(),
        body: text_content.body.clone(),
    };
    router.handle(MatrixService::new(room), message).await;
}

fn init_logging(data_dir: &str) -> Result<WorkerGuard> {
    use tracing_subscriber::layer::SubscriberExt;
    use tracing_subscriber::util::SubscriberInitExt;

    // Ensure data directory exists
    let dir = Path::new(data_dir);
    if !dir.exists() {
        fs::create_dir_all(dir).context("Failed to create data directory")?;
    }

    // Clear previous session log; reported once the subscriber is installed
    let log_path = dir.join(paths::SESSION_LOG);
    let cleared = clear_session_log(&log_path);

    let file_appender = tracing_appender::rolling::never(dir, paths::SESSION_LOG);
    let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);

    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        tracing_subscriber::EnvFilter::new(
            "info,matrix_sdk=warn,matrix_sdk_base=warn,matrix_sdk_crypto=error,ruma=warn,hyper=warn",
        )
    });

    let file_layer = tracing_subscriber::fmt::layer()
        .with_writer(non_blocking)
        .with_ansi(false);
    let console_layer = tracing_subscriber::fmt::layer().with_writer(std::io::stdout);

    tracing_subscriber::registry()
        .with(env_filter)
        .with(file_layer)
        .with(console_layer)
        .init();

    if let Err(e) = cleared {
        tracing::warn!(
            "{}",
            logs::session_log_clear_fail(&log_path.display().to_string(), &e.to_string())
        );
    }

    Ok(guard)
}

/// Removes the previous session log. A log that is already gone is not an error.
fn clear_session_log(path: &Path) -> io::Result<()> {
    match fs::remove_file(path) {
        Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(()),
        other => other,
    }
}
