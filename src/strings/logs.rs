//! # Log Messages
//!
//! Operator-facing log lines emitted during startup and shutdown.

pub fn config_loaded(path: &str) -> String {
    format!("Loaded configuration from {path}")
}

pub fn logged_in(user: &str) -> String {
    format!("Logged in as {user}")
}

pub fn session_restored(user: &str) -> String {
    format!("Restored session for {user}")
}

pub fn setting_display_name(name: &str) -> String {
    format!("Setting display name to: {name}")
}

pub fn set_display_name_fail(err: &str) -> String {
    format!("Failed to set display name: {err}")
}

pub fn healthcheck_listening(addr: &str) -> String {
    format!("🌐 Healthcheck server running on {addr}")
}

pub const BOT_STARTED: &str = "🤖 Memo bot started!";
pub const SYNC_LOOP_START: &str = "Starting sync loop...";

pub fn sync_loop_fail(err: &str) -> String {
    format!("Sync loop failed: {err}")
}

pub const SHUTDOWN: &str = "Shutting down...";

pub fn shutdown_fail(err: &str) -> String {
    format!("Unable to listen for shutdown signal: {err}")
}

pub fn session_log_clear_fail(path: &str, err: &str) -> String {
    format!("Failed to clear previous session log {path}: {err}")
}

pub fn handler_error(err: &str) -> String {
    format!("Handler error: {err}")
}
