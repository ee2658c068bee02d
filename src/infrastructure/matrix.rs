//! # Matrix Service Adapter
//!
//! Implements the `ChatProvider` trait for the Matrix protocol using the `matrix_sdk`.
//! This module acts as the bridge between the generic `ChatProvider` interface used by the bot's core logic
//! and the specific implementation details of the Matrix SDK, plus session setup for the client.

use crate::domain::config::MatrixConfig;
use crate::domain::traits::ChatProvider;
use crate::strings::logs;
use anyhow::{Context, Result, bail};
use async_trait::async_trait;
use matrix_sdk::authentication::matrix::MatrixSession;
use matrix_sdk::room::Room;
use matrix_sdk::ruma::events::relation::InReplyTo;
use matrix_sdk::ruma::events::room::message::{Relation, RoomMessageEventContent};
use matrix_sdk::ruma::{EventId, OwnedDeviceId, OwnedUserId};
use matrix_sdk::{Client, SessionMeta, SessionTokens};

#[derive(Clone)]
pub struct MatrixService {
    room: Room,
}

impl MatrixService {
    pub fn new(room: Room) -> Self {
        Self { room }
    }
}

#[async_trait]
impl ChatProvider for MatrixService {
    fn room_id(&self) -> String {
        self.room.room_id().as_str().to_string()
    }

    async fn reply(&self, in_reply_to: &str, content: &str) -> Result<String, String> {
        tracing::info!("Bot replying in {} to {}: {}", self.room_id(), in_reply_to, content);
        let event_id = <&EventId>::try_from(in_reply_to).map_err(|e| e.to_string())?;

        self.room
            .send(reply_content(event_id, content))
            .await
            .map(|resp| resp.event_id.to_string())
            .map_err(|e| e.to_string())
    }
}

/// Plain-text reply threaded to `in_reply_to`. Document text is sent as-is,
/// without Markdown rendering.
fn reply_content(in_reply_to: &EventId, content: &str) -> RoomMessageEventContent {
    let mut message = RoomMessageEventContent::text_plain(content);
    message.relates_to = Some(Relation::Reply {
        in_reply_to: InReplyTo::new(in_reply_to.to_owned()),
    });
    message
}

/// Builds a client for the configured homeserver and authenticates it.
///
/// An access token restores an existing session (requires `user_id` and
/// `device_id`); otherwise the bot logs in with username and password.
pub async fn connect(config: &MatrixConfig) -> Result<Client> {
    if config.homeserver.is_empty() {
        bail!("No Matrix homeserver configured");
    }

    let client = Client::builder()
        .homeserver_url(&config.homeserver)
        .build()
        .await
        .context("Failed to build Matrix client")?;

    if let Some(token) = &config.access_token {
        let (Some(user_id), Some(device_id)) = (&config.user_id, &config.device_id) else {
            bail!("An access token requires services.matrix.user_id and device_id");
        };
        let user_id = OwnedUserId::try_from(user_id.as_str())
            .with_context(|| format!("Invalid Matrix user id: {user_id}"))?;
        let session = MatrixSession {
            meta: SessionMeta {
                user_id: user_id.clone(),
                device_id: OwnedDeviceId::from(device_id.as_str()),
            },
            tokens: SessionTokens {
                access_token: token.clone(),
                refresh_token: None,
            },
        };
        client
            .restore_session(session)
            .await
            .context("Failed to restore Matrix session")?;
        tracing::info!("{}", logs::session_restored(user_id.as_str()));
    } else {
        if config.username.is_empty() {
            bail!("No Matrix credentials configured (set APPLICATION_TOKEN or username/password)");
        }
        client
            .matrix_auth()
            .login_username(&config.username, &config.password)
            .send()
            .await
            .context("Matrix login failed")?;
        tracing::info!("{}", logs::logged_in(&config.username));
    }

    if let Some(name) = &config.display_name {
        tracing::info!("{}", logs::setting_display_name(name));
        if let Err(e) = client.account().set_display_name(Some(name.as_str())).await {
            tracing::warn!("{}", logs::set_display_name_fail(&e.to_string()));
        }
    }

    Ok(client)
}

#[cfg(test)]
mod tests {
    use super::*;
    use matrix_sdk::ruma::events::room::message::MessageType;

    #[test]
    fn test_reply_is_plain_and_threaded() {
        let origin = <&EventId>::try_from("$origin:example.com").unwrap();
        let text = "📘 Note [1] Deploy\n\n## Steps\n- `cargo build`";
        let content = reply_content(origin, text);

        match &content.msgtype {
            MessageType::Text(text_content) => {
                assert_eq!(text_content.body, text);
                assert!(text_content.formatted.is_none());
            }
            other => panic!("expected text message, got {other:?}"),
        }
        match &content.relates_to {
            Some(Relation::Reply { in_reply_to }) => {
                assert_eq!(in_reply_to.event_id.as_str(), "$origin:example.com");
            }
            other => panic!("expected reply relation, got {other:?}"),
        }
    }
}
