//! # Domain Traits
//!
//! Abstract interface for the chat transport.
//! Allows the router and command handlers to run against Matrix or a test double.

use async_trait::async_trait;

/// Abstract interface for a Chat Provider (e.g., Matrix, Console)
#[async_trait]
pub trait ChatProvider: Send + Sync {
    /// Reply to a message in the room, threaded to `in_reply_to`.
    /// Returns the event ID of the sent reply.
    async fn reply(&self, in_reply_to: &str, content: &str) -> Result<String, String>;

    /// Get the current room ID
    fn room_id(&self) -> String;
}
