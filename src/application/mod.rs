//! # Application Layer
//!
//! Contains the core logic of the bot: loading and parsing documents,
//! rendering them as chat text, and routing commands.

pub mod formatter;
pub mod loader;
pub mod router;
pub mod sections;
