//! # Command Handlers
//!
//! Contains specific handler functions for each supported command (e.g., !help, !note list).
//! These handlers are invoked by the Router.

pub mod documents;
pub mod help;
