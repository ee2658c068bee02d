//! # Interface Layer
//!
//! User-facing entry points: the chat command handlers invoked by the router.

pub mod commands;
