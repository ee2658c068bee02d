//! # Infrastructure Layer
//!
//! Handles interactions with external systems and services.
//! Implements the traits defined in the Domain layer (e.g., ChatProvider) and serves the liveness endpoint.

pub mod health;
pub mod matrix;
