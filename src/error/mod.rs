//! Error handling
//!
//! Defines error types shared across the sandbox server.

pub mod handlers;
pub mod types;

pub use types::*;
