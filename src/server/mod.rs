//! Server core functionality
//!
//! This module contains the HTTP server, its routes, and the state shared
//! between request handlers.

pub mod core;
pub mod routes;
pub mod state;

pub use self::core::{Server, build_router};
pub use state::AppState;
