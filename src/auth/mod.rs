//! Authentication system
//!
//! Handles bearer-token validation for tool endpoints.

pub mod validator;

pub use validator::TokenAuth;
