//! Token validator
//!
//! Checks the `Authorization: Bearer <token>` header against the secret the
//! server was started with. When no secret is configured, every caller is
//! accepted.

use crate::error::AuthError;

/// Shared-secret authentication settings
#[derive(Debug, Clone, Default)]
pub struct TokenAuth {
    secret_token: Option<String>,
}

impl TokenAuth {
    /// An empty token is treated the same as no token.
    pub fn new(secret_token: Option<&str>) -> Self {
        Self {
            secret_token: secret_token.filter(|t| !t.is_empty()).map(str::to_string),
        }
    }

    pub fn requires_auth(&self) -> bool {
        self.secret_token.is_some()
    }

    /// Validates the raw value of the `Authorization` header, if one was sent.
    pub fn validate(&self, header: Option<&str>) -> Result<(), AuthError> {
        let Some(expected) = &self.secret_token else {
            return Ok(());
        };

        // The scheme name is case-insensitive (RFC 7235).
        let token = header
            .and_then(|h| h.trim_start().split_once(' '))
            .filter(|(scheme, _)| scheme.eq_ignore_ascii_case("bearer"))
            .map(|(_, token)| token.trim())
            .filter(|t| !t.is_empty())
            .ok_or(AuthError::MissingToken)?;

        if token == expected {
            Ok(())
        } else {
            Err(AuthError::InvalidToken)
        }
    }
}
