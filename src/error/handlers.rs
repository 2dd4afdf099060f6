//! Error handlers
//!
//! Maps error categories onto HTTP status codes.

use crate::error::types::ErrorKind;
use axum::http::StatusCode;

/// Convert an outcome's error kind to the HTTP status it is delivered with.
///
/// Filesystem-level failures travel as ordinary `200` responses; only
/// confinement and request-shape failures surface at the transport level.
pub fn error_to_status(kind: Option<ErrorKind>) -> StatusCode {
    match kind {
        None => StatusCode::OK,
        Some(ErrorKind::AccessDenied) => StatusCode::FORBIDDEN,
        Some(ErrorKind::InvalidRequest) => StatusCode::BAD_REQUEST,
        Some(
            ErrorKind::NotFound
            | ErrorKind::NotAFile
            | ErrorKind::NotADirectory
            | ErrorKind::AlreadyExists
            | ErrorKind::DecodeError
            | ErrorKind::OperationFailed,
        ) => StatusCode::OK,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_filesystem_failures_stay_in_band() {
        assert_eq!(error_to_status(None), StatusCode::OK);
        assert_eq!(error_to_status(Some(ErrorKind::NotFound)), StatusCode::OK);
        assert_eq!(
            error_to_status(Some(ErrorKind::OperationFailed)),
            StatusCode::OK
        );
    }

    #[test]
    fn test_access_denied_is_forbidden() {
        assert_eq!(
            error_to_status(Some(ErrorKind::AccessDenied)),
            StatusCode::FORBIDDEN
        );
        assert_eq!(
            error_to_status(Some(ErrorKind::InvalidRequest)),
            StatusCode::BAD_REQUEST
        );
    }
}
