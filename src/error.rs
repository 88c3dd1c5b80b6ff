// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Error types for the Toggl integration library.
//!
//! Failures fall into three tiers: authentication (the token was rejected),
//! communication (timeout, socket failure, or any HTTP error status), and
//! everything else. The config flow relies on this classification to pick
//! the error code shown to the user.

use thiserror::Error;

/// The main error type for this library.
#[derive(Debug, Error)]
pub enum Error {
    /// The API token failed validation.
    #[error("token error: {0}")]
    Token(#[from] TokenError),

    /// An API request failed.
    #[error("API error: {0}")]
    Api(#[from] ApiError),
}

/// Errors related to API token validation.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum TokenError {
    /// The token is empty or contains only whitespace.
    #[error("API token must not be empty")]
    Empty,
}

/// Errors raised by the API client.
///
/// Variants tag the failure with its cause so callers can distinguish
/// rejected credentials from transport problems without parsing messages.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The server rejected the credentials (HTTP 401 or 403).
    #[error("invalid credentials")]
    Authentication,

    /// The request did not complete within the configured timeout.
    #[error("request timed out after {0} ms")]
    Timeout(u64),

    /// Connecting to the server failed.
    #[error("connection failed: {0}")]
    Connection(String),

    /// The server answered with a non-success status other than 401/403.
    #[error("HTTP {status} - {reason}")]
    Status {
        /// The HTTP status code.
        status: u16,
        /// The canonical reason phrase, or "Unknown".
        reason: String,
    },

    /// Any other failure, such as a response body that is not valid JSON.
    #[error("unexpected error: {0}")]
    Unexpected(String),
}

impl ApiError {
    /// Returns `true` if the server rejected the credentials.
    #[must_use]
    pub fn is_authentication(&self) -> bool {
        matches!(self, Self::Authentication)
    }

    /// Returns `true` for transport-level failures: timeout, connection
    /// failure, or an HTTP error status.
    #[must_use]
    pub fn is_communication(&self) -> bool {
        matches!(
            self,
            Self::Timeout(_) | Self::Connection(_) | Self::Status { .. }
        )
    }
}

/// A specialized Result type for this library.
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_error_display() {
        let err = ApiError::Status {
            status: 500,
            reason: "Internal Server Error".to_string(),
        };
        assert_eq!(err.to_string(), "HTTP 500 - Internal Server Error");
    }

    #[test]
    fn authentication_is_not_communication() {
        assert!(ApiError::Authentication.is_authentication());
        assert!(!ApiError::Authentication.is_communication());
    }

    #[test]
    fn transport_failures_are_communication() {
        assert!(ApiError::Timeout(10_000).is_communication());
        assert!(ApiError::Connection("refused".to_string()).is_communication());
        assert!(
            ApiError::Status {
                status: 404,
                reason: "Not Found".to_string(),
            }
            .is_communication()
        );
    }

    #[test]
    fn unexpected_is_neither() {
        let err = ApiError::Unexpected("boom".to_string());
        assert!(!err.is_authentication());
        assert!(!err.is_communication());
    }

    #[test]
    fn error_from_token_error() {
        let err: Error = TokenError::Empty.into();
        assert!(matches!(err, Error::Token(TokenError::Empty)));
    }
}
