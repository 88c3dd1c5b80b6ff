// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! API token credential type.
//!
//! The token is the only credential the integration stores. It is validated
//! at construction time and redacted from `Debug` and `Display` output so it
//! never ends up in logs.

use std::fmt;
use std::str::FromStr;

use crate::error::TokenError;

/// A validated Toggl API token.
///
/// The token is guaranteed to be non-empty. It is sent as the username of a
/// Basic-Auth header on every API request.
///
/// # Examples
///
/// ```
/// use toggl_lib::ApiToken;
///
/// let token = ApiToken::new("d34db33f").unwrap();
/// assert_eq!(token.as_str(), "d34db33f");
///
/// // Empty tokens are rejected
/// assert!(ApiToken::new("").is_err());
/// assert!(ApiToken::new("   ").is_err());
/// ```
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct ApiToken(String);

impl ApiToken {
    /// Creates a new API token.
    ///
    /// # Errors
    ///
    /// Returns `TokenError::Empty` if the value is empty or whitespace-only.
    pub fn new(value: impl Into<String>) -> Result<Self, TokenError> {
        let value = value.into();
        if value.trim().is_empty() {
            return Err(TokenError::Empty);
        }
        Ok(Self(value))
    }

    /// Returns the token as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Consumes the token and returns the inner string.
    #[must_use]
    pub fn into_inner(self) -> String {
        self.0
    }
}

impl fmt::Debug for ApiToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("ApiToken(***)")
    }
}

impl fmt::Display for ApiToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("***")
    }
}

impl FromStr for ApiToken {
    type Err = TokenError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}
