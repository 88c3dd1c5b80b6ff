// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Config flow for setting up the integration.
//!
//! A single-step form: the user supplies an API token, the flow validates it
//! with one `get_data` call, and either produces a config entry for the host
//! platform to persist or redisplays the form with an error code.
//!
//! The result types serialize with `serde` so a host can hand them straight
//! to its frontend.

use std::collections::HashMap;

use serde::Serialize;

use crate::client::ClientConfig;
use crate::error::Error;
use crate::token::ApiToken;

/// Form field name for the API token.
pub const CONF_API_KEY: &str = "api_key";

/// Error code shown when the credentials are rejected.
pub const ERROR_AUTH: &str = "auth";
/// Error code shown when the endpoint cannot be reached.
pub const ERROR_CONNECTION: &str = "connection";
/// Error code shown for any other failure.
pub const ERROR_UNKNOWN: &str = "unknown";

const STEP_USER: &str = "user";
const ERROR_BASE: &str = "base";

/// A field in a config flow form schema.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct FormField {
    /// Field name.
    pub name: String,
    /// Field type, e.g. "text".
    #[serde(rename = "type")]
    pub field_type: String,
    /// Whether the field must be filled in.
    pub required: bool,
    /// Prefilled value, usually the previous submission.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default: Option<String>,
}

/// Outcome of a config flow step.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum FlowResult {
    /// Show (or redisplay) a form to the user.
    Form {
        /// Identifier of the step the form belongs to.
        step_id: String,
        /// Schema of the form fields.
        data_schema: Vec<FormField>,
        /// Error codes from the previous submission, keyed by field
        /// (or "base" for form-level errors).
        errors: HashMap<String, String>,
    },
    /// The flow finished; the host should persist this entry.
    CreateEntry(ConfigEntry),
}

/// A finished integration instance, ready for the host to store.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct ConfigEntry {
    /// Entry title. Equals the submitted API token.
    pub title: String,
    /// Entry data, keyed by field name.
    pub data: HashMap<String, String>,
    /// Schema version of the entry.
    pub version: u32,
}

/// Handler for the user-initiated setup flow.
///
/// # Examples
///
/// ```no_run
/// use std::collections::HashMap;
/// use toggl_lib::flow::{ConfigFlow, FlowResult, CONF_API_KEY};
///
/// # async fn example() {
/// let flow = ConfigFlow::new();
///
/// // First call shows the form
/// let form = flow.step_user(None).await;
///
/// // Submission validates the token and creates the entry
/// let input = HashMap::from([(CONF_API_KEY.to_string(), "d34db33f".to_string())]);
/// match flow.step_user(Some(&input)).await {
///     FlowResult::CreateEntry(entry) => println!("configured {}", entry.title),
///     FlowResult::Form { errors, .. } => println!("rejected: {errors:?}"),
/// }
/// # }
/// ```
#[derive(Debug, Clone, Default)]
pub struct ConfigFlow {
    config: ClientConfig,
}

impl ConfigFlow {
    /// Schema version written into created entries.
    pub const VERSION: u32 = 1;

    /// Creates a flow targeting the default endpoint.
    #[must_use]
    pub fn new() -> Self {
        Self {
            config: ClientConfig::new(),
        }
    }

    /// Creates a flow whose validation client uses a custom configuration.
    #[must_use]
    pub fn with_config(config: ClientConfig) -> Self {
        Self { config }
    }

    /// Handles the user step.
    ///
    /// With no input, returns the initial form. With input, validates the
    /// token against the API and returns either a [`FlowResult::CreateEntry`]
    /// or the form with an error code under `"base"`.
    pub async fn step_user(&self, user_input: Option<&HashMap<String, String>>) -> FlowResult {
        let Some(input) = user_input else {
            return Self::show_form(None, HashMap::new());
        };

        let submitted = input.get(CONF_API_KEY).cloned().unwrap_or_default();

        let code = match self.test_credentials(&submitted).await {
            Ok(()) => {
                return FlowResult::CreateEntry(ConfigEntry {
                    title: submitted.clone(),
                    data: HashMap::from([(CONF_API_KEY.to_string(), submitted)]),
                    version: Self::VERSION,
                });
            }
            Err(Error::Token(err)) => {
                tracing::warn!(error = %err, "Rejected API token before validation");
                ERROR_AUTH
            }
            Err(Error::Api(err)) if err.is_authentication() => {
                tracing::warn!(error = %err, "API rejected the credentials");
                ERROR_AUTH
            }
            Err(Error::Api(err)) if err.is_communication() => {
                tracing::error!(error = %err, "Could not reach the API");
                ERROR_CONNECTION
            }
            Err(Error::Api(err)) => {
                tracing::error!(error = %err, "Credential validation failed");
                ERROR_UNKNOWN
            }
        };

        let errors = HashMap::from([(ERROR_BASE.to_string(), code.to_string())]);
        Self::show_form(Some(&submitted), errors)
    }

    /// Validates credentials with a single API call.
    async fn test_credentials(&self, api_token: &str) -> Result<(), Error> {
        let token = ApiToken::new(api_token)?;
        let client = self.config.clone().into_client(token)?;
        client.get_data().await?;
        Ok(())
    }

    /// Builds the single-field form, prefilled with the previous input.
    fn show_form(default: Option<&str>, errors: HashMap<String, String>) -> FlowResult {
        FlowResult::Form {
            step_id: STEP_USER.to_string(),
            data_schema: vec![FormField {
                name: CONF_API_KEY.to_string(),
                field_type: "text".to_string(),
                required: true,
                default: default.filter(|v| !v.is_empty()).map(str::to_string),
            }],
            errors,
        }
    }
}
