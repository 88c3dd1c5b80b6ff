// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! `Toggl` Lib - A Rust library for the Toggl home-automation integration.
//!
//! This library provides the two pieces a host platform needs to set up the
//! integration:
//!
//! - **API client**: authenticated GET/PATCH access to the integration's
//!   REST endpoint with a bounded timeout and a small error taxonomy
//! - **Config flow**: the single-step credential form that validates an API
//!   token and produces a config entry for the host to persist
//!
//! # Quick Start
//!
//! ## Calling the API
//!
//! ```no_run
//! use toggl_lib::{ApiClient, ApiToken};
//!
//! #[tokio::main]
//! async fn main() -> toggl_lib::Result<()> {
//!     let client = ApiClient::new(ApiToken::new("d34db33f")?)?;
//!
//!     let data = client.get_data().await?;
//!     println!("current title: {}", data["title"]);
//!
//!     client.set_title("brand new title").await?;
//!     Ok(())
//! }
//! ```
//!
//! ## Running the setup flow
//!
//! ```no_run
//! use std::collections::HashMap;
//! use toggl_lib::flow::{ConfigFlow, FlowResult, CONF_API_KEY};
//!
//! #[tokio::main]
//! async fn main() {
//!     let flow = ConfigFlow::new();
//!
//!     let input = HashMap::from([(CONF_API_KEY.to_string(), "d34db33f".to_string())]);
//!     match flow.step_user(Some(&input)).await {
//!         FlowResult::CreateEntry(entry) => println!("configured: {}", entry.title),
//!         FlowResult::Form { errors, .. } => eprintln!("setup failed: {errors:?}"),
//!     }
//! }
//! ```

mod client;
pub mod error;
pub mod flow;
mod token;

pub use client::{ApiClient, ClientConfig};
pub use error::{ApiError, Error, Result, TokenError};
pub use flow::{ConfigEntry, ConfigFlow, FlowResult, FormField};
pub use token::ApiToken;

/// Integration domain identifier.
pub const DOMAIN: &str = "toggl";
/// Human-readable integration name.
pub const NAME: &str = "Toggl";
/// Integration version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
/// Attribution for the upstream data source.
pub const ATTRIBUTION: &str = "Data provided by http://jsonplaceholder.typicode.com/";
