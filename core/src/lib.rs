//! Blocking client for the Wordnik REST API.
//!
//! # Overview
//! Every endpoint facade shapes a `WordnikRequest` (endpoint plus query
//! parameters), and a single dispatcher turns it into a GET request, runs it
//! through a `Transport`, classifies the status and decodes the JSON body
//! into a schema-less `Payload`.
//!
//! # Design
//! - `WordnikClient` owns its `ClientConfig`; the API key is never global.
//! - Building and parsing are separate from I/O (`build_request`,
//!   `parse_response`), so both are testable without a network.
//! - Optional facade inputs are explicit option structs; absent options
//!   never reach the query string.
//!
//! ```no_run
//! use wordnik_core::{ClientConfig, DefinitionsOptions, WordnikClient};
//!
//! let client = WordnikClient::new(ClientConfig::new("my-api-key"));
//! let defs = client.definitions("run", &DefinitionsOptions::default().count(2).part_of_speech("verb"))?;
//! for def in defs.as_list().unwrap_or_default() {
//!     println!("{}", def["text"].as_str().unwrap_or(""));
//! }
//! # Ok::<(), wordnik_core::ApiError>(())
//! ```

pub mod client;
pub mod config;
pub mod endpoint;
pub mod error;
pub mod facades;
pub mod http;
pub mod params;
pub mod payload;
pub mod types;

pub use client::{WordnikClient, API_KEY_PARAM};
pub use config::ClientConfig;
pub use endpoint::Endpoint;
pub use error::{ApiError, TransportError};
pub use http::{HttpRequest, HttpResponse, Transport, UreqTransport};
pub use params::{ParamValue, QueryParams};
pub use payload::Payload;
pub use types::{
    AutocompleteOptions, DefinitionsOptions, DispatchOptions, RandomWordOptions, RelatedWordsOptions, Reply,
    WordnikRequest,
};
