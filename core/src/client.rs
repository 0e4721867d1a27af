//! Request builder and dispatcher for the Wordnik API.
//!
//! # Design
//! `WordnikClient` holds its configuration and a transport and carries no
//! mutable state between calls. Dispatch is split into `build_request`
//! (pure), the transport round-trip, and `parse_response` (status
//! classification plus decoding), so each step can be exercised on its own.

use log::{debug, trace, warn};

use crate::config::ClientConfig;
use crate::error::ApiError;
use crate::http::{HttpRequest, HttpResponse, Transport, UreqTransport};
use crate::params::QueryParams;
use crate::payload::Payload;
use crate::types::{DispatchOptions, Reply, WordnikRequest};

/// Name of the credential parameter attached to every request.
pub const API_KEY_PARAM: &str = "api_key";

/// Blocking client for the Wordnik REST API.
#[derive(Debug, Clone)]
pub struct WordnikClient<T = UreqTransport> {
    config: ClientConfig,
    transport: T,
}

impl WordnikClient<UreqTransport> {
    pub fn new(config: ClientConfig) -> Self {
        let transport = UreqTransport::new(config.timeout);
        Self { config, transport }
    }
}

impl<T> WordnikClient<T> {
    pub fn with_transport(config: ClientConfig, transport: T) -> Self {
        Self { config, transport }
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// Build the URL for `request`. `api_key` always comes first, ahead of
    /// the caller's parameters.
    pub fn build_request(&self, request: &WordnikRequest) -> HttpRequest {
        let mut query = QueryParams::new().with(API_KEY_PARAM, self.config.api_key.as_str());
        for (name, value) in request.params.iter() {
            query.push(name, value.clone());
        }
        HttpRequest {
            url: format!(
                "{}{}?{}",
                self.config.base_url,
                request.endpoint.path(),
                query.encode()
            ),
        }
    }

    /// Classify the status and decode a 2xx body.
    pub fn parse_response(&self, response: &HttpResponse) -> Result<Payload, ApiError> {
        check_status(response)?;
        Ok(Payload::from_slice(&response.body)?)
    }
}

impl<T: Transport> WordnikClient<T> {
    /// Send `request` and decode the reply. The raw response is dropped
    /// after decoding unless `options.retain_raw` is set.
    pub fn dispatch(&self, request: &WordnikRequest, options: DispatchOptions) -> Result<Reply, ApiError> {
        let http_request = self.build_request(request);
        debug!(
            "GET {}{}?{}",
            self.config.base_url,
            request.endpoint.path(),
            request.params.encode()
        );

        let response = self.transport.execute(&http_request)?;
        let payload = self.parse_response(&response)?;

        let raw = if options.retain_raw {
            trace!("retaining raw response ({} bytes)", response.body.len());
            Some(response)
        } else {
            None
        };
        Ok(Reply { payload, raw })
    }

    /// Dispatch with default options and return only the payload.
    pub fn fetch(&self, request: &WordnikRequest) -> Result<Payload, ApiError> {
        self.dispatch(request, DispatchOptions::default())
            .map(|reply| reply.payload)
    }
}

/// Map non-success status codes to the appropriate `ApiError` variant.
fn check_status(response: &HttpResponse) -> Result<(), ApiError> {
    if response.is_success() {
        return Ok(());
    }
    warn!("wordnik responded with HTTP {}", response.status);
    if response.status == 404 {
        return Err(ApiError::NotFound);
    }
    Err(ApiError::Rejected {
        status: response.status,
        body: response.body_text().into_owned(),
    })
}
