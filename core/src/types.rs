//! Request descriptions, dispatch options and per-facade option sets.

use std::num::NonZeroU32;

use crate::endpoint::Endpoint;
use crate::http::HttpResponse;
use crate::params::QueryParams;
use crate::payload::Payload;

/// An endpoint plus the caller-supplied parameters. The API key is not part
/// of it; `WordnikClient::build_request` adds that.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WordnikRequest {
    pub endpoint: Endpoint,
    pub params: QueryParams,
}

impl WordnikRequest {
    pub fn new(endpoint: Endpoint) -> Self {
        Self {
            endpoint,
            params: QueryParams::new(),
        }
    }

    pub fn with_params(endpoint: Endpoint, params: QueryParams) -> Self {
        Self { endpoint, params }
    }
}

/// Per-call dispatch behavior.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DispatchOptions {
    /// Keep the raw response on the `Reply` instead of dropping it after
    /// decoding.
    pub retain_raw: bool,
}

impl DispatchOptions {
    pub fn retain_raw() -> Self {
        Self { retain_raw: true }
    }
}

/// Outcome of a successful dispatch.
#[derive(Debug, Clone)]
pub struct Reply {
    pub payload: Payload,
    /// Present only when `DispatchOptions::retain_raw` was set.
    pub raw: Option<HttpResponse>,
}

/// Optional inputs of the definitions facade.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DefinitionsOptions {
    pub count: Option<NonZeroU32>,
    /// Sent as `partOfSpeech`, comma-joined.
    pub parts_of_speech: Vec<String>,
}

impl DefinitionsOptions {
    /// A zero count leaves `count` unset.
    pub fn count(mut self, count: u32) -> Self {
        self.count = NonZeroU32::new(count);
        self
    }

    pub fn part_of_speech(mut self, pos: impl Into<String>) -> Self {
        self.parts_of_speech.push(pos.into());
        self
    }
}

/// Optional inputs of the related-words facade.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RelatedWordsOptions {
    pub count: Option<NonZeroU32>,
    /// Relation types such as `synonym`, sent as `type`, comma-joined.
    pub types: Vec<String>,
}

impl RelatedWordsOptions {
    /// A zero count leaves `count` unset.
    pub fn count(mut self, count: u32) -> Self {
        self.count = NonZeroU32::new(count);
        self
    }

    pub fn relation(mut self, kind: impl Into<String>) -> Self {
        self.types.push(kind.into());
        self
    }
}

/// Optional inputs of the autocompletion facade.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct AutocompleteOptions {
    pub count: Option<NonZeroU32>,
    pub start_at: Option<u32>,
}

impl AutocompleteOptions {
    /// A zero count leaves `count` unset.
    pub fn count(mut self, count: u32) -> Self {
        self.count = NonZeroU32::new(count);
        self
    }

    pub fn start_at(mut self, start_at: u32) -> Self {
        self.start_at = Some(start_at);
        self
    }
}

/// Optional inputs of the random-word facade.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RandomWordOptions {
    /// Sent as `hasDictionaryRef` only when set.
    pub has_dictionary_ref: Option<bool>,
}

impl RandomWordOptions {
    pub fn has_dictionary_ref(has_ref: bool) -> Self {
        Self {
            has_dictionary_ref: Some(has_ref),
        }
    }
}
