//! One builder and one client method per Wordnik endpoint.
//!
//! The `build_*` functions only shape a `WordnikRequest`; the
//! `WordnikClient` method without the prefix dispatches it and returns the
//! decoded payload as is.
//! Subjects are never validated.

use crate::client::WordnikClient;
use crate::endpoint::Endpoint;
use crate::error::ApiError;
use crate::http::Transport;
use crate::params::{ParamValue, QueryParams};
use crate::payload::Payload;
use crate::types::{
    AutocompleteOptions, DefinitionsOptions, RandomWordOptions, RelatedWordsOptions, WordnikRequest,
};

fn word(subject: &str) -> Endpoint {
    Endpoint::new("word").with_id(subject)
}

fn word_field(subject: &str, field: &str) -> Endpoint {
    word(subject).with_field(field)
}

fn use_suggest() -> QueryParams {
    QueryParams::new().with(ParamValue::tag(":useSuggest").to_string(), true)
}

pub fn build_spelling_suggestions(subject: &str) -> WordnikRequest {
    WordnikRequest::with_params(word(subject), use_suggest())
}

pub fn build_fix_spelling(subject: &str) -> WordnikRequest {
    let params = use_suggest().with(ParamValue::tag(":literal").to_string(), false);
    WordnikRequest::with_params(word(subject), params)
}

pub fn build_bigram_phrases(subject: &str) -> WordnikRequest {
    WordnikRequest::new(word_field(subject, "phrases"))
}

pub fn build_definitions(subject: &str, options: &DefinitionsOptions) -> WordnikRequest {
    let mut params = QueryParams::new();
    params.push_opt("count", options.count);
    params.push_list("partOfSpeech", &options.parts_of_speech);
    WordnikRequest::with_params(word_field(subject, "definitions"), params)
}

pub fn build_examples(subject: &str) -> WordnikRequest {
    WordnikRequest::new(word_field(subject, "examples"))
}

pub fn build_related_words(subject: &str, options: &RelatedWordsOptions) -> WordnikRequest {
    let mut params = QueryParams::new();
    params.push_opt("count", options.count);
    params.push_list("type", &options.types);
    WordnikRequest::with_params(word_field(subject, "related"), params)
}

pub fn build_frequency(subject: &str) -> WordnikRequest {
    WordnikRequest::new(word_field(subject, "frequency"))
}

pub fn build_punctuation_factor(subject: &str) -> WordnikRequest {
    WordnikRequest::new(word_field(subject, "punctuationFactor"))
}

pub fn build_autocompletions(fragment: &str, options: &AutocompleteOptions) -> WordnikRequest {
    let mut params = QueryParams::new();
    params.push_opt("count", options.count);
    params.push_opt("startAt", options.start_at);
    WordnikRequest::with_params(Endpoint::new("suggest").with_id(fragment), params)
}

pub fn build_word_of_the_day() -> WordnikRequest {
    WordnikRequest::new(Endpoint::new("wordoftheday"))
}

pub fn build_random_word(options: &RandomWordOptions) -> WordnikRequest {
    let mut params = QueryParams::new();
    params.push_opt("hasDictionaryRef", options.has_dictionary_ref);
    WordnikRequest::with_params(Endpoint::new("words").with_id("randomWord"), params)
}

pub fn build_pronunciations(subject: &str) -> WordnikRequest {
    WordnikRequest::new(Endpoint::new("words").with_id(subject).with_field("pronunciations"))
}

impl<T: Transport> WordnikClient<T> {
    pub fn spelling_suggestions(&self, subject: &str) -> Result<Payload, ApiError> {
        self.fetch(&build_spelling_suggestions(subject))
    }

    pub fn fix_spelling(&self, subject: &str) -> Result<Payload, ApiError> {
        self.fetch(&build_fix_spelling(subject))
    }

    pub fn bigram_phrases(&self, subject: &str) -> Result<Payload, ApiError> {
        self.fetch(&build_bigram_phrases(subject))
    }

    pub fn definitions(&self, subject: &str, options: &DefinitionsOptions) -> Result<Payload, ApiError> {
        self.fetch(&build_definitions(subject, options))
    }

    pub fn examples(&self, subject: &str) -> Result<Payload, ApiError> {
        self.fetch(&build_examples(subject))
    }

    pub fn related_words(&self, subject: &str, options: &RelatedWordsOptions) -> Result<Payload, ApiError> {
        self.fetch(&build_related_words(subject, options))
    }

    pub fn frequency(&self, subject: &str) -> Result<Payload, ApiError> {
        self.fetch(&build_frequency(subject))
    }

    pub fn punctuation_factor(&self, subject: &str) -> Result<Payload, ApiError> {
        self.fetch(&build_punctuation_factor(subject))
    }

    pub fn autocompletions(&self, fragment: &str, options: &AutocompleteOptions) -> Result<Payload, ApiError> {
        self.fetch(&build_autocompletions(fragment, options))
    }

    pub fn word_of_the_day(&self) -> Result<Payload, ApiError> {
        self.fetch(&build_word_of_the_day())
    }

    pub fn random_word(&self, options: &RandomWordOptions) -> Result<Payload, ApiError> {
        self.fetch(&build_random_word(options))
    }

    pub fn pronunciations(&self, subject: &str) -> Result<Payload, ApiError> {
        self.fetch(&build_pronunciations(subject))
    }
}
