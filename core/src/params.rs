//! Query parameters and their wire rendering.
//!
//! # Design
//! `ParamValue` is a closed set of variants, each with a fixed rendering.
//! Rendering happens first, percent-encoding second, and names and values go
//! through the same encoder.

use std::borrow::Cow;
use std::fmt;
use std::num::NonZeroU32;

/// Leading marker stripped from enumerated-literal values.
const TAG_MARKER: char = ':';

/// A single query parameter value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParamValue {
    Str(String),
    Int(i64),
    Bool(bool),
    /// An enumerated literal such as `:useSuggest`. Rendered without its
    /// leading marker.
    Tag(String),
}

impl ParamValue {
    pub fn tag(name: impl Into<String>) -> Self {
        ParamValue::Tag(name.into())
    }

    /// Textual form before percent-encoding.
    pub fn render(&self) -> Cow<'_, str> {
        match self {
            ParamValue::Tag(name) => Cow::Borrowed(name.strip_prefix(TAG_MARKER).unwrap_or(name)),
            ParamValue::Str(s) => Cow::Borrowed(s),
            ParamValue::Bool(true) => Cow::Borrowed("true"),
            ParamValue::Bool(false) => Cow::Borrowed("false"),
            ParamValue::Int(n) => Cow::Owned(n.to_string()),
        }
    }
}

impl fmt::Display for ParamValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render())
    }
}

impl From<&str> for ParamValue {
    fn from(s: &str) -> Self {
        ParamValue::Str(s.to_string())
    }
}

impl From<String> for ParamValue {
    fn from(s: String) -> Self {
        ParamValue::Str(s)
    }
}

impl From<bool> for ParamValue {
    fn from(b: bool) -> Self {
        ParamValue::Bool(b)
    }
}

impl From<i64> for ParamValue {
    fn from(n: i64) -> Self {
        ParamValue::Int(n)
    }
}

impl From<u32> for ParamValue {
    fn from(n: u32) -> Self {
        ParamValue::Int(i64::from(n))
    }
}

impl From<NonZeroU32> for ParamValue {
    fn from(n: NonZeroU32) -> Self {
        ParamValue::from(n.get())
    }
}

/// Ordered list of named parameters. Names should be unique; duplicates are
/// emitted as given.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QueryParams {
    pairs: Vec<(String, ParamValue)>,
}

impl QueryParams {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, name: impl Into<String>, value: impl Into<ParamValue>) {
        self.pairs.push((name.into(), value.into()));
    }

    /// Push only when a value is present; absent values leave no trace.
    pub fn push_opt<V: Into<ParamValue>>(&mut self, name: &str, value: Option<V>) {
        if let Some(value) = value {
            self.push(name, value);
        }
    }

    /// Join `values` with commas into a single parameter. Nothing is pushed
    /// for an empty list.
    pub fn push_list<S: AsRef<str>>(&mut self, name: &str, values: &[S]) {
        if values.is_empty() {
            return;
        }
        let joined = values.iter().map(AsRef::as_ref).collect::<Vec<_>>().join(",");
        self.push(name, joined);
    }

    pub fn with(mut self, name: impl Into<String>, value: impl Into<ParamValue>) -> Self {
        self.push(name, value);
        self
    }

    pub fn get(&self, name: &str) -> Option<&ParamValue> {
        self.pairs.iter().find(|(n, _)| n == name).map(|(_, v)| v)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &ParamValue)> {
        self.pairs.iter().map(|(n, v)| (n.as_str(), v))
    }

    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    /// `name=value` pairs joined by `&`, both sides percent-encoded.
    pub fn encode(&self) -> String {
        self.pairs
            .iter()
            .map(|(name, value)| {
                format!("{}={}", urlencoding::encode(name), urlencoding::encode(&value.render()))
            })
            .collect::<Vec<_>>()
            .join("&")
    }
}
