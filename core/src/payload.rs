//! Schema-less decoded response bodies.
//!
//! # Design
//! Wordnik responses are interpreted positionally by callers, so bodies are
//! decoded into a generic tree instead of per-endpoint structs. Objects keep
//! their key order. JSON `false` and `null` collapse into the single `Nil`
//! marker, which also stands in for missing keys and out-of-range indexes.

use std::fmt;
use std::ops::Index;

use indexmap::IndexMap;
use serde::de::{self, Deserialize, Deserializer, MapAccess, SeqAccess, Visitor};
use serde::ser::{Serialize, Serializer};

static NIL: Payload = Payload::Nil;

/// A decoded JSON value.
#[derive(Debug, Clone, PartialEq)]
pub enum Payload {
    /// `false`, `null`, or absent.
    Nil,
    True,
    Number(serde_json::Number),
    String(String),
    List(Vec<Payload>),
    Map(IndexMap<String, Payload>),
}

impl Payload {
    pub fn from_json(body: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(body)
    }

    /// Decode raw bytes. Invalid UTF-8 is reported as a JSON error.
    pub fn from_slice(body: &[u8]) -> Result<Self, serde_json::Error> {
        serde_json::from_slice(body)
    }

    pub fn is_nil(&self) -> bool {
        matches!(self, Payload::Nil)
    }

    /// Only `Nil` is falsy.
    pub fn is_truthy(&self) -> bool {
        !self.is_nil()
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Payload::String(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_i64(&self) -> Option<i64> {
        match self {
            Payload::Number(n) => n.as_i64(),
            _ => None,
        }
    }

    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Payload::Number(n) => n.as_f64(),
            _ => None,
        }
    }

    pub fn as_list(&self) -> Option<&[Payload]> {
        match self {
            Payload::List(items) => Some(items),
            _ => None,
        }
    }

    pub fn as_map(&self) -> Option<&IndexMap<String, Payload>> {
        match self {
            Payload::Map(map) => Some(map),
            _ => None,
        }
    }

    pub fn get(&self, key: &str) -> Option<&Payload> {
        self.as_map().and_then(|map| map.get(key))
    }

    /// Number of entries in a list or map, zero for scalars.
    pub fn len(&self) -> usize {
        match self {
            Payload::List(items) => items.len(),
            Payload::Map(map) => map.len(),
            _ => 0,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl Index<&str> for Payload {
    type Output = Payload;

    fn index(&self, key: &str) -> &Payload {
        self.get(key).unwrap_or(&NIL)
    }
}

impl Index<usize> for Payload {
    type Output = Payload;

    fn index(&self, idx: usize) -> &Payload {
        self.as_list().and_then(|items| items.get(idx)).unwrap_or(&NIL)
    }
}

impl From<serde_json::Value> for Payload {
    fn from(value: serde_json::Value) -> Self {
        use serde_json::Value;

        match value {
            Value::Null | Value::Bool(false) => Payload::Nil,
            Value::Bool(true) => Payload::True,
            Value::Number(n) => Payload::Number(n),
            Value::String(s) => Payload::String(s),
            Value::Array(items) => Payload::List(items.into_iter().map(Payload::from).collect()),
            Value::Object(map) => Payload::Map(map.into_iter().map(|(k, v)| (k, Payload::from(v))).collect()),
        }
    }
}

impl Serialize for Payload {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Payload::Nil => serializer.serialize_unit(),
            Payload::True => serializer.serialize_bool(true),
            Payload::Number(n) => n.serialize(serializer),
            Payload::String(s) => serializer.serialize_str(s),
            Payload::List(items) => serializer.collect_seq(items),
            Payload::Map(map) => serializer.collect_map(map),
        }
    }
}

impl<'de> Deserialize<'de> for Payload {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_any(PayloadVisitor)
    }
}

struct PayloadVisitor;

impl<'de> Visitor<'de> for PayloadVisitor {
    type Value = Payload;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("any JSON value")
    }

    fn visit_bool<E: de::Error>(self, v: bool) -> Result<Payload, E> {
        Ok(if v { Payload::True } else { Payload::Nil })
    }

    fn visit_i64<E: de::Error>(self, v: i64) -> Result<Payload, E> {
        Ok(Payload::Number(v.into()))
    }

    fn visit_u64<E: de::Error>(self, v: u64) -> Result<Payload, E> {
        Ok(Payload::Number(v.into()))
    }

    fn visit_f64<E: de::Error>(self, v: f64) -> Result<Payload, E> {
        Ok(serde_json::Number::from_f64(v).map_or(Payload::Nil, Payload::Number))
    }

    fn visit_str<E: de::Error>(self, v: &str) -> Result<Payload, E> {
        Ok(Payload::String(v.to_string()))
    }

    fn visit_string<E: de::Error>(self, v: String) -> Result<Payload, E> {
        Ok(Payload::String(v))
    }

    fn visit_unit<E: de::Error>(self) -> Result<Payload, E> {
        Ok(Payload::Nil)
    }

    fn visit_none<E: de::Error>(self) -> Result<Payload, E> {
        Ok(Payload::Nil)
    }

    fn visit_some<D: Deserializer<'de>>(self, deserializer: D) -> Result<Payload, D::Error> {
        Deserialize::deserialize(deserializer)
    }

    fn visit_seq<A: SeqAccess<'de>>(self, mut seq: A) -> Result<Payload, A::Error> {
        let mut items = Vec::with_capacity(seq.size_hint().unwrap_or(0));
        while let Some(item) = seq.next_element()? {
            items.push(item);
        }
        Ok(Payload::List(items))
    }

    fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> Result<Payload, A::Error> {
        let mut map = IndexMap::with_capacity(access.size_hint().unwrap_or(0));
        while let Some((key, value)) = access.next_entry::<String, Payload>()? {
            map.insert(key, value);
        }
        Ok(Payload::Map(map))
    }
}
