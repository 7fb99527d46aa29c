//! Domain types shared by the client and the engine adapters.

use serde::ser::SerializeMap;
use serde::{Deserialize, Serialize, Serializer};
use std::collections::BTreeMap;
use std::fmt;

use crate::error::Error;

pub type DocId = String;
pub type Fields = BTreeMap<String, String>;

/// Raw tokens of an "add document" command, e.g.
/// `["idx", "doc:1", "1.0", "FIELDS", "title", "hello"]`. Passed through untouched.
pub type NewRecordCommand = Vec<String>;

/// One indexed field and its type/option tokens (`TEXT`, `SORTABLE`, ...).
///
/// Attributes are emitted in the order given.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SchemaField {
    pub field: String,
    #[serde(default)]
    pub attributes: Vec<String>,
}

impl SchemaField {
    pub fn new<I, S>(field: impl Into<String>, attributes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self { field: field.into(), attributes: attributes.into_iter().map(Into::into).collect() }
    }
}

/// A single search call with its own modifiers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QueryRequest {
    pub index_key: String,
    pub terms: Vec<String>,
    pub with_scores: bool,
    pub highlight: bool,
}

/// One matched document.
///
/// `score` is only present when the search asked for scores. Values are kept
/// exactly as the engine sent them (scores included), so `"1.0"` stays `"1.0"`.
///
/// Serializes as one flat object. A document field named `id` or `score`
/// replaces the reserved key, matching [`Record::get`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct Record {
    pub id: DocId,
    #[serde(default)]
    pub score: Option<String>,
    #[serde(flatten)]
    pub fields: Fields,
}

impl Record {
    /// Looks a key up the way the flat record reads: document fields first,
    /// then the reserved `id` and `score` keys.
    pub fn get(&self, key: &str) -> Option<&str> {
        if let Some(v) = self.fields.get(key) {
            return Some(v.as_str());
        }
        match key {
            "id" => Some(self.id.as_str()),
            "score" => self.score.as_deref(),
            _ => None,
        }
    }
}

impl Serialize for Record {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let id = (!self.fields.contains_key("id")).then_some(&self.id);
        let score = self.score.as_ref().filter(|_| !self.fields.contains_key("score"));
        let len = usize::from(id.is_some()) + usize::from(score.is_some()) + self.fields.len();
        let mut map = serializer.serialize_map(Some(len))?;
        if let Some(id) = id { map.serialize_entry("id", id)?; }
        if let Some(score) = score { map.serialize_entry("score", score)?; }
        for (k, v) in &self.fields {
            map.serialize_entry(k, v)?;
        }
        map.end()
    }
}

/// A decoded search reply.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchReply {
    pub total_count: u64,
    pub records: Vec<Record>,
}

/// Search outcome with failures reported as data rather than as an `Err`.
///
/// Exactly one of (`total_count` + `records`) or `error` is populated.
#[derive(Debug, Default)]
pub struct SearchResult {
    pub total_count: Option<u64>,
    pub records: Option<Vec<Record>>,
    pub error: Option<Error>,
}

impl SearchResult {
    pub fn is_ok(&self) -> bool { self.error.is_none() }
}

impl From<crate::error::Result<SearchReply>> for SearchResult {
    fn from(outcome: crate::error::Result<SearchReply>) -> Self {
        match outcome {
            Ok(reply) => Self { total_count: Some(reply.total_count), records: Some(reply.records), error: None },
            Err(e) => Self { total_count: None, records: None, error: Some(e) },
        }
    }
}

/// Commands of the engine protocol used by the client.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Command {
    Info,
    Create,
    Add,
    Search,
}

impl Command {
    pub fn as_str(self) -> &'static str {
        match self {
            Command::Info => "FT.INFO",
            Command::Create => "FT.CREATE",
            Command::Add => "FT.ADD",
            Command::Search => "FT.SEARCH",
        }
    }
}

impl fmt::Display for Command {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result { f.write_str(self.as_str()) }
}

/// A reply from the engine, shaped like the wire protocol: scalars or nested arrays.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Reply {
    Nil,
    Int(i64),
    Str(String),
    /// Bulk data that is not valid UTF-8, kept as sent.
    Bytes(Vec<u8>),
    Array(Vec<Reply>),
}

impl Reply {
    /// Short name of the variant, for error messages.
    pub fn kind(&self) -> &'static str {
        match self {
            Reply::Nil => "nil",
            Reply::Int(_) => "integer",
            Reply::Str(_) => "string",
            Reply::Bytes(_) => "non-UTF-8 data",
            Reply::Array(_) => "array",
        }
    }

    /// Textual value of a scalar reply. Integers are rendered in decimal;
    /// non-UTF-8 data has no textual value.
    pub fn as_text(&self) -> Option<String> {
        match self {
            Reply::Str(s) => Some(s.clone()),
            Reply::Int(n) => Some(n.to_string()),
            Reply::Nil | Reply::Bytes(_) | Reply::Array(_) => None,
        }
    }
}

impl From<i64> for Reply {
    fn from(n: i64) -> Self { Reply::Int(n) }
}

impl From<&str> for Reply {
    fn from(s: &str) -> Self { Reply::Str(s.to_string()) }
}

impl From<String> for Reply {
    fn from(s: String) -> Self { Reply::Str(s) }
}

impl<T: Into<Reply>> From<Vec<T>> for Reply {
    fn from(items: Vec<T>) -> Self { Reply::Array(items.into_iter().map(Into::into).collect()) }
}
