//! Domain DTOs for the todo resource.
//!
//! # Design
//! Records are decoded as the remote resource sends them and never validated
//! beyond what deserialization needs. `isDone` is read by truthiness, the
//! optional `todo` attribute is carried as-is, and unknown fields are kept in
//! `extra` so a record sent back on update is the full record.

use std::fmt;

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};

/// Identifier assigned by the remote resource. Some backends hand out
/// integers, others strings; both are kept in their original JSON form.
/// Anything else (floats, out-of-range numbers, a missing id) lands in
/// `Other` so one odd record cannot fail the whole list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum TodoId {
    Int(i64),
    Text(String),
    Other(Value),
}

impl Default for TodoId {
    fn default() -> Self {
        TodoId::Other(Value::Null)
    }
}

impl fmt::Display for TodoId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TodoId::Int(n) => write!(f, "{n}"),
            TodoId::Text(s) => f.write_str(s),
            TodoId::Other(v) => write!(f, "{v}"),
        }
    }
}

impl From<i64> for TodoId {
    fn from(n: i64) -> Self {
        TodoId::Int(n)
    }
}

impl From<&str> for TodoId {
    fn from(s: &str) -> Self {
        TodoId::Text(s.to_string())
    }
}

impl From<String> for TodoId {
    fn from(s: String) -> Self {
        TodoId::Text(s)
    }
}

/// A single todo record as returned by the remote resource.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Todo {
    #[serde(default)]
    pub id: TodoId,
    #[serde(default, deserialize_with = "lenient_text")]
    pub task: String,
    #[serde(rename = "isDone", default, deserialize_with = "truthy")]
    pub is_done: bool,
    /// Extra attribute some revisions of the data carry. Never interpreted.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub todo: Option<Value>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Todo {
    pub fn new(id: impl Into<TodoId>, task: impl Into<String>, is_done: bool) -> Self {
        Self {
            id: id.into(),
            task: task.into(),
            is_done,
            todo: None,
            extra: Map::new(),
        }
    }

    /// The same record with only the completion flag inverted.
    pub fn toggled(&self) -> Self {
        Self {
            is_done: !self.is_done,
            ..self.clone()
        }
    }
}

/// Request payload for creating a new todo.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreateTodo {
    pub task: String,
    #[serde(rename = "isDone", default)]
    pub is_done: bool,
}

impl CreateTodo {
    pub fn new(task: impl Into<String>) -> Self {
        Self {
            task: task.into(),
            is_done: false,
        }
    }
}

/// Reads a completion flag the way a loosely typed backend would: missing or
/// null is false, anything else goes by truthiness.
fn truthy<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(match value {
        Value::Null => false,
        Value::Bool(b) => b,
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0 && !f.is_nan()),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    })
}

/// Task text as sent: null reads as empty, non-strings as their JSON text.
fn lenient_text<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(match value {
        Value::Null => String::new(),
        Value::String(s) => s,
        other => other.to_string(),
    })
}
