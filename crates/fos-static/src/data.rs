//! Render-time data
//!
//! The values a render pass reads from. Hosts usually deserialize it from
//! whatever they keep component state in.

use std::collections::HashMap;

use serde::Deserialize;

use crate::{RenderError, Result};

/// A single render-time value
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum Value {
    Bool(bool),
    Number(f64),
    Text(String),
    List(Vec<RenderData>),
}

impl Value {
    /// Text form of a scalar value, `None` for lists
    pub fn to_text(&self) -> Option<String> {
        match self {
            Value::Bool(b) => Some(b.to_string()),
            Value::Number(n) if n.is_finite() && n.fract() == 0.0 && n.abs() < 9.007_199_254_740_992e15 => {
                Some(format!("{}", *n as i64))
            }
            Value::Number(n) => Some(n.to_string()),
            Value::Text(t) => Some(t.clone()),
            Value::List(_) => None,
        }
    }

    /// Items of a list value
    pub fn as_list(&self) -> Option<&[RenderData]> {
        match self {
            Value::List(items) => Some(items),
            _ => None,
        }
    }
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Value::Text(value.to_string())
    }
}

impl From<String> for Value {
    fn from(value: String) -> Self {
        Value::Text(value)
    }
}

impl From<f64> for Value {
    fn from(value: f64) -> Self {
        Value::Number(value)
    }
}

impl From<i64> for Value {
    fn from(value: i64) -> Self {
        Value::Number(value as f64)
    }
}

impl From<bool> for Value {
    fn from(value: bool) -> Self {
        Value::Bool(value)
    }
}

impl From<Vec<RenderData>> for Value {
    fn from(value: Vec<RenderData>) -> Self {
        Value::List(value)
    }
}

/// Named values a render pass is evaluated against
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(transparent)]
pub struct RenderData {
    fields: HashMap<String, Value>,
}

impl RenderData {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style insert
    pub fn with(mut self, name: impl Into<String>, value: impl Into<Value>) -> Self {
        self.insert(name, value);
        self
    }

    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<Value>) {
        self.fields.insert(name.into(), value.into());
    }

    pub fn get(&self, name: &str) -> Option<&Value> {
        self.fields.get(name)
    }

    /// Lookup that reports a missing field as a render fault
    pub fn require(&self, name: &str) -> Result<&Value> {
        self.get(name).ok_or_else(|| RenderError::MissingField {
            field: name.to_string(),
        })
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}
