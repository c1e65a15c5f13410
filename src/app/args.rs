//! Per-invocation argument snapshot.
//!
//! Holds the values of every component that changed or fired since the
//! previous round trip, keyed by component name. Handlers only ever read it.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// A single submitted component value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ArgValue {
    Null,
    Bool(bool),
    Number(f64),
    Text(String),
    List(Vec<String>),
}

impl ArgValue {
    /// Empty strings, `false`, zero, empty lists and null are all falsy.
    pub fn is_truthy(&self) -> bool {
        match self {
            ArgValue::Null => false,
            ArgValue::Bool(b) => *b,
            ArgValue::Number(n) => *n != 0.0,
            ArgValue::Text(s) => !s.is_empty(),
            ArgValue::List(items) => !items.is_empty(),
        }
    }
}

impl fmt::Display for ArgValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ArgValue::Null => Ok(()),
            ArgValue::Bool(b) => write!(f, "{}", b),
            ArgValue::Number(n) => write!(f, "{}", n),
            ArgValue::Text(s) => f.write_str(s),
            ArgValue::List(items) => f.write_str(&items.join(",")),
        }
    }
}

impl From<&str> for ArgValue {
    fn from(s: &str) -> Self {
        ArgValue::Text(s.to_string())
    }
}

impl From<String> for ArgValue {
    fn from(s: String) -> Self {
        ArgValue::Text(s)
    }
}

impl From<bool> for ArgValue {
    fn from(b: bool) -> Self {
        ArgValue::Bool(b)
    }
}

/// Read-only view of the arguments, as handlers see them.
pub trait Arguments {
    fn get(&self, name: &str) -> Option<&ArgValue>;

    /// A present-but-falsy value reads the same as an absent one.
    fn is_set(&self, name: &str) -> bool {
        self.get(name).map(ArgValue::is_truthy).unwrap_or(false)
    }

    /// The value rendered as text, empty when absent.
    fn text(&self, name: &str) -> String {
        self.get(name).map(|v| v.to_string()).unwrap_or_default()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ArgumentSet {
    values: BTreeMap<String, ArgValue>,
}

impl ArgumentSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_pairs<I, K, V>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<ArgValue>,
    {
        Self {
            values: pairs
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.values.keys().map(String::as_str)
    }
}

impl Arguments for ArgumentSet {
    fn get(&self, name: &str) -> Option<&ArgValue> {
        self.values.get(name)
    }
}
