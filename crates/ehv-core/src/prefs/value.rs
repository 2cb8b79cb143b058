//! Typed preference values.

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// A single stored preference. Serialized untagged so the JSON document stays
/// readable: `true`, `3`, `"5000"`, `["a", "b"]`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum PrefValue {
    Bool(bool),
    Int(i32),
    Str(String),
    StrSet(BTreeSet<String>),
}

impl PrefValue {
    /// Short type name for logs and CLI output.
    pub fn kind(&self) -> &'static str {
        match self {
            PrefValue::Bool(_) => "bool",
            PrefValue::Int(_) => "int",
            PrefValue::Str(_) => "string",
            PrefValue::StrSet(_) => "set",
        }
    }
}

impl std::fmt::Display for PrefValue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PrefValue::Bool(b) => write!(f, "{b}"),
            PrefValue::Int(i) => write!(f, "{i}"),
            PrefValue::Str(s) => write!(f, "{s}"),
            PrefValue::StrSet(set) => {
                let items: Vec<&str> = set.iter().map(String::as_str).collect();
                write!(f, "{}", items.join(","))
            }
        }
    }
}
