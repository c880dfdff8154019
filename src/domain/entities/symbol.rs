use serde::{Deserialize, Serialize};
use std::fmt;

/// An exchange-qualified instrument code plus a display name.
/// Immutable once selected for a run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Symbol {
    /// Exchange-qualified code, e.g. "2409.TW".
    pub code: String,
    /// Human-readable name; falls back to the code when unknown.
    pub name: String,
}

impl Symbol {
    pub fn new(code: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            name: name.into(),
        }
    }
}

impl fmt::Display for Symbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.name, self.code)
    }
}
