//! Name search result types
//!
//! Short queries always enumerate by prefix; longer queries try an exact
//! match first and fall back to prefix enumeration.

use serde::{Deserialize, Serialize};

/// Which tier answered a name search
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SearchKind {
    /// The folded query is itself an indexed name
    Exact,
    /// All indexed names beginning with the folded query
    Prefix,
}

impl SearchKind {
    /// Wire name: `"exact"` or `"prefix"`
    pub fn as_str(&self) -> &'static str {
        match self {
            SearchKind::Exact => "exact",
            SearchKind::Prefix => "prefix",
        }
    }
}

/// Result of a name search
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchResult {
    /// Tier that produced `names`
    pub kind: SearchKind,
    /// The case-folded query
    pub query: String,
    /// Matching folded names, lexicographic for prefix results
    pub names: Vec<String>,
}

impl SearchResult {
    /// Number of matching names
    pub fn count(&self) -> usize {
        self.names.len()
    }
}
