//! Insertion-ordered dependency-injection preference map with
//! suffix-match queries.
//!
//! A "preference" maps an abstract interface type name to the concrete
//! class a DI container instantiates for it. This crate stores those
//! pairs in configuration order and answers queries of the form "which
//! configured type names end with this fragment?".
//!
//! Matching is a literal trailing-substring comparison with no
//! namespace-segment awareness: the query `nce` matches
//! `Test\Configured\Preference`. A fragment occurring only at the start
//! or in the middle of a type name does not match.
//!
//! # Example
//!
//! ```rust
//! use diprobe_prefs::{PreferenceMap, QuerySet};
//!
//! let mut prefs = PreferenceMap::new();
//! prefs.insert("Test\\Configured\\Preference", "Test\\Target\\Class");
//!
//! let queries = QuerySet::parse(["Preference"]);
//! let matches = prefs.find(&queries);
//! assert_eq!(matches.len(), 1);
//! assert_eq!(matches[0].type_name, "Test\\Configured\\Preference");
//! ```

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// A configured preference pair, borrowed from a [`PreferenceMap`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Preference<'a> {
    /// Fully-qualified interface or class name.
    pub type_name: &'a str,
    /// Concrete class configured as its preference.
    pub target_class: &'a str,
}

/// Mapping from interface type name to configured target class.
///
/// Keys are unique and iteration follows insertion order, so output
/// derived from a walk over the map is stable across runs for the same
/// configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PreferenceMap {
    entries: IndexMap<String, String>,
}

impl PreferenceMap {
    /// Creates an empty map.
    pub fn new() -> Self {
        Self {
            entries: IndexMap::new(),
        }
    }

    /// Inserts a preference, returning the previous target class if the
    /// type name was already configured. Re-inserting an existing key
    /// keeps its original position.
    pub fn insert(
        &mut self,
        type_name: impl Into<String>,
        target_class: impl Into<String>,
    ) -> Option<String> {
        self.entries.insert(type_name.into(), target_class.into())
    }

    /// Returns the configured target class for an exact type name.
    pub fn get(&self, type_name: &str) -> Option<&str> {
        self.entries.get(type_name).map(|s| s.as_str())
    }

    /// Returns the number of configured preferences.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if no preferences are configured.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterates over all preferences in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = Preference<'_>> {
        self.entries.iter().map(|(type_name, target_class)| Preference {
            type_name,
            target_class,
        })
    }

    /// Returns all preferences whose type name ends with at least one
    /// query fragment.
    ///
    /// Performs a single pass over the map in insertion order, so
    /// result order derives from the map and never from the query
    /// list, and each type name appears at most once even when several
    /// fragments match it. An empty query set matches nothing.
    pub fn find(&self, queries: &QuerySet) -> Vec<Preference<'_>> {
        self.iter()
            .filter(|pref| queries.matches(pref.type_name))
            .collect()
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for PreferenceMap {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            entries: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}

/// A preprocessed set of query fragments for suffix matching.
///
/// Raw fragments are trimmed of surrounding whitespace and stripped of
/// leading namespace separators (`\`); fragments left empty by either
/// step are dropped.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QuerySet {
    fragments: Vec<String>,
}

impl QuerySet {
    /// Builds a query set from raw caller-supplied fragments.
    pub fn parse<I, S>(raw: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let fragments = raw
            .into_iter()
            .filter_map(|s| {
                let fragment = s.as_ref().trim().trim_start_matches('\\');
                (!fragment.is_empty()).then(|| fragment.to_string())
            })
            .collect();
        Self { fragments }
    }

    /// Returns the number of usable fragments.
    pub fn len(&self) -> usize {
        self.fragments.len()
    }

    /// Returns true if no usable fragments remain after preprocessing.
    pub fn is_empty(&self) -> bool {
        self.fragments.is_empty()
    }

    /// Returns the preprocessed fragments in input order.
    pub fn fragments(&self) -> &[String] {
        &self.fragments
    }

    /// Returns true if `type_name` ends with any fragment.
    ///
    /// A fragment longer than `type_name` is simply no match.
    pub fn matches(&self, type_name: &str) -> bool {
        self.fragments.iter().any(|q| type_name.ends_with(q.as_str()))
    }
}
