//! Module: filter::query
//! Responsibility: the compiler's input surface (query entries, combine type,
//! options) and its parsing from query strings and configuration.
//! Does not own: interpreting paths or tokens.
//! Boundary: an unknown combine type is the only error raised here.

use crate::error::FilterError;
use derive_more::{Deref, IntoIterator};
use serde::{Deserialize, Deserializer, de};
use std::{fmt, str::FromStr};

///
/// FilterEntry
///
/// One query entry: a dotted field path and its value tokens, in input order.
///

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct FilterEntry {
    pub path: String,
    pub tokens: Vec<String>,
}

///
/// FilterQuery
///
/// Ordered mapping from field path to value tokens. Pushing an existing path
/// appends to that entry instead of creating a second one.
///

#[derive(Clone, Debug, Default, Deref, Eq, IntoIterator, PartialEq)]
#[into_iterator(owned, ref)]
pub struct FilterQuery {
    entries: Vec<FilterEntry>,
}

impl FilterQuery {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Append tokens for `path`, merging with an earlier entry for the same path.
    pub fn push<S: Into<String>>(
        &mut self,
        path: impl Into<String>,
        tokens: impl IntoIterator<Item = S>,
    ) -> &mut Self {
        let path = path.into();
        let tokens = tokens.into_iter().map(Into::into);

        match self.entries.iter_mut().find(|entry| entry.path == path) {
            Some(entry) => entry.tokens.extend(tokens),
            None => self.entries.push(FilterEntry {
                path,
                tokens: tokens.collect(),
            }),
        }

        self
    }

    /// Parse an `application/x-www-form-urlencoded` query string.
    ///
    /// Every occurrence of a key contributes one token; keys keep the order
    /// of their first occurrence.
    pub fn from_query_string(input: &str) -> Result<Self, FilterError> {
        let pairs: Vec<(String, String)> = serde_urlencoded::from_str(input)?;

        let mut query = Self::new();
        for (path, token) in pairs {
            query.push(path, [token]);
        }

        Ok(query)
    }
}

impl<K, V, S> FromIterator<(K, V)> for FilterQuery
where
    K: Into<String>,
    V: IntoIterator<Item = S>,
    S: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut query = Self::new();
        for (path, tokens) in iter {
            query.push(path, tokens);
        }

        query
    }
}

///
/// CombineType
///
/// Logical operator joining per-field predicates. Tokens within one field
/// are always OR-ed, regardless of this setting.
///

#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq)]
pub enum CombineType {
    #[default]
    And,
    Or,
}

impl FromStr for CombineType {
    type Err = FilterError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();

        if s.eq_ignore_ascii_case("and") {
            Ok(Self::And)
        } else if s.eq_ignore_ascii_case("or") {
            Ok(Self::Or)
        } else {
            Err(FilterError::UnknownCombineType {
                value: s.to_string(),
            })
        }
    }
}

impl fmt::Display for CombineType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::And => f.write_str("AND"),
            Self::Or => f.write_str("OR"),
        }
    }
}

impl<'de> Deserialize<'de> for CombineType {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;

        raw.parse().map_err(de::Error::custom)
    }
}

///
/// FilterOptions
///
/// Per-compiler configuration; deserializable from request parameters or
/// a configuration file.
///

#[derive(Clone, Debug, Default, Deserialize, Eq, PartialEq)]
#[serde(default)]
pub struct FilterOptions {
    pub combine: CombineType,
}

impl FilterOptions {
    #[must_use]
    pub const fn with_combine(combine: CombineType) -> Self {
        Self { combine }
    }
}
