mod compare;


use crate::model::enums::ClosedKey;
use chrono::{DateTime, FixedOffset, NaiveDate, NaiveDateTime};
use rust_decimal::Decimal;
use serde::Serialize;
use std::fmt;
use uuid::Uuid;

// re-exports
pub use compare::strict_order_cmp;

///
/// TextMode
///

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum TextMode {
    Cs, // case-sensitive
    Ci, // case-insensitive
}

///
/// ValueEnum
/// One member of a plain enumeration.
///

#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, Serialize)]
pub struct ValueEnum {
    pub path: &'static str,
    pub variant: &'static str,
}

impl ValueEnum {
    #[must_use]
    pub const fn new(path: &'static str, variant: &'static str) -> Self {
        Self { path, variant }
    }
}

///
/// ClosedValue
/// One singleton of a closed enumeration, carrying its underlying key.
///

#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, Serialize)]
pub struct ClosedValue {
    pub path: &'static str,
    pub member: &'static str,
    pub key: ClosedKey,
}

impl ClosedValue {
    #[must_use]
    pub const fn new(path: &'static str, member: &'static str, key: ClosedKey) -> Self {
        Self { path, member, key }
    }
}

///
/// Value
///
/// Dynamic value used for predicate literals and for field reads during
/// in-memory evaluation.
///
/// Null    → the field's value is absent (`Option::None`).
/// Record  → a nested record, slot-ordered like its `EntityModel` fields.
///

#[derive(Clone, Debug, PartialEq, Serialize)]
pub enum Value {
    Bool(bool),
    Closed(ClosedValue),
    Date(NaiveDate),
    DateTime(NaiveDateTime),
    DateTimeOffset(DateTime<FixedOffset>),
    Decimal(Decimal),
    Enum(ValueEnum),
    Float64(f64),
    Guid(Uuid),
    Int(i64),
    List(Vec<Self>),
    Null,
    Record(Vec<Self>),
    Text(String),
    Uint(u64),
}

impl Value {
    #[must_use]
    pub const fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }

    #[must_use]
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text(text) => Some(text),
            _ => None,
        }
    }

    #[must_use]
    pub const fn supports_numeric_coercion(&self) -> bool {
        matches!(
            self,
            Self::Decimal(_) | Self::Float64(_) | Self::Int(_) | Self::Uint(_)
        )
    }

    /// Date component of a temporal value; other values pass through.
    #[must_use]
    pub fn truncate_to_date(&self) -> Self {
        match self {
            Self::DateTime(dt) => Self::Date(dt.date()),
            Self::DateTimeOffset(dt) => Self::Date(dt.date_naive()),
            other => other.clone(),
        }
    }

    //
    // Text
    //

    #[must_use]
    pub fn text_eq(&self, other: &Self, mode: TextMode) -> Option<bool> {
        self.text_op(other, mode, |a, b| a == b)
    }

    #[must_use]
    pub fn text_contains(&self, needle: &Self, mode: TextMode) -> Option<bool> {
        self.text_op(needle, mode, |a, b| a.contains(b))
    }

    #[must_use]
    pub fn text_starts_with(&self, needle: &Self, mode: TextMode) -> Option<bool> {
        self.text_op(needle, mode, |a, b| a.starts_with(b))
    }

    #[must_use]
    pub fn text_ends_with(&self, needle: &Self, mode: TextMode) -> Option<bool> {
        self.text_op(needle, mode, |a, b| a.ends_with(b))
    }

    fn text_op(
        &self,
        other: &Self,
        mode: TextMode,
        f: impl Fn(&str, &str) -> bool,
    ) -> Option<bool> {
        let (a, b) = (self.as_text()?, other.as_text()?);

        match mode {
            TextMode::Cs => Some(f(a, b)),
            TextMode::Ci => Some(f(&casefold(a), &casefold(b))),
        }
    }
}

/// Lower-case for case-insensitive comparison; ASCII input takes the fast path.
#[must_use]
pub fn casefold(input: &str) -> String {
    if input.is_ascii() {
        return input.to_ascii_lowercase();
    }

    input.to_lowercase()
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Bool(v) => write!(f, "{v}"),
            Self::Closed(v) => f.write_str(v.member),
            Self::Date(v) => write!(f, "{v}"),
            Self::DateTime(v) => write!(f, "{}", v.format("%Y-%m-%dT%H:%M:%S%.f")),
            Self::DateTimeOffset(v) => write!(f, "{}", v.to_rfc3339()),
            Self::Decimal(v) => write!(f, "{v}"),
            Self::Enum(v) => f.write_str(v.variant),
            Self::Float64(v) => write!(f, "{v}"),
            Self::Guid(v) => write!(f, "{v}"),
            Self::Int(v) => write!(f, "{v}"),
            Self::List(items) => {
                f.write_str("[")?;
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{item}")?;
                }
                f.write_str("]")
            }
            Self::Null => f.write_str("null"),
            Self::Record(fields) => write!(f, "{{record: {} fields}}", fields.len()),
            Self::Text(v) => write!(f, "{v:?}"),
            Self::Uint(v) => write!(f, "{v}"),
        }
    }
}
