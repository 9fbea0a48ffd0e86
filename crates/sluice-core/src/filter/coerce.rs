//! Module: filter::coerce
//! Responsibility: convert one literal token into a `Value` of the field's kind.
//! Does not own: token classification or comparison semantics.
//! Boundary: every failure is soft; callers drop the token and continue.

use crate::{
    filter::token::strip_quotes,
    model::{
        enums::{ClosedEnumModel, ClosedKey, ClosedMember},
        field::FieldKind,
    },
    value::{ClosedValue, Value, ValueEnum},
};
use chrono::{DateTime, FixedOffset, NaiveDate, NaiveDateTime};
use dashmap::DashMap;
use rust_decimal::Decimal;
use std::{
    collections::HashMap,
    str::FromStr,
    sync::{Arc, LazyLock},
};
use thiserror::Error as ThisError;
use tracing::{debug, trace};
use uuid::Uuid;

// Closed-enumeration path → key lookup table, built once per enumeration.
static CLOSED_LOOKUPS: LazyLock<DashMap<&'static str, Arc<ClosedLookup>>> =
    LazyLock::new(DashMap::new);

const DATE_FORMAT: &str = "%Y-%m-%d";
const DATE_TIME_FORMATS: &[&str] = &[
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M",
];
const DATE_TIME_OFFSET_FORMATS: &[&str] = &["%Y-%m-%dT%H:%M:%S%.f%:z", "%Y-%m-%d %H:%M:%S%.f%:z"];

///
/// CoercionError
///
/// Why a token could not be converted; logged, never surfaced.
///

#[derive(Debug, ThisError)]
pub(crate) enum CoercionError {
    #[error("'{token}' is not a member of enum '{path}'")]
    UnknownEnumMember { path: &'static str, token: String },

    #[error("'{token}' does not key a member of '{path}'")]
    UnknownClosedMember { path: &'static str, token: String },

    #[error("'{token}' is not a boolean (yes/true/1, no/false/0)")]
    InvalidBool { token: String },

    #[error("'{token}' is not a valid {kind}: {message}")]
    Parse {
        kind: &'static str,
        token: String,
        message: String,
    },

    #[error("fields of kind {kind} cannot be filtered by value")]
    Unsupported { kind: String },
}

impl CoercionError {
    fn parse(kind: &'static str, token: &str, err: impl ToString) -> Self {
        Self::Parse {
            kind,
            token: token.to_string(),
            message: err.to_string(),
        }
    }
}

/// Coerce `token` to `kind`, logging and returning `None` on failure.
pub(crate) fn coerce_token(kind: &FieldKind, token: &str) -> Option<Value> {
    match coerce(kind, token) {
        Ok(value) => Some(value),
        Err(err) => {
            debug!(%kind, token, error = %err, "token skipped");
            None
        }
    }
}

// Dispatch order: enum, bool, temporal/guid, closed enumeration, nullable,
// then generic scalar conversion.
fn coerce(kind: &FieldKind, token: &str) -> Result<Value, CoercionError> {
    match kind.non_null() {
        FieldKind::Enum(model) => model
            .variant(token)
            .map(|variant| Value::Enum(ValueEnum::new(model.path, variant)))
            .ok_or_else(|| CoercionError::UnknownEnumMember {
                path: model.path,
                token: token.to_string(),
            }),
        FieldKind::Bool => parse_bool(token),
        FieldKind::Date => NaiveDate::parse_from_str(token.trim(), DATE_FORMAT)
            .map(Value::Date)
            .map_err(|err| CoercionError::parse("date", token, err)),
        FieldKind::DateTime => parse_date_time(token).map(Value::DateTime),
        FieldKind::DateTimeOffset => parse_date_time_offset(token).map(Value::DateTimeOffset),
        FieldKind::Guid => Uuid::parse_str(token.trim())
            .map(Value::Guid)
            .map_err(|err| CoercionError::parse("guid", token, err)),
        FieldKind::Closed(model) => coerce_closed(*model, token),
        scalar => coerce_scalar(scalar, token),
    }
}

fn parse_bool(token: &str) -> Result<Value, CoercionError> {
    let token = token.trim();

    if ["yes", "true", "1"]
        .iter()
        .any(|t| t.eq_ignore_ascii_case(token))
    {
        Ok(Value::Bool(true))
    } else if ["no", "false", "0"]
        .iter()
        .any(|f| f.eq_ignore_ascii_case(token))
    {
        Ok(Value::Bool(false))
    } else {
        Err(CoercionError::InvalidBool {
            token: token.to_string(),
        })
    }
}

fn parse_date_time(token: &str) -> Result<NaiveDateTime, CoercionError> {
    let token = token.trim();

    if let Some(dt) = DATE_TIME_FORMATS
        .iter()
        .find_map(|format| NaiveDateTime::parse_from_str(token, format).ok())
    {
        return Ok(dt);
    }
    if let Ok(dt) = DateTime::parse_from_rfc3339(token) {
        return Ok(dt.naive_utc());
    }

    NaiveDate::parse_from_str(token, DATE_FORMAT)
        .map_err(|err| CoercionError::parse("date-time", token, err))?
        .and_hms_opt(0, 0, 0)
        .ok_or_else(|| CoercionError::parse("date-time", token, "midnight out of range"))
}

fn parse_date_time_offset(token: &str) -> Result<DateTime<FixedOffset>, CoercionError> {
    let token = token.trim();

    if let Ok(dt) = DateTime::parse_from_rfc3339(token) {
        return Ok(dt);
    }
    if let Some(dt) = DATE_TIME_OFFSET_FORMATS
        .iter()
        .find_map(|format| DateTime::parse_from_str(token, format).ok())
    {
        return Ok(dt);
    }

    // No offset in the token: read it as UTC.
    let naive = parse_date_time(token)?;
    let utc = FixedOffset::east_opt(0)
        .ok_or_else(|| CoercionError::parse("date-time-offset", token, "invalid offset"))?;

    Ok(DateTime::from_naive_utc_and_offset(naive, utc))
}

// Nullable wrappers are already stripped; this is the generic fallback.
fn coerce_scalar(kind: &FieldKind, token: &str) -> Result<Value, CoercionError> {
    let raw = strip_quotes(token.trim());

    match kind {
        FieldKind::Text => Ok(Value::Text(raw.to_string())),
        FieldKind::Int => raw
            .parse::<i64>()
            .map(Value::Int)
            .map_err(|err| CoercionError::parse("integer", token, err)),
        FieldKind::Uint => raw
            .parse::<u64>()
            .map(Value::Uint)
            .map_err(|err| CoercionError::parse("unsigned integer", token, err)),
        FieldKind::Float64 => raw
            .parse::<f64>()
            .map(Value::Float64)
            .map_err(|err| CoercionError::parse("float", token, err)),
        FieldKind::Decimal => Decimal::from_str(raw)
            .or_else(|_| Decimal::from_scientific(raw))
            .map(Value::Decimal)
            .map_err(|err| CoercionError::parse("decimal", token, err)),
        other => Err(CoercionError::Unsupported {
            kind: other.to_string(),
        }),
    }
}

//
// Closed enumerations
//

///
/// LookupKey
/// Owned form of `ClosedKey`, used to probe the lookup table.
///

#[derive(Debug, Eq, Hash, PartialEq)]
enum LookupKey {
    Int(i64),
    Text(String),
}

impl From<ClosedKey> for LookupKey {
    fn from(key: ClosedKey) -> Self {
        match key {
            ClosedKey::Int(v) => Self::Int(v),
            ClosedKey::Text(v) => Self::Text(v.to_string()),
        }
    }
}

///
/// ClosedLookup
///

#[derive(Debug)]
struct ClosedLookup {
    members: HashMap<LookupKey, &'static ClosedMember>,
}

impl ClosedLookup {
    fn build(model: &'static ClosedEnumModel) -> Self {
        let members = model
            .members
            .iter()
            .map(|member| (LookupKey::from(member.key), member))
            .collect();

        Self { members }
    }
}

// Racing first uses may both build; the first insert wins and both are equal.
fn closed_lookup(model: &'static ClosedEnumModel) -> Arc<ClosedLookup> {
    if let Some(hit) = CLOSED_LOOKUPS.get(model.path) {
        return Arc::clone(&hit);
    }

    let built = Arc::new(ClosedLookup::build(model));
    trace!(closed = model.path, members = model.members.len(), "closed lookup built");

    Arc::clone(&CLOSED_LOOKUPS.entry(model.path).or_insert(built))
}

fn coerce_closed(model: &'static ClosedEnumModel, token: &str) -> Result<Value, CoercionError> {
    let key = match coerce(model.key_kind, token)? {
        Value::Int(v) => LookupKey::Int(v),
        Value::Text(v) => LookupKey::Text(v),
        other => {
            return Err(CoercionError::Unsupported {
                kind: format!("{} key {other:?}", model.path),
            });
        }
    };

    let lookup = closed_lookup(model);
    let member = lookup
        .members
        .get(&key)
        .ok_or_else(|| CoercionError::UnknownClosedMember {
            path: model.path,
            token: token.to_string(),
        })?;

    Ok(Value::Closed(ClosedValue::new(
        model.path,
        member.name,
        member.key,
    )))
}
