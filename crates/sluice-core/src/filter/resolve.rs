//! Module: filter::resolve
//! Responsibility: dotted field path → validated slot chain and leaf kind.
//! Does not own: token parsing or value coercion.
//! Boundary: top-level misses are soft (entry dropped); nested misses are fatal.

use crate::{
    error::FilterError,
    filter::query::FilterQuery,
    model::{
        entity::EntityModel,
        field::{FieldKind, FieldModel},
    },
    predicate::FieldRef,
    value::casefold,
};
use dashmap::DashMap;
use std::sync::LazyLock;
use tracing::{debug, trace};

// (model path, case-folded segment) → slot, populated lazily for the process.
static FIELD_SLOTS: LazyLock<DashMap<(&'static str, String), usize>> =
    LazyLock::new(DashMap::new);

///
/// FilterItem
///
/// A query entry whose first path segment matched a field of the entity.
///

#[derive(Debug)]
pub(crate) struct FilterItem<'q> {
    pub(crate) field: &'static FieldModel,
    pub(crate) path: &'q str,
    pub(crate) tokens: &'q [String],
}

///
/// ResolvedField
///

#[derive(Debug)]
pub(crate) struct ResolvedField {
    pub(crate) field: FieldRef,
    pub(crate) kind: &'static FieldKind,
}

/// Keep the entries whose first segment names a field of `model`, in order.
pub(crate) fn filter_items<'q>(
    model: &'static EntityModel,
    query: &'q FilterQuery,
) -> Vec<FilterItem<'q>> {
    query
        .iter()
        .filter_map(|entry| {
            let head = entry.path.split('.').next().unwrap_or_default();

            let Some(slot) = field_slot(model, head) else {
                debug!(entity = model.path, path = %entry.path, "unknown field; entry dropped");
                return None;
            };

            Some(FilterItem {
                field: model.field(slot)?,
                path: &entry.path,
                tokens: &entry.tokens,
            })
        })
        .collect()
}

/// Resolve a full dotted path against `model`.
///
/// Every segment after the first must name a field of the record reached so
/// far; anything else is a fatal error.
pub(crate) fn resolve_path(
    model: &'static EntityModel,
    path: &str,
) -> Result<ResolvedField, FilterError> {
    let mut current = model;
    let mut names = Vec::new();
    let mut slots = Vec::new();
    let mut kind: Option<&'static FieldKind> = None;

    for segment in path.split('.') {
        if let Some(previous) = kind {
            current = previous.record().ok_or_else(|| {
                FilterError::non_record_segment(
                    model.path,
                    path,
                    names.last().copied().unwrap_or_default(),
                )
            })?;
        }

        let slot = field_slot(current, segment)
            .ok_or_else(|| FilterError::unresolved_path(model.path, path, segment))?;
        let field = current
            .field(slot)
            .ok_or_else(|| FilterError::unresolved_path(model.path, path, segment))?;

        names.push(field.name);
        slots.push(slot);
        kind = Some(&field.kind);
    }

    let kind = kind.ok_or_else(|| FilterError::unresolved_path(model.path, path, path))?;

    Ok(ResolvedField {
        field: FieldRef::new(names.join("."), slots),
        kind,
    })
}

/// Case-insensitive single-segment lookup, cached per (model, segment).
///
/// Only hits are cached: segment names arrive from remote query keys, and a
/// miss must not grow the process-lifetime map.
pub(crate) fn field_slot(model: &'static EntityModel, segment: &str) -> Option<usize> {
    let key = (model.path, casefold(segment.trim()));

    if let Some(hit) = FIELD_SLOTS.get(&key) {
        return Some(*hit);
    }

    let slot = model.scan_field_slot(&key.1)?;
    trace!(entity = model.path, segment = %key.1, slot, "field slot cached");
    FIELD_SLOTS.insert(key, slot);

    Some(slot)
}
