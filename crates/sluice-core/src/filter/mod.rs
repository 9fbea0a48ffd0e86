//! Module: filter
//! Responsibility: compile a loosely-typed query (field path → value tokens)
//! into one optional `Predicate` over an entity type.
//! Does not own: predicate evaluation or translation (see `predicate`).
//! Boundary: the only entry point services call per request.
//!
//! Pipeline per query entry: `resolve` (field path) → `token` (shape of each
//! value token) → `coerce` (token text to a typed `Value`) → `assemble`
//! (leaf, negation, existential, and the two levels of combination).

mod assemble;
mod coerce;
mod query;
mod resolve;
mod token;

#[cfg(test)]
mod tests;

pub use query::{CombineType, FilterEntry, FilterOptions, FilterQuery};

use crate::{
    error::FilterError, model::entity::EntityModel, predicate::Predicate, traits::FilterEntity,
};
use std::marker::PhantomData;
use tracing::debug;

///
/// FilterCompiler
///
/// Stateless, reentrant compiler specialised to one entity type. Shared
/// state lives in the process-wide resolver and coercion caches.
///

pub struct FilterCompiler<E> {
    options: FilterOptions,
    _marker: PhantomData<fn() -> E>,
}

impl<E: FilterEntity> FilterCompiler<E> {
    #[must_use]
    pub const fn new(options: FilterOptions) -> Self {
        Self {
            options,
            _marker: PhantomData,
        }
    }

    #[must_use]
    pub const fn options(&self) -> &FilterOptions {
        &self.options
    }

    /// Compile `query`; `Ok(None)` means "apply no filtering".
    pub fn compile(&self, query: &FilterQuery) -> Result<Option<Predicate>, FilterError> {
        compile_model(E::MODEL, query, self.options.combine)
    }
}

impl<E: FilterEntity> Default for FilterCompiler<E> {
    fn default() -> Self {
        Self::new(FilterOptions::default())
    }
}

/// Compile `query` for entity type `E`, joining fields with `combine`.
pub fn build_filter<E: FilterEntity>(
    query: &FilterQuery,
    combine: CombineType,
) -> Result<Option<Predicate>, FilterError> {
    compile_model(E::MODEL, query, combine)
}

/// Model-level entry point shared by the typed wrappers.
pub fn compile_model(
    model: &'static EntityModel,
    query: &FilterQuery,
    combine: CombineType,
) -> Result<Option<Predicate>, FilterError> {
    let items = resolve::filter_items(model, query);

    let mut fields = Vec::with_capacity(items.len());
    for item in &items {
        match assemble::field_predicate(model, item)? {
            Some(predicate) => fields.push(predicate),
            None => debug!(
                entity = model.path,
                path = item.path,
                "no token survived; field contributes no predicate"
            ),
        }
    }

    let predicate = assemble::combine_fields(fields, combine);
    if let Some(predicate) = &predicate {
        debug!(entity = model.path, %predicate, "compiled filter");
    }

    Ok(predicate)
}
