use crate::{model::field::FieldModel, value::casefold};
use std::fmt;

///
/// EntityModel
/// Static runtime model for one filterable type (entity or nested record).
///

pub struct EntityModel {
    /// Fully-qualified Rust type path; also the cache identity of the type.
    pub path: &'static str,
    /// External name of the type.
    pub entity_name: &'static str,
    /// Ordered field list; a field's slot is its index here.
    pub fields: &'static [FieldModel],
}

impl EntityModel {
    #[must_use]
    pub const fn new(
        path: &'static str,
        entity_name: &'static str,
        fields: &'static [FieldModel],
    ) -> Self {
        Self {
            path,
            entity_name,
            fields,
        }
    }

    #[must_use]
    pub fn field(&self, slot: usize) -> Option<&'static FieldModel> {
        self.fields.get(slot)
    }

    /// Linear case-insensitive scan over the declared fields, folding case
    /// the same way query segments are folded.
    ///
    /// Callers on hot paths go through the filter resolver's segment cache
    /// instead of calling this directly.
    #[must_use]
    pub fn scan_field_slot(&self, name: &str) -> Option<usize> {
        let name = casefold(name);

        self.fields
            .iter()
            .position(|field| casefold(field.name) == name)
    }
}

// Nested record kinds point back at models, so Debug stays shallow.
impl fmt::Debug for EntityModel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EntityModel")
            .field("path", &self.path)
            .field("entity_name", &self.entity_name)
            .field(
                "fields",
                &self.fields.iter().map(|field| field.name).collect::<Vec<_>>(),
            )
            .finish()
    }
}
