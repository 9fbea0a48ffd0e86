//! Core runtime for Sluice: static entity models, dynamic values, the
//! introspectable predicate tree, and the filter compiler that turns
//! loosely-typed query parameters into predicates over one entity type.
#![warn(unreachable_pub)]

extern crate self as sluice_core;

// public exports are one module level down
pub mod error;
pub mod filter;
pub mod macros;
pub mod model;
pub mod predicate;
pub mod traits;
pub mod value;

// test
#[cfg(test)]
pub(crate) mod test_support;

pub use error::FilterError;

///
/// Prelude
///
/// Prelude contains only domain vocabulary needed to declare filterable
/// entities and compile queries against them.
///

pub mod prelude {
    pub use crate::{
        error::FilterError,
        filter::{CombineType, FilterCompiler, FilterOptions, FilterQuery, build_filter},
        model::{
            entity::EntityModel,
            enums::{ClosedEnumModel, ClosedKey, ClosedMember, EnumModel},
            field::{FieldKind, FieldModel},
        },
        predicate::Predicate,
        traits::{FieldValue, FilterEntity},
        value::Value,
    };
}
