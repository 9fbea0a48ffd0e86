//! ## Crate layout
//! - `core`: entity models, values, predicate trees, and the filter compiler.
//!
//! The `prelude` module carries everything needed to declare a filterable
//! entity with `filter_entity!` and compile query parameters against it.

pub use sluice_core as core;

/// re-exports
///
/// field types used by `filter_entity!` declarations, so downstream crates
/// don't need to pin chrono / rust_decimal / uuid themselves
pub mod __reexports {
    pub use chrono;
    pub use rust_decimal;
    pub use uuid;
}

//
// Consts
//

/// Workspace version re-export for downstream tooling/tests.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

//
// Macros
//

pub use sluice_core::{FilterError, filter_entity, filter_enum};

///
/// Prelude
/// using _ brings traits into scope and avoids name conflicts
///

pub mod prelude {
    pub use crate::core::{
        error::FilterError,
        filter::{CombineType, FilterCompiler, FilterOptions, FilterQuery, build_filter},
        model::{
            entity::EntityModel,
            enums::{ClosedEnumModel, ClosedKey, ClosedMember, EnumModel},
            field::{FieldKind, FieldModel},
        },
        predicate::{Predicate, Target},
        traits::{FieldValue as _, FilterEntity},
        value::Value,
    };
    pub use crate::{filter_entity, filter_enum};
}
