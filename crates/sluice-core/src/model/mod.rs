//! Runtime data model definitions.
//!
//! Rust has no runtime reflection, so every filterable type describes itself
//! through a static model: the entity's fields, their declared kinds, and the
//! enumerations those kinds refer to. The filter compiler only ever reads
//! these models; it never inspects Rust types directly.
//!
//! In general:
//! - `filter_entity!` / `filter_enum!` (or hand-written consts) define *what exists*
//! - `model` defines *what the compiler dispatches on*
pub mod entity;
pub mod enums;
pub mod field;
