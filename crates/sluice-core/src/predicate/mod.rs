//! Module: predicate
//! Responsibility: the introspectable predicate tree, its comparison
//! semantics, a reference in-memory evaluator and a stable text rendering.
//! Does not own: building predicates from query tokens (see `filter`).
//! Boundary: consumers walk or translate `Predicate` without calling back
//! into the compiler.

mod display;
mod eval;
mod model;
mod semantics;


pub use model::{
    CoercionId, CompareOp, ComparePredicate, FieldRef, Predicate, RangePredicate, Target,
    TextFunc,
};
pub use semantics::{compare_eq, compare_order, compare_text};
