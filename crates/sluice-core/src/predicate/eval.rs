//! Module: predicate::eval
//! Responsibility: reference in-memory evaluation of a predicate tree.
//! Does not own: comparison semantics (see `semantics`).
//! Boundary: unreadable targets and incomparable values evaluate to false.

use crate::{
    predicate::{
        CompareOp, ComparePredicate, Predicate, RangePredicate, Target, compare_eq,
        compare_order, compare_text,
    },
    traits::FilterEntity,
    value::{TextMode, Value},
};
use std::borrow::Cow;

///
/// Scope
///
/// Evaluation scope: the root entity plus the item bound by the nearest
/// enclosing `Any`, if any.
///

struct Scope<'a, E> {
    entity: &'a E,
    item: Option<&'a Value>,
}

impl<E> Clone for Scope<'_, E> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<E> Copy for Scope<'_, E> {}

impl Predicate {
    /// Evaluate this predicate against one entity in memory.
    ///
    /// Missing fields, broken paths and incomparable values evaluate to
    /// `false` at the leaf.
    #[must_use]
    pub fn eval<E: FilterEntity>(&self, entity: &E) -> bool {
        self.eval_in(Scope { entity, item: None })
    }

    fn eval_in<E: FilterEntity>(&self, scope: Scope<'_, E>) -> bool {
        match self {
            Self::And(children) => children.iter().all(|child| child.eval_in(scope)),
            Self::Or(children) => children.iter().any(|child| child.eval_in(scope)),
            Self::Not(inner) => !inner.eval_in(scope),
            Self::Any { target, predicate } => on_present(scope, target, |value| match value {
                Value::List(items) => items.iter().any(|item| {
                    predicate.eval_in(Scope {
                        entity: scope.entity,
                        item: Some(item),
                    })
                }),
                _ => false,
            }),
            Self::NullGuarded { target, inner } => {
                on_present(scope, target, |value| !value.is_null()) && inner.eval_in(scope)
            }
            Self::Compare(cmp) => eval_compare(scope, cmp),
            Self::Range(range) => eval_range(scope, range),
            Self::TextContains { target, value } => on_present(scope, target, |actual| {
                actual.text_contains(value, TextMode::Cs).unwrap_or(false)
            }),
            Self::TextFunction {
                target,
                func,
                value,
            } => on_present(scope, target, |actual| {
                compare_text(actual, value, *func).unwrap_or(false)
            }),
        }
    }
}

// Read the value a target points at within the current scope.
fn read_target<'a, E: FilterEntity>(scope: Scope<'a, E>, target: &Target) -> Option<Cow<'a, Value>> {
    match target {
        Target::Item => scope.item.map(Cow::Borrowed),
        Target::Field(field) => {
            let (first, rest) = field.slots.split_first()?;
            let mut value = scope.entity.get_value_by_index(*first)?;

            for slot in rest {
                value = match value {
                    Value::Record(mut fields) if *slot < fields.len() => fields.swap_remove(*slot),
                    _ => return None,
                };
            }

            Some(Cow::Owned(value))
        }
    }
}

// Evaluate `f` only when the target resolves to a value.
fn on_present<E: FilterEntity>(
    scope: Scope<'_, E>,
    target: &Target,
    f: impl FnOnce(&Value) -> bool,
) -> bool {
    read_target(scope, target).is_some_and(|value| f(&value))
}

fn eval_compare<E: FilterEntity>(scope: Scope<'_, E>, cmp: &ComparePredicate) -> bool {
    on_present(scope, &cmp.target, |actual| {
        // NOTE: comparison helpers return None when a comparison is invalid; eval treats that as false.
        match cmp.op {
            CompareOp::Eq => compare_eq(actual, &cmp.value, cmp.coercion).unwrap_or(false),
            CompareOp::Gte => compare_order(actual, &cmp.value, cmp.coercion)
                .is_some_and(std::cmp::Ordering::is_ge),
            CompareOp::Lte => compare_order(actual, &cmp.value, cmp.coercion)
                .is_some_and(std::cmp::Ordering::is_le),
        }
    })
}

fn eval_range<E: FilterEntity>(scope: Scope<'_, E>, range: &RangePredicate) -> bool {
    on_present(scope, &range.target, |actual| {
        let above = range.lower.as_ref().is_none_or(|lower| {
            compare_order(actual, lower, range.coercion).is_some_and(std::cmp::Ordering::is_ge)
        });
        let below = range.upper.as_ref().is_none_or(|upper| {
            compare_order(actual, upper, range.coercion).is_some_and(std::cmp::Ordering::is_le)
        });

        above && below
    })
}
