//! Module: predicate::semantics
//! Responsibility: value comparison semantics under explicit coercion policies.
//! Does not own: predicate construction or field reads.
//! Boundary: the evaluator delegates every leaf comparison here.

use crate::{
    predicate::{CoercionId, TextFunc},
    value::{TextMode, Value, strict_order_cmp},
};
use std::{cmp::Ordering, mem::discriminant};

/// Perform equality comparison under an explicit coercion policy.
///
/// `None` means the two values are not comparable under that policy.
#[must_use]
pub fn compare_eq(left: &Value, right: &Value, coercion: CoercionId) -> Option<bool> {
    match coercion {
        CoercionId::Strict => same_variant(left, right).then(|| left == right),
        CoercionId::NumericWiden => {
            if !left.supports_numeric_coercion() || !right.supports_numeric_coercion() {
                return None;
            }

            left.cmp_numeric(right).map(Ordering::is_eq)
        }
        CoercionId::DateTruncate => {
            let (left, right) = (left.truncate_to_date(), right.truncate_to_date());
            same_variant(&left, &right).then(|| left == right)
        }
    }
}

/// Perform ordering comparison under an explicit coercion policy.
#[must_use]
pub fn compare_order(left: &Value, right: &Value, coercion: CoercionId) -> Option<Ordering> {
    match coercion {
        CoercionId::Strict => strict_order_cmp(left, right),
        CoercionId::NumericWiden => {
            if !left.supports_numeric_coercion() || !right.supports_numeric_coercion() {
                return None;
            }

            left.cmp_numeric(right)
        }
        CoercionId::DateTruncate => {
            strict_order_cmp(&left.truncate_to_date(), &right.truncate_to_date())
        }
    }
}

/// Perform a case-insensitive string function.
#[must_use]
pub fn compare_text(left: &Value, right: &Value, func: TextFunc) -> Option<bool> {
    match func {
        TextFunc::StartsWith => left.text_starts_with(right, TextMode::Ci),
        TextFunc::EndsWith => left.text_ends_with(right, TextMode::Ci),
        TextFunc::Contains => left.text_contains(right, TextMode::Ci),
        TextFunc::Equals => left.text_eq(right, TextMode::Ci),
    }
}

fn same_variant(left: &Value, right: &Value) -> bool {
    discriminant(left) == discriminant(right)
}
