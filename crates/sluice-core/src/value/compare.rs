use crate::value::Value;
use rust_decimal::{Decimal, prelude::ToPrimitive};
use std::cmp::Ordering;

///
/// NumericRepr
///

enum NumericRepr {
    Decimal(Decimal),
    F64(f64),
    None,
}

/// Strict comparator for identical orderable variants.
///
/// Returns `None` for mismatched or non-orderable variants.
#[must_use]
pub fn strict_order_cmp(left: &Value, right: &Value) -> Option<Ordering> {
    match (left, right) {
        (Value::Bool(a), Value::Bool(b)) => a.partial_cmp(b),
        (Value::Date(a), Value::Date(b)) => a.partial_cmp(b),
        (Value::DateTime(a), Value::DateTime(b)) => a.partial_cmp(b),
        (Value::DateTimeOffset(a), Value::DateTimeOffset(b)) => a.partial_cmp(b),
        (Value::Decimal(a), Value::Decimal(b)) => a.partial_cmp(b),
        (Value::Float64(a), Value::Float64(b)) => a.partial_cmp(b),
        (Value::Guid(a), Value::Guid(b)) => a.partial_cmp(b),
        (Value::Int(a), Value::Int(b)) => a.partial_cmp(b),
        (Value::Text(a), Value::Text(b)) => a.partial_cmp(b),
        (Value::Uint(a), Value::Uint(b)) => a.partial_cmp(b),
        _ => None,
    }
}

impl Value {
    /// Compare two numeric values across numeric variants.
    ///
    /// Integers and decimals compare exactly; anything involving a float
    /// compares as `f64`.
    #[must_use]
    pub fn cmp_numeric(&self, other: &Self) -> Option<Ordering> {
        match (self.numeric_repr(), other.numeric_repr()) {
            (NumericRepr::Decimal(a), NumericRepr::Decimal(b)) => Some(a.cmp(&b)),
            (NumericRepr::F64(a), NumericRepr::F64(b)) => a.partial_cmp(&b),
            (NumericRepr::Decimal(a), NumericRepr::F64(b)) => a.to_f64()?.partial_cmp(&b),
            (NumericRepr::F64(a), NumericRepr::Decimal(b)) => a.partial_cmp(&b.to_f64()?),
            _ => None,
        }
    }

    fn numeric_repr(&self) -> NumericRepr {
        match self {
            Self::Decimal(v) => NumericRepr::Decimal(*v),
            Self::Float64(v) => NumericRepr::F64(*v),
            Self::Int(v) => NumericRepr::Decimal(Decimal::from(*v)),
            Self::Uint(v) => NumericRepr::Decimal(Decimal::from(*v)),
            _ => NumericRepr::None,
        }
    }
}
