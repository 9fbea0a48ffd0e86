//! Traits binding Rust types to their static models and runtime values.

use crate::{model::entity::EntityModel, value::Value};
use chrono::{DateTime, FixedOffset, NaiveDate, NaiveDateTime};
use rust_decimal::Decimal;
use uuid::Uuid;

///
/// FilterEntity
///
/// A type that predicates can be compiled for and evaluated against.
/// `MODEL` is the authoritative field list; slots index into it.
///

pub trait FilterEntity {
    const MODEL: &'static EntityModel;

    /// Read one field by slot; `None` when the slot does not exist.
    fn get_value_by_index(&self, slot: usize) -> Option<Value>;
}

///
/// FieldValue
///
/// Conversion of a stored field into its runtime `Value`.
///

pub trait FieldValue {
    fn to_value(&self) -> Value;
}

macro_rules! impl_field_value {
    ( $( $type:ty => $variant:ident ),* $(,)? ) => {
        $(
            impl FieldValue for $type {
                fn to_value(&self) -> Value {
                    Value::$variant((*self).into())
                }
            }
        )*
    };
}

impl_field_value!(
    bool => Bool,
    i8 => Int,
    i16 => Int,
    i32 => Int,
    i64 => Int,
    u8 => Uint,
    u16 => Uint,
    u32 => Uint,
    u64 => Uint,
    f64 => Float64,
    Decimal => Decimal,
    NaiveDate => Date,
    NaiveDateTime => DateTime,
    DateTime<FixedOffset> => DateTimeOffset,
    Uuid => Guid,
);

// Widen through the shortest decimal form so 0.1f32 reads as 0.1, not
// 0.100000001490116.
impl FieldValue for f32 {
    fn to_value(&self) -> Value {
        let widened = self
            .to_string()
            .parse::<f64>()
            .unwrap_or_else(|_| f64::from(*self));

        Value::Float64(widened)
    }
}

impl FieldValue for String {
    fn to_value(&self) -> Value {
        Value::Text(self.clone())
    }
}

impl FieldValue for &str {
    fn to_value(&self) -> Value {
        Value::Text((*self).to_string())
    }
}

impl<T: FieldValue> FieldValue for Option<T> {
    fn to_value(&self) -> Value {
        self.as_ref().map_or(Value::Null, FieldValue::to_value)
    }
}

impl<T: FieldValue> FieldValue for Vec<T> {
    fn to_value(&self) -> Value {
        Value::List(self.iter().map(FieldValue::to_value).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn f32_widens_to_its_shortest_decimal() {
        assert_eq!(0.1_f32.to_value(), Value::Float64(0.1));
        assert_eq!((-2.75_f32).to_value(), Value::Float64(-2.75));
        assert_eq!(f32::INFINITY.to_value(), Value::Float64(f64::INFINITY));
    }
}
