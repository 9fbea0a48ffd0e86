//! Shared fixtures for unit tests.

use crate::{
    model::{
        enums::{ClosedEnumModel, ClosedKey, ClosedMember},
        field::FieldKind,
    },
    traits::FieldValue,
    value::Value,
};
use chrono::{DateTime, FixedOffset, NaiveDate, NaiveDateTime};
use rust_decimal::Decimal;
use uuid::Uuid;

crate::filter_enum! {
    #[derive(Clone, Copy, Debug, Eq, PartialEq)]
    pub(crate) enum Status {
        Active,
        Archived,
        Pending,
    }
}

///
/// Color
/// Closed enumeration keyed by an integer.
///

#[derive(Clone, Copy, Debug)]
pub(crate) struct Color(pub(crate) &'static str);

impl Color {
    pub(crate) const MODEL: ClosedEnumModel = ClosedEnumModel::new(
        "sluice_core::test_support::Color",
        &FieldKind::Int,
        &[
            ClosedMember::new("Red", ClosedKey::Int(1)),
            ClosedMember::new("Green", ClosedKey::Int(2)),
            ClosedMember::new("Blue", ClosedKey::Int(3)),
        ],
    );
}

impl FieldValue for Color {
    fn to_value(&self) -> Value {
        Self::MODEL.value_of(self.0).unwrap_or(Value::Null)
    }
}

///
/// Tier
/// Closed enumeration keyed by a short text code.
///

#[derive(Clone, Copy, Debug)]
pub(crate) struct Tier(pub(crate) &'static str);

impl Tier {
    pub(crate) const MODEL: ClosedEnumModel = ClosedEnumModel::new(
        "sluice_core::test_support::Tier",
        &FieldKind::Text,
        &[
            ClosedMember::new("Bronze", ClosedKey::Text("b")),
            ClosedMember::new("Silver", ClosedKey::Text("s")),
            ClosedMember::new("Gold", ClosedKey::Text("g")),
        ],
    );
}

impl FieldValue for Tier {
    fn to_value(&self) -> Value {
        Self::MODEL.value_of(self.0).unwrap_or(Value::Null)
    }
}

crate::filter_entity! {
    #[derive(Clone, Debug)]
    pub(crate) struct Address as "Address" {
        pub(crate) city: String => FieldKind::Text,
        pub(crate) zip: Option<u32> => FieldKind::Nullable(&FieldKind::Uint),
    }
}

crate::filter_entity! {
    #[derive(Clone, Debug)]
    pub(crate) struct Person as "Person" {
        pub(crate) name: String => FieldKind::Text,
        pub(crate) nickname: Option<String> => FieldKind::Nullable(&FieldKind::Text),
        pub(crate) age: i64 => FieldKind::Int,
        pub(crate) score: Option<i64> => FieldKind::Nullable(&FieldKind::Int),
        pub(crate) balance: Decimal => FieldKind::Decimal,
        pub(crate) active: bool => FieldKind::Bool,
        pub(crate) id: Uuid => FieldKind::Guid,
        pub(crate) created: NaiveDateTime => FieldKind::DateTime,
        pub(crate) birthday: NaiveDate => FieldKind::Date,
        pub(crate) status: Status => FieldKind::Enum(&Status::ENUM_MODEL),
        pub(crate) color: Color => FieldKind::Closed(&Color::MODEL),
        pub(crate) tier: Tier => FieldKind::Closed(&Tier::MODEL),
        pub(crate) ratio: f32 => FieldKind::Float64,
        pub(crate) seen: DateTime<FixedOffset> => FieldKind::DateTimeOffset,
        pub(crate) expires: Option<NaiveDate> => FieldKind::Nullable(&FieldKind::Date),
        pub(crate) tags: Vec<String> => FieldKind::List(&FieldKind::Text),
        pub(crate) ratings: Vec<i64> => FieldKind::List(&FieldKind::Int),
        pub(crate) address: Address => FieldKind::Record(&Address::MODEL_DEF),
    }
}

impl Person {
    /// A person with every field populated; tests override what they need.
    pub(crate) fn sample(name: &str, age: i64) -> Self {
        let birthday = NaiveDate::from_ymd_opt(1990, 5, 17).expect("valid date");

        Self {
            name: name.to_string(),
            nickname: None,
            age,
            score: None,
            balance: Decimal::new(1050, 2),
            active: true,
            id: Uuid::nil(),
            created: birthday.and_hms_opt(8, 30, 0).expect("valid time"),
            birthday,
            status: Status::Active,
            color: Color("Red"),
            tier: Tier("Silver"),
            ratio: 0.1,
            seen: DateTime::parse_from_rfc3339("2024-03-01T12:00:00+02:00")
                .expect("valid timestamp"),
            expires: None,
            tags: Vec::new(),
            ratings: Vec::new(),
            address: Address {
                city: "Oslo".to_string(),
                zip: Some(150),
            },
        }
    }
}
