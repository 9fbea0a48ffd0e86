//! Declarative helpers for describing filterable types.
//!
//! ```ignore
//! sluice_core::filter_enum! {
//!     #[derive(Clone, Copy, Debug)]
//!     pub enum Status { Active, Archived }
//! }
//!
//! sluice_core::filter_entity! {
//!     #[derive(Clone, Debug)]
//!     pub struct Person as "Person" {
//!         pub name: String => FieldKind::Text,
//!         pub age: i64 => FieldKind::Int,
//!         pub status: Status => FieldKind::Enum(&Status::ENUM_MODEL),
//!     }
//! }
//! ```

// filter_entity
/// Declare a struct together with its static `EntityModel`, and implement
/// `FilterEntity` and `FieldValue` (as a nested record) for it.
#[macro_export]
macro_rules! filter_entity {
    (
        $(#[$meta:meta])*
        $vis:vis struct $entity:ident as $name:literal {
            $( $fvis:vis $field:ident : $ty:ty => $kind:expr ),* $(,)?
        }
    ) => {
        $(#[$meta])*
        $vis struct $entity {
            $( $fvis $field : $ty ),*
        }

        impl $entity {
            const __FILTER_FIELDS: &'static [$crate::model::field::FieldModel] = &[
                $( $crate::model::field::FieldModel::new(stringify!($field), $kind) ),*
            ];

            pub const MODEL_DEF: $crate::model::entity::EntityModel =
                $crate::model::entity::EntityModel::new(
                    concat!(module_path!(), "::", stringify!($entity)),
                    $name,
                    Self::__FILTER_FIELDS,
                );
        }

        impl $crate::traits::FilterEntity for $entity {
            const MODEL: &'static $crate::model::entity::EntityModel = &Self::MODEL_DEF;

            fn get_value_by_index(&self, slot: usize) -> Option<$crate::value::Value> {
                let name = Self::__FILTER_FIELDS.get(slot)?.name;
                $(
                    if name == stringify!($field) {
                        return Some($crate::traits::FieldValue::to_value(&self.$field));
                    }
                )*

                None
            }
        }

        impl $crate::traits::FieldValue for $entity {
            fn to_value(&self) -> $crate::value::Value {
                $crate::value::Value::Record(vec![
                    $( $crate::traits::FieldValue::to_value(&self.$field) ),*
                ])
            }
        }
    };
}

// filter_enum
/// Declare a fieldless enum together with its static `EnumModel`
/// (`ENUM_MODEL`) and a `FieldValue` impl producing `Value::Enum`.
#[macro_export]
macro_rules! filter_enum {
    (
        $(#[$meta:meta])*
        $vis:vis enum $name:ident {
            $( $variant:ident ),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        $vis enum $name {
            $( $variant ),+
        }

        impl $name {
            pub const ENUM_MODEL: $crate::model::enums::EnumModel =
                $crate::model::enums::EnumModel::new(
                    concat!(module_path!(), "::", stringify!($name)),
                    &[ $( stringify!($variant) ),+ ],
                );
        }

        impl $crate::traits::FieldValue for $name {
            fn to_value(&self) -> $crate::value::Value {
                let variant = match self {
                    $( Self::$variant => stringify!($variant), )+
                };

                $crate::value::Value::Enum($crate::value::ValueEnum::new(
                    Self::ENUM_MODEL.path,
                    variant,
                ))
            }
        }
    };
}
