use crate::model::{
    entity::EntityModel,
    enums::{ClosedEnumModel, EnumModel},
};
use std::fmt;

///
/// FieldModel
/// Runtime field metadata used by path resolution and coercion.
///

#[derive(Debug)]
pub struct FieldModel {
    /// Field name as matched (case-insensitively) against query paths.
    pub name: &'static str,
    /// Declared kind of the field.
    pub kind: FieldKind,
}

impl FieldModel {
    #[must_use]
    pub const fn new(name: &'static str, kind: FieldKind) -> Self {
        Self { name, kind }
    }
}

///
/// FieldKind
///
/// Closed tag set the compiler dispatches on. Each kind selects one coercion
/// strategy and one comparison builder; there is no per-call inspection of
/// Rust types.
///

#[derive(Clone, Copy, Debug)]
pub enum FieldKind {
    // Scalar primitives
    Bool,
    /// Date-only calendar value.
    Date,
    /// Naive date-time; equality compares the date component only.
    DateTime,
    /// Date-time carrying a fixed UTC offset.
    DateTimeOffset,
    Decimal,
    Float64,
    Guid,
    Int,
    Text,
    Uint,

    // Enumerations
    Enum(&'static EnumModel),
    Closed(&'static ClosedEnumModel),

    // Wrappers
    Nullable(&'static Self),
    List(&'static Self),
    Record(&'static EntityModel),

    /// Marker for fields that are not filterable.
    Unsupported,
}

impl FieldKind {
    /// Strip every `Nullable` wrapper.
    #[must_use]
    pub const fn non_null(&self) -> &Self {
        match self {
            Self::Nullable(inner) => inner.non_null(),
            other => other,
        }
    }

    #[must_use]
    pub const fn is_nullable(&self) -> bool {
        matches!(self, Self::Nullable(_))
    }

    #[must_use]
    pub const fn is_text(&self) -> bool {
        matches!(self.non_null(), Self::Text)
    }

    #[must_use]
    pub const fn is_temporal(&self) -> bool {
        matches!(
            self.non_null(),
            Self::Date | Self::DateTime | Self::DateTimeOffset
        )
    }

    #[must_use]
    pub const fn is_numeric(&self) -> bool {
        matches!(
            self.non_null(),
            Self::Decimal | Self::Float64 | Self::Int | Self::Uint
        )
    }

    /// Kinds that accept `lower&upper` range tokens.
    #[must_use]
    pub const fn supports_range(&self) -> bool {
        self.is_temporal() || self.is_numeric()
    }

    /// Item kind when this field is a collection.
    ///
    /// Text is never a collection here even though it is a sequence of chars.
    #[must_use]
    pub const fn collection_item(&self) -> Option<&Self> {
        match self.non_null() {
            Self::List(item) => Some(*item),
            _ => None,
        }
    }

    /// Nested record model, when the field can be traversed by a dotted path.
    #[must_use]
    pub const fn record(&self) -> Option<&'static EntityModel> {
        match self.non_null() {
            Self::Record(model) => Some(*model),
            _ => None,
        }
    }
}

impl fmt::Display for FieldKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Bool => f.write_str("Bool"),
            Self::Date => f.write_str("Date"),
            Self::DateTime => f.write_str("DateTime"),
            Self::DateTimeOffset => f.write_str("DateTimeOffset"),
            Self::Decimal => f.write_str("Decimal"),
            Self::Float64 => f.write_str("Float64"),
            Self::Guid => f.write_str("Guid"),
            Self::Int => f.write_str("Int"),
            Self::Text => f.write_str("Text"),
            Self::Uint => f.write_str("Uint"),
            Self::Enum(model) => write!(f, "Enum<{}>", model.path),
            Self::Closed(model) => write!(f, "Closed<{}>", model.path),
            Self::Nullable(inner) => write!(f, "Nullable<{inner}>"),
            Self::List(inner) => write!(f, "List<{inner}>"),
            Self::Record(model) => write!(f, "Record<{}>", model.path),
            Self::Unsupported => f.write_str("Unsupported"),
        }
    }
}
