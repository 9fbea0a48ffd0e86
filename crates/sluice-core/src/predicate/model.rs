use crate::value::Value;
use serde::Serialize;

///
/// CoercionId
///
/// Identifier for an explicit comparison coercion policy.
///
/// Coercions express *how* two values are compared; which coercion applies
/// to a leaf is decided once, from the field's declared kind, when the leaf
/// is built.
///

#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, Serialize)]
pub enum CoercionId {
    Strict,
    NumericWiden,
    /// Compare the date component of temporal values only.
    DateTruncate,
}

///
/// CompareOp
///

#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, Serialize)]
pub enum CompareOp {
    Eq,
    Gte,
    Lte,
}

impl CompareOp {
    #[must_use]
    pub const fn symbol(self) -> &'static str {
        match self {
            Self::Eq => "=",
            Self::Gte => ">=",
            Self::Lte => "<=",
        }
    }
}

///
/// TextFunc
///
/// Case-insensitive string functions accepted as `name(arg)` tokens.
///

#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, Serialize)]
pub enum TextFunc {
    StartsWith,
    EndsWith,
    Contains,
    Equals,
}

impl TextFunc {
    pub const ALL: [Self; 4] = [Self::StartsWith, Self::EndsWith, Self::Contains, Self::Equals];

    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::StartsWith => "startsWith",
            Self::EndsWith => "endsWith",
            Self::Contains => "contains",
            Self::Equals => "equals",
        }
    }

    /// Case-insensitive lookup by function name.
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|func| func.name().eq_ignore_ascii_case(name))
    }
}

///
/// FieldRef
///
/// A resolved field path: the slot chain used for reads and the declared
/// field names used for rendering and translation.
///

#[derive(Clone, Debug, Eq, Hash, PartialEq, Serialize)]
pub struct FieldRef {
    pub path: String,
    pub slots: Vec<usize>,
}

impl FieldRef {
    #[must_use]
    pub const fn new(path: String, slots: Vec<usize>) -> Self {
        Self { path, slots }
    }
}

///
/// Target
///
/// What a leaf reads: a field reached from the entity, or the item bound by
/// the nearest enclosing `Any`.
///

#[derive(Clone, Debug, Eq, Hash, PartialEq, Serialize)]
pub enum Target {
    Field(FieldRef),
    Item,
}

///
/// ComparePredicate
///

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct ComparePredicate {
    pub target: Target,
    pub op: CompareOp,
    pub value: Value,
    pub coercion: CoercionId,
}

///
/// RangePredicate
///
/// Inclusive range. The assembler emits it with both bounds; a one-sided
/// range is built as a `Gte` / `Lte` comparison instead.
///

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct RangePredicate {
    pub target: Target,
    pub lower: Option<Value>,
    pub upper: Option<Value>,
    pub coercion: CoercionId,
}

///
/// Predicate
///
/// Boolean test over one entity type, kept as a tree so evaluators and query
/// translators can inspect and rewrite it.
///

#[derive(Clone, Debug, PartialEq, Serialize)]
pub enum Predicate {
    And(Vec<Self>),
    Or(Vec<Self>),
    Not(Box<Self>),

    /// At least one item of the collection at `target` satisfies `predicate`,
    /// with `Target::Item` bound to that item.
    Any {
        target: Target,
        predicate: Box<Self>,
    },

    /// `target` is not null and `inner` holds.
    NullGuarded {
        target: Target,
        inner: Box<Self>,
    },

    Compare(ComparePredicate),
    Range(RangePredicate),

    /// Case-sensitive substring match.
    TextContains {
        target: Target,
        value: Value,
    },

    /// Case-insensitive string function.
    TextFunction {
        target: Target,
        func: TextFunc,
        value: Value,
    },
}

impl Predicate {
    #[must_use]
    pub fn negate(self) -> Self {
        Self::Not(Box::new(self))
    }

    /// OR of all predicates in input order. A single predicate is returned
    /// as-is and empty input yields `None`.
    #[must_use]
    pub fn fold_or(predicates: impl IntoIterator<Item = Self>) -> Option<Self> {
        Self::fold(predicates, Self::Or)
    }

    /// AND counterpart of `fold_or`.
    #[must_use]
    pub fn fold_and(predicates: impl IntoIterator<Item = Self>) -> Option<Self> {
        Self::fold(predicates, Self::And)
    }

    fn fold(
        predicates: impl IntoIterator<Item = Self>,
        combine: fn(Vec<Self>) -> Self,
    ) -> Option<Self> {
        let mut predicates = predicates.into_iter().collect::<Vec<_>>();

        match predicates.len() {
            0 => None,
            1 => predicates.pop(),
            _ => Some(combine(predicates)),
        }
    }

    /// Field paths referenced anywhere in the tree, in first-appearance order.
    #[must_use]
    pub fn fields(&self) -> Vec<&FieldRef> {
        let mut out = Vec::new();
        self.collect_fields(&mut out);

        out
    }

    fn collect_fields<'a>(&'a self, out: &mut Vec<&'a FieldRef>) {
        match self {
            Self::And(children) | Self::Or(children) => {
                for child in children {
                    child.collect_fields(out);
                }
            }
            Self::Not(inner) => inner.collect_fields(out),
            Self::Any { target, predicate } => {
                push_field(out, target);
                predicate.collect_fields(out);
            }
            Self::NullGuarded { target, inner } => {
                push_field(out, target);
                inner.collect_fields(out);
            }
            Self::Compare(cmp) => push_field(out, &cmp.target),
            Self::Range(range) => push_field(out, &range.target),
            Self::TextContains { target, .. } | Self::TextFunction { target, .. } => {
                push_field(out, target);
            }
        }
    }
}

fn push_field<'a>(out: &mut Vec<&'a FieldRef>, target: &'a Target) {
    if let Target::Field(field) = target {
        if !out.contains(&field) {
            out.push(field);
        }
    }
}
