//! Module: filter::assemble
//! Responsibility: build leaf predicates for parsed tokens and combine them,
//! OR within one field and `CombineType` across fields.
//! Does not own: path resolution, token grammar or value coercion.
//! Boundary: a field with no surviving token contributes nothing.

use crate::{
    error::FilterError,
    filter::{
        coerce::coerce_token,
        query::CombineType,
        resolve::{FilterItem, resolve_path},
        token::{Token, TokenContext, parse_token},
    },
    model::{entity::EntityModel, field::FieldKind},
    predicate::{CoercionId, CompareOp, ComparePredicate, Predicate, RangePredicate, Target},
    value::Value,
};
use tracing::debug;

/// Build the predicate for one query entry, or `None` if no token survived.
pub(crate) fn field_predicate(
    model: &'static EntityModel,
    item: &FilterItem<'_>,
) -> Result<Option<Predicate>, FilterError> {
    let resolved = resolve_path(model, item.path)?;
    let target = Target::Field(resolved.field);

    // Collections: tokens apply to a bound item, wrapped existentially.
    if let Some(item_kind) = resolved.kind.collection_item() {
        let predicate = tokens_predicate(item, &Target::Item, item_kind)?;

        return Ok(predicate.map(|predicate| Predicate::Any {
            target,
            predicate: Box::new(predicate),
        }));
    }

    tokens_predicate(item, &target, resolved.kind)
}

/// Join per-field predicates across fields.
pub(crate) fn combine_fields(fields: Vec<Predicate>, combine: CombineType) -> Option<Predicate> {
    match combine {
        CombineType::And => Predicate::fold_and(fields),
        CombineType::Or => Predicate::fold_or(fields),
    }
}

// OR over every token that produced a predicate, in input order.
fn tokens_predicate(
    item: &FilterItem<'_>,
    target: &Target,
    kind: &FieldKind,
) -> Result<Option<Predicate>, FilterError> {
    let cx = TokenContext::for_kind(kind);

    let mut built = Vec::with_capacity(item.tokens.len());
    for raw in item.tokens {
        let token = parse_token(raw, cx)?;

        match token_predicate(&token, target, kind) {
            Some(predicate) => built.push(predicate),
            None => debug!(field = item.field.name, token = %raw, "token dropped"),
        }
    }

    Ok(Predicate::fold_or(built))
}

fn token_predicate(token: &Token, target: &Target, kind: &FieldKind) -> Option<Predicate> {
    match token {
        Token::Not(inner) => token_predicate(inner, target, kind).map(Predicate::negate),
        Token::Range { lower, upper } => {
            range_predicate(target, kind, lower.as_deref(), upper.as_deref())
        }
        Token::Function { func, arg } => Some(null_guard(
            target,
            kind,
            Predicate::TextFunction {
                target: target.clone(),
                func: *func,
                value: Value::Text(arg.clone()),
            },
        )),
        Token::Literal(literal) => literal_predicate(target, kind, literal),
    }
}

// Leaf comparison for a plain value, chosen by the declared kind.
fn literal_predicate(target: &Target, kind: &FieldKind, literal: &str) -> Option<Predicate> {
    let value = coerce_token(kind, literal)?;

    let leaf = if kind.is_text() {
        Predicate::TextContains {
            target: target.clone(),
            value,
        }
    } else {
        Predicate::Compare(ComparePredicate {
            target: target.clone(),
            op: CompareOp::Eq,
            value,
            coercion: coercion_for(kind),
        })
    };

    Some(null_guard(target, kind, leaf))
}

fn range_predicate(
    target: &Target,
    kind: &FieldKind,
    lower: Option<&str>,
    upper: Option<&str>,
) -> Option<Predicate> {
    if lower.is_none() && upper.is_none() {
        debug!("range token without bounds dropped");
        return None;
    }

    // A bound that is present but fails to coerce drops the whole token.
    let lower = match lower {
        Some(raw) => Some(coerce_token(kind, raw)?),
        None => None,
    };
    let upper = match upper {
        Some(raw) => Some(coerce_token(kind, raw)?),
        None => None,
    };

    let coercion = coercion_for(kind);
    let one_sided = |op, value| {
        Predicate::Compare(ComparePredicate {
            target: target.clone(),
            op,
            value,
            coercion,
        })
    };

    // One open side degrades to a single inequality.
    let leaf = match (lower, upper) {
        (Some(lower), None) => one_sided(CompareOp::Gte, lower),
        (None, Some(upper)) => one_sided(CompareOp::Lte, upper),
        (lower, upper) => Predicate::Range(RangePredicate {
            target: target.clone(),
            lower,
            upper,
            coercion,
        }),
    };

    Some(null_guard(target, kind, leaf))
}

const fn coercion_for(kind: &FieldKind) -> CoercionId {
    match kind.non_null() {
        FieldKind::DateTime => CoercionId::DateTruncate,
        FieldKind::Decimal | FieldKind::Float64 | FieldKind::Int | FieldKind::Uint => {
            CoercionId::NumericWiden
        }
        _ => CoercionId::Strict,
    }
}

// Nullable kinds compare only when the value is present.
fn null_guard(target: &Target, kind: &FieldKind, leaf: Predicate) -> Predicate {
    if kind.is_nullable() {
        Predicate::NullGuarded {
            target: target.clone(),
            inner: Box::new(leaf),
        }
    } else {
        leaf
    }
}
