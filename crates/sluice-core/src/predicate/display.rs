//! Module: predicate::display
//! Responsibility: deterministic text rendering of predicate trees for logs.
//! Does not own: parsing; the rendering is not read back.
//! Boundary: output is stable for a given tree.

use crate::predicate::{CoercionId, ComparePredicate, Predicate, RangePredicate, Target};
use std::fmt::{self, Display};

// e.g. `(age >= 18 AND lower(name).startsWith(lower("a")))`

impl Display for Target {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Field(field) => f.write_str(&field.path),
            Self::Item => f.write_str("it"),
        }
    }
}

impl Display for Predicate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::And(children) => write_joined(f, children, " AND "),
            Self::Or(children) => write_joined(f, children, " OR "),
            Self::Not(inner) => write!(f, "NOT {inner}"),
            Self::Any { target, predicate } => write!(f, "{target}.any(it => {predicate})"),
            Self::NullGuarded { target, inner } => write!(f, "({target} != null AND {inner})"),
            Self::Compare(cmp) => write_compare(f, cmp),
            Self::Range(range) => write_range(f, range),
            Self::TextContains { target, value } => write!(f, "{target}.contains({value})"),
            Self::TextFunction {
                target,
                func,
                value,
            } => write!(f, "lower({target}).{}(lower({value}))", func.name()),
        }
    }
}

fn write_joined(f: &mut fmt::Formatter<'_>, children: &[Predicate], sep: &str) -> fmt::Result {
    f.write_str("(")?;
    for (i, child) in children.iter().enumerate() {
        if i > 0 {
            f.write_str(sep)?;
        }
        write!(f, "{child}")?;
    }
    f.write_str(")")
}

fn write_compare(f: &mut fmt::Formatter<'_>, cmp: &ComparePredicate) -> fmt::Result {
    if cmp.coercion == CoercionId::DateTruncate {
        return write!(
            f,
            "date({}) {} date({})",
            cmp.target,
            cmp.op.symbol(),
            cmp.value
        );
    }

    write!(f, "{} {} {}", cmp.target, cmp.op.symbol(), cmp.value)
}

fn write_range(f: &mut fmt::Formatter<'_>, range: &RangePredicate) -> fmt::Result {
    let target = if range.coercion == CoercionId::DateTruncate {
        format!("date({})", range.target)
    } else {
        range.target.to_string()
    };

    match (&range.lower, &range.upper) {
        (Some(lower), Some(upper)) => write!(f, "({target} >= {lower} AND {target} <= {upper})"),
        (Some(lower), None) => write!(f, "{target} >= {lower}"),
        (None, Some(upper)) => write!(f, "{target} <= {upper}"),
        (None, None) => f.write_str("true"),
    }
}
