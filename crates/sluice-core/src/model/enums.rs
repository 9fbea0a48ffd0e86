//! Enumeration models.
//!
//! Two shapes are supported: plain enumerations whose members are matched by
//! exact name, and the closed-enumeration pattern, where a fixed set of named
//! singletons is keyed by an underlying comparable value.

use crate::{
    model::field::FieldKind,
    value::{ClosedValue, Value},
};
use serde::Serialize;

///
/// EnumModel
///

#[derive(Debug)]
pub struct EnumModel {
    pub path: &'static str,
    pub variants: &'static [&'static str],
}

impl EnumModel {
    #[must_use]
    pub const fn new(path: &'static str, variants: &'static [&'static str]) -> Self {
        Self { path, variants }
    }

    /// Exact, case-sensitive member lookup.
    #[must_use]
    pub fn variant(&self, name: &str) -> Option<&'static str> {
        self.variants.iter().copied().find(|variant| *variant == name)
    }
}

///
/// ClosedKey
///
/// Underlying value of one closed-enumeration member.
///

#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, Serialize)]
pub enum ClosedKey {
    Int(i64),
    Text(&'static str),
}

///
/// ClosedMember
///

#[derive(Debug)]
pub struct ClosedMember {
    pub name: &'static str,
    pub key: ClosedKey,
}

impl ClosedMember {
    #[must_use]
    pub const fn new(name: &'static str, key: ClosedKey) -> Self {
        Self { name, key }
    }
}

///
/// ClosedEnumModel
///
/// A closed set of named singleton instances backed by an underlying value.
/// `key_kind` is the declared kind of that underlying value (`Int` or `Text`).
///

#[derive(Debug)]
pub struct ClosedEnumModel {
    pub path: &'static str,
    pub key_kind: &'static FieldKind,
    pub members: &'static [ClosedMember],
}

impl ClosedEnumModel {
    #[must_use]
    pub const fn new(
        path: &'static str,
        key_kind: &'static FieldKind,
        members: &'static [ClosedMember],
    ) -> Self {
        Self {
            path,
            key_kind,
            members,
        }
    }

    #[must_use]
    pub fn member(&self, name: &str) -> Option<&'static ClosedMember> {
        self.members.iter().find(|member| member.name == name)
    }

    /// Build the runtime value for a member, by member name.
    #[must_use]
    pub fn value_of(&self, name: &str) -> Option<Value> {
        self.member(name)
            .map(|member| Value::Closed(ClosedValue::new(self.path, member.name, member.key)))
    }
}
