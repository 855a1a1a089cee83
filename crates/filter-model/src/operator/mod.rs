//! Comparison operator vocabulary and its type-compatibility rules.

pub mod registry;

pub use registry::OperatorRegistry;

use crate::core::type_kind::TypeKind;
use serde::Serialize;
use std::fmt;

/// A named comparison semantics with a type-compatibility predicate.
///
/// The set is closed and fixed by the filter-document vocabulary; new
/// aliases can still be registered through the
/// [`OperatorRegistry`](registry::OperatorRegistry).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Operator {
    Eq,
    Ne,
    Lt,
    Lte,
    Gt,
    Gte,
    Regex,
    In,
    Nin,
}

impl Operator {
    pub const ALL: [Operator; 9] = [
        Operator::Eq,
        Operator::Ne,
        Operator::Lt,
        Operator::Lte,
        Operator::Gt,
        Operator::Gte,
        Operator::Regex,
        Operator::In,
        Operator::Nin,
    ];

    /// The external name used in annotations and the registry.
    pub fn external_name(&self) -> &'static str {
        match self {
            Operator::Eq => "eq",
            Operator::Ne => "ne",
            Operator::Lt => "lt",
            Operator::Lte => "lte",
            Operator::Gt => "gt",
            Operator::Gte => "gte",
            Operator::Regex => "regex",
            Operator::In => "in",
            Operator::Nin => "nin",
        }
    }

    /// The document-query symbol. `Eq` has none: equality is expressed
    /// implicitly as `{name: value}`.
    pub fn symbol(&self) -> Option<&'static str> {
        match self {
            Operator::Eq => None,
            Operator::Ne => Some("$ne"),
            Operator::Lt => Some("$lt"),
            Operator::Lte => Some("$lte"),
            Operator::Gt => Some("$gt"),
            Operator::Gte => Some("$gte"),
            Operator::Regex => Some("$regex"),
            Operator::In => Some("$in"),
            Operator::Nin => Some("$nin"),
        }
    }

    /// Whether the operator can be applied to a field of `kind`.
    ///
    /// Pure and total over the closed kind set.
    pub fn is_compatible(&self, kind: TypeKind) -> bool {
        match self {
            Operator::Eq | Operator::Ne => {
                kind.is_numeric()
                    || matches!(
                        kind,
                        TypeKind::String | TypeKind::Bool | TypeKind::Sequence | TypeKind::Array
                    )
            }
            Operator::Lt | Operator::Lte | Operator::Gt | Operator::Gte => kind.is_numeric(),
            Operator::Regex => kind == TypeKind::String,
            Operator::In | Operator::Nin => {
                matches!(kind, TypeKind::Sequence | TypeKind::Array | TypeKind::String)
            }
        }
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.external_name())
    }
}
