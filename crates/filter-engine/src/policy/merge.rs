//! Strategies for combining two same-named filter fields into one fragment.

use crate::error::BuildError;
use crate::field::FilterField;
use filter_model::document::Document;

/// Closed set of merge strategies, dispatched through a single `merge`.
///
/// The builder (or caller) chooses the strategy; fields never hold one.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum MergeStrategy {
    /// The right field's value replaces the left field's value.
    #[default]
    Override,
    And,
    Or,
    Xor,
    Nor,
    /// Negates the right field's fragment under the left field's name.
    Not,
}

impl MergeStrategy {
    /// Combines `left` and `right` into one fragment keyed by `left`'s name.
    pub fn merge(&self, left: &FilterField, right: &FilterField) -> Result<Document, BuildError> {
        if left.name().is_empty() {
            return Err(BuildError::EmptyName);
        }
        match self {
            MergeStrategy::Override => {
                Ok(Document::with_entry(left.name(), right.value().clone()))
            }
            MergeStrategy::And => Self::wrap(left, right, "$and"),
            MergeStrategy::Or => Self::wrap(left, right, "$or"),
            MergeStrategy::Xor => Self::wrap(left, right, "$xor"),
            MergeStrategy::Nor => Self::wrap(left, right, "$nor"),
            MergeStrategy::Not => Self::wrap(left, right, "$not"),
        }
    }

    /// `{left.name: {symbol: right-fragment}}`.
    fn wrap(
        left: &FilterField,
        right: &FilterField,
        symbol: &str,
    ) -> Result<Document, BuildError> {
        let fragment = right.fragment()?;
        Ok(Document::with_entry(
            left.name(),
            Document::with_entry(symbol, fragment),
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::MergeStrategy;
    use crate::field::FilterField;
    use filter_model::{
        core::type_kind::TypeKind, core::value::Value, document::Document, operator::Operator,
    };

    fn status(operator: Operator, value: &str, index: usize) -> FilterField {
        FilterField::new("", "status", TypeKind::String, value, operator, index)
    }

    #[test]
    fn test_override_takes_right_value() {
        let left = status(Operator::Eq, "active", 0);
        let right = status(Operator::Eq, "archived", 1);

        let doc = MergeStrategy::Override.merge(&left, &right).unwrap();
        assert_eq!(doc, Document::with_entry("status", "archived"));
    }

    #[test]
    fn test_logical_strategies_wrap_right_fragment() {
        let left = status(Operator::Eq, "active", 0);
        let right = status(Operator::Ne, "archived", 1);
        let right_fragment = right.fragment().unwrap();

        for (strategy, symbol) in [
            (MergeStrategy::And, "$and"),
            (MergeStrategy::Or, "$or"),
            (MergeStrategy::Xor, "$xor"),
            (MergeStrategy::Nor, "$nor"),
            (MergeStrategy::Not, "$not"),
        ] {
            let doc = strategy.merge(&left, &right).unwrap();
            let expected = Document::with_entry(
                "status",
                Document::with_entry(symbol, right_fragment.clone()),
            );
            assert_eq!(doc, expected, "strategy {strategy:?}");
        }
    }

    #[test]
    fn test_wrapped_fragment_keeps_right_operator_symbol() {
        let left = status(Operator::Eq, "active", 0);
        let right = status(Operator::Ne, "archived", 1);

        let doc = MergeStrategy::Not.merge(&left, &right).unwrap();
        let wrapped = doc
            .get("status")
            .and_then(Value::as_document)
            .and_then(|d| d.get("$not"))
            .and_then(Value::as_document)
            .unwrap();
        assert_eq!(
            wrapped,
            &Document::with_entry("status", Document::with_entry("$ne", "archived"))
        );
    }
}
