//! A single compiled filter fragment.

use crate::error::BuildError;
use crate::policy::merge::MergeStrategy;
use filter_model::{
    core::{type_kind::TypeKind, value::Value},
    document::Document,
    operator::Operator,
};

/// One leaf of the scanned record, compiled into a filter fragment.
///
/// Created by the scanner during a single scan pass; mutated only through
/// [`merge`](FilterField::merge) and [`build`](FilterField::build); never
/// shared across scans.
#[derive(Debug, Clone, PartialEq)]
pub struct FilterField {
    collection: String,
    name: String,
    kind: TypeKind,
    value: Value,
    operator: Operator,
    index: usize,
    output: Option<Document>,
}

impl FilterField {
    pub fn new(
        collection: impl Into<String>,
        name: impl Into<String>,
        kind: TypeKind,
        value: impl Into<Value>,
        operator: Operator,
        index: usize,
    ) -> Self {
        Self {
            collection: collection.into(),
            name: name.into(),
            kind,
            value: value.into(),
            operator,
            index,
            output: None,
        }
    }

    /// Relation target collection; empty means the field is local.
    pub fn collection(&self) -> &str {
        &self.collection
    }

    /// Dotted lookup path used as the fragment key.
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn kind(&self) -> TypeKind {
        self.kind
    }

    pub fn value(&self) -> &Value {
        &self.value
    }

    pub fn operator(&self) -> Operator {
        self.operator
    }

    /// Ordinal position assigned during the scan.
    pub fn index(&self) -> usize {
        self.index
    }

    pub(crate) fn set_index(&mut self, index: usize) {
        self.index = index;
    }

    /// The compiled fragment, populated by [`build`](FilterField::build).
    pub fn output(&self) -> Option<&Document> {
        self.output.as_ref()
    }

    /// The field's own fragment: implicit equality for `eq`, an operator
    /// document for everything else.
    pub fn fragment(&self) -> Result<Document, BuildError> {
        if self.name.is_empty() {
            return Err(BuildError::EmptyName);
        }
        let entry: Value = match self.operator.symbol() {
            None => self.value.clone(),
            Some(symbol) => Document::with_entry(symbol, self.value.clone()).into(),
        };
        Ok(Document::with_entry(self.name.as_str(), entry))
    }

    /// Populates `output` from [`fragment`](FilterField::fragment). A
    /// fragment installed earlier by a merge is kept as-is.
    pub fn build(&mut self) -> Result<&mut Self, BuildError> {
        if self.output.is_none() {
            self.output = Some(self.fragment()?);
        }
        Ok(self)
    }

    /// Absorbs another same-named field's contribution using the supplied
    /// merge strategy. The strategy is injected at the call boundary; the
    /// field holds no policy reference.
    pub fn merge(
        &mut self,
        other: &FilterField,
        strategy: MergeStrategy,
    ) -> Result<&mut Self, BuildError> {
        self.output = Some(strategy.merge(self, other)?);
        if strategy == MergeStrategy::Override {
            self.value = other.value.clone();
        }
        Ok(self)
    }
}
