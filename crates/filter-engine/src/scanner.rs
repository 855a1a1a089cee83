//! Recursive descriptor walk producing compiled filter fields.

use crate::describe::{Describe, FieldMeta, FieldValue};
use crate::error::ScanError;
use crate::field::FilterField;
use crate::validate::{FieldProbe, Validate, default_validators};
use filter_model::core::{type_kind::TypeKind, value::Value};
use filter_model::operator::OperatorRegistry;
use tracing::debug;

/// Walks a record's descriptor tree, resolves annotations, runs the
/// validators and emits a flat ordered list of filter fields.
///
/// All errors are terminal for the scan: no partial output is returned.
pub struct Scanner {
    registry: OperatorRegistry,
    validators: Vec<Box<dyn Validate>>,
}

impl Default for Scanner {
    fn default() -> Self {
        Self::new(OperatorRegistry::new(), default_validators())
    }
}

impl Scanner {
    pub fn new(registry: OperatorRegistry, validators: Vec<Box<dyn Validate>>) -> Self {
        Self {
            registry,
            validators,
        }
    }

    pub fn registry(&self) -> &OperatorRegistry {
        &self.registry
    }

    /// Mutable registry access for extending the catalogue before
    /// scanning begins. The registry must not change once scans run.
    pub fn registry_mut(&mut self) -> &mut OperatorRegistry {
        &mut self.registry
    }

    /// Convenience wrapper over [`scan`](Scanner::scan) starting at
    /// ordinal zero.
    pub fn scan_record(
        &self,
        record: &dyn Describe,
        collection: &str,
    ) -> Result<Vec<FilterField>, ScanError> {
        self.scan(&FieldValue::Record(record.describe()), collection, None, 0)
    }

    /// Scans `value` into an ordered list of filter fields.
    ///
    /// `collection` names the scanned record's own collection, for
    /// diagnostics only: a field carries a collection when its relation
    /// annotation targets another one, and stays local (empty) otherwise.
    /// `parent` prefixes nested lookup names; `start_index` seeds the
    /// ordinal counter. Absent optionals are skipped and consume no
    /// ordinal.
    pub fn scan(
        &self,
        value: &FieldValue,
        collection: &str,
        parent: Option<&FieldMeta>,
        start_index: usize,
    ) -> Result<Vec<FilterField>, ScanError> {
        let fields = match value {
            FieldValue::Record(fields) => fields,
            FieldValue::Leaf { .. } | FieldValue::Absent => return Err(ScanError::NotARecord),
        };

        let mut scanned = Vec::with_capacity(fields.len());
        let mut index = start_index;
        for field in fields {
            match &field.value {
                FieldValue::Absent => continue,
                FieldValue::Record(_) => {
                    let nested = self.scan(&field.value, collection, Some(&field.meta), index)?;
                    index += nested.len();
                    scanned.extend(nested);
                }
                FieldValue::Leaf { kind, value } => {
                    let made =
                        self.make_field(&field.meta, *kind, value.clone(), parent, index)?;
                    scanned.push(made);
                    index += 1;
                }
            }
        }

        if parent.is_none() {
            debug!(collection, fields = scanned.len(), "scanned record");
        }
        Ok(scanned)
    }

    /// Materializes one leaf: composes the dotted lookup name, resolves
    /// the operator and relation annotations and runs every validator.
    fn make_field(
        &self,
        meta: &FieldMeta,
        kind: TypeKind,
        value: Value,
        parent: Option<&FieldMeta>,
        index: usize,
    ) -> Result<FilterField, ScanError> {
        let name = match parent {
            Some(parent) => format!("{}.{}", parent.lookup_or_ident(), meta.lookup_or_ident()),
            None => meta.lookup_or_ident().to_string(),
        };

        // A missing annotation behaves like an empty one, which no
        // catalogue entry can match.
        let op_name = meta.operator.unwrap_or_default();
        let Some(operator) = self.registry.get(op_name) else {
            return Err(ScanError::UnsupportedOperator(op_name.to_string()));
        };

        let probe = FieldProbe {
            meta,
            kind,
            name: &name,
        };
        for validator in &self.validators {
            validator.validate(&probe, &self.registry)?;
        }

        // Only a relation annotation puts a field in another collection.
        let field_collection = meta.relation.unwrap_or_default();
        Ok(FilterField::new(
            field_collection,
            name,
            kind,
            value,
            operator,
            index,
        ))
    }
}
