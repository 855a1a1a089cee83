//! Pre-flight checks on candidate fields before they are materialized.

use crate::describe::FieldMeta;
use crate::error::ValidationError;
use filter_model::{core::type_kind::TypeKind, operator::OperatorRegistry};

/// A candidate field as seen by validators: annotation metadata plus the
/// composed lookup name and resolved runtime type kind.
#[derive(Debug, Clone, Copy)]
pub struct FieldProbe<'a> {
    pub meta: &'a FieldMeta,
    pub kind: TypeKind,
    pub name: &'a str,
}

/// One pre-flight rule. Validators run in order and the first failure
/// aborts the scan.
pub trait Validate: Send + Sync {
    fn validate(
        &self,
        probe: &FieldProbe<'_>,
        registry: &OperatorRegistry,
    ) -> Result<(), ValidationError>;
}

/// Rejects fields whose operator annotation is missing or unknown.
#[derive(Debug, Default)]
pub struct OperatorPresence;

impl Validate for OperatorPresence {
    fn validate(
        &self,
        probe: &FieldProbe<'_>,
        registry: &OperatorRegistry,
    ) -> Result<(), ValidationError> {
        let Some(operator) = probe.meta.operator else {
            return Err(ValidationError::MissingOperator {
                field: probe.name.to_string(),
            });
        };
        if registry.get(operator).is_none() {
            return Err(ValidationError::UnknownOperator {
                field: probe.name.to_string(),
                operator: operator.to_string(),
            });
        }
        Ok(())
    }
}

/// Rejects fields whose operator cannot be applied to the field's
/// runtime type. Presence is [`OperatorPresence`]'s concern; an absent or
/// unknown annotation passes here.
#[derive(Debug, Default)]
pub struct OperatorCompatibility;

impl Validate for OperatorCompatibility {
    fn validate(
        &self,
        probe: &FieldProbe<'_>,
        registry: &OperatorRegistry,
    ) -> Result<(), ValidationError> {
        let Some(name) = probe.meta.operator else {
            return Ok(());
        };
        let Some(operator) = registry.get(name) else {
            return Ok(());
        };
        if !operator.is_compatible(probe.kind) {
            return Err(ValidationError::IncompatibleOperator {
                field: probe.name.to_string(),
                operator: name.to_string(),
                kind: probe.kind,
            });
        }
        Ok(())
    }
}

/// The stock validator stack, in order.
pub fn default_validators() -> Vec<Box<dyn Validate>> {
    vec![
        Box::new(OperatorPresence),
        Box::new(OperatorCompatibility),
    ]
}

#[cfg(test)]
mod tests {
    use super::{FieldProbe, OperatorCompatibility, OperatorPresence, Validate};
    use crate::describe::FieldMeta;
    use crate::error::ValidationError;
    use filter_model::{core::type_kind::TypeKind, operator::OperatorRegistry};

    fn meta(operator: Option<&'static str>) -> FieldMeta {
        let mut meta = FieldMeta::new("age");
        meta.operator = operator;
        meta
    }

    #[test]
    fn test_presence_rejects_missing_annotation() {
        let registry = OperatorRegistry::new();
        let meta = meta(None);
        let probe = FieldProbe {
            meta: &meta,
            kind: TypeKind::Int64,
            name: "age",
        };

        let err = OperatorPresence.validate(&probe, &registry).unwrap_err();
        assert!(matches!(err, ValidationError::MissingOperator { field } if field == "age"));
    }

    #[test]
    fn test_presence_rejects_unknown_operator() {
        let registry = OperatorRegistry::new();
        let meta = meta(Some("between"));
        let probe = FieldProbe {
            meta: &meta,
            kind: TypeKind::Int64,
            name: "age",
        };

        let err = OperatorPresence.validate(&probe, &registry).unwrap_err();
        assert!(
            matches!(err, ValidationError::UnknownOperator { operator, .. } if operator == "between")
        );
    }

    #[test]
    fn test_compatibility_rejects_lt_on_string() {
        let registry = OperatorRegistry::new();
        let meta = meta(Some("lt"));
        let probe = FieldProbe {
            meta: &meta,
            kind: TypeKind::String,
            name: "name",
        };

        let err = OperatorCompatibility
            .validate(&probe, &registry)
            .unwrap_err();
        assert!(matches!(
            err,
            ValidationError::IncompatibleOperator {
                kind: TypeKind::String,
                ..
            }
        ));
    }

    #[test]
    fn test_compatible_field_passes_both_validators() {
        let registry = OperatorRegistry::new();
        let meta = meta(Some("gte"));
        let probe = FieldProbe {
            meta: &meta,
            kind: TypeKind::UInt32,
            name: "age",
        };

        assert!(OperatorPresence.validate(&probe, &registry).is_ok());
        assert!(OperatorCompatibility.validate(&probe, &registry).is_ok());
    }
}
