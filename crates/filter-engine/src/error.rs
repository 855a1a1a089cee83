use filter_model::core::type_kind::TypeKind;
use thiserror::Error;

/// Errors raised while scanning a record's descriptor tree.
#[derive(Debug, Error)]
pub enum ScanError {
    /// The scanned value was not a structured record.
    #[error("filter input must be a structured record")]
    NotARecord,

    /// The operator annotation is missing or names an operator absent
    /// from the registry.
    #[error("operator {0} is not supported")]
    UnsupportedOperator(String),

    /// A validator rejected a candidate field.
    #[error(transparent)]
    Validation(#[from] ValidationError),
}

/// Errors raised by pre-flight field validators.
#[derive(Debug, Error)]
pub enum ValidationError {
    /// The field carries no operator annotation.
    #[error("field {field} has no operator annotation")]
    MissingOperator { field: String },

    /// The annotated operator is not in the registry.
    #[error("operator {operator} on field {field} is not supported")]
    UnknownOperator { field: String, operator: String },

    /// The annotated operator cannot be applied to the field's runtime type.
    #[error("operator {operator} is not compatible with field {field} of type {kind}")]
    IncompatibleOperator {
        field: String,
        operator: String,
        kind: TypeKind,
    },
}

/// Errors raised while building a single field's fragment.
#[derive(Debug, Error)]
pub enum BuildError {
    /// A field reached build with an empty lookup name.
    #[error("filter field has an empty lookup name")]
    EmptyName,
}

/// Errors raised by the filter builder's state machine.
#[derive(Debug, Error)]
pub enum BuilderError {
    /// `output()` was called before `build()`.
    #[error("filter output requested before build")]
    NotBuilt,
}

/// Umbrella error for the whole compilation pipeline.
#[derive(Debug, Error)]
pub enum FilterError {
    #[error(transparent)]
    Scan(#[from] ScanError),

    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error(transparent)]
    Build(#[from] BuildError),

    #[error(transparent)]
    Builder(#[from] BuilderError),
}
