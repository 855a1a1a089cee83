//! Descriptor capability replacing runtime reflection: a record describes
//! its own fields, annotations and values as an ordered tree.
//!
//! Implementations are normally generated with
//! [`describe_record!`](crate::describe_record), which resolves the three
//! annotation keys (lookup, operator, relation) at compile time.

use filter_model::core::{type_kind::TypeKind, value::Value};

/// Per-field annotation metadata.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldMeta {
    /// The declared field identifier.
    pub ident: &'static str,
    /// Target field name or dotted path in the filter document.
    pub lookup: Option<&'static str>,
    /// External name of the comparison operator.
    pub operator: Option<&'static str>,
    /// Target collection for cross-collection fields.
    pub relation: Option<&'static str>,
}

impl FieldMeta {
    pub fn new(ident: &'static str) -> Self {
        Self {
            ident,
            lookup: None,
            operator: None,
            relation: None,
        }
    }

    /// The lookup annotation, falling back to the declared identifier.
    pub fn lookup_or_ident(&self) -> &'static str {
        self.lookup.unwrap_or(self.ident)
    }
}

/// The value side of a field descriptor.
#[derive(Debug, Clone, PartialEq)]
pub enum FieldValue {
    /// Terminal scalar or sequence.
    Leaf { kind: TypeKind, value: Value },
    /// Nested structured record.
    Record(Vec<Field>),
    /// An optional field without a value. The scanner skips these.
    Absent,
}

/// One described field: annotation metadata plus its runtime value.
#[derive(Debug, Clone, PartialEq)]
pub struct Field {
    pub meta: FieldMeta,
    pub value: FieldValue,
}

/// A record that can describe its own shape, in declaration order.
pub trait Describe {
    fn describe(&self) -> Vec<Field>;
}

/// Conversion of one field's runtime value into a descriptor value.
///
/// Implemented for every supported scalar width, sequences, fixed arrays
/// and `Option` (one level of optional indirection); the
/// `describe_record!` macro generates the record impl.
pub trait ToFieldValue {
    fn to_field_value(&self) -> FieldValue;
}

macro_rules! leaf_to_field_value {
    ($($ty:ty => $kind:expr),* $(,)?) => {
        $(
            impl ToFieldValue for $ty {
                fn to_field_value(&self) -> FieldValue {
                    FieldValue::Leaf {
                        kind: $kind,
                        value: Value::from(self.clone()),
                    }
                }
            }
        )*
    };
}

leaf_to_field_value!(
    String => TypeKind::String,
    &str => TypeKind::String,
    bool => TypeKind::Bool,
    i8 => TypeKind::Int8,
    i16 => TypeKind::Int16,
    i32 => TypeKind::Int32,
    i64 => TypeKind::Int64,
    u8 => TypeKind::UInt8,
    u16 => TypeKind::UInt16,
    u32 => TypeKind::UInt32,
    u64 => TypeKind::UInt64,
    f32 => TypeKind::Float32,
    f64 => TypeKind::Float64,
);

impl<T: Clone + Into<Value>> ToFieldValue for Vec<T> {
    fn to_field_value(&self) -> FieldValue {
        FieldValue::Leaf {
            kind: TypeKind::Sequence,
            value: Value::Array(self.iter().cloned().map(Into::into).collect()),
        }
    }
}

impl<T: Clone + Into<Value>, const N: usize> ToFieldValue for [T; N] {
    fn to_field_value(&self) -> FieldValue {
        FieldValue::Leaf {
            kind: TypeKind::Array,
            value: Value::Array(self.iter().cloned().map(Into::into).collect()),
        }
    }
}

impl<T: ToFieldValue> ToFieldValue for Option<T> {
    fn to_field_value(&self) -> FieldValue {
        match self {
            Some(value) => value.to_field_value(),
            None => FieldValue::Absent,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{FieldMeta, FieldValue, ToFieldValue};
    use filter_model::core::{type_kind::TypeKind, value::Value};

    #[test]
    fn test_lookup_falls_back_to_ident() {
        let mut meta = FieldMeta::new("age");
        assert_eq!(meta.lookup_or_ident(), "age");

        meta.lookup = Some("user_age");
        assert_eq!(meta.lookup_or_ident(), "user_age");
    }

    #[test]
    fn test_scalar_leaves_carry_width_kinds() {
        assert_eq!(
            7i16.to_field_value(),
            FieldValue::Leaf {
                kind: TypeKind::Int16,
                value: Value::Int(7)
            }
        );
        assert_eq!(
            2.5f64.to_field_value(),
            FieldValue::Leaf {
                kind: TypeKind::Float64,
                value: Value::Float(2.5)
            }
        );
    }

    #[test]
    fn test_sequences_and_arrays_are_distinct_kinds() {
        let seq = vec!["a".to_string()].to_field_value();
        assert!(matches!(
            seq,
            FieldValue::Leaf {
                kind: TypeKind::Sequence,
                ..
            }
        ));

        let arr = [1i64, 2].to_field_value();
        assert!(matches!(
            arr,
            FieldValue::Leaf {
                kind: TypeKind::Array,
                ..
            }
        ));
    }

    #[test]
    fn test_option_resolves_one_level() {
        let present = Some(5i64).to_field_value();
        assert!(matches!(
            present,
            FieldValue::Leaf {
                kind: TypeKind::Int64,
                ..
            }
        ));

        let absent: Option<i64> = None;
        assert_eq!(absent.to_field_value(), FieldValue::Absent);
    }
}
