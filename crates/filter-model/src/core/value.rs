use crate::document::Document;
use serde::ser::{Serialize, Serializer};

/// Untyped runtime value carried by a compiled filter field.
///
/// Width information lives in [`TypeKind`](crate::core::type_kind::TypeKind);
/// here every integer collapses to `i64`/`u64` and every float to `f64`,
/// which is what the filter document carries anyway.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    String(String),
    Boolean(bool),
    Int(i64),
    Uint(u64),
    Float(f64),
    Array(Vec<Value>),
    Document(Document),
    Null,
}

impl Value {
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::String(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Value::Boolean(b) => Some(*b),
            _ => None,
        }
    }

    pub fn as_i64(&self) -> Option<i64> {
        match self {
            Value::Int(v) => Some(*v),
            Value::Uint(v) => i64::try_from(*v).ok(),
            _ => None,
        }
    }

    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Value::Int(v) => Some(*v as f64),
            Value::Uint(v) => Some(*v as f64),
            Value::Float(v) => Some(*v),
            _ => None,
        }
    }

    pub fn as_array(&self) -> Option<&[Value]> {
        match self {
            Value::Array(items) => Some(items),
            _ => None,
        }
    }

    pub fn as_document(&self) -> Option<&Document> {
        match self {
            Value::Document(doc) => Some(doc),
            _ => None,
        }
    }
}

impl Serialize for Value {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Value::String(s) => serializer.serialize_str(s),
            Value::Boolean(b) => serializer.serialize_bool(*b),
            Value::Int(v) => serializer.serialize_i64(*v),
            Value::Uint(v) => serializer.serialize_u64(*v),
            Value::Float(v) => serializer.serialize_f64(*v),
            Value::Array(items) => serializer.collect_seq(items),
            Value::Document(doc) => doc.serialize(serializer),
            Value::Null => serializer.serialize_unit(),
        }
    }
}

macro_rules! value_from {
    ($ty:ty => $variant:ident as $repr:ty) => {
        impl From<$ty> for Value {
            fn from(v: $ty) -> Self {
                Value::$variant(v as $repr)
            }
        }
    };
}

value_from!(i8 => Int as i64);
value_from!(i16 => Int as i64);
value_from!(i32 => Int as i64);
value_from!(i64 => Int as i64);
value_from!(u8 => Uint as u64);
value_from!(u16 => Uint as u64);
value_from!(u32 => Uint as u64);
value_from!(u64 => Uint as u64);
value_from!(f32 => Float as f64);
value_from!(f64 => Float as f64);

impl From<bool> for Value {
    fn from(v: bool) -> Self {
        Value::Boolean(v)
    }
}

impl From<String> for Value {
    fn from(v: String) -> Self {
        Value::String(v)
    }
}

impl From<&str> for Value {
    fn from(v: &str) -> Self {
        Value::String(v.to_string())
    }
}

impl<T: Into<Value>> From<Vec<T>> for Value {
    fn from(items: Vec<T>) -> Self {
        Value::Array(items.into_iter().map(Into::into).collect())
    }
}

impl<T: Into<Value>, const N: usize> From<[T; N]> for Value {
    fn from(items: [T; N]) -> Self {
        Value::Array(items.into_iter().map(Into::into).collect())
    }
}

impl From<Document> for Value {
    fn from(doc: Document) -> Self {
        Value::Document(doc)
    }
}
