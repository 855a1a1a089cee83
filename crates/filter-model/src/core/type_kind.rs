use serde::Serialize;
use std::fmt;

/// Runtime type kind of a record field as seen by the filter compiler.
///
/// The set is closed: every leaf value a descriptor can produce maps to
/// exactly one kind, and operator compatibility is defined over this set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum TypeKind {
    String,
    Bool,
    Int8,
    Int16,
    Int32,
    Int64,
    UInt8,
    UInt16,
    UInt32,
    UInt64,
    Float32,
    Float64,
    /// Growable sequence, e.g. a `Vec`.
    Sequence,
    /// Fixed-length array.
    Array,
}

impl TypeKind {
    pub const ALL: [TypeKind; 14] = [
        TypeKind::String,
        TypeKind::Bool,
        TypeKind::Int8,
        TypeKind::Int16,
        TypeKind::Int32,
        TypeKind::Int64,
        TypeKind::UInt8,
        TypeKind::UInt16,
        TypeKind::UInt32,
        TypeKind::UInt64,
        TypeKind::Float32,
        TypeKind::Float64,
        TypeKind::Sequence,
        TypeKind::Array,
    ];

    pub fn is_signed(&self) -> bool {
        matches!(
            self,
            TypeKind::Int8 | TypeKind::Int16 | TypeKind::Int32 | TypeKind::Int64
        )
    }

    pub fn is_unsigned(&self) -> bool {
        matches!(
            self,
            TypeKind::UInt8 | TypeKind::UInt16 | TypeKind::UInt32 | TypeKind::UInt64
        )
    }

    pub fn is_integer(&self) -> bool {
        self.is_signed() || self.is_unsigned()
    }

    pub fn is_float(&self) -> bool {
        matches!(self, TypeKind::Float32 | TypeKind::Float64)
    }

    pub fn is_numeric(&self) -> bool {
        self.is_integer() || self.is_float()
    }

    /// Lower-case kind name used in error messages.
    pub fn name(&self) -> &'static str {
        match self {
            TypeKind::String => "string",
            TypeKind::Bool => "bool",
            TypeKind::Int8 => "i8",
            TypeKind::Int16 => "i16",
            TypeKind::Int32 => "i32",
            TypeKind::Int64 => "i64",
            TypeKind::UInt8 => "u8",
            TypeKind::UInt16 => "u16",
            TypeKind::UInt32 => "u32",
            TypeKind::UInt64 => "u64",
            TypeKind::Float32 => "f32",
            TypeKind::Float64 => "f64",
            TypeKind::Sequence => "sequence",
            TypeKind::Array => "array",
        }
    }
}

impl fmt::Display for TypeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::TypeKind;

    #[test]
    fn test_numeric_families() {
        assert!(TypeKind::Int16.is_signed());
        assert!(TypeKind::UInt64.is_unsigned());
        assert!(TypeKind::UInt32.is_integer());
        assert!(TypeKind::Float32.is_float());
        assert!(TypeKind::Float64.is_numeric());
        assert!(!TypeKind::String.is_numeric());
        assert!(!TypeKind::Sequence.is_numeric());
        assert!(!TypeKind::Bool.is_integer());
    }

    #[test]
    fn test_display_names() {
        assert_eq!(TypeKind::String.to_string(), "string");
        assert_eq!(TypeKind::Int64.to_string(), "i64");
        assert_eq!(TypeKind::Sequence.to_string(), "sequence");
    }

    #[test]
    fn test_all_covers_every_kind() {
        assert_eq!(TypeKind::ALL.len(), 14);
        let numeric = TypeKind::ALL.iter().filter(|k| k.is_numeric()).count();
        assert_eq!(numeric, 10);
    }
}
