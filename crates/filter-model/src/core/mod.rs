pub mod type_kind;
pub mod value;
