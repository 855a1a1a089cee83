pub mod core;
pub mod document;
pub mod operator;
