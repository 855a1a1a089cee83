pub mod builder;
pub mod describe;
pub mod error;
pub mod field;
pub mod macros;
pub mod policy;
pub mod scanner;
pub mod validate;

#[cfg(test)]
mod tests;
