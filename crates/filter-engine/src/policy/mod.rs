pub mod join;
pub mod merge;
