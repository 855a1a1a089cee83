//! Cross-collection lookup + unwind fragments.

use crate::field::FilterField;
use filter_model::document::Document;

/// Closed set of join strategies.
///
/// Only the left-outer variant is implemented; inner and right-outer
/// joins are future variants of this enum.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum JoinStrategy {
    #[default]
    LeftOuter,
}

impl JoinStrategy {
    /// Produces the ordered `$lookup` / `$unwind` stage pair joining
    /// `right`'s collection onto `left`'s field.
    ///
    /// Left-outer semantics: rows without a match keep a null joined
    /// value instead of being dropped
    /// (`preserveNullAndEmptyArrays: true`).
    pub fn join(&self, right: &FilterField, left: &FilterField) -> Document {
        match self {
            JoinStrategy::LeftOuter => {
                let lookup = Document::new()
                    .entry("from", right.collection())
                    .entry("localField", left.name())
                    .entry("foreignField", right.name())
                    .entry("as", right.name());
                let unwind = Document::new()
                    .entry("path", format!("${}", right.name()))
                    .entry("preserveNullAndEmptyArrays", true);
                Document::new()
                    .entry("$lookup", lookup)
                    .entry("$unwind", unwind)
            }
        }
    }
}
