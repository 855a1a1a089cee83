//! Orchestrates scan, field management, duplicate merging and final
//! document assembly.

use crate::describe::{Describe, FieldValue};
use crate::error::{BuilderError, FilterError};
use crate::field::FilterField;
use crate::policy::{join::JoinStrategy, merge::MergeStrategy};
use crate::scanner::Scanner;
use filter_model::document::Document;
use tracing::{debug, warn};

/// Compilation state. Transitions only move forward, except that loading
/// more fields drops a previously built document.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum BuilderState {
    Empty,
    FieldsLoaded,
    Merged,
    Built,
}

/// Accumulates filter fields from one or more scans and assembles the
/// final ordered filter document.
///
/// One builder per compiled filter; it is not reused across unrelated
/// records and must not be shared across threads.
pub struct FilterBuilder {
    scanner: Scanner,
    fields: Vec<FilterField>,
    merge_strategy: MergeStrategy,
    join_strategy: JoinStrategy,
    state: BuilderState,
    output: Document,
}

impl Default for FilterBuilder {
    fn default() -> Self {
        Self::new(Scanner::default())
    }
}

impl FilterBuilder {
    pub fn new(scanner: Scanner) -> Self {
        Self {
            scanner,
            fields: Vec::new(),
            merge_strategy: MergeStrategy::default(),
            join_strategy: JoinStrategy::default(),
            state: BuilderState::Empty,
            output: Document::new(),
        }
    }

    /// Strategy applied by [`merge_duplicates`](FilterBuilder::merge_duplicates).
    pub fn with_merge_strategy(mut self, strategy: MergeStrategy) -> Self {
        self.merge_strategy = strategy;
        self
    }

    /// Strategy applied to relation fields during
    /// [`build`](FilterBuilder::build).
    pub fn with_join_strategy(mut self, strategy: JoinStrategy) -> Self {
        self.join_strategy = strategy;
        self
    }

    pub fn scanner(&self) -> &Scanner {
        &self.scanner
    }

    pub fn scanner_mut(&mut self) -> &mut Scanner {
        &mut self.scanner
    }

    /// Scans `record` and appends the resulting fields.
    pub fn scan(&mut self, record: &dyn Describe) -> Result<&mut Self, FilterError> {
        self.scan_collection(record, "")
    }

    /// Scans `record`, naming its own collection for diagnostics. Only
    /// fields with a relation annotation end up in another collection;
    /// the rest stay local.
    pub fn scan_collection(
        &mut self,
        record: &dyn Describe,
        collection: &str,
    ) -> Result<&mut Self, FilterError> {
        let scanned = self.scanner.scan(
            &FieldValue::Record(record.describe()),
            collection,
            None,
            self.fields.len(),
        )?;
        self.load(scanned);
        Ok(self)
    }

    pub fn add_field(&mut self, field: FilterField) -> &mut Self {
        self.load(vec![field]);
        self
    }

    pub fn add_fields(&mut self, fields: Vec<FilterField>) -> &mut Self {
        self.load(fields);
        self
    }

    /// Replaces the entire field list.
    pub fn set_fields(&mut self, fields: Vec<FilterField>) -> &mut Self {
        self.fields.clear();
        self.load(fields);
        self
    }

    /// Removes exactly one field matching `field`'s ordinal index.
    /// A missing target is a no-op.
    pub fn remove_field(&mut self, field: &FilterField) -> &mut Self {
        match self.fields.iter().position(|f| f.index() == field.index()) {
            Some(position) => {
                self.fields.remove(position);
                self.reindex();
            }
            None => warn!(
                index = field.index(),
                "remove_field target not found, ignoring"
            ),
        }
        self
    }

    /// Removes every field named `name`. No matches is a no-op.
    pub fn remove_field_by_name(&mut self, name: &str) -> &mut Self {
        let before = self.fields.len();
        self.fields.retain(|f| f.name() != name);
        if self.fields.len() == before {
            warn!(name, "remove_field_by_name matched nothing, ignoring");
        } else {
            self.reindex();
        }
        self
    }

    /// Removes exactly one field by ordinal index. Out of range is a no-op.
    pub fn remove_field_by_index(&mut self, index: usize) -> &mut Self {
        if index < self.fields.len() {
            self.fields.remove(index);
            self.reindex();
        } else {
            warn!(index, "remove_field_by_index out of range, ignoring");
        }
        self
    }

    pub fn fields(&self) -> &[FilterField] {
        &self.fields
    }

    pub fn fields_by_name(&self, name: &str) -> Vec<&FilterField> {
        self.fields.iter().filter(|f| f.name() == name).collect()
    }

    pub fn field_by_index(&self, index: usize) -> Option<&FilterField> {
        self.fields.get(index)
    }

    /// Merges every group of same-named fields down to one field.
    ///
    /// The first occurrence of each name is kept and absorbs every later
    /// same-named field through the configured merge strategy. The pass
    /// drains into a fresh list, so no sequence is mutated while it is
    /// iterated. Idempotent: a second call finds no duplicates.
    pub fn merge_duplicates(&mut self) -> Result<&mut Self, FilterError> {
        let strategy = self.merge_strategy;
        let mut kept: Vec<FilterField> = Vec::with_capacity(self.fields.len());
        for field in self.fields.drain(..) {
            match kept.iter().position(|k| k.name() == field.name()) {
                Some(position) => {
                    kept[position].merge(&field, strategy)?;
                }
                None => kept.push(field),
            }
        }
        self.fields = kept;
        self.reindex();
        self.state = BuilderState::Merged;
        Ok(self)
    }

    /// Builds every field in ordinal order and concatenates the fragments
    /// into one ordered document, then appends the join stages of every
    /// relation field.
    pub fn build(&mut self) -> Result<&mut Self, FilterError> {
        let mut document = Document::new();
        for field in &mut self.fields {
            field.build()?;
        }
        for field in &self.fields {
            if let Some(output) = field.output() {
                document.extend(output.clone());
            }
        }
        for (position, field) in self.fields.iter().enumerate() {
            if field.collection().is_empty() {
                continue;
            }
            // Left side of the join: the nearest earlier local field with
            // the same name, or the relation field itself.
            let left = self.fields[..position]
                .iter()
                .rev()
                .find(|f| f.collection().is_empty() && f.name() == field.name())
                .unwrap_or(field);
            document.extend(self.join_strategy.join(field, left));
        }

        debug!(
            fields = self.fields.len(),
            entries = document.len(),
            "filter document built"
        );
        self.output = document;
        self.state = BuilderState::Built;
        Ok(self)
    }

    /// The frozen filter document. Valid only after
    /// [`build`](FilterBuilder::build).
    pub fn output(&self) -> Result<&Document, BuilderError> {
        if self.state != BuilderState::Built {
            return Err(BuilderError::NotBuilt);
        }
        Ok(&self.output)
    }

    fn load(&mut self, fields: Vec<FilterField>) {
        self.fields.extend(fields);
        self.reindex();
        self.output = Document::new();
        self.state = BuilderState::FieldsLoaded;
    }

    /// Keeps ordinal indices contiguous after list mutations.
    fn reindex(&mut self) {
        for (position, field) in self.fields.iter_mut().enumerate() {
            field.set_index(position);
        }
    }
}
