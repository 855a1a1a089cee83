use super::Operator;
use std::collections::HashMap;

/// Catalogue of operators addressable by external name.
///
/// Constructed once per compilation context with the default catalogue,
/// optionally extended by the caller, then read-only while scanning runs.
#[derive(Debug, Clone)]
pub struct OperatorRegistry {
    source: HashMap<String, Operator>,
}

impl Default for OperatorRegistry {
    fn default() -> Self {
        let mut registry = Self::empty();
        for op in Operator::ALL {
            registry.set(op.external_name(), op);
        }
        registry
    }
}

impl OperatorRegistry {
    /// Registry with the fixed default catalogue (eq, ne, lt, lte, gt,
    /// gte, regex, in, nin).
    pub fn new() -> Self {
        Self::default()
    }

    /// Registry with no operators at all.
    pub fn empty() -> Self {
        Self {
            source: HashMap::new(),
        }
    }

    /// Absence is represented, never an error.
    pub fn get(&self, name: &str) -> Option<Operator> {
        self.source.get(name).copied()
    }

    /// Registers or overwrites `name`, returning the stored operator.
    pub fn set(&mut self, name: impl Into<String>, operator: Operator) -> Operator {
        self.source.insert(name.into(), operator);
        operator
    }

    /// Swaps the entire backing catalogue.
    pub fn replace_all(&mut self, source: HashMap<String, Operator>) {
        self.source = source;
    }

    pub fn len(&self) -> usize {
        self.source.len()
    }

    pub fn is_empty(&self) -> bool {
        self.source.is_empty()
    }
}
