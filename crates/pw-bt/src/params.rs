use std::collections::BTreeMap;

/// Named numeric options bound to a leaf when the tree is built.
///
/// Values never change during a turn; a leaf reads them on every tick.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LeafParams {
    values: BTreeMap<String, f64>,
}

impl LeafParams {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, name: impl Into<String>, value: f64) -> Self {
        self.values.insert(name.into(), value);
        self
    }

    pub fn get(&self, name: &str) -> Option<f64> {
        self.values.get(name).copied()
    }

    pub fn get_or(&self, name: &str, default: f64) -> f64 {
        self.get(name).unwrap_or(default)
    }
}
