//! Keyed collections of batches.

use std::collections::HashMap;
use std::hash::Hash;

use tracing::debug;
use vertarray_types::VertexResult;

use crate::batch::Batch;

/// Batches keyed by layer, side or any other grouping.
///
/// Missing keys are created empty on first access. Clearing keeps the
/// keys and their capacity so the next rebuild does not reallocate.
#[derive(Debug, Clone)]
pub struct BatchMap<K, B> {
    batches: HashMap<K, B>,
}

impl<K: Eq + Hash + Clone, B: Batch> BatchMap<K, B> {
    pub fn new() -> Self {
        Self {
            batches: HashMap::new(),
        }
    }

    /// Returns the batch for `key`, creating it if absent.
    pub fn entry(&mut self, key: K) -> &mut B {
        self.batches.entry(key).or_default()
    }

    pub fn get(&self, key: &K) -> Option<&B> {
        self.batches.get(key)
    }

    /// Number of keys.
    pub fn len(&self) -> usize {
        self.batches.len()
    }

    pub fn is_empty(&self) -> bool {
        self.batches.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&K, &B)> {
        self.batches.iter()
    }
}

impl<K: Eq + Hash + Clone, B: Batch> Default for BatchMap<K, B> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K: Eq + Hash + Clone, B: Batch> Batch for BatchMap<K, B> {
    fn clear(&mut self) {
        for batch in self.batches.values_mut() {
            batch.clear();
        }
    }

    /// Merges `other` key by key, creating keys that `self` lacks.
    fn extend(&mut self, other: &Self) -> VertexResult<()> {
        for (key, batch) in &other.batches {
            self.entry(key.clone()).extend(batch)?;
        }
        debug!(
            keys = self.batches.len(),
            records = self.record_count(),
            "merged batch map"
        );
        Ok(())
    }

    fn record_count(&self) -> usize {
        self.batches.values().map(Batch::record_count).sum()
    }
}
