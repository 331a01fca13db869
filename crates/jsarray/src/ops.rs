//! The mutating operation set.
//!
//! Everything here mutates in place. Order-changing operations work over
//! the dense view of the indexed elements (ascending key order) and write
//! the result back densely; all of them funnel length updates through the
//! container's single reconciliation pass. `copy_within` and `fill` are
//! the two that leave both the key set and `length` untouched. Name-keyed
//! entries are invisible to every operation in this module.

use std::cmp::Ordering;

use crate::collection::Collection;
use crate::key::Key;
use crate::value::Value;

/// Normalize a possibly negative position against `len`: negative counts
/// from the end, both directions clamp to `0..=len`.
fn clamp_index(index: i64, len: usize) -> usize {
    if index < 0 {
        len.saturating_sub(index.unsigned_abs() as usize)
    } else {
        (index as usize).min(len)
    }
}

impl Collection {
    /// Append `items` after the highest index key, in argument order.
    /// Returns the new length; pushing nothing is a no-op returning the
    /// current length.
    pub fn push(&mut self, items: Vec<Value>) -> u32 {
        if items.is_empty() {
            return self.length();
        }
        let mut next = self.max_index().map_or(0, |i| i + 1);
        for item in items {
            self.entries.insert(Key::Index(next), item);
            next += 1;
        }
        self.reconcile_length();
        self.length()
    }

    /// Remove and return the last indexed element.
    ///
    /// Returns `Null` when nothing is indexed; never errors on empty.
    pub fn pop(&mut self) -> Value {
        let Some(last) = self.max_index() else {
            return Value::Null;
        };
        let removed = self.delete(&Key::Index(last)).unwrap_or(Value::Null);
        self.reconcile_length();
        removed
    }

    /// Remove and return the first indexed element, dense-reindexing the
    /// remainder down so relative order is preserved from index 0.
    ///
    /// Returns `Null` when nothing is indexed; never errors on empty.
    pub fn shift(&mut self) -> Value {
        let mut elements = self.take_indexed();
        if elements.is_empty() {
            return Value::Null;
        }
        let removed = elements.remove(0);
        self.put_dense(elements);
        self.reconcile_length();
        removed
    }

    /// Insert `items` at the front: every existing index key `k` becomes
    /// `k + items.len()` (gaps are preserved) and the items land at
    /// `0..items.len()` in argument order. Returns the new length.
    pub fn unshift(&mut self, items: Vec<Value>) -> u32 {
        let inserted = items.len() as u32;
        if inserted > 0 {
            // Renumber from the top down so shifted keys never collide.
            for i in self.index_keys().into_iter().rev() {
                if let Some(value) = self.entries.remove(&Key::Index(i)) {
                    self.entries.insert(Key::Index(i + inserted), value);
                }
            }
            for (i, item) in items.into_iter().enumerate() {
                self.entries.insert(Key::Index(i as u32), item);
            }
        }
        self.reconcile_length();
        self.length()
    }

    /// Reverse the indexed elements in place, writing the result back
    /// densely from index 0 (sparse holes do not survive a reversal).
    pub fn reverse(&mut self) -> &mut Self {
        let mut elements = self.take_indexed();
        elements.reverse();
        self.put_dense(elements);
        self.reconcile_length();
        self
    }

    /// Sort by the string form of each element (stable), reindexing
    /// densely.
    pub fn sort(&mut self) -> &mut Self {
        self.sort_by(|a, b| a.to_string().cmp(&b.to_string()))
    }

    /// Sort with a three-way comparator (stable), reindexing densely.
    pub fn sort_by<F>(&mut self, mut compare: F) -> &mut Self
    where
        F: FnMut(&Value, &Value) -> Ordering,
    {
        let mut elements = self.take_indexed();
        elements.sort_by(|a, b| compare(a, b));
        self.put_dense(elements);
        self.reconcile_length();
        self
    }

    /// Remove `delete_count` elements starting at `start` and insert
    /// `items` in their place, reindexing densely. Negative `start` counts
    /// from the end and out-of-range positions clamp; `None` deletes
    /// through the end and a negative count deletes nothing. Returns the
    /// removed elements as a new container.
    pub fn splice(
        &mut self,
        start: i64,
        delete_count: Option<i64>,
        items: Vec<Value>,
    ) -> Collection {
        let mut elements = self.take_indexed();
        let len = elements.len();
        let start = clamp_index(start, len);
        let delete_count = match delete_count {
            Some(n) => (n.max(0) as usize).min(len - start),
            None => len - start,
        };
        let removed: Vec<Value> = elements.splice(start..start + delete_count, items).collect();
        self.put_dense(elements);
        self.reconcile_length();
        Collection::new(vec![Value::Array(removed)])
    }

    /// Copy the element range `[start, end)` over the positions beginning
    /// at `target`, positionally over the present index keys. Negative
    /// indices count from the end; `None` means through the end. The
    /// source is read in full before any write, so overlapping ranges stay
    /// intact; the key set and `length` are unchanged.
    pub fn copy_within(&mut self, target: i64, start: i64, end: Option<i64>) -> &mut Self {
        let keys = self.index_keys();
        let len = keys.len();
        let target = clamp_index(target, len);
        let start = clamp_index(start, len);
        let end = end.map_or(len, |e| clamp_index(e, len));
        let count = end.saturating_sub(start).min(len - target);

        let source: Vec<Value> = keys[start..start + count]
            .iter()
            .filter_map(|i| self.entries.get(&Key::Index(*i)).cloned())
            .collect();
        for (offset, value) in source.into_iter().enumerate() {
            self.entries.insert(Key::Index(keys[target + offset]), value);
        }
        self
    }

    /// Overwrite the positions `[start, end)` with clones of `value`,
    /// positionally over the present index keys; defaults cover the whole
    /// container and negative indices count from the end. The key set and
    /// `length` are unchanged.
    pub fn fill(&mut self, value: Value, start: Option<i64>, end: Option<i64>) -> &mut Self {
        let keys = self.index_keys();
        let len = keys.len();
        let start = start.map_or(0, |s| clamp_index(s, len));
        let end = end.map_or(len, |e| clamp_index(e, len));
        for i in &keys[start..end.max(start)] {
            self.entries.insert(Key::Index(*i), value.clone());
        }
        self
    }
}
