//! The indexed sequence container: state, construction, length
//! reconciliation and key-addressed access.
//!
//! The mutating operation set (`push`, `pop`, `splice`, ...) lives in the
//! `ops` module; JSON interchange in `json`. Both extend [`Collection`]
//! with inherent methods.

use std::collections::BTreeMap;
use std::collections::btree_map;
use std::ops::Index;

use crate::error::ArrayError;
use crate::key::Key;
use crate::value::Value;

/// A JavaScript-style array: an owned, possibly sparse mapping from keys to
/// dynamically typed values, plus an observable `length` that follows the
/// highest assigned index rather than the element count.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Collection {
    pub(crate) entries: BTreeMap<Key, Value>,
    length: u32,
}

impl Collection {
    /// Construct from a variable-length argument list, dispatched by the
    /// list's shape (see the [`array!`](crate::array) macro for variadic
    /// sugar):
    ///
    /// - exactly one non-negative `Int(n)`: `n` pre-sized slots, each `Null`
    /// - exactly one `Array` or `Map`: adopt its contents as the entries
    ///   (by value; `Map` keys go through [`Key::parse`])
    /// - anything else, including zero arguments and a lone negative
    ///   integer: the arguments become the entries positionally
    ///
    /// Construction never fails.
    pub fn new(args: Vec<Value>) -> Self {
        let mut collection = Collection::default();
        collection.init(args);
        collection
    }

    fn init(&mut self, mut args: Vec<Value>) {
        self.entries.clear();
        if args.len() == 1 {
            match args.remove(0) {
                Value::Int(n) if n >= 0 => {
                    let slots = u32::try_from(n).unwrap_or(u32::MAX);
                    for i in 0..slots {
                        self.entries.insert(Key::Index(i), Value::Null);
                    }
                }
                Value::Array(items) => {
                    for (i, item) in items.into_iter().enumerate() {
                        self.entries.insert(Key::Index(i as u32), item);
                    }
                }
                Value::Map(map) => {
                    for (name, item) in map {
                        self.entries.insert(Key::parse(&name), item);
                    }
                }
                other => {
                    self.entries.insert(Key::Index(0), other);
                }
            }
        } else {
            for (i, item) in args.into_iter().enumerate() {
                self.entries.insert(Key::Index(i as u32), item);
            }
        }
        self.reconcile_length();
    }

    /// Build a dense container holding exactly `elements`.
    ///
    /// A trailing `Null` sentinel keeps a lone integer element from being
    /// dispatched as a pre-size request; the sentinel slot is removed again
    /// before returning, so `of([3])` is the dense `[3]` of length 1.
    pub fn of(mut elements: Vec<Value>) -> Self {
        elements.push(Value::Null);
        let mut collection = Self::new(elements);
        collection.pop();
        collection
    }

    /// Construct from an array-like value (`Array` or `Map`).
    pub fn from_value(array_like: Value) -> Result<Self, ArrayError> {
        if !Self::is_array(&array_like) {
            return Err(ArrayError::InvalidArgument(format!(
                "from requires an array-like value, got {}",
                array_like.type_name()
            )));
        }
        Ok(Self::new(vec![array_like]))
    }

    /// Like [`from_value`](Self::from_value), but maps every element
    /// through `map_fn` before construction.
    pub fn from_value_with<F>(array_like: Value, mut map_fn: F) -> Result<Self, ArrayError>
    where
        F: FnMut(&Value) -> Value,
    {
        let mapped = match array_like {
            Value::Array(items) => Value::Array(items.iter().map(&mut map_fn).collect()),
            Value::Map(map) => Value::Map(
                map.iter()
                    .map(|(name, item)| (name.clone(), map_fn(item)))
                    .collect(),
            ),
            other => {
                return Err(ArrayError::InvalidArgument(format!(
                    "from requires an array-like value, got {}",
                    other.type_name()
                )));
            }
        };
        Ok(Self::new(vec![mapped]))
    }

    /// Whether `value` is array-like, i.e. adoptable as container contents.
    pub fn is_array(value: &Value) -> bool {
        matches!(value, Value::Array(_) | Value::Map(_))
    }

    /// Recompute `length` from the current key set.
    ///
    /// The one place the length rule lives, so it cannot drift between
    /// operations: no index keys gives 0, a dense zero-based index key set
    /// gives the element count, and any gap makes length track the highest
    /// index key instead (the key itself, not key + 1). Name keys never
    /// participate.
    pub(crate) fn reconcile_length(&mut self) {
        let mut next = 0u32;
        let mut dense = true;
        let mut max = None;
        for key in self.entries.keys() {
            if let Key::Index(i) = key {
                if *i != next {
                    dense = false;
                }
                next += 1;
                max = Some(*i);
            }
        }
        self.length = match max {
            None => 0,
            Some(_) if dense => next,
            Some(highest) => highest,
        };
    }

    /// Value at `key`. An absent key is a [`KeyNotFound`](ArrayError)
    /// error, never a silent default.
    pub fn get(&self, key: &Key) -> Result<&Value, ArrayError> {
        self.entries
            .get(key)
            .ok_or_else(|| ArrayError::KeyNotFound(key.clone()))
    }

    /// Whether `key` is present. A present `Null` still exists.
    pub fn has(&self, key: &Key) -> bool {
        self.entries.contains_key(key)
    }

    /// Insert or overwrite the entry at `key`.
    ///
    /// Writing at an index key `k` resets `length` to exactly `k` (not
    /// `k + 1`); writing at a name key leaves length untouched.
    pub fn set(&mut self, key: Key, value: Value) {
        if let Key::Index(i) = key {
            self.length = i;
        }
        self.entries.insert(key, value);
    }

    /// Remove the entry at `key`, leaving a hole at that position.
    ///
    /// Later keys do not shift down and `length` does not shrink.
    pub fn delete(&mut self, key: &Key) -> Option<Value> {
        self.entries.remove(key)
    }

    /// Current length: element count when dense, highest index key when
    /// sparse. Distinct from [`count`](Self::count).
    pub fn length(&self) -> u32 {
        self.length
    }

    /// Number of present entries, name keys included.
    pub fn count(&self) -> usize {
        self.entries.len()
    }

    /// Entries in ascending key order.
    pub fn iter(&self) -> btree_map::Iter<'_, Key, Value> {
        self.entries.iter()
    }

    /// Index keys exactly `0..count` with no name keys.
    pub(crate) fn is_dense(&self) -> bool {
        self.entries
            .keys()
            .enumerate()
            .all(|(pos, key)| *key == Key::Index(pos as u32))
    }

    /// Highest present index key.
    pub(crate) fn max_index(&self) -> Option<u32> {
        self.entries
            .range(..=Key::Index(u32::MAX))
            .next_back()
            .and_then(|(key, _)| key.as_index())
    }

    /// Present index keys in ascending order.
    pub(crate) fn index_keys(&self) -> Vec<u32> {
        self.entries.keys().filter_map(Key::as_index).collect()
    }

    /// Remove every indexed entry, returning the values in ascending key
    /// order. Name-keyed entries stay in place.
    pub(crate) fn take_indexed(&mut self) -> Vec<Value> {
        let mut dense = Vec::new();
        let mut named = BTreeMap::new();
        for (key, value) in std::mem::take(&mut self.entries) {
            match key {
                Key::Index(_) => dense.push(value),
                name => {
                    named.insert(name, value);
                }
            }
        }
        self.entries = named;
        dense
    }

    /// Write `values` back densely from index 0. Callers pair this with
    /// [`take_indexed`](Self::take_indexed) so no stale index keys remain.
    pub(crate) fn put_dense(&mut self, values: Vec<Value>) {
        for (i, value) in values.into_iter().enumerate() {
            self.entries.insert(Key::Index(i as u32), value);
        }
    }
}

/// Read sugar over [`Collection::get`]; panics on an absent index.
impl Index<u32> for Collection {
    type Output = Value;

    fn index(&self, index: u32) -> &Value {
        match self.entries.get(&Key::Index(index)) {
            Some(value) => value,
            None => panic!("no entry at index {index}"),
        }
    }
}

/// Read sugar over [`Collection::get`] for name keys; panics when absent.
impl Index<&str> for Collection {
    type Output = Value;

    fn index(&self, name: &str) -> &Value {
        match self.entries.get(&Key::name(name)) {
            Some(value) => value,
            None => panic!("no entry at key {name}"),
        }
    }
}

impl<'a> IntoIterator for &'a Collection {
    type Item = (&'a Key, &'a Value);
    type IntoIter = btree_map::Iter<'a, Key, Value>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

impl IntoIterator for Collection {
    type Item = (Key, Value);
    type IntoIter = btree_map::IntoIter<Key, Value>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}
