//! Entry keys.

use std::fmt;

/// Key addressing one entry in a [`Collection`](crate::Collection).
///
/// The derived order puts every index key before every name key, index keys
/// ascending and name keys lexicographic. That total order is what gives
/// iteration its ascending-key contract and makes the dense-prefix check a
/// single forward pass.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Key {
    /// Integer index (array slot)
    Index(u32),
    /// Named key (non-integer offset)
    Name(String),
}

impl Key {
    pub fn index(i: u32) -> Self {
        Key::Index(i)
    }

    pub fn name(s: &str) -> Self {
        Key::Name(s.to_string())
    }

    pub fn as_index(&self) -> Option<u32> {
        match self {
            Key::Index(i) => Some(*i),
            Key::Name(_) => None,
        }
    }

    /// Map a stringified key back to its canonical form: a canonical
    /// non-negative decimal becomes an index key, anything else (leading
    /// zeros, signs, out-of-range) stays a name key. This is how JSON
    /// object keys round-trip into sparse index entries on decode.
    pub fn parse(text: &str) -> Self {
        match text.parse::<u32>() {
            Ok(index) if index.to_string() == text => Key::Index(index),
            _ => Key::Name(text.to_string()),
        }
    }
}

impl fmt::Display for Key {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Key::Index(i) => write!(f, "{i}"),
            Key::Name(s) => f.write_str(s),
        }
    }
}

impl From<u32> for Key {
    fn from(i: u32) -> Self {
        Key::Index(i)
    }
}

impl From<&str> for Key {
    fn from(s: &str) -> Self {
        Key::name(s)
    }
}
