//! JavaScript-style array container.
//!
//! [`Collection`] reproduces the behavioral contract of a JS array on top
//! of an owned, possibly sparse key→value store: an observable length that
//! follows the highest assigned index rather than the element count,
//! arity-dispatched construction, the classic mutator set (`push`, `pop`,
//! `shift`, `unshift`, `reverse`, `sort`, `splice`, `copy_within`,
//! `fill`), key-addressed access and JSON interchange.
//!
//! ```
//! use jsarray::{array, Value};
//!
//! let mut c = array![1, 2, 3];
//! c.push(vec![Value::from(4)]);
//! assert_eq!(c.length(), 4);
//! assert_eq!(c.pop(), Value::from(4));
//!
//! // A lone integer argument is a pre-size request, not an element:
//! let presized = array![3];
//! assert_eq!(presized.length(), 3);
//! assert_eq!(presized[0], Value::Null);
//! ```

pub mod collection;
pub mod error;
mod json;
pub mod key;
mod ops;
pub mod value;

pub use collection::Collection;
pub use error::ArrayError;
pub use key::Key;
pub use value::Value;

/// Variadic construction sugar over [`Collection::new`].
///
/// The listed arguments go through the same arity dispatch as the
/// constructor: `array![3]` pre-sizes, `array![1, 2, 3]` is three dense
/// elements, `array![]` is empty. Use [`Collection::of`] when a lone
/// integer should be kept as an element.
#[macro_export]
macro_rules! array {
    () => {
        $crate::Collection::new(::std::vec::Vec::new())
    };
    ($($arg:expr),+ $(,)?) => {
        $crate::Collection::new(::std::vec![$($crate::Value::from($arg)),+])
    };
}
