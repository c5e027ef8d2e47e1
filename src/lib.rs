//! Ordered maps that count occurrences, built on binary search trees.
//!
//! [`AvlTreeMap`] keeps itself balanced with AVL rotations, so its height stays
//! logarithmic in the number of keys. [`BstMap`] is the plain, unbalanced
//! counterpart and additionally supports removal.
//!
//! Both maps accumulate instead of overwrite: inserting a key that is already
//! present increments its value (see [`Increment`]). The [`words`] module uses
//! this to build word-frequency tables from text files.
//!
//! ```
//! use avl_words::AvlTreeMap;
//!
//! let mut map = AvlTreeMap::new();
//! for key in [1, 2, 3] {
//!     map.insert(key, 1);
//! }
//! assert_eq!(map.to_nested_string(), "([2,1],([1,1],,),([3,1],,))");
//! print!("{map}");
//! ```

mod balance;
mod bst;
mod increment;
mod key;
mod map;
mod render;
pub mod words;

pub use bst::BstMap;
pub use increment::Increment;
pub use key::{SlowKey, COMPARISON_DELAY};
pub use map::{AvlTreeMap, Iter};
