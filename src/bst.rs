//! An ordered map implemented with a plain, unbalanced binary search tree.
//!
//! Shares the surface of [`AvlTreeMap`](crate::AvlTreeMap) and adds removal.
//! Sorted input degenerates the tree into a list, so every operation here
//! walks the tree iteratively.

use std::cmp::{self, Ordering};
use std::fmt;
use std::io;

use crate::increment::Increment;
use crate::render::{self, BinaryNode};

/// An ordered map implemented with an unbalanced binary search tree.
///
/// ```
/// use avl_words::BstMap;
/// let mut map = BstMap::new();
/// map.insert(2, 1);
/// map.insert(1, 1);
/// map.insert(2, 1);
/// assert_eq!(map.find(&2), Some(&2));
/// assert_eq!(map.size(), 3);
/// assert_eq!(map.remove(&2), Some(2));
/// assert_eq!(map.len(), 1);
/// ```
pub struct BstMap<K, V> {
    root: Link<K, V>,
    num_nodes: usize,
    num_inserts: usize,
}

type Link<K, V> = Option<Box<Node<K, V>>>;

struct Node<K, V> {
    key: K,
    value: V,
    left: Link<K, V>,
    right: Link<K, V>,
}

impl<K, V> BstMap<K, V> {
    /// Creates an empty map.
    pub fn new() -> Self {
        Self {
            root: None,
            num_nodes: 0,
            num_inserts: 0,
        }
    }

    /// Returns true if the map contains no elements.
    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    /// Returns the number of distinct keys in the map.
    pub fn len(&self) -> usize {
        self.num_nodes
    }

    /// Returns the insertion counter: one per `insert` call, duplicates included,
    /// minus one per successful `remove`.
    pub fn size(&self) -> usize {
        self.num_inserts
    }

    /// Returns the height of the tree: 0 when empty, 1 for a single entry.
    pub fn height(&self) -> usize {
        let mut max_depth = 0;
        let mut stack: Vec<(&Node<K, V>, usize)> =
            self.root.as_deref().map(|root| (root, 1)).into_iter().collect();
        while let Some((node, depth)) = stack.pop() {
            max_depth = cmp::max(max_depth, depth);
            stack.extend(node.left.as_deref().map(|left| (left, depth + 1)));
            stack.extend(node.right.as_deref().map(|right| (right, depth + 1)));
        }
        max_depth
    }

    /// Clears the map, deallocating all memory.
    pub fn clear(&mut self) {
        let mut stack: Vec<Box<Node<K, V>>> = self.root.take().into_iter().collect();
        while let Some(mut node) = stack.pop() {
            stack.extend(node.left.take());
            stack.extend(node.right.take());
        }
        self.num_nodes = 0;
        self.num_inserts = 0;
    }

    /// Gets an iterator over the entries of the map, sorted by key.
    pub fn iter(&self) -> impl Iterator<Item = (&K, &V)> {
        let mut iter = Iter { stack: Vec::new() };
        iter.push_left_spine(self.root.as_deref());
        iter
    }
}

struct Iter<'a, K, V> {
    stack: Vec<&'a Node<K, V>>,
}

impl<'a, K, V> Iter<'a, K, V> {
    fn push_left_spine(&mut self, mut current: Option<&'a Node<K, V>>) {
        while let Some(node) = current {
            self.stack.push(node);
            current = node.left.as_deref();
        }
    }
}

impl<'a, K, V> Iterator for Iter<'a, K, V> {
    type Item = (&'a K, &'a V);

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.stack.pop()?;
        self.push_left_spine(node.right.as_deref());
        Some((&node.key, &node.value))
    }
}

impl<K: Ord, V> BstMap<K, V> {
    /// Returns a reference to the value corresponding to the key.
    pub fn find(&self, key: &K) -> Option<&V> {
        let mut current = self.root.as_deref();
        while let Some(node) = current {
            current = match key.cmp(&node.key) {
                Ordering::Equal => return Some(&node.value),
                Ordering::Less => node.left.as_deref(),
                Ordering::Greater => node.right.as_deref(),
            };
        }
        None
    }

    /// Returns a mutable reference to the value corresponding to the key.
    pub fn find_mut(&mut self, key: &K) -> Option<&mut V> {
        let mut current = self.root.as_deref_mut();
        while let Some(node) = current {
            current = match key.cmp(&node.key) {
                Ordering::Equal => return Some(&mut node.value),
                Ordering::Less => node.left.as_deref_mut(),
                Ordering::Greater => node.right.as_deref_mut(),
            };
        }
        None
    }

    /// Returns true if the map contains a value for the key.
    pub fn contains_key(&self, key: &K) -> bool {
        self.find(key).is_some()
    }

    /// Removes a key from the map.
    /// Returns the value at the key if the key was previously in the map.
    ///
    /// A node with two children is replaced by its in-order predecessor.
    pub fn remove(&mut self, key: &K) -> Option<V> {
        // Find link holding the node to-be-removed
        let mut link = &mut self.root;
        loop {
            let ordering = match link.as_deref() {
                None => return None,
                Some(node) => key.cmp(&node.key),
            };
            match ordering {
                Ordering::Equal => break,
                Ordering::Less => link = &mut link.as_mut()?.left,
                Ordering::Greater => link = &mut link.as_mut()?.right,
            }
        }

        let mut node = link.take()?;
        *link = match (node.left.take(), node.right.take()) {
            (None, None) => None,
            (Some(left), None) => Some(left),
            (None, Some(right)) => Some(right),
            (Some(left), Some(right)) => {
                let mut left = Some(left);
                let mut predecessor = take_max(&mut left)?;
                predecessor.left = left;
                predecessor.right = Some(right);
                Some(predecessor)
            }
        };

        self.num_nodes -= 1;
        self.num_inserts = self.num_inserts.saturating_sub(1);
        Some(node.value)
    }

    /// Asserts that the internal tree structure is consistent.
    #[cfg(any(test, feature = "consistency_check"))]
    pub fn check_consistency(&self) {
        let mut num_nodes = 0;
        let mut previous: Option<&K> = None;
        for (key, _) in self.iter() {
            assert!(previous.map_or(true, |previous| previous < key));
            previous = Some(key);
            num_nodes += 1;
        }
        assert_eq!(num_nodes, self.num_nodes);
    }
}

impl<K: Ord, V: Increment> BstMap<K, V> {
    /// Inserts a key-value pair into the map.
    ///
    /// If the key is already present, its value is incremented in place and
    /// `value` is dropped. Returns whether the key was new.
    pub fn insert(&mut self, key: K, value: V) -> bool {
        self.num_inserts += 1;
        let mut link = &mut self.root;
        while let Some(node) = link {
            match key.cmp(&node.key) {
                Ordering::Less => link = &mut node.left,
                Ordering::Greater => link = &mut node.right,
                Ordering::Equal => {
                    node.value.increment();
                    return false;
                }
            }
        }
        *link = Some(Box::new(Node {
            key,
            value,
            left: None,
            right: None,
        }));
        self.num_nodes += 1;
        true
    }
}

impl<K: fmt::Display, V: fmt::Display> BstMap<K, V> {
    /// Writes the indented representation of the tree to `out`.
    pub fn print<W: io::Write>(&self, out: &mut W) -> io::Result<()> {
        write!(out, "{self}")
    }

    /// Returns the nested representation `([key,value],<left>,<right>)`.
    pub fn to_nested_string(&self) -> String {
        render::nested_string(self.root.as_deref())
    }
}

impl<K: fmt::Display, V: fmt::Display> fmt::Display for BstMap<K, V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.root.as_deref() {
            None => Ok(()),
            Some(root) => render::write_indented(f, root),
        }
    }
}

impl<K: fmt::Debug, V: fmt::Debug> fmt::Debug for BstMap<K, V> {
    fn fmt(&self, fmt: &mut fmt::Formatter) -> fmt::Result {
        fmt.debug_map().entries(self.iter()).finish()
    }
}

impl<K, V> Drop for BstMap<K, V> {
    fn drop(&mut self) {
        self.clear();
    }
}

impl<K, V> Default for BstMap<K, V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K, V> BinaryNode for Node<K, V> {
    type Key = K;
    type Value = V;

    fn key(&self) -> &K {
        &self.key
    }

    fn value(&self) -> &V {
        &self.value
    }

    fn left(&self) -> Option<&Self> {
        self.left.as_deref()
    }

    fn right(&self) -> Option<&Self> {
        self.right.as_deref()
    }
}

/// Unlinks the node with the largest key below `link`, keeping its left subtree in place.
fn take_max<K, V>(mut link: &mut Link<K, V>) -> Link<K, V> {
    while link.as_ref().is_some_and(|node| node.right.is_some()) {
        link = &mut link.as_mut()?.right;
    }
    let mut max = link.take()?;
    *link = max.left.take();
    Some(max)
}
