//! An ordered map implemented with an AVL tree.

use std::cmp::{self, Ordering};
use std::fmt;
use std::io;
use std::iter::FusedIterator;

use crate::balance::Rotation;
use crate::increment::Increment;
use crate::render::{self, BinaryNode};

/// An ordered map implemented with an AVL tree.
///
/// Inserting a key that is already present increments its value instead of
/// replacing it, so the map counts occurrences.
///
/// ```
/// use avl_words::AvlTreeMap;
/// let mut map = AvlTreeMap::new();
/// map.insert("b", 1);
/// map.insert("a", 1);
/// map.insert("b", 1);
/// assert_eq!(map.find(&"b"), Some(&2));
/// assert_eq!(map.len(), 2);
/// assert_eq!(map.size(), 2);
/// ```
pub struct AvlTreeMap<K, V> {
    root: Link<K, V>,
    num_nodes: usize,
    num_inserts: usize,
}

/// An iterator over the entries of a map, in ascending key order.
pub struct Iter<'a, K, V> {
    stack: Vec<&'a Node<K, V>>,
    len: usize,
}

type Link<K, V> = Option<Box<Node<K, V>>>;

struct Node<K, V> {
    key: K,
    value: V,
    left: Link<K, V>,
    right: Link<K, V>,
    height: usize,
}

impl<K, V> AvlTreeMap<K, V> {
    /// Creates an empty map.
    /// No memory is allocated until the first item is inserted.
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

    /// Returns the insertion counter.
    ///
    /// Every call to [`insert`](Self::insert) adds one, duplicates included,
    /// except the call that creates the root of an empty map.
    /// Inserting `n` distinct keys into an empty map therefore yields `n - 1`.
    pub fn size(&self) -> usize {
        self.num_inserts
    }

    /// Returns the height of the tree: 0 when empty, 1 for a single entry.
    pub fn height(&self) -> usize {
        height(&self.root)
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
    pub fn iter(&self) -> Iter<'_, K, V> {
        let mut iter = Iter {
            stack: Vec::new(),
            len: self.num_nodes,
        };
        iter.push_left_spine(self.root.as_deref());
        iter
    }

    /// Gets an iterator over the keys of the map, in sorted order.
    pub fn keys(&self) -> impl Iterator<Item = &K> {
        self.iter().map(|(k, _)| k)
    }

    /// Gets an iterator over the values of the map, in order by key.
    pub fn values(&self) -> impl Iterator<Item = &V> {
        self.iter().map(|(_, v)| v)
    }
}

impl<K: Ord, V> AvlTreeMap<K, V> {
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

    /// Asserts that the internal tree structure is consistent.
    #[cfg(any(test, feature = "consistency_check"))]
    pub fn check_consistency(&self) {
        fn check<K: Ord, V>(link: &Link<K, V>) -> (usize, usize) {
            let Some(node) = link.as_deref() else {
                return (0, 0);
            };
            if let Some(left) = node.left.as_deref() {
                assert!(left.key < node.key);
            }
            if let Some(right) = node.right.as_deref() {
                assert!(right.key > node.key);
            }
            let (left_height, left_count) = check(&node.left);
            let (right_height, right_count) = check(&node.right);

            // Check height
            assert_eq!(node.height, cmp::max(left_height, right_height) + 1);

            // Check AVL condition (nearly balance)
            assert!(left_height <= right_height + 1);
            assert!(right_height <= left_height + 1);

            (node.height, left_count + right_count + 1)
        }

        let (_, num_nodes) = check(&self.root);
        assert_eq!(num_nodes, self.num_nodes);

        // Check ordering across subtrees
        let keys: Vec<&K> = self.keys().collect();
        assert!(keys.windows(2).all(|pair| pair[0] < pair[1]));
    }
}

impl<K: Ord, V: Increment> AvlTreeMap<K, V> {
    /// Inserts a key-value pair into the map.
    ///
    /// If the key is already present, its value is incremented in place and
    /// `value` is dropped. Returns whether the key was new.
    pub fn insert(&mut self, key: K, value: V) -> bool {
        if self.root.is_none() {
            self.root = Some(Node::create(key, value));
            self.num_nodes = 1;
            return true;
        }
        let inserted = Self::insert_at(&mut self.root, key, value);
        if inserted {
            self.num_nodes += 1;
        }
        self.num_inserts += 1;
        inserted
    }

    /// Inserts below the given link and rebalances every node on the way back up.
    fn insert_at(link: &mut Link<K, V>, key: K, value: V) -> bool {
        let inserted = match link {
            None => {
                *link = Some(Node::create(key, value));
                return true;
            }
            Some(node) => match key.cmp(&node.key) {
                Ordering::Less => Self::insert_at(&mut node.left, key, value),
                Ordering::Greater => Self::insert_at(&mut node.right, key, value),
                Ordering::Equal => {
                    node.value.increment();
                    false
                }
            },
        };
        if inserted {
            rebalance(link);
        }
        inserted
    }
}

impl<K: fmt::Display, V: fmt::Display> AvlTreeMap<K, V> {
    /// Writes the indented representation of the tree to `out`,
    /// the same text as the `Display` implementation produces.
    pub fn print<W: io::Write>(&self, out: &mut W) -> io::Result<()> {
        write!(out, "{self}")
    }

    /// Returns the nested representation `([key,value],<left>,<right>)`
    /// with empty subtrees left blank. An empty map yields an empty string.
    ///
    /// ```
    /// use avl_words::AvlTreeMap;
    /// let mut map = AvlTreeMap::new();
    /// map.insert(5, 1);
    /// map.insert(8, 1);
    /// assert_eq!(map.to_nested_string(), "([5,1],,([8,1],,))");
    /// ```
    pub fn to_nested_string(&self) -> String {
        render::nested_string(self.root.as_deref())
    }
}

/// Indented pre-order form: each node as `[key, value]` on its own line,
/// children tagged `L: ` and `R: ` and indented four spaces per level.
///
/// ```
/// use avl_words::AvlTreeMap;
/// let mut map = AvlTreeMap::new();
/// map.insert(5, 1);
/// map.insert(8, 1);
/// assert_eq!(map.to_string(), "[5, 1]\n    R: [8, 1]\n");
/// ```
impl<K: fmt::Display, V: fmt::Display> fmt::Display for AvlTreeMap<K, V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.root.as_deref() {
            None => Ok(()),
            Some(root) => render::write_indented(f, root),
        }
    }
}

impl<K: fmt::Debug, V: fmt::Debug> fmt::Debug for AvlTreeMap<K, V> {
    fn fmt(&self, fmt: &mut fmt::Formatter) -> fmt::Result {
        fmt.debug_map().entries(self.iter()).finish()
    }
}

impl<K, V> Drop for AvlTreeMap<K, V> {
    fn drop(&mut self) {
        self.clear();
    }
}

impl<K, V> Default for AvlTreeMap<K, V> {
    /// Creates an empty map.
    fn default() -> Self {
        Self::new()
    }
}

impl<'a, K, V> IntoIterator for &'a AvlTreeMap<K, V> {
    type Item = (&'a K, &'a V);
    type IntoIter = Iter<'a, K, V>;
    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
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
        self.len -= 1;
        Some((&node.key, &node.value))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.len, Some(self.len))
    }
}

impl<K, V> ExactSizeIterator for Iter<'_, K, V> {}

impl<K, V> FusedIterator for Iter<'_, K, V> {}

impl<K, V> Node<K, V> {
    fn create(key: K, value: V) -> Box<Self> {
        Box::new(Node {
            key,
            value,
            left: None,
            right: None,
            height: 1,
        })
    }

    fn adjust_height(&mut self) {
        self.height = cmp::max(height(&self.left), height(&self.right)) + 1;
    }

    fn balance_factor(&self) -> isize {
        height(&self.left) as isize - height(&self.right) as isize
    }

    fn rotation(&self) -> Rotation {
        let balance = self.balance_factor();
        let heavy_child = if balance > 0 {
            self.left.as_deref()
        } else {
            self.right.as_deref()
        };
        Rotation::classify(balance, heavy_child.map_or(0, Node::balance_factor))
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

fn height<K, V>(link: &Link<K, V>) -> usize {
    link.as_ref().map_or(0, |node| node.height)
}

/// Restores the AVL condition at the node in `link` and refreshes its height.
/// Both subtrees must already satisfy the AVL condition.
fn rebalance<K, V>(link: &mut Link<K, V>) {
    let rotation = match link.as_deref() {
        None => return,
        Some(node) => node.rotation(),
    };
    match rotation {
        Rotation::None => {
            if let Some(node) = link.as_deref_mut() {
                node.adjust_height();
            }
        }
        Rotation::Left => rotate_left(link),
        Rotation::Right => rotate_right(link),
        Rotation::LeftRight => {
            if let Some(node) = link.as_deref_mut() {
                rotate_left(&mut node.left);
            }
            rotate_right(link);
        }
        Rotation::RightLeft => {
            if let Some(node) = link.as_deref_mut() {
                rotate_right(&mut node.right);
            }
            rotate_left(link);
        }
    }
}

//   n            r
//  / \          / \
// a   r   ->   n   c
//    / \      / \
//   b   c    a   b
fn rotate_left<K, V>(link: &mut Link<K, V>) {
    let Some(mut node) = link.take() else {
        return;
    };
    match node.right.take() {
        Some(mut right) => {
            node.right = right.left.take();
            node.adjust_height();
            right.left = Some(node);
            right.adjust_height();
            *link = Some(right);
        }
        None => *link = Some(node),
    }
}

//     n        l
//    / \      / \
//   l   c -> a   n
//  / \          / \
// a   b        b   c
fn rotate_right<K, V>(link: &mut Link<K, V>) {
    let Some(mut node) = link.take() else {
        return;
    };
    match node.left.take() {
        Some(mut left) => {
            node.left = left.right.take();
            node.adjust_height();
            left.right = Some(node);
            left.adjust_height();
            *link = Some(left);
        }
        None => *link = Some(node),
    }
}
