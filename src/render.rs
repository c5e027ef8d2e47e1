//! Text encodings shared by the tree types.
//!
//! Indented form, one node per line, pre-order:
//! ```text
//! [5, 1]
//!     L: [3, 1]
//!     R: [8, 1]
//!         R: [9, 2]
//! ```
//! Nested form: `([key,value],<left>,<right>)` with empty subtrees left blank,
//! e.g. `([5,1],([3,1],,),([8,1],,([9,2],,)))`.

use std::fmt::{self, Display, Write};

const INDENT: &str = "    ";

/// Read-only view of a binary tree node.
pub(crate) trait BinaryNode {
    type Key;
    type Value;

    fn key(&self) -> &Self::Key;
    fn value(&self) -> &Self::Value;
    fn left(&self) -> Option<&Self>;
    fn right(&self) -> Option<&Self>;
}

pub(crate) fn write_indented<N, W>(out: &mut W, root: &N) -> fmt::Result
where
    N: BinaryNode,
    N::Key: Display,
    N::Value: Display,
    W: Write,
{
    // (node, depth, tag); right pushed before left so left is written first
    let mut stack: Vec<(&N, usize, &str)> = vec![(root, 0, "")];
    let mut indent = String::new();
    while let Some((node, depth, tag)) = stack.pop() {
        while indent.len() < depth * INDENT.len() {
            indent.push_str(INDENT);
        }
        out.write_str(&indent[..depth * INDENT.len()])?;
        writeln!(out, "{tag}[{}, {}]", node.key(), node.value())?;
        if let Some(right) = node.right() {
            stack.push((right, depth + 1, "R: "));
        }
        if let Some(left) = node.left() {
            stack.push((left, depth + 1, "L: "));
        }
    }
    Ok(())
}

enum Step<'a, N> {
    Open(&'a N),
    Close(char),
}

pub(crate) fn write_nested<N, W>(out: &mut W, root: &N) -> fmt::Result
where
    N: BinaryNode,
    N::Key: Display,
    N::Value: Display,
    W: Write,
{
    let mut stack = vec![Step::Open(root)];
    while let Some(step) = stack.pop() {
        match step {
            Step::Open(node) => {
                write!(out, "([{},{}],", node.key(), node.value())?;
                stack.push(Step::Close(')'));
                stack.extend(node.right().map(Step::Open));
                stack.push(Step::Close(','));
                stack.extend(node.left().map(Step::Open));
            }
            Step::Close(c) => out.write_char(c)?,
        }
    }
    Ok(())
}

pub(crate) fn nested_string<N>(root: Option<&N>) -> String
where
    N: BinaryNode,
    N::Key: Display,
    N::Value: Display,
{
    let mut result = String::new();
    if let Some(node) = root {
        // Writing into a String cannot fail.
        let _ = write_nested(&mut result, node);
    }
    result
}
