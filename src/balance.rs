//! Rotation selection for restoring the AVL condition at a single node.

/// Rotation needed to restore balance at a node.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum Rotation {
    None,
    Left,
    Right,
    /// Rotate the left child left, then the node right.
    LeftRight,
    /// Rotate the right child right, then the node left.
    RightLeft,
}

impl Rotation {
    /// Maps a node's balance factor and the balance factor of its heavier child
    /// to the rotation that restores the AVL condition.
    ///
    /// Balance factors are `height(left) - height(right)`.
    /// `heavy_child_balance` is only inspected when the node is out of balance;
    /// it is the left child's balance factor if the node leans left
    /// and the right child's otherwise.
    pub(crate) fn classify(balance: isize, heavy_child_balance: isize) -> Self {
        if balance > 1 {
            if heavy_child_balance < 0 {
                Rotation::LeftRight
            } else {
                Rotation::Right
            }
        } else if balance < -1 {
            if heavy_child_balance > 0 {
                Rotation::RightLeft
            } else {
                Rotation::Left
            }
        } else {
            Rotation::None
        }
    }
}
