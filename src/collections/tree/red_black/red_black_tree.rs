use std::cmp::Ordering;
use std::fmt::{self, Debug, Display, Formatter};

use super::{Color, Link, LinkFmt, NodeRef, post_order, rebalance};

/// A self-balancing binary search tree of [`i32`] values, balanced by node coloring.
///
/// Duplicate values are accepted and kept as separate nodes. The tree supports insertion, lookup
/// and the four depth-first traversal orders; there is no removal of individual values, only
/// [`clear`](RedBlackTree::clear).
///
/// # Time Complexity
/// The coloring rules bound the height at `2 * log2(n + 1)`, so insertion and lookup are `O(log
/// n)` even for adversarial insertion orders that degrade an unbalanced
/// [`BinarySearchTree`](crate::collections::tree::BinarySearchTree) to a list. Traversals visit
/// every node and are `O(n)`.
pub struct RedBlackTree {
    pub(crate) root: Link,
    pub(crate) len: usize,
}

impl RedBlackTree {
    /// Creates a new RedBlackTree with no elements.
    pub const fn new() -> RedBlackTree {
        RedBlackTree { root: None, len: 0 }
    }

    /// Returns the number of values stored in the tree, counting duplicates.
    pub const fn len(&self) -> usize {
        self.len
    }

    /// Returns true if the tree holds no values.
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Inserts `value` into the tree, rebalancing as required.
    ///
    /// The new node descends right on strictly greater comparisons and left otherwise, so a value
    /// equal to an existing one ends up in that node's left subtree. Inserting into an empty tree
    /// makes the new node the (black) root.
    pub fn insert(&mut self, value: i32) {
        self.len += 1;
        let node = NodeRef::from_value(value);
        match self.root {
            Some(root) => self.insert_leaf(root, node),
            None => {
                node.set_color(Color::Black);
                self.root = Some(node);
            },
        }
    }

    /// Attaches `node` as a leaf below `root`, then restores the coloring rules.
    fn insert_leaf(&mut self, root: NodeRef, node: NodeRef) {
        let mut parent = root;
        let value = *node.value();
        loop {
            match value.cmp(parent.value()) {
                Ordering::Greater => match *parent.right() {
                    Some(right) => parent = right,
                    None => {
                        *parent.right_mut() = Some(node);
                        *node.parent_mut() = Some(parent);
                        break;
                    },
                },
                _ => match *parent.left() {
                    Some(left) => parent = left,
                    None => {
                        *parent.left_mut() = Some(node);
                        *node.parent_mut() = Some(parent);
                        break;
                    },
                },
            }
        }

        rebalance(self, node);
    }

    /// Returns a reference to the stored value equal to `value`, if one exists.
    ///
    /// When duplicates are present, which one is found depends on the tree's current shape.
    pub fn find(&self, value: i32) -> Option<&i32> {
        let mut cursor = self.root;
        while let Some(node) = cursor {
            cursor = match value.cmp(node.value()) {
                Ordering::Equal => return Some(node.value()),
                Ordering::Less => *node.left(),
                Ordering::Greater => *node.right(),
            };
        }
        None
    }

    /// Returns true if `value` has been inserted into the tree.
    pub fn contains(&self, value: i32) -> bool {
        self.find(value).is_some()
    }

    /// Removes every value from the tree, leaving it empty but usable.
    ///
    /// Nodes are released children-first, the same walk the destructor uses.
    pub fn clear(&mut self) {
        post_order(self.root.take(), &mut |node| {
            // SAFETY: The walk hands out each node exactly once, after both of its subtrees have
            // already been released, and the root slot has been emptied.
            unsafe { node.drop_node() }
        });
        self.len = 0;
    }

    pub(crate) fn height(&self) -> usize {
        Self::subtree_height(self.root)
    }

    fn subtree_height(link: Link) -> usize {
        match link {
            Some(node) => {
                1 + Self::subtree_height(*node.left()).max(Self::subtree_height(*node.right()))
            },
            None => 0,
        }
    }

    /// Asserts the coloring rules and link bookkeeping over the whole tree: a black root with no
    /// parent, no red node with a red child, uniform black counts on every root-to-leaf path, and
    /// every child pointing back at its parent.
    pub(crate) fn verify_structure(&self) {
        if let Some(root) = self.root {
            assert!(root.color().is_black(), "The root must be black.");
            assert!(root.parent().is_none(), "The root must not have a parent.");
            Self::verify_subtree(root);
        }
    }

    /// Returns the black height of the subtree, panicking on any rule violation within it.
    fn verify_subtree(node: NodeRef) -> usize {
        let mut heights = [0, 0];
        for (side, child) in [*node.left(), *node.right()].into_iter().enumerate() {
            if let Some(child) = child {
                assert!(
                    *child.parent() == Some(node),
                    "Every child must point back at the node that owns it."
                );
                assert!(
                    node.color().is_black() || child.color().is_black(),
                    "A red node must not have a red child."
                );
                heights[side] = Self::verify_subtree(child);
            }
        }
        assert_eq!(
            heights[0], heights[1],
            "Both subtrees of a node must have the same black height."
        );
        heights[0] + usize::from(node.color().is_black())
    }
}

impl Default for RedBlackTree {
    fn default() -> Self {
        Self::new()
    }
}

impl Drop for RedBlackTree {
    fn drop(&mut self) {
        self.clear();
    }
}

impl Debug for RedBlackTree {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("RedBlackTree")
            .field("nodes", &format_args!("\n{:?}\n", LinkFmt(&self.root)))
            .field("len", &self.len)
            .finish()
    }
}

impl Display for RedBlackTree {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let mut values = Vec::with_capacity(self.len);
        self.traverse_in_order(|value| values.push(value));
        f.debug_set().entries(values).finish()
    }
}
