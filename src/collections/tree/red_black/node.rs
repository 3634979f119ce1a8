use std::fmt::{self, Debug, Formatter};
use std::ptr::NonNull;

use derive_more::{Display, IsVariant};

pub(crate) type Link = Option<NodeRef>;

/// The color of a single [`RedBlackTree`](super::RedBlackTree) node.
///
/// The coloring discipline is what keeps the tree balanced: the root is always black, a red node
/// never has a red child, and every root-to-leaf path passes the same number of black nodes.
#[derive(Debug, Display, Clone, Copy, PartialEq, Eq, IsVariant)]
pub enum Color {
    /// New nodes start red, which keeps black heights intact at the insertion point.
    #[display("R")]
    Red,
    /// Black nodes are the ones counted by the balance rule.
    #[display("B")]
    Black,
}

pub(crate) struct Node {
    pub color: Color,
    pub value: i32,
    pub left: Link,
    pub right: Link,
    /// Back-reference to the owning node. Only ever used to walk upward while rebalancing; the
    /// owning direction is strictly parent-to-child.
    pub parent: Link,
}

/// A copyable handle to a heap-allocated [`Node`].
///
/// The tree owns its nodes transitively from the root and releases them children-first, so every
/// handle read through the tree is backed by a live allocation.
#[derive(Debug)]
pub(crate) struct NodeRef(pub NonNull<Node>);

impl NodeRef {
    /// Allocates a fresh red leaf holding `value`, with no links attached yet.
    pub fn from_value(value: i32) -> NodeRef {
        NodeRef::from_node(Node {
            color: Color::Red,
            value,
            left: None,
            right: None,
            parent: None,
        })
    }

    pub fn from_node(node: Node) -> NodeRef {
        // SAFETY: Box::into_raw never returns null.
        NodeRef(unsafe { NonNull::new_unchecked(Box::into_raw(Box::new(node))) })
    }

    pub fn value<'a>(&self) -> &'a i32 {
        // SAFETY: The node is owned by a live tree, see the type docs.
        unsafe { &(*self.0.as_ptr()).value }
    }

    pub fn color(&self) -> Color {
        // SAFETY: The node is owned by a live tree, see the type docs.
        unsafe { (*self.0.as_ptr()).color }
    }

    pub fn set_color(&self, color: Color) {
        // SAFETY: The node is owned by a live tree, see the type docs.
        unsafe { (*self.0.as_ptr()).color = color; }
    }

    pub fn left<'a>(&self) -> &'a Link {
        // SAFETY: The node is owned by a live tree, see the type docs.
        unsafe { &(*self.0.as_ptr()).left }
    }

    #[allow(clippy::mut_from_ref)]
    pub fn left_mut<'a>(&self) -> &'a mut Link {
        // SAFETY: The node is owned by a live tree, see the type docs.
        unsafe { &mut (*self.0.as_ptr()).left }
    }

    pub fn right<'a>(&self) -> &'a Link {
        // SAFETY: The node is owned by a live tree, see the type docs.
        unsafe { &(*self.0.as_ptr()).right }
    }

    #[allow(clippy::mut_from_ref)]
    pub fn right_mut<'a>(&self) -> &'a mut Link {
        // SAFETY: The node is owned by a live tree, see the type docs.
        unsafe { &mut (*self.0.as_ptr()).right }
    }

    pub fn parent<'a>(&self) -> &'a Link {
        // SAFETY: The node is owned by a live tree, see the type docs.
        unsafe { &(*self.0.as_ptr()).parent }
    }

    #[allow(clippy::mut_from_ref)]
    pub fn parent_mut<'a>(&self) -> &'a mut Link {
        // SAFETY: The node is owned by a live tree, see the type docs.
        unsafe { &mut (*self.0.as_ptr()).parent }
    }

    /// Releases the node's storage.
    ///
    /// # Safety
    /// The handle must not be used again afterwards, and no other live handle may dereference
    /// this node. The tree upholds this by releasing nodes in post-order, children first.
    pub unsafe fn drop_node(self) {
        // SAFETY: Allocated via Box in from_node; exclusivity is the caller's obligation above.
        drop(unsafe { Box::from_raw(self.0.as_ptr()) });
    }
}

impl Clone for NodeRef {
    fn clone(&self) -> Self {
        *self
    }
}

impl Copy for NodeRef {}

impl PartialEq for NodeRef {
    fn eq(&self, other: &Self) -> bool {
        self.0 == other.0
    }
}

/// Renders a subtree sideways, one node per line, left children above their parent.
pub(crate) struct LinkFmt<'a>(pub &'a Link);

impl Debug for LinkFmt<'_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self.0 {
            Some(node) => write!(
                f,
                "{}\n({} {})\n{}",
                format!("{:?}", LinkFmt(node.left()))
                    .lines()
                    .map(|l| String::from("┌    ") + l)
                    .collect::<Vec<_>>()
                    .join("\n"),
                node.color(),
                node.value(),
                format!("{:?}", LinkFmt(node.right()))
                    .lines()
                    .map(|l| String::from("└    ") + l)
                    .collect::<Vec<_>>()
                    .join("\n")
            ),
            None => write!(f, "-"),
        }
    }
}
