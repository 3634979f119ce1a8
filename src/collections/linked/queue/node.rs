use std::ptr::NonNull;

pub(crate) type Link = Option<NodeRef>;

// NOTE: Nodes are allocated through Box rather than raw alloc, because dereferencing a Box is
// allowed to move the value back out of the heap, which is exactly what dequeue wants.

#[derive(Debug)]
pub(crate) struct NodeRef(pub NonNull<Node>);

impl NodeRef {
    pub fn value<'a>(&self) -> &'a i32 {
        // SAFETY: Nodes are owned by a live queue and released only through take_node.
        unsafe { &(*self.0.as_ptr()).value }
    }

    pub fn next<'a>(&self) -> &'a Link {
        // SAFETY: Nodes are owned by a live queue and released only through take_node.
        unsafe { &(*self.0.as_ptr()).next }
    }

    #[allow(clippy::mut_from_ref)]
    pub fn next_mut<'a>(&self) -> &'a mut Link {
        // SAFETY: Nodes are owned by a live queue and released only through take_node.
        unsafe { &mut (*self.0.as_ptr()).next }
    }

    pub fn from_node(node: Node) -> NodeRef {
        // SAFETY: Box::into_raw never returns null.
        NodeRef(unsafe { NonNull::new_unchecked(Box::into_raw(Box::new(node))) })
    }

    /// Moves the node out of the heap, releasing its storage. Every other handle to this node is
    /// dangling afterwards and must not be used.
    pub fn take_node(self) -> Node {
        // SAFETY: Allocated via Box in from_node, and the queue never hands out two owning
        // handles to one node.
        unsafe { *Box::from_raw(self.0.as_ptr()) }
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

pub(crate) struct Node {
    pub value: i32,
    pub next: Link,
}
