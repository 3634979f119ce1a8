//! The traversal orders. Each public traversal walks the whole tree on every call, invoking the
//! visitor once per node; the walks are not resumable or interruptible.

use super::{Link, NodeRef, RedBlackTree};

pub(crate) fn in_order(link: Link, visit: &mut impl FnMut(NodeRef)) {
    if let Some(node) = link {
        in_order(*node.left(), visit);
        visit(node);
        in_order(*node.right(), visit);
    }
}

pub(crate) fn out_order(link: Link, visit: &mut impl FnMut(NodeRef)) {
    if let Some(node) = link {
        out_order(*node.right(), visit);
        visit(node);
        out_order(*node.left(), visit);
    }
}

pub(crate) fn pre_order(link: Link, visit: &mut impl FnMut(NodeRef)) {
    if let Some(node) = link {
        visit(node);
        pre_order(*node.left(), visit);
        pre_order(*node.right(), visit);
    }
}

pub(crate) fn post_order(link: Link, visit: &mut impl FnMut(NodeRef)) {
    if let Some(node) = link {
        post_order(*node.left(), visit);
        post_order(*node.right(), visit);
        visit(node);
    }
}

impl RedBlackTree {
    /// Visits every value in ascending order: left subtree, node, right subtree.
    pub fn traverse_in_order(&self, mut visit: impl FnMut(i32)) {
        in_order(self.root, &mut |node| visit(*node.value()));
    }

    /// Visits every value in descending order: right subtree, node, left subtree. The exact
    /// reverse of [`traverse_in_order`](RedBlackTree::traverse_in_order).
    pub fn traverse_out_order(&self, mut visit: impl FnMut(i32)) {
        out_order(self.root, &mut |node| visit(*node.value()));
    }

    /// Visits each node before either of its subtrees.
    pub fn traverse_pre_order(&self, mut visit: impl FnMut(i32)) {
        pre_order(self.root, &mut |node| visit(*node.value()));
    }

    /// Visits each node after both of its subtrees. This is also the order teardown releases
    /// nodes in, since it reaches children before the links leading to them disappear.
    pub fn traverse_post_order(&self, mut visit: impl FnMut(i32)) {
        post_order(self.root, &mut |node| visit(*node.value()));
    }

    /// Breadth-first (level-order) traversal.
    ///
    /// Not implemented: the call is a no-op and the visitor is never invoked.
    // TODO: A level-order walk needs a work queue of node handles; the integer Queue in this
    // crate can't hold them.
    pub fn traverse_bfs(&self, _visit: impl FnMut(i32)) {}
}
