//! Rebalancing for [`RedBlackTree`]: the bottom-up recoloring loop and the two rotation
//! primitives it is built from.

use std::mem;

use super::{Color, Link, NodeRef, RedBlackTree};

/// Rotates `node` up and to the left, above `parent`.
///
/// `grandparent` receives `node` in place of `parent` on whichever side it held it; when
/// `grandparent` is `None`, `parent` was the root and the tree's root slot is left stale - the
/// caller re-derives the root once the rebalancing loop settles.
pub(crate) fn rotate_left(node: NodeRef, parent: NodeRef, grandparent: Link) {
    if let Some(grandparent) = grandparent {
        if *grandparent.right() == Some(parent) {
            *grandparent.right_mut() = Some(node);
        } else {
            *grandparent.left_mut() = Some(node);
        }
    }
    *node.parent_mut() = grandparent;

    // The subtree node leaves behind moves across to fill parent's vacated side.
    *parent.right_mut() = *node.left();
    if let Some(moved) = *node.left() {
        *moved.parent_mut() = Some(parent);
    }

    *node.left_mut() = Some(parent);
    *parent.parent_mut() = Some(node);
}

/// Mirror image of [`rotate_left`]: rotates `node` up and to the right, above `parent`.
pub(crate) fn rotate_right(node: NodeRef, parent: NodeRef, grandparent: Link) {
    if let Some(grandparent) = grandparent {
        if *grandparent.right() == Some(parent) {
            *grandparent.right_mut() = Some(node);
        } else {
            *grandparent.left_mut() = Some(node);
        }
    }
    *node.parent_mut() = grandparent;

    *parent.left_mut() = *node.right();
    if let Some(moved) = *node.right() {
        *moved.parent_mut() = Some(parent);
    }

    *node.right_mut() = Some(parent);
    *parent.parent_mut() = Some(node);
}

/// Restores the coloring rules after `node` has been attached as a red leaf.
///
/// Walks upward while the parent is red. A red uncle means the violation can be pushed two
/// levels up by recoloring alone; a black or missing uncle needs a rotation (two for the zig-zag
/// shapes), after which the subtree's new top is black and the loop is done. Finally the root is
/// re-derived and forced black, covering both the recolored-to-the-top case and the
/// rotated-at-the-root case.
pub(crate) fn rebalance(tree: &mut RedBlackTree, mut node: NodeRef) {
    let mut parent = *node.parent();
    while let Some(mut up) = parent {
        if up.color().is_black() {
            break;
        }
        let Some(grandparent) = *up.parent() else {
            break;
        };
        let uncle = if *grandparent.left() == Some(up) {
            *grandparent.right()
        } else {
            *grandparent.left()
        };

        match uncle {
            Some(uncle) if uncle.color().is_red() => {
                grandparent.set_color(Color::Red);
                up.set_color(Color::Black);
                uncle.set_color(Color::Black);
                node = grandparent;
                parent = *node.parent();
            },
            _ => {
                if *grandparent.left() == Some(up) {
                    if *up.right() == Some(node) {
                        // Zig-zag: straighten into the left-left shape first.
                        rotate_left(node, up, Some(grandparent));
                        mem::swap(&mut node, &mut up);
                    }
                    up.set_color(Color::Black);
                    grandparent.set_color(Color::Red);
                    rotate_right(up, grandparent, *grandparent.parent());
                } else {
                    if *up.left() == Some(node) {
                        rotate_right(node, up, Some(grandparent));
                        mem::swap(&mut node, &mut up);
                    }
                    up.set_color(Color::Black);
                    grandparent.set_color(Color::Red);
                    rotate_left(up, grandparent, *grandparent.parent());
                }
                // The rotated-up node is black, so the next loop check terminates.
                parent = Some(up);
            },
        }
    }

    match parent {
        None => {
            tree.root = Some(node);
            node.set_color(Color::Black);
        },
        Some(parent) => {
            if parent.parent().is_none() {
                tree.root = Some(parent);
                parent.set_color(Color::Black);
            }
        },
    }
}
