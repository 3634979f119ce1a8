#![cfg(test)]

use super::*;

fn collect_in_order(tree: &BinarySearchTree) -> Vec<i32> {
    let mut values = Vec::new();
    tree.traverse_in_order(|value| values.push(value));
    values
}

#[test]
fn test_insert_find_contains() {
    let mut tree = BinarySearchTree::new();
    for value in [8, 3, 10, 1, 6, 14, 4, 7, 13] {
        tree.insert(value);
    }

    assert_eq!(tree.len(), 9);
    assert_eq!(tree.find(6), Some(&6));
    assert_eq!(
        tree.find(5),
        None,
        "A value that was never inserted should not be found."
    );
    assert!(tree.contains(13));
    assert!(!tree.contains(2));
}

#[test]
fn test_in_order_is_sorted() {
    let mut tree = BinarySearchTree::new();
    for value in [5, 9, 5, 0, -3, 12, 5, 9] {
        tree.insert(value);
    }

    assert_eq!(
        collect_in_order(&tree),
        [-3, 0, 5, 5, 5, 9, 9, 12],
        "In-order traversal should yield every value, duplicates included, in order."
    );
}

#[test]
fn test_duplicates_descend_left() {
    let mut tree = BinarySearchTree::new();
    tree.insert(5);
    tree.insert(5);

    let root = tree.root.0.as_ref().expect("the root was just inserted");
    assert!(
        root.left.0.is_some() && root.right.0.is_none(),
        "A value equal to the node under inspection should descend into its left subtree."
    );
}

#[test]
fn test_empty_tree() {
    let tree = BinarySearchTree::new();
    assert!(tree.is_empty());
    assert_eq!(tree.find(1), None);
    assert_eq!(
        collect_in_order(&tree),
        [],
        "Traversing an empty tree should visit nothing."
    );
}

#[test]
fn test_clear_leaves_a_usable_tree() {
    let mut tree = BinarySearchTree::new();
    for value in 1..=20 {
        tree.insert(value);
    }
    tree.clear();

    assert!(tree.is_empty());
    assert!(!tree.contains(7));

    tree.insert(2);
    assert_eq!(collect_in_order(&tree), [2]);
}
