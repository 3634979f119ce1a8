#![cfg(test)]

use rand::Rng;

use super::*;

fn assert_sorts(name: &str, sort: fn(&mut [i32])) {
    let mut cases: Vec<Vec<i32>> = vec![
        vec![],
        vec![7],
        vec![2, 1],
        vec![5, 5, 5, 5],
        vec![1, 2, 3, 4, 5, 6],
        vec![6, 5, 4, 3, 2, 1],
        vec![3, 1, 4, 1, 5, 9, 2, 6, 5, 3, 5],
        vec![0, -3, 17, -3, 100, 2],
    ];

    let mut rng = rand::thread_rng();
    for _ in 0..5 {
        cases.push((0..40).map(|_| rng.gen_range(-100..100)).collect());
    }

    for mut case in cases {
        let mut expected = case.clone();
        expected.sort_unstable();
        sort(&mut case);
        assert_eq!(
            case, expected,
            "{name} sort should order every input ascending."
        );
    }
}

#[test]
fn test_bubble() {
    assert_sorts("Bubble", bubble::sort);
}

#[test]
fn test_gnome() {
    assert_sorts("Gnome", gnome::sort);
}

#[test]
fn test_insertion() {
    assert_sorts("Insertion", insertion::sort);
}

#[test]
fn test_merge() {
    assert_sorts("Merge", merge::sort);
}

#[test]
fn test_selection() {
    assert_sorts("Selection", selection::sort);
}

#[test]
fn test_shaker() {
    assert_sorts("Shaker", shaker::sort);
}

#[test]
fn test_tree() {
    assert_sorts("Tree", tree::sort);
}
