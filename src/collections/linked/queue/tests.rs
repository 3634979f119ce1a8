#![cfg(test)]

use super::*;

#[test]
fn test_fifo_ordering() {
    let mut queue = Queue::new();
    queue.enqueue(1);
    queue.enqueue(2);
    queue.enqueue(3);

    assert_eq!(queue.len(), 3);
    assert_eq!(
        queue.dequeue(),
        Some(1),
        "Values should leave the queue in the order they entered."
    );
    assert_eq!(queue.dequeue(), Some(2));

    queue.enqueue(4);
    assert_eq!(queue.dequeue(), Some(3));
    assert_eq!(queue.dequeue(), Some(4));
    assert_eq!(
        queue.dequeue(),
        None,
        "An empty queue should report removal as None rather than faulting."
    );
}

#[test]
fn test_peek_is_non_destructive() {
    let mut queue = Queue::new();
    assert_eq!(queue.peek(), None);

    queue.enqueue(7);
    queue.enqueue(9);
    assert_eq!(queue.peek(), Some(&7));
    assert_eq!(queue.peek(), Some(&7), "Peeking should not remove the head.");
    assert_eq!(queue.len(), 2);
    assert_eq!(queue.dequeue(), Some(7));
    assert_eq!(queue.peek(), Some(&9));
}

#[test]
fn test_emptying_and_refilling() {
    let mut queue = Queue::new();
    assert!(queue.is_empty());

    queue.enqueue(1);
    assert_eq!(queue.dequeue(), Some(1));
    assert!(
        queue.state.is_empty(),
        "Dequeueing the last value should release the contents entirely."
    );

    queue.enqueue(2);
    assert_eq!(queue.peek(), Some(&2), "A drained queue should refill cleanly.");
}

#[test]
fn test_iteration() {
    let queue = Queue::from_iter([3, 1, 4, 1, 5]);

    assert_eq!(queue.iter().copied().collect::<Vec<_>>(), [3, 1, 4, 1, 5]);
    assert_eq!(
        queue.len(),
        5,
        "Iteration should leave the queue untouched."
    );
    assert_eq!(queue, Queue::from_iter([3, 1, 4, 1, 5]));
}

#[test]
fn test_clear() {
    let mut queue = Queue::from_iter(0..100);
    queue.clear();

    assert!(queue.is_empty());
    assert_eq!(queue.dequeue(), None);

    queue.enqueue(1);
    assert_eq!(queue.len(), 1);
}

#[test]
fn test_display_format() {
    let queue = Queue::from_iter([1, 2, 3]);
    assert_eq!(format!("{queue}"), "(1) -> (2) -> (3)");
}
