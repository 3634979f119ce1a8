use std::iter::FusedIterator;
use std::marker::PhantomData;

use super::{Link, Queue, QueueContents, QueueState};

impl<'a> IntoIterator for &'a Queue {
    type Item = &'a i32;

    type IntoIter = Iter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        Iter {
            next: match &self.state {
                QueueState::Empty => None,
                QueueState::Full(QueueContents { head, .. }) => Some(*head),
            },
            _phantom: PhantomData,
        }
    }
}

/// A borrowing iterator over a [`Queue`], yielding values head to tail.
pub struct Iter<'a> {
    next: Link,
    _phantom: PhantomData<&'a Queue>,
}

impl<'a> Iterator for Iter<'a> {
    type Item = &'a i32;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.next?;
        self.next = *node.next();
        Some(node.value())
    }
}

impl FusedIterator for Iter<'_> {}
