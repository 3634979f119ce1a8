use std::fmt::{self, Debug, Display, Formatter};
use std::mem;

use derive_more::IsVariant;

use super::{Iter, Node, NodeRef};

/// A first-in-first-out queue of [`i32`] values over a singly-linked chain of nodes.
///
/// Values enter at the tail with [`enqueue`](Queue::enqueue) and leave at the head with
/// [`dequeue`](Queue::dequeue); both are `O(1)`. An empty queue reports removal as [`None`]
/// rather than faulting.
pub struct Queue {
    pub(crate) state: QueueState,
}

#[derive(Default, IsVariant)]
pub(crate) enum QueueState {
    #[default]
    Empty,
    Full(QueueContents),
}

use QueueState::*;

pub(crate) struct QueueContents {
    pub len: usize,
    pub head: NodeRef,
    pub tail: NodeRef,
}

impl Queue {
    /// Creates a new Queue with no elements.
    pub const fn new() -> Queue {
        Queue { state: Empty }
    }

    /// Returns the number of values waiting in the queue.
    pub const fn len(&self) -> usize {
        match &self.state {
            Empty => 0,
            Full(QueueContents { len, .. }) => *len,
        }
    }

    /// Returns true if the queue contains no values.
    pub const fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Appends `value` at the tail of the queue.
    pub fn enqueue(&mut self, value: i32) {
        match &mut self.state {
            Empty => self.state = QueueState::single(value),
            Full(contents) => {
                let node = NodeRef::from_node(Node { value, next: None });
                *contents.tail.next_mut() = Some(node);
                contents.tail = node;
                contents.len += 1;
            },
        }
    }

    /// Removes and returns the value at the head of the queue, or [`None`] if it is empty.
    pub fn dequeue(&mut self) -> Option<i32> {
        match &mut self.state {
            Empty => None,
            Full(contents) => {
                let node = contents.head.take_node();
                match node.next {
                    Some(next) => {
                        contents.head = next;
                        contents.len -= 1;
                    },
                    None => self.state = Empty,
                }
                Some(node.value)
            },
        }
    }

    /// Returns a reference to the value at the head of the queue without removing it.
    pub fn peek(&self) -> Option<&i32> {
        match &self.state {
            Empty => None,
            Full(contents) => Some(contents.head.value()),
        }
    }

    /// Removes every value, leaving the queue empty but usable.
    pub fn clear(&mut self) {
        if let Full(contents) = mem::take(&mut self.state) {
            let mut curr = Some(contents.head);
            while let Some(node) = curr {
                curr = node.take_node().next;
            }
        }
    }

    /// Returns an iterator over the queued values, head to tail.
    pub fn iter(&self) -> Iter<'_> {
        self.into_iter()
    }
}

impl QueueState {
    pub fn single(value: i32) -> QueueState {
        let node = NodeRef::from_node(Node { value, next: None });
        Full(QueueContents {
            len: 1,
            head: node,
            tail: node,
        })
    }
}

impl Default for Queue {
    fn default() -> Self {
        Self::new()
    }
}

impl Drop for Queue {
    fn drop(&mut self) {
        self.clear();
    }
}

impl FromIterator<i32> for Queue {
    fn from_iter<I: IntoIterator<Item = i32>>(iter: I) -> Self {
        let mut queue = Queue::new();
        for value in iter {
            queue.enqueue(value);
        }
        queue
    }
}

impl PartialEq for Queue {
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len() && self.iter().eq(other.iter())
    }
}

impl Eq for Queue {}

impl Debug for Queue {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl Display for Queue {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "({})",
            self.iter()
                .map(|i| format!("{i:?}"))
                .collect::<Vec<_>>()
                .join(") -> (")
        )
    }
}
