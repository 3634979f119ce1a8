use std::cmp::Ordering;
use std::fmt::{self, Debug, Formatter};

pub(crate) struct Branch(pub Option<Box<Node>>);

pub(crate) struct Node {
    pub left: Branch,
    pub right: Branch,
    pub value: i32,
}

impl Branch {
    pub const fn empty() -> Branch {
        Branch(None)
    }

    pub fn insert(&mut self, value: i32) {
        match &mut self.0 {
            Some(node) => match value.cmp(&node.value) {
                // Equal values descend left, so duplicates pile up below the first copy.
                Ordering::Greater => node.right.insert(value),
                _ => node.left.insert(value),
            },
            None => {
                self.0 = Some(Box::new(Node {
                    left: Branch(None),
                    right: Branch(None),
                    value,
                }));
            },
        }
    }

    pub fn find(&self, value: i32) -> Option<&i32> {
        match &self.0 {
            Some(node) => match value.cmp(&node.value) {
                Ordering::Equal => Some(&node.value),
                Ordering::Less => node.left.find(value),
                Ordering::Greater => node.right.find(value),
            },
            None => None,
        }
    }

    pub fn contains(&self, value: i32) -> bool {
        self.find(value).is_some()
    }

    pub fn in_order(&self, visit: &mut impl FnMut(i32)) {
        if let Some(node) = &self.0 {
            node.left.in_order(visit);
            visit(node.value);
            node.right.in_order(visit);
        }
    }
}

impl Debug for Branch {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match &self.0 {
            Some(node) => write!(
                f,
                "{}\n({})\n{}",
                format!("{:?}", node.left)
                    .lines()
                    .map(|l| String::from("┌    ") + l)
                    .collect::<Vec<_>>()
                    .join("\n"),
                node.value,
                format!("{:?}", node.right)
                    .lines()
                    .map(|l| String::from("└    ") + l)
                    .collect::<Vec<_>>()
                    .join("\n")
            ),
            None => write!(f, "-"),
        }
    }
}
