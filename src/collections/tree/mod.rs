//! Binary tree collection types: the self-balancing [`RedBlackTree`] and the unbalanced
//! [`BinarySearchTree`] it is usually compared against.

pub mod binary;
pub mod red_black;

#[doc(inline)]
pub use binary::BinarySearchTree;
#[doc(inline)]
pub use red_black::RedBlackTree;
