//! The collection types: linked and tree-shaped.
//!
//! # Purpose
//! Every structure here allocates one heap node per element and wires the nodes together by hand.
//! Writing them this way is what teaches the material - the node bookkeeping that a production
//! collection hides is exactly the part worth seeing.

#[cfg(feature = "linked")]
pub mod linked;
#[cfg(feature = "tree")]
pub mod tree;
