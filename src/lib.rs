//! A small collection of classic data structures and sorting algorithms.
//!
//! # Purpose
//! This crate exists as a learning exercise: each structure and algorithm here is one of the
//! textbook classics, written out by hand to understand it properly rather than to compete with
//! [`std::collections`]. The interesting part is the
//! [`RedBlackTree`](collections::tree::RedBlackTree), which is the only component in the crate
//! with real invariants to maintain; everything else (the unbalanced
//! [`BinarySearchTree`](collections::tree::BinarySearchTree), the [`Queue`](collections::linked::Queue)
//! and the [`sorting`] routines) is deliberately simple.
//!
//! # Method
//! Values throughout the crate are plain [`i32`]s. Keeping the element type concrete keeps the
//! pointer manipulation front and centre, which is the whole point of the exercise - generalising
//! over `T: Ord` would be mechanical and is intentionally out of scope.
//!
//! The linked structures manage their own heap nodes through [`NonNull`](std::ptr::NonNull)
//! handles, because the red-black tree needs non-owning parent links that an `Option<Box<_>>`
//! representation cannot express. The unbalanced tree never walks upward, so it gets the owned
//! `Box` representation instead.
//!
//! # Error Handling
//! There are no [`Result`]s in this crate. Lookup misses and empty-queue removals are ordinary
//! outcomes reported with [`Option`], and none of the operations have a failure mode beyond
//! running out of memory, which aborts. Structures release their nodes on drop, so there is no
//! dispose call to misuse.
//!
//! # Dependencies
//! Only derive macros, which remove some very repetitive trait impls. The test suite additionally
//! pulls in `rand` to generate inputs.

#![warn(clippy::missing_safety_doc)]
#![warn(clippy::undocumented_unsafe_blocks)]
#![warn(clippy::missing_const_for_fn)]
#![warn(clippy::missing_panics_doc)]
#![warn(clippy::unwrap_used)]
#![allow(clippy::module_inception)]

#[cfg(feature = "collections")]
pub mod collections;
#[cfg(feature = "sorting")]
pub mod sorting;
