//! Classic in-place sorting routines over integer slices.
//!
//! Every module exposes a single `sort` function that reorders its input into ascending order
//! and nothing else: no return value, no allocation unless the algorithm inherently needs a
//! buffer ([`merge`]) or an auxiliary structure ([`tree`]). Slices of length 0 or 1 are returned
//! untouched.
//!
//! None of these are here to be fast - [`slice::sort_unstable`] exists - they are here to be
//! read. The quadratic ones ([`bubble`], [`gnome`], [`insertion`], [`selection`], [`shaker`])
//! make good contrast pieces for the `O(n log n)` [`merge`] and [`tree`] sorts.

pub mod bubble;
pub mod gnome;
pub mod insertion;
pub mod merge;
pub mod selection;
pub mod shaker;
pub mod tree;

mod tests;
