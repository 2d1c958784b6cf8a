//! Various general-purpose collection types.
//!
//! # Purpose
//! These types exist to explore the data structures themselves, along with concepts such as
//! pointers, ownership of heap allocations and iterators.

#[cfg(feature = "linked")]
pub mod linked;
