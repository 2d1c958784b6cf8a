//! A module containing [`SinglyLinkedList`] and associated types.
//!
//! Besides the list itself, this module provides [`Position`], a copyable handle to an element
//! (or to past-the-end) used for manual traversal, and the usual owned and borrowed iterators.
//!
//! [`SinglyLinkedList`] is also re-exported under the parent module.

mod iter;
mod length;
mod node;
mod position;
mod singly_linked_list;
mod tests;

pub use iter::*;
pub(crate) use length::*;
pub(crate) use node::*;
pub use position::*;
pub use singly_linked_list::*;
