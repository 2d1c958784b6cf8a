//! Linked collection types. Primarily revolves around [`SinglyLinkedList`] and its accompanying
//! [`Position`] type.

pub mod list;

#[doc(inline)]
pub use list::{Position, SinglyLinkedList};
