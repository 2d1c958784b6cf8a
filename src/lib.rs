//! A generic, singly-linked list which keeps track of both of its ends.
//!
//! # Purpose
//! This crate is a small exercise in writing a linked data structure by hand: nodes are allocated
//! individually and linked with raw pointers, rather than leaning on [`std::collections`]. The
//! list supports `O(1)` access to and insertion at both ends, `O(1)` removal from the front,
//! forward iteration and deep copies through [`Clone`].
//!
//! See [`SinglyLinkedList`](collections::linked::SinglyLinkedList) for the main type.
//!
//! # Error Handling
//! Reading from or popping an empty list is a precondition violation, so the plain methods panic
//! rather than forcing callers to handle a [`Result`] they have already ruled out by checking
//! `is_empty`. Every such method has a `try_` counterpart which returns a strongly typed error
//! instead: small structs (ZSTs) which implement [`Error`](std::error::Error), plus an enum,
//! [`ListError`](collections::linked::list::ListError), for static dispatch over all of them.
//!
//! # Dependencies
//! This crate uses `std` and depends on `derive_more` for the derive macros on its error types,
//! which remove the need for some very repetitive programming.

#![warn(clippy::missing_safety_doc)]
#![warn(clippy::undocumented_unsafe_blocks)]
#![warn(clippy::missing_const_for_fn)]
#![warn(clippy::missing_panics_doc)]
#![warn(clippy::unwrap_used)]
#![allow(clippy::module_inception)]

#[cfg(feature = "collections")]
pub mod collections;

pub(crate) mod util;
