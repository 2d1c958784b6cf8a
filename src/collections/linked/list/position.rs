use std::fmt::{self, Debug, Formatter};
use std::marker::PhantomData;

use super::Link;
use crate::util::error::PastTheEnd;
use crate::util::result::ResultExtension;

/// A handle to a single element of a [`SinglyLinkedList`](super::SinglyLinkedList), or to the
/// position past its last element.
///
/// Positions are [`Copy`] and compare equal when they refer to the same node, so two positions can
/// walk the same list independently. A position borrows its list, which prevents the list from
/// being modified while the position is still in use.
///
/// The default position is past-the-end, and is equal to the
/// [`end`](super::SinglyLinkedList::end) of any list.
pub struct Position<'a, T> {
    pub(crate) node: Link<T>,
    pub(crate) _phantom: PhantomData<&'a T>,
}

impl<'a, T> Position<'a, T> {
    /// Returns true if this position is past the end of its list.
    pub const fn is_end(&self) -> bool {
        self.node.is_none()
    }

    /// Returns a reference to the element at this position.
    ///
    /// # Panics
    /// Panics if the position is past the end of the list.
    pub fn get(&self) -> &'a T {
        self.try_get().throw()
    }

    /// Returns a reference to the element at this position, or a [`PastTheEnd`] error.
    pub fn try_get(&self) -> Result<&'a T, PastTheEnd> {
        match self.node {
            Some(node) => Ok(node.value()),
            None => Err(PastTheEnd),
        }
    }

    /// Moves this position to the next element of the list, or past the end if it was at the last
    /// element.
    ///
    /// # Panics
    /// Panics if the position is already past the end of the list.
    pub fn move_next(&mut self) {
        self.try_move_next().throw()
    }

    /// Moves this position to the next element of the list, or returns a [`PastTheEnd`] error if
    /// there is nowhere left to go.
    pub fn try_move_next(&mut self) -> Result<(), PastTheEnd> {
        match self.node {
            Some(node) => {
                self.node = *node.next();
                Ok(())
            },
            None => Err(PastTheEnd),
        }
    }
}

impl<T> Default for Position<'_, T> {
    fn default() -> Self {
        Position {
            node: None,
            _phantom: PhantomData,
        }
    }
}

impl<T> Clone for Position<'_, T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for Position<'_, T> {}

impl<T> PartialEq for Position<'_, T> {
    fn eq(&self, other: &Self) -> bool {
        self.node == other.node
    }
}

impl<T> Eq for Position<'_, T> {}

impl<T: Debug> Debug for Position<'_, T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self.node {
            Some(node) => f.debug_tuple("Position").field(node.value()).finish(),
            None => f.write_str("Position(End)"),
        }
    }
}
