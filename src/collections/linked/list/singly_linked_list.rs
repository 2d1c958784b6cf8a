use std::fmt::{self, Debug, Display, Formatter};
use std::hash::{Hash, Hasher};
use std::marker::PhantomData;
use std::mem;

use super::{Iter, IterMut, Length, Node, NodePtr, Position, ONE};
#[doc(inline)]
pub use crate::util::error::{CapacityOverflow, EmptyList, ListError, PastTheEnd};
use crate::util::option::OptionExtension;
use crate::util::result::ResultExtension;

/// A list with links in one direction, which still keeps track of both of its ends. See also:
/// [`Position`] for manual traversal.
///
/// # Time Complexity
/// For this analysis of time complexity, variables are defined as follows:
/// - `n`: The number of items in the SinglyLinkedList.
/// - `m`: The number of items in the second SinglyLinkedList.
///
/// | Method | Complexity |
/// |-|-|
/// | `len` | `O(1)` |
/// | `front/back` | `O(1)` |
/// | `push_front/back` | `O(1)` |
/// | `pop_front` | `O(1)` |
/// | `append` | `O(1)` |
/// | `clear` | `O(n)` |
/// | `clone` | `O(n)` |
/// | `clone_from` | `O(n+m)` |
/// | `contains` | `O(n)` |
/// | `has_duplicates` | `O(n^2)` |
///
/// There is no `pop_back`: the node before the tail can only be found by walking the whole list.
///
/// Operations which require an element (`front`, `back`, `pop_front` and their mutable
/// counterparts) panic when the list is empty. Each has a `try_` variant which returns an
/// [`EmptyList`] error instead.
pub struct SinglyLinkedList<T> {
    pub(crate) state: ListState<T>,
    pub(crate) _phantom: PhantomData<T>,
}

pub(crate) enum ListState<T> {
    Empty,
    Full(ListContents<T>),
}

use ListState::*;

pub(crate) struct ListContents<T> {
    pub len: Length,
    pub head: NodePtr<T>,
    pub tail: NodePtr<T>,
}

impl<T> SinglyLinkedList<T> {
    /// Creates a new SinglyLinkedList with no elements.
    pub const fn new() -> SinglyLinkedList<T> {
        SinglyLinkedList {
            state: Empty,
            _phantom: PhantomData,
        }
    }

    /// Returns the length of the SinglyLinkedList.
    pub const fn len(&self) -> usize {
        self.state.len()
    }

    /// Returns true if the SinglyLinkedList contains no elements.
    pub const fn is_empty(&self) -> bool {
        matches!(self.state, Empty)
    }

    /// Returns a reference to the first element in the list.
    ///
    /// # Panics
    /// Panics if the list is empty.
    ///
    /// # Examples
    /// ```
    /// # use forward_list::collections::linked::SinglyLinkedList;
    /// let mut list = SinglyLinkedList::new();
    /// list.push_front(1);
    /// list.push_front(2);
    /// assert_eq!(*list.front(), 2);
    /// ```
    pub fn front(&self) -> &T {
        self.try_front().throw()
    }

    /// Returns a reference to the first element in the list, or an [`EmptyList`] error.
    pub fn try_front(&self) -> Result<&T, EmptyList> {
        match &self.state {
            Empty => Err(EmptyList),
            Full(ListContents { head, .. }) => Ok(head.value()),
        }
    }

    /// Returns a mutable reference to the first element in the list.
    ///
    /// # Panics
    /// Panics if the list is empty.
    pub fn front_mut(&mut self) -> &mut T {
        self.try_front_mut().throw()
    }

    /// Returns a mutable reference to the first element in the list, or an [`EmptyList`] error.
    pub fn try_front_mut(&mut self) -> Result<&mut T, EmptyList> {
        match &mut self.state {
            Empty => Err(EmptyList),
            Full(ListContents { head, .. }) => Ok(head.value_mut()),
        }
    }

    /// Returns a reference to the last element in the list.
    ///
    /// # Panics
    /// Panics if the list is empty.
    ///
    /// # Examples
    /// ```
    /// # use forward_list::collections::linked::SinglyLinkedList;
    /// let mut list = SinglyLinkedList::new();
    /// list.push_front(1);
    /// list.push_front(2);
    /// assert_eq!(*list.back(), 1);
    /// ```
    pub fn back(&self) -> &T {
        self.try_back().throw()
    }

    /// Returns a reference to the last element in the list, or an [`EmptyList`] error.
    pub fn try_back(&self) -> Result<&T, EmptyList> {
        match &self.state {
            Empty => Err(EmptyList),
            Full(ListContents { tail, .. }) => Ok(tail.value()),
        }
    }

    /// Returns a mutable reference to the last element in the list.
    ///
    /// # Panics
    /// Panics if the list is empty.
    pub fn back_mut(&mut self) -> &mut T {
        self.try_back_mut().throw()
    }

    /// Returns a mutable reference to the last element in the list, or an [`EmptyList`] error.
    pub fn try_back_mut(&mut self) -> Result<&mut T, EmptyList> {
        match &mut self.state {
            Empty => Err(EmptyList),
            Full(ListContents { tail, .. }) => Ok(tail.value_mut()),
        }
    }

    /// Add the provided element to the front of the SinglyLinkedList.
    ///
    /// # Panics
    /// Panics if the length of the list would overflow a [`usize`].
    pub fn push_front(&mut self, value: T) {
        match &mut self.state {
            Empty => self.state = ListState::single(value),
            Full(contents) => contents.push_front(value),
        }
    }

    /// Add the provided element to the back of the SinglyLinkedList.
    ///
    /// # Panics
    /// Panics if the length of the list would overflow a [`usize`].
    pub fn push_back(&mut self, value: T) {
        match &mut self.state {
            Empty => self.state = ListState::single(value),
            Full(contents) => contents.push_back(value),
        }
    }

    /// Removes the first element from the list and returns it.
    ///
    /// # Panics
    /// Panics if the list is empty.
    ///
    /// # Examples
    /// ```
    /// # use forward_list::collections::linked::SinglyLinkedList;
    /// let mut list = SinglyLinkedList::new();
    /// list.push_front(1);
    /// list.push_front(2);
    /// assert_eq!(list.pop_front(), 2);
    /// assert_eq!(*list.front(), 1);
    /// ```
    pub fn pop_front(&mut self) -> T {
        self.try_pop_front().throw()
    }

    /// Removes the first element from the list and returns it, or returns an [`EmptyList`] error.
    pub fn try_pop_front(&mut self) -> Result<T, EmptyList> {
        match &mut self.state {
            Empty => Err(EmptyList),
            Full(ListContents { len, head, .. }) => {
                // SAFETY: The old head is replaced below, so nothing refers to it afterwards.
                let node = unsafe { head.take_node() };

                match len.shrink() {
                    Some(new_len) => {
                        // SAFETY: Previous length is greater than 1, so the first element is
                        // followed by at least one more.
                        *head = unsafe { node.next.unreachable() };
                        *len = new_len;
                    },
                    // The tail was the same node as the head, so it goes with it.
                    None => self.state = Empty,
                }

                Ok(node.value)
            },
        }
    }

    /// Drops every element in the list, leaving it empty.
    pub fn clear(&mut self) {
        *self = SinglyLinkedList::new();
    }

    /// Moves all of the elements of `other` onto the back of this list, without reallocating any
    /// nodes.
    ///
    /// # Panics
    /// Panics if the combined length would overflow a [`usize`].
    pub fn append(&mut self, mut other: SinglyLinkedList<T>) {
        match mem::take(&mut other.state) {
            Empty => {},
            Full(other_contents) => match &mut self.state {
                Empty => self.state = Full(other_contents),
                Full(self_contents) => {
                    self_contents.len = self_contents.len.grow(other_contents.len.get()).throw();

                    *self_contents.tail.next_mut() = Some(other_contents.head);
                    self_contents.tail = other_contents.tail;
                },
            },
        }
    }

    /// Returns a [`Position`] at the first element of the list, or [`end`](Self::end) if the list
    /// is empty.
    ///
    /// # Examples
    /// ```
    /// # use forward_list::collections::linked::SinglyLinkedList;
    /// let list = SinglyLinkedList::from_iter([1, 2]);
    /// let mut pos = list.begin();
    /// assert_eq!(*pos.get(), 1);
    /// pos.move_next();
    /// assert_eq!(*pos.get(), 2);
    /// pos.move_next();
    /// assert_eq!(pos, list.end());
    /// ```
    pub fn begin(&self) -> Position<'_, T> {
        Position {
            node: match &self.state {
                Empty => None,
                Full(ListContents { head, .. }) => Some(*head),
            },
            _phantom: PhantomData,
        }
    }

    /// Returns the past-the-end [`Position`] of the list.
    pub fn end(&self) -> Position<'_, T> {
        Position::default()
    }

    pub fn iter_mut(&mut self) -> IterMut<'_, T> {
        self.into_iter()
    }

    pub fn iter(&self) -> Iter<'_, T> {
        self.into_iter()
    }
}

impl<T: PartialEq> SinglyLinkedList<T> {
    pub fn contains(&self, item: &T) -> bool {
        for i in self.iter() {
            if i == item { return true; }
        }
        false
    }

    /// Returns true if any two elements of the list compare equal.
    ///
    /// # Examples
    /// ```
    /// # use forward_list::collections::linked::SinglyLinkedList;
    /// assert!(!SinglyLinkedList::from_iter([1, 2, 3]).has_duplicates());
    /// assert!(SinglyLinkedList::from_iter([1, 2, 1]).has_duplicates());
    /// ```
    pub fn has_duplicates(&self) -> bool {
        let mut i = self.begin();
        while !i.is_end() {
            let mut j = i;
            j.move_next();
            while !j.is_end() {
                if i.get() == j.get() { return true; }
                j.move_next();
            }
            i.move_next();
        }
        false
    }
}

impl<T> SinglyLinkedList<T> {
    /// Walks the list, checking that the length matches the number of nodes and that the tail is
    /// the last node reachable from the head.
    #[allow(dead_code)]
    pub(crate) fn verify_links(&self) {
        match &self.state {
            Empty => {},
            Full(ListContents { len, head, tail }) => {
                let mut count = 1;
                let mut curr = *head;
                while let Some(next) = curr.next() {
                    curr = *next;
                    count += 1;
                }
                assert!(*tail == curr, "tail should be the last reachable node");
                assert_eq!(len.get(), count, "length should match the number of nodes");
            },
        }
    }
}

impl<T> ListContents<T> {
    pub fn push_front(&mut self, value: T) {
        self.len = self.len.grow(1).throw();

        self.head = NodePtr::from_node(Node {
            value,
            next: Some(self.head),
        });
    }

    pub fn push_back(&mut self, value: T) {
        self.len = self.len.grow(1).throw();

        let node = NodePtr::from_node(Node {
            value,
            next: None,
        });

        *self.tail.next_mut() = Some(node);
        self.tail = node;
    }

    pub fn wrap_one(value: T) -> ListContents<T> {
        let node = NodePtr::from_node(Node {
            value,
            next: None,
        });

        ListContents {
            len: ONE,
            head: node,
            tail: node,
        }
    }
}

impl<T> ListState<T> {
    pub fn single(value: T) -> ListState<T> {
        Full(ListContents::wrap_one(value))
    }

    pub const fn len(&self) -> usize {
        match self {
            Empty => 0,
            Full(ListContents { len, .. }) => len.get(),
        }
    }
}

impl<T> Default for ListState<T> {
    fn default() -> Self {
        Empty
    }
}

// Copies only the pointers, used by the borrowed iterators to track their progress.
impl<T> Clone for ListContents<T> {
    fn clone(&self) -> Self {
        ListContents {
            len: self.len,
            head: self.head,
            tail: self.tail,
        }
    }
}

impl<T> Clone for ListState<T> {
    fn clone(&self) -> Self {
        match self {
            Empty => Empty,
            Full(contents) => Full(contents.clone()),
        }
    }
}

impl<T> FromIterator<T> for SinglyLinkedList<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut list = SinglyLinkedList::new();
        list.extend(iter);
        list
    }
}

impl<T> Extend<T> for SinglyLinkedList<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for item in iter {
            self.push_back(item);
        }
    }
}

impl<'a, T: Copy + 'a> Extend<&'a T> for SinglyLinkedList<T> {
    fn extend<I: IntoIterator<Item = &'a T>>(&mut self, iter: I) {
        self.extend(iter.into_iter().copied());
    }
}

impl<T: Clone> Clone for SinglyLinkedList<T> {
    fn clone(&self) -> Self {
        self.iter().cloned().collect()
    }

    fn clone_from(&mut self, source: &Self) {
        self.clear();
        self.extend(source.iter().cloned());
    }
}

impl<T> Default for SinglyLinkedList<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Drop for SinglyLinkedList<T> {
    fn drop(&mut self) {
        match self.state {
            Empty => {},
            Full(ListContents { head, .. }) => {
                let mut curr = Some(head);
                while let Some(ptr) = curr {
                    curr = *ptr.next();
                    // SAFETY: The next link was read above and nothing else refers to this node.
                    unsafe { ptr.drop_node(); }
                }
            },
        }
    }
}

// SAFETY: The list owns its nodes exclusively, just like a Box<T> per element.
unsafe impl<T: Send> Send for SinglyLinkedList<T> {}

// SAFETY: Shared access to the list only ever hands out shared references to elements.
unsafe impl<T: Sync> Sync for SinglyLinkedList<T> {}

impl<T: PartialEq> PartialEq for SinglyLinkedList<T> {
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len() && self.iter().eq(other.iter())
    }
}

impl<T: Eq> Eq for SinglyLinkedList<T> {}

impl<T: Hash> Hash for SinglyLinkedList<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        // Prefix with the length to terminate the variable length hashing sequence.
        self.len().hash(state);
        for item in self.iter() {
            item.hash(state);
        }
    }
}

impl<T: Debug> Debug for SinglyLinkedList<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("SinglyLinkedList")
            .field("contents", &self.iter())
            .field("len", &self.len())
            .finish()
    }
}

/// Writes each element separated by a single space, e.g. `1 2 3`.
impl<T: Display> Display for SinglyLinkedList<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let mut iter = self.iter();
        if let Some(first) = iter.next() {
            write!(f, "{first}")?;
            for item in iter {
                write!(f, " {item}")?;
            }
        }
        Ok(())
    }
}
