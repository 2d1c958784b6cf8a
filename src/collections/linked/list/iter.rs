use std::fmt::{self, Debug, Formatter};
use std::iter::FusedIterator;
use std::marker::PhantomData;

use ListState::*;

use super::{ListContents, ListState, SinglyLinkedList};
use crate::util::option::OptionExtension;

impl<T> IntoIterator for SinglyLinkedList<T> {
    type Item = T;

    type IntoIter = IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        IntoIter {
            list: self,
        }
    }
}

pub struct IntoIter<T> {
    // The iterator just holds the list and pops from the front, any elements that aren't consumed
    // are dropped along with the list.
    pub(crate) list: SinglyLinkedList<T>,
}

impl<T> Iterator for IntoIter<T> {
    type Item = T;

    fn next(&mut self) -> Option<Self::Item> {
        self.list.try_pop_front().ok()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.len(), Some(self.len()))
    }
}

impl<T> FusedIterator for IntoIter<T> {}

impl<T> ExactSizeIterator for IntoIter<T> {
    fn len(&self) -> usize {
        self.list.len()
    }
}

impl<T: Debug> Debug for IntoIter<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_tuple("IntoIter").field(&self.list.iter()).finish()
    }
}

impl<'a, T> IntoIterator for &'a mut SinglyLinkedList<T> {
    type Item = &'a mut T;

    type IntoIter = IterMut<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        IterMut {
            state: self.state.clone(),
            _phantom: PhantomData,
        }
    }
}

pub struct IterMut<'a, T> {
    // Although the fields are exactly the same as a list, this structure doesn't modify the
    // underlying nodes and uses len to track the number of items left to yield.
    pub(crate) state: ListState<T>,
    pub(crate) _phantom: PhantomData<&'a mut T>,
}

impl<'a, T> Iterator for IterMut<'a, T> {
    type Item = &'a mut T;

    fn next(&mut self) -> Option<Self::Item> {
        match &mut self.state {
            Empty => None,
            Full(ListContents { len, head, .. }) => {
                let value = head.value_mut();

                match len.shrink() {
                    Some(new_len) => {
                        // SAFETY: Previous length is greater than 1, so the current element is
                        // followed by at least one more.
                        *head = unsafe { head.next().unreachable() };
                        *len = new_len;
                    },
                    None => self.state = Empty,
                }

                Some(value)
            },
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.len(), Some(self.len()))
    }
}

impl<T> FusedIterator for IterMut<'_, T> {}

impl<T> ExactSizeIterator for IterMut<'_, T> {
    fn len(&self) -> usize {
        self.state.len()
    }
}

impl<'a, T> IntoIterator for &'a SinglyLinkedList<T> {
    type Item = &'a T;

    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        Iter {
            state: self.state.clone(),
            _phantom: PhantomData,
        }
    }
}

pub struct Iter<'a, T> {
    pub(crate) state: ListState<T>,
    pub(crate) _phantom: PhantomData<&'a T>,
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        match &mut self.state {
            Empty => None,
            Full(ListContents { len, head, .. }) => {
                let value = head.value();

                match len.shrink() {
                    Some(new_len) => {
                        // SAFETY: Previous length is greater than 1, so the current element is
                        // followed by at least one more.
                        *head = unsafe { head.next().unreachable() };
                        *len = new_len;
                    },
                    None => self.state = Empty,
                }

                Some(value)
            },
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.len(), Some(self.len()))
    }
}

impl<T> FusedIterator for Iter<'_, T> {}

impl<T> ExactSizeIterator for Iter<'_, T> {
    fn len(&self) -> usize {
        self.state.len()
    }
}

impl<T> Clone for Iter<'_, T> {
    fn clone(&self) -> Self {
        Iter {
            state: self.state.clone(),
            _phantom: PhantomData,
        }
    }
}

impl<T: Debug> Debug for Iter<'_, T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.clone()).finish()
    }
}
