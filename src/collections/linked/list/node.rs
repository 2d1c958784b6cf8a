use std::ptr::NonNull;

pub(crate) type Link<T> = Option<NodePtr<T>>;

// NOTE: Nodes are allocated with Box<T> and leaked into a NonNull, because Box<T> has the special
// property that dereferencing it allows a value to be moved back out of the heap.

/// A non-owning handle to a heap allocated [`Node`]. Ownership of the allocation belongs to the
/// list that created it; the handle itself is freely copied.
#[derive(Debug)]
pub(crate) struct NodePtr<T>(NonNull<Node<T>>);

impl<T> NodePtr<T> {
    /// The returned lifetime is unbounded, callers must tie it to a borrow of the owning list.
    pub(crate) fn value<'a>(&self) -> &'a T {
        // SAFETY: The node is live for as long as it remains linked into its list.
        unsafe { &(*self.0.as_ptr()).value }
    }

    /// The returned lifetime is unbounded, callers must tie it to a mutable borrow of the owning
    /// list.
    pub(crate) fn value_mut<'a>(&mut self) -> &'a mut T {
        // SAFETY: The node is live for as long as it remains linked into its list.
        unsafe { &mut (*self.0.as_ptr()).value }
    }

    pub(crate) fn next<'a>(&self) -> &'a Link<T> {
        // SAFETY: The node is live for as long as it remains linked into its list.
        unsafe { &(*self.0.as_ptr()).next }
    }

    #[allow(clippy::mut_from_ref)]
    pub(crate) fn next_mut<'a>(&self) -> &'a mut Link<T> {
        // SAFETY: The node is live for as long as it remains linked into its list, and the list
        // only ever links to a node from one place.
        unsafe { &mut (*self.0.as_ptr()).next }
    }

    pub(crate) fn from_node(node: Node<T>) -> NodePtr<T> {
        NodePtr(NonNull::from(Box::leak(Box::new(node))))
    }

    /// Reclaims the allocation and moves the node out of it.
    ///
    /// # Safety
    /// The node must not be read through this or any other copy of the pointer afterwards.
    pub(crate) unsafe fn take_node(self) -> Node<T> {
        // SAFETY: The pointer came from Box::leak in from_node and the caller guarantees that it
        // isn't used again.
        unsafe { *Box::from_raw(self.0.as_ptr()) }
    }

    /// Drops the node and its value in place, freeing the allocation.
    ///
    /// # Safety
    /// The node must not be read through this or any other copy of the pointer afterwards.
    pub(crate) unsafe fn drop_node(self) {
        // SAFETY: As for take_node.
        drop(unsafe { Box::from_raw(self.0.as_ptr()) });
    }
}

impl<T> Clone for NodePtr<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for NodePtr<T> {}

impl<T> PartialEq for NodePtr<T> {
    fn eq(&self, other: &Self) -> bool {
        self.0 == other.0
    }
}

impl<T> Eq for NodePtr<T> {}

pub(crate) struct Node<T> {
    pub value: T,
    pub next: Link<T>,
}
