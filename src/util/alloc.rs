use std::cell::RefCell;
use std::ops::Deref;
use std::rc::Rc;

/// A value that counts how many times it (or any of its clones) has been dropped.
#[derive(Debug, Clone)]
pub struct CountedDrop(pub Rc<RefCell<usize>>);

impl CountedDrop {
    pub fn new(value: usize) -> CountedDrop {
        CountedDrop(Rc::new(RefCell::new(value)))
    }

    /// Creates another value sharing this one's counter.
    pub fn share(&self) -> CountedDrop {
        CountedDrop(Rc::clone(&self.0))
    }

    pub fn count(&self) -> usize {
        *self.0.borrow()
    }
}

impl Deref for CountedDrop {
    type Target = Rc<RefCell<usize>>;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl PartialEq for CountedDrop {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }
}

impl Drop for CountedDrop {
    fn drop(&mut self) {
        self.0.replace_with(|v| *v + 1);
    }
}
