use std::num::NonZero;

use crate::util::error::CapacityOverflow;

/// The length of a non-empty list. Dropping to zero is represented by the list becoming empty
/// instead.
#[derive(Debug, PartialEq, Eq, Hash, Clone, Copy)]
pub(crate) struct Length(pub NonZero<usize>);

impl Length {
    pub const fn get(self) -> usize {
        self.0.get()
    }

    /// Adds `other` elements, failing if the count no longer fits in a [`usize`].
    pub const fn grow(self, other: usize) -> Result<Length, CapacityOverflow> {
        match self.0.checked_add(other) {
            Some(res) => Ok(Length(res)),
            None => Err(CapacityOverflow),
        }
    }

    /// Removes one element, returning [`None`] if that would leave the list empty.
    pub const fn shrink(self) -> Option<Length> {
        match NonZero::new(self.0.get() - 1) {
            Some(res) => Some(Length(res)),
            None => None,
        }
    }
}

pub(crate) const ONE: Length = Length(NonZero::<usize>::MIN);
