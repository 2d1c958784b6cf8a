use derive_more::{Display, Error, From, IsVariant, TryInto};

/// The list contained no elements, but the operation requires at least one.
#[derive(Debug, Display, Error, Clone, Copy, PartialEq, Eq)]
#[display("Operation requires a non-empty list!")]
pub struct EmptyList;

/// A position was read or advanced while pointing past the end of its list.
#[derive(Debug, Display, Error, Clone, Copy, PartialEq, Eq)]
#[display("Position is past the end of the list!")]
pub struct PastTheEnd;

/// The number of elements would exceed [`usize::MAX`].
#[derive(Debug, Display, Error, Clone, Copy, PartialEq, Eq)]
#[display("Capacity overflow!")]
pub struct CapacityOverflow;

/// Any of the errors a list operation can produce.
#[derive(Debug, Display, Error, From, TryInto, IsVariant, Clone, Copy, PartialEq, Eq)]
pub enum ListError {
    EmptyList(EmptyList),
    PastTheEnd(PastTheEnd),
    CapacityOverflow(CapacityOverflow),
}
