use std::hint;

pub(crate) trait OptionExtension<T> {
    unsafe fn unreachable(self) -> T;
}

impl<T> OptionExtension<T> for Option<T> {
    /// Acts similarly to [`Option::unwrap`] but with [`unreachable!`] in the none branch for dev
    /// and [`unreachable_unchecked`](hint::unreachable_unchecked) for release builds.
    ///
    /// Used where a link is known to exist because of the list's length, e.g. the node after the
    /// head of a list with more than one element.
    unsafe fn unreachable(self) -> T {
        match self {
            Some(val) => val,
            None if cfg!(debug_assertions) => unreachable!(),
            // SAFETY: It is the responsibility of the caller to ensure that None is impossible when
            // invoking this method.
            None => unsafe { hint::unreachable_unchecked() },
        }
    }
}
