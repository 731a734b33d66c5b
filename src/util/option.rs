use std::hint;

pub(crate) trait OptionExtension<T> {
    unsafe fn unreachable(self) -> T;
}

impl<T> OptionExtension<T> for Option<T> {
    /// Unwraps an Option the caller has already proven to be Some: the none
    /// branch is [`unreachable!`] under debug assertions and
    /// [`unreachable_unchecked`](hint::unreachable_unchecked) in release
    /// builds.
    ///
    /// The debug panic is a diagnostics aid rather than part of the contract,
    /// so no panics annotation is carried. Calling this with None is undefined
    /// behavior in release builds.
    unsafe fn unreachable(self) -> T {
        match self {
            Some(val) => val,
            None if cfg!(debug_assertions) => unreachable!(),
            // SAFETY: The caller guarantees this branch cannot be reached.
            None => unsafe { hint::unreachable_unchecked() },
        }
    }
}
