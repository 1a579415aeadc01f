use crate::error::TreeError;

/// The protocol shared by the three traversal orders
///
/// Every traversal is also an ordinary [`Iterator`]; this trait adds an
/// explicit emptiness check and a fallible `next` for callers that would
/// rather get an error than `None` when they walk off the end.
pub trait Traversal<'a, E: 'a>: Iterator<Item = &'a E> {
    /// Returns true if calling `next` would yield another element
    ///
    /// Has no side effects.
    fn has_next(&self) -> bool;

    /// Returns the next element, or [`TreeError::IterationExhausted`] if the
    /// traversal is finished
    fn try_next(&mut self) -> Result<&'a E, TreeError> {
        self.next().ok_or(TreeError::IterationExhausted)
    }
}
