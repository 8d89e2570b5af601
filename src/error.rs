use thiserror::Error;

/// Errors reported by [`ListIter`](crate::ListIter) operations.
///
/// All of them are raised before the cursor or the list is touched, so a
/// failed call never leaves a half-applied edit behind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum CursorError {
    /// The list was structurally modified through another cursor after this
    /// cursor last agreed with it. A stale cursor never becomes valid again.
    #[error("stale cursor: expected modification count {expected}, list is at {found}")]
    StaleCursor { expected: u64, found: u64 },
    /// `next` at the end of the list, or `previous` at its start.
    #[error("no more elements in the requested direction")]
    EndOfSequence,
    /// `remove` or `set` without a preceding `next`/`previous`, or after the
    /// returned element was already consumed by `add`, `remove` or `set`.
    #[error("no element has been returned since the last move or edit")]
    NoPriorElement,
    /// A cursor was requested at a position past the end of the list.
    #[error("index {index} out of bounds for a list with {len} elements")]
    IndexOutOfBounds { index: usize, len: usize },
}

impl CursorError {
    /// Returns `true` for [`CursorError::StaleCursor`].
    pub fn is_stale(&self) -> bool {
        matches!(self, CursorError::StaleCursor { .. })
    }
}
