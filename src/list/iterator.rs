use crate::list::node::NodeId;
use crate::list::Ring;
use std::fmt;
use std::iter::FusedIterator;

/// An iterator over the elements of a [`CircularList`](crate::CircularList).
///
/// It uses a pair of nodes `start..end` to represent a half-open subrange
/// of the list, where `start` is inclusive and `end` is not. Both ends start
/// out at the ghost node's neighbours, so the iterator is fused and does not
/// wrap around.
///
/// The iterator borrows the list's token immutably, so the list cannot be
/// edited while it is alive.
///
/// # Examples
///
/// ```
/// use circular_list::CircularList;
/// use ghost_cell::GhostToken;
///
/// GhostToken::new(|mut token| {
///     let list = CircularList::new();
///     let mut cursor = list.cursor(&token);
///     for i in 1..=3 {
///         cursor.add(&mut token, i).unwrap();
///     }
///
///     let mut iter = list.iter(&token);
///     assert_eq!(iter.len(), 3);
///     assert_eq!(iter.next_back(), Some(&3));
///     assert_eq!(iter.next(), Some(&1));
///     assert_eq!(iter.next(), Some(&2));
///     assert_eq!(iter.next(), None);
///     assert_eq!(iter.next_back(), None);
/// });
/// ```
pub struct Iter<'a, T: 'a> {
    ring: &'a Ring<T>,
    start: NodeId,
    end: NodeId,
    len: usize,
}

impl<'a, T: 'a> Iter<'a, T> {
    pub(crate) fn new(ring: &'a Ring<T>) -> Self {
        Self {
            ring,
            start: ring.front_node(),
            end: NodeId::GHOST,
            len: ring.len,
        }
    }
}

impl<'a, T: 'a> Clone for Iter<'a, T> {
    fn clone(&self) -> Self {
        Self { ..*self }
    }
}

impl<'a, T: fmt::Debug + 'a> fmt::Debug for Iter<'a, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Iter").field(&self.clone().collect::<Vec<_>>()).finish()
    }
}

impl<'a, T: 'a> Iterator for Iter<'a, T> {
    type Item = &'a T;

    /// Return `*start` and reset the iterating range to `(start.next)..end`,
    /// or return `None` if `start..end` is already empty.
    fn next(&mut self) -> Option<Self::Item> {
        if self.start == self.end {
            return None;
        }
        let current = self.start;
        self.start = self.ring.nodes.next(current);
        self.len -= 1;
        self.ring.nodes.element(current)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.len, Some(self.len))
    }

    fn last(mut self) -> Option<Self::Item>
    where
        Self: Sized,
    {
        self.next_back()
    }
}

impl<'a, T: 'a> DoubleEndedIterator for Iter<'a, T> {
    /// Reset the iterating range to `start..(end.prev)` and return `*end`,
    /// or return `None` if `start..end` is already empty.
    fn next_back(&mut self) -> Option<Self::Item> {
        if self.start == self.end {
            return None;
        }
        self.end = self.ring.nodes.prev(self.end);
        self.len -= 1;
        self.ring.nodes.element(self.end)
    }
}

impl<'a, T: 'a> ExactSizeIterator for Iter<'a, T> {}

impl<'a, T: 'a> FusedIterator for Iter<'a, T> {}
