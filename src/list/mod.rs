use ghost_cell::{GhostCell, GhostToken};

use crate::error::CursorError;
use crate::list::cursor::ListIter;
use crate::list::iterator::Iter;
use crate::list::node::{NodeArena, NodeId};

pub mod cursor;
pub mod iterator;

pub(crate) mod node;

/// The `CircularList` is a doubly-linked list closed into a ring by a ghost
/// (sentinel) node. Its contents can only be edited through cursors
/// ([`ListIter`]), and any number of cursors may be open on the same list at
/// once.
///
/// The list is branded by a [`GhostToken`]: reading through a cursor takes
/// `&GhostToken<'id>`, editing takes `&mut GhostToken<'id>`. A structural edit
/// (`add` or `remove`) through one cursor makes every other open cursor stale,
/// and a stale cursor refuses every further operation.
///
/// # Examples
///
/// ```
/// use circular_list::{CircularList, CursorError};
/// use ghost_cell::GhostToken;
///
/// GhostToken::new(|mut token| {
///     let list = CircularList::new();
///     let mut writer = list.cursor(&token);
///     let reader = list.cursor(&token);
///
///     writer.add(&mut token, "x").unwrap();
///     writer.add(&mut token, "y").unwrap();
///     assert_eq!(list.iter(&token).copied().collect::<Vec<_>>(), ["x", "y"]);
///
///     assert!(matches!(reader.has_next(&token), Err(CursorError::StaleCursor { .. })));
/// });
/// ```
pub struct CircularList<'id, T> {
    ring: GhostCell<'id, Ring<T>>,
}

/// The mutable state shared by a list and its cursors.
pub(crate) struct Ring<T> {
    pub(crate) nodes: NodeArena<T>,
    /// number of elements, the ghost node excluded
    pub(crate) len: usize,
    /// bumped once per structural edit, never decreased
    pub(crate) mod_count: u64,
}

impl<T> Ring<T> {
    fn new() -> Self {
        Self {
            nodes: NodeArena::new(),
            len: 0,
            mod_count: 0,
        }
    }

    pub(crate) fn front_node(&self) -> NodeId {
        self.nodes.next(NodeId::GHOST)
    }

    pub(crate) fn back_node(&self) -> NodeId {
        self.nodes.prev(NodeId::GHOST)
    }

    /// Fail with [`CursorError::StaleCursor`] unless the ring is still at
    /// modification count `expected`.
    pub(crate) fn check(&self, expected: u64) -> Result<(), CursorError> {
        if self.mod_count == expected {
            return Ok(());
        }
        debug!(
            "stale cursor rejected: expected modification {}, list is at {}",
            expected,
            self.mod_count
        );
        Err(CursorError::StaleCursor {
            expected,
            found: self.mod_count,
        })
    }

    /// Insert `element` after `at`, counting it as a structural edit.
    pub(crate) fn insert_after(&mut self, at: NodeId, element: T) -> NodeId {
        let node = self.nodes.insert_after(at, element);
        self.len += 1;
        self.mod_count += 1;
        node
    }

    /// Remove `node` from the ring, counting it as a structural edit.
    pub(crate) fn unlink(&mut self, node: NodeId) -> T {
        let element = self.nodes.unlink(node);
        self.len -= 1;
        self.mod_count += 1;
        element
    }

    /// Walk the ring both ways and check that each walk visits exactly `len`
    /// nodes and every link is mirrored by its neighbour.
    #[cfg(test)]
    pub(crate) fn check_ring(&self) {
        let mut node = NodeId::GHOST;
        let mut forward = 0;
        loop {
            let next = self.nodes.next(node);
            assert_eq!(self.nodes.prev(next), node);
            if next.is_ghost() {
                break;
            }
            assert!(self.nodes.element(next).is_some());
            forward += 1;
            node = next;
        }
        let mut node = NodeId::GHOST;
        let mut backward = 0;
        loop {
            let prev = self.nodes.prev(node);
            assert_eq!(self.nodes.next(prev), node);
            if prev.is_ghost() {
                break;
            }
            backward += 1;
            node = prev;
        }
        assert_eq!(forward, self.len);
        assert_eq!(backward, self.len);
        assert_eq!(self.nodes.occupied(), self.len + 1);
    }
}

// private methods
impl<'id, T> CircularList<'id, T> {
    pub(crate) fn ring<'a>(&'a self, token: &'a GhostToken<'id>) -> &'a Ring<T> {
        self.ring.borrow(token)
    }

    pub(crate) fn ring_mut<'a>(&'a self, token: &'a mut GhostToken<'id>) -> &'a mut Ring<T> {
        self.ring.borrow_mut(token)
    }
}

impl<'id, T> CircularList<'id, T> {
    /// Create an empty `CircularList`: the ghost node linked to itself, no
    /// elements and a modification count of 0.
    ///
    /// # Examples
    /// ```
    /// use circular_list::CircularList;
    /// use ghost_cell::GhostToken;
    ///
    /// GhostToken::new(|token| {
    ///     let list: CircularList<u32> = CircularList::new();
    ///     assert!(list.is_empty(&token));
    ///     assert_eq!(list.modification_count(&token), 0);
    /// });
    /// ```
    #[inline]
    pub fn new() -> Self {
        Self {
            ring: GhostCell::new(Ring::new()),
        }
    }

    /// Returns the number of elements in the list.
    ///
    /// This operation should compute in *O*(1) time.
    #[inline]
    pub fn len(&self, token: &GhostToken<'id>) -> usize {
        self.ring(token).len
    }

    /// Returns `true` if the list holds no elements.
    #[inline]
    pub fn is_empty(&self, token: &GhostToken<'id>) -> bool {
        self.ring(token).front_node().is_ghost()
    }

    /// Returns how many structural edits (`add` or `remove`) have been made
    /// to the list so far. Replacing an element with `set` does not count.
    #[inline]
    pub fn modification_count(&self, token: &GhostToken<'id>) -> u64 {
        self.ring(token).mod_count
    }

    /// Provides a cursor before the first element.
    ///
    /// # Examples
    ///
    /// ```
    /// use circular_list::CircularList;
    /// use ghost_cell::GhostToken;
    ///
    /// GhostToken::new(|token| {
    ///     let list: CircularList<char> = CircularList::new();
    ///     let cursor = list.cursor(&token);
    ///     assert_eq!(cursor.next_index(&token), Ok(0));
    ///     assert_eq!(cursor.previous_index(&token), Ok(-1));
    /// });
    /// ```
    pub fn cursor<'a>(&'a self, token: &GhostToken<'id>) -> ListIter<'a, 'id, T> {
        let ring = self.ring(token);
        ListIter::new(self, 0, NodeId::GHOST, ring.front_node(), ring.mod_count)
    }

    /// Provides a cursor in the gap before the element at `index`. With
    /// `index == len` the cursor sits after the last element.
    ///
    /// The cursor is positioned by walking from whichever end of the list is
    /// closer, so this operation computes in *O*(min(*index*, *len* - *index*))
    /// time.
    ///
    /// # Errors
    ///
    /// Returns [`CursorError::IndexOutOfBounds`] if `index > len`.
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
    ///     for c in ['a', 'b', 'c'] {
    ///         cursor.add(&mut token, c).unwrap();
    ///     }
    ///
    ///     let mut cursor = list.cursor_at(&token, 2).unwrap();
    ///     assert_eq!(cursor.next(&token), Ok(&'c'));
    ///     assert!(list.cursor_at(&token, 4).is_err());
    /// });
    /// ```
    pub fn cursor_at<'a>(
        &'a self,
        token: &GhostToken<'id>,
        index: usize,
    ) -> Result<ListIter<'a, 'id, T>, CursorError> {
        let ring = self.ring(token);
        let len = ring.len;
        if index > len {
            return Err(CursorError::IndexOutOfBounds { index, len });
        }
        let (prev, next) = if index <= len / 2 {
            let (mut prev, mut next) = (NodeId::GHOST, ring.front_node());
            for _ in 0..index {
                prev = next;
                next = ring.nodes.next(next);
            }
            (prev, next)
        } else {
            let (mut prev, mut next) = (ring.back_node(), NodeId::GHOST);
            for _ in index..len {
                next = prev;
                prev = ring.nodes.prev(prev);
            }
            (prev, next)
        };
        Ok(ListIter::new(self, index, prev, next, ring.mod_count))
    }

    /// Provides a forward iterator over the elements.
    ///
    /// The iterator holds the token borrowed, so the list cannot be edited
    /// while it is alive.
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
    ///     cursor.add(&mut token, 0).unwrap();
    ///     cursor.add(&mut token, 1).unwrap();
    ///
    ///     let mut iter = list.iter(&token);
    ///     assert_eq!(iter.next(), Some(&0));
    ///     assert_eq!(iter.next(), Some(&1));
    ///     assert_eq!(iter.next(), None);
    /// });
    /// ```
    #[inline]
    pub fn iter<'a>(&'a self, token: &'a GhostToken<'id>) -> Iter<'a, T> {
        Iter::new(self.ring(token))
    }

    /// Consumes the list and returns its elements in order.
    ///
    /// No token is needed: owning the list rules out any open cursor.
    pub fn into_vec(self) -> Vec<T> {
        self.ring.into_inner().nodes.into_elements()
    }
}

impl<'id, T> Default for CircularList<'id, T> {
    fn default() -> Self {
        Self::new()
    }
}
