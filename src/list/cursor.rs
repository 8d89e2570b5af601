use crate::error::CursorError;
use crate::list::node::NodeId;
use crate::list::{CircularList, Ring};
use ghost_cell::GhostToken;
use std::fmt;
use std::mem;

/// A fail-fast cursor over a [`CircularList`].
///
/// A `ListIter` rests in a *gap* between two neighbouring nodes rather than
/// on an element. In a list with length *n* there are *n* + 1 gaps, indexed
/// by 0, 1, ..., *n*; gap *i* lies right before the element at index *i*.
/// `next` and `previous` step over one element and remember it, and that
/// element is the target of a later `remove` or `set`.
///
/// Each cursor records the list's modification count when it is created and
/// compares it with the live count before every operation. Structural edits
/// (`add`, `remove`) move both the list's count and the editing cursor's
/// record forward, so the editing cursor stays valid while every other open
/// cursor becomes stale. A stale cursor fails every call with
/// [`CursorError::StaleCursor`], read-only queries included, and never
/// recovers. `set` is not a structural edit and invalidates nobody.
///
/// # Examples
///
/// Here is a simple example showing how the cursors work. The gap is denoted
/// by `|` and the ghost node by `#`.
///
/// ```
/// use circular_list::{CircularList, CursorError};
/// use ghost_cell::GhostToken;
///
/// GhostToken::new(|mut token| {
///     let list = CircularList::new();
///
///     // [|#] (index = 0)
///     let mut cursor = list.cursor(&token);
///     cursor.add(&mut token, 'a').unwrap();
///     cursor.add(&mut token, 'b').unwrap();
///     cursor.add(&mut token, 'c').unwrap();
///
///     // [ a b c|#] (index = 3)
///     assert_eq!(cursor.next_index(&token), Ok(3));
///     assert_eq!(cursor.next(&token), Err(CursorError::EndOfSequence));
///
///     // [ a b|c #] (index = 2)
///     assert_eq!(cursor.previous(&token), Ok(&'c'));
///     // [ a|b c #] (index = 1), then `b` is removed: [ a|c #]
///     assert_eq!(cursor.previous(&token), Ok(&'b'));
///     assert_eq!(cursor.remove(&mut token), Ok('b'));
///     assert_eq!(cursor.next(&token), Ok(&'c'));
///
///     assert_eq!(list.iter(&token).collect::<String>(), "ac");
/// });
/// ```
pub struct ListIter<'a, 'id, T: 'a> {
    list: &'a CircularList<'id, T>,
    /// index of the element `next` would return
    index: usize,
    prev: NodeId,
    next: NodeId,
    /// target of `remove` and `set`
    last_returned: Option<NodeId>,
    expected_mod_count: u64,
}

// private methods
impl<'a, 'id, T: 'a> ListIter<'a, 'id, T> {
    pub(crate) fn new(
        list: &'a CircularList<'id, T>,
        index: usize,
        prev: NodeId,
        next: NodeId,
        expected_mod_count: u64,
    ) -> Self {
        Self {
            list,
            index,
            prev,
            next,
            last_returned: None,
            expected_mod_count,
        }
    }

    /// Borrow the ring for reading, after checking that the cursor is not stale.
    fn ring<'t>(&self, token: &'t GhostToken<'id>) -> Result<&'t Ring<T>, CursorError>
    where
        'a: 't,
    {
        let list: &'t CircularList<'id, T> = self.list;
        let ring = list.ring(token);
        ring.check(self.expected_mod_count)?;
        Ok(ring)
    }

    /// Borrow the ring for editing, after checking that the cursor is not stale.
    fn ring_mut<'t>(&self, token: &'t mut GhostToken<'id>) -> Result<&'t mut Ring<T>, CursorError>
    where
        'a: 't,
    {
        let list: &'t CircularList<'id, T> = self.list;
        let ring = list.ring_mut(token);
        ring.check(self.expected_mod_count)?;
        Ok(ring)
    }
}

impl<'a, 'id, T: 'a> ListIter<'a, 'id, T> {
    /// Returns `true` if a structural edit through another cursor has made
    /// this cursor unusable. Unlike the other queries this never fails.
    pub fn is_stale(&self, token: &GhostToken<'id>) -> bool {
        self.list.ring(token).mod_count != self.expected_mod_count
    }

    /// Returns `true` if there is an element after the cursor.
    ///
    /// # Errors
    ///
    /// [`CursorError::StaleCursor`] if the cursor is stale.
    pub fn has_next(&self, token: &GhostToken<'id>) -> Result<bool, CursorError> {
        let ring = self.ring(token)?;
        Ok(self.index < ring.len)
    }

    /// Returns `true` if there is an element before the cursor.
    ///
    /// # Errors
    ///
    /// [`CursorError::StaleCursor`] if the cursor is stale.
    pub fn has_previous(&self, token: &GhostToken<'id>) -> Result<bool, CursorError> {
        self.ring(token)?;
        Ok(self.index > 0)
    }

    /// Returns the index of the element a call to `next` would return, or
    /// the list length at the end of the list.
    ///
    /// # Errors
    ///
    /// [`CursorError::StaleCursor`] if the cursor is stale.
    pub fn next_index(&self, token: &GhostToken<'id>) -> Result<usize, CursorError> {
        self.ring(token)?;
        Ok(self.index)
    }

    /// Returns the index of the element a call to `previous` would return,
    /// or `-1` at the start of the list.
    ///
    /// # Errors
    ///
    /// [`CursorError::StaleCursor`] if the cursor is stale.
    pub fn previous_index(&self, token: &GhostToken<'id>) -> Result<isize, CursorError> {
        self.ring(token)?;
        Ok(self.index as isize - 1)
    }

    /// Steps over the element after the cursor and returns it.
    ///
    /// This operation should compute in *O*(1) time.
    ///
    /// # Errors
    ///
    /// - [`CursorError::StaleCursor`] if the cursor is stale;
    /// - [`CursorError::EndOfSequence`] if the cursor is at the end of the list.
    ///
    /// # Examples
    ///
    /// ```
    /// use circular_list::{CircularList, CursorError};
    /// use ghost_cell::GhostToken;
    ///
    /// GhostToken::new(|mut token| {
    ///     let list = CircularList::new();
    ///     list.cursor(&token).add(&mut token, 1).unwrap();
    ///
    ///     let mut cursor = list.cursor(&token);
    ///     assert_eq!(cursor.next(&token), Ok(&1));
    ///     assert_eq!(cursor.next(&token), Err(CursorError::EndOfSequence));
    /// });
    /// ```
    pub fn next<'t>(&mut self, token: &'t GhostToken<'id>) -> Result<&'t T, CursorError>
    where
        'a: 't,
    {
        let ring = self.ring(token)?;
        if self.index >= ring.len {
            return Err(CursorError::EndOfSequence);
        }
        let node = self.next;
        let element = ring.nodes.element(node).ok_or(CursorError::EndOfSequence)?;
        self.last_returned = Some(node);
        self.prev = node;
        self.next = ring.nodes.next(node);
        self.index += 1;
        Ok(element)
    }

    /// Steps back over the element before the cursor and returns it.
    ///
    /// This operation should compute in *O*(1) time.
    ///
    /// # Errors
    ///
    /// - [`CursorError::StaleCursor`] if the cursor is stale;
    /// - [`CursorError::EndOfSequence`] if the cursor is at the start of the list.
    ///
    /// # Examples
    ///
    /// ```
    /// use circular_list::{CircularList, CursorError};
    /// use ghost_cell::GhostToken;
    ///
    /// GhostToken::new(|mut token| {
    ///     let list = CircularList::new();
    ///     let mut cursor = list.cursor(&token);
    ///     cursor.add(&mut token, 1).unwrap();
    ///     cursor.add(&mut token, 2).unwrap();
    ///
    ///     assert_eq!(cursor.previous(&token), Ok(&2));
    ///     assert_eq!(cursor.previous(&token), Ok(&1));
    ///     assert_eq!(cursor.previous(&token), Err(CursorError::EndOfSequence));
    ///     assert_eq!(cursor.next(&token), Ok(&1));
    /// });
    /// ```
    pub fn previous<'t>(&mut self, token: &'t GhostToken<'id>) -> Result<&'t T, CursorError>
    where
        'a: 't,
    {
        let ring = self.ring(token)?;
        if self.index == 0 {
            return Err(CursorError::EndOfSequence);
        }
        let node = self.prev;
        let element = ring.nodes.element(node).ok_or(CursorError::EndOfSequence)?;
        self.last_returned = Some(node);
        self.next = node;
        self.prev = ring.nodes.prev(node);
        self.index -= 1;
        Ok(element)
    }

    /// Inserts `element` into the gap, before the element `next` would
    /// return. The cursor ends up after the new element, so a following
    /// `next` is unaffected and `previous` returns `element`.
    ///
    /// This is a structural edit: every other cursor on the list becomes
    /// stale. It also forgets the last returned element.
    ///
    /// This operation should compute in *O*(1) time.
    ///
    /// # Errors
    ///
    /// [`CursorError::StaleCursor`] if the cursor is stale.
    pub fn add(&mut self, token: &mut GhostToken<'id>, element: T) -> Result<(), CursorError> {
        let ring = self.ring_mut(token)?;
        self.prev = ring.insert_after(self.prev, element);
        self.last_returned = None;
        self.index += 1;
        self.expected_mod_count = ring.mod_count;
        trace!(
            "add at index {}: len {}, modification {}",
            self.index - 1,
            ring.len,
            ring.mod_count
        );
        Ok(())
    }

    /// Removes the element last returned by `next` or `previous` and
    /// returns it.
    ///
    /// This is a structural edit: every other cursor on the list becomes
    /// stale.
    ///
    /// This operation should compute in *O*(1) time.
    ///
    /// # Errors
    ///
    /// - [`CursorError::StaleCursor`] if the cursor is stale;
    /// - [`CursorError::NoPriorElement`] if there was no `next` or `previous`
    ///   since the cursor was created, or an `add` or `remove` came after it.
    ///
    /// # Examples
    ///
    /// ```
    /// use circular_list::{CircularList, CursorError};
    /// use ghost_cell::GhostToken;
    ///
    /// GhostToken::new(|mut token| {
    ///     let list = CircularList::new();
    ///     let mut cursor = list.cursor(&token);
    ///     for c in ['a', 'b', 'c'] {
    ///         cursor.add(&mut token, c).unwrap();
    ///     }
    ///
    ///     let mut cursor = list.cursor(&token);
    ///     assert_eq!(cursor.remove(&mut token), Err(CursorError::NoPriorElement));
    ///     cursor.next(&token).unwrap();
    ///     cursor.next(&token).unwrap();
    ///     assert_eq!(cursor.remove(&mut token), Ok('b'));
    ///     assert_eq!(cursor.remove(&mut token), Err(CursorError::NoPriorElement));
    ///     assert_eq!(cursor.next(&token), Ok(&'c'));
    /// });
    /// ```
    pub fn remove(&mut self, token: &mut GhostToken<'id>) -> Result<T, CursorError> {
        let ring = self.ring_mut(token)?;
        let node = self.last_returned.ok_or(CursorError::NoPriorElement)?;
        if self.next == node {
            self.next = ring.nodes.next(node);
        }
        if self.prev == node {
            self.prev = ring.nodes.prev(node);
            self.index -= 1;
        }
        let element = ring.unlink(node);
        self.last_returned = None;
        self.expected_mod_count = ring.mod_count;
        trace!(
            "remove at index {}: len {}, modification {}",
            self.index,
            ring.len,
            ring.mod_count
        );
        Ok(element)
    }

    /// Replaces the element last returned by `next` or `previous` with
    /// `element`, returning the old one.
    ///
    /// Only the value changes, not the links, so other cursors stay valid
    /// and this cursor may `set` or `remove` the same element again.
    ///
    /// # Errors
    ///
    /// - [`CursorError::StaleCursor`] if the cursor is stale;
    /// - [`CursorError::NoPriorElement`] under the same conditions as
    ///   [`ListIter::remove`].
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
    ///     cursor.add(&mut token, "a").unwrap();
    ///     cursor.add(&mut token, "b").unwrap();
    ///
    ///     let mut cursor = list.cursor(&token);
    ///     let observer = list.cursor(&token);
    ///     cursor.next(&token).unwrap();
    ///     assert_eq!(cursor.set(&mut token, "z"), Ok("a"));
    ///
    ///     assert_eq!(list.iter(&token).copied().collect::<Vec<_>>(), ["z", "b"]);
    ///     assert_eq!(observer.has_next(&token), Ok(true));
    /// });
    /// ```
    pub fn set(&mut self, token: &mut GhostToken<'id>, element: T) -> Result<T, CursorError> {
        let ring = self.ring_mut(token)?;
        let node = self.last_returned.ok_or(CursorError::NoPriorElement)?;
        let slot = ring
            .nodes
            .element_mut(node)
            .ok_or(CursorError::NoPriorElement)?;
        Ok(mem::replace(slot, element))
    }
}

impl<'a, 'id, T: 'a> fmt::Debug for ListIter<'a, 'id, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ListIter")
            .field("index", &self.index)
            .field("has_last_returned", &self.last_returned.is_some())
            .field("expected_mod_count", &self.expected_mod_count)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use crate::error::CursorError;
    use crate::list::CircularList;
    use ghost_cell::GhostToken;

    fn collect<'id, T: Clone>(list: &CircularList<'id, T>, token: &GhostToken<'id>) -> Vec<T> {
        let mut out = Vec::new();
        let mut cursor = list.cursor(token);
        while cursor.has_next(token).unwrap() {
            out.push(cursor.next(token).unwrap().clone());
        }
        out
    }

    #[test]
    fn cursor_add_then_iterate() {
        GhostToken::new(|mut token| {
            let list = CircularList::new();
            let mut cursor = list.cursor(&token);
            for i in 1..=5 {
                cursor.add(&mut token, i).unwrap();
                assert_eq!(cursor.next_index(&token), Ok(i));
                list.ring(&token).check_ring();
            }
            assert_eq!(list.len(&token), 5);
            assert_eq!(collect(&list, &token), vec![1, 2, 3, 4, 5]);
        });
    }

    #[test]
    fn cursor_fresh_indices() {
        GhostToken::new(|token| {
            let list = CircularList::<i32>::new();
            let cursor = list.cursor(&token);
            assert_eq!(cursor.has_next(&token), Ok(false));
            assert_eq!(cursor.has_previous(&token), Ok(false));
            assert_eq!(cursor.next_index(&token), Ok(0));
            assert_eq!(cursor.previous_index(&token), Ok(-1));
            assert!(!cursor.is_stale(&token));
        });
    }

    #[test]
    fn cursor_end_of_sequence() {
        GhostToken::new(|mut token| {
            let list = CircularList::new();
            let mut cursor = list.cursor(&token);
            assert_eq!(cursor.next(&token), Err(CursorError::EndOfSequence));
            assert_eq!(cursor.previous(&token), Err(CursorError::EndOfSequence));

            cursor.add(&mut token, 7).unwrap();
            assert_eq!(cursor.has_next(&token), Ok(false));
            assert_eq!(cursor.next(&token), Err(CursorError::EndOfSequence));
            assert_eq!(cursor.previous(&token), Ok(&7));
            assert_eq!(cursor.has_previous(&token), Ok(false));
            assert_eq!(cursor.previous(&token), Err(CursorError::EndOfSequence));
            // a failed step leaves the cursor where it was
            assert_eq!(cursor.next_index(&token), Ok(0));
            assert_eq!(cursor.set(&mut token, 8), Ok(7));
        });
    }

    #[test]
    fn cursor_no_prior_element() {
        GhostToken::new(|mut token| {
            let list = CircularList::new();
            let mut cursor = list.cursor(&token);
            assert_eq!(cursor.remove(&mut token), Err(CursorError::NoPriorElement));
            assert_eq!(cursor.set(&mut token, 1), Err(CursorError::NoPriorElement));

            cursor.add(&mut token, 1).unwrap();
            // `add` forgets the last returned element
            assert_eq!(cursor.remove(&mut token), Err(CursorError::NoPriorElement));
            assert_eq!(cursor.set(&mut token, 1), Err(CursorError::NoPriorElement));

            assert_eq!(cursor.previous(&token), Ok(&1));
            assert_eq!(cursor.remove(&mut token), Ok(1));
            assert_eq!(cursor.remove(&mut token), Err(CursorError::NoPriorElement));
            assert_eq!(cursor.set(&mut token, 2), Err(CursorError::NoPriorElement));

            // failed calls are not structural edits
            assert_eq!(list.modification_count(&token), 2);
            assert!(list.is_empty(&token));
            list.ring(&token).check_ring();
        });
    }

    #[test]
    fn cursor_add_makes_other_cursors_stale() {
        GhostToken::new(|mut token| {
            let list = CircularList::new();
            let mut a = list.cursor(&token);
            let mut b = list.cursor(&token);

            a.add(&mut token, "x").unwrap();
            a.add(&mut token, "y").unwrap();
            assert_eq!(collect(&list, &token), vec!["x", "y"]);
            assert_eq!(list.len(&token), 2);
            assert!(!a.is_stale(&token));
            assert!(b.is_stale(&token));

            let stale = CursorError::StaleCursor {
                expected: 0,
                found: 2,
            };
            assert_eq!(b.has_next(&token), Err(stale));
            assert_eq!(b.has_previous(&token), Err(stale));
            assert_eq!(b.next_index(&token), Err(stale));
            assert_eq!(b.previous_index(&token), Err(stale));
            assert_eq!(b.next(&token), Err(stale));
            assert_eq!(b.previous(&token), Err(stale));
            assert_eq!(b.add(&mut token, "z"), Err(stale));
            assert_eq!(b.remove(&mut token), Err(stale));
            assert_eq!(b.set(&mut token, "z"), Err(stale));

            // the stale cursor changed nothing
            assert_eq!(collect(&list, &token), vec!["x", "y"]);
            assert_eq!(list.modification_count(&token), 2);

            // and the writer is still valid
            assert_eq!(a.previous(&token), Ok(&"y"));
        });
    }

    #[test]
    fn cursor_remove_makes_other_cursors_stale() {
        GhostToken::new(|mut token| {
            let list = CircularList::new();
            let mut writer = list.cursor(&token);
            writer.add(&mut token, 1).unwrap();
            writer.add(&mut token, 2).unwrap();

            let mut a = list.cursor(&token);
            let mut b = list.cursor(&token);
            assert_eq!(b.next(&token), Ok(&1));
            assert!(!writer.is_stale(&token));

            assert_eq!(a.next(&token), Ok(&1));
            assert_eq!(a.remove(&mut token), Ok(1));
            assert!(writer.is_stale(&token));
            assert!(b.is_stale(&token));
            assert!(matches!(
                b.remove(&mut token),
                Err(CursorError::StaleCursor { .. })
            ));
            assert_eq!(collect(&list, &token), vec![2]);
            // stale is terminal, even when the list is edited again
            a.add(&mut token, 3).unwrap();
            assert!(b.is_stale(&token));
            assert_eq!(collect(&list, &token), vec![3, 2]);
        });
    }

    #[test]
    fn cursor_remove_after_next() {
        GhostToken::new(|mut token| {
            let list = CircularList::new();
            let mut cursor = list.cursor(&token);
            for s in ["a", "b", "c"] {
                cursor.add(&mut token, s).unwrap();
            }

            let mut cursor = list.cursor(&token);
            assert_eq!(cursor.next(&token), Ok(&"a"));
            assert_eq!(cursor.next(&token), Ok(&"b"));
            assert_eq!(cursor.remove(&mut token), Ok("b"));
            assert_eq!(cursor.next_index(&token), Ok(1));
            assert_eq!(collect(&list, &token), vec!["a", "c"]);
            assert_eq!(cursor.next(&token), Ok(&"c"));
            assert_eq!(cursor.has_next(&token), Ok(false));
            list.ring(&token).check_ring();
        });
    }

    #[test]
    fn cursor_remove_after_previous() {
        GhostToken::new(|mut token| {
            let list = CircularList::new();
            let mut cursor = list.cursor(&token);
            for s in ["a", "b", "c"] {
                cursor.add(&mut token, s).unwrap();
            }

            assert_eq!(cursor.previous(&token), Ok(&"c"));
            assert_eq!(cursor.previous(&token), Ok(&"b"));
            assert_eq!(cursor.remove(&mut token), Ok("b"));
            // the gap keeps its index, now between `a` and `c`
            assert_eq!(cursor.next_index(&token), Ok(1));
            assert_eq!(cursor.next(&token), Ok(&"c"));
            cursor.previous(&token).unwrap();
            assert_eq!(cursor.previous(&token), Ok(&"a"));
            assert_eq!(collect(&list, &token), vec!["a", "c"]);
            list.ring(&token).check_ring();
        });
    }

    #[test]
    fn cursor_remove_everything() {
        GhostToken::new(|mut token| {
            let list = CircularList::new();
            let mut cursor = list.cursor(&token);
            for i in 0..4 {
                cursor.add(&mut token, i).unwrap();
            }

            let mut cursor = list.cursor(&token);
            let mut removed = Vec::new();
            while cursor.has_next(&token).unwrap() {
                cursor.next(&token).unwrap();
                removed.push(cursor.remove(&mut token).unwrap());
                list.ring(&token).check_ring();
            }
            assert_eq!(removed, vec![0, 1, 2, 3]);
            assert!(list.is_empty(&token));
            assert_eq!(cursor.next_index(&token), Ok(0));

            // the emptied list is still usable
            cursor.add(&mut token, 9).unwrap();
            assert_eq!(collect(&list, &token), vec![9]);
        });
    }

    #[test]
    fn cursor_set_is_not_structural() {
        GhostToken::new(|mut token| {
            let list = CircularList::new();
            let mut cursor = list.cursor(&token);
            cursor.add(&mut token, "a").unwrap();
            cursor.add(&mut token, "b").unwrap();

            let mut cursor = list.cursor(&token);
            let mut other = list.cursor(&token);
            assert_eq!(cursor.next(&token), Ok(&"a"));
            assert_eq!(cursor.set(&mut token, "z"), Ok("a"));
            assert_eq!(collect(&list, &token), vec!["z", "b"]);
            assert_eq!(list.modification_count(&token), 2);

            assert!(!other.is_stale(&token));
            assert_eq!(other.next(&token), Ok(&"z"));

            // `set` keeps the target, so it can be set or removed again
            assert_eq!(cursor.set(&mut token, "y"), Ok("z"));
            assert_eq!(cursor.remove(&mut token), Ok("y"));
            assert_eq!(collect(&list, &token), vec!["b"]);
        });
    }

    #[test]
    fn cursor_set_first_element() {
        GhostToken::new(|mut token| {
            let list = CircularList::new();
            let mut cursor = list.cursor(&token);
            cursor.add(&mut token, 1).unwrap();

            let mut cursor = list.cursor(&token);
            cursor.next(&token).unwrap();
            assert_eq!(cursor.set(&mut token, 10), Ok(1));
            assert_eq!(list.iter(&token).next(), Some(&10));
        });
    }

    #[test]
    fn cursor_add_in_the_middle() {
        GhostToken::new(|mut token| {
            let list = CircularList::new();
            let mut cursor = list.cursor(&token);
            cursor.add(&mut token, 1).unwrap();
            cursor.add(&mut token, 4).unwrap();

            let mut cursor = list.cursor(&token);
            cursor.next(&token).unwrap();
            cursor.add(&mut token, 2).unwrap();
            cursor.add(&mut token, 3).unwrap();
            assert_eq!(cursor.next_index(&token), Ok(3));
            assert_eq!(cursor.next(&token), Ok(&4));
            assert_eq!(collect(&list, &token), vec![1, 2, 3, 4]);

            // insertion at the front keeps the cached front in step
            let mut cursor = list.cursor(&token);
            cursor.add(&mut token, 0).unwrap();
            assert_eq!(list.iter(&token).next(), Some(&0));
            assert_eq!(collect(&list, &token), vec![0, 1, 2, 3, 4]);
            list.ring(&token).check_ring();
        });
    }

    #[test]
    fn cursor_walk_back_and_forth() {
        GhostToken::new(|mut token| {
            let list = CircularList::new();
            let mut cursor = list.cursor(&token);
            for c in "hello".chars() {
                cursor.add(&mut token, c).unwrap();
            }

            let mut backward = String::new();
            while cursor.has_previous(&token).unwrap() {
                assert_eq!(
                    cursor.previous_index(&token).unwrap(),
                    cursor.next_index(&token).unwrap() as isize - 1
                );
                backward.push(*cursor.previous(&token).unwrap());
            }
            assert_eq!(backward, "olleh");
            assert_eq!(cursor.previous_index(&token), Ok(-1));

            let mut forward = String::new();
            while cursor.has_next(&token).unwrap() {
                forward.push(*cursor.next(&token).unwrap());
            }
            assert_eq!(forward, "hello");
        });
    }

    #[test]
    fn cursor_mixed_edits_keep_the_ring_consistent() {
        GhostToken::new(|mut token| {
            let list = CircularList::new();
            let mut cursor = list.cursor(&token);
            let mut model: Vec<u32> = Vec::new();
            let mut at = 0usize;
            for step in 0..200u32 {
                match step % 7 {
                    0 | 1 | 4 => {
                        cursor.add(&mut token, step).unwrap();
                        model.insert(at, step);
                        at += 1;
                    }
                    2 | 5 => {
                        if cursor.has_previous(&token).unwrap() {
                            cursor.previous(&token).unwrap();
                            at -= 1;
                            assert_eq!(cursor.remove(&mut token), Ok(model.remove(at)));
                        }
                    }
                    3 => {
                        if cursor.has_previous(&token).unwrap() {
                            cursor.previous(&token).unwrap();
                            at -= 1;
                        }
                    }
                    _ => {
                        if cursor.has_next(&token).unwrap() {
                            assert_eq!(cursor.next(&token), Ok(&model[at]));
                            at += 1;
                            cursor.set(&mut token, step).unwrap();
                            model[at - 1] = step;
                        }
                    }
                }
                assert_eq!(cursor.next_index(&token), Ok(at));
                assert_eq!(list.len(&token), model.len());
                list.ring(&token).check_ring();
            }
            assert_eq!(collect(&list, &token), model);
        });
    }
}
