//! This crate provides a circular doubly-linked list whose contents are
//! edited only through fail-fast, position-aware cursors.
//!
//! The [`CircularList`] allows inserting and removing elements at a cursor in
//! constant time, and any number of cursors ([`ListIter`]) may be open on one
//! list at the same time. A cursor that changes the structure of the list
//! (`add` or `remove`) stays valid, and every other open cursor becomes
//! *stale*: it refuses all further operations with
//! [`CursorError::StaleCursor`] instead of walking over links that may have
//! changed under it.
//!
//! Here is a quick example showing how the list works.
//!
//! ```
//! use circular_list::{CircularList, CursorError};
//! use ghost_cell::GhostToken;
//!
//! GhostToken::new(|mut token| {
//!     let list = CircularList::new();
//!
//!     let mut cursor = list.cursor(&token);
//!     cursor.add(&mut token, "a").unwrap();
//!     cursor.add(&mut token, "b").unwrap();
//!     cursor.add(&mut token, "c").unwrap();
//!
//!     let mut cursor = list.cursor(&token);
//!     let bystander = list.cursor(&token);
//!     assert_eq!(cursor.next(&token), Ok(&"a"));
//!     assert_eq!(cursor.next(&token), Ok(&"b"));
//!     assert_eq!(cursor.remove(&mut token), Ok("b"));
//!     assert_eq!(cursor.next(&token), Ok(&"c"));
//!
//!     assert_eq!(list.iter(&token).copied().collect::<Vec<_>>(), ["a", "c"]);
//!     assert!(matches!(
//!         bystander.has_next(&token),
//!         Err(CursorError::StaleCursor { .. })
//!     ));
//! });
//! ```
//!
//! # Memory Layout
//!
//! The nodes are kept in an arena owned by the list and link to each other
//! by index. Slot 0 is the ghost node, which closes the ring:
//! ```text
//!          ┌─────────────────────────────────────────────────────────────────────┐
//!          ↓                                                     (Ghost) Node 0  │
//!    ╔═══════════╗           ╔═══════════╗                        ┌───────────┐  │
//!    ║   next    ║ ────────→ ║   next    ║ ────────→ ┄┄ ────────→ │   next    │ ─┘
//!    ╟───────────╢           ╟───────────╢     more nodes ...     ├───────────┤
//! ┌─ ║   prev    ║ ←──────── ║   prev    ║ ←──────── ┄┄ ←──────── │   prev    │
//! │  ╟───────────╢           ╟───────────╢                        ├───────────┤
//! │  ║ Some(T)   ║           ║ Some(T)   ║                        ┊   None    ┊
//! │  ╚═══════════╝           ╚═══════════╝                        └╌╌╌╌╌╌╌╌╌╌╌┘
//! │     front                                                         ↑
//! └───────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Initially the ghost node is the only node and its `next` and `prev` both
//! point to itself. As elements are inserted, `ghost.next` is the front of
//! the list and `ghost.prev` its back. Freed slots are reused by later
//! insertions.
//!
//! # Ghost Tokens
//!
//! Cursors share one list, and each of them may edit it. The list's state is
//! therefore kept in a [`GhostCell`](ghost_cell::GhostCell), and every list
//! and cursor operation takes the matching [`GhostToken`](ghost_cell::GhostToken):
//! `&token` to read, `&mut token` to edit. The borrow checker thereby
//! serializes edits and keeps references returned by `next`/`previous` from
//! outliving the next edit, with no runtime locking. Lists are created
//! inside [`GhostToken::new`](ghost_cell::GhostToken::new).
//!
//! # Cursors
//!
//! A cursor sits in the gap between two elements. In a list with length *n*
//! there are *n* + 1 gaps, indexed by 0, 1, ..., *n*.
//! - [`next`] / [`previous`]: step over an element and return it;
//! - [`add`]: insert an element into the gap;
//! - [`remove`]: remove the element last stepped over;
//! - [`set`]: replace the element last stepped over, in place.
//!
//! # Features
//!
//! - `logging` (default): trace structural edits and stale cursors through
//!   the `log` facade;
//! - `demo`: build the `experiments` binary.
//!
//! [`CircularList`]: crate::CircularList
//! [`ListIter`]: crate::ListIter
//! [`next`]: crate::ListIter::next
//! [`previous`]: crate::ListIter::previous
//! [`add`]: crate::ListIter::add
//! [`remove`]: crate::ListIter::remove
//! [`set`]: crate::ListIter::set

#[macro_use]
mod logging;

#[doc(inline)]
pub use error::CursorError;
#[doc(inline)]
pub use list::cursor::ListIter;
#[doc(inline)]
pub use list::iterator::Iter;
#[doc(inline)]
pub use list::CircularList;

pub mod error;
pub mod list;
