//! A fixed-capacity double-ended queue backed by a ring buffer.
//!
//! [`RingBufferDeque<T, N>`](RingBufferDeque) stores up to `N` elements in one allocation made
//! when the deque is created. Pushes and pops at either end are O(1) in the worst case and
//! never move the other elements; once all `N` slots are in use, further pushes fail with
//! [`DequeError::Full`] instead of overwriting anything.
//!
//! Every operation that can fail returns a [`Result`] whose error has an [`ErrorKind`]:
//! `Capacity` for pushes that do not fit, `Empty` for reads and pops on an empty deque, and
//! `Access` for dereferencing a [`Cursor`] outside the live range.
//!
//! # Examples
//! ```
//! use ringdeque::{ErrorKind, RingBufferDeque};
//!
//! let mut deque: RingBufferDeque<i32, 5> = RingBufferDeque::new();
//! for i in 1..=5 {
//!     deque.push_back(i).unwrap();
//! }
//! assert_eq!(deque.push_back(6).unwrap_err().kind(), ErrorKind::Capacity);
//!
//! deque.pop_front().unwrap();
//! deque.pop_front().unwrap();
//! deque.push_back(6).unwrap();
//! deque.push_back(7).unwrap();
//!
//! // the last two elements wrapped around to the start of the buffer
//! let items: Vec<i32> = deque.iter().copied().collect();
//! assert_eq!(items, [3, 4, 5, 6, 7]);
//! ```
//!
//! # Cursors
//! [`begin`](RingBufferDeque::begin) and [`end`](RingBufferDeque::end) return [`Cursor`]s that
//! step through the ring in either direction and compare by logical position.
//! ```
//! use ringdeque::RingBufferDeque;
//!
//! let deque: RingBufferDeque<char, 3> = RingBufferDeque::from_array(['a', 'b', 'c']).unwrap();
//! let mut cursor = deque.end();
//! let mut backwards = String::new();
//! while cursor != deque.begin() {
//!     cursor.move_prev();
//!     backwards.push(*cursor.get().unwrap());
//! }
//! assert_eq!(backwards, "cba");
//! ```
//!
//! # Features
//! - `serde`: implements `Serialize` and `Deserialize`, using the same representation as a
//!   sequence. Deserializing more than `N` elements fails.

pub mod cursor;
pub mod error;
mod index;
pub mod iter;
pub mod ring_deque;
pub mod settings;

pub use cursor::{Cursor, CursorMut};
pub use error::{DequeError, ErrorKind};
pub use ring_deque::RingBufferDeque;
pub use settings::{BackToFront, DropBehavior, FrontToBack};
