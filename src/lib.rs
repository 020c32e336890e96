//! This crate provides a doubly-linked sequence container, [`List`], with
//! indexed access, insertion, removal, containment checks, copying into a
//! buffer, iteration, and an optional read-only mode.
//!
//! Appending takes constant time. In compromise, accessing or mutating
//! elements at a given position takes *O*(*n*) time: the list walks from
//! whichever end is nearer.
//!
//! Here is a quick example showing how the list works.
//!
//! ```
//! use seq_list::List;
//! use std::iter::FromIterator;
//!
//! let mut list = List::from_iter(["a", "b", "c", "d"]);
//!
//! list.remove_item(&"b")?; // remove by value
//! assert_eq!(list.remove(1)?, "c"); // remove by index
//! list.insert(1, "e")?;
//! assert_eq!(list.to_vec(), vec!["a", "e", "d"]);
//!
//! assert!(list.contains(&"e"));
//! assert_eq!(list.index_of(&"d"), Some(2));
//! assert_eq!(list[0], "a");
//! # Ok::<(), seq_list::ListError>(())
//! ```
//!
//! # Memory Layout
//!
//! ```text
//!                 ╔═══════════╗           ╔═══════════╗                    ╔═══════════╗
//!      None ←──── ║   prev    ║ ←──────── ║   prev    ║ ←──── ┄┄ ←──────── ║   prev    ║
//!                 ╟───────────╢           ╟───────────╢                    ╟───────────╢
//!                 ║   next    ║ ────────→ ║   next    ║ ────→ ┄┄ ────────→ ║   next    ║ ────→ None
//!                 ╟───────────╢           ╟───────────╢                    ╟───────────╢
//!                 ║ payload T ║           ║ payload T ║                    ║ payload T ║
//!                 ╚═══════════╝           ╚═══════════╝                    ╚═══════════╝
//!                     Node 0                  Node 1                          Node n-1
//!                       ↑                                                        ↑
//! ╔═══════════╗         │                                                        │
//! ║   head    ║ ────────┘                                                        │
//! ╟───────────╢                                                                  │
//! ║   tail    ║ ─────────────────────────────────────────────────────────────────┘
//! ╟───────────╢
//! ║    len    ║
//! ╟───────────╢
//! ║ read_only ║
//! ╚═══════════╝
//!     List
//! ```
//!
//! Each node is allocated on the heap and owned by the list. An empty list
//! has no nodes at all: `head` and `tail` are both `None`.
//!
//! # Read-only Lists
//!
//! A list built with [`List::with_read_only`] or [`List::read_only_from`]
//! rejects every mutation with [`ListError::ReadOnlyViolation`]. Indexed
//! access ([`List::get`] and `list[i]`) is rejected as well, while
//! iteration, [`List::contains`], [`List::index_of`] and [`List::copy_to`]
//! keep working.
//!
//! ```
//! use seq_list::{List, ListError};
//!
//! let mut list = List::read_only_from([1, 2, 3]);
//! assert_eq!(list.push_back(4), Err(ListError::ReadOnlyViolation));
//! assert_eq!(list.get(0), Err(ListError::ReadOnlyViolation));
//! assert_eq!(list.iter().sum::<i32>(), 6);
//! ```
//!
//! # Iteration
//!
//! Iterating over a list is by the [`Iter`] iterator, which is double-ended,
//! exact-sized and fused. Each call to [`List::iter`] walks the current
//! chain again from its first element.
//!
//! [`List`]: crate::List
//! [`Iter`]: crate::Iter

#[doc(inline)]
pub use error::{ListError, Result};
#[doc(inline)]
pub use list::iterator::{IntoIter, Iter};
#[doc(inline)]
pub use list::List;

pub mod error;
pub mod list;
