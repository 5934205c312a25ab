//! Cursor-based pagination engine
//!
//! Implements Relay cursor connections over any ordered collection
//! that can report its size and hand out a contiguous sub-range.
//!
//! The work is split in two:
//!
//! - [`PaginationArgs::parse`] and [`PageRequest::window`] are pure: they
//!   validate the `first`/`after`/`last`/`before` arguments and turn them into
//!   a [`Window`] once the total count is known.
//! - [`paginate`] drives a [`FetchSource`]: one count, one ranged fetch, then
//!   [`Connection::from_window`] attaches cursors and page info.
//!
//! Usage:
//! ```ignore
//! let args = PaginationArgs::forward(10).after(cursor);
//! let connection = paginate(&db.books().all(), &args, PageLimits::default()).await?;
//! ```

mod connection;
mod cursor;
mod error;
mod source;
mod window;

pub use connection::{Connection, Edge, PageInfo};
pub use cursor::Cursor;
pub use error::{PaginationError, PaginationResult};
pub use source::{FetchSource, SliceSource, connection_from_slice, paginate};
pub use window::{DEFAULT_MAX_PAGE_SIZE, PageLimits, PageRequest, PaginationArgs, Window, resolve_window};
