//! In-memory model of a pre-rendered file listing table.
//!
//! The server renders the listing; this crate only carries what the sort
//! engine reads and mutates: header cells with their category and sort state,
//! body rows with display text and `data-sort` overrides, and the body
//! container that gets swapped out after a reorder.

mod error;
mod markup;
mod model;
mod target;

pub use error::{Result, TableError};
pub use markup::{BodyMarkup, CellMarkup, HeaderMarkup, RowMarkup, TableMarkup};
pub use model::{BodyRow, Category, Cell, Direction, HeaderCell, Table, TableBody};
pub use target::{EventTarget, Node, resolve_header_cell};

/// Class carried by the listing table itself.
pub const LISTING_CLASS: &str = "file-listing";
/// Class on header cells that must never be sorted on fixed tables.
pub const NO_SORT_CLASS: &str = "no-sort";
/// Class on the "parent directory" row.
pub const PARENT_DIR_CLASS: &str = "parent-dir";
/// Header data attribute overriding the governed column index.
pub const SORT_COL_ATTR: &str = "sort-col";
/// Header data attribute naming the tie-break column index.
pub const SORT_TBR_ATTR: &str = "sort-tbr";
