//! Column sort engine for file listing tables.
//!
//! A sort action runs in three steps against a [`tablify::Table`]:
//! [`resolve_columns`] works out which body column a header governs (and its
//! tie-break column), [`select_direction`] picks the direction, and
//! [`reorder()`] stably sorts a snapshot of the rows and swaps the body
//! container in one move. [`SortEngine`] strings these together and keeps
//! the last user choice in a [`vaultify::Vault`] so it can be replayed on the
//! next load.

mod collate;
mod compare;
mod direction;
mod directive;
mod engine;
mod persistence;
mod reorder;
mod resolver;
mod settings;

pub use collate::{CollationKey, fold_text};
pub use compare::{CellKey, compare_rows, compare_values, to_number};
pub use direction::{default_direction, select_direction};
pub use directive::SortDirective;
pub use engine::{RestoreOutcome, SortEngine};
pub use persistence::SortStatePersistence;
pub use reorder::{reorder, sorted_body};
pub use resolver::{ColumnSpec, parse_index, resolve_columns};
pub use settings::SortSettings;

pub use tablify::{Category, Direction};
