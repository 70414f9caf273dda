use tablify::{Category, Direction, HeaderCell};
use tracing::debug;

/// First-click direction for a column that is not currently sorted.
///
/// Names and types read naturally A to Z; dates and sizes are most useful
/// newest and largest first. Unclassified columns have no default.
pub fn default_direction(category: Option<Category>) -> Option<Direction> {
    match category? {
        Category::Name | Category::FileType => Some(Direction::Ascending),
        Category::DateModified | Category::FileSize => Some(Direction::Descending),
    }
}

/// Picks the direction for a sort on `cell` and records it as the cell's
/// state. An explicit direction (a replay) always wins; otherwise a sorted
/// cell flips and an unsorted one takes its category default.
///
/// Returns `None` when the cell declines to sort; its state is left alone.
pub fn select_direction(cell: &mut HeaderCell, explicit: Option<Direction>) -> Option<Direction> {
    let direction = explicit
        .or_else(|| cell.state.map(Direction::toggle))
        .or_else(|| default_direction(cell.category));

    match direction {
        Some(direction) => {
            cell.state = Some(direction);
            Some(direction)
        }
        None => {
            debug!("header {:?} has no default direction", cell.label);
            None
        }
    }
}
