use tablify::{Direction, Table, TableBody};
use tracing::debug;

use crate::{ColumnSpec, compare::RowKey};

/// Builds a new body container holding `body`'s rows in sorted order.
///
/// The sort is stable: rows equal under both the primary and the tie-break
/// column keep their current relative order.
pub fn sorted_body(body: &TableBody, spec: ColumnSpec, direction: Direction) -> TableBody {
    let mut keyed: Vec<_> = body
        .rows
        .iter()
        .map(|row| (RowKey::new(row, spec), row.clone()))
        .collect();
    keyed.sort_by(|(a, _), (b, _)| a.compare(b, direction));

    let mut fresh = body.empty_clone();
    fresh.append(keyed.into_iter().map(|(_, row)| row));
    fresh
}

/// Reorders the table's rows, replacing the body container in one move.
pub fn reorder(table: &mut Table, spec: ColumnSpec, direction: Direction) {
    let fresh = sorted_body(&table.body, spec, direction);
    debug!(
        "reordered {} rows on column {} ({:?}, tie-break {:?})",
        fresh.rows.len(),
        spec.column,
        direction,
        spec.tiebreak
    );
    table.replace_body(fresh);
}
