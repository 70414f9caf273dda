use tablify::Table;
use tracing::debug;

/// Body columns governed by one header cell.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ColumnSpec {
    pub column: usize,
    pub tiebreak: Option<usize>,
}

/// Reads an index attribute. Absent or malformed text means "not present".
pub fn parse_index(raw: Option<&str>) -> Option<usize> {
    raw?.trim().parse().ok()
}

/// Resolves the columns behind the header at `position` and clears the sort
/// state of every other header.
///
/// Returns `None` without touching the table when the header does not exist,
/// or when it is marked `no-sort` on a table that is not the file listing.
pub fn resolve_columns(
    table: &mut Table,
    position: usize,
    listing_class: &str,
) -> Option<ColumnSpec> {
    let is_listing = table.has_class(listing_class);
    let cell = table.header.get(position)?;
    if cell.no_sort && !is_listing {
        debug!("ignoring no-sort header {} outside the listing", position);
        return None;
    }

    let spec = ColumnSpec {
        // An explicit "0" is a real column; only absent or malformed text
        // falls back to the physical position.
        column: parse_index(cell.sort_col.as_deref()).unwrap_or(position),
        tiebreak: parse_index(cell.sort_tbr.as_deref()),
    };

    for (ix, other) in table.header.iter_mut().enumerate() {
        if ix != position {
            other.state = None;
        }
    }
    Some(spec)
}
