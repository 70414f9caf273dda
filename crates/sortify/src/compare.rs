//! Row comparison.
//!
//! Values are lifted into a [`CellKey`] once per row before sorting, so the
//! text folding and number coercion run `n` times instead of `n log n`.
//! Keys order as: present before missing, non-empty before empty, numbers
//! before text, then by value. Only the value step follows the direction.

use std::cmp::Ordering;

use tablify::{BodyRow, Cell, Direction};

use crate::{ColumnSpec, collate::CollationKey};

#[derive(Clone, Debug, PartialEq)]
pub enum CellKey {
    /// The row is too short to have this column.
    Missing,
    Empty,
    Number(f64),
    Text(CollationKey),
}

impl CellKey {
    pub fn from_cell(cell: Option<&Cell>) -> Self {
        match cell.map(Cell::value) {
            None => CellKey::Missing,
            Some("") => CellKey::Empty,
            Some(value) => match to_number(value) {
                Some(number) => CellKey::Number(number),
                None => CellKey::Text(CollationKey::new(value)),
            },
        }
    }

    fn rank(&self) -> u8 {
        match self {
            CellKey::Number(_) | CellKey::Text(_) => 0,
            CellKey::Empty => 1,
            CellKey::Missing => 2,
        }
    }

    pub fn compare(&self, other: &Self, direction: Direction) -> Ordering {
        let value = match (self, other) {
            (CellKey::Number(a), CellKey::Number(b)) => {
                a.partial_cmp(b).unwrap_or(Ordering::Equal)
            }
            (CellKey::Number(_), CellKey::Text(_)) => Ordering::Less,
            (CellKey::Text(_), CellKey::Number(_)) => Ordering::Greater,
            (CellKey::Text(a), CellKey::Text(b)) => a.cmp(b),
            _ => return self.rank().cmp(&other.rank()),
        };
        match direction {
            Direction::Ascending => value,
            Direction::Descending => value.reverse(),
        }
    }
}

/// Coerces text to a number the way a browser's `Number()` does, or `None`
/// when the result would be NaN.
pub fn to_number(raw: &str) -> Option<f64> {
    let s = raw.trim();
    if s.is_empty() {
        return Some(0.0);
    }

    const RADIX_PREFIXES: [(&str, u32); 6] =
        [("0x", 16), ("0X", 16), ("0o", 8), ("0O", 8), ("0b", 2), ("0B", 2)];
    for (prefix, radix) in RADIX_PREFIXES {
        if let Some(digits) = s.strip_prefix(prefix) {
            if digits.is_empty() {
                return None;
            }
            return digits.chars().try_fold(0f64, |acc, c| {
                c.to_digit(radix).map(|d| acc * f64::from(radix) + f64::from(d))
            });
        }
    }

    match s {
        "Infinity" | "+Infinity" => return Some(f64::INFINITY),
        "-Infinity" => return Some(f64::NEG_INFINITY),
        _ => {}
    }

    // `str::parse` also takes "inf" and "nan", which the browser does not.
    if !s
        .bytes()
        .all(|b| b.is_ascii_digit() || matches!(b, b'.' | b'e' | b'E' | b'+' | b'-'))
    {
        return None;
    }
    s.parse::<f64>().ok()
}

/// Compares two raw sort values in `direction`.
pub fn compare_values(a: &str, b: &str, direction: Direction) -> Ordering {
    let a = CellKey::from_cell(Some(&Cell::new(a)));
    let b = CellKey::from_cell(Some(&Cell::new(b)));
    a.compare(&b, direction)
}

/// Keys for one row under a [`ColumnSpec`].
#[derive(Clone, Debug)]
pub(crate) struct RowKey {
    pinned: bool,
    primary: CellKey,
    tiebreak: Option<CellKey>,
}

impl RowKey {
    pub(crate) fn new(row: &BodyRow, spec: ColumnSpec) -> Self {
        Self {
            pinned: row.pinned,
            primary: CellKey::from_cell(row.cell(spec.column)),
            tiebreak: spec.tiebreak.map(|ix| CellKey::from_cell(row.cell(ix))),
        }
    }

    pub(crate) fn compare(&self, other: &Self, direction: Direction) -> Ordering {
        // The parent directory stays on top whatever the direction.
        match (self.pinned, other.pinned) {
            (true, false) => return Ordering::Less,
            (false, true) => return Ordering::Greater,
            _ => {}
        }

        let primary = self.primary.compare(&other.primary, direction);
        match (primary, &self.tiebreak, &other.tiebreak) {
            (Ordering::Equal, Some(a), Some(b)) => a.compare(b, direction),
            _ => primary,
        }
    }
}

/// Compares two rows the way [`crate::reorder()`] orders them.
pub fn compare_rows(
    a: &BodyRow,
    b: &BodyRow,
    spec: ColumnSpec,
    direction: Direction,
) -> Ordering {
    RowKey::new(a, spec).compare(&RowKey::new(b, spec), direction)
}
