use std::{collections::BTreeMap, fmt, str::FromStr};

use crate::{LISTING_CLASS, TableError};

/// Semantic kind of a column, independent of where it sits in the row.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Category {
    Name,
    FileType,
    DateModified,
    FileSize,
}

impl Category {
    pub const ALL: [Category; 4] = [
        Category::Name,
        Category::FileType,
        Category::DateModified,
        Category::FileSize,
    ];

    /// Token used both as the header class and in persisted state.
    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Name => "name",
            Category::FileType => "file-type",
            Category::DateModified => "date-modified",
            Category::FileSize => "file-size",
        }
    }

    pub fn from_class(class: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|c| c.as_str() == class)
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Category {
    type Err = TableError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_class(s).ok_or_else(|| TableError::UnknownCategory(s.to_string()))
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Direction {
    Ascending,
    Descending,
}

impl Direction {
    pub fn toggle(self) -> Self {
        match self {
            Direction::Ascending => Direction::Descending,
            Direction::Descending => Direction::Ascending,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Direction::Ascending => "ascending",
            Direction::Descending => "descending",
        }
    }

    /// State class rendered on the header cell.
    pub fn class(&self) -> &'static str {
        match self {
            Direction::Ascending => "sort-asc",
            Direction::Descending => "sort-desc",
        }
    }

    pub fn from_class(class: &str) -> Option<Self> {
        match class {
            "sort-asc" => Some(Direction::Ascending),
            "sort-desc" => Some(Direction::Descending),
            _ => None,
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Direction {
    type Err = TableError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "ascending" => Ok(Direction::Ascending),
            "descending" => Ok(Direction::Descending),
            _ => Err(TableError::UnknownDirection(s.to_string())),
        }
    }
}

/// One sortable column header.
///
/// `sort_col` and `sort_tbr` hold the raw attribute text as rendered; they are
/// only interpreted when a sort resolves its columns.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct HeaderCell {
    pub label: String,
    pub category: Option<Category>,
    pub state: Option<Direction>,
    pub sort_col: Option<String>,
    pub sort_tbr: Option<String>,
    pub no_sort: bool,
    /// Classes the engine does not interpret, kept for re-rendering.
    pub extra_classes: Vec<String>,
}

impl HeaderCell {
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            ..Default::default()
        }
    }

    pub fn with_category(mut self, category: Category) -> Self {
        self.category = Some(category);
        self
    }

    pub fn with_state(mut self, state: Direction) -> Self {
        self.state = Some(state);
        self
    }

    pub fn with_sort_col(mut self, raw: impl Into<String>) -> Self {
        self.sort_col = Some(raw.into());
        self
    }

    pub fn with_tiebreak(mut self, raw: impl Into<String>) -> Self {
        self.sort_tbr = Some(raw.into());
        self
    }

    pub fn no_sort(mut self) -> Self {
        self.no_sort = true;
        self
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Cell {
    pub text: String,
    pub sort_value: Option<String>,
}

impl Cell {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            sort_value: None,
        }
    }

    pub fn with_sort_value(mut self, value: impl Into<String>) -> Self {
        self.sort_value = Some(value.into());
        self
    }

    /// The value the comparator orders by: the `data-sort` override when
    /// present, the display text otherwise.
    pub fn value(&self) -> &str {
        self.sort_value.as_deref().unwrap_or(&self.text)
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct BodyRow {
    pub cells: Vec<Cell>,
    pub pinned: bool,
    pub extra_classes: Vec<String>,
}

impl BodyRow {
    pub fn new(cells: Vec<Cell>) -> Self {
        Self {
            cells,
            ..Default::default()
        }
    }

    /// The "parent directory" entry, always listed first.
    pub fn parent_dir(cells: Vec<Cell>) -> Self {
        Self {
            cells,
            pinned: true,
            ..Default::default()
        }
    }

    pub fn cell(&self, index: usize) -> Option<&Cell> {
        self.cells.get(index)
    }
}

/// The row container. A reorder builds a fresh one with the same attributes.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct TableBody {
    pub attributes: BTreeMap<String, String>,
    pub rows: Vec<BodyRow>,
}

impl TableBody {
    pub fn new(rows: Vec<BodyRow>) -> Self {
        Self {
            attributes: BTreeMap::new(),
            rows,
        }
    }

    /// Shallow clone: same attributes, no rows.
    pub fn empty_clone(&self) -> Self {
        Self {
            attributes: self.attributes.clone(),
            rows: Vec::new(),
        }
    }

    pub fn append<I: IntoIterator<Item = BodyRow>>(&mut self, rows: I) {
        self.rows.extend(rows);
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Table {
    pub classes: Vec<String>,
    pub header: Vec<HeaderCell>,
    pub body: TableBody,
}

impl Table {
    /// A table carrying the listing marker class.
    pub fn listing(header: Vec<HeaderCell>, rows: Vec<BodyRow>) -> Self {
        Self {
            classes: vec![LISTING_CLASS.to_string()],
            header,
            body: TableBody::new(rows),
        }
    }

    pub fn has_class(&self, class: &str) -> bool {
        self.classes.iter().any(|c| c == class)
    }

    /// Header position of the first cell declaring `category`.
    pub fn find_category(&self, category: Category) -> Option<usize> {
        self.header
            .iter()
            .position(|cell| cell.category == Some(category))
    }

    /// Rows whose cell count disagrees with the header.
    pub fn ragged_rows(&self) -> Vec<usize> {
        let width = self.header.len();
        self.body
            .rows
            .iter()
            .enumerate()
            .filter(|(_, row)| row.cells.len() != width)
            .map(|(ix, _)| ix)
            .collect()
    }

    /// Swaps in a new body container in one move and hands back the old one.
    pub fn replace_body(&mut self, body: TableBody) -> TableBody {
        std::mem::replace(&mut self.body, body)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_tokens() {
        for category in Category::ALL {
            assert_eq!(category.as_str().parse::<Category>().unwrap(), category);
        }
        assert!(matches!(
            "size".parse::<Category>(),
            Err(TableError::UnknownCategory(s)) if s == "size"
        ));
    }

    #[test]
    fn test_direction_toggle_and_class() {
        assert_eq!(Direction::Ascending.toggle(), Direction::Descending);
        assert_eq!(Direction::Descending.toggle(), Direction::Ascending);
        assert_eq!(Direction::from_class("sort-desc"), Some(Direction::Descending));
        assert_eq!(Direction::from_class("asc"), None);
        assert!("up".parse::<Direction>().is_err());
    }

    #[test]
    fn test_cell_value_prefers_override() {
        let cell = Cell::new("1.5 KB").with_sort_value("1536");
        assert_eq!(cell.value(), "1536");
        assert_eq!(Cell::new("notes.md").value(), "notes.md");
    }

    #[test]
    fn test_replace_body_keeps_attributes_on_clone() {
        let mut table = Table::listing(
            vec![HeaderCell::new("Name").with_category(Category::Name)],
            vec![BodyRow::new(vec![Cell::new("a")])],
        );
        table
            .body
            .attributes
            .insert("id".to_string(), "listing-body".to_string());

        let mut fresh = table.body.empty_clone();
        assert!(fresh.rows.is_empty());
        fresh.append(vec![BodyRow::new(vec![Cell::new("b")])]);

        let old = table.replace_body(fresh);
        assert_eq!(old.rows[0].cells[0].text, "a");
        assert_eq!(table.body.rows[0].cells[0].text, "b");
        assert_eq!(
            table.body.attributes.get("id").map(String::as_str),
            Some("listing-body")
        );
    }

    #[test]
    fn test_ragged_rows() {
        let table = Table::listing(
            vec![HeaderCell::new("Name"), HeaderCell::new("Size")],
            vec![
                BodyRow::new(vec![Cell::new("a"), Cell::new("1")]),
                BodyRow::new(vec![Cell::new("b")]),
            ],
        );
        assert_eq!(table.ragged_rows(), vec![1]);
    }
}
