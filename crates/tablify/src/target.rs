use crate::{HeaderCell, Table};

/// One node on the path from an event target up to the document root.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Node {
    /// A header cell at the given physical position in the header row.
    HeaderCell(usize),
    /// Anything else (a span or icon inside a header, the row, the table).
    Element(String),
}

/// An event target as the chain of its ancestors, target first.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct EventTarget {
    path: Vec<Node>,
}

impl EventTarget {
    pub fn new(path: Vec<Node>) -> Self {
        Self { path }
    }

    /// A click landing directly on a header cell.
    pub fn header(position: usize) -> Self {
        Self::new(vec![Node::HeaderCell(position)])
    }

    /// A click on an element nested inside a header cell.
    pub fn inside_header(tag: impl Into<String>, position: usize) -> Self {
        Self::new(vec![Node::Element(tag.into()), Node::HeaderCell(position)])
    }

    pub fn path(&self) -> &[Node] {
        &self.path
    }
}

/// Walks from the target outwards to the nearest enclosing header cell.
pub fn resolve_header_cell<'a>(
    table: &'a Table,
    target: &EventTarget,
) -> Option<(usize, &'a HeaderCell)> {
    let position = target.path.iter().find_map(|node| match node {
        Node::HeaderCell(position) => Some(*position),
        Node::Element(_) => None,
    })?;
    table.header.get(position).map(|cell| (position, cell))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Category;

    fn table() -> Table {
        Table::listing(
            vec![
                HeaderCell::new("Name").with_category(Category::Name),
                HeaderCell::new("Size").with_category(Category::FileSize),
            ],
            vec![],
        )
    }

    #[test]
    fn test_resolves_nested_target() {
        let table = table();
        let target = EventTarget::inside_header("span", 1);
        let (position, cell) = resolve_header_cell(&table, &target).unwrap();
        assert_eq!(position, 1);
        assert_eq!(cell.label, "Size");
    }

    #[test]
    fn test_nearest_header_wins() {
        let table = table();
        let target = EventTarget::new(vec![
            Node::Element("i".into()),
            Node::HeaderCell(0),
            Node::Element("tr".into()),
            Node::HeaderCell(1),
        ]);
        assert_eq!(resolve_header_cell(&table, &target).map(|(p, _)| p), Some(0));
    }

    #[test]
    fn test_unresolvable_targets() {
        let table = table();
        let outside = EventTarget::new(vec![
            Node::Element("td".into()),
            Node::Element("tbody".into()),
        ]);
        assert!(resolve_header_cell(&table, &outside).is_none());
        assert!(resolve_header_cell(&table, &EventTarget::header(7)).is_none());
        assert!(resolve_header_cell(&table, &EventTarget::default()).is_none());
    }
}
