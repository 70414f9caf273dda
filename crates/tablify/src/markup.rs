//! JSON snapshot of the server-rendered markup.
//!
//! The shapes mirror the HTML the file-index generator emits: class lists and
//! `data-*` attributes stay as strings here and are interpreted when the
//! snapshot is lifted into the typed [`Table`].

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::{
    BodyRow, Category, Cell, Direction, HeaderCell, NO_SORT_CLASS, PARENT_DIR_CLASS, Result,
    SORT_COL_ATTR, SORT_TBR_ATTR, Table, TableBody,
};

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TableMarkup {
    #[serde(default)]
    pub classes: Vec<String>,
    pub thead: Vec<HeaderMarkup>,
    #[serde(default)]
    pub tbody: BodyMarkup,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct HeaderMarkup {
    pub label: String,
    #[serde(default)]
    pub classes: Vec<String>,
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub data: BTreeMap<String, String>,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BodyMarkup {
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub attributes: BTreeMap<String, String>,
    #[serde(default)]
    pub rows: Vec<RowMarkup>,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RowMarkup {
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub classes: Vec<String>,
    pub cells: Vec<CellMarkup>,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CellMarkup {
    pub text: String,
    #[serde(
        default,
        rename = "data-sort",
        skip_serializing_if = "Option::is_none"
    )]
    pub sort: Option<String>,
}

impl From<HeaderMarkup> for HeaderCell {
    fn from(markup: HeaderMarkup) -> Self {
        let mut cell = HeaderCell::new(markup.label);
        for class in markup.classes {
            if let Some(category) = Category::from_class(&class) {
                cell.category = Some(category);
            } else if let Some(direction) = Direction::from_class(&class) {
                cell.state = Some(direction);
            } else if class == NO_SORT_CLASS {
                cell.no_sort = true;
            } else {
                cell.extra_classes.push(class);
            }
        }
        let mut data = markup.data;
        cell.sort_col = data.remove(SORT_COL_ATTR);
        cell.sort_tbr = data.remove(SORT_TBR_ATTR);
        cell
    }
}

impl From<&HeaderCell> for HeaderMarkup {
    fn from(cell: &HeaderCell) -> Self {
        let mut classes = Vec::new();
        if let Some(category) = cell.category {
            classes.push(category.as_str().to_string());
        }
        if cell.no_sort {
            classes.push(NO_SORT_CLASS.to_string());
        }
        classes.extend(cell.extra_classes.iter().cloned());
        if let Some(state) = cell.state {
            classes.push(state.class().to_string());
        }

        let mut data = BTreeMap::new();
        if let Some(raw) = &cell.sort_col {
            data.insert(SORT_COL_ATTR.to_string(), raw.clone());
        }
        if let Some(raw) = &cell.sort_tbr {
            data.insert(SORT_TBR_ATTR.to_string(), raw.clone());
        }

        Self {
            label: cell.label.clone(),
            classes,
            data,
        }
    }
}

impl From<RowMarkup> for BodyRow {
    fn from(markup: RowMarkup) -> Self {
        let (pinned, extra_classes): (Vec<_>, Vec<_>) = markup
            .classes
            .into_iter()
            .partition(|class| class == PARENT_DIR_CLASS);
        BodyRow {
            cells: markup
                .cells
                .into_iter()
                .map(|cell| Cell {
                    text: cell.text,
                    sort_value: cell.sort,
                })
                .collect(),
            pinned: !pinned.is_empty(),
            extra_classes,
        }
    }
}

impl From<&BodyRow> for RowMarkup {
    fn from(row: &BodyRow) -> Self {
        let mut classes = Vec::new();
        if row.pinned {
            classes.push(PARENT_DIR_CLASS.to_string());
        }
        classes.extend(row.extra_classes.iter().cloned());
        RowMarkup {
            classes,
            cells: row
                .cells
                .iter()
                .map(|cell| CellMarkup {
                    text: cell.text.clone(),
                    sort: cell.sort_value.clone(),
                })
                .collect(),
        }
    }
}

impl From<TableMarkup> for Table {
    fn from(markup: TableMarkup) -> Self {
        let table = Table {
            classes: markup.classes,
            header: markup.thead.into_iter().map(HeaderCell::from).collect(),
            body: TableBody {
                attributes: markup.tbody.attributes,
                rows: markup.tbody.rows.into_iter().map(BodyRow::from).collect(),
            },
        };
        let ragged = table.ragged_rows();
        if !ragged.is_empty() {
            warn!(
                "{} row(s) do not match the header width of {}: {:?}",
                ragged.len(),
                table.header.len(),
                ragged
            );
        }
        table
    }
}

impl From<&Table> for TableMarkup {
    fn from(table: &Table) -> Self {
        TableMarkup {
            classes: table.classes.clone(),
            thead: table.header.iter().map(HeaderMarkup::from).collect(),
            tbody: BodyMarkup {
                attributes: table.body.attributes.clone(),
                rows: table.body.rows.iter().map(RowMarkup::from).collect(),
            },
        }
    }
}

impl Table {
    pub fn from_json(json: &str) -> Result<Self> {
        let markup: TableMarkup = serde_json::from_str(json)?;
        Ok(markup.into())
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(&TableMarkup::from(self))?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::LISTING_CLASS;

    const SNAPSHOT: &str = r#"{
        "classes": ["ui", "file-listing"],
        "thead": [
            {"label": "", "classes": ["no-sort", "icon"]},
            {"label": "Name", "classes": ["name", "sort-asc"], "data": {"sort-tbr": "2"}},
            {"label": "Last Modified", "classes": ["date-modified"], "data": {"sort-col": "2"}},
            {"label": "Size", "classes": ["file-size"]}
        ],
        "tbody": {
            "attributes": {"id": "listing"},
            "rows": [
                {"classes": ["parent-dir"], "cells": [
                    {"text": ""}, {"text": "Parent Directory"}, {"text": ""}, {"text": ""}
                ]},
                {"cells": [
                    {"text": ""},
                    {"text": "notes.md"},
                    {"text": "5/29/2025 1:02:03 PM", "data-sort": "1748523723"},
                    {"text": "1.5 KB", "data-sort": "1536"}
                ]}
            ]
        }
    }"#;

    #[test]
    fn test_snapshot_lifts_into_typed_table() {
        let table = Table::from_json(SNAPSHOT).unwrap();
        assert!(table.has_class(LISTING_CLASS));
        assert_eq!(table.header.len(), 4);

        let icon = &table.header[0];
        assert!(icon.no_sort);
        assert_eq!(icon.category, None);
        assert_eq!(icon.extra_classes, vec!["icon".to_string()]);

        let name = &table.header[1];
        assert_eq!(name.category, Some(Category::Name));
        assert_eq!(name.state, Some(Direction::Ascending));
        assert_eq!(name.sort_tbr.as_deref(), Some("2"));
        assert_eq!(name.sort_col, None);

        assert_eq!(table.header[2].sort_col.as_deref(), Some("2"));
        assert_eq!(table.header[3].category, Some(Category::FileSize));

        assert_eq!(table.body.rows.len(), 2);
        assert!(table.body.rows[0].pinned);
        assert!(!table.body.rows[1].pinned);
        assert_eq!(table.body.rows[1].cells[3].value(), "1536");
        assert_eq!(
            table.body.attributes.get("id").map(String::as_str),
            Some("listing")
        );
    }

    #[test]
    fn test_markup_reflects_header_state() {
        let mut table = Table::from_json(SNAPSHOT).unwrap();
        table.header[1].state = None;
        table.header[3].state = Some(Direction::Descending);

        let markup = TableMarkup::from(&table);
        assert_eq!(markup.thead[1].classes, vec!["name".to_string()]);
        assert_eq!(
            markup.thead[3].classes,
            vec!["file-size".to_string(), "sort-desc".to_string()]
        );
        assert_eq!(markup.tbody.rows[0].classes, vec!["parent-dir".to_string()]);

        let reparsed = Table::from_json(&table.to_json().unwrap()).unwrap();
        assert_eq!(reparsed, table);
    }

    #[test]
    fn test_malformed_snapshot_is_an_error() {
        assert!(Table::from_json(r#"{"classes": []}"#).is_err());
    }
}
