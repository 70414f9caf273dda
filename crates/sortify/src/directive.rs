use std::{fmt, str::FromStr};

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use tablify::{Category, Direction, TableError};

const SEPARATOR: char = '/';

/// The `(category, direction)` pair behind one reorder.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct SortDirective {
    pub category: Category,
    pub direction: Direction,
}

impl SortDirective {
    /// The order the server renders listings in.
    pub const SERVER_DEFAULT: SortDirective = SortDirective {
        category: Category::Name,
        direction: Direction::Ascending,
    };

    pub fn new(category: Category, direction: Direction) -> Self {
        Self {
            category,
            direction,
        }
    }
}

impl Default for SortDirective {
    fn default() -> Self {
        Self::SERVER_DEFAULT
    }
}

impl fmt::Display for SortDirective {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}{}", self.category, SEPARATOR, self.direction)
    }
}

impl FromStr for SortDirective {
    type Err = TableError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (category, direction) = s
            .trim()
            .split_once(SEPARATOR)
            .ok_or_else(|| TableError::MalformedDirective(s.to_string()))?;
        Ok(Self {
            category: category.parse()?,
            direction: direction.parse()?,
        })
    }
}

impl Serialize for SortDirective {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for SortDirective {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        raw.parse().map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wire_format() {
        let directive = SortDirective::new(Category::FileSize, Direction::Descending);
        assert_eq!(directive.to_string(), "file-size/descending");
        assert_eq!(
            "date-modified/ascending".parse::<SortDirective>().unwrap(),
            SortDirective::new(Category::DateModified, Direction::Ascending)
        );
        assert_eq!(SortDirective::default().to_string(), "name/ascending");
    }

    #[test]
    fn test_rejects_unknown_tokens() {
        assert!("size/descending".parse::<SortDirective>().is_err());
        assert!("name/up".parse::<SortDirective>().is_err());
        assert!("name".parse::<SortDirective>().is_err());
        assert!("".parse::<SortDirective>().is_err());
        // Column-index records written by older listing pages.
        assert!("3".parse::<SortDirective>().is_err());
    }

    #[test]
    fn test_serde_as_string() {
        let json = serde_json::to_string(&SortDirective::SERVER_DEFAULT).unwrap();
        assert_eq!(json, "\"name/ascending\"");
        let parsed: SortDirective = serde_json::from_str("\"file-type/descending\"").unwrap();
        assert_eq!(parsed.category, Category::FileType);
        assert!(serde_json::from_str::<SortDirective>("\"bogus\"").is_err());
    }
}
