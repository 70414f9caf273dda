use tracing::debug;
use vaultify::{Result, Vault};

use crate::SortDirective;

/// The last user-chosen directive, stored as `category/direction` under one
/// vault key.
pub struct SortStatePersistence<V> {
    vault: V,
    key: String,
}

impl<V: Vault> SortStatePersistence<V> {
    pub fn new(vault: V, key: impl Into<String>) -> Self {
        Self {
            vault,
            key: key.into(),
        }
    }

    pub fn vault(&self) -> &V {
        &self.vault
    }

    pub fn save(&self, directive: SortDirective) -> Result<()> {
        self.vault.set(&self.key, &directive.to_string())
    }

    /// Reads the stored directive. A record that does not parse is treated
    /// as if nothing had been stored.
    pub fn load(&self) -> Result<Option<SortDirective>> {
        let Some(raw) = self.vault.get(&self.key)? else {
            return Ok(None);
        };
        match raw.parse() {
            Ok(directive) => Ok(Some(directive)),
            Err(e) => {
                debug!("ignoring stored sort state {:?}: {}", raw, e);
                Ok(None)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tablify::{Category, Direction};
    use vaultify::MemoryVault;

    #[test]
    fn test_save_then_load() {
        let persistence = SortStatePersistence::new(MemoryVault::new(), "table_sort.v1");
        assert_eq!(persistence.load().unwrap(), None);

        let directive = SortDirective::new(Category::FileSize, Direction::Descending);
        persistence.save(directive).unwrap();
        assert_eq!(persistence.load().unwrap(), Some(directive));
        assert_eq!(
            persistence.vault().get("table_sort.v1").unwrap().as_deref(),
            Some("file-size/descending")
        );
    }

    #[test]
    fn test_unrecognised_record_is_absent() {
        let vault = MemoryVault::new();
        vault.set("table_sort.v1", "size/descending").unwrap();
        let persistence = SortStatePersistence::new(&vault, "table_sort.v1");
        assert_eq!(persistence.load().unwrap(), None);

        vault.set("table_sort.v1", "2").unwrap();
        assert_eq!(persistence.load().unwrap(), None);
    }
}
