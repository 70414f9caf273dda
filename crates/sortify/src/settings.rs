use serde::{Deserialize, Serialize};

use crate::SortDirective;

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SortSettings {
    /// Class marking the listing table; fixed tables without it keep their
    /// `no-sort` headers inert.
    pub listing_class: String,
    /// Vault key holding the last directive. The suffix is the record schema.
    pub storage_key: String,
    /// Order the server already renders; replaying it is skipped.
    pub server_default: SortDirective,
}

impl Default for SortSettings {
    fn default() -> Self {
        Self {
            listing_class: tablify::LISTING_CLASS.to_string(),
            storage_key: "table_sort.v1".to_string(),
            server_default: SortDirective::SERVER_DEFAULT,
        }
    }
}
