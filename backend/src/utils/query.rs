//! List query post-processing shared by the product and cart endpoints.
//!
//! `sort` and `limit` are applied at the handler boundary after the store
//! has filtered and ordered; they impose no invariant on the store itself.

use serde::{Deserialize, Deserializer};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SortOrder {
    #[default]
    Ascending,
    Descending,
}

impl<'de> Deserialize<'de> for SortOrder {
    // `sort=desc` (any casing) selects descending; every other value keeps
    // the ascending default, mirroring the lenient query contract.
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        if raw.eq_ignore_ascii_case("desc") {
            Ok(SortOrder::Descending)
        } else {
            Ok(SortOrder::Ascending)
        }
    }
}

#[derive(Debug, Default, Deserialize)]
pub struct ListQuery {
    #[serde(default)]
    pub sort: SortOrder,
    pub limit: Option<u32>,
}

impl ListQuery {
    /// Reverses the sequence for descending sort, then truncates to a
    /// positive limit. A limit of zero is ignored.
    pub fn apply<T>(&self, mut items: Vec<T>) -> Vec<T> {
        if self.sort == SortOrder::Descending {
            items.reverse();
        }
        if let Some(limit) = self.limit.filter(|l| *l > 0) {
            items.truncate(limit as usize);
        }
        items
    }
}
