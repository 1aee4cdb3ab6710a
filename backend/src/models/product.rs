//! Product catalog entry.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    /// Assigned by the store; any caller-supplied value is ignored on
    /// create and forced to the path id on update.
    #[serde(default)]
    pub id: u32,
    pub title: String,
    pub price: f64,
    pub description: String,
    pub image: String,
    pub category: String,
}
