//! Shopping cart models.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Cart {
    /// Assigned by the store; any caller-supplied value is ignored on
    /// create and forced to the path id on update.
    #[serde(default)]
    pub id: u32,
    /// Owning user's external identifier.
    pub user_id: String,
    pub date: DateTime<Utc>,
    pub products: Vec<CartProduct>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CartProduct {
    pub product_id: u32,
    pub quantity: u32,
}
