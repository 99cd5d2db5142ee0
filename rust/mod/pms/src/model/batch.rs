use serde::{Deserialize, Serialize};

use super::InventoryItem;

/// Batch status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum BatchStatus {
    Draft,
    Submitted,
}

impl Default for BatchStatus {
    fn default() -> Self {
        Self::Draft
    }
}

/// AssembleBatch: a set of assembled units created or edited together and
/// submitted to the backend as one request.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AssembleBatch {
    /// Backend id. Empty until the backend assigns one.
    #[serde(default)]
    pub id: String,

    /// Product code (Product.code).
    pub product: String,

    /// Serial prefix shared by every item.
    pub serial_prefix: String,

    /// Lowest serial in the batch.
    pub from_serial: String,

    /// Highest serial in the batch.
    pub to_serial: String,

    /// Number of units (= items.len()).
    pub quantity: u32,

    #[serde(default)]
    pub status: BatchStatus,

    #[serde(default)]
    pub items: Vec<InventoryItem>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub create_at: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub update_at: Option<String>,
}
