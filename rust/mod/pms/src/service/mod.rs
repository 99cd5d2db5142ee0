pub mod batch;
pub mod item_ops;
pub mod range_ops;

use std::collections::HashSet;

use invtrack_core::ServiceError;
use serde::Serialize;

use crate::model::{AssembleBatch, InventoryItem, Product, TestStatus};
use crate::sn::{self, CatalogConfig};

/// Assemble session: the working list of units for one add/edit session of
/// one product.
///
/// Nothing here reaches the backend. The caller submits [`AssembleSession::to_batch`]
/// when the user saves, and drops the session on navigation.
#[derive(Debug, Clone)]
pub struct AssembleSession {
    pub(crate) product: Product,
    pub(crate) max_batch_size: usize,
    pub(crate) items: Vec<InventoryItem>,
    pub(crate) batch_id: String,
    pub(crate) create_at: Option<String>,
}

/// Per-status counts shown above the item table.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct BatchSummary {
    pub total: usize,
    pub pass: usize,
    pub fail: usize,
    pub pending: usize,
}

impl AssembleSession {
    /// Start an empty session for `product_code` (add page).
    pub fn new(config: &CatalogConfig, product_code: &str) -> Result<Self, ServiceError> {
        config.validate().map_err(validation)?;
        let product = lookup_product(config, product_code)?;
        Ok(Self {
            product,
            max_batch_size: config.max_batch_size,
            items: Vec::new(),
            batch_id: String::new(),
            create_at: None,
        })
    }

    /// Resume a session from a batch returned by the backend (edit page).
    pub fn from_batch(config: &CatalogConfig, batch: AssembleBatch) -> Result<Self, ServiceError> {
        config.validate().map_err(validation)?;
        let product = lookup_product(config, &batch.product)?;
        if batch.serial_prefix != product.serial_prefix {
            return Err(ServiceError::Validation(format!(
                "batch prefix '{}' does not match product '{}' prefix '{}'",
                batch.serial_prefix, product.code, product.serial_prefix
            )));
        }
        if let Some(item) = batch
            .items
            .iter()
            .find(|item| !item.serial_no.starts_with(&product.serial_prefix))
        {
            return Err(ServiceError::Validation(format!(
                "item '{}' does not carry product '{}' prefix '{}'",
                item.serial_no, product.code, product.serial_prefix
            )));
        }
        tracing::debug!(
            "assemble: loaded batch {} with {} items",
            batch.id,
            batch.items.len()
        );
        Ok(Self {
            product,
            max_batch_size: config.max_batch_size,
            items: batch.items,
            batch_id: batch.id,
            create_at: batch.create_at,
        })
    }

    pub fn product(&self) -> &Product {
        &self.product
    }

    pub fn items(&self) -> &[InventoryItem] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Count items per test status.
    pub fn summary(&self) -> BatchSummary {
        self.items.iter().fold(BatchSummary::default(), |mut s, item| {
            s.total += 1;
            match item.tested_status {
                TestStatus::Pass => s.pass += 1,
                TestStatus::Fail => s.fail += 1,
                TestStatus::Pending => s.pending += 1,
            }
            s
        })
    }

    /// Serials already in the list, plus the zero-padded form of any stored
    /// serial that was saved without padding.
    pub(crate) fn serial_set(&self) -> HashSet<String> {
        let mut set = HashSet::with_capacity(self.items.len());
        for item in &self.items {
            if let Ok(parts) = sn::parse(&item.serial_no) {
                set.insert(parts.canonical());
            }
            set.insert(item.serial_no.clone());
        }
        set
    }

    /// Index of the item with `serial`, matching padded and unpadded forms.
    pub(crate) fn position(&self, serial: &str) -> Option<usize> {
        if let Some(i) = self.items.iter().position(|i| i.serial_no == serial) {
            return Some(i);
        }
        let wanted = sn::parse(serial).ok()?.canonical();
        self.items.iter().position(|item| {
            sn::parse(&item.serial_no)
                .map(|p| p.canonical() == wanted)
                .unwrap_or(false)
        })
    }
}

fn lookup_product(config: &CatalogConfig, code: &str) -> Result<Product, ServiceError> {
    config
        .product(code)
        .cloned()
        .ok_or_else(|| ServiceError::NotFound(format!("product '{}' not found", code)))
}

/// Map an engine error onto the form-facing error.
pub(crate) fn validation(e: impl std::fmt::Display) -> ServiceError {
    ServiceError::Validation(e.to_string())
}
