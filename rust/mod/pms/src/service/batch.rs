use invtrack_core::{now_rfc3339, ServiceError};
use tracing::info;

use crate::model::{AssembleBatch, BatchStatus, InventoryItem};
use crate::sn;

use super::AssembleSession;

impl AssembleSession {
    /// Build the batch create/update request from the working list.
    ///
    /// Items are ordered by numeric suffix; serials that do not parse sort
    /// last, by string.
    pub fn to_batch(&self) -> Result<AssembleBatch, ServiceError> {
        self.build_batch(BatchStatus::Submitted)
    }

    /// Same request as [`to_batch`](Self::to_batch), marked as a draft the
    /// backend keeps editable.
    pub fn save_draft(&self) -> Result<AssembleBatch, ServiceError> {
        self.build_batch(BatchStatus::Draft)
    }

    fn build_batch(&self, status: BatchStatus) -> Result<AssembleBatch, ServiceError> {
        if self.items.is_empty() {
            return Err(ServiceError::Validation("batch has no items".into()));
        }

        let mut items = self.items.clone();
        items.sort_by_cached_key(sort_key);

        let quantity = u32::try_from(items.len())
            .map_err(|_| ServiceError::Internal("batch too large".into()))?;
        let (from_serial, to_serial) = match (items.first(), items.last()) {
            (Some(first), Some(last)) => (first.serial_no.clone(), last.serial_no.clone()),
            _ => return Err(ServiceError::Validation("batch has no items".into())),
        };

        let now = now_rfc3339();
        info!(
            "assemble: {:?} batch for {} ready, {} units {}..{}",
            status, self.product.code, quantity, from_serial, to_serial
        );

        Ok(AssembleBatch {
            id: self.batch_id.clone(),
            product: self.product.code.clone(),
            serial_prefix: self.product.serial_prefix.clone(),
            from_serial,
            to_serial,
            quantity,
            status,
            items,
            create_at: Some(self.create_at.clone().unwrap_or_else(|| now.clone())),
            update_at: Some(now),
        })
    }

    /// Serialize the batch request body.
    pub fn to_batch_json(&self) -> Result<String, ServiceError> {
        let batch = self.to_batch()?;
        serde_json::to_string(&batch).map_err(|e| ServiceError::Internal(e.to_string()))
    }
}

fn sort_key(item: &InventoryItem) -> (bool, u64, String) {
    match sn::parse(&item.serial_no) {
        Ok(parts) => (false, parts.value, item.serial_no.clone()),
        Err(_) => (true, 0, item.serial_no.clone()),
    }
}
