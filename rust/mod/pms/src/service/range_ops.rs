use invtrack_core::ServiceError;
use tracing::{debug, warn};

use crate::model::{InventoryItem, TestStatus};
use crate::sn::{diff_on_delete, find_duplicates, validate_against_product, SerialRange};

use super::{validation, AssembleSession};

/// Duplicates listed in a conflict message before it is cut short.
const CONFLICT_PREVIEW: usize = 5;

impl AssembleSession {
    /// Expand `from..=to` and append every unit as a PENDING item.
    ///
    /// Both ends must carry the product prefix and a six-digit suffix. The
    /// whole range is rejected if any serial is already in the list.
    pub fn add_range(&mut self, from: &str, to: &str, tested_by: &str) -> Result<usize, ServiceError> {
        let prefix = self.product.serial_prefix.as_str();
        validate_against_product(from, prefix).map_err(validation)?;
        validate_against_product(to, prefix).map_err(validation)?;
        let range = SerialRange::new(from, to).map_err(validation)?;

        let total = self.items.len() as u64 + range.count();
        if total > self.max_batch_size as u64 {
            return Err(ServiceError::Validation(format!(
                "batch would hold {} items, limit is {}",
                total, self.max_batch_size
            )));
        }

        let serials = range.expand().map_err(validation)?;
        let dups = find_duplicates(&serials, &self.serial_set());
        if !dups.is_empty() {
            warn!(
                "assemble: rejected {}..{}: {} serials already present",
                from,
                to,
                dups.len()
            );
            return Err(ServiceError::Conflict(conflict_message(&dups)));
        }

        let added = serials.len();
        self.items.extend(
            serials
                .into_iter()
                .map(|serial| InventoryItem::new(serial, from, to, tested_by)),
        );
        debug!("assemble: added {} items {}..{}", added, from, to);
        Ok(added)
    }

    /// Remove every item whose serial falls inside `from..=to`.
    pub fn delete_range(&mut self, from: &str, to: &str) -> Result<Vec<InventoryItem>, ServiceError> {
        let range = self.product_range(from, to)?;
        let removed = diff_on_delete(&range, &self.items);
        if removed.is_empty() {
            return Err(ServiceError::NotFound(format!(
                "no items between {} and {}",
                from, to
            )));
        }

        self.items.retain(|item| !range.contains(&item.serial_no));
        debug!("assemble: removed {} items {}..{}", removed.len(), from, to);
        Ok(removed)
    }

    /// Set the test status of every item inside `from..=to`.
    pub fn set_status_for_range(
        &mut self,
        from: &str,
        to: &str,
        status: TestStatus,
    ) -> Result<usize, ServiceError> {
        let range = self.product_range(from, to)?;
        let mut changed = 0;
        for item in self.items.iter_mut().filter(|i| range.contains(&i.serial_no)) {
            item.tested_status = status;
            changed += 1;
        }
        if changed == 0 {
            return Err(ServiceError::NotFound(format!(
                "no items between {} and {}",
                from, to
            )));
        }
        debug!("assemble: set {:?} on {} items", status, changed);
        Ok(changed)
    }

    /// Build a range over this product's serials. Unpadded ends are accepted.
    fn product_range(&self, from: &str, to: &str) -> Result<SerialRange, ServiceError> {
        let range = SerialRange::new(from, to).map_err(validation)?;
        if range.prefix() != self.product.serial_prefix {
            return Err(ServiceError::Validation(format!(
                "serial prefix '{}' does not match expected '{}'",
                range.prefix(),
                self.product.serial_prefix
            )));
        }
        Ok(range)
    }
}

fn conflict_message(dups: &[String]) -> String {
    let shown = dups
        .iter()
        .take(CONFLICT_PREVIEW)
        .map(String::as_str)
        .collect::<Vec<_>>()
        .join(", ");
    if dups.len() > CONFLICT_PREVIEW {
        format!(
            "serials already in batch: {} and {} more",
            shown,
            dups.len() - CONFLICT_PREVIEW
        )
    } else {
        format!("serials already in batch: {}", shown)
    }
}
