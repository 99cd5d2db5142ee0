use invtrack_core::{merge_patch, ListParams, ListResult, ServiceError};
use tracing::debug;

use crate::model::InventoryItem;

use super::AssembleSession;

/// Fields a row edit may not touch.
const IMMUTABLE_FIELDS: &[&str] = &["serial_no", "from_serial", "to_serial", "quantity"];

impl AssembleSession {
    /// Remove a single item.
    pub fn delete_item(&mut self, serial: &str) -> Result<InventoryItem, ServiceError> {
        let idx = self.position(serial).ok_or_else(|| not_found(serial))?;
        let item = self.items.remove(idx);
        debug!("assemble: deleted item {}", item.serial_no);
        Ok(item)
    }

    /// Apply a row edit (JSON merge patch) to one item.
    ///
    /// Only `tested_by`, `tested_status` and `test_remarks` are editable. A
    /// `null` resets the field to its default.
    pub fn update_item(
        &mut self,
        serial: &str,
        patch: &serde_json::Value,
    ) -> Result<InventoryItem, ServiceError> {
        let fields = patch
            .as_object()
            .ok_or_else(|| ServiceError::Validation("row edit must be a JSON object".into()))?;
        if let Some(field) = fields.keys().find(|k| IMMUTABLE_FIELDS.contains(&k.as_str())) {
            return Err(ServiceError::Validation(format!(
                "field '{}' cannot be edited",
                field
            )));
        }

        let idx = self.position(serial).ok_or_else(|| not_found(serial))?;
        let mut base = serde_json::to_value(&self.items[idx])
            .map_err(|e| ServiceError::Internal(e.to_string()))?;
        merge_patch(&mut base, patch);
        let updated: InventoryItem =
            serde_json::from_value(base).map_err(|e| ServiceError::Validation(e.to_string()))?;

        debug!("assemble: updated item {}", updated.serial_no);
        self.items[idx] = updated.clone();
        Ok(updated)
    }

    /// One page of the item table, optionally filtered by a serial substring.
    pub fn list(&self, params: &ListParams) -> ListResult<InventoryItem> {
        match params.q.as_deref().map(str::trim).filter(|q| !q.is_empty()) {
            Some(q) => {
                let q = q.to_uppercase();
                let rows: Vec<InventoryItem> = self
                    .items
                    .iter()
                    .filter(|i| i.serial_no.to_uppercase().contains(&q))
                    .cloned()
                    .collect();
                params.page(&rows)
            }
            None => params.page(&self.items),
        }
    }
}

fn not_found(serial: &str) -> ServiceError {
    ServiceError::NotFound(format!("item '{}' not found", serial))
}

#[cfg(test)]
mod tests {
    use super::super::testutil::session;
    use super::*;
    use crate::model::TestStatus;

    #[test]
    fn delete_item_by_padded_or_raw_serial() {
        let mut s = session();
        s.add_range("AB000001", "AB000003", "qa").unwrap();
        assert_eq!(s.delete_item("AB000002").unwrap().serial_no, "AB000002");
        assert_eq!(s.delete_item("AB3").unwrap().serial_no, "AB000003");
        assert_eq!(s.len(), 1);
        assert_eq!(s.delete_item("AB000002").unwrap_err().error_code(), "NOT_FOUND");
    }

    #[test]
    fn update_item_edits_row() {
        let mut s = session();
        s.add_range("AB000001", "AB000002", "qa").unwrap();
        let updated = s
            .update_item(
                "AB000002",
                &serde_json::json!({
                    "tested_status": "FAIL",
                    "test_remarks": "no output on rail 2",
                    "tested_by": "meena",
                }),
            )
            .unwrap();
        assert_eq!(updated.tested_status, TestStatus::Fail);
        assert_eq!(updated.test_remarks, "no output on rail 2");
        assert_eq!(s.items()[1], updated);
        assert_eq!(s.items()[0].tested_status, TestStatus::Pending);
    }

    #[test]
    fn update_item_null_resets_field() {
        let mut s = session();
        s.add_range("AB000001", "AB000001", "qa").unwrap();
        s.update_item("AB000001", &serde_json::json!({"tested_status": "PASS"}))
            .unwrap();
        let updated = s
            .update_item(
                "AB000001",
                &serde_json::json!({"tested_status": null, "tested_by": null}),
            )
            .unwrap();
        assert_eq!(updated.tested_status, TestStatus::Pending);
        assert_eq!(updated.tested_by, "");
    }

    #[test]
    fn update_item_rejects_immutable_and_bad_values() {
        let mut s = session();
        s.add_range("AB000001", "AB000001", "qa").unwrap();

        let err = s
            .update_item("AB000001", &serde_json::json!({"serial_no": "AB000009"}))
            .unwrap_err();
        assert_eq!(err, ServiceError::Validation("field 'serial_no' cannot be edited".into()));

        let err = s
            .update_item("AB000001", &serde_json::json!({"tested_status": "MAYBE"}))
            .unwrap_err();
        assert_eq!(err.error_code(), "VALIDATION_FAILED");

        let err = s.update_item("AB000001", &serde_json::json!("PASS")).unwrap_err();
        assert_eq!(err.error_code(), "VALIDATION_FAILED");

        let err = s
            .update_item("AB000005", &serde_json::json!({"test_remarks": "x"}))
            .unwrap_err();
        assert_eq!(err.error_code(), "NOT_FOUND");
        assert_eq!(s.items()[0].tested_status, TestStatus::Pending);
    }

    #[test]
    fn list_pages_and_filters() {
        let mut s = session();
        s.add_range("AB000001", "AB000012", "qa").unwrap();

        let page = s.list(&ListParams {
            limit: 5,
            offset: 10,
            q: None,
        });
        assert_eq!(page.total, 12);
        assert_eq!(page.items.len(), 2);
        assert_eq!(page.items[0].serial_no, "AB000011");

        let page = s.list(&ListParams {
            q: Some(" ab00001 ".into()),
            ..Default::default()
        });
        let got: Vec<&str> = page.items.iter().map(|i| i.serial_no.as_str()).collect();
        assert_eq!(got, vec!["AB000010", "AB000011", "AB000012"]);
        assert_eq!(page.total, 3);
    }
}
