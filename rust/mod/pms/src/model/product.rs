use serde::{Deserialize, Serialize};

/// Product: an assembled product line. Its serials all start with `serial_prefix`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    /// Product code (unique).
    pub code: String,

    /// Display name.
    pub name: String,

    /// Leading characters of every serial of this product (e.g. "AB").
    pub serial_prefix: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn product_json_roundtrip() {
        let p = Product {
            code: "PWR-12".into(),
            name: "12V power module".into(),
            serial_prefix: "PM".into(),
            description: Some("Bench assembled".into()),
        };
        let json = serde_json::to_string(&p).unwrap();
        assert!(json.contains("\"serialPrefix\":\"PM\""));
        let back: Product = serde_json::from_str(&json).unwrap();
        assert_eq!(p, back);
    }
}
