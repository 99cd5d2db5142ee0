use serde::{Deserialize, Serialize};

/// Outcome of the unit's functional test.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TestStatus {
    Pass,
    Fail,
    Pending,
}

impl Default for TestStatus {
    fn default() -> Self {
        Self::Pending
    }
}

/// InventoryItem: one physical assembled unit. PK = serial_no.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct InventoryItem {
    /// Unit serial number (e.g. "AB000123").
    pub serial_no: String,

    /// Who ran the functional test.
    #[serde(default)]
    pub tested_by: String,

    #[serde(default)]
    pub tested_status: TestStatus,

    #[serde(default)]
    pub test_remarks: String,

    /// First serial of the range this unit was added with.
    pub from_serial: String,

    /// Last serial of the range this unit was added with.
    pub to_serial: String,

    /// Always 1 at item granularity.
    #[serde(default = "one")]
    pub quantity: u32,
}

fn one() -> u32 {
    1
}

impl InventoryItem {
    /// A freshly added, untested unit.
    pub fn new(
        serial_no: impl Into<String>,
        from_serial: impl Into<String>,
        to_serial: impl Into<String>,
        tested_by: impl Into<String>,
    ) -> Self {
        Self {
            serial_no: serial_no.into(),
            tested_by: tested_by.into(),
            tested_status: TestStatus::Pending,
            test_remarks: String::new(),
            from_serial: from_serial.into(),
            to_serial: to_serial.into(),
            quantity: 1,
        }
    }
}
