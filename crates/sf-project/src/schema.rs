//! Scenario schema definitions.

use serde::{Deserialize, Serialize};

pub const SCHEMA_VERSION: u32 = 1;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Scenario {
    pub version: u32,
    pub name: String,
    #[serde(default)]
    pub streams: Vec<StreamDef>,
    #[serde(default)]
    pub columns: Vec<ColumnDef>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct StreamDef {
    pub id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default)]
    pub mass_flow_kgps: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ColumnDef {
    pub id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default)]
    pub inputs: Vec<String>,
    #[serde(default)]
    pub outputs: Vec<String>,
    /// Fraction of feed sent to the first output; column default when absent.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub split_ratio: Option<f64>,
}

impl StreamDef {
    pub fn new(id: impl Into<String>, mass_flow_kgps: f64) -> Self {
        Self {
            id: id.into(),
            name: None,
            mass_flow_kgps,
        }
    }

    pub fn display_name(&self) -> &str {
        self.name.as_deref().unwrap_or(&self.id)
    }
}

impl ColumnDef {
    pub fn display_name(&self) -> &str {
        self.name.as_deref().unwrap_or(&self.id)
    }
}

impl Scenario {
    /// Built-in demonstration: two feeds of 10 and 20 kg/s into one column
    /// sending 60% of the total overhead.
    pub fn demo() -> Self {
        Self {
            version: SCHEMA_VERSION,
            name: "Complex column demo".to_string(),
            streams: vec![
                StreamDef::new("s1", 10.0),
                StreamDef::new("s2", 20.0),
                StreamDef::new("s3", 0.0),
                StreamDef::new("s4", 0.0),
            ],
            columns: vec![ColumnDef {
                id: "column".to_string(),
                name: Some("Complex column".to_string()),
                inputs: vec!["s1".to_string(), "s2".to_string()],
                outputs: vec!["s3".to_string(), "s4".to_string()],
                split_ratio: Some(0.6),
            }],
        }
    }
}
