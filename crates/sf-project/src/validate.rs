//! Scenario validation logic.

use crate::schema::{SCHEMA_VERSION, Scenario};
use sf_core::numeric::{ensure_finite, in_unit_interval};
use std::collections::HashSet;

#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum ValidationError {
    #[error("Unsupported version: {version} (expected {expected})")]
    UnsupportedVersion { version: u32, expected: u32 },

    #[error("Empty ID in {context}")]
    EmptyId { context: String },

    #[error("Duplicate ID: {id} in {context}")]
    DuplicateId { id: String, context: String },

    #[error("Missing reference: {id} in {context}")]
    MissingReference { id: String, context: String },

    #[error("Invalid value: {field} = {value} ({reason})")]
    InvalidValue {
        field: String,
        value: String,
        reason: String,
    },
}

pub fn validate_scenario(scenario: &Scenario) -> Result<(), ValidationError> {
    if scenario.version != SCHEMA_VERSION {
        return Err(ValidationError::UnsupportedVersion {
            version: scenario.version,
            expected: SCHEMA_VERSION,
        });
    }

    let mut stream_ids = HashSet::new();
    for stream in &scenario.streams {
        if stream.id.is_empty() {
            return Err(ValidationError::EmptyId {
                context: "streams".to_string(),
            });
        }
        if !stream_ids.insert(stream.id.as_str()) {
            return Err(ValidationError::DuplicateId {
                id: stream.id.clone(),
                context: "streams".to_string(),
            });
        }
        ensure_finite(stream.mass_flow_kgps, "mass_flow_kgps").map_err(|e| {
            ValidationError::InvalidValue {
                field: format!("streams.{}.mass_flow_kgps", stream.id),
                value: stream.mass_flow_kgps.to_string(),
                reason: e.to_string(),
            }
        })?;
    }

    let mut column_ids = HashSet::new();
    for column in &scenario.columns {
        if column.id.is_empty() {
            return Err(ValidationError::EmptyId {
                context: "columns".to_string(),
            });
        }
        if !column_ids.insert(column.id.as_str()) {
            return Err(ValidationError::DuplicateId {
                id: column.id.clone(),
                context: "columns".to_string(),
            });
        }

        for (side, refs) in [("inputs", &column.inputs), ("outputs", &column.outputs)] {
            // One stream in two slots of a side would take two writes (or be
            // counted twice), so each slot needs its own stream.
            let mut seen = HashSet::new();
            for stream_id in refs {
                if !stream_ids.contains(stream_id.as_str()) {
                    return Err(ValidationError::MissingReference {
                        id: stream_id.clone(),
                        context: format!("columns.{}.{}", column.id, side),
                    });
                }
                if !seen.insert(stream_id.as_str()) {
                    return Err(ValidationError::DuplicateId {
                        id: stream_id.clone(),
                        context: format!("columns.{}.{}", column.id, side),
                    });
                }
            }
        }

        if let Some(ratio) = column.split_ratio
            && !in_unit_interval(ratio)
        {
            return Err(ValidationError::InvalidValue {
                field: format!("columns.{}.split_ratio", column.id),
                value: ratio.to_string(),
                reason: "must be within [0, 1]".to_string(),
            });
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::StreamDef;

    #[test]
    fn demo_is_valid() {
        validate_scenario(&Scenario::demo()).unwrap();
    }

    #[test]
    fn rejects_future_version() {
        let mut s = Scenario::demo();
        s.version = 2;
        assert!(matches!(
            validate_scenario(&s),
            Err(ValidationError::UnsupportedVersion { version: 2, .. })
        ));
    }

    #[test]
    fn rejects_duplicate_stream() {
        let mut s = Scenario::demo();
        s.streams.push(StreamDef::new("s1", 1.0));
        assert_eq!(
            validate_scenario(&s),
            Err(ValidationError::DuplicateId {
                id: "s1".to_string(),
                context: "streams".to_string()
            })
        );
    }

    #[test]
    fn rejects_empty_id() {
        let mut s = Scenario::demo();
        s.streams.push(StreamDef::new("", 1.0));
        assert!(matches!(
            validate_scenario(&s),
            Err(ValidationError::EmptyId { .. })
        ));
    }

    #[test]
    fn rejects_missing_output_reference() {
        let mut s = Scenario::demo();
        s.columns[0].outputs[1] = "nowhere".to_string();
        assert_eq!(
            validate_scenario(&s),
            Err(ValidationError::MissingReference {
                id: "nowhere".to_string(),
                context: "columns.column.outputs".to_string()
            })
        );
    }

    #[test]
    fn rejects_out_of_range_ratio() {
        for bad in [-0.1, 1.1, f64::NAN] {
            let mut s = Scenario::demo();
            s.columns[0].split_ratio = Some(bad);
            assert!(matches!(
                validate_scenario(&s),
                Err(ValidationError::InvalidValue { .. })
            ));
        }
    }

    #[test]
    fn rejects_non_finite_flow() {
        let mut s = Scenario::demo();
        s.streams[0].mass_flow_kgps = f64::INFINITY;
        let err = validate_scenario(&s).unwrap_err();
        assert!(err.to_string().contains("streams.s1.mass_flow_kgps"));
        assert!(err.to_string().contains("Non-finite"));
    }

    #[test]
    fn rejects_stream_repeated_on_one_side() {
        let mut s = Scenario::demo();
        s.columns[0].outputs = vec!["s3".to_string(), "s3".to_string()];
        assert_eq!(
            validate_scenario(&s),
            Err(ValidationError::DuplicateId {
                id: "s3".to_string(),
                context: "columns.column.outputs".to_string()
            })
        );

        let mut s = Scenario::demo();
        s.columns[0].inputs = vec!["s1".to_string(), "s1".to_string()];
        assert_eq!(
            validate_scenario(&s),
            Err(ValidationError::DuplicateId {
                id: "s1".to_string(),
                context: "columns.column.inputs".to_string()
            })
        );
    }

    #[test]
    fn negative_flow_is_allowed() {
        let mut s = Scenario::demo();
        s.streams[0].mass_flow_kgps = -5.0;
        assert!(validate_scenario(&s).is_ok());
    }
}
