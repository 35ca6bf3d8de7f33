//! Turn a validated scenario into live streams and columns, and run it once.

use crate::schema::Scenario;
use crate::validate::validate_scenario;
use crate::{ProjectError, ProjectResult};
use serde::Serialize;
use sf_core::units::{as_kgps, kgps};
use sf_core::{DeviceId, SfError, StreamId};
use sf_devices::{Column, Device, DeviceError, StreamTable};
use std::collections::HashMap;

/// Streams and columns created from a scenario, wired and ready to update.
#[derive(Debug, Clone)]
pub struct BuiltScenario {
    name: String,
    streams: StreamTable,
    columns: Vec<Column>,
    stream_keys: Vec<String>,
    column_keys: Vec<String>,
    stream_ids: HashMap<String, StreamId>,
}

/// Stream values after a run, in declaration order.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScenarioReport {
    pub name: String,
    pub streams: Vec<StreamReport>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StreamReport {
    pub id: String,
    pub name: String,
    pub mass_flow_kgps: f64,
}

/// Validate `scenario` and build it through the `Device` wiring contract.
pub fn build(scenario: &Scenario) -> ProjectResult<BuiltScenario> {
    validate_scenario(scenario)?;

    let mut streams = StreamTable::new();
    let mut stream_ids = HashMap::with_capacity(scenario.streams.len());
    for def in &scenario.streams {
        let id = streams.add(def.display_name(), kgps(def.mass_flow_kgps));
        stream_ids.insert(def.id.clone(), id);
    }

    let mut columns = Vec::with_capacity(scenario.columns.len());
    for def in &scenario.columns {
        let device_err = |source: DeviceError| ProjectError::Device {
            column: def.id.clone(),
            source,
        };

        let mut column = Column::new(def.display_name());
        if let Some(ratio) = def.split_ratio {
            column.set_split_ratio(ratio).map_err(device_err)?;
        }
        for key in &def.inputs {
            column
                .attach_input(resolve(&stream_ids, key)?)
                .map_err(device_err)?;
        }
        for key in &def.outputs {
            column
                .attach_output(resolve(&stream_ids, key)?)
                .map_err(device_err)?;
        }
        columns.push(column);
    }

    Ok(BuiltScenario {
        name: scenario.name.clone(),
        streams,
        columns,
        stream_keys: scenario.streams.iter().map(|s| s.id.clone()).collect(),
        column_keys: scenario.columns.iter().map(|c| c.id.clone()).collect(),
        stream_ids,
    })
}

/// Build `scenario`, update every column once and report the stream values.
pub fn run(scenario: &Scenario) -> ProjectResult<ScenarioReport> {
    let mut built = build(scenario)?;
    built.update_all()?;
    Ok(built.report())
}

fn resolve(ids: &HashMap<String, StreamId>, key: &str) -> ProjectResult<StreamId> {
    ids.get(key).copied().ok_or_else(|| {
        ProjectError::Validation(crate::ValidationError::MissingReference {
            id: key.to_string(),
            context: "stream table".to_string(),
        })
    })
}

impl BuiltScenario {
    pub fn stream_id(&self, key: &str) -> Option<StreamId> {
        self.stream_ids.get(key).copied()
    }

    pub fn streams(&self) -> &StreamTable {
        &self.streams
    }

    pub fn column(&self, id: DeviceId) -> ProjectResult<&Column> {
        self.columns.get(id.slot()).ok_or_else(|| {
            SfError::IndexOob {
                what: "column",
                index: id.slot(),
                len: self.columns.len(),
            }
            .into()
        })
    }

    pub fn column_ids(&self) -> impl Iterator<Item = DeviceId> + '_ {
        (0..self.columns.len()).map(DeviceId::from_slot)
    }

    /// Update every column in declaration order.
    ///
    /// All columns are checked for complete wiring first, so a badly wired
    /// scenario fails before any stream is written.
    pub fn update_all(&mut self) -> ProjectResult<()> {
        for (column, key) in self.columns.iter().zip(&self.column_keys) {
            column
                .slots()
                .require_full()
                .map_err(|source| ProjectError::Device {
                    column: key.clone(),
                    source,
                })?;
        }
        for (column, key) in self.columns.iter().zip(&self.column_keys) {
            column
                .update(&mut self.streams)
                .map_err(|source| ProjectError::Device {
                    column: key.clone(),
                    source,
                })?;
        }
        Ok(())
    }

    pub fn report(&self) -> ScenarioReport {
        let streams = self
            .streams
            .iter()
            .zip(&self.stream_keys)
            .map(|((_, stream), key)| StreamReport {
                id: key.clone(),
                name: stream.name().to_string(),
                mass_flow_kgps: as_kgps(stream.mass_flow()),
            })
            .collect();
        ScenarioReport {
            name: self.name.clone(),
            streams,
        }
    }
}

impl ScenarioReport {
    pub fn stream(&self, id: &str) -> Option<&StreamReport> {
        self.streams.iter().find(|s| s.id == id)
    }
}
