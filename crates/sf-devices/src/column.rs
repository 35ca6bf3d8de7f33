//! Two-input, two-output separation column.

use crate::error::{DeviceError, DeviceResult};
use crate::slots::Slots;
use crate::stream::StreamTable;
use crate::traits::Device;
use sf_core::numeric::{Real, in_unit_interval};
use sf_core::units::{MassRate, Ratio, as_fraction, kgps, unitless};

pub const COLUMN_INPUTS: usize = 2;
pub const COLUMN_OUTPUTS: usize = 2;

/// Equal split between top and bottom.
pub const DEFAULT_SPLIT_RATIO: Real = 0.5;

/// Column combining two feeds and splitting the total between two products.
///
/// `outputs[0]` (top) receives `total * split_ratio`, `outputs[1]` (bottom)
/// receives the rest. With the default ratio of 0.5 both products are equal.
#[derive(Debug, Clone)]
pub struct Column {
    name: String,
    slots: Slots,
    split_ratio: Ratio,
}

impl Column {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            slots: Slots::new(COLUMN_INPUTS, COLUMN_OUTPUTS),
            split_ratio: unitless(DEFAULT_SPLIT_RATIO),
        }
    }

    /// Builder form of `set_split_ratio`.
    pub fn with_split_ratio(mut self, ratio: Real) -> DeviceResult<Self> {
        self.set_split_ratio(ratio)?;
        Ok(self)
    }

    /// Set the fraction of total feed sent to the top product.
    ///
    /// Values outside `[0, 1]` (and NaN) are rejected and the previous ratio
    /// stays in effect. Already computed outputs are not touched.
    pub fn set_split_ratio(&mut self, ratio: Real) -> DeviceResult<()> {
        if !in_unit_interval(ratio) {
            return Err(DeviceError::InvalidArgument {
                field: "split_ratio",
                value: ratio,
            });
        }
        self.split_ratio = unitless(ratio);
        Ok(())
    }

    pub fn split_ratio(&self) -> Ratio {
        self.split_ratio
    }

    /// Top and bottom shares of `total`.
    fn split(&self, total: MassRate) -> [MassRate; COLUMN_OUTPUTS] {
        let top = as_fraction(self.split_ratio);
        [total * top, total * (1.0 - top)]
    }
}

impl Device for Column {
    fn name(&self) -> &str {
        &self.name
    }

    fn slots(&self) -> &Slots {
        &self.slots
    }

    fn slots_mut(&mut self) -> &mut Slots {
        &mut self.slots
    }

    fn update(&self, streams: &mut StreamTable) -> DeviceResult<()> {
        self.slots.require_full()?;

        let mut total = kgps(0.0);
        for &id in self.slots.inputs() {
            total += streams.mass_flow(id)?;
        }
        // Resolve every output before the first write.
        for &id in self.slots.outputs() {
            streams.stream(id)?;
        }

        for (&id, share) in self.slots.outputs().iter().zip(self.split(total)) {
            streams.set_mass_flow(id, share)?;
        }
        Ok(())
    }
}
