//! Bounded input/output attachment lists shared by all devices.

use crate::error::{DeviceError, DeviceResult};
use core::fmt;
use sf_core::StreamId;

/// Which side of a device a stream is attached to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Side {
    Input,
    Output,
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Side::Input => write!(f, "input"),
            Side::Output => write!(f, "output"),
        }
    }
}

/// Ordered stream attachments with capacities fixed at construction.
///
/// Invariant: `inputs.len() <= input_capacity` and
/// `outputs.len() <= output_capacity`. There is no detach.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Slots {
    inputs: Vec<StreamId>,
    outputs: Vec<StreamId>,
    input_capacity: usize,
    output_capacity: usize,
}

impl Slots {
    pub fn new(input_capacity: usize, output_capacity: usize) -> Self {
        Self {
            inputs: Vec::with_capacity(input_capacity),
            outputs: Vec::with_capacity(output_capacity),
            input_capacity,
            output_capacity,
        }
    }

    /// Append `stream` to the given side, failing if that side is full.
    pub fn attach(&mut self, side: Side, stream: StreamId) -> DeviceResult<()> {
        let capacity = self.capacity(side);
        let list = match side {
            Side::Input => &mut self.inputs,
            Side::Output => &mut self.outputs,
        };
        if list.len() >= capacity {
            return Err(DeviceError::CapacityExceeded { side, capacity });
        }
        list.push(stream);
        Ok(())
    }

    pub fn inputs(&self) -> &[StreamId] {
        &self.inputs
    }

    pub fn outputs(&self) -> &[StreamId] {
        &self.outputs
    }

    pub fn attached(&self, side: Side) -> &[StreamId] {
        match side {
            Side::Input => &self.inputs,
            Side::Output => &self.outputs,
        }
    }

    pub fn capacity(&self, side: Side) -> usize {
        match side {
            Side::Input => self.input_capacity,
            Side::Output => self.output_capacity,
        }
    }

    /// Every slot on both sides is occupied.
    pub fn is_full(&self) -> bool {
        self.inputs.len() == self.input_capacity && self.outputs.len() == self.output_capacity
    }

    /// `Ok` when fully wired, `ConfigurationIncomplete` otherwise.
    pub fn require_full(&self) -> DeviceResult<()> {
        if self.is_full() {
            Ok(())
        } else {
            Err(DeviceError::ConfigurationIncomplete {
                inputs: self.inputs.len(),
                outputs: self.outputs.len(),
                required_inputs: self.input_capacity,
                required_outputs: self.output_capacity,
            })
        }
    }
}
