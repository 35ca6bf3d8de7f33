//! Error types for stream and device operations.

use crate::slots::Side;
use sf_core::StreamId;
use thiserror::Error;

/// Errors raised by device wiring, parameter setters and updates.
///
/// A call that returns one of these leaves every stream and device exactly as
/// it was before the call.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum DeviceError {
    #[error("Too many {side} streams: capacity is {capacity}")]
    CapacityExceeded { side: Side, capacity: usize },

    #[error(
        "Streams not fully connected: {inputs}/{required_inputs} inputs, \
         {outputs}/{required_outputs} outputs"
    )]
    ConfigurationIncomplete {
        inputs: usize,
        outputs: usize,
        required_inputs: usize,
        required_outputs: usize,
    },

    #[error("Invalid argument: {field} = {value}")]
    InvalidArgument { field: &'static str, value: f64 },

    #[error("Unknown stream id {id}")]
    UnknownStream { id: StreamId },
}

pub type DeviceResult<T> = Result<T, DeviceError>;
