//! Core trait for process devices.

use crate::error::DeviceResult;
use crate::slots::{Side, Slots};
use crate::stream::StreamTable;
use sf_core::StreamId;

/// A process unit with bounded input/output stream slots.
///
/// Implementors fix their capacities when they build their `Slots` and supply
/// the transformation rule in `update`. Wiring (`attach_input`,
/// `attach_output`) is shared and enforced here.
pub trait Device {
    /// Device name for diagnostics.
    fn name(&self) -> &str;

    fn slots(&self) -> &Slots;

    fn slots_mut(&mut self) -> &mut Slots;

    /// Recompute every attached output flow from the attached input flows.
    ///
    /// Must not write anything unless it can write everything: on error the
    /// table is left untouched.
    fn update(&self, streams: &mut StreamTable) -> DeviceResult<()>;

    /// Attach `stream` to the next free input slot.
    ///
    /// Fails with `CapacityExceeded` (input side) when all input slots are taken.
    fn attach_input(&mut self, stream: StreamId) -> DeviceResult<()> {
        self.slots_mut().attach(Side::Input, stream)
    }

    /// Attach `stream` to the next free output slot.
    ///
    /// Fails with `CapacityExceeded` (output side) when all output slots are taken.
    fn attach_output(&mut self, stream: StreamId) -> DeviceResult<()> {
        self.slots_mut().attach(Side::Output, stream)
    }

    fn inputs(&self) -> &[StreamId] {
        self.slots().inputs()
    }

    fn outputs(&self) -> &[StreamId] {
        self.slots().outputs()
    }

    fn input_capacity(&self) -> usize {
        self.slots().capacity(Side::Input)
    }

    fn output_capacity(&self) -> usize {
        self.slots().capacity(Side::Output)
    }

    /// All slots are filled and `update` may run.
    fn is_ready(&self) -> bool {
        self.slots().is_full()
    }
}
