//! sf-devices: streams and process devices for sepflow.
//!
//! Provides:
//! - `Stream`: a named carrier of a mass flow rate
//! - `StreamTable`: arena that owns streams and hands out `StreamId`s
//! - `Device`: trait for anything with bounded input/output slots and an
//!   `update` rule
//! - `Column`: two-in/two-out splitter dividing total feed by a split ratio
//!
//! Devices hold stream ids, not streams. The same id may be one device's
//! output and another's input; the table is the single owner.
//!
//! # Example
//!
//! ```
//! use sf_core::units::{as_kgps, kgps};
//! use sf_devices::{Column, Device, StreamTable};
//!
//! let mut streams = StreamTable::new();
//! let s1 = streams.add("s1", kgps(10.0));
//! let s2 = streams.add("s2", kgps(20.0));
//! let top = streams.add("top", kgps(0.0));
//! let bottom = streams.add("bottom", kgps(0.0));
//!
//! let mut column = Column::new("C-101");
//! column.attach_input(s1).unwrap();
//! column.attach_input(s2).unwrap();
//! column.attach_output(top).unwrap();
//! column.attach_output(bottom).unwrap();
//! column.set_split_ratio(0.6).unwrap();
//! column.update(&mut streams).unwrap();
//!
//! assert!((as_kgps(streams[top].mass_flow()) - 18.0).abs() < 1e-9);
//! assert!((as_kgps(streams[bottom].mass_flow()) - 12.0).abs() < 1e-9);
//! ```

pub mod column;
pub mod error;
pub mod slots;
pub mod stream;
pub mod traits;

// Re-exports
pub use column::{COLUMN_INPUTS, COLUMN_OUTPUTS, Column, DEFAULT_SPLIT_RATIO};
pub use error::{DeviceError, DeviceResult};
pub use slots::{Side, Slots};
pub use stream::{Stream, StreamTable};
pub use traits::Device;
