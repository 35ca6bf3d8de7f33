//! sf-core: shared foundation for sepflow.
//!
//! Contains:
//! - units (uom SI mass-rate and ratio types + constructors)
//! - numeric (Real + tolerances + float helpers)
//! - ids (compact IDs for streams and devices)
//! - error (shared error types)

pub mod error;
pub mod ids;
pub mod numeric;
pub mod units;

pub use error::{SfError, SfResult};
pub use ids::*;
pub use numeric::*;
pub use units::*;
