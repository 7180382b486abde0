//! Domain models for the Replenishment Reports platform

mod column;
mod draft;
mod duplicate;
mod filter;
mod options;
mod report;
mod row;
mod stock;

pub use column::*;
pub use draft::*;
pub use duplicate::*;
pub use filter::*;
pub use options::*;
pub use report::*;
pub use row::*;
pub use stock::*;
