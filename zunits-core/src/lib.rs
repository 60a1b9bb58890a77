//! zunits core - Fundamental types
//!
//! This crate provides the types shared by the conversion engine:
//! - `Dimension`: the physical kind a quantity belongs to
//! - `UnitError`: every failure the engine can report
//! - `Environment`: reference conditions for gauge and standard-volume units

mod dimension;
mod error;
pub mod constants;
pub mod environment;

pub use dimension::Dimension;
pub use error::{UnitError, codes};
pub use environment::{Environment, StandardConditions};

/// Prelude for convenient imports
pub mod prelude {
    pub use crate::{Dimension, Environment, UnitError};
    pub use crate::error::codes;
}
