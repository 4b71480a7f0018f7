//! # geoweight Core
//!
//! Core types shared by the geoweight crates.
//!
//! This crate provides:
//! - `Coordinate`: a (longitude, latitude) pair in degrees
//! - `Table`: column access by name, with `DataFrame` as the in-memory implementation
//! - `Interrupt`: cooperative cancellation hooks for long row loops
//! - `Error` / `Result`: the error type used throughout

pub mod coord;
pub mod error;
pub mod interrupt;
pub mod table;

pub use coord::Coordinate;
pub use error::{Error, Result};
pub use interrupt::{CancelToken, Interrupt, NeverInterrupt};
pub use table::{Column, DataFrame, Table};

/// Prelude for convenient imports
pub mod prelude {
    pub use crate::coord::Coordinate;
    pub use crate::error::{Error, Result};
    pub use crate::interrupt::{CancelToken, Interrupt, NeverInterrupt};
    pub use crate::table::{Column, DataFrame, Table};
}
