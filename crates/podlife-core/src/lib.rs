//! Core types for the podlife simulation: positions on the unbounded
//! plane, the two cell lifecycle variants, configuration and errors.

pub mod cell;
pub mod config;
pub mod error;
pub mod position;

pub use cell::{Embryo, Pod};
pub use config::{GameConfig, ViewportConfig};
pub use error::{Error, Result};
pub use position::{Direction, Position};
