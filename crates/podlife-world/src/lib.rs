//! World simulation engine.
//!
//! The sparse infinite plane, the per-cycle evolution algorithm, the
//! seed patterns and the thin driver that plays it all.

pub mod game;
pub mod patterns;
pub mod world;

pub use game::Game;
pub use world::{Statistics, World};
