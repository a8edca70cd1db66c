//! Cell lifecycle variants: living pods and transient embryos.

use crate::position::{Direction, Position};
use serde::{Deserialize, Serialize};

/// A living cell, tracked by the food (seeds) it received this cycle.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Pod {
    position: Position,
    food: u32,
}

impl Pod {
    pub fn new(x: i64, y: i64) -> Self {
        Self::at(Position::new(x, y))
    }

    pub fn at(position: Position) -> Self {
        Self { position, food: 0 }
    }

    pub fn position(&self) -> Position {
        self.position
    }

    pub fn food(&self) -> u32 {
        self.food
    }

    /// One unit of food. Uncapped: a pod buried in seeds dies of
    /// overcrowding at the survival check.
    pub fn gets_fed(&mut self) {
        self.food += 1;
    }

    pub fn fertilize(&mut self) {
        self.gets_fed();
    }

    /// Food is spent at the end of every cycle.
    pub fn gets_hungry(&mut self) {
        self.food = 0;
    }

    /// Exactly 2 or 3 food carries a pod through a cycle.
    pub fn is_nourished(&self) -> bool {
        self.food == 2 || self.food == 3
    }

    /// The eight neighboring positions this pod seeds each cycle, in
    /// throw order. A pod never seeds its own position.
    pub fn seed_targets(&self) -> [Position; 8] {
        Direction::all().map(|direction| self.position.step(direction))
    }
}

/// A potential cell accumulating seeds within a single cycle.
///
/// Embryos never survive a cycle boundary: every embryo is either
/// promoted to a pod or discarded before `evolve()` returns.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Embryo {
    position: Position,
    seeds: u32,
}

impl Embryo {
    pub fn new(x: i64, y: i64) -> Self {
        Self::at(Position::new(x, y))
    }

    pub fn at(position: Position) -> Self {
        Self { position, seeds: 0 }
    }

    pub fn position(&self) -> Position {
        self.position
    }

    pub fn seeds(&self) -> u32 {
        self.seeds
    }

    pub fn fertilize(&mut self) {
        self.seeds += 1;
    }

    /// Birth requires exactly 3 seeds received within one cycle.
    pub fn is_viable(&self) -> bool {
        self.seeds == 3
    }
}
