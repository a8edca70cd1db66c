//! 2D positions on the unbounded plane.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A coordinate on the infinite grid.
///
/// East is +x and south is +y, so a viewport renders rows of increasing
/// y from top to bottom.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Position {
    pub x: i64,
    pub y: i64,
}

impl Position {
    pub fn new(x: i64, y: i64) -> Self {
        Self { x, y }
    }

    /// Canonical sparse-map key for a coordinate pair, e.g. `x-3y10`.
    /// Distinct coordinates never collide.
    pub fn xy_key(x: i64, y: i64) -> String {
        format!("x{x}y{y}")
    }

    /// Canonical sparse-map key for this position.
    pub fn key(&self) -> String {
        Self::xy_key(self.x, self.y)
    }

    /// Decode a canonical key back into a position.
    pub fn parse_key(key: &str) -> Option<Self> {
        let rest = key.strip_prefix('x')?;
        let (x, y) = rest.split_once('y')?;
        Some(Self::new(x.parse().ok()?, y.parse().ok()?))
    }

    /// Independent copy, so callers can derive offsets without
    /// disturbing a shared position.
    pub fn copy(&self) -> Self {
        *self
    }

    /// Shift in place and return `self` for chaining.
    pub fn move_by(&mut self, dx: i64, dy: i64) -> &mut Self {
        self.x += dx;
        self.y += dy;
        self
    }

    pub fn east_by(&mut self, distance: i64) -> &mut Self {
        self.move_by(distance, 0)
    }

    pub fn west_by(&mut self, distance: i64) -> &mut Self {
        self.move_by(-distance, 0)
    }

    pub fn north_by(&mut self, distance: i64) -> &mut Self {
        self.move_by(0, -distance)
    }

    pub fn south_by(&mut self, distance: i64) -> &mut Self {
        self.move_by(0, distance)
    }

    /// Neighboring position one step in `direction`.
    pub fn step(&self, direction: Direction) -> Self {
        let (dx, dy) = direction.to_delta();
        let mut next = self.copy();
        next.move_by(dx, dy);
        next
    }

    /// Location as a compass label instead of signed values.
    ///
    /// Both axis labels are chosen from the sign of x.
    pub fn compass_label(&self) -> String {
        let direction_x = if self.x > 0 { "East" } else { "West" };
        let direction_y = if self.x > 0 { "North" } else { "South" };
        format!(
            "{} {}, {} {}",
            self.y.abs(),
            direction_y,
            self.x.abs(),
            direction_x
        )
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.key())
    }
}

/// Compass directions, in the fixed order pods throw seeds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Direction {
    East,
    West,
    North,
    South,
    NorthEast,
    NorthWest,
    SouthEast,
    SouthWest,
}

impl Direction {
    pub fn to_delta(&self) -> (i64, i64) {
        match self {
            Direction::East => (1, 0),
            Direction::West => (-1, 0),
            Direction::North => (0, -1),
            Direction::South => (0, 1),
            Direction::NorthEast => (1, -1),
            Direction::NorthWest => (-1, -1),
            Direction::SouthEast => (1, 1),
            Direction::SouthWest => (-1, 1),
        }
    }

    /// All eight directions in throw order.
    pub fn all() -> [Direction; 8] {
        [
            Direction::East,
            Direction::West,
            Direction::North,
            Direction::South,
            Direction::NorthEast,
            Direction::NorthWest,
            Direction::SouthEast,
            Direction::SouthWest,
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use std::collections::HashSet;

    #[test]
    fn test_canonical_key_format() {
        assert_eq!(Position::new(20, -50).key(), "x20y-50");
        assert_eq!(Position::xy_key(0, 0), "x0y0");
        assert_eq!(Position::new(-3, 10).to_string(), "x-3y10");
    }

    #[test]
    fn test_parse_key() {
        assert_eq!(Position::parse_key("x20y-50"), Some(Position::new(20, -50)));
        assert_eq!(Position::parse_key("x0y0"), Some(Position::new(0, 0)));
        assert_eq!(Position::parse_key("20y-50"), None);
        assert_eq!(Position::parse_key("x20z50"), None);
        assert_eq!(Position::parse_key("xAyB"), None);
    }

    #[test]
    fn test_chained_movement() {
        let mut position = Position::new(10, 20);
        position.east_by(10).north_by(5);
        assert_eq!(position, Position::new(20, 15));

        let mut position = Position::new(1, 2);
        position.west_by(5).south_by(10);
        assert_eq!(position, Position::new(-4, 12));
    }

    #[test]
    fn test_copy_is_independent() {
        let original = Position::new(10, 20);
        let mut moved = original.copy();
        moved.west_by(5).south_by(10);

        assert_eq!(original, Position::new(10, 20));
        assert_eq!(moved, Position::new(5, 30));
    }

    #[test]
    fn test_step_covers_all_neighbors() {
        let origin = Position::new(0, 0);
        let neighbors: HashSet<Position> = Direction::all()
            .iter()
            .map(|&direction| origin.step(direction))
            .collect();

        assert_eq!(neighbors.len(), 8);
        assert!(!neighbors.contains(&origin));
        for neighbor in &neighbors {
            assert!(neighbor.x.abs() <= 1 && neighbor.y.abs() <= 1);
        }
    }

    #[test]
    fn test_throw_order_is_fixed() {
        let order = Direction::all();
        assert_eq!(order[0], Direction::East);
        assert_eq!(order[1], Direction::West);
        assert_eq!(order[2], Direction::North);
        assert_eq!(order[3], Direction::South);
        assert_eq!(order[7], Direction::SouthWest);
    }

    #[test]
    fn test_compass_label() {
        assert_eq!(Position::new(10, 20).compass_label(), "20 North, 10 East");
        assert_eq!(Position::new(-30, -15).compass_label(), "15 South, 30 West");
    }

    proptest! {
        #[test]
        fn key_round_trips(x in any::<i64>(), y in any::<i64>()) {
            let position = Position::new(x, y);
            prop_assert_eq!(Position::parse_key(&position.key()), Some(position));
        }

        #[test]
        fn distinct_positions_never_collide(a in any::<(i64, i64)>(), b in any::<(i64, i64)>()) {
            prop_assume!(a != b);
            prop_assert_ne!(Position::new(a.0, a.1).key(), Position::new(b.0, b.1).key());
        }
    }
}
