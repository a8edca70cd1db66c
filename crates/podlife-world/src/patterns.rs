//! Seed patterns for populating a fresh world.

use crate::world::World;
use podlife_core::{Error, Position, Result};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use tracing::debug;

/// Named patterns available to callers that select by string.
pub const PATTERNS: &[(&str, &str)] = &[
    ("blinker", "Three pods in a bar, oscillates with period 2"),
    ("block", "A 2x2 still life"),
    ("glider", "A five-pod glider headed south-east"),
    ("dev-seed", "Fixed demo layout: clusters, a long column and a filled square"),
    ("random", "A couple thousand random pods around the viewport center"),
];

/// Apply a pattern by name, placed for the default 30x30 viewport.
pub fn apply(world: &mut World, name: &str) -> Result<()> {
    match name {
        "blinker" => blinker(world, 15, 15),
        "block" => block(world, 14, 14),
        "glider" => glider(world, 2, 2),
        "dev-seed" => dev_seed(world),
        "random" => random_seed(world, Position::new(15, 15), 30, 30, 2000, 42),
        other => return Err(Error::UnknownPattern(other.to_string())),
    }
    Ok(())
}

/// Three pods in a vertical bar centered on (x, y): the classic
/// period-2 oscillator.
pub fn blinker(world: &mut World, x: i64, y: i64) {
    for dy in -1..=1 {
        world.add_pod_at(x, y + dy);
    }
}

/// A 2x2 still life with its top-left pod at (x, y).
pub fn block(world: &mut World, x: i64, y: i64) {
    world.add_pod_at(x, y);
    world.add_pod_at(x + 1, y);
    world.add_pod_at(x, y + 1);
    world.add_pod_at(x + 1, y + 1);
}

/// A five-pod glider that translates one cell south-east every four
/// cycles, with its bounding box anchored at (x, y).
pub fn glider(world: &mut World, x: i64, y: i64) {
    for (dx, dy) in [(1, 0), (2, 1), (0, 2), (1, 2), (2, 2)] {
        world.add_pod_at(x + dx, y + dy);
    }
}

/// The fixed demo layout: a few small clusters, a 101-pod column down
/// the y axis and a filled 26x26 square. Enough activity to watch for
/// a long while.
pub fn dev_seed(world: &mut World) {
    let clusters = [
        (5, 5),
        (5, 6),
        (5, 4),
        (10, 10),
        (10, 11),
        (10, 12),
        (9, 12),
        (8, 11),
        (20, 10),
        (20, 11),
        (20, 12),
        (19, 12),
        (18, 11),
    ];
    for (x, y) in clusters {
        world.add_pod_at(x, y);
    }

    for y in 0..=100 {
        world.add_pod_at(0, y);
    }

    for y in 50..=75 {
        for x in 50..=75 {
            world.add_pod_at(x, y);
        }
    }

    debug!(alive = world.alive_count(), "dev seed applied");
}

/// Drop up to `count` pods uniformly within ±(width, height) of
/// `center`, skipping occupied cells. Deterministic for a fixed `seed`.
pub fn random_seed(
    world: &mut World,
    center: Position,
    width: i64,
    height: i64,
    count: usize,
    seed: u64,
) {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    let mut dropped = 0usize;

    for _ in 0..count {
        let x = rng.gen_range(center.x - width..=center.x + width);
        let y = rng.gen_range(center.y - height..=center.y + height);
        if world.pod_at(x, y).is_none() {
            world.add_pod_at(x, y);
            dropped += 1;
        }
    }

    debug!(dropped, requested = count, "random seed applied");
}
