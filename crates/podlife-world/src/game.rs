//! Play-loop driver over a world.

use crate::world::{Statistics, World};
use podlife_core::{GameConfig, Pod};
use std::thread;
use std::time::Duration;
use tracing::info;

/// Drives a world for a number of cycles (or indefinitely), with
/// cooperative pause/resume.
///
/// Pausing is a driver concept: a paused game simply stops calling
/// `evolve()` while the loop keeps polling at the configured cadence.
pub struct Game {
    world: World,
    config: GameConfig,
    paused: bool,
    cycles_played: u64,
}

impl Game {
    pub fn new(config: GameConfig) -> Self {
        let world = World::with_viewport(config.viewport.clone());
        Self {
            world,
            config,
            paused: false,
            cycles_played: 0,
        }
    }

    pub fn world(&self) -> &World {
        &self.world
    }

    pub fn world_mut(&mut self) -> &mut World {
        &mut self.world
    }

    pub fn cycles_played(&self) -> u64 {
        self.cycles_played
    }

    pub fn pause(&mut self) {
        self.paused = true;
    }

    pub fn resume(&mut self) {
        self.paused = false;
    }

    pub fn is_paused(&self) -> bool {
        self.paused
    }

    pub fn new_pod_at(&mut self, x: i64, y: i64) {
        self.world.add_pod_at(x, y);
    }

    pub fn new_pods_at(&mut self, coordinates: &[(i64, i64)]) {
        for &(x, y) in coordinates {
            self.new_pod_at(x, y);
        }
    }

    pub fn pod_at(&self, x: i64, y: i64) -> Option<&Pod> {
        self.world.pod_at(x, y)
    }

    /// Advance one cycle, unless paused.
    pub fn step(&mut self) -> Statistics {
        if !self.paused {
            self.world.evolve();
            self.cycles_played += 1;
        }
        self.world.statistics()
    }

    /// Play `cycles` cycles (forever when `None`), invoking `on_cycle`
    /// once before the first cycle and once after every loop pass.
    ///
    /// Only unpaused passes advance the world and the played count, so
    /// `play(Some(n))` returns once `n` unpaused cycles have run.
    pub fn play<F>(&mut self, cycles: Option<u64>, mut on_cycle: F)
    where
        F: FnMut(&Self),
    {
        info!(?cycles, "play session started");
        on_cycle(self);

        while cycles.map_or(true, |count| self.cycles_played < count) {
            self.step();
            on_cycle(self);

            if self.config.cycle_delay_ms > 0 {
                thread::sleep(Duration::from_millis(self.config.cycle_delay_ms));
            }
        }

        info!(cycles_played = self.cycles_played, "play session finished");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn headless() -> GameConfig {
        GameConfig {
            cycle_delay_ms: 0,
            ..GameConfig::default()
        }
    }

    #[test]
    fn test_seeding_entry_points() {
        let mut game = Game::new(headless());
        game.new_pods_at(&[(0, 0), (1, 1), (2, 2), (3, 3), (4, 4)]);

        assert_eq!(game.world().alive_count(), 5);
        assert!(game.pod_at(0, 0).is_some());
        assert!(game.pod_at(4, 4).is_some());
        assert!(game.pod_at(5, 5).is_none());
    }

    #[test]
    fn test_play_runs_the_requested_cycles() {
        let mut game = Game::new(headless());
        game.new_pods_at(&[(0, -1), (0, 0), (0, 1)]);

        let mut observations = 0;
        game.play(Some(3), |_| observations += 1);

        assert_eq!(game.cycles_played(), 3);
        assert_eq!(observations, 4); // once up front, once per pass

        // Odd number of cycles leaves the blinker horizontal.
        assert!(game.pod_at(0, 0).is_some());
        assert!(game.pod_at(-1, 0).is_some());
        assert!(game.pod_at(1, 0).is_some());
        assert_eq!(game.world().alive_count(), 3);
    }

    #[test]
    fn test_paused_game_does_not_evolve() {
        let mut game = Game::new(headless());
        game.new_pods_at(&[(0, -1), (0, 0), (0, 1)]);

        game.pause();
        assert!(game.is_paused());

        let stats = game.step();
        assert_eq!(stats.cycle_count, 0);
        assert_eq!(game.cycles_played(), 0);
        assert!(game.pod_at(0, -1).is_some());

        game.resume();
        let stats = game.step();
        assert_eq!(stats.cycle_count, 1);
        assert_eq!(game.cycles_played(), 1);
    }
}
