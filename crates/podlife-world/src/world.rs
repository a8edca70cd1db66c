//! The sparse infinite world and its per-cycle evolution.

use podlife_core::{Embryo, Error, Pod, Position, Result, ViewportConfig};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use tracing::{debug, trace};

/// Running statistics, refreshed at the end of every cycle.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Statistics {
    pub pods_alive: usize,
    pub pods_born: usize,
    pub pods_died: usize,
    pub cycle_count: u64,
}

/// Sparse unbounded plane holding pods and embryos.
///
/// The world owns all cells, keyed by their position's canonical key.
/// A key is present in at most one of the two maps at any observable
/// instant: `add_seed_at` gives pods priority over embryo creation, and
/// `add_pod` evicts any embryo at the target position.
pub struct World {
    pods: HashMap<String, Pod>,
    embryos: HashMap<String, Embryo>,
    viewport: ViewportConfig,
    cycle_count: u64,
    born_last_cycle: usize,
    died_last_cycle: usize,
}

impl World {
    pub fn new() -> Self {
        Self::with_viewport(ViewportConfig::default())
    }

    pub fn with_viewport(viewport: ViewportConfig) -> Self {
        Self {
            pods: HashMap::new(),
            embryos: HashMap::new(),
            viewport,
            cycle_count: 0,
            born_last_cycle: 0,
            died_last_cycle: 0,
        }
    }

    pub fn viewport(&self) -> &ViewportConfig {
        &self.viewport
    }

    pub fn viewport_mut(&mut self) -> &mut ViewportConfig {
        &mut self.viewport
    }

    pub fn set_viewport(&mut self, viewport: ViewportConfig) {
        self.viewport = viewport;
    }

    pub fn pod_at(&self, x: i64, y: i64) -> Option<&Pod> {
        self.pods.get(&Position::xy_key(x, y))
    }

    pub fn embryo_at(&self, x: i64, y: i64) -> Option<&Embryo> {
        self.embryos.get(&Position::xy_key(x, y))
    }

    pub fn alive_count(&self) -> usize {
        self.pods.len()
    }

    pub fn embryo_count(&self) -> usize {
        self.embryos.len()
    }

    /// Positions of all live pods, in no particular order.
    pub fn live_positions(&self) -> Vec<Position> {
        self.pods.values().map(Pod::position).collect()
    }

    /// Register a pod, replacing any pod already at its position. Any
    /// embryo at the position is evicted: a location never holds both.
    pub fn add_pod(&mut self, pod: Pod) {
        let key = pod.position().key();
        self.embryos.remove(&key);
        self.pods.insert(key, pod);
    }

    pub fn add_pod_at(&mut self, x: i64, y: i64) {
        self.add_pod(Pod::new(x, y));
    }

    /// Erase the pod at `position`. Safe no-op when none is registered.
    pub fn remove_pod_at(&mut self, position: &Position) {
        self.pods.remove(&position.key());
    }

    /// Register an embryo, replacing any embryo already at its position.
    pub fn add_embryo(&mut self, embryo: Embryo) {
        let key = embryo.position().key();
        debug_assert!(!self.pods.contains_key(&key), "pod and embryo at {key}");
        self.embryos.insert(key, embryo);
    }

    /// Erase the embryo at `position`. Safe no-op when none is registered.
    pub fn remove_embryo_at(&mut self, position: &Position) {
        self.embryos.remove(&position.key());
    }

    /// Deliver one seed to `position`.
    ///
    /// A pod there is fed; an embryo there is fertilized; an empty
    /// location gets a fresh embryo holding the seed. Pods take
    /// priority, so a location never holds both kinds.
    pub fn add_seed_at(&mut self, position: Position) {
        let key = position.key();
        if let Some(pod) = self.pods.get_mut(&key) {
            pod.fertilize();
        } else if let Some(embryo) = self.embryos.get_mut(&key) {
            embryo.fertilize();
        } else {
            let mut embryo = Embryo::at(position);
            embryo.fertilize();
            trace!(%position, "embryo conceived");
            self.embryos.insert(key, embryo);
        }
    }

    /// Advance the world one cycle: seed, survive, reset, birth.
    ///
    /// Each phase iterates a snapshot of the keys registered when that
    /// phase starts, so mutations within a phase never feed back into
    /// its own iteration. Embryos conceived in the seeding phase are
    /// still resolved by this cycle's birth phase.
    pub fn evolve(&mut self) -> Statistics {
        let alive_before = self.pods.len();

        let pod_keys: Vec<String> = self.pods.keys().cloned().collect();

        // Seeding: every live pod throws at its eight neighbors.
        for key in &pod_keys {
            if let Some(targets) = self.pods.get(key).map(Pod::seed_targets) {
                for target in targets {
                    self.add_seed_at(target);
                }
            }
        }

        // Survival: judged on the food gathered during seeding. Only
        // pods alive before the seeding phase are judged.
        for key in &pod_keys {
            let starves = self.pods.get(key).is_some_and(|pod| !pod.is_nourished());
            if starves {
                self.pods.remove(key);
            }
        }

        // Reset: survivors burn their food before the next cycle.
        for pod in self.pods.values_mut() {
            pod.gets_hungry();
        }

        // Birth: every embryo is resolved, then discarded, including
        // the ones conceived during this cycle's seeding phase.
        let embryo_keys: Vec<String> = self.embryos.keys().cloned().collect();
        for key in embryo_keys {
            if let Some(embryo) = self.embryos.remove(&key) {
                if embryo.is_viable() {
                    self.pods.insert(key, Pod::at(embryo.position()));
                }
            }
        }

        let alive_after = self.pods.len();
        self.cycle_count += 1;
        self.died_last_cycle = alive_before.saturating_sub(alive_after);
        self.born_last_cycle = alive_after.saturating_sub(alive_before);

        let stats = self.statistics();
        debug!(
            cycle = stats.cycle_count,
            alive = stats.pods_alive,
            born = stats.pods_born,
            died = stats.pods_died,
            "cycle complete"
        );
        stats
    }

    /// Cheap snapshot of the cached statistics.
    pub fn statistics(&self) -> Statistics {
        Statistics {
            pods_alive: self.pods.len(),
            pods_born: self.born_last_cycle,
            pods_died: self.died_last_cycle,
            cycle_count: self.cycle_count,
        }
    }

    /// Render the configured viewport.
    pub fn view_bounds_as_string(&self) -> Result<String> {
        self.view_bounds_from(self.viewport.origin)
    }

    /// Render the viewport rectangle anchored at `origin` instead of
    /// the configured one.
    ///
    /// Rows run east from the origin; successive rows move south. Every
    /// row is exactly `width` glyphs terminated by a line break.
    /// Embryos are not visually alive and render as dead cells.
    pub fn view_bounds_from(&self, origin: Position) -> Result<String> {
        let width = self.viewport.width;
        let height = self.viewport.height;
        if width <= 0 || height <= 0 {
            return Err(Error::InvalidViewport { width, height });
        }

        let mut out = String::with_capacity((width as usize + 1) * height as usize);
        for row in 0..height {
            let mut cursor = Position::new(origin.x, origin.y + i64::from(row));
            for _ in 0..width {
                if self.pods.contains_key(&cursor.key()) {
                    out.push(self.viewport.live_glyph);
                } else {
                    out.push(self.viewport.dead_glyph);
                }
                cursor.east_by(1);
            }
            out.push('\n');
        }
        Ok(out)
    }
}

impl Default for World {
    fn default() -> Self {
        Self::new()
    }
}
