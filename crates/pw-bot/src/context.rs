use std::collections::BTreeMap;
use std::time::{Duration, Instant};

use pw_core::{Order, Planet, PlanetId, Point};
use serde::Serialize;

use crate::deployment::DeploymentQueue;

/// Counters collected while a turn runs.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct TurnStats {
    pub deployments_scored: u32,
    pub deployments_drained: u32,
    pub deployments_satisfied: u32,
    pub deployments_dropped: u32,
    pub ships_sent: u64,
}

/// Per-turn blackboard shared by every node of the tree.
///
/// Created empty at turn start and dropped at turn end. Leaves document which
/// fields they read and write; the startup leaves must run before the
/// strategies and the scheduler.
#[derive(Debug)]
pub struct TurnContext {
    pub turn: u64,
    /// Set by `start_timer`.
    pub timer: Option<Instant>,
    /// Set by `find_focus_point`.
    pub focus_point: Option<Point>,
    /// Set by `create_dist_table`: clustering distance per non-owned planet.
    pub dist_table: BTreeMap<PlanetId, f64>,
    /// Filled by the strategies, drained by the scheduler.
    pub deployments: DeploymentQueue,
    /// Orders issued by the scheduler this turn.
    pub issued: Vec<Order>,
    pub stats: TurnStats,
    turn_budget: Duration,
    available_ships: BTreeMap<PlanetId, u32>,
    num_available_ships: u64,
}

impl TurnContext {
    pub fn new(turn: u64, turn_budget: Duration) -> Self {
        Self {
            turn,
            timer: None,
            focus_point: None,
            dist_table: BTreeMap::new(),
            deployments: DeploymentQueue::new(),
            issued: Vec::new(),
            stats: TurnStats::default(),
            turn_budget,
            available_ships: BTreeMap::new(),
            num_available_ships: 0,
        }
    }

    pub fn turn_budget(&self) -> Duration {
        self.turn_budget
    }

    pub fn start_timer(&mut self) {
        self.timer = Some(Instant::now());
    }

    /// Time since `start_timer`, or `None` if the timer never started.
    pub fn elapsed(&self) -> Option<Duration> {
        self.timer.map(|t| t.elapsed())
    }

    /// Rebuild the spare-capacity map from the planets we own.
    ///
    /// Planets holding a single ship (or none) get no entry.
    pub fn reset_capacity<'a>(&mut self, owned: impl IntoIterator<Item = &'a Planet>) {
        self.available_ships.clear();
        self.num_available_ships = 0;
        for planet in owned {
            let spare = planet.spare_ships();
            if spare > 0 {
                self.available_ships.insert(planet.id, spare);
                self.num_available_ships += u64::from(spare);
            }
        }
    }

    /// Spare capacity per planet, in planet-id order. Every value is > 0.
    pub fn available_ships(&self) -> &BTreeMap<PlanetId, u32> {
        &self.available_ships
    }

    pub fn spare_capacity(&self, planet: PlanetId) -> u32 {
        self.available_ships.get(&planet).copied().unwrap_or(0)
    }

    /// Sum over every planet; wider than a single planet's stock.
    pub fn total_spare_capacity(&self) -> u64 {
        self.num_available_ships
    }

    pub fn has_spare_capacity(&self) -> bool {
        !self.available_ships.is_empty()
    }

    /// Commit up to `ships` of `planet`'s spare capacity and return how many
    /// were taken. The entry disappears once it reaches zero.
    pub fn reserve(&mut self, planet: PlanetId, ships: u32) -> u32 {
        let Some(spare) = self.available_ships.get_mut(&planet) else {
            return 0;
        };
        let taken = (*spare).min(ships);
        *spare -= taken;
        if *spare == 0 {
            self.available_ships.remove(&planet);
        }
        self.num_available_ships -= u64::from(taken);
        taken
    }

    pub fn cluster_distance(&self, planet: PlanetId) -> Option<f64> {
        self.dist_table.get(&planet).copied()
    }
}
