#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use std::fmt;

use thiserror::Error;

use crate::fleet::Fleet;
use crate::planet::{Owner, Planet, PlanetId};

/// Read-only world access.
///
/// Implementors provide the raw planet and fleet lists; ownership filters and
/// distances are derived from them.
pub trait WorldView {
    fn planets(&self) -> &[Planet];

    fn fleets(&self) -> &[Fleet];

    fn planet(&self, id: PlanetId) -> Option<&Planet> {
        self.planets().iter().find(|p| p.id == id)
    }

    fn my_planets(&self) -> impl Iterator<Item = &Planet> + '_ {
        self.planets().iter().filter(|p| p.owner.is_me())
    }

    fn not_my_planets(&self) -> impl Iterator<Item = &Planet> + '_ {
        self.planets().iter().filter(|p| !p.owner.is_me())
    }

    fn neutral_planets(&self) -> impl Iterator<Item = &Planet> + '_ {
        self.planets().iter().filter(|p| p.owner == Owner::Neutral)
    }

    fn enemy_planets(&self) -> impl Iterator<Item = &Planet> + '_ {
        self.planets().iter().filter(|p| p.owner.is_enemy())
    }

    fn my_fleets(&self) -> impl Iterator<Item = &Fleet> + '_ {
        self.fleets().iter().filter(|f| f.is_mine())
    }

    fn enemy_fleets(&self) -> impl Iterator<Item = &Fleet> + '_ {
        self.fleets().iter().filter(|f| f.is_hostile())
    }

    /// Travel time in turns: the Euclidean distance rounded up.
    fn distance(&self, a: &Planet, b: &Planet) -> u32 {
        a.position.distance_to(b.position).ceil() as u32
    }
}

/// Effect sink for the orders of the current turn.
pub trait WorldMut: WorldView {
    /// Send `num_ships` from `source` to `destination`.
    ///
    /// Orders from the same source accumulate; their sum may not exceed the
    /// ships stationed there when the turn started.
    fn issue_order(
        &mut self,
        source: PlanetId,
        destination: PlanetId,
        num_ships: u32,
    ) -> Result<(), OrderError>;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Order {
    pub source: PlanetId,
    pub destination: PlanetId,
    pub num_ships: u32,
}

/// Protocol form: `<source> <destination> <ships>`.
impl fmt::Display for Order {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} {}", self.source, self.destination, self.num_ships)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum OrderError {
    #[error("unknown planet {0}")]
    UnknownPlanet(PlanetId),

    #[error("planet {0} is not owned by us")]
    NotOwned(PlanetId),

    #[error("planet {0} cannot send ships to itself")]
    SelfTarget(PlanetId),

    #[error("order from planet {0} carries no ships")]
    NoShips(PlanetId),

    #[error("planet {planet} has {available} ships left, {requested} requested")]
    InsufficientShips {
        planet: PlanetId,
        requested: u32,
        available: u32,
    },
}
