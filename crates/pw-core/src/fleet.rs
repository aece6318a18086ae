#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::planet::{Owner, PlanetId};

/// Ships in transit. Fleets cannot be redirected once launched.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Fleet {
    pub owner: Owner,
    pub num_ships: u32,
    pub source: PlanetId,
    pub destination: PlanetId,
    pub total_trip_length: u32,
    pub turns_remaining: u32,
}

impl Fleet {
    pub fn is_mine(&self) -> bool {
        self.owner.is_me()
    }

    pub fn is_hostile(&self) -> bool {
        self.owner.is_enemy()
    }
}
