#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct PlanetId(pub u32);

impl fmt::Display for PlanetId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Who holds a planet or flies a fleet.
///
/// Wire encoding: `0` neutral, `1` the bot, `2..` opponents.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Owner {
    Neutral,
    Me,
    Enemy(u8),
}

impl Owner {
    pub fn from_code(code: u8) -> Self {
        match code {
            0 => Owner::Neutral,
            1 => Owner::Me,
            n => Owner::Enemy(n),
        }
    }

    pub fn code(self) -> u8 {
        match self {
            Owner::Neutral => 0,
            Owner::Me => 1,
            Owner::Enemy(n) => n,
        }
    }

    pub fn is_me(self) -> bool {
        self == Owner::Me
    }

    pub fn is_enemy(self) -> bool {
        matches!(self, Owner::Enemy(_))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const ORIGIN: Point = Point { x: 0.0, y: 0.0 };

    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub fn distance_to(self, other: Point) -> f64 {
        (self.x - other.x).hypot(self.y - other.y)
    }

    /// Arithmetic mean of `points`, or `None` for an empty input.
    pub fn centroid(points: impl IntoIterator<Item = Point>) -> Option<Point> {
        let mut count = 0usize;
        let mut sum = Point::ORIGIN;
        for p in points {
            sum.x += p.x;
            sum.y += p.y;
            count += 1;
        }
        if count == 0 {
            return None;
        }
        Some(Point::new(sum.x / count as f64, sum.y / count as f64))
    }
}

#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Planet {
    pub id: PlanetId,
    pub position: Point,
    pub owner: Owner,
    pub num_ships: u32,
    pub growth_rate: u32,
}

impl Planet {
    pub fn new(id: PlanetId, position: Point, owner: Owner, num_ships: u32, growth_rate: u32) -> Self {
        Self {
            id,
            position,
            owner,
            num_ships,
            growth_rate,
        }
    }

    /// Ships beyond the single one that keeps the planet owned.
    pub fn spare_ships(&self) -> u32 {
        self.num_ships.saturating_sub(1)
    }
}
