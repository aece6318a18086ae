//! Map text parsing.
//!
//! One entity per line, `#` starts a comment:
//!
//! ```text
//! P <x> <y> <owner> <ships> <growth>
//! F <owner> <ships> <source> <destination> <total_turns> <turns_remaining>
//! ```
//!
//! Planet ids are assigned in order of appearance, starting at 0.

use std::str::FromStr;

use thiserror::Error;

use crate::fleet::Fleet;
use crate::planet::{Owner, Planet, PlanetId, Point};
use crate::state::GameState;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    #[error("line {line}: unknown record type `{record}`")]
    UnknownRecord { line: usize, record: String },

    #[error("line {line}: expected {expected} fields, found {found}")]
    FieldCount {
        line: usize,
        expected: usize,
        found: usize,
    },

    #[error("line {line}: invalid {field} `{value}`")]
    InvalidNumber {
        line: usize,
        field: &'static str,
        value: String,
    },

    #[error("line {line}: fleets cannot be neutral")]
    NeutralFleet { line: usize },

    #[error("line {line}: fleet references unknown planet {planet}")]
    UnknownPlanet { line: usize, planet: PlanetId },
}

fn number<T: FromStr>(line: usize, field: &'static str, value: &str) -> Result<T, ParseError> {
    value.parse().map_err(|_| ParseError::InvalidNumber {
        line,
        field,
        value: value.to_string(),
    })
}

fn expect_fields(line: usize, fields: &[&str], expected: usize) -> Result<(), ParseError> {
    if fields.len() != expected {
        return Err(ParseError::FieldCount {
            line,
            expected,
            found: fields.len(),
        });
    }
    Ok(())
}

impl GameState {
    pub fn parse(text: &str) -> Result<Self, ParseError> {
        let mut planets = Vec::new();
        let mut fleets = Vec::new();
        // Fleets are validated once every planet is known.
        let mut fleet_lines = Vec::new();

        for (idx, raw) in text.lines().enumerate() {
            let line = idx + 1;
            let content = raw.split('#').next().unwrap_or("").trim();
            if content.is_empty() {
                continue;
            }

            let fields: Vec<&str> = content.split_whitespace().collect();
            match fields[0] {
                "P" => {
                    expect_fields(line, &fields, 6)?;
                    let x: f64 = number(line, "x", fields[1])?;
                    let y: f64 = number(line, "y", fields[2])?;
                    let owner: u8 = number(line, "owner", fields[3])?;
                    let num_ships: u32 = number(line, "ships", fields[4])?;
                    let growth_rate: u32 = number(line, "growth rate", fields[5])?;
                    let id = PlanetId(planets.len() as u32);
                    planets.push(Planet::new(
                        id,
                        Point::new(x, y),
                        Owner::from_code(owner),
                        num_ships,
                        growth_rate,
                    ));
                }
                "F" => {
                    expect_fields(line, &fields, 7)?;
                    let owner: u8 = number(line, "owner", fields[1])?;
                    if owner == 0 {
                        return Err(ParseError::NeutralFleet { line });
                    }
                    fleet_lines.push(line);
                    fleets.push(Fleet {
                        owner: Owner::from_code(owner),
                        num_ships: number(line, "ships", fields[2])?,
                        source: PlanetId(number(line, "source", fields[3])?),
                        destination: PlanetId(number(line, "destination", fields[4])?),
                        total_trip_length: number(line, "trip length", fields[5])?,
                        turns_remaining: number(line, "turns remaining", fields[6])?,
                    });
                }
                other => {
                    return Err(ParseError::UnknownRecord {
                        line,
                        record: other.to_string(),
                    })
                }
            }
        }

        let known = planets.len() as u32;
        for (fleet, line) in fleets.iter().zip(fleet_lines) {
            for planet in [fleet.source, fleet.destination] {
                if planet.0 >= known {
                    return Err(ParseError::UnknownPlanet { line, planet });
                }
            }
        }

        Ok(GameState::new(planets, fleets))
    }
}

impl FromStr for GameState {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        GameState::parse(s)
    }
}
