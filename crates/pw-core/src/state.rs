use std::collections::BTreeMap;

use crate::fleet::Fleet;
use crate::planet::{Planet, PlanetId};
use crate::world::{Order, OrderError, WorldMut, WorldView};

/// One turn's snapshot together with the orders issued against it.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct GameState {
    planets: Vec<Planet>,
    fleets: Vec<Fleet>,
    orders: Vec<Order>,
    committed: BTreeMap<PlanetId, u32>,
}

impl GameState {
    pub fn new(planets: Vec<Planet>, fleets: Vec<Fleet>) -> Self {
        Self {
            planets,
            fleets,
            orders: Vec::new(),
            committed: BTreeMap::new(),
        }
    }

    pub fn orders(&self) -> &[Order] {
        &self.orders
    }

    /// Drain the orders issued so far, e.g. to write them out at turn end.
    pub fn take_orders(&mut self) -> Vec<Order> {
        self.committed.clear();
        std::mem::take(&mut self.orders)
    }

    /// Ships at `id` not yet committed to an order this turn.
    pub fn uncommitted_ships(&self, id: PlanetId) -> Option<u32> {
        let planet = self.planet(id)?;
        let committed = self.committed.get(&id).copied().unwrap_or(0);
        Some(planet.num_ships.saturating_sub(committed))
    }

    pub fn ships_ordered(&self) -> u64 {
        self.orders.iter().map(|o| u64::from(o.num_ships)).sum()
    }
}

impl WorldView for GameState {
    fn planets(&self) -> &[Planet] {
        &self.planets
    }

    fn fleets(&self) -> &[Fleet] {
        &self.fleets
    }
}

impl WorldMut for GameState {
    fn issue_order(
        &mut self,
        source: PlanetId,
        destination: PlanetId,
        num_ships: u32,
    ) -> Result<(), OrderError> {
        if num_ships == 0 {
            return Err(OrderError::NoShips(source));
        }
        if source == destination {
            return Err(OrderError::SelfTarget(source));
        }
        if self.planet(destination).is_none() {
            return Err(OrderError::UnknownPlanet(destination));
        }
        let planet = self
            .planet(source)
            .ok_or(OrderError::UnknownPlanet(source))?;
        if !planet.owner.is_me() {
            return Err(OrderError::NotOwned(source));
        }

        let available = self.uncommitted_ships(source).unwrap_or(0);
        if num_ships > available {
            return Err(OrderError::InsufficientShips {
                planet: source,
                requested: num_ships,
                available,
            });
        }

        *self.committed.entry(source).or_insert(0) += num_ships;
        self.orders.push(Order {
            source,
            destination,
            num_ships,
        });
        Ok(())
    }
}
