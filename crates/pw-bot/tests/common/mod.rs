#![allow(dead_code)]

use std::time::Duration;

use pw_bt::LeafParams;
use pw_bot::startup::{
    create_dist_table, find_focus_point, initialize_ships_and_deployments, start_timer,
    CLUSTER_RADIUS,
};
use pw_bot::strategy::{defense_strategy, offense_strategy, BASE_WEIGHT, OVERKILL_MARGIN};
use pw_bot::{BotConfig, TurnContext};
use pw_core::{Fleet, GameState, Owner, Planet, PlanetId, Point};

pub fn planet(id: u32, x: f64, y: f64, owner: Owner, ships: u32, growth: u32) -> Planet {
    Planet::new(PlanetId(id), Point::new(x, y), owner, ships, growth)
}

pub fn fleet(owner: Owner, ships: u32, source: u32, destination: u32, turns: u32) -> Fleet {
    Fleet {
        owner,
        num_ships: ships,
        source: PlanetId(source),
        destination: PlanetId(destination),
        total_trip_length: turns,
        turns_remaining: turns,
    }
}

/// Run the startup leaves the way the default tree does.
pub fn prepared(world: &GameState, config: &BotConfig) -> TurnContext {
    let mut ctx = TurnContext::new(1, Duration::from_secs(1));
    let none = LeafParams::new();
    assert!(start_timer(world, &mut ctx, &none));
    assert!(initialize_ships_and_deployments(world, &mut ctx, &none));
    assert!(find_focus_point(world, &mut ctx, &none));
    let radius = LeafParams::new().with(CLUSTER_RADIUS, config.cluster_radius);
    assert!(create_dist_table(world, &mut ctx, &radius));
    ctx
}

/// Startup plus both strategies.
pub fn scored(world: &GameState, config: &BotConfig) -> TurnContext {
    let mut ctx = prepared(world, config);
    let defense = LeafParams::new().with(BASE_WEIGHT, config.defense_base_weight);
    let offense = LeafParams::new()
        .with(BASE_WEIGHT, config.offense_base_weight)
        .with(OVERKILL_MARGIN, config.overkill_margin as f64);
    assert!(defense_strategy(world, &mut ctx, &defense));
    assert!(offense_strategy(world, &mut ctx, &offense));
    ctx
}
