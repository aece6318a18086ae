mod common;

use common::planet;
use pw_bt::{Leaf, LeafParams, RepeatUntilFail, Sequence};
use pw_bot::checks::TIME;
use pw_bot::startup::{
    create_dist_table, find_focus_point, initialize_ships_and_deployments, start_timer,
    CLUSTER_RADIUS,
};
use pw_bot::strategy::{offense_strategy, BASE_WEIGHT};
use pw_bot::tree::{check_ships_available_leaf, check_time_remaining_leaf, view_leaf, Node};
use pw_bot::{scheduler, Bot, BotConfig};
use pw_core::{GameState, Owner};

/// Startup and offense, then a drain guarded by both checks.
fn guarded_tree(config: &BotConfig) -> Node<GameState> {
    let startup: Vec<Node<GameState>> = vec![
        Box::new(view_leaf("start_timer", start_timer::<GameState>)),
        Box::new(view_leaf(
            "initialize_ships_and_deployments",
            initialize_ships_and_deployments::<GameState>,
        )),
        Box::new(view_leaf("find_focus_point", find_focus_point::<GameState>)),
        Box::new(
            view_leaf("create_dist_table", create_dist_table::<GameState>)
                .with_params(LeafParams::new().with(CLUSTER_RADIUS, config.cluster_radius)),
        ),
        Box::new(
            view_leaf("offense_strategy", offense_strategy::<GameState>)
                .with_params(LeafParams::new().with(BASE_WEIGHT, config.offense_base_weight)),
        ),
    ];

    let guarded_step: Vec<Node<GameState>> = vec![
        Box::new(check_ships_available_leaf::<GameState>()),
        Box::new(check_time_remaining_leaf::<GameState>(config)),
        Box::new(Leaf::new("deploy_fleet", scheduler::deploy_fleet::<GameState>)),
    ];
    let drain = RepeatUntilFail::new(Box::new(Sequence::new(guarded_step).named("Guarded Step")))
        .named("Deployment Loop");

    let root: Vec<Node<GameState>> = vec![
        Box::new(Sequence::new(startup).named("Startup")),
        Box::new(drain),
    ];
    Box::new(Sequence::new(root).named("Root"))
}

/// One home planet with 8 spare ships and three neutrals costing 4 each.
fn world() -> GameState {
    GameState::new(
        vec![
            planet(0, 0.0, 0.0, Owner::Me, 9, 2),
            planet(1, 3.0, 0.0, Owner::Neutral, 3, 1),
            planet(2, 0.0, 4.0, Owner::Neutral, 3, 1),
            planet(3, 5.0, 5.0, Owner::Neutral, 3, 1),
        ],
        Vec::new(),
    )
}

#[test]
fn time_leaf_binds_the_configured_fraction() {
    let config = BotConfig {
        time_check_fraction: 0.4,
        ..BotConfig::default()
    };

    let leaf = check_time_remaining_leaf::<GameState>(&config);
    assert_eq!(leaf.name(), "check_time_remaining");
    assert_eq!(leaf.params().get(TIME), Some(0.4));

    let ships = check_ships_available_leaf::<GameState>();
    assert_eq!(ships.name(), "check_ships_available");
    assert_eq!(ships.params().get(TIME), None);
}

#[test]
fn guarded_drain_stops_once_capacity_runs_out() {
    let config = BotConfig::default();
    let mut bot = Bot::with_tree(config.clone(), guarded_tree(&config));
    let mut world = world();

    let report = bot.play_turn(&mut world);

    assert!(report.succeeded);
    // Two captures use up all 8 spare ships; the third deployment is never
    // popped because the capacity check fails first.
    assert_eq!(report.ships_ordered(), 8);
    assert_eq!(world.orders().len(), 2);
    assert_eq!(report.spare_capacity_left, 0);
    assert_eq!(report.stats.deployments_drained, 2);
    assert_eq!(report.deployments_left, 1);
    assert!(bot.tree_string().contains("| | | Leaf: check_time_remaining\n"));
}

#[test]
fn exhausted_time_budget_blocks_every_order() {
    let config = BotConfig {
        time_check_fraction: 1.5,
        ..BotConfig::default()
    };
    let mut bot = Bot::with_tree(config.clone(), guarded_tree(&config));
    let mut world = world();

    let report = bot.play_turn(&mut world);

    assert_eq!(bot.config().time_check_fraction, 1.5);
    assert!(report.succeeded);
    assert!(world.orders().is_empty());
    assert_eq!(report.stats.deployments_drained, 0);
    assert_eq!(report.deployments_left, 3);
    assert_eq!(report.spare_capacity_left, 8);
}
