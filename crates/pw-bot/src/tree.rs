use pw_bt::{BtNode, Leaf, LeafParams, RepeatUntilFail, Sequence};
use pw_core::WorldMut;

use crate::checks;
use crate::config::BotConfig;
use crate::context::TurnContext;
use crate::scheduler;
use crate::startup;
use crate::strategy;

type ViewFn<W> = fn(&W, &mut TurnContext, &LeafParams) -> bool;

pub type Node<W> = Box<dyn BtNode<W, TurnContext>>;

/// Leaf around a function that only reads the world.
pub fn view_leaf<W>(name: &'static str, func: ViewFn<W>) -> Leaf<W, TurnContext>
where
    W: WorldMut + 'static,
{
    Leaf::new(
        name,
        move |world: &mut W, ctx: &mut TurnContext, params: &LeafParams| func(&*world, ctx, params),
    )
}

pub fn check_time_remaining_leaf<W>(config: &BotConfig) -> Leaf<W, TurnContext>
where
    W: WorldMut + 'static,
{
    view_leaf("check_time_remaining", checks::check_time_remaining::<W>)
        .with_params(LeafParams::new().with(checks::TIME, config.time_check_fraction))
}

pub fn check_ships_available_leaf<W>() -> Leaf<W, TurnContext>
where
    W: WorldMut + 'static,
{
    view_leaf("check_ships_available", checks::check_ships_available::<W>)
}

/// The default per-turn pipeline:
///
/// ```text
/// Sequence: Root
/// | Sequence: Startup Sequence
/// | | Leaf: start_timer
/// | | Leaf: initialize_ships_and_deployments
/// | | Leaf: find_focus_point
/// | | Leaf: create_dist_table
/// | Leaf: defense_strategy
/// | Leaf: offense_strategy
/// | RepeatUntilFail: Deployment Loop
/// | | Leaf: deploy_fleet
/// ```
///
/// Calling this again yields an independent copy of the tree.
pub fn build_behavior_tree<W>(config: &BotConfig) -> Node<W>
where
    W: WorldMut + 'static,
{
    let startup_leaves: Vec<Node<W>> = vec![
        Box::new(view_leaf("start_timer", startup::start_timer::<W>)),
        Box::new(view_leaf(
            "initialize_ships_and_deployments",
            startup::initialize_ships_and_deployments::<W>,
        )),
        Box::new(view_leaf("find_focus_point", startup::find_focus_point::<W>)),
        Box::new(
            view_leaf("create_dist_table", startup::create_dist_table::<W>).with_params(
                LeafParams::new().with(startup::CLUSTER_RADIUS, config.cluster_radius),
            ),
        ),
    ];
    let startup_sequence = Sequence::new(startup_leaves).named("Startup Sequence");

    let defense = view_leaf("defense_strategy", strategy::defense_strategy::<W>).with_params(
        LeafParams::new().with(strategy::BASE_WEIGHT, config.defense_base_weight),
    );

    let offense = view_leaf("offense_strategy", strategy::offense_strategy::<W>).with_params(
        LeafParams::new()
            .with(strategy::BASE_WEIGHT, config.offense_base_weight)
            .with(strategy::OVERKILL_MARGIN, config.overkill_margin as f64),
    );

    let deploy: Node<W> = Box::new(Leaf::new("deploy_fleet", scheduler::deploy_fleet::<W>));
    let deploy_loop = RepeatUntilFail::new(deploy).named("Deployment Loop");

    let children: Vec<Node<W>> = vec![
        Box::new(startup_sequence),
        Box::new(defense),
        Box::new(offense),
        Box::new(deploy_loop),
    ];
    Box::new(Sequence::new(children).named("Root"))
}
