//! Target scoring.
//!
//! Both strategies only read the world and push into `ctx.deployments`; they
//! always succeed. Preconditions: `find_focus_point` has run (the origin is
//! used otherwise) and, for offense, `create_dist_table`.

use pw_bt::LeafParams;
use pw_core::{Planet, Point, WorldView};
use tracing::{debug, trace};

use crate::context::TurnContext;
use crate::deployment::Deployment;

/// Leaf param: constant added to every score the strategy pushes.
pub const BASE_WEIGHT: &str = "base_weight";
/// Leaf param: extra ships sent against enemy planets.
pub const OVERKILL_MARGIN: &str = "overkill_margin";

pub const DEFAULT_DEFENSE_BASE_WEIGHT: f64 = 0.0;
pub const DEFAULT_OFFENSE_BASE_WEIGHT: f64 = 25.0;
pub const DEFAULT_OVERKILL_MARGIN: f64 = 2.0;

fn focus(ctx: &TurnContext) -> Point {
    ctx.focus_point.unwrap_or(Point::ORIGIN)
}

/// One deployment per hostile fleet heading to a planet we own, asking for
/// as many ships as the fleet carries.
pub fn defense_strategy<W: WorldView>(world: &W, ctx: &mut TurnContext, params: &LeafParams) -> bool {
    let base = params.get_or(BASE_WEIGHT, DEFAULT_DEFENSE_BASE_WEIGHT);
    let focus = focus(ctx);
    let mut pushed = 0u32;

    for fleet in world.enemy_fleets() {
        let Some(target) = world.planet(fleet.destination) else {
            continue;
        };
        if !target.owner.is_me() {
            continue;
        }

        let score = base + focus.distance_to(target.position);
        trace!(target = %target.id, score, ships = fleet.num_ships, "defense candidate");
        ctx.deployments
            .push(Deployment::defense(score, target.id, fleet.num_ships));
        pushed += 1;
    }

    ctx.stats.deployments_scored += pushed;
    debug!(pushed, "defense scored");
    true
}

/// Ships needed to take `target` and hold it on arrival.
///
/// Enemy planets keep growing while our fleet travels from the focus point, so
/// their production over that distance and `overkill` are added on top.
pub fn ships_needed(target: &Planet, distance: f64, overkill: u32) -> u32 {
    let base = target.num_ships.saturating_add(1);
    if !target.owner.is_enemy() {
        return base;
    }
    let growth = (distance * target.growth_rate as f64).ceil().max(0.0) as u32;
    base.saturating_add(growth).saturating_add(overkill)
}

/// One deployment per planet we do not own. Close, productive, clustered and
/// cheap targets score lowest.
pub fn offense_strategy<W: WorldView>(world: &W, ctx: &mut TurnContext, params: &LeafParams) -> bool {
    let base = params.get_or(BASE_WEIGHT, DEFAULT_OFFENSE_BASE_WEIGHT);
    let overkill = params
        .get_or(OVERKILL_MARGIN, DEFAULT_OVERKILL_MARGIN)
        .max(0.0) as u32;
    let focus = focus(ctx);
    let mut pushed = 0u32;

    for target in world.not_my_planets() {
        let distance = focus.distance_to(target.position);
        let needed = ships_needed(target, distance, overkill);
        let clustering = ctx.cluster_distance(target.id).unwrap_or(0.0);
        let score =
            base + distance - target.growth_rate as f64 + needed as f64 + clustering;

        trace!(target = %target.id, score, needed, "offense candidate");
        ctx.deployments
            .push(Deployment::offense(score, target.id, needed));
        pushed += 1;
    }

    ctx.stats.deployments_scored += pushed;
    debug!(pushed, "offense scored");
    true
}
