//! Leaves that prepare the [`TurnContext`] before any scoring happens.

use pw_bt::LeafParams;
use pw_core::{Point, WorldView};
use tracing::debug;

use crate::context::TurnContext;

/// Leaf param: planets farther than this (in turns) do not count as neighbours.
pub const CLUSTER_RADIUS: &str = "cluster_radius";

pub const DEFAULT_CLUSTER_RADIUS: f64 = 10.0;

/// Writes `ctx.timer`.
pub fn start_timer<W: WorldView>(_world: &W, ctx: &mut TurnContext, _params: &LeafParams) -> bool {
    ctx.start_timer();
    true
}

/// Writes the spare-capacity map and clears `ctx.deployments`.
pub fn initialize_ships_and_deployments<W: WorldView>(
    world: &W,
    ctx: &mut TurnContext,
    _params: &LeafParams,
) -> bool {
    ctx.reset_capacity(world.my_planets());
    ctx.deployments.clear();
    debug!(
        sources = ctx.available_ships().len(),
        spare = ctx.total_spare_capacity(),
        "spare capacity initialized"
    );
    true
}

/// Writes `ctx.focus_point`: the centroid of our planets, or the origin when
/// we own none.
pub fn find_focus_point<W: WorldView>(
    world: &W,
    ctx: &mut TurnContext,
    _params: &LeafParams,
) -> bool {
    let focus = Point::centroid(world.my_planets().map(|p| p.position)).unwrap_or(Point::ORIGIN);
    debug!(x = focus.x, y = focus.y, "focus point");
    ctx.focus_point = Some(focus);
    true
}

/// Writes `ctx.dist_table`.
///
/// For every planet we do not own: the mean distance to all other planets
/// within [`CLUSTER_RADIUS`]. An isolated planet scores the radius itself.
pub fn create_dist_table<W: WorldView>(
    world: &W,
    ctx: &mut TurnContext,
    params: &LeafParams,
) -> bool {
    let radius = params.get_or(CLUSTER_RADIUS, DEFAULT_CLUSTER_RADIUS);
    ctx.dist_table.clear();

    for target in world.not_my_planets() {
        let (sum, count) = world
            .planets()
            .iter()
            .filter(|other| other.id != target.id)
            .map(|other| world.distance(target, other) as f64)
            .filter(|d| *d <= radius)
            .fold((0.0, 0u32), |(sum, count), d| (sum + d, count + 1));

        let clustering = if count == 0 { radius } else { sum / count as f64 };
        ctx.dist_table.insert(target.id, clustering);
    }

    debug!(entries = ctx.dist_table.len(), radius, "distance table built");
    true
}
