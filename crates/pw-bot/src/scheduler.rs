//! Greedy multi-source deployment.

use pw_bt::LeafParams;
use pw_core::{Order, Planet, PlanetId, WorldMut, WorldView};
use tracing::{debug, error};

use crate::context::TurnContext;
use crate::deployment::DeploymentKind;

/// Spare-capacity source closest to `target`; ties go to the lowest planet id.
fn nearest_source<W: WorldView>(world: &W, ctx: &TurnContext, target: &Planet) -> Option<PlanetId> {
    let mut best: Option<(u32, PlanetId)> = None;
    for &id in ctx.available_ships().keys() {
        if id == target.id {
            continue;
        }
        let Some(source) = world.planet(id) else {
            continue;
        };
        let distance = world.distance(source, target);
        if best.map_or(true, |(d, _)| distance < d) {
            best = Some((distance, id));
        }
    }
    best.map(|(_, id)| id)
}

/// Ships of ours already flying to `target`.
fn ships_en_route<W: WorldView>(world: &W, target: PlanetId) -> u64 {
    world
        .my_fleets()
        .filter(|f| f.destination == target)
        .map(|f| u64::from(f.num_ships))
        .sum()
}

/// Serve the most urgent pending deployment.
///
/// Returns `false` once the queue is empty or no spare capacity is left, which
/// ends the surrounding `RepeatUntilFail`. Every `true` pops one deployment,
/// so the drain terminates.
///
/// An attack the total spare capacity cannot cover in full is dropped and
/// still returns `true`, so cheaper targets further down the queue get served.
/// Defense is served partially.
///
/// Preconditions: `initialize_ships_and_deployments` and the strategies ran.
pub fn deploy_fleet<W: WorldMut>(world: &mut W, ctx: &mut TurnContext, _params: &LeafParams) -> bool {
    if ctx.deployments.is_empty() || !ctx.has_spare_capacity() {
        return false;
    }
    let Some(deployment) = ctx.deployments.pop() else {
        return false;
    };
    ctx.stats.deployments_drained += 1;

    let Some(target) = world.planet(deployment.target).cloned() else {
        debug!(target = %deployment.target, "deployment targets an unknown planet, dropped");
        ctx.stats.deployments_dropped += 1;
        return true;
    };

    let en_route = ships_en_route(&*world, target.id);
    let en_route_capped = u32::try_from(en_route).unwrap_or(u32::MAX);
    let mut required = deployment.required_ships.saturating_sub(en_route_capped);
    if required == 0 {
        debug!(target = %target.id, en_route, "already covered by fleets in flight");
        ctx.stats.deployments_satisfied += 1;
        return true;
    }

    if deployment.kind == DeploymentKind::Offense
        && ctx.total_spare_capacity() < u64::from(required)
    {
        debug!(
            target = %target.id,
            required,
            spare = ctx.total_spare_capacity(),
            "not enough spare ships for attack, dropped"
        );
        ctx.stats.deployments_dropped += 1;
        return true;
    }

    // Ships already on the target stay where they are.
    required -= ctx.reserve(target.id, required);

    while required > 0 {
        let Some(source) = nearest_source(&*world, ctx, &target) else {
            break;
        };
        let fleet_size = ctx.spare_capacity(source).min(required);

        if let Err(err) = world.issue_order(source, target.id, fleet_size) {
            error!(%err, source = %source, target = %target.id, fleet_size, "order rejected");
            return false;
        }
        ctx.reserve(source, fleet_size);
        ctx.issued.push(Order {
            source,
            destination: target.id,
            num_ships: fleet_size,
        });
        ctx.stats.ships_sent += u64::from(fleet_size);
        required -= fleet_size;
        debug!(source = %source, target = %target.id, fleet_size, "order issued");
    }

    if required > 0 {
        debug!(
            target = %target.id,
            unmet = required,
            kind = ?deployment.kind,
            "deployment partially served"
        );
    }
    true
}
