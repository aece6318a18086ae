//! Condition leaves. Not part of the default tree.

use pw_bt::LeafParams;
use pw_core::WorldView;

use crate::context::TurnContext;

/// Leaf param: fraction of the turn budget that must still be left.
pub const TIME: &str = "time";

/// Succeeds while any planet still has spare capacity.
pub fn check_ships_available<W: WorldView>(
    _world: &W,
    ctx: &mut TurnContext,
    _params: &LeafParams,
) -> bool {
    ctx.has_spare_capacity()
}

/// Succeeds while at least `params["time"]` of the turn budget remains.
///
/// Requires `start_timer`; fails if the timer never started.
pub fn check_time_remaining<W: WorldView>(
    _world: &W,
    ctx: &mut TurnContext,
    params: &LeafParams,
) -> bool {
    let Some(elapsed) = ctx.elapsed() else {
        return false;
    };
    let budget = ctx.turn_budget().as_secs_f64();
    if budget <= 0.0 {
        return false;
    }
    1.0 - elapsed.as_secs_f64() / budget >= params.get_or(TIME, 0.0)
}
