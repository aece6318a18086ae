use pw_bt::{BtPolicy, BtStatus};
use pw_core::{Order, Point, WorldMut};
use serde::Serialize;
use tracing::info;

use crate::config::BotConfig;
use crate::context::{TurnContext, TurnStats};
use crate::tree::{build_behavior_tree, Node};

/// Outcome of one turn, suitable for JSONL reporting.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TurnReport {
    pub turn: u64,
    pub succeeded: bool,
    pub focus_point: Option<Point>,
    pub orders: Vec<Order>,
    #[serde(flatten)]
    pub stats: TurnStats,
    pub spare_capacity_left: u64,
    pub deployments_left: usize,
    pub elapsed_ms: f64,
}

impl TurnReport {
    fn from_context(ctx: TurnContext, status: BtStatus) -> Self {
        let elapsed_ms = ctx
            .elapsed()
            .map(|d| d.as_secs_f64() * 1000.0)
            .unwrap_or(0.0);
        Self {
            turn: ctx.turn,
            succeeded: status.is_success(),
            focus_point: ctx.focus_point,
            spare_capacity_left: ctx.total_spare_capacity(),
            deployments_left: ctx.deployments.len(),
            stats: ctx.stats,
            orders: ctx.issued,
            elapsed_ms,
        }
    }

    pub fn ships_ordered(&self) -> u64 {
        self.orders.iter().map(|o| u64::from(o.num_ships)).sum()
    }
}

/// Runs a behavior tree once per turn against a fresh [`TurnContext`].
pub struct Bot<W>
where
    W: WorldMut + 'static,
{
    config: BotConfig,
    policy: BtPolicy<W, TurnContext>,
    turn: u64,
}

impl<W> Bot<W>
where
    W: WorldMut + 'static,
{
    /// Bot running the default tree built from `config`.
    pub fn new(config: BotConfig) -> Self {
        let root = build_behavior_tree(&config);
        Self::with_tree(config, root)
    }

    /// Bot running a custom tree. `config` still supplies the turn budget.
    pub fn with_tree(config: BotConfig, root: Node<W>) -> Self {
        Self {
            config,
            policy: BtPolicy::new(root),
            turn: 0,
        }
    }

    pub fn config(&self) -> &BotConfig {
        &self.config
    }

    pub fn turns_played(&self) -> u64 {
        self.turn
    }

    pub fn tree_string(&self) -> String {
        self.policy.tree_string()
    }

    /// An independent bot with the same config and a rebuilt default tree.
    pub fn duplicate(&self) -> Self {
        Self::new(self.config.clone())
    }

    pub fn play_turn(&mut self, world: &mut W) -> TurnReport {
        self.turn += 1;
        let mut ctx = TurnContext::new(self.turn, self.config.turn_budget());
        let status = self.policy.execute(world, &mut ctx);
        let report = TurnReport::from_context(ctx, status);

        info!(
            turn = report.turn,
            ?status,
            orders = report.orders.len(),
            ships = report.ships_ordered(),
            scored = report.stats.deployments_scored,
            dropped = report.stats.deployments_dropped,
            spare_left = report.spare_capacity_left,
            elapsed_ms = report.elapsed_ms,
            "turn finished"
        );
        report
    }
}
