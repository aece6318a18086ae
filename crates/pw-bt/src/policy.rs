use tracing::info;

use crate::bt::{tree_to_string, BtNode, BtStatus};

/// Owns a tree root and remembers the status of the last execution.
pub struct BtPolicy<W, C>
where
    W: 'static,
    C: 'static,
{
    root: Box<dyn BtNode<W, C>>,
    last: Option<BtStatus>,
}

impl<W, C> BtPolicy<W, C>
where
    W: 'static,
    C: 'static,
{
    pub fn new(root: Box<dyn BtNode<W, C>>) -> Self {
        info!("behavior tree:\n{}", tree_to_string(root.as_ref()));
        Self { root, last: None }
    }

    pub fn execute(&mut self, world: &mut W, ctx: &mut C) -> BtStatus {
        let status = self.root.tick(world, ctx);
        self.last = Some(status);
        status
    }

    /// `None` until the tree has been executed once.
    pub fn last_status(&self) -> Option<BtStatus> {
        self.last
    }

    pub fn tree_string(&self) -> String {
        tree_to_string(self.root.as_ref())
    }
}
