#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BtStatus {
    Success,
    Failure,
}

impl BtStatus {
    pub fn is_success(self) -> bool {
        self == BtStatus::Success
    }
}

impl From<bool> for BtStatus {
    fn from(ok: bool) -> Self {
        if ok {
            BtStatus::Success
        } else {
            BtStatus::Failure
        }
    }
}

impl From<BtStatus> for bool {
    fn from(status: BtStatus) -> Self {
        status.is_success()
    }
}

pub trait BtNode<W, C>: 'static
where
    W: 'static,
    C: 'static,
{
    fn tick(&self, world: &mut W, ctx: &mut C) -> BtStatus;

    /// One-line description used in logs and tree dumps, e.g. `Sequence: Root`.
    fn label(&self) -> String;

    /// Append this node (and its subtree) to `out`, one line per node.
    fn write_tree(&self, depth: usize, out: &mut String) {
        write_line(depth, &self.label(), out);
    }
}

pub(crate) fn write_line(depth: usize, label: &str, out: &mut String) {
    for _ in 0..depth {
        out.push_str("| ");
    }
    out.push_str(label);
    out.push('\n');
}

/// Render a tree with `"| "` indentation per level.
pub fn tree_to_string<W, C, N>(root: &N) -> String
where
    N: BtNode<W, C> + ?Sized,
    W: 'static,
    C: 'static,
{
    let mut out = String::new();
    root.write_tree(0, &mut out);
    out
}
