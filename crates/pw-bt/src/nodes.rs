use std::borrow::Cow;

use tracing::{debug, trace};

use crate::bt::{write_line, BtNode, BtStatus};
use crate::params::LeafParams;

type Name = Option<Cow<'static, str>>;

fn labelled(kind: &str, name: &Name) -> String {
    match name {
        Some(name) => format!("{kind}: {name}"),
        None => kind.to_string(),
    }
}

fn write_children<W, C>(
    label: &str,
    children: &[Box<dyn BtNode<W, C>>],
    depth: usize,
    out: &mut String,
) where
    W: 'static,
    C: 'static,
{
    write_line(depth, label, out);
    for child in children {
        child.write_tree(depth + 1, out);
    }
}

/// Runs children in order until one fails.
pub struct Sequence<W, C>
where
    W: 'static,
    C: 'static,
{
    name: Name,
    children: Vec<Box<dyn BtNode<W, C>>>,
}

impl<W, C> Sequence<W, C>
where
    W: 'static,
    C: 'static,
{
    pub fn new(children: Vec<Box<dyn BtNode<W, C>>>) -> Self {
        Self {
            name: None,
            children,
        }
    }

    pub fn named(mut self, name: impl Into<Cow<'static, str>>) -> Self {
        self.name = Some(name.into());
        self
    }
}

impl<W, C> BtNode<W, C> for Sequence<W, C>
where
    W: 'static,
    C: 'static,
{
    fn tick(&self, world: &mut W, ctx: &mut C) -> BtStatus {
        trace!(node = %self.label(), "executing");
        let mut status = BtStatus::Success;
        for child in &self.children {
            if !child.tick(world, ctx).is_success() {
                status = BtStatus::Failure;
                break;
            }
        }
        debug!(node = %self.label(), ?status, "finished");
        status
    }

    fn label(&self) -> String {
        labelled("Sequence", &self.name)
    }

    fn write_tree(&self, depth: usize, out: &mut String) {
        write_children(&self.label(), &self.children, depth, out);
    }
}

/// Runs children in order until one succeeds.
pub struct Selector<W, C>
where
    W: 'static,
    C: 'static,
{
    name: Name,
    children: Vec<Box<dyn BtNode<W, C>>>,
}

impl<W, C> Selector<W, C>
where
    W: 'static,
    C: 'static,
{
    pub fn new(children: Vec<Box<dyn BtNode<W, C>>>) -> Self {
        Self {
            name: None,
            children,
        }
    }

    pub fn named(mut self, name: impl Into<Cow<'static, str>>) -> Self {
        self.name = Some(name.into());
        self
    }
}

impl<W, C> BtNode<W, C> for Selector<W, C>
where
    W: 'static,
    C: 'static,
{
    fn tick(&self, world: &mut W, ctx: &mut C) -> BtStatus {
        trace!(node = %self.label(), "executing");
        let mut status = BtStatus::Failure;
        for child in &self.children {
            if child.tick(world, ctx).is_success() {
                status = BtStatus::Success;
                break;
            }
        }
        debug!(node = %self.label(), ?status, "finished");
        status
    }

    fn label(&self) -> String {
        labelled("Selector", &self.name)
    }

    fn write_tree(&self, depth: usize, out: &mut String) {
        write_children(&self.label(), &self.children, depth, out);
    }
}

pub type LeafFn<W, C> = dyn Fn(&mut W, &mut C, &LeafParams) -> bool;

/// Wraps a decision function.
///
/// The function is bound once, together with its [`LeafParams`], when the
/// tree is built. Returning `false` means "nothing (more) to do".
pub struct Leaf<W, C>
where
    W: 'static,
    C: 'static,
{
    name: Cow<'static, str>,
    params: LeafParams,
    func: Box<LeafFn<W, C>>,
}

impl<W, C> Leaf<W, C>
where
    W: 'static,
    C: 'static,
{
    pub fn new(
        name: impl Into<Cow<'static, str>>,
        func: impl Fn(&mut W, &mut C, &LeafParams) -> bool + 'static,
    ) -> Self {
        Self {
            name: name.into(),
            params: LeafParams::default(),
            func: Box::new(func),
        }
    }

    pub fn with_params(mut self, params: LeafParams) -> Self {
        self.params = params;
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn params(&self) -> &LeafParams {
        &self.params
    }
}

impl<W, C> BtNode<W, C> for Leaf<W, C>
where
    W: 'static,
    C: 'static,
{
    fn tick(&self, world: &mut W, ctx: &mut C) -> BtStatus {
        trace!(node = %self.label(), "executing");
        let status = BtStatus::from((self.func)(world, ctx, &self.params));
        debug!(node = %self.label(), ?status, "finished");
        status
    }

    fn label(&self) -> String {
        format!("Leaf: {}", self.name)
    }
}

macro_rules! decorator {
    ($(#[$doc:meta])* $ty:ident) => {
        $(#[$doc])*
        pub struct $ty<W, C>
        where
            W: 'static,
            C: 'static,
        {
            name: Name,
            child: Box<dyn BtNode<W, C>>,
        }

        impl<W, C> $ty<W, C>
        where
            W: 'static,
            C: 'static,
        {
            pub fn new(child: Box<dyn BtNode<W, C>>) -> Self {
                Self { name: None, child }
            }

            pub fn named(mut self, name: impl Into<Cow<'static, str>>) -> Self {
                self.name = Some(name.into());
                self
            }
        }
    };
}

decorator!(
    /// Negates the child's result.
    Inverter
);

decorator!(
    /// Runs the child for its side effects and always succeeds.
    Succeeder
);

decorator!(
    /// Ticks the child until it fails, then succeeds.
    ///
    /// Used to drain a work queue; the child must eventually fail, so it has
    /// to consume something finite on every successful tick.
    RepeatUntilFail
);

impl<W, C> BtNode<W, C> for Inverter<W, C>
where
    W: 'static,
    C: 'static,
{
    fn tick(&self, world: &mut W, ctx: &mut C) -> BtStatus {
        trace!(node = %self.label(), "executing");
        let status = BtStatus::from(!self.child.tick(world, ctx).is_success());
        debug!(node = %self.label(), ?status, "finished");
        status
    }

    fn label(&self) -> String {
        labelled("Inverter", &self.name)
    }

    fn write_tree(&self, depth: usize, out: &mut String) {
        write_line(depth, &self.label(), out);
        self.child.write_tree(depth + 1, out);
    }
}

impl<W, C> BtNode<W, C> for Succeeder<W, C>
where
    W: 'static,
    C: 'static,
{
    fn tick(&self, world: &mut W, ctx: &mut C) -> BtStatus {
        trace!(node = %self.label(), "executing");
        let _ = self.child.tick(world, ctx);
        debug!(node = %self.label(), status = ?BtStatus::Success, "finished");
        BtStatus::Success
    }

    fn label(&self) -> String {
        labelled("Succeeder", &self.name)
    }

    fn write_tree(&self, depth: usize, out: &mut String) {
        write_line(depth, &self.label(), out);
        self.child.write_tree(depth + 1, out);
    }
}

impl<W, C> BtNode<W, C> for RepeatUntilFail<W, C>
where
    W: 'static,
    C: 'static,
{
    fn tick(&self, world: &mut W, ctx: &mut C) -> BtStatus {
        trace!(node = %self.label(), "executing");
        let mut iterations: u64 = 0;
        while self.child.tick(world, ctx).is_success() {
            iterations += 1;
        }
        debug!(node = %self.label(), iterations, status = ?BtStatus::Success, "finished");
        BtStatus::Success
    }

    fn label(&self) -> String {
        labelled("RepeatUntilFail", &self.name)
    }

    fn write_tree(&self, depth: usize, out: &mut String) {
        write_line(depth, &self.label(), out);
        self.child.write_tree(depth + 1, out);
    }
}
