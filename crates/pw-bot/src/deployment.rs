use std::cmp::{Ordering, Reverse};
use std::collections::BinaryHeap;

use pw_core::PlanetId;
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum DeploymentKind {
    /// Reinforce an owned planet under attack; may be served partially.
    Defense,
    /// Capture a planet; only worth sending when it can be served in full.
    Offense,
}

/// A scored intent to move `required_ships` (net) to `target`.
///
/// Lower scores are more urgent.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Deployment {
    pub score: f64,
    pub target: PlanetId,
    pub required_ships: u32,
    pub kind: DeploymentKind,
}

impl Deployment {
    pub fn defense(score: f64, target: PlanetId, required_ships: u32) -> Self {
        Self {
            score,
            target,
            required_ships,
            kind: DeploymentKind::Defense,
        }
    }

    pub fn offense(score: f64, target: PlanetId, required_ships: u32) -> Self {
        Self {
            score,
            target,
            required_ships,
            kind: DeploymentKind::Offense,
        }
    }
}

#[derive(Debug, Clone)]
struct Queued {
    deployment: Deployment,
    seq: u64,
}

impl Queued {
    fn key(&self) -> (f64, u64) {
        (self.deployment.score, self.seq)
    }
}

impl PartialEq for Queued {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Queued {}

impl PartialOrd for Queued {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Queued {
    fn cmp(&self, other: &Self) -> Ordering {
        let (a_score, a_seq) = self.key();
        let (b_score, b_seq) = other.key();
        a_score.total_cmp(&b_score).then(a_seq.cmp(&b_seq))
    }
}

/// Min-priority queue of deployments.
///
/// Pops the lowest score first; equal scores pop in insertion order.
#[derive(Debug, Clone, Default)]
pub struct DeploymentQueue {
    heap: BinaryHeap<Reverse<Queued>>,
    next_seq: u64,
}

impl DeploymentQueue {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, deployment: Deployment) {
        let seq = self.next_seq;
        self.next_seq += 1;
        self.heap.push(Reverse(Queued { deployment, seq }));
    }

    pub fn pop(&mut self) -> Option<Deployment> {
        self.heap.pop().map(|Reverse(q)| q.deployment)
    }

    pub fn peek(&self) -> Option<&Deployment> {
        self.heap.peek().map(|Reverse(q)| &q.deployment)
    }

    pub fn len(&self) -> usize {
        self.heap.len()
    }

    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }

    pub fn clear(&mut self) {
        self.heap.clear();
        self.next_seq = 0;
    }

    /// Pending deployments in pop order, without draining the queue.
    pub fn to_sorted_vec(&self) -> Vec<Deployment> {
        let mut queued: Vec<&Queued> = self.heap.iter().map(|Reverse(q)| q).collect();
        queued.sort();
        queued.into_iter().map(|q| q.deployment.clone()).collect()
    }
}
