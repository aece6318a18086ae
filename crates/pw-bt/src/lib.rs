//! Behavior tree runtime for turn-based bots.
//!
//! Nodes are stateless and generic over a world type `W` and a per-turn
//! context type `C`. A tick runs to completion: there is no `Running` state,
//! "no more work" is reported as [`BtStatus::Failure`].

#![cfg_attr(docsrs, feature(doc_cfg))]
#![forbid(unsafe_code)]

pub mod bt;
pub mod nodes;
pub mod params;
pub mod policy;

pub use bt::{tree_to_string, BtNode, BtStatus};
pub use nodes::{Inverter, Leaf, RepeatUntilFail, Selector, Sequence, Succeeder};
pub use params::LeafParams;
pub use policy::BtPolicy;
