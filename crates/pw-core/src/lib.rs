//! Planet Wars world model.
//!
//! A [`GameState`] is an immutable snapshot of one turn plus the orders issued
//! against it. Decision code depends only on the [`WorldView`] (queries) and
//! [`WorldMut`] (order sink) traits.

#![cfg_attr(docsrs, feature(doc_cfg))]
#![forbid(unsafe_code)]

pub mod fleet;
pub mod parse;
pub mod planet;
pub mod state;
pub mod world;

pub use fleet::Fleet;
pub use parse::ParseError;
pub use planet::{Owner, Planet, PlanetId, Point};
pub use state::GameState;
pub use world::{Order, OrderError, WorldMut, WorldView};
