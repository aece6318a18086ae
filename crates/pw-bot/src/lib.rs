//! Behavior-tree Planet Wars bot.
//!
//! Every turn the default tree initializes a [`TurnContext`], scores defense
//! and offense targets into a [`DeploymentQueue`], then drains the queue with
//! the greedy nearest-source scheduler.

#![forbid(unsafe_code)]

pub mod bot;
pub mod checks;
pub mod config;
pub mod context;
pub mod deployment;
pub mod scheduler;
pub mod startup;
pub mod strategy;
pub mod tree;

pub use bot::{Bot, TurnReport};
pub use config::BotConfig;
pub use context::{TurnContext, TurnStats};
pub use deployment::{Deployment, DeploymentKind, DeploymentQueue};
pub use tree::build_behavior_tree;
