pub mod config;
pub mod error;
pub mod module;
pub mod runner;
pub mod state;

pub use crate::error::DeployError;
