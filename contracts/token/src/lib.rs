pub mod contract;
pub mod core;
pub mod error;
pub mod state;

pub use crate::error::ContractError;
