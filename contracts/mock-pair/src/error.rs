use cosmwasm_std::{DivideByZeroError, OverflowError, StdError};
use thiserror::Error;

#[derive(Error, Debug, PartialEq)]
pub enum ContractError {
    #[error("{0}")]
    Std(#[from] StdError),

    #[error("{0}")]
    Overflow(#[from] OverflowError),

    #[error("{0}")]
    DivideByZero(#[from] DivideByZeroError),

    #[error("Only the router may execute on this pool")]
    Unauthorized {},

    #[error("Pool has no liquidity")]
    InsufficientLiquidity {},

    #[error("Swap would pay out nothing")]
    InsufficientOutput {},

    #[error("No offer asset was received since the last sync")]
    NothingReceived {},
}
