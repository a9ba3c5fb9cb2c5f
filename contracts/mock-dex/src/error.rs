use cosmwasm_std::{StdError, Uint128};
use cw_utils::PaymentError;
use maneki_types::dex::PairKey;
use thiserror::Error;

#[derive(Error, Debug, PartialEq)]
pub enum ContractError {
    #[error("{0}")]
    Std(#[from] StdError),

    #[error("{0}")]
    Payment(#[from] PaymentError),

    #[error("Pairs have already been created")]
    PairsExist {},

    #[error("No pair exists for {pair}")]
    PairNotFound {
        pair: PairKey,
    },

    #[error("Router holds nothing to seed the pool with")]
    NothingToSeed {},

    #[error("Deadline {deadline} has passed")]
    DeadlineExpired {
        deadline: u64,
    },

    #[error("Exactly one side of the route must be the token")]
    UnsupportedRoute {},

    #[error("Invalid zero amount")]
    InvalidZeroAmount {},

    #[error("Attached funds ({sent}) do not match the swap amount ({expected})")]
    PaymentMismatch {
        expected: Uint128,
        sent: Uint128,
    },

    #[error("Failed to parse reply: missing {key}")]
    ReplyParseFailed {
        key: String,
    },
}
