use cosmwasm_std::{StdError, Uint128};
use thiserror::Error;

#[derive(Error, Debug, PartialEq)]
pub enum ContractError {
    #[error("{0}")]
    Std(#[from] StdError),

    #[error("{0}")]
    Base(#[from] cw20_base::ContractError),

    #[error("Caller is not authorized to perform this action")]
    Unauthorized {},

    #[error("Invalid zero amount")]
    InvalidZeroAmount {},

    #[error("Token transfers have not been launched")]
    NotLaunched {},

    #[error("Token transfers are already launched")]
    AlreadyLaunched {},

    #[error("Address is blacklisted: {address}")]
    Blacklisted {
        address: String,
    },

    #[error("Transfer amount exceeds the limit of {cap}")]
    MaxTxAmountExceeded {
        cap: Uint128,
    },

    #[error("Only the marketing wallet may perform this action")]
    InvalidMsgSender {},

    #[error("Signature does not match the configured claim signer")]
    InvalidSignature {},

    #[error("No prize is configured for slot {slot}")]
    PrizeNotSet {
        slot: u16,
    },

    #[error("Prize for slot {slot} has already been claimed by {player}")]
    PrizeAlreadyClaimed {
        player: String,
        slot: u16,
    },

    #[error("Claim signer key must be a 33-byte compressed secp256k1 public key")]
    InvalidSignerKey {},

    #[error("Airdrop requires at least one recipient")]
    NoRecipients {},
}
