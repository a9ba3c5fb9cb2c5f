use cosmwasm_schema::{cw_serde, QueryResponses};
use cosmwasm_std::{Addr, Binary, Uint128};
use cw20::{AllowanceResponse, BalanceResponse, Expiration, TokenInfoResponse};

#[cw_serde]
pub struct InstantiateMsg {
    /// Receives the marketing allocation, and is the only account allowed to
    /// submit prize claims and airdrops
    pub marketing_wallet: String,
    /// Receives the developer allocation
    pub developer_wallet: String,
    /// Compressed secp256k1 public key (33 bytes) whose signatures authorize
    /// slot-prize payouts
    pub claim_signer: Binary,
}

#[cw_serde]
pub struct AirdropRecipient {
    pub address: String,
    pub amount: Uint128,
}

#[cw_serde]
pub enum ExecuteMsg {
    Transfer {
        recipient: String,
        amount: Uint128,
    },
    TransferFrom {
        owner: String,
        recipient: String,
        amount: Uint128,
    },
    Burn {
        amount: Uint128,
    },
    IncreaseAllowance {
        spender: String,
        amount: Uint128,
        expires: Option<Expiration>,
    },
    DecreaseAllowance {
        spender: String,
        amount: Uint128,
        expires: Option<Expiration>,
    },
    /// Open transfers to everyone. Owner only, and cannot be undone
    SetLaunch {},
    /// Set the prize paid out for hitting `slot`. A zero amount removes the
    /// prize. Owner only
    SetSlotPrize {
        slot: u16,
        amount: Uint128,
    },
    /// Pay the prize configured for `slot` to `player` out of the marketing
    /// wallet's balance. The signature must be the claim signer's, over the
    /// digest described in [`crate::claim`]. Only the marketing wallet may
    /// submit claims; each (player, slot) pays out at most once
    ClaimSlotPrize {
        player: String,
        slot: u16,
        signature: Binary,
    },
    /// Distribute tokens from the marketing wallet's balance. Only the
    /// marketing wallet may submit
    Airdrop {
        recipients: Vec<AirdropRecipient>,
    },
    /// Exempt `address` from the launch gate and the transfer cap. Owner only
    SetAllAccess {
        address: String,
        grant: bool,
    },
    /// Block `address` from sending and receiving. Owner only
    SetBlacklist {
        address: String,
        blocked: bool,
    },
    /// Cap the amount a single non-exempt transfer may move. `None` removes
    /// the cap. Owner only
    SetMaxTxAmount {
        amount: Option<Uint128>,
    },
    /// Rotate the claim-signer public key. Owner only
    SetClaimSigner {
        pubkey: Binary,
    },
}

#[cw_serde]
#[derive(QueryResponses)]
pub enum QueryMsg {
    #[returns(TokenInfoResponse)]
    TokenInfo {},
    #[returns(BalanceResponse)]
    Balance {
        address: String,
    },
    #[returns(AllowanceResponse)]
    Allowance {
        owner: String,
        spender: String,
    },
    #[returns(ConfigResponse)]
    Config {},
    #[returns(SlotPrizeResponse)]
    SlotPrize {
        slot: u16,
    },
    #[returns(bool)]
    PrizeClaimed {
        player: String,
        slot: u16,
    },
    #[returns(AccessStatusResponse)]
    AccessStatus {
        address: String,
    },
}

#[cw_serde]
pub struct ConfigResponse {
    pub owner: Addr,
    pub marketing_wallet: Addr,
    pub developer_wallet: Addr,
    pub claim_signer: Binary,
    pub launched: bool,
    pub max_tx_amount: Option<Uint128>,
}

#[cw_serde]
pub struct SlotPrizeResponse {
    pub slot: u16,
    pub amount: Option<Uint128>,
}

#[cw_serde]
pub struct AccessStatusResponse {
    pub all_access: bool,
    pub blacklisted: bool,
}
