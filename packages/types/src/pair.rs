use cosmwasm_schema::{cw_serde, QueryResponses};
use cosmwasm_std::{Addr, Uint128};

#[cw_serde]
pub struct InstantiateMsg {
    pub token: String,
    pub quote_denom: String,
    /// Only this address may execute on the pool
    pub router: String,
}

#[cw_serde]
pub enum ExecuteMsg {
    /// Snapshot the pool's current balances as its tracked reserves
    Sync {},
    /// Quote and pay out whatever arrived since the last reserve snapshot.
    /// The offer side is whichever balance grew past its tracked reserve
    Swap {
        recipient: String,
    },
}

#[cw_serde]
#[derive(QueryResponses)]
pub enum QueryMsg {
    #[returns(ConfigResponse)]
    Config {},
    #[returns(ReservesResponse)]
    Reserves {},
}

#[cw_serde]
pub struct ConfigResponse {
    pub token: Addr,
    pub quote_denom: String,
    pub router: Addr,
}

#[cw_serde]
pub struct ReservesResponse {
    pub token_reserve: Uint128,
    pub quote_reserve: Uint128,
}
