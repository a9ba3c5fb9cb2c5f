use cosmwasm_schema::cw_serde;
use cosmwasm_std::{Addr, Uint128};
use cw_storage_plus::Item;

#[cw_serde]
pub struct Config {
    pub token: Addr,
    pub quote_denom: String,
    pub router: Addr,
}

/// Balances as of the last sync. A swap measures its input against these
#[cw_serde]
pub struct Reserves {
    pub token: Uint128,
    pub quote: Uint128,
}

pub const CONFIG: Item<Config> = Item::new("config");
pub const RESERVES: Item<Reserves> = Item::new("reserves");
