use cosmwasm_schema::cw_serde;
use cosmwasm_std::Addr;
use cw_storage_plus::{Item, Map};

#[cw_serde]
pub struct Config {
    pub token: Addr,
    pub pair_code_id: u64,
    pub native_denom: String,
    pub stable_denom: String,
}

pub const CONFIG: Item<Config> = Item::new("config");

/// Pool contracts by pair key string
pub const PAIRS: Map<&str, Addr> = Map::new("pairs");
