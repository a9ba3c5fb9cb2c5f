use cosmwasm_schema::cw_serde;
use cosmwasm_std::{Addr, Binary, Uint128};
use cw_storage_plus::{Item, Map};

#[cw_serde]
pub struct Config {
    pub owner: Addr,
    /// Holds the marketing allocation; submits prize claims and airdrops
    pub marketing_wallet: Addr,
    pub developer_wallet: Addr,
    /// Compressed secp256k1 public key whose signatures authorize prize claims
    pub claim_signer: Binary,
    /// Once true, anyone may transfer. Flipped exactly once
    pub launched: bool,
    /// Largest amount a single non-exempt transfer may move
    pub max_tx_amount: Option<Uint128>,
}

pub const CONFIG: Item<Config> = Item::new("config");

/// Addresses exempt from the launch gate and the transfer cap
pub const ALL_ACCESS: Map<&Addr, bool> = Map::new("all_access");

/// Addresses barred from sending and receiving
pub const BLACKLIST: Map<&Addr, bool> = Map::new("blacklist");

/// Prize amount paid for hitting a slot
pub const SLOT_PRIZES: Map<u16, Uint128> = Map::new("slot_prizes");

/// (player, slot) pairs that have already been paid
pub const CLAIMED_PRIZES: Map<(&Addr, u16), bool> = Map::new("claimed_prizes");
