use std::{any::type_name, fmt, str::FromStr};

use cosmwasm_schema::{cw_serde, QueryResponses};
use cosmwasm_std::{Addr, StdError, Uint128};
use strum::EnumIter;

use crate::pair::ReservesResponse;

/// The quote assets the mock exchange lists the token against
#[cw_serde]
#[derive(Copy, Eq, Hash, EnumIter)]
pub enum PairKey {
    /// Token paired with the chain's native currency
    Native,
    /// Token paired with the mock stablecoin
    Stable,
}

impl fmt::Display for PairKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            PairKey::Native => "native",
            PairKey::Stable => "stable",
        };
        write!(f, "{s}")
    }
}

impl FromStr for PairKey {
    type Err = StdError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "native" => Ok(PairKey::Native),
            "stable" => Ok(PairKey::Stable),
            _ => Err(StdError::parse_err(type_name::<Self>(), s)),
        }
    }
}

/// One leg of a swap route
#[cw_serde]
#[derive(Copy, Eq, Hash)]
pub enum SwapAsset {
    Token,
    Native,
    Stable,
}

#[cw_serde]
pub struct InstantiateMsg {
    /// The token every pool trades against its quote asset
    pub token: String,
    /// Code id the factory instantiates pools from
    pub pair_code_id: u64,
    pub native_denom: String,
    pub stable_denom: String,
}

#[cw_serde]
pub enum ExecuteMsg {
    /// Instantiate one pool per quote asset. Fails if the pools already exist
    CreatePairs {},
    /// Seed the pool: move half of the router's token balance and the
    /// router's entire balance of the pool's quote denom into it, then sync
    /// its reserves
    AddLiquidity {
        pair: PairKey,
    },
    /// Trade `amount` of `offer` for `ask`, paying out to `to`. Exactly one
    /// side must be the token. Offering a quote asset requires attaching the
    /// coins; offering the token requires a prior allowance to the router.
    /// Fails once `deadline` (unix seconds) has passed
    Swap {
        offer: SwapAsset,
        ask: SwapAsset,
        amount: Uint128,
        to: String,
        deadline: u64,
    },
}

#[cw_serde]
#[derive(QueryResponses)]
pub enum QueryMsg {
    #[returns(ConfigResponse)]
    Config {},
    #[returns(PairResponse)]
    Pair {
        pair: PairKey,
    },
    #[returns(ReservesResponse)]
    PairInfo {
        pair: PairKey,
    },
}

#[cw_serde]
pub struct ConfigResponse {
    pub token: Addr,
    pub pair_code_id: u64,
    pub native_denom: String,
    pub stable_denom: String,
}

#[cw_serde]
pub struct PairResponse {
    pub pair: PairKey,
    pub contract_addr: Option<Addr>,
}

#[cfg(test)]
mod tests {
    use strum::IntoEnumIterator;

    use super::*;

    #[test]
    fn pair_key_fmt_and_from_str() {
        for key in PairKey::iter() {
            assert_eq!(PairKey::from_str(&key.to_string()).unwrap(), key);
        }

        assert_eq!(PairKey::from_str("native").unwrap(), PairKey::Native);
        assert_eq!(PairKey::from_str("stable").unwrap(), PairKey::Stable);
        assert!(PairKey::from_str("wrapped").is_err());
    }
}
