use cosmwasm_std::{Addr, StdResult, Storage, Uint128};
use cw20_base::state::BALANCES;

use crate::{
    error::ContractError,
    state::{Config, ALL_ACCESS, BLACKLIST},
};

/// Whether `address` may move balances before launch and above the cap.
/// The owner and the marketing wallet are always exempt
pub fn is_exempt(storage: &dyn Storage, config: &Config, address: &Addr) -> StdResult<bool> {
    if *address == config.owner || *address == config.marketing_wallet {
        return Ok(true);
    }
    Ok(ALL_ACCESS.may_load(storage, address)?.unwrap_or(false))
}

pub fn assert_not_blacklisted(storage: &dyn Storage, address: &Addr) -> Result<(), ContractError> {
    if BLACKLIST.may_load(storage, address)?.unwrap_or(false) {
        return Err(ContractError::Blacklisted {
            address: address.to_string(),
        });
    }
    Ok(())
}

/// The transfer gate. Runs on every balance movement of `amount` out of
/// `sender`, with `recipient` set for transfers and unset for burns.
/// Blacklisting blocks even exempt senders
pub fn assert_can_move(
    storage: &dyn Storage,
    config: &Config,
    sender: &Addr,
    recipient: Option<&Addr>,
    amount: Uint128,
) -> Result<(), ContractError> {
    assert_not_blacklisted(storage, sender)?;
    if let Some(recipient) = recipient {
        assert_not_blacklisted(storage, recipient)?;
    }

    if is_exempt(storage, config, sender)? {
        return Ok(());
    }

    if !config.launched {
        return Err(ContractError::NotLaunched {});
    }

    if let Some(cap) = config.max_tx_amount {
        if amount > cap {
            return Err(ContractError::MaxTxAmountExceeded {
                cap,
            });
        }
    }

    Ok(())
}

/// Deduct `amount` from the sender balance and add it to the recipient
/// balance, after the gate has passed
pub fn transfer(
    storage: &mut dyn Storage,
    config: &Config,
    sender: &Addr,
    recipient: &Addr,
    amount: Uint128,
) -> Result<(), ContractError> {
    if amount.is_zero() {
        return Err(ContractError::InvalidZeroAmount {});
    }

    assert_can_move(storage, config, sender, Some(recipient), amount)?;

    BALANCES.update(storage, sender, |balance| -> StdResult<_> {
        Ok(balance.unwrap_or_default().checked_sub(amount)?)
    })?;
    BALANCES.update(storage, recipient, |balance| -> StdResult<_> {
        Ok(balance.unwrap_or_default() + amount)
    })?;

    Ok(())
}
