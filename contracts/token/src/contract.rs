#[cfg(not(feature = "library"))]
use cosmwasm_std::entry_point;
use cosmwasm_std::{
    to_json_binary, Binary, Deps, DepsMut, Env, MessageInfo, Response, StdResult, Uint128,
};
use cw2::set_contract_version;
use cw20::Cw20Coin;
use cw20_base::{
    allowances::{
        deduct_allowance, execute_decrease_allowance, execute_increase_allowance, query_allowance,
    },
    contract::{create_accounts, query_balance, query_token_info},
    state::{TokenInfo, BALANCES, TOKEN_INFO},
};
use maneki_types::{
    claim::slot_claim_digest,
    token::{
        AccessStatusResponse, AirdropRecipient, ConfigResponse, ExecuteMsg, InstantiateMsg,
        QueryMsg, SlotPrizeResponse,
    },
};

use crate::{
    core,
    error::ContractError,
    state::{Config, ALL_ACCESS, BLACKLIST, CLAIMED_PRIZES, CONFIG, SLOT_PRIZES},
};

pub const CONTRACT_NAME: &str = "crates.io:maneki-token";
pub const CONTRACT_VERSION: &str = env!("CARGO_PKG_VERSION");

pub const TOKEN_NAME: &str = "Maneki";
pub const TOKEN_SYMBOL: &str = "NEKO";
pub const TOKEN_DECIMALS: u8 = 6;

/// 1 billion whole tokens, minted once at instantiation
pub const TOTAL_SUPPLY: Uint128 = Uint128::new(1_000_000_000_000_000);
/// 75% to the instantiating owner, earmarked for liquidity
pub const OWNER_ALLOCATION: Uint128 = Uint128::new(750_000_000_000_000);
/// 15% to the marketing wallet, funding prizes and airdrops
pub const MARKETING_ALLOCATION: Uint128 = Uint128::new(150_000_000_000_000);
/// 10% to the developer wallet
pub const DEVELOPER_ALLOCATION: Uint128 = Uint128::new(100_000_000_000_000);

const COMPRESSED_PUBKEY_LEN: usize = 33;

// INIT

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn instantiate(
    mut deps: DepsMut,
    _env: Env,
    info: MessageInfo,
    msg: InstantiateMsg,
) -> Result<Response, ContractError> {
    set_contract_version(deps.storage, CONTRACT_NAME, CONTRACT_VERSION)?;

    let marketing_wallet = deps.api.addr_validate(&msg.marketing_wallet)?;
    let developer_wallet = deps.api.addr_validate(&msg.developer_wallet)?;
    validate_signer_key(&msg.claim_signer)?;

    let initial_balances = [
        Cw20Coin {
            address: info.sender.to_string(),
            amount: OWNER_ALLOCATION,
        },
        Cw20Coin {
            address: marketing_wallet.to_string(),
            amount: MARKETING_ALLOCATION,
        },
        Cw20Coin {
            address: developer_wallet.to_string(),
            amount: DEVELOPER_ALLOCATION,
        },
    ];
    let total_supply = create_accounts(&mut deps, &initial_balances)?;

    TOKEN_INFO.save(
        deps.storage,
        &TokenInfo {
            name: TOKEN_NAME.to_string(),
            symbol: TOKEN_SYMBOL.to_string(),
            decimals: TOKEN_DECIMALS,
            total_supply,
            mint: None,
        },
    )?;

    CONFIG.save(
        deps.storage,
        &Config {
            owner: info.sender,
            marketing_wallet,
            developer_wallet,
            claim_signer: msg.claim_signer,
            launched: false,
            max_tx_amount: None,
        },
    )?;

    Ok(Response::default())
}

fn validate_signer_key(pubkey: &Binary) -> Result<(), ContractError> {
    if pubkey.len() != COMPRESSED_PUBKEY_LEN || !matches!(pubkey[0], 0x02 | 0x03) {
        return Err(ContractError::InvalidSignerKey {});
    }
    Ok(())
}

// HANDLERS

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn execute(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
    msg: ExecuteMsg,
) -> Result<Response, ContractError> {
    match msg {
        ExecuteMsg::Transfer {
            recipient,
            amount,
        } => execute_transfer(deps, env, info, recipient, amount),
        ExecuteMsg::TransferFrom {
            owner,
            recipient,
            amount,
        } => execute_transfer_from(deps, env, info, owner, recipient, amount),
        ExecuteMsg::Burn {
            amount,
        } => execute_burn(deps, env, info, amount),
        ExecuteMsg::IncreaseAllowance {
            spender,
            amount,
            expires,
        } => Ok(execute_increase_allowance(deps, env, info, spender, amount, expires)?),
        ExecuteMsg::DecreaseAllowance {
            spender,
            amount,
            expires,
        } => Ok(execute_decrease_allowance(deps, env, info, spender, amount, expires)?),
        ExecuteMsg::SetLaunch {} => execute_set_launch(deps, info),
        ExecuteMsg::SetSlotPrize {
            slot,
            amount,
        } => execute_set_slot_prize(deps, info, slot, amount),
        ExecuteMsg::ClaimSlotPrize {
            player,
            slot,
            signature,
        } => execute_claim_slot_prize(deps, env, info, player, slot, signature),
        ExecuteMsg::Airdrop {
            recipients,
        } => execute_airdrop(deps, info, recipients),
        ExecuteMsg::SetAllAccess {
            address,
            grant,
        } => execute_set_all_access(deps, info, address, grant),
        ExecuteMsg::SetBlacklist {
            address,
            blocked,
        } => execute_set_blacklist(deps, info, address, blocked),
        ExecuteMsg::SetMaxTxAmount {
            amount,
        } => execute_set_max_tx_amount(deps, info, amount),
        ExecuteMsg::SetClaimSigner {
            pubkey,
        } => execute_set_claim_signer(deps, info, pubkey),
    }
}

pub fn execute_transfer(
    deps: DepsMut,
    _env: Env,
    info: MessageInfo,
    recipient: String,
    amount: Uint128,
) -> Result<Response, ContractError> {
    let config = CONFIG.load(deps.storage)?;
    let recipient = deps.api.addr_validate(&recipient)?;

    core::transfer(deps.storage, &config, &info.sender, &recipient, amount)?;

    Ok(Response::new()
        .add_attribute("action", "transfer")
        .add_attribute("from", info.sender)
        .add_attribute("to", recipient)
        .add_attribute("amount", amount))
}

pub fn execute_transfer_from(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
    owner: String,
    recipient: String,
    amount: Uint128,
) -> Result<Response, ContractError> {
    let config = CONFIG.load(deps.storage)?;
    let owner = deps.api.addr_validate(&owner)?;
    let recipient = deps.api.addr_validate(&recipient)?;

    deduct_allowance(deps.storage, &owner, &info.sender, &env.block, amount)?;
    core::transfer(deps.storage, &config, &owner, &recipient, amount)?;

    Ok(Response::new()
        .add_attribute("action", "transfer_from")
        .add_attribute("from", owner)
        .add_attribute("to", recipient)
        .add_attribute("by", info.sender)
        .add_attribute("amount", amount))
}

pub fn execute_burn(
    deps: DepsMut,
    _env: Env,
    info: MessageInfo,
    amount: Uint128,
) -> Result<Response, ContractError> {
    if amount.is_zero() {
        return Err(ContractError::InvalidZeroAmount {});
    }

    let config = CONFIG.load(deps.storage)?;
    core::assert_can_move(deps.storage, &config, &info.sender, None, amount)?;

    BALANCES.update(deps.storage, &info.sender, |balance| -> StdResult<_> {
        Ok(balance.unwrap_or_default().checked_sub(amount)?)
    })?;
    TOKEN_INFO.update(deps.storage, |mut token_info| -> StdResult<_> {
        token_info.total_supply = token_info.total_supply.checked_sub(amount)?;
        Ok(token_info)
    })?;

    Ok(Response::new()
        .add_attribute("action", "burn")
        .add_attribute("from", info.sender)
        .add_attribute("amount", amount))
}

pub fn execute_set_launch(deps: DepsMut, info: MessageInfo) -> Result<Response, ContractError> {
    let mut config = CONFIG.load(deps.storage)?;
    if info.sender != config.owner {
        return Err(ContractError::Unauthorized {});
    }
    if config.launched {
        return Err(ContractError::AlreadyLaunched {});
    }

    config.launched = true;
    CONFIG.save(deps.storage, &config)?;

    Ok(Response::new().add_attribute("action", "set_launch"))
}

pub fn execute_set_slot_prize(
    deps: DepsMut,
    info: MessageInfo,
    slot: u16,
    amount: Uint128,
) -> Result<Response, ContractError> {
    let config = CONFIG.load(deps.storage)?;
    if info.sender != config.owner {
        return Err(ContractError::Unauthorized {});
    }

    if amount.is_zero() {
        SLOT_PRIZES.remove(deps.storage, slot);
    } else {
        SLOT_PRIZES.save(deps.storage, slot, &amount)?;
    }

    Ok(Response::new()
        .add_attribute("action", "set_slot_prize")
        .add_attribute("slot", slot.to_string())
        .add_attribute("amount", amount))
}

pub fn execute_claim_slot_prize(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
    player: String,
    slot: u16,
    signature: Binary,
) -> Result<Response, ContractError> {
    let config = CONFIG.load(deps.storage)?;
    if info.sender != config.marketing_wallet {
        return Err(ContractError::InvalidMsgSender {});
    }

    let player = deps.api.addr_validate(&player)?;
    let prize = SLOT_PRIZES.may_load(deps.storage, slot)?.ok_or(ContractError::PrizeNotSet {
        slot,
    })?;
    if CLAIMED_PRIZES.may_load(deps.storage, (&player, slot))?.unwrap_or(false) {
        return Err(ContractError::PrizeAlreadyClaimed {
            player: player.to_string(),
            slot,
        });
    }

    let digest =
        slot_claim_digest(&env.block.chain_id, env.contract.address.as_str(), player.as_str(), slot);
    let valid = deps
        .api
        .secp256k1_verify(&digest, signature.as_slice(), config.claim_signer.as_slice())
        .map_err(|_| ContractError::InvalidSignature {})?;
    if !valid {
        return Err(ContractError::InvalidSignature {});
    }

    CLAIMED_PRIZES.save(deps.storage, (&player, slot), &true)?;
    core::transfer(deps.storage, &config, &config.marketing_wallet, &player, prize)?;

    Ok(Response::new()
        .add_attribute("action", "claim_slot_prize")
        .add_attribute("player", player)
        .add_attribute("slot", slot.to_string())
        .add_attribute("amount", prize))
}

pub fn execute_airdrop(
    deps: DepsMut,
    info: MessageInfo,
    recipients: Vec<AirdropRecipient>,
) -> Result<Response, ContractError> {
    let config = CONFIG.load(deps.storage)?;
    if info.sender != config.marketing_wallet {
        return Err(ContractError::InvalidMsgSender {});
    }
    if recipients.is_empty() {
        return Err(ContractError::NoRecipients {});
    }

    let mut total = Uint128::zero();
    for recipient in &recipients {
        let address = deps.api.addr_validate(&recipient.address)?;
        core::transfer(deps.storage, &config, &config.marketing_wallet, &address, recipient.amount)?;
        total += recipient.amount;
    }

    Ok(Response::new()
        .add_attribute("action", "airdrop")
        .add_attribute("recipients", recipients.len().to_string())
        .add_attribute("total", total))
}

pub fn execute_set_all_access(
    deps: DepsMut,
    info: MessageInfo,
    address: String,
    grant: bool,
) -> Result<Response, ContractError> {
    let config = CONFIG.load(deps.storage)?;
    if info.sender != config.owner {
        return Err(ContractError::Unauthorized {});
    }

    let address = deps.api.addr_validate(&address)?;
    ALL_ACCESS.save(deps.storage, &address, &grant)?;

    Ok(Response::new()
        .add_attribute("action", "set_all_access")
        .add_attribute("address", address)
        .add_attribute("grant", grant.to_string()))
}

pub fn execute_set_blacklist(
    deps: DepsMut,
    info: MessageInfo,
    address: String,
    blocked: bool,
) -> Result<Response, ContractError> {
    let config = CONFIG.load(deps.storage)?;
    if info.sender != config.owner {
        return Err(ContractError::Unauthorized {});
    }

    let address = deps.api.addr_validate(&address)?;
    BLACKLIST.save(deps.storage, &address, &blocked)?;

    Ok(Response::new()
        .add_attribute("action", "set_blacklist")
        .add_attribute("address", address)
        .add_attribute("blocked", blocked.to_string()))
}

pub fn execute_set_max_tx_amount(
    deps: DepsMut,
    info: MessageInfo,
    amount: Option<Uint128>,
) -> Result<Response, ContractError> {
    let mut config = CONFIG.load(deps.storage)?;
    if info.sender != config.owner {
        return Err(ContractError::Unauthorized {});
    }

    config.max_tx_amount = amount;
    CONFIG.save(deps.storage, &config)?;

    Ok(Response::new()
        .add_attribute("action", "set_max_tx_amount")
        .add_attribute("amount", amount.map_or_else(|| "none".to_string(), |a| a.to_string())))
}

pub fn execute_set_claim_signer(
    deps: DepsMut,
    info: MessageInfo,
    pubkey: Binary,
) -> Result<Response, ContractError> {
    let mut config = CONFIG.load(deps.storage)?;
    if info.sender != config.owner {
        return Err(ContractError::Unauthorized {});
    }

    validate_signer_key(&pubkey)?;
    config.claim_signer = pubkey;
    CONFIG.save(deps.storage, &config)?;

    Ok(Response::new().add_attribute("action", "set_claim_signer"))
}

// QUERIES

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn query(deps: Deps, _env: Env, msg: QueryMsg) -> StdResult<Binary> {
    match msg {
        QueryMsg::TokenInfo {} => to_json_binary(&query_token_info(deps)?),
        QueryMsg::Balance {
            address,
        } => to_json_binary(&query_balance(deps, address)?),
        QueryMsg::Allowance {
            owner,
            spender,
        } => to_json_binary(&query_allowance(deps, owner, spender)?),
        QueryMsg::Config {} => to_json_binary(&query_config(deps)?),
        QueryMsg::SlotPrize {
            slot,
        } => to_json_binary(&query_slot_prize(deps, slot)?),
        QueryMsg::PrizeClaimed {
            player,
            slot,
        } => to_json_binary(&query_prize_claimed(deps, player, slot)?),
        QueryMsg::AccessStatus {
            address,
        } => to_json_binary(&query_access_status(deps, address)?),
    }
}

fn query_config(deps: Deps) -> StdResult<ConfigResponse> {
    let config = CONFIG.load(deps.storage)?;
    Ok(ConfigResponse {
        owner: config.owner,
        marketing_wallet: config.marketing_wallet,
        developer_wallet: config.developer_wallet,
        claim_signer: config.claim_signer,
        launched: config.launched,
        max_tx_amount: config.max_tx_amount,
    })
}

fn query_slot_prize(deps: Deps, slot: u16) -> StdResult<SlotPrizeResponse> {
    Ok(SlotPrizeResponse {
        slot,
        amount: SLOT_PRIZES.may_load(deps.storage, slot)?,
    })
}

fn query_prize_claimed(deps: Deps, player: String, slot: u16) -> StdResult<bool> {
    let player = deps.api.addr_validate(&player)?;
    Ok(CLAIMED_PRIZES.may_load(deps.storage, (&player, slot))?.unwrap_or(false))
}

fn query_access_status(deps: Deps, address: String) -> StdResult<AccessStatusResponse> {
    let address = deps.api.addr_validate(&address)?;
    Ok(AccessStatusResponse {
        all_access: ALL_ACCESS.may_load(deps.storage, &address)?.unwrap_or(false),
        blacklisted: BLACKLIST.may_load(deps.storage, &address)?.unwrap_or(false),
    })
}
