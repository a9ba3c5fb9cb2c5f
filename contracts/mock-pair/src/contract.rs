#[cfg(not(feature = "library"))]
use cosmwasm_std::entry_point;
use cosmwasm_std::{
    coins, to_json_binary, Addr, BankMsg, Binary, Deps, DepsMut, Env, MessageInfo, QuerierWrapper,
    Response, StdResult, Uint128, WasmMsg,
};
use cw2::set_contract_version;
use maneki_types::{
    pair::{ConfigResponse, ExecuteMsg, InstantiateMsg, QueryMsg, ReservesResponse},
    token,
};

use crate::{
    error::ContractError,
    state::{Config, Reserves, CONFIG, RESERVES},
};

pub const CONTRACT_NAME: &str = "crates.io:maneki-mock-pair";
pub const CONTRACT_VERSION: &str = env!("CARGO_PKG_VERSION");

/// The classic 0.3% swap fee, taken from the input side
pub const FEE_BASIS_POINTS: u128 = 30;
const BASIS_POINTS_SCALE: u128 = 10_000;

// INIT

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn instantiate(
    deps: DepsMut,
    _env: Env,
    _info: MessageInfo,
    msg: InstantiateMsg,
) -> Result<Response, ContractError> {
    set_contract_version(deps.storage, CONTRACT_NAME, CONTRACT_VERSION)?;

    CONFIG.save(
        deps.storage,
        &Config {
            token: deps.api.addr_validate(&msg.token)?,
            quote_denom: msg.quote_denom,
            router: deps.api.addr_validate(&msg.router)?,
        },
    )?;
    RESERVES.save(
        deps.storage,
        &Reserves {
            token: Uint128::zero(),
            quote: Uint128::zero(),
        },
    )?;

    Ok(Response::default())
}

// HANDLERS

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn execute(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
    msg: ExecuteMsg,
) -> Result<Response, ContractError> {
    let config = CONFIG.load(deps.storage)?;
    if info.sender != config.router {
        return Err(ContractError::Unauthorized {});
    }

    match msg {
        ExecuteMsg::Sync {} => execute_sync(deps, env, config),
        ExecuteMsg::Swap {
            recipient,
        } => execute_swap(deps, env, config, recipient),
    }
}

pub fn execute_sync(deps: DepsMut, env: Env, config: Config) -> Result<Response, ContractError> {
    let reserves = Reserves {
        token: token_balance(&deps.querier, &config, &env.contract.address)?,
        quote: quote_balance(&deps.querier, &config, &env.contract.address)?,
    };
    RESERVES.save(deps.storage, &reserves)?;

    Ok(Response::new()
        .add_attribute("action", "sync")
        .add_attribute("token_reserve", reserves.token)
        .add_attribute("quote_reserve", reserves.quote))
}

pub fn execute_swap(
    deps: DepsMut,
    env: Env,
    config: Config,
    recipient: String,
) -> Result<Response, ContractError> {
    let recipient = deps.api.addr_validate(&recipient)?;

    let reserves = RESERVES.load(deps.storage)?;
    if reserves.token.is_zero() || reserves.quote.is_zero() {
        return Err(ContractError::InsufficientLiquidity {});
    }

    let token_balance = token_balance(&deps.querier, &config, &env.contract.address)?;
    let quote_balance = quote_balance(&deps.querier, &config, &env.contract.address)?;

    // the side whose balance grew past its reserve is the offer
    if token_balance > reserves.token {
        let amount_in = token_balance - reserves.token;
        let amount_out = quote_output(amount_in, reserves.token, reserves.quote)?;
        if amount_out.is_zero() {
            return Err(ContractError::InsufficientOutput {});
        }

        RESERVES.save(
            deps.storage,
            &Reserves {
                token: token_balance,
                quote: reserves.quote - amount_out,
            },
        )?;

        return Ok(Response::new()
            .add_message(BankMsg::Send {
                to_address: recipient.to_string(),
                amount: coins(amount_out.u128(), &config.quote_denom),
            })
            .add_attribute("action", "swap")
            .add_attribute("offer", "token")
            .add_attribute("ask", config.quote_denom)
            .add_attribute("amount_in", amount_in)
            .add_attribute("amount_out", amount_out)
            .add_attribute("to", recipient));
    }

    if quote_balance > reserves.quote {
        let amount_in = quote_balance - reserves.quote;
        let amount_out = quote_output(amount_in, reserves.quote, reserves.token)?;
        if amount_out.is_zero() {
            return Err(ContractError::InsufficientOutput {});
        }

        RESERVES.save(
            deps.storage,
            &Reserves {
                token: reserves.token - amount_out,
                quote: quote_balance,
            },
        )?;

        return Ok(Response::new()
            .add_message(WasmMsg::Execute {
                contract_addr: config.token.to_string(),
                msg: to_json_binary(&token::ExecuteMsg::Transfer {
                    recipient: recipient.to_string(),
                    amount: amount_out,
                })?,
                funds: vec![],
            })
            .add_attribute("action", "swap")
            .add_attribute("offer", config.quote_denom)
            .add_attribute("ask", "token")
            .add_attribute("amount_in", amount_in)
            .add_attribute("amount_out", amount_out)
            .add_attribute("to", recipient));
    }

    Err(ContractError::NothingReceived {})
}

/// Constant-product output for `amount_in`, with the fee shaved off the
/// input and the division rounding in the pool's favor
fn quote_output(
    amount_in: Uint128,
    reserve_in: Uint128,
    reserve_out: Uint128,
) -> Result<Uint128, ContractError> {
    let net_in = amount_in.checked_mul(Uint128::new(BASIS_POINTS_SCALE - FEE_BASIS_POINTS))?;
    let numerator = net_in.checked_mul(reserve_out)?;
    let denominator = reserve_in.checked_mul(Uint128::new(BASIS_POINTS_SCALE))?.checked_add(net_in)?;
    Ok(numerator.checked_div(denominator)?)
}

fn token_balance(
    querier: &QuerierWrapper,
    config: &Config,
    account: &Addr,
) -> StdResult<Uint128> {
    let res: cw20::BalanceResponse = querier.query_wasm_smart(
        config.token.clone(),
        &token::QueryMsg::Balance {
            address: account.to_string(),
        },
    )?;
    Ok(res.balance)
}

fn quote_balance(
    querier: &QuerierWrapper,
    config: &Config,
    account: &Addr,
) -> StdResult<Uint128> {
    Ok(querier.query_balance(account, &config.quote_denom)?.amount)
}

// QUERIES

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn query(deps: Deps, _env: Env, msg: QueryMsg) -> StdResult<Binary> {
    match msg {
        QueryMsg::Config {} => {
            let config = CONFIG.load(deps.storage)?;
            to_json_binary(&ConfigResponse {
                token: config.token,
                quote_denom: config.quote_denom,
                router: config.router,
            })
        }
        QueryMsg::Reserves {} => {
            let reserves = RESERVES.load(deps.storage)?;
            to_json_binary(&ReservesResponse {
                token_reserve: reserves.token,
                quote_reserve: reserves.quote,
            })
        }
    }
}
