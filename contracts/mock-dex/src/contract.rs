#[cfg(not(feature = "library"))]
use cosmwasm_std::entry_point;
use cosmwasm_std::{
    coins, to_json_binary, Addr, BankMsg, Binary, Deps, DepsMut, Env, MessageInfo, QuerierWrapper,
    Reply, Response, StdError, StdResult, SubMsg, Uint128, WasmMsg,
};
use cw2::set_contract_version;
use cw_utils::{must_pay, nonpayable};
use maneki_types::{
    dex::{ConfigResponse, ExecuteMsg, InstantiateMsg, PairKey, PairResponse, QueryMsg, SwapAsset},
    pair,
    token,
};

use crate::{
    error::ContractError,
    state::{Config, CONFIG, PAIRS},
};

pub const CONTRACT_NAME: &str = "crates.io:maneki-mock-dex";
pub const CONTRACT_VERSION: &str = env!("CARGO_PKG_VERSION");

pub const REPLY_ID_NATIVE_PAIR: u64 = 1;
pub const REPLY_ID_STABLE_PAIR: u64 = 2;

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
            pair_code_id: msg.pair_code_id,
            native_denom: msg.native_denom,
            stable_denom: msg.stable_denom,
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
    match msg {
        ExecuteMsg::CreatePairs {} => execute_create_pairs(deps, env),
        ExecuteMsg::AddLiquidity {
            pair,
        } => execute_add_liquidity(deps, env, pair),
        ExecuteMsg::Swap {
            offer,
            ask,
            amount,
            to,
            deadline,
        } => execute_swap(deps, env, info, offer, ask, amount, to, deadline),
    }
}

pub fn execute_create_pairs(deps: DepsMut, env: Env) -> Result<Response, ContractError> {
    let config = CONFIG.load(deps.storage)?;

    if PAIRS.has(deps.storage, &PairKey::Native.to_string())
        || PAIRS.has(deps.storage, &PairKey::Stable.to_string())
    {
        return Err(ContractError::PairsExist {});
    }

    // replies record the pool addresses under their pair keys
    let native = SubMsg::reply_on_success(
        WasmMsg::Instantiate {
            admin: None,
            code_id: config.pair_code_id,
            msg: to_json_binary(&pair::InstantiateMsg {
                token: config.token.to_string(),
                quote_denom: config.native_denom.clone(),
                router: env.contract.address.to_string(),
            })?,
            funds: vec![],
            label: "maneki-pair-native".to_string(),
        },
        REPLY_ID_NATIVE_PAIR,
    );
    let stable = SubMsg::reply_on_success(
        WasmMsg::Instantiate {
            admin: None,
            code_id: config.pair_code_id,
            msg: to_json_binary(&pair::InstantiateMsg {
                token: config.token.to_string(),
                quote_denom: config.stable_denom.clone(),
                router: env.contract.address.to_string(),
            })?,
            funds: vec![],
            label: "maneki-pair-stable".to_string(),
        },
        REPLY_ID_STABLE_PAIR,
    );

    Ok(Response::new()
        .add_submessage(native)
        .add_submessage(stable)
        .add_attribute("action", "create_pairs"))
}

pub fn execute_add_liquidity(
    deps: DepsMut,
    env: Env,
    pair: PairKey,
) -> Result<Response, ContractError> {
    let config = CONFIG.load(deps.storage)?;
    let pair_addr = load_pair(deps.as_ref(), pair)?;
    let denom = quote_denom(&config, pair);

    // half the router's tokens and all of its quote balance go in
    let token_balance = token_balance(&deps.querier, &config, &env.contract.address)?;
    let token_amount = token_balance / Uint128::new(2);
    let quote_amount = deps.querier.query_balance(&env.contract.address, denom)?.amount;
    if token_amount.is_zero() || quote_amount.is_zero() {
        return Err(ContractError::NothingToSeed {});
    }

    Ok(Response::new()
        .add_message(WasmMsg::Execute {
            contract_addr: config.token.to_string(),
            msg: to_json_binary(&token::ExecuteMsg::Transfer {
                recipient: pair_addr.to_string(),
                amount: token_amount,
            })?,
            funds: vec![],
        })
        .add_message(BankMsg::Send {
            to_address: pair_addr.to_string(),
            amount: coins(quote_amount.u128(), denom),
        })
        .add_message(WasmMsg::Execute {
            contract_addr: pair_addr.to_string(),
            msg: to_json_binary(&pair::ExecuteMsg::Sync {})?,
            funds: vec![],
        })
        .add_attribute("action", "add_liquidity")
        .add_attribute("pair", pair.to_string())
        .add_attribute("token_amount", token_amount)
        .add_attribute("quote_amount", quote_amount))
}

#[allow(clippy::too_many_arguments)]
pub fn execute_swap(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
    offer: SwapAsset,
    ask: SwapAsset,
    amount: Uint128,
    to: String,
    deadline: u64,
) -> Result<Response, ContractError> {
    if env.block.time.seconds() > deadline {
        return Err(ContractError::DeadlineExpired {
            deadline,
        });
    }
    if amount.is_zero() {
        return Err(ContractError::InvalidZeroAmount {});
    }

    let (pair, token_is_offer) = match (offer, ask) {
        (SwapAsset::Token, SwapAsset::Native) => (PairKey::Native, true),
        (SwapAsset::Token, SwapAsset::Stable) => (PairKey::Stable, true),
        (SwapAsset::Native, SwapAsset::Token) => (PairKey::Native, false),
        (SwapAsset::Stable, SwapAsset::Token) => (PairKey::Stable, false),
        _ => return Err(ContractError::UnsupportedRoute {}),
    };

    let config = CONFIG.load(deps.storage)?;
    let pair_addr = load_pair(deps.as_ref(), pair)?;
    let to = deps.api.addr_validate(&to)?;

    let offer_msg: cosmwasm_std::CosmosMsg = if token_is_offer {
        // the caller must have granted the router an allowance
        nonpayable(&info)?;
        WasmMsg::Execute {
            contract_addr: config.token.to_string(),
            msg: to_json_binary(&token::ExecuteMsg::TransferFrom {
                owner: info.sender.to_string(),
                recipient: pair_addr.to_string(),
                amount,
            })?,
            funds: vec![],
        }
        .into()
    } else {
        let denom = quote_denom(&config, pair);
        let sent = must_pay(&info, denom)?;
        if sent != amount {
            return Err(ContractError::PaymentMismatch {
                expected: amount,
                sent,
            });
        }
        BankMsg::Send {
            to_address: pair_addr.to_string(),
            amount: coins(amount.u128(), denom),
        }
        .into()
    };

    let swap_msg = WasmMsg::Execute {
        contract_addr: pair_addr.to_string(),
        msg: to_json_binary(&pair::ExecuteMsg::Swap {
            recipient: to.to_string(),
        })?,
        funds: vec![],
    };

    Ok(Response::new()
        .add_message(offer_msg)
        .add_message(swap_msg)
        .add_attribute("action", "swap")
        .add_attribute("pair", pair.to_string())
        .add_attribute("amount", amount)
        .add_attribute("to", to))
}

// REPLY

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn reply(deps: DepsMut, _env: Env, reply: Reply) -> Result<Response, ContractError> {
    match reply.id {
        REPLY_ID_NATIVE_PAIR => record_pair(deps, PairKey::Native, reply),
        REPLY_ID_STABLE_PAIR => record_pair(deps, PairKey::Stable, reply),
        _ => Err(StdError::generic_err(format!("Invalid reply ID: {}", reply.id)).into()),
    }
}

fn record_pair(deps: DepsMut, pair: PairKey, reply: Reply) -> Result<Response, ContractError> {
    let response = reply.result.into_result().map_err(StdError::generic_err)?;

    let event = response
        .events
        .iter()
        .find(|event| event.ty == "instantiate")
        .ok_or_else(|| ContractError::ReplyParseFailed {
            key: "instantiate".to_string(),
        })?;
    let addr = event
        .attributes
        .iter()
        .find(|attr| attr.key == "_contract_address")
        .ok_or_else(|| ContractError::ReplyParseFailed {
            key: "_contract_address".to_string(),
        })?
        .value
        .clone();
    let addr = deps.api.addr_validate(&addr)?;

    PAIRS.save(deps.storage, &pair.to_string(), &addr)?;

    Ok(Response::new()
        .add_attribute("action", "register_pair")
        .add_attribute("pair", pair.to_string())
        .add_attribute("contract_addr", addr))
}

// QUERIES

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn query(deps: Deps, _env: Env, msg: QueryMsg) -> StdResult<Binary> {
    match msg {
        QueryMsg::Config {} => {
            let config = CONFIG.load(deps.storage)?;
            to_json_binary(&ConfigResponse {
                token: config.token,
                pair_code_id: config.pair_code_id,
                native_denom: config.native_denom,
                stable_denom: config.stable_denom,
            })
        }
        QueryMsg::Pair {
            pair,
        } => to_json_binary(&PairResponse {
            pair,
            contract_addr: PAIRS.may_load(deps.storage, &pair.to_string())?,
        }),
        QueryMsg::PairInfo {
            pair,
        } => {
            let pair_addr = load_pair(deps, pair)
                .map_err(|_| StdError::not_found(format!("pair {pair}")))?;
            let reserves: pair::ReservesResponse =
                deps.querier.query_wasm_smart(pair_addr, &pair::QueryMsg::Reserves {})?;
            to_json_binary(&reserves)
        }
    }
}

fn load_pair(deps: Deps, pair: PairKey) -> Result<Addr, ContractError> {
    PAIRS.may_load(deps.storage, &pair.to_string())?.ok_or(ContractError::PairNotFound {
        pair,
    })
}

fn quote_denom(config: &Config, pair: PairKey) -> &str {
    match pair {
        PairKey::Native => &config.native_denom,
        PairKey::Stable => &config.stable_denom,
    }
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

#[cfg(test)]
mod tests {
    use cosmwasm_std::{
        testing::{mock_dependencies, mock_env, mock_info},
        Event, SubMsgResponse, SubMsgResult,
    };

    use super::*;

    fn do_instantiate(deps: DepsMut) {
        let msg = InstantiateMsg {
            token: "token".to_string(),
            pair_code_id: 42,
            native_denom: "uosmo".to_string(),
            stable_denom: "uusdc".to_string(),
        };
        instantiate(deps, mock_env(), mock_info("deployer", &[]), msg).unwrap();
    }

    fn instantiate_reply(id: u64, contract_addr: &str) -> Reply {
        Reply {
            id,
            result: SubMsgResult::Ok(SubMsgResponse {
                events: vec![Event::new("instantiate")
                    .add_attribute("_contract_address", contract_addr)
                    .add_attribute("code_id", "42")],
                data: None,
            }),
        }
    }

    #[test]
    fn create_pairs_emits_two_instantiations() {
        let mut deps = mock_dependencies();
        do_instantiate(deps.as_mut());

        let res = execute(
            deps.as_mut(),
            mock_env(),
            mock_info("deployer", &[]),
            ExecuteMsg::CreatePairs {},
        )
        .unwrap();

        let expected_native = SubMsg::reply_on_success(
            WasmMsg::Instantiate {
                admin: None,
                code_id: 42,
                msg: to_json_binary(&pair::InstantiateMsg {
                    token: "token".to_string(),
                    quote_denom: "uosmo".to_string(),
                    router: mock_env().contract.address.to_string(),
                })
                .unwrap(),
                funds: vec![],
                label: "maneki-pair-native".to_string(),
            },
            REPLY_ID_NATIVE_PAIR,
        );
        assert_eq!(res.messages.len(), 2);
        assert_eq!(res.messages[0], expected_native);
        assert_eq!(res.messages[1].id, REPLY_ID_STABLE_PAIR);
    }

    #[test]
    fn replies_record_pool_addresses() {
        let mut deps = mock_dependencies();
        do_instantiate(deps.as_mut());

        reply(deps.as_mut(), mock_env(), instantiate_reply(REPLY_ID_NATIVE_PAIR, "pair0"))
            .unwrap();
        reply(deps.as_mut(), mock_env(), instantiate_reply(REPLY_ID_STABLE_PAIR, "pair1"))
            .unwrap();

        assert_eq!(
            PAIRS.load(&deps.storage, "native").unwrap(),
            Addr::unchecked("pair0")
        );
        assert_eq!(
            PAIRS.load(&deps.storage, "stable").unwrap(),
            Addr::unchecked("pair1")
        );

        // once both pools exist, creating again is rejected
        let err = execute(
            deps.as_mut(),
            mock_env(),
            mock_info("deployer", &[]),
            ExecuteMsg::CreatePairs {},
        )
        .unwrap_err();
        assert_eq!(err, ContractError::PairsExist {});

        // unknown reply ids are rejected
        let err = reply(deps.as_mut(), mock_env(), instantiate_reply(9, "pair9")).unwrap_err();
        assert!(matches!(err, ContractError::Std(StdError::GenericErr { .. })));
    }

    #[test]
    fn swap_validates_route_and_deadline() {
        let mut deps = mock_dependencies();
        do_instantiate(deps.as_mut());
        reply(deps.as_mut(), mock_env(), instantiate_reply(REPLY_ID_NATIVE_PAIR, "pair0"))
            .unwrap();

        let deadline = mock_env().block.time.seconds() + 1_000;

        // a route must have the token on exactly one side
        let err = execute(
            deps.as_mut(),
            mock_env(),
            mock_info("user_a", &[]),
            ExecuteMsg::Swap {
                offer: SwapAsset::Native,
                ask: SwapAsset::Stable,
                amount: Uint128::new(100),
                to: "user_a".to_string(),
                deadline,
            },
        )
        .unwrap_err();
        assert_eq!(err, ContractError::UnsupportedRoute {});

        // expired deadline
        let err = execute(
            deps.as_mut(),
            mock_env(),
            mock_info("user_a", &[]),
            ExecuteMsg::Swap {
                offer: SwapAsset::Native,
                ask: SwapAsset::Token,
                amount: Uint128::new(100),
                to: "user_a".to_string(),
                deadline: mock_env().block.time.seconds() - 1,
            },
        )
        .unwrap_err();
        assert_eq!(
            err,
            ContractError::DeadlineExpired {
                deadline: mock_env().block.time.seconds() - 1
            }
        );

        // offering a quote asset requires attaching it
        let err = execute(
            deps.as_mut(),
            mock_env(),
            mock_info("user_a", &[]),
            ExecuteMsg::Swap {
                offer: SwapAsset::Native,
                ask: SwapAsset::Token,
                amount: Uint128::new(100),
                to: "user_a".to_string(),
                deadline,
            },
        )
        .unwrap_err();
        assert_eq!(err, ContractError::Payment(cw_utils::PaymentError::NoFunds {}));

        // attached funds must match the declared amount
        let err = execute(
            deps.as_mut(),
            mock_env(),
            mock_info("user_a", &coins(40, "uosmo")),
            ExecuteMsg::Swap {
                offer: SwapAsset::Native,
                ask: SwapAsset::Token,
                amount: Uint128::new(100),
                to: "user_a".to_string(),
                deadline,
            },
        )
        .unwrap_err();
        assert_eq!(
            err,
            ContractError::PaymentMismatch {
                expected: Uint128::new(100),
                sent: Uint128::new(40)
            }
        );

        // swapping through the never-created stable pair
        let err = execute(
            deps.as_mut(),
            mock_env(),
            mock_info("user_a", &coins(100, "uusdc")),
            ExecuteMsg::Swap {
                offer: SwapAsset::Stable,
                ask: SwapAsset::Token,
                amount: Uint128::new(100),
                to: "user_a".to_string(),
                deadline,
            },
        )
        .unwrap_err();
        assert_eq!(
            err,
            ContractError::PairNotFound {
                pair: PairKey::Stable
            }
        );
    }
}
