use cosmwasm_std::{Addr, Binary};
use cw_multi_test::Executor;
use maneki_testing::integration::{
    mock_contracts::{mock_app, token_contract},
    mock_env::MockEnvBuilder,
    signer,
};
use maneki_token::{
    contract::{
        DEVELOPER_ALLOCATION, MARKETING_ALLOCATION, OWNER_ALLOCATION, TOKEN_DECIMALS, TOKEN_NAME,
        TOKEN_SYMBOL, TOTAL_SUPPLY,
    },
    ContractError,
};
use maneki_types::token::InstantiateMsg;

mod helpers;

#[test]
fn token_metadata_and_initial_distribution() {
    let owner = Addr::unchecked("owner");
    let mock_env = MockEnvBuilder::new(owner.clone()).build();
    let token = mock_env.token.clone();

    let info = token.token_info(&mock_env);
    assert_eq!(info.name, TOKEN_NAME);
    assert_eq!(info.symbol, TOKEN_SYMBOL);
    assert_eq!(info.decimals, TOKEN_DECIMALS);
    assert_eq!(info.total_supply, TOTAL_SUPPLY);

    assert_eq!(token.balance(&mock_env, &owner), OWNER_ALLOCATION);
    assert_eq!(token.balance(&mock_env, &mock_env.marketing), MARKETING_ALLOCATION);
    assert_eq!(token.balance(&mock_env, &mock_env.developer), DEVELOPER_ALLOCATION);
    assert_eq!(
        OWNER_ALLOCATION + MARKETING_ALLOCATION + DEVELOPER_ALLOCATION,
        TOTAL_SUPPLY
    );
}

#[test]
fn config_reports_the_launch_state() {
    let owner = Addr::unchecked("owner");
    let mock_env = MockEnvBuilder::new(owner.clone()).build();
    let token = mock_env.token.clone();

    let config = token.config(&mock_env);
    assert_eq!(config.owner, owner);
    assert_eq!(config.marketing_wallet, mock_env.marketing);
    assert_eq!(config.developer_wallet, mock_env.developer);
    assert_eq!(config.claim_signer, signer::claim_pubkey());
    assert!(!config.launched);
    assert_eq!(config.max_tx_amount, None);
}

#[test]
fn identical_builds_produce_identical_fixtures() {
    let owner = Addr::unchecked("owner");
    let env_a = MockEnvBuilder::new(owner.clone()).build();
    let env_b = MockEnvBuilder::new(owner.clone()).build();

    assert_eq!(env_a.token.contract_addr, env_b.token.contract_addr);
    assert_eq!(env_a.chain_id(), env_b.chain_id());
    for addr in [&owner, &env_a.marketing, &env_a.developer, &env_a.user_a] {
        assert_eq!(
            env_a.token.balance(&env_a, addr),
            env_b.token.balance(&env_b, addr)
        );
    }
}

#[test]
fn environments_are_isolated() {
    let owner = Addr::unchecked("owner");
    let mut env_a = MockEnvBuilder::new(owner.clone()).build();
    let token = env_a.token.clone();
    let user_a = env_a.user_a.clone();

    token.set_launch(&mut env_a, &owner).unwrap();
    token.transfer(&mut env_a, &owner, &user_a, 500).unwrap();

    let env_b = MockEnvBuilder::new(owner.clone()).build();
    assert!(!env_b.token.config(&env_b).launched);
    assert_eq!(env_b.token.balance(&env_b, &env_b.user_a).u128(), 0);
    assert_eq!(env_b.token.balance(&env_b, &owner), OWNER_ALLOCATION);
}

#[test]
fn instantiation_validates_the_signer_key() {
    let mut app = mock_app();
    let code_id = app.store_code(token_contract());

    let instantiate = |app: &mut cw_multi_test::App, msg: &InstantiateMsg| {
        app.instantiate_contract(
            code_id,
            Addr::unchecked("owner"),
            msg,
            &[],
            "maneki-token",
            None,
        )
    };

    // 32 bytes is one short of a compressed key
    let err = instantiate(
        &mut app,
        &InstantiateMsg {
            marketing_wallet: "marketing".to_string(),
            developer_wallet: "developer".to_string(),
            claim_signer: Binary::from(vec![2u8; 32]),
        },
    )
    .unwrap_err();
    assert_eq!(err.downcast::<ContractError>().unwrap(), ContractError::InvalidSignerKey {});

    // right length, wrong SEC1 prefix
    let err = instantiate(
        &mut app,
        &InstantiateMsg {
            marketing_wallet: "marketing".to_string(),
            developer_wallet: "developer".to_string(),
            claim_signer: Binary::from(vec![5u8; 33]),
        },
    )
    .unwrap_err();
    assert_eq!(err.downcast::<ContractError>().unwrap(), ContractError::InvalidSignerKey {});

    // allocation wallets must be distinct accounts
    let err = instantiate(
        &mut app,
        &InstantiateMsg {
            marketing_wallet: "marketing".to_string(),
            developer_wallet: "marketing".to_string(),
            claim_signer: signer::claim_pubkey(),
        },
    )
    .unwrap_err();
    assert_eq!(
        err.downcast::<ContractError>().unwrap(),
        ContractError::Base(cw20_base::ContractError::DuplicateInitialBalanceAddresses {})
    );
}
