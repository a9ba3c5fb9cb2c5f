use cosmwasm_std::{Addr, StdError};
use maneki_testing::integration::mock_env::MockEnvBuilder;
use maneki_token::{contract::MARKETING_ALLOCATION, ContractError};

use crate::helpers::assert_err;

mod helpers;

#[test]
fn airdrop_distributes_from_the_marketing_wallet() {
    let owner = Addr::unchecked("owner");
    let mut mock_env = MockEnvBuilder::new(owner).build();
    let token = mock_env.token.clone();
    let (marketing, user_a, user_b) =
        (mock_env.marketing.clone(), mock_env.user_a.clone(), mock_env.user_b.clone());

    // works before launch, the marketing wallet is exempt
    token
        .airdrop(&mut mock_env, &marketing, &[(&user_a, 100_000), (&user_b, 200_000)])
        .unwrap();

    assert_eq!(token.balance(&mock_env, &user_a).u128(), 100_000);
    assert_eq!(token.balance(&mock_env, &user_b).u128(), 200_000);
    assert_eq!(
        token.balance(&mock_env, &marketing).u128(),
        MARKETING_ALLOCATION.u128() - 300_000
    );
}

#[test]
fn airdrops_are_marketing_only() {
    let owner = Addr::unchecked("owner");
    let mut mock_env = MockEnvBuilder::new(owner.clone()).build();
    let token = mock_env.token.clone();
    let user_a = mock_env.user_a.clone();

    let res = token.airdrop(&mut mock_env, &owner, &[(&user_a, 100)]);
    assert_err(res, ContractError::InvalidMsgSender {});
}

#[test]
fn empty_airdrops_are_rejected() {
    let owner = Addr::unchecked("owner");
    let mut mock_env = MockEnvBuilder::new(owner).build();
    let token = mock_env.token.clone();
    let marketing = mock_env.marketing.clone();

    let res = token.airdrop(&mut mock_env, &marketing, &[]);
    assert_err(res, ContractError::NoRecipients {});
}

#[test]
fn zero_amount_entries_are_rejected() {
    let owner = Addr::unchecked("owner");
    let mut mock_env = MockEnvBuilder::new(owner).build();
    let token = mock_env.token.clone();
    let (marketing, user_a, user_b) =
        (mock_env.marketing.clone(), mock_env.user_a.clone(), mock_env.user_b.clone());

    let res = token.airdrop(&mut mock_env, &marketing, &[(&user_a, 100), (&user_b, 0)]);
    assert_err(res, ContractError::InvalidZeroAmount {});

    // nothing moved
    assert_eq!(token.balance(&mock_env, &user_a).u128(), 0);
}

#[test]
fn blacklisted_recipients_revert_the_whole_airdrop() {
    let owner = Addr::unchecked("owner");
    let mut mock_env = MockEnvBuilder::new(owner.clone()).build();
    let token = mock_env.token.clone();
    let (marketing, user_a, user_b) =
        (mock_env.marketing.clone(), mock_env.user_a.clone(), mock_env.user_b.clone());

    token.set_blacklist(&mut mock_env, &owner, &user_b, true).unwrap();

    let res = token.airdrop(&mut mock_env, &marketing, &[(&user_a, 100), (&user_b, 100)]);
    assert_err(
        res,
        ContractError::Blacklisted {
            address: user_b.to_string(),
        },
    );
    assert_eq!(token.balance(&mock_env, &user_a).u128(), 0);
}

#[test]
fn airdrops_cannot_overdraw_the_marketing_wallet() {
    let owner = Addr::unchecked("owner");
    let mut mock_env = MockEnvBuilder::new(owner).build();
    let token = mock_env.token.clone();
    let (marketing, user_a, user_b) =
        (mock_env.marketing.clone(), mock_env.user_a.clone(), mock_env.user_b.clone());

    let half = MARKETING_ALLOCATION.u128() / 2 + 1;
    let err =
        token.airdrop(&mut mock_env, &marketing, &[(&user_a, half), (&user_b, half)]).unwrap_err();
    let contract_err: ContractError = err.downcast().unwrap();
    assert!(matches!(contract_err, ContractError::Std(StdError::Overflow { .. })));

    // the partial distribution rolled back
    assert_eq!(token.balance(&mock_env, &user_a).u128(), 0);
    assert_eq!(token.balance(&mock_env, &marketing), MARKETING_ALLOCATION);
}
