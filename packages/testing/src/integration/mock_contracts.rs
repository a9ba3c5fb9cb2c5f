use cosmwasm_std::Empty;
use cw_multi_test::{App, Contract, ContractWrapper};

pub fn mock_app() -> App {
    App::default()
}

pub fn token_contract() -> Box<dyn Contract<Empty>> {
    let contract = ContractWrapper::new(
        maneki_token::contract::execute,
        maneki_token::contract::instantiate,
        maneki_token::contract::query,
    );
    Box::new(contract)
}

pub fn pair_contract() -> Box<dyn Contract<Empty>> {
    let contract = ContractWrapper::new(
        maneki_mock_pair::contract::execute,
        maneki_mock_pair::contract::instantiate,
        maneki_mock_pair::contract::query,
    );
    Box::new(contract)
}

pub fn dex_contract() -> Box<dyn Contract<Empty>> {
    let contract = ContractWrapper::new(
        maneki_mock_dex::contract::execute,
        maneki_mock_dex::contract::instantiate,
        maneki_mock_dex::contract::query,
    )
    .with_reply(maneki_mock_dex::contract::reply);
    Box::new(contract)
}
