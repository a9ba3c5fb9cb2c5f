use std::mem::take;

use anyhow::Result as AnyResult;
use cosmwasm_std::{coin, Addr, Binary, Coin, StdResult, Uint128};
use cw20::{AllowanceResponse, TokenInfoResponse};
use cw_multi_test::{App, AppResponse, BankSudo, BasicApp, Executor, SudoMsg};
use maneki_types::{
    dex::{self, PairKey, SwapAsset},
    pair,
    token::{self, AccessStatusResponse, AirdropRecipient, ConfigResponse, SlotPrizeResponse},
};

use crate::integration::{
    mock_contracts::{dex_contract, pair_contract, token_contract},
    signer,
};

pub struct MockEnv {
    pub app: App,
    pub owner: Addr,
    pub marketing: Addr,
    pub developer: Addr,
    pub user_a: Addr,
    pub user_b: Addr,
    pub spare: Addr,
    pub token: Token,
    pub dex: Option<Dex>,
}

#[derive(Clone)]
pub struct Token {
    pub contract_addr: Addr,
}

#[derive(Clone)]
pub struct Dex {
    pub contract_addr: Addr,
    pub native_pair: Addr,
    pub stable_pair: Addr,
}

impl MockEnv {
    pub fn increment_by_blocks(&mut self, num_of_blocks: u64) {
        self.app.update_block(|block| {
            block.height += num_of_blocks;
            // assume block time = 6 sec
            block.time = block.time.plus_seconds(num_of_blocks * 6);
        })
    }

    pub fn increment_by_time(&mut self, seconds: u64) {
        self.app.update_block(|block| {
            block.height += seconds / 6;
            // assume block time = 6 sec
            block.time = block.time.plus_seconds(seconds);
        })
    }

    pub fn fund_account(&mut self, addr: &Addr, coins: &[Coin]) {
        self.app
            .sudo(SudoMsg::Bank(BankSudo::Mint {
                to_address: addr.to_string(),
                amount: coins.to_vec(),
            }))
            .unwrap();
    }

    pub fn query_balance(&self, addr: &Addr, denom: &str) -> StdResult<Coin> {
        self.app.wrap().query_balance(addr, denom)
    }

    pub fn block_time(&self) -> u64 {
        self.app.block_info().time.seconds()
    }

    pub fn chain_id(&self) -> String {
        self.app.block_info().chain_id
    }

    /// Sign a slot-prize claim for the deployed token with the default test
    /// signer key
    pub fn sign_claim(&self, player: &Addr, slot: u16) -> Binary {
        signer::sign_slot_claim(
            &self.chain_id(),
            self.token.contract_addr.as_str(),
            player.as_str(),
            slot,
        )
    }

    pub fn dex(&self) -> Dex {
        self.dex.clone().unwrap()
    }
}

impl Token {
    pub fn transfer(
        &self,
        env: &mut MockEnv,
        sender: &Addr,
        recipient: &Addr,
        amount: u128,
    ) -> AnyResult<AppResponse> {
        env.app.execute_contract(
            sender.clone(),
            self.contract_addr.clone(),
            &token::ExecuteMsg::Transfer {
                recipient: recipient.to_string(),
                amount: amount.into(),
            },
            &[],
        )
    }

    pub fn transfer_from(
        &self,
        env: &mut MockEnv,
        sender: &Addr,
        owner: &Addr,
        recipient: &Addr,
        amount: u128,
    ) -> AnyResult<AppResponse> {
        env.app.execute_contract(
            sender.clone(),
            self.contract_addr.clone(),
            &token::ExecuteMsg::TransferFrom {
                owner: owner.to_string(),
                recipient: recipient.to_string(),
                amount: amount.into(),
            },
            &[],
        )
    }

    pub fn burn(&self, env: &mut MockEnv, sender: &Addr, amount: u128) -> AnyResult<AppResponse> {
        env.app.execute_contract(
            sender.clone(),
            self.contract_addr.clone(),
            &token::ExecuteMsg::Burn {
                amount: amount.into(),
            },
            &[],
        )
    }

    pub fn increase_allowance(
        &self,
        env: &mut MockEnv,
        sender: &Addr,
        spender: &Addr,
        amount: u128,
    ) -> AnyResult<AppResponse> {
        env.app.execute_contract(
            sender.clone(),
            self.contract_addr.clone(),
            &token::ExecuteMsg::IncreaseAllowance {
                spender: spender.to_string(),
                amount: amount.into(),
                expires: None,
            },
            &[],
        )
    }

    pub fn set_launch(&self, env: &mut MockEnv, sender: &Addr) -> AnyResult<AppResponse> {
        env.app.execute_contract(
            sender.clone(),
            self.contract_addr.clone(),
            &token::ExecuteMsg::SetLaunch {},
            &[],
        )
    }

    pub fn set_slot_prize(
        &self,
        env: &mut MockEnv,
        sender: &Addr,
        slot: u16,
        amount: u128,
    ) -> AnyResult<AppResponse> {
        env.app.execute_contract(
            sender.clone(),
            self.contract_addr.clone(),
            &token::ExecuteMsg::SetSlotPrize {
                slot,
                amount: amount.into(),
            },
            &[],
        )
    }

    pub fn claim_slot_prize(
        &self,
        env: &mut MockEnv,
        sender: &Addr,
        player: &Addr,
        slot: u16,
        signature: Binary,
    ) -> AnyResult<AppResponse> {
        env.app.execute_contract(
            sender.clone(),
            self.contract_addr.clone(),
            &token::ExecuteMsg::ClaimSlotPrize {
                player: player.to_string(),
                slot,
                signature,
            },
            &[],
        )
    }

    pub fn airdrop(
        &self,
        env: &mut MockEnv,
        sender: &Addr,
        recipients: &[(&Addr, u128)],
    ) -> AnyResult<AppResponse> {
        env.app.execute_contract(
            sender.clone(),
            self.contract_addr.clone(),
            &token::ExecuteMsg::Airdrop {
                recipients: recipients
                    .iter()
                    .map(|(addr, amount)| AirdropRecipient {
                        address: addr.to_string(),
                        amount: (*amount).into(),
                    })
                    .collect(),
            },
            &[],
        )
    }

    pub fn set_all_access(
        &self,
        env: &mut MockEnv,
        sender: &Addr,
        address: &Addr,
        grant: bool,
    ) -> AnyResult<AppResponse> {
        env.app.execute_contract(
            sender.clone(),
            self.contract_addr.clone(),
            &token::ExecuteMsg::SetAllAccess {
                address: address.to_string(),
                grant,
            },
            &[],
        )
    }

    pub fn set_blacklist(
        &self,
        env: &mut MockEnv,
        sender: &Addr,
        address: &Addr,
        blocked: bool,
    ) -> AnyResult<AppResponse> {
        env.app.execute_contract(
            sender.clone(),
            self.contract_addr.clone(),
            &token::ExecuteMsg::SetBlacklist {
                address: address.to_string(),
                blocked,
            },
            &[],
        )
    }

    pub fn set_max_tx_amount(
        &self,
        env: &mut MockEnv,
        sender: &Addr,
        amount: Option<u128>,
    ) -> AnyResult<AppResponse> {
        env.app.execute_contract(
            sender.clone(),
            self.contract_addr.clone(),
            &token::ExecuteMsg::SetMaxTxAmount {
                amount: amount.map(Into::into),
            },
            &[],
        )
    }

    pub fn set_claim_signer(
        &self,
        env: &mut MockEnv,
        sender: &Addr,
        pubkey: Binary,
    ) -> AnyResult<AppResponse> {
        env.app.execute_contract(
            sender.clone(),
            self.contract_addr.clone(),
            &token::ExecuteMsg::SetClaimSigner {
                pubkey,
            },
            &[],
        )
    }

    pub fn balance(&self, env: &MockEnv, address: &Addr) -> Uint128 {
        let res: cw20::BalanceResponse = env
            .app
            .wrap()
            .query_wasm_smart(
                self.contract_addr.clone(),
                &token::QueryMsg::Balance {
                    address: address.to_string(),
                },
            )
            .unwrap();
        res.balance
    }

    pub fn token_info(&self, env: &MockEnv) -> TokenInfoResponse {
        env.app
            .wrap()
            .query_wasm_smart(self.contract_addr.clone(), &token::QueryMsg::TokenInfo {})
            .unwrap()
    }

    pub fn allowance(&self, env: &MockEnv, owner: &Addr, spender: &Addr) -> AllowanceResponse {
        env.app
            .wrap()
            .query_wasm_smart(
                self.contract_addr.clone(),
                &token::QueryMsg::Allowance {
                    owner: owner.to_string(),
                    spender: spender.to_string(),
                },
            )
            .unwrap()
    }

    pub fn config(&self, env: &MockEnv) -> ConfigResponse {
        env.app
            .wrap()
            .query_wasm_smart(self.contract_addr.clone(), &token::QueryMsg::Config {})
            .unwrap()
    }

    pub fn slot_prize(&self, env: &MockEnv, slot: u16) -> Option<Uint128> {
        let res: SlotPrizeResponse = env
            .app
            .wrap()
            .query_wasm_smart(
                self.contract_addr.clone(),
                &token::QueryMsg::SlotPrize {
                    slot,
                },
            )
            .unwrap();
        res.amount
    }

    pub fn prize_claimed(&self, env: &MockEnv, player: &Addr, slot: u16) -> bool {
        env.app
            .wrap()
            .query_wasm_smart(
                self.contract_addr.clone(),
                &token::QueryMsg::PrizeClaimed {
                    player: player.to_string(),
                    slot,
                },
            )
            .unwrap()
    }

    pub fn access_status(&self, env: &MockEnv, address: &Addr) -> AccessStatusResponse {
        env.app
            .wrap()
            .query_wasm_smart(
                self.contract_addr.clone(),
                &token::QueryMsg::AccessStatus {
                    address: address.to_string(),
                },
            )
            .unwrap()
    }
}

impl Dex {
    /// Move `token_amount` of the token plus `quote` to the router, then seed
    /// the pool. The router contributes half its token balance and its whole
    /// quote balance
    pub fn seed_liquidity(
        &self,
        env: &mut MockEnv,
        pair: PairKey,
        token_amount: u128,
        quote: Coin,
    ) -> AnyResult<AppResponse> {
        let token = env.token.clone();
        let owner = env.owner.clone();
        token.transfer(env, &owner, &self.contract_addr, token_amount)?;
        env.fund_account(&self.contract_addr, &[quote]);
        self.add_liquidity(env, &owner, pair)
    }

    pub fn add_liquidity(
        &self,
        env: &mut MockEnv,
        sender: &Addr,
        pair: PairKey,
    ) -> AnyResult<AppResponse> {
        env.app.execute_contract(
            sender.clone(),
            self.contract_addr.clone(),
            &dex::ExecuteMsg::AddLiquidity {
                pair,
            },
            &[],
        )
    }

    #[allow(clippy::too_many_arguments)]
    pub fn swap(
        &self,
        env: &mut MockEnv,
        sender: &Addr,
        offer: SwapAsset,
        ask: SwapAsset,
        amount: u128,
        to: &Addr,
        deadline: u64,
        funds: &[Coin],
    ) -> AnyResult<AppResponse> {
        env.app.execute_contract(
            sender.clone(),
            self.contract_addr.clone(),
            &dex::ExecuteMsg::Swap {
                offer,
                ask,
                amount: amount.into(),
                to: to.to_string(),
                deadline,
            },
            funds,
        )
    }

    pub fn reserves(&self, env: &MockEnv, pair: PairKey) -> pair::ReservesResponse {
        env.app
            .wrap()
            .query_wasm_smart(
                self.contract_addr.clone(),
                &dex::QueryMsg::PairInfo {
                    pair,
                },
            )
            .unwrap()
    }

    pub fn pair_addr(&self, pair: PairKey) -> &Addr {
        match pair {
            PairKey::Native => &self.native_pair,
            PairKey::Stable => &self.stable_pair,
        }
    }
}

pub struct MockEnvBuilder {
    app: BasicApp,
    owner: Addr,
    marketing: Addr,
    developer: Addr,

    chain_id: Option<String>,
    initial_height: Option<u64>,
    initial_funding: Vec<Coin>,
    native_denom: String,
    stable_denom: String,
    claim_signer: Binary,
    deploy_dex: bool,
}

impl MockEnvBuilder {
    pub fn new(owner: Addr) -> Self {
        Self {
            app: App::default(),
            owner,
            marketing: Addr::unchecked("marketing"),
            developer: Addr::unchecked("developer"),
            chain_id: None,
            initial_height: None,
            initial_funding: vec![
                coin(10_000_000_000, "uosmo"),
                coin(10_000_000_000, "uusdc"),
            ],
            native_denom: "uosmo".to_string(),
            stable_denom: "uusdc".to_string(),
            claim_signer: signer::claim_pubkey(),
            deploy_dex: false,
        }
    }

    pub fn chain_id(&mut self, chain_id: &str) -> &mut Self {
        self.chain_id = Some(chain_id.to_string());
        self
    }

    pub fn initial_height(&mut self, height: u64) -> &mut Self {
        self.initial_height = Some(height);
        self
    }

    pub fn initial_funding(&mut self, coins: &[Coin]) -> &mut Self {
        self.initial_funding = coins.to_vec();
        self
    }

    pub fn claim_signer(&mut self, pubkey: Binary) -> &mut Self {
        self.claim_signer = pubkey;
        self
    }

    pub fn with_dex(&mut self) -> &mut Self {
        self.deploy_dex = true;
        self
    }

    pub fn build(&mut self) -> MockEnv {
        let mut block = self.app.block_info();
        if let Some(chain_id) = self.chain_id.clone() {
            block.chain_id = chain_id;
        }
        if let Some(height) = self.initial_height {
            block.height = height;
        }
        self.app.set_block(block);

        let token_addr = self.deploy_token();
        let dex = if self.deploy_dex {
            Some(self.deploy_dex_with_pairs(&token_addr))
        } else {
            None
        };

        let user_a = Addr::unchecked("user_a");
        let user_b = Addr::unchecked("user_b");
        let spare = Addr::unchecked("spare");
        for addr in [self.owner.clone(), user_a.clone(), user_b.clone(), spare.clone()] {
            self.fund(&addr);
        }

        MockEnv {
            app: take(&mut self.app),
            owner: self.owner.clone(),
            marketing: self.marketing.clone(),
            developer: self.developer.clone(),
            user_a,
            user_b,
            spare,
            token: Token {
                contract_addr: token_addr,
            },
            dex,
        }
    }

    fn fund(&mut self, addr: &Addr) {
        if self.initial_funding.is_empty() {
            return;
        }
        self.app
            .sudo(SudoMsg::Bank(BankSudo::Mint {
                to_address: addr.to_string(),
                amount: self.initial_funding.clone(),
            }))
            .unwrap();
    }

    fn deploy_token(&mut self) -> Addr {
        let code_id = self.app.store_code(token_contract());

        self.app
            .instantiate_contract(
                code_id,
                self.owner.clone(),
                &token::InstantiateMsg {
                    marketing_wallet: self.marketing.to_string(),
                    developer_wallet: self.developer.to_string(),
                    claim_signer: self.claim_signer.clone(),
                },
                &[],
                "maneki-token",
                None,
            )
            .unwrap()
    }

    fn deploy_dex_with_pairs(&mut self, token_addr: &Addr) -> Dex {
        let pair_code_id = self.app.store_code(pair_contract());
        let dex_code_id = self.app.store_code(dex_contract());

        let dex_addr = self
            .app
            .instantiate_contract(
                dex_code_id,
                self.owner.clone(),
                &dex::InstantiateMsg {
                    token: token_addr.to_string(),
                    pair_code_id,
                    native_denom: self.native_denom.clone(),
                    stable_denom: self.stable_denom.clone(),
                },
                &[],
                "maneki-mock-dex",
                None,
            )
            .unwrap();

        self.app
            .execute_contract(
                self.owner.clone(),
                dex_addr.clone(),
                &dex::ExecuteMsg::CreatePairs {},
                &[],
            )
            .unwrap();

        Dex {
            native_pair: self.query_pair(&dex_addr, PairKey::Native),
            stable_pair: self.query_pair(&dex_addr, PairKey::Stable),
            contract_addr: dex_addr,
        }
    }

    fn query_pair(&self, dex_addr: &Addr, pair: PairKey) -> Addr {
        let res: dex::PairResponse = self
            .app
            .wrap()
            .query_wasm_smart(
                dex_addr.clone(),
                &dex::QueryMsg::Pair {
                    pair,
                },
            )
            .unwrap();
        res.contract_addr.unwrap()
    }
}
