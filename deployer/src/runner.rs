use std::{collections::BTreeMap, path::Path};

use cosmwasm_std::Addr;
use cw_multi_test::{App, BasicApp, Executor};
use tracing::info;

use crate::{
    config::{DeployConfig, NetworkProfile},
    error::DeployError,
    module::{resolve_params, Module},
    state::{DeployState, ModuleRecord},
};

/// Account that signs the simulated deployment transactions
const DEPLOYER: &str = "deployer";

/// Deploy `module` to the network named by `network`, recording the outcome
/// in the per-network ledger. A module already recorded as deployed is
/// skipped and its recorded address returned.
pub fn run_module(
    config: &DeployConfig,
    network: &str,
    state_dir: &Path,
    module: Module,
    overrides: &BTreeMap<String, String>,
) -> Result<String, DeployError> {
    let profile = config.network(network)?;
    profile.resolve_credentials(network)?;

    let mut state = DeployState::load(state_dir, network)?;
    if let Some(record) = state.record(module.name()) {
        if record.ok {
            if let Some(address) = &record.address {
                info!(module = module.name(), address = address.as_str(), "module already deployed, skipping");
                return Ok(address.clone());
            }
        }
    }

    let params = resolve_params(&module.spec(), overrides)?;
    let msg = module.instantiate_msg(&params)?;

    let mut app = app_for_profile(profile);
    let code_id = app.store_code(module.contract());
    let height = app.block_info().height;
    info!(
        module = module.name(),
        network,
        chain_id = profile.chain_id.as_str(),
        code_id,
        "instantiating"
    );

    match app.instantiate_contract(
        code_id,
        Addr::unchecked(DEPLOYER),
        &msg,
        &[],
        module.spec().label,
        None,
    ) {
        Ok(address) => {
            state.upsert(
                module.name(),
                ModuleRecord {
                    address: Some(address.to_string()),
                    code_id,
                    height,
                    ok: true,
                },
            );
            state.save(state_dir, network)?;
            Ok(address.into_string())
        }
        Err(err) => {
            state.upsert(
                module.name(),
                ModuleRecord {
                    address: None,
                    code_id,
                    height,
                    ok: false,
                },
            );
            state.save(state_dir, network)?;
            Err(DeployError::Instantiate {
                reason: err.root_cause().to_string(),
            })
        }
    }
}

fn app_for_profile(profile: &NetworkProfile) -> BasicApp {
    let mut app = App::default();
    let mut block = app.block_info();
    block.chain_id = profile.chain_id.clone();
    if let Some(height) = profile.fork_height {
        block.height = height;
    }
    app.set_block(block);
    app
}
