use std::collections::BTreeMap;

use cosmwasm_std::Empty;
use cw_multi_test::Contract;
use maneki_testing::integration::{mock_contracts, signer};
use serde_json::Value;

use crate::error::DeployError;

/// Declarative descriptor of a deployable module: its name, its label on
/// chain, and its constructor parameters with their defaults.
pub struct ModuleSpec {
    pub name: &'static str,
    pub label: &'static str,
    pub params: Vec<ParamSpec>,
}

pub struct ParamSpec {
    pub name: &'static str,
    pub default: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Module {
    Token,
}

impl Module {
    pub fn from_name(name: &str) -> Result<Self, DeployError> {
        match name {
            "token" => Ok(Module::Token),
            _ => Err(DeployError::UnknownModule(name.to_string())),
        }
    }

    pub fn name(&self) -> &'static str {
        self.spec().name
    }

    pub fn spec(&self) -> ModuleSpec {
        match self {
            Module::Token => ModuleSpec {
                name: "token",
                label: "maneki-token",
                params: vec![
                    ParamSpec {
                        name: "marketing_wallet",
                        default: "marketing".to_string(),
                    },
                    ParamSpec {
                        name: "developer_wallet",
                        default: "developer".to_string(),
                    },
                    ParamSpec {
                        name: "claim_signer",
                        default: hex::encode(signer::claim_pubkey()),
                    },
                ],
            },
        }
    }

    pub fn contract(&self) -> Box<dyn Contract<Empty>> {
        match self {
            Module::Token => mock_contracts::token_contract(),
        }
    }

    /// Build the instantiate message from fully resolved parameters
    pub fn instantiate_msg(&self, params: &BTreeMap<String, String>) -> Result<Value, DeployError> {
        match self {
            Module::Token => {
                let claim_signer =
                    hex::decode(required(params, "claim_signer")?).map_err(|err| {
                        DeployError::InvalidParam {
                            name: "claim_signer".to_string(),
                            reason: err.to_string(),
                        }
                    })?;
                let msg = maneki_types::token::InstantiateMsg {
                    marketing_wallet: required(params, "marketing_wallet")?.to_string(),
                    developer_wallet: required(params, "developer_wallet")?.to_string(),
                    claim_signer: claim_signer.into(),
                };
                Ok(serde_json::to_value(msg)?)
            }
        }
    }
}

/// Overlay `overrides` on the module's declared defaults. Override names
/// the module does not declare are an error
pub fn resolve_params(
    spec: &ModuleSpec,
    overrides: &BTreeMap<String, String>,
) -> Result<BTreeMap<String, String>, DeployError> {
    for name in overrides.keys() {
        if !spec.params.iter().any(|param| param.name == name.as_str()) {
            return Err(DeployError::UnknownParam {
                module: spec.name.to_string(),
                name: name.clone(),
            });
        }
    }

    Ok(spec
        .params
        .iter()
        .map(|param| {
            let value = overrides.get(param.name).cloned().unwrap_or_else(|| param.default.clone());
            (param.name.to_string(), value)
        })
        .collect())
}

/// Parse repeated `name=value` CLI overrides
pub fn parse_overrides(raw: &[String]) -> Result<BTreeMap<String, String>, DeployError> {
    raw.iter()
        .map(|entry| {
            let (name, value) = entry
                .split_once('=')
                .ok_or_else(|| DeployError::MalformedOverride(entry.clone()))?;
            Ok((name.to_string(), value.to_string()))
        })
        .collect()
}

fn required<'a>(
    params: &'a BTreeMap<String, String>,
    name: &'static str,
) -> Result<&'a str, DeployError> {
    params.get(name).map(String::as_str).ok_or_else(|| DeployError::InvalidParam {
        name: name.to_string(),
        reason: "missing".to_string(),
    })
}
