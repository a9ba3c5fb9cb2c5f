use std::{collections::BTreeMap, path::Path};

use serde::Deserialize;

use crate::error::DeployError;

/// Network profiles the deployer can target, keyed by profile name.
#[derive(Debug, Clone, Deserialize)]
pub struct DeployConfig {
    pub networks: BTreeMap<String, NetworkProfile>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct NetworkProfile {
    /// RPC endpoint the deployment records correspond to. Broadcast itself is
    /// left to external chain tooling
    pub endpoint: String,
    pub chain_id: String,
    /// Start the simulated chain at this height instead of the default
    #[serde(default)]
    pub fork_height: Option<u64>,
    #[serde(default)]
    pub gas: GasPricing,
    /// Environment variable holding the signing credentials
    #[serde(default)]
    pub key_env: Option<String>,
    #[serde(default)]
    pub explorer: Option<ExplorerProfile>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "snake_case", tag = "mode")]
pub enum GasPricing {
    #[default]
    Auto,
    Fixed {
        amount: String,
        denom: String,
    },
}

#[derive(Debug, Clone, Deserialize)]
pub struct ExplorerProfile {
    pub url: String,
    #[serde(default)]
    pub api_key_env: Option<String>,
}

impl DeployConfig {
    pub fn load(path: &Path) -> Result<Self, DeployError> {
        let raw = std::fs::read_to_string(path)?;
        Ok(toml::from_str(&raw)?)
    }

    pub fn network(&self, name: &str) -> Result<&NetworkProfile, DeployError> {
        self.networks.get(name).ok_or_else(|| DeployError::UnknownNetwork(name.to_string()))
    }
}

impl NetworkProfile {
    /// Resolve the signing credentials named by the profile, if it names any
    pub fn resolve_credentials(&self, network: &str) -> Result<Option<String>, DeployError> {
        let Some(var) = &self.key_env else {
            return Ok(None);
        };
        match std::env::var(var) {
            Ok(value) if !value.is_empty() => Ok(Some(value)),
            _ => Err(DeployError::MissingCredentials {
                network: network.to_string(),
                var: var.clone(),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = r#"
        [networks.local]
        endpoint = "http://localhost:26657"
        chain_id = "maneki-local-1"

        [networks.mainnet]
        endpoint    = "https://rpc.osmosis.zone"
        chain_id    = "osmosis-1"
        fork_height = 26500000
        key_env     = "MANEKI_MAINNET_KEY"
        gas         = { mode = "fixed", amount = "0.0025", denom = "uosmo" }
        explorer    = { url = "https://www.mintscan.io/osmosis" }
    "#;

    #[test]
    fn parsing_profiles_with_defaults() {
        let config: DeployConfig = toml::from_str(SAMPLE).unwrap();

        let local = config.network("local").unwrap();
        assert_eq!(local.chain_id, "maneki-local-1");
        assert_eq!(local.fork_height, None);
        assert!(matches!(local.gas, GasPricing::Auto));
        assert_eq!(local.key_env, None);
        assert!(local.explorer.is_none());

        let mainnet = config.network("mainnet").unwrap();
        assert_eq!(mainnet.fork_height, Some(26500000));
        assert!(matches!(&mainnet.gas, GasPricing::Fixed { denom, .. } if denom == "uosmo"));
        assert_eq!(mainnet.explorer.as_ref().unwrap().url, "https://www.mintscan.io/osmosis");
    }

    #[test]
    fn unknown_profile_is_named_in_the_error() {
        let config: DeployConfig = toml::from_str(SAMPLE).unwrap();

        let err = config.network("devnet").unwrap_err();
        assert_eq!(err.to_string(), "unknown network profile: devnet");
    }

    #[test]
    fn credentials_resolve_from_the_environment() {
        let config: DeployConfig = toml::from_str(SAMPLE).unwrap();

        let local = config.network("local").unwrap();
        assert_eq!(local.resolve_credentials("local").unwrap(), None);

        let mainnet = config.network("mainnet").unwrap();
        std::env::remove_var("MANEKI_MAINNET_KEY");
        let err = mainnet.resolve_credentials("mainnet").unwrap_err();
        assert!(matches!(
            err,
            DeployError::MissingCredentials { network, var }
                if network == "mainnet" && var == "MANEKI_MAINNET_KEY"
        ));

        std::env::set_var("MANEKI_MAINNET_KEY", "word word word");
        let resolved = mainnet.resolve_credentials("mainnet").unwrap();
        assert_eq!(resolved.as_deref(), Some("word word word"));
        std::env::remove_var("MANEKI_MAINNET_KEY");
    }
}
