use std::{
    collections::BTreeMap,
    fs,
    path::{Path, PathBuf},
};

use serde::{Deserialize, Serialize};

use crate::error::DeployError;

/// Outcome of one module deployment on one network
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ModuleRecord {
    pub address: Option<String>,
    pub code_id: u64,
    pub height: u64,
    pub ok: bool,
}

/// Per-network ledger of deployed modules, stored as `<state_dir>/<network>.json`
#[derive(Debug, Default, Serialize, Deserialize)]
pub struct DeployState {
    #[serde(default)]
    pub modules: BTreeMap<String, ModuleRecord>,
}

impl DeployState {
    pub fn load(state_dir: &Path, network: &str) -> Result<Self, DeployError> {
        let path = Self::path(state_dir, network);
        if !path.exists() {
            return Ok(Self::default());
        }
        let raw = fs::read_to_string(path)?;
        Ok(serde_json::from_str(&raw)?)
    }

    pub fn save(&self, state_dir: &Path, network: &str) -> Result<(), DeployError> {
        fs::create_dir_all(state_dir)?;
        let raw = serde_json::to_string_pretty(self)?;
        fs::write(Self::path(state_dir, network), raw)?;
        Ok(())
    }

    pub fn path(state_dir: &Path, network: &str) -> PathBuf {
        state_dir.join(format!("{network}.json"))
    }

    pub fn record(&self, module: &str) -> Option<&ModuleRecord> {
        self.modules.get(module)
    }

    pub fn upsert(&mut self, module: &str, record: ModuleRecord) {
        self.modules.insert(module.to_string(), record);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_ledger_loads_empty() {
        let dir = tempfile::tempdir().unwrap();

        let state = DeployState::load(dir.path(), "local").unwrap();
        assert!(state.modules.is_empty());
    }

    #[test]
    fn records_survive_a_save_and_reload() {
        let dir = tempfile::tempdir().unwrap();

        let mut state = DeployState::load(dir.path(), "local").unwrap();
        state.upsert(
            "token",
            ModuleRecord {
                address: Some("contract0".to_string()),
                code_id: 1,
                height: 12345,
                ok: true,
            },
        );
        state.save(dir.path(), "local").unwrap();

        let reloaded = DeployState::load(dir.path(), "local").unwrap();
        assert_eq!(reloaded.record("token"), state.record("token"));

        // ledgers are per network
        let other = DeployState::load(dir.path(), "mainnet").unwrap();
        assert!(other.modules.is_empty());
    }

    #[test]
    fn failed_records_are_overwritten() {
        let dir = tempfile::tempdir().unwrap();

        let mut state = DeployState::default();
        state.upsert(
            "token",
            ModuleRecord {
                address: None,
                code_id: 1,
                height: 12345,
                ok: false,
            },
        );
        state.save(dir.path(), "local").unwrap();

        let mut state = DeployState::load(dir.path(), "local").unwrap();
        assert!(!state.record("token").unwrap().ok);
        state.upsert(
            "token",
            ModuleRecord {
                address: Some("contract0".to_string()),
                code_id: 2,
                height: 12346,
                ok: true,
            },
        );
        state.save(dir.path(), "local").unwrap();

        let reloaded = DeployState::load(dir.path(), "local").unwrap();
        let record = reloaded.record("token").unwrap();
        assert!(record.ok);
        assert_eq!(record.address.as_deref(), Some("contract0"));
        assert_eq!(record.code_id, 2);
    }
}
