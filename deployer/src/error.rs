use thiserror::Error;

#[derive(Error, Debug)]
pub enum DeployError {
    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error("invalid network config: {0}")]
    Config(#[from] toml::de::Error),

    #[error("invalid deployment state: {0}")]
    State(#[from] serde_json::Error),

    #[error("unknown network profile: {0}")]
    UnknownNetwork(String),

    #[error("unknown module: {0}")]
    UnknownModule(String),

    #[error("the {module} module has no parameter named {name}")]
    UnknownParam {
        module: String,
        name: String,
    },

    #[error("invalid value for parameter {name}: {reason}")]
    InvalidParam {
        name: String,
        reason: String,
    },

    #[error("parameter overrides must be formatted as name=value, got {0}")]
    MalformedOverride(String),

    #[error("network {network} requires credentials in ${var}, which is not set")]
    MissingCredentials {
        network: String,
        var: String,
    },

    #[error("instantiation failed: {reason}")]
    Instantiate {
        reason: String,
    },
}
