/// Invalid retrieval configuration. Raised at construction time so a bad
/// config never reaches the query path.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("threshold {name} must be finite, got {value}")]
    InvalidThreshold { name: &'static str, value: f32 },

    #[error("margin must be finite and non-negative, got {value}")]
    InvalidMargin { value: f32 },

    #[error("weight {name} must be finite and non-negative, got {value}")]
    InvalidWeight { name: &'static str, value: f32 },

    #[error("budget {name} must be greater than zero")]
    ZeroBudget { name: &'static str },

    #[error("failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),
}
