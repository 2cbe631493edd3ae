use thiserror::Error;

#[derive(Error, Debug)]
pub enum ScenarioError {
    #[error("Malformed flight record #{index}: {reason}")]
    MalformedRecord { index: usize, reason: String },

    #[error("Invalid taxi phase: {0}")]
    InvalidPhase(String),

    #[error("Agent index {index} out of range (world has {len} agents)")]
    AgentOutOfRange { index: usize, len: usize },

    #[error("Invalid scenario config: {0}")]
    InvalidConfig(String),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl ScenarioError {
    pub(crate) fn malformed(index: usize, reason: impl Into<String>) -> Self {
        ScenarioError::MalformedRecord {
            index,
            reason: reason.into(),
        }
    }

    /// Input problems the caller can fix by editing the manifest or config.
    pub fn is_input_error(&self) -> bool {
        match self {
            ScenarioError::MalformedRecord { .. } => true,
            ScenarioError::InvalidPhase(_) => true,
            ScenarioError::InvalidConfig(_) => true,
            ScenarioError::Json(_) | ScenarioError::Yaml(_) | ScenarioError::Csv(_) => true,
            ScenarioError::AgentOutOfRange { .. } => false,
            ScenarioError::Io(_) => false,
        }
    }
}

pub type Result<T> = std::result::Result<T, ScenarioError>;
