use thiserror::Error;

/// Error type shared by the shaping, storage, and configuration layers.
#[derive(Debug, Error)]
pub enum OverviewError {
    #[error("Invalid input: {0}")]
    InvalidInput(String),
    #[error("Invalid date `{0}`")]
    InvalidDate(String),
    #[error("Invalid {kind} `{value}`")]
    InvalidTag { kind: &'static str, value: String },
    #[error("Unknown metric `{title}`{}", suggestion_hint(.suggestion))]
    UnknownMetric {
        title: String,
        suggestion: Option<String>,
    },
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Serialization error: {0}")]
    Serde(#[from] serde_json::Error),
}

fn suggestion_hint(suggestion: &Option<String>) -> String {
    match suggestion {
        Some(best) => format!(" (did you mean `{best}`?)"),
        None => String::new(),
    }
}
