use std::fmt;
use serde::{Serialize, Deserialize};

use crate::client::error::ClientError;

/// One failed constraint. `path` is the field name, empty for the input as a whole.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ValidationIssue {
    pub path: String,
    pub message: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ValidationError {
    pub issues: Vec<ValidationIssue>,
}

impl ValidationError {
    pub fn new(issues: Vec<ValidationIssue>) -> Self {
        Self { issues }
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let messages: Vec<String> = self
            .issues
            .iter()
            .map(|i| {
                if i.path.is_empty() {
                    i.message.clone()
                } else {
                    format!("{}: {}", i.path, i.message)
                }
            })
            .collect();
        f.write_str(&messages.join("; "))
    }
}

impl std::error::Error for ValidationError {}


#[derive(Debug, thiserror::Error)]
pub enum ToolError {
    #[error("Tool not found: {0}")]
    ToolNotFound(String),

    #[error("Invalid tool input: {0}")]
    Validation(#[from] ValidationError),

    #[error("Tool parameters do not match: {0}")]
    ParamsNotMatched(String),

    /// Failure envelope from the API. Displays as the bare message.
    #[error("{0}")]
    Api(String),

    #[error("Successful response carried no data for order {0}")]
    MissingData(String),

    #[error(transparent)]
    Client(#[from] ClientError),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}
