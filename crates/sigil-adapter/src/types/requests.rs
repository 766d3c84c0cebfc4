/*
[INPUT]:  API schema definitions and serde requirements
[OUTPUT]: Typed Rust request structs with serialization support
[POS]:    Data layer - type definitions for API communication
[UPDATE]: When API schema changes or new types added
*/

use std::fmt;

use serde::{Deserialize, Serialize};

/// Page-size limit for history queries: a count or the `all` sentinel
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HistoryLimit {
    All,
    Count(u32),
}

impl fmt::Display for HistoryLimit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HistoryLimit::All => write!(f, "all"),
            HistoryLimit::Count(count) => write!(f, "{count}"),
        }
    }
}

/// Query parameters for history retrieval
///
/// `all` takes precedence over `limit`: when `all` is set, `limit` is
/// omitted from the query string entirely.
#[derive(Debug, Clone, Default)]
pub struct HistoryQuery {
    pub all: bool,
    pub limit: Option<HistoryLimit>,
    pub page: Option<u32>,
}

/// Request body for a paid signal analysis
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SignalRequest {
    pub ticker: String,
    pub timeframe: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub metadata: Option<serde_json::Value>,
}

impl SignalRequest {
    pub fn new(ticker: &str, timeframe: &str) -> Self {
        Self {
            ticker: ticker.to_string(),
            timeframe: timeframe.to_string(),
            metadata: None,
        }
    }

    pub fn with_metadata(mut self, metadata: serde_json::Value) -> Self {
        self.metadata = Some(metadata);
        self
    }
}
