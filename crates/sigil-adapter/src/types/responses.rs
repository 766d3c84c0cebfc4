/*
[INPUT]:  API schema definitions and serde requirements
[OUTPUT]: Typed Rust response structs with serialization support
[POS]:    Data layer - type definitions for API communication
[UPDATE]: When API schema changes or new types added
*/

use serde::{Deserialize, Serialize};

/// Server-reported page-size limit: a count or the "all" sentinel
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum PaginationLimit {
    Count(u64),
    Sentinel(String),
}

/// Pagination metadata attached to history responses
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Pagination {
    #[serde(default)]
    pub limit: Option<PaginationLimit>,
    #[serde(default)]
    pub page: Option<u32>,
    #[serde(default)]
    pub page_size: Option<u32>,
    #[serde(default)]
    pub total: Option<u64>,
    #[serde(default)]
    pub has_more: Option<bool>,
}

/// Normalized history result
///
/// `history` is always present (possibly empty) and `pagination` is an
/// explicit `Option`, so callers never see a missing field. Record schemas
/// are owned by the server and entries are carried as raw JSON values.
#[derive(Debug, Clone, PartialEq)]
pub struct HistoryResult {
    pub history: Vec<serde_json::Value>,
    pub pagination: Option<Pagination>,
}

/// Response payload from a paid signal analysis
///
/// The `consensus` object is the stable part of the contract; everything
/// else the service returns is preserved in `extra`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SignalResponse {
    pub consensus: serde_json::Value,
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}
