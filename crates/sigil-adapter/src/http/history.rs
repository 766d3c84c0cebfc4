/*
[INPUT]:  Query parameters and bearer authentication
[OUTPUT]: Normalized paginated signal history
[POS]:    HTTP layer - history endpoint (requires bearer auth)
[UPDATE]: When history query parameters or response normalization change
*/

use reqwest::Method;

use crate::http::{Result, SigilClient, TransportRequest};
use crate::types::{HistoryQuery, HistoryResult, Pagination};

impl SigilClient {
    /// Retrieve signal history
    ///
    /// GET /api/history?[all=true|limit={n|all}][&page={n}]
    ///
    /// `all` takes precedence over `limit`. The result always has both
    /// fields populated: a missing or malformed `history` becomes an empty
    /// vec and a missing `pagination` an explicit `None`.
    pub async fn get_history(&self, query: HistoryQuery) -> Result<HistoryResult> {
        let endpoint = history_endpoint(&query);
        let response = self
            .authed_request(&endpoint, TransportRequest::new().method(Method::GET))
            .await?;

        let body: serde_json::Value = response.json()?;
        Ok(normalize_history(body))
    }
}

fn history_endpoint(query: &HistoryQuery) -> String {
    let mut params = Vec::new();
    if query.all {
        params.push("all=true".to_string());
    } else if let Some(limit) = query.limit {
        params.push(format!("limit={limit}"));
    }
    if let Some(page) = query.page {
        params.push(format!("page={page}"));
    }

    if params.is_empty() {
        "/api/history".to_string()
    } else {
        format!("/api/history?{}", params.join("&"))
    }
}

fn normalize_history(body: serde_json::Value) -> HistoryResult {
    let history = body
        .get("history")
        .and_then(|value| value.as_array())
        .cloned()
        .unwrap_or_default();

    let pagination = body
        .get("pagination")
        .cloned()
        .and_then(|value| serde_json::from_value::<Pagination>(value).ok());

    HistoryResult {
        history,
        pagination,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use crate::types::HistoryLimit;

    #[test]
    fn test_all_suppresses_limit() {
        let endpoint = history_endpoint(&HistoryQuery {
            all: true,
            limit: Some(HistoryLimit::Count(20)),
            page: None,
        });
        assert_eq!(endpoint, "/api/history?all=true");
    }

    #[test]
    fn test_limit_and_page() {
        let endpoint = history_endpoint(&HistoryQuery {
            all: false,
            limit: Some(HistoryLimit::Count(20)),
            page: Some(3),
        });
        assert_eq!(endpoint, "/api/history?limit=20&page=3");
    }

    #[test]
    fn test_limit_all_sentinel() {
        let endpoint = history_endpoint(&HistoryQuery {
            all: false,
            limit: Some(HistoryLimit::All),
            page: None,
        });
        assert_eq!(endpoint, "/api/history?limit=all");
    }

    #[test]
    fn test_empty_query() {
        assert_eq!(history_endpoint(&HistoryQuery::default()), "/api/history");
    }

    #[test]
    fn test_normalize_empty_body() {
        let result = normalize_history(serde_json::json!({}));
        assert!(result.history.is_empty());
        assert!(result.pagination.is_none());
    }

    #[test]
    fn test_normalize_malformed_history_field() {
        let result = normalize_history(serde_json::json!({"history": "oops"}));
        assert!(result.history.is_empty());
    }

    #[test]
    fn test_normalize_full_body() {
        let result = normalize_history(serde_json::json!({
            "history": [{"ticker": "SOL"}],
            "pagination": {"limit": 20, "page": 1, "pageSize": 20, "total": 41, "hasMore": true},
        }));
        assert_eq!(result.history.len(), 1);
        let pagination = result.pagination.unwrap();
        assert_eq!(pagination.total, Some(41));
        assert_eq!(pagination.has_more, Some(true));
    }
}
