//! HTTP API Client
//!
//! Functions for communicating with the FundingSense REST API. Each
//! function issues exactly one request and returns the parsed response;
//! there is no retry, caching, or request deduplication. On non-2xx the
//! call fails with the server-provided `detail` message when the body
//! parses, else a fixed fallback string.

use gloo_net::http::Request;

use crate::api::types::*;

/// Default API base URL
pub const DEFAULT_API_BASE: &str = "http://localhost:8000/api/v1";

/// Get the API base URL from local storage or use default
pub fn get_api_base() -> String {
    let url = if let Some(window) = web_sys::window() {
        if let Ok(Some(storage)) = window.local_storage() {
            if let Ok(Some(url)) = storage.get_item("fundingsense_api_url") {
                url
            } else {
                DEFAULT_API_BASE.to_string()
            }
        } else {
            DEFAULT_API_BASE.to_string()
        }
    } else {
        DEFAULT_API_BASE.to_string()
    };
    // Normalize: remove trailing slash
    url.trim_end_matches('/').to_string()
}

/// Set the API base URL in local storage
pub fn set_api_base(url: &str) {
    if let Some(window) = web_sys::window() {
        if let Ok(Some(storage)) = window.local_storage() {
            let _ = storage.set_item("fundingsense_api_url", url);
        }
    }
}

/// Append `?user_id=` when a session exists. The backend scopes history,
/// evidence, and stored chat to the user when given.
fn with_user(path: String, user_id: Option<&str>) -> String {
    match user_id {
        Some(id) => format!("{}?user_id={}", path, id),
        None => path,
    }
}

// ============ API Functions ============

/// Submit a startup description for analysis
pub async fn analyze_startup(data: &AnalysisRequest) -> Result<AnalysisResponse, String> {
    let api_base = get_api_base();

    let response = Request::post(&format!("{}/analyze", api_base))
        .json(data)
        .map_err(|e| format!("Request build error: {}", e))?
        .send()
        .await
        .map_err(|e| format!("Network error: {}", e))?;

    if !response.ok() {
        let error: ApiError = response.json().await.unwrap_or(ApiError {
            detail: "Unable to analyze right now. Please try again.".to_string(),
        });
        return Err(error.detail);
    }

    response.json().await
        .map_err(|e| format!("Parse error: {}", e))
}

/// Fetch aggregate usage stats
pub async fn get_stats() -> Result<StatsResponse, String> {
    let api_base = get_api_base();

    let response = Request::get(&format!("{}/stats", api_base))
        .send()
        .await
        .map_err(|e| format!("Network error: {}", e))?;

    if !response.ok() {
        let error: ApiError = response.json().await.unwrap_or(ApiError {
            detail: "Failed to fetch stats".to_string(),
        });
        return Err(error.detail);
    }

    response.json().await
        .map_err(|e| format!("Parse error: {}", e))
}

/// Fetch past analyses, most recent first
pub async fn get_history(user_id: Option<&str>) -> Result<Vec<AnalysisResponse>, String> {
    let api_base = get_api_base();
    let url = with_user(format!("{}/history", api_base), user_id);

    let response = Request::get(&url)
        .send()
        .await
        .map_err(|e| format!("Network error: {}", e))?;

    if !response.ok() {
        let error: ApiError = response.json().await.unwrap_or(ApiError {
            detail: "Failed to fetch history".to_string(),
        });
        return Err(error.detail);
    }

    response.json().await
        .map_err(|e| format!("Parse error: {}", e))
}

/// Fetch a single analysis by id
pub async fn get_analysis_by_id(
    id: &str,
    user_id: Option<&str>,
) -> Result<AnalysisResponse, String> {
    let api_base = get_api_base();
    let url = with_user(format!("{}/analyses/{}", api_base, id), user_id);

    let response = Request::get(&url)
        .send()
        .await
        .map_err(|e| format!("Network error: {}", e))?;

    if !response.ok() {
        let error: ApiError = response.json().await.unwrap_or(ApiError {
            detail: "Failed to fetch analysis".to_string(),
        });
        return Err(error.detail);
    }

    response.json().await
        .map_err(|e| format!("Parse error: {}", e))
}

/// Fetch the evidence cited across the user's analyses
pub async fn get_all_evidence(user_id: Option<&str>) -> Result<Vec<EvidenceUsed>, String> {
    let api_base = get_api_base();
    let url = with_user(format!("{}/evidence", api_base), user_id);

    let response = Request::get(&url)
        .send()
        .await
        .map_err(|e| format!("Network error: {}", e))?;

    if !response.ok() {
        let error: ApiError = response.json().await.unwrap_or(ApiError {
            detail: "Failed to fetch evidence".to_string(),
        });
        return Err(error.detail);
    }

    response.json().await
        .map_err(|e| format!("Parse error: {}", e))
}

/// Fetch the full indexed intelligence library
pub async fn get_intelligence_library() -> Result<Vec<LibraryEntry>, String> {
    let api_base = get_api_base();

    let response = Request::get(&format!("{}/library", api_base))
        .send()
        .await
        .map_err(|e| format!("Network error: {}", e))?;

    if !response.ok() {
        let error: ApiError = response.json().await.unwrap_or(ApiError {
            detail: "Failed to fetch intelligence library".to_string(),
        });
        return Err(error.detail);
    }

    response.json().await
        .map_err(|e| format!("Parse error: {}", e))
}

/// Fetch the persisted chat transcript for a user
pub async fn get_chat_messages(user_id: &str) -> Result<Vec<ChatMessage>, String> {
    let api_base = get_api_base();

    let response = Request::get(&format!("{}/chat/messages?user_id={}", api_base, user_id))
        .send()
        .await
        .map_err(|e| format!("Network error: {}", e))?;

    if !response.ok() {
        let error: ApiError = response.json().await.unwrap_or(ApiError {
            detail: "Failed to fetch chat history".to_string(),
        });
        return Err(error.detail);
    }

    response.json().await
        .map_err(|e| format!("Parse error: {}", e))
}

/// Send a chat message and wait for the complete assistant reply
pub async fn chat_with_ai(request: &ChatRequest) -> Result<ChatResponse, String> {
    let api_base = get_api_base();

    let response = Request::post(&format!("{}/chat", api_base))
        .json(request)
        .map_err(|e| format!("Request build error: {}", e))?
        .send()
        .await
        .map_err(|e| format!("Network error: {}", e))?;

    if !response.ok() {
        let error: ApiError = response.json().await.unwrap_or(ApiError {
            detail: "Failed to get a response. Please try again.".to_string(),
        });
        return Err(error.detail);
    }

    response.json().await
        .map_err(|e| format!("Parse error: {}", e))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_with_user_appends_query_param() {
        assert_eq!(
            with_user("http://api/history".to_string(), Some("u-1")),
            "http://api/history?user_id=u-1"
        );
        assert_eq!(
            with_user("http://api/history".to_string(), None),
            "http://api/history"
        );
    }

    #[test]
    fn test_error_detail_is_preferred_over_fallback() {
        // Mirrors the non-2xx path: a parsable {"detail": ...} body wins,
        // anything else falls back to the fixed message.
        let body = "{\"detail\":\"Analysis not found\"}";
        let parsed: ApiError = serde_json::from_str(body).unwrap_or(ApiError {
            detail: "Failed to fetch analysis".to_string(),
        });
        assert_eq!(parsed.detail, "Analysis not found");

        let garbage = "<html>502</html>";
        let fallback: ApiError = serde_json::from_str(garbage).unwrap_or(ApiError {
            detail: "Failed to fetch analysis".to_string(),
        });
        assert_eq!(fallback.detail, "Failed to fetch analysis");
    }
}
