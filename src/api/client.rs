//! HTTP API Client
//!
//! Functions for talking to the document store's REST API. Collections
//! `users` and `thoughts` plus the singleton documents `app_info/details`
//! and `daily_content/today`.

use gloo_net::http::{Request, Response};

use crate::state::daily::DailyContentDoc;
use crate::state::global::{AppInfo, Thought};
use crate::state::session::SessionUser;

/// Default API base URL
pub const DEFAULT_API_BASE: &str = "http://localhost:8080/api/v1";

/// Local storage key for a configured base URL override
const API_BASE_STORAGE_KEY: &str = "daily_thought_api_url";

/// Get the API base URL from local storage or use default
fn get_api_base() -> String {
    let url = if let Some(window) = web_sys::window() {
        if let Ok(Some(storage)) = window.local_storage() {
            if let Ok(Some(url)) = storage.get_item(API_BASE_STORAGE_KEY) {
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

// ============ Response Types ============

#[derive(Debug, serde::Deserialize)]
pub struct UserListResponse {
    pub records: Vec<SessionUser>,
}

#[derive(Debug, serde::Deserialize)]
pub struct ThoughtListResponse {
    pub records: Vec<Thought>,
}

#[derive(Debug, serde::Deserialize)]
pub struct ApiError {
    pub error: String,
    #[serde(default)]
    pub code: Option<String>,
}

/// Shape a non-OK response into a display string
async fn error_from(response: Response) -> String {
    response
        .json::<ApiError>()
        .await
        .map(|e| e.error)
        .unwrap_or_else(|_| "Unknown error".to_string())
}

// ============ API Functions ============

/// Look up a user record by exact name and email match
pub async fn find_user(name: &str, email: &str) -> Result<Option<SessionUser>, String> {
    let api_base = get_api_base();

    let response = Request::get(&format!("{}/users", api_base))
        .query([("name", name), ("email", email), ("limit", "1")])
        .send()
        .await
        .map_err(|e| format!("Network error: {}", e))?;

    if !response.ok() {
        return Err(error_from(response).await);
    }

    let result: UserListResponse = response
        .json()
        .await
        .map_err(|e| format!("Parse error: {}", e))?;

    Ok(result.records.into_iter().next())
}

/// Insert a new user record and return it with its assigned id
pub async fn create_user(name: &str, email: &str) -> Result<SessionUser, String> {
    #[derive(serde::Serialize)]
    struct CreateUserRequest {
        name: String,
        email: String,
    }

    let api_base = get_api_base();

    let response = Request::post(&format!("{}/users", api_base))
        .json(&CreateUserRequest {
            name: name.to_string(),
            email: email.to_string(),
        })
        .map_err(|e| format!("Request build error: {}", e))?
        .send()
        .await
        .map_err(|e| format!("Network error: {}", e))?;

    if !response.ok() {
        return Err(error_from(response).await);
    }

    response
        .json()
        .await
        .map_err(|e| format!("Parse error: {}", e))
}

/// Fetch every record in the thoughts collection, store order
pub async fn fetch_thoughts() -> Result<Vec<Thought>, String> {
    let api_base = get_api_base();

    let response = Request::get(&format!("{}/thoughts", api_base))
        .send()
        .await
        .map_err(|e| format!("Network error: {}", e))?;

    if !response.ok() {
        return Err(error_from(response).await);
    }

    let result: ThoughtListResponse = response
        .json()
        .await
        .map_err(|e| format!("Parse error: {}", e))?;

    Ok(result.records)
}

/// Fetch the singleton app-info document; absence is not an error
pub async fn fetch_app_info() -> Result<Option<AppInfo>, String> {
    let api_base = get_api_base();

    let response = Request::get(&format!("{}/app_info/details", api_base))
        .send()
        .await
        .map_err(|e| format!("Network error: {}", e))?;

    if response.status() == 404 {
        return Ok(None);
    }
    if !response.ok() {
        return Err(error_from(response).await);
    }

    let info: AppInfo = response
        .json()
        .await
        .map_err(|e| format!("Parse error: {}", e))?;

    Ok(Some(info))
}

/// Fetch the singleton daily-content document; absence is not an error
pub async fn fetch_daily_content() -> Result<Option<DailyContentDoc>, String> {
    let api_base = get_api_base();

    let response = Request::get(&format!("{}/daily_content/today", api_base))
        .send()
        .await
        .map_err(|e| format!("Network error: {}", e))?;

    if response.status() == 404 {
        return Ok(None);
    }
    if !response.ok() {
        return Err(error_from(response).await);
    }

    let doc: DailyContentDoc = response
        .json()
        .await
        .map_err(|e| format!("Parse error: {}", e))?;

    Ok(Some(doc))
}
