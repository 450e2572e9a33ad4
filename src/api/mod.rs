//! Recommendation backend: wire types and URL/error helpers.
//!
//! The fetch-based client lives in `client.rs` and only exists on wasm32.
use crate::constants::LOCAL_API_BASE_URL;
use serde::{Deserialize, Serialize};

#[cfg(target_arch = "wasm32")]
mod client;
#[cfg(target_arch = "wasm32")]
pub use client::ApiClient;

pub const DEFAULT_ERROR_MESSAGE: &str = "Failed to get recommendations";

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct RecommendRequest {
    pub movie: String,
}

/// One recommended movie as returned by `/movies-with-posters`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct MovieDetail {
    pub title: String,
    #[serde(default)]
    pub year: Option<String>,
    #[serde(default)]
    pub rating: Option<f64>,
    #[serde(default)]
    pub genres: Option<String>,
    #[serde(default)]
    pub poster_url: Option<String>,
    pub match_percentage: i64,
    #[serde(default)]
    pub tmdb_id: Option<i64>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct RecommendationResponse {
    pub searched_movie: String,
    pub matched_movie: String,
    pub recommendations: Vec<MovieDetail>,
}

/// Titles-only answer of the older `/recommendation` endpoint.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct BasicRecommendationResponse {
    pub matched_movies: String,
    pub recommendations: Vec<String>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct HealthStatus {
    pub status: String,
    #[serde(default)]
    pub tmdb_configured: bool,
    #[serde(default)]
    pub movies_loaded: u64,
}

#[derive(Clone, Debug)]
pub struct ApiConfig {
    pub base_url: String,
}

impl ApiConfig {
    pub fn for_hostname(hostname: &str) -> Self {
        Self {
            base_url: api_base_url(hostname).to_string(),
        }
    }

    pub fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url.trim_end_matches('/'), path)
    }
}

/// Local development talks to the API server directly; deployed pages are
/// served by the API itself, so requests stay same-origin.
pub fn api_base_url(hostname: &str) -> &'static str {
    if hostname == "localhost" {
        LOCAL_API_BASE_URL
    } else {
        ""
    }
}

/// Pull a human readable message out of an error response body.
///
/// The backend reports failures as `{"detail": "..."}`. Validation errors
/// carry a structured `detail` and non-JSON bodies carry none; both fall
/// back to a generic message.
pub fn error_message(body: &str) -> String {
    #[derive(Deserialize)]
    struct ErrorBody {
        #[serde(default)]
        detail: Option<serde_json::Value>,
    }

    serde_json::from_str::<ErrorBody>(body)
        .ok()
        .and_then(|b| b.detail)
        .and_then(|d| d.as_str().map(str::to_owned))
        .filter(|d| !d.is_empty())
        .unwrap_or_else(|| DEFAULT_ERROR_MESSAGE.to_string())
}

/// Message for a request that never produced a response: the browser's own
/// error text when it has one, otherwise the generic message.
pub fn network_message(js_message: Option<String>) -> String {
    js_message
        .map(|m| m.trim().to_owned())
        .filter(|m| !m.is_empty())
        .unwrap_or_else(|| DEFAULT_ERROR_MESSAGE.to_string())
}
