use super::{
    error_message, network_message, ApiConfig, BasicRecommendationResponse, HealthStatus,
    RecommendRequest, RecommendationResponse,
};
use crate::constants::{BASIC_RECOMMENDATIONS_PATH, HEALTH_PATH, RECOMMENDATIONS_PATH};
use crate::error::ApiError;
use serde::de::DeserializeOwned;
use serde::Serialize;
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use web_sys as web;

/// `fetch`-backed client for the recommendation backend. No retries: a
/// failed call is reported once and the caller decides what to show.
#[derive(Clone, Debug)]
pub struct ApiClient {
    config: ApiConfig,
}

impl ApiClient {
    pub fn new(config: ApiConfig) -> Self {
        Self { config }
    }

    /// Pick the base URL from the page's hostname.
    pub fn from_location() -> Self {
        let hostname = web::window()
            .and_then(|w| w.location().hostname().ok())
            .unwrap_or_default();
        Self::new(ApiConfig::for_hostname(&hostname))
    }

    /// Recommendations with poster and rating details.
    pub async fn recommendations(&self, movie: &str) -> Result<RecommendationResponse, ApiError> {
        self.post_json(
            RECOMMENDATIONS_PATH,
            &RecommendRequest {
                movie: movie.to_owned(),
            },
        )
        .await
    }

    /// Titles-only recommendations.
    pub async fn basic_recommendations(
        &self,
        movie: &str,
    ) -> Result<BasicRecommendationResponse, ApiError> {
        self.post_json(
            BASIC_RECOMMENDATIONS_PATH,
            &RecommendRequest {
                movie: movie.to_owned(),
            },
        )
        .await
    }

    pub async fn health(&self) -> Result<HealthStatus, ApiError> {
        let request = web::Request::new_with_str(&self.config.url(HEALTH_PATH)).map_err(js_err)?;
        self.send(request).await
    }

    async fn post_json<B, T>(&self, path: &str, body: &B) -> Result<T, ApiError>
    where
        B: Serialize,
        T: DeserializeOwned,
    {
        let json = serde_json::to_string(body)?;
        let headers = web::Headers::new().map_err(js_err)?;
        headers
            .set("Content-Type", "application/json")
            .map_err(js_err)?;
        let init = web::RequestInit::new();
        init.set_method("POST");
        init.set_headers(&headers);
        init.set_body(&JsValue::from_str(&json));
        let request =
            web::Request::new_with_str_and_init(&self.config.url(path), &init).map_err(js_err)?;
        self.send(request).await
    }

    async fn send<T: DeserializeOwned>(&self, request: web::Request) -> Result<T, ApiError> {
        let window = web::window().ok_or_else(|| ApiError::Network("no window".into()))?;
        let response: web::Response = JsFuture::from(window.fetch_with_request(&request))
            .await
            .map_err(js_err)?
            .dyn_into()
            .map_err(js_err)?;
        let body = JsFuture::from(response.text().map_err(js_err)?)
            .await
            .map_err(js_err)?
            .as_string()
            .unwrap_or_default();
        if !response.ok() {
            let status = response.status();
            log::warn!("[api] {} -> {}", request.url(), status);
            return Err(ApiError::Status {
                status,
                message: error_message(&body),
            });
        }
        Ok(serde_json::from_str(&body)?)
    }
}

fn js_err(e: JsValue) -> ApiError {
    let message = e
        .dyn_ref::<js_sys::Error>()
        .map(|err| String::from(err.message()))
        .or_else(|| e.as_string());
    ApiError::Network(network_message(message))
}
