//! # HTTP client for the places API
//!
//! [`PlacesApi`] is the seam the page controller depends on; [`ApiClient`] is
//! the production implementation over [`reqwest`], which compiles to `fetch`
//! on WASM and to hyper on native targets.
//!
//! Every request carries `Content-Type: application/json`. On WASM, requests
//! are sent with credentials included so the browser attaches cookies for the
//! API origin (the API enables credentialed CORS). Authorization itself always
//! travels in the `Authorization: Bearer` header.
//!
//! Status handling is uniform: a non-2xx response becomes
//! [`ApiError::LoginFailed`] or [`ApiError::FetchFailed`] carrying the status
//! and its reason phrase, a transport failure becomes [`ApiError::Network`],
//! and an unexpected body becomes [`ApiError::Decode`].

use std::future::Future;

use reqwest::header::{HeaderValue, CONTENT_TYPE};
use reqwest::{Method, RequestBuilder, Response, StatusCode, Url};
use serde::de::DeserializeOwned;
use tracing::debug;

use crate::error::ApiError;
use crate::models::{LoginRequest, LoginResponse, Place, PlaceEnvelope};

/// Async interface to the places API.
pub trait PlacesApi {
    /// Exchange credentials for an access token.
    fn login(
        &self,
        email: &str,
        password: &str,
    ) -> impl Future<Output = Result<String, ApiError>>;

    /// All places, in the order the server returns them.
    fn list_places(&self, token: &str) -> impl Future<Output = Result<Vec<Place>, ApiError>>;

    /// A single place. The token is optional; the server decides whether the
    /// endpoint requires it.
    fn get_place(
        &self,
        id: &str,
        token: Option<&str>,
    ) -> impl Future<Output = Result<Place, ApiError>>;
}

/// reqwest-backed client bound to one API base URL.
#[derive(Clone, Debug)]
pub struct ApiClient {
    http: reqwest::Client,
    base_url: String,
}

impl ApiClient {
    /// Create a client for `base_url`, e.g. `http://127.0.0.1:5000/api/v1`.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: base_url.into(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Build the URL for `segments` below the base URL. Segments are
    /// percent-encoded, so an identifier cannot escape its path position.
    pub fn endpoint(&self, segments: &[&str]) -> Result<Url, ApiError> {
        let mut url =
            Url::parse(&self.base_url).map_err(|e| ApiError::InvalidUrl(e.to_string()))?;
        url.path_segments_mut()
            .map_err(|()| ApiError::InvalidUrl(format!("{} cannot be a base", self.base_url)))?
            .pop_if_empty()
            .extend(segments);
        Ok(url)
    }

    fn request(&self, method: Method, url: Url, token: Option<&str>) -> RequestBuilder {
        let builder = self
            .http
            .request(method, url)
            .header(CONTENT_TYPE, HeaderValue::from_static("application/json"));

        #[cfg(target_arch = "wasm32")]
        let builder = builder.fetch_credentials_include();

        match token {
            Some(token) => builder.bearer_auth(token),
            None => builder,
        }
    }
}

impl PlacesApi for ApiClient {
    async fn login(&self, email: &str, password: &str) -> Result<String, ApiError> {
        let url = self.endpoint(&["auth", "login"])?;
        let response = self
            .request(Method::POST, url, None)
            .json(&LoginRequest { email, password })
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(ApiError::LoginFailed {
                status: status.as_u16(),
                status_text: status_text(status),
            });
        }

        let body: LoginResponse = read_json(response).await?;
        Ok(body.access_token)
    }

    async fn list_places(&self, token: &str) -> Result<Vec<Place>, ApiError> {
        let url = self.endpoint(&["places"])?;
        let response = self.request(Method::GET, url, Some(token)).send().await?;
        let places: Vec<Place> = read_json(check_fetch(response)?).await?;
        debug!("Fetched {} places", places.len());
        Ok(places)
    }

    async fn get_place(&self, id: &str, token: Option<&str>) -> Result<Place, ApiError> {
        let url = self.endpoint(&["places", id])?;
        let response = self.request(Method::GET, url, token).send().await?;
        let envelope: PlaceEnvelope = read_json(check_fetch(response)?).await?;
        debug!("Fetched place details for {id}");
        Ok(envelope.into_inner())
    }
}

/// Reason phrase for a status, e.g. `"Not Found"`, or the bare code when the
/// status has no standard phrase. The phrase the server actually sent is not
/// available through `fetch`.
fn status_text(status: StatusCode) -> String {
    match status.canonical_reason() {
        Some(reason) => reason.to_string(),
        None => status.as_str().to_string(),
    }
}

fn check_fetch(response: Response) -> Result<Response, ApiError> {
    let status = response.status();
    if status.is_success() {
        Ok(response)
    } else {
        Err(ApiError::FetchFailed {
            status: status.as_u16(),
            status_text: status_text(status),
        })
    }
}

async fn read_json<T: DeserializeOwned>(response: Response) -> Result<T, ApiError> {
    let body = response.text().await?;
    Ok(serde_json::from_str(&body)?)
}
