//! REST API client for the backend.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`.
//! Server-side (SSR): stubs returning [`ApiError::Unavailable`] since these
//! endpoints are only meaningful in the browser.
//!
//! DESIGN
//! ======
//! The credential-affecting endpoints sit behind the [`AuthApi`] trait so the
//! auth controller can be driven by a mock in tests. Read-only content, trip,
//! and wishlist lookups are inherent methods on [`HttpApi`].

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use super::error::ApiError;
#[cfg(feature = "hydrate")]
use super::error::parse_detail;
#[cfg(feature = "hydrate")]
use super::types::{OAuthExchange, WishlistCheck};
use super::types::{Credentials, FooterContent, Registration, TokenResponse, TripListResponse, TripQuery, User};
use crate::config::ClientConfig;

/// Remote authentication contract consumed by the auth controller.
///
/// Futures are not `Send`: browser fetches live on the single UI thread.
#[async_trait::async_trait(?Send)]
pub trait AuthApi: Send + Sync {
    /// Resolve the user behind `token` (`GET /auth/me`).
    async fn current_user(&self, token: &str) -> Result<User, ApiError>;
    /// Authenticate with email + password (`POST /auth/login`).
    async fn login(&self, credentials: &Credentials) -> Result<TokenResponse, ApiError>;
    /// Create an account (`POST /auth/register`).
    async fn register(&self, registration: &Registration) -> Result<TokenResponse, ApiError>;
    /// Trade a one-time OAuth handoff id for a session (`POST /auth/session`).
    async fn exchange_oauth_session(&self, handoff: &str) -> Result<TokenResponse, ApiError>;
    /// Invalidate the session server-side (`POST /auth/logout`).
    async fn logout(&self, token: Option<&str>) -> Result<(), ApiError>;
}

/// HTTP implementation of the backend API.
#[derive(Clone, Debug, Default)]
pub struct HttpApi {
    config: ClientConfig,
}

#[cfg(any(test, feature = "hydrate"))]
fn bearer(token: &str) -> String {
    format!("Bearer {token}")
}

#[cfg(any(test, feature = "hydrate"))]
fn wishlist_item_path(trip_id: &str) -> String {
    format!("/wishlist/{trip_id}")
}

#[cfg(any(test, feature = "hydrate"))]
fn wishlist_check_path(trip_id: &str) -> String {
    format!("/wishlist/check/{trip_id}")
}

#[cfg(feature = "hydrate")]
fn network(err: gloo_net::Error) -> ApiError {
    ApiError::Network(err.to_string())
}

#[cfg(feature = "hydrate")]
fn with_token(builder: gloo_net::http::RequestBuilder, token: Option<&str>) -> gloo_net::http::RequestBuilder {
    match token {
        Some(token) => builder.header("Authorization", &bearer(token)),
        None => builder,
    }
}

/// Turn a non-OK response into an [`ApiError`] carrying the backend detail.
#[cfg(feature = "hydrate")]
async fn check(resp: gloo_net::http::Response) -> Result<gloo_net::http::Response, ApiError> {
    if resp.ok() {
        return Ok(resp);
    }
    let status = resp.status();
    let body = resp.text().await.unwrap_or_default();
    Err(ApiError::from_status(status, parse_detail(&body)))
}

#[cfg(feature = "hydrate")]
async fn read_json<T: serde::de::DeserializeOwned>(resp: gloo_net::http::Response) -> Result<T, ApiError> {
    check(resp)
        .await?
        .json::<T>()
        .await
        .map_err(|e| ApiError::Decode(e.to_string()))
}

impl HttpApi {
    #[must_use]
    pub fn new(config: ClientConfig) -> Self {
        Self { config }
    }

    /// `GET /trips` URL with encoded filters.
    #[must_use]
    pub fn trips_url(&self, query: &TripQuery) -> String {
        let base = self.config.endpoint("/trips");
        let pairs = query.to_pairs();
        if pairs.is_empty() {
            return base;
        }
        let encoded = url::form_urlencoded::Serializer::new(String::new())
            .extend_pairs(pairs)
            .finish();
        format!("{base}?{encoded}")
    }

    #[cfg(feature = "hydrate")]
    async fn post_token_response<B: serde::Serialize>(&self, path: &str, body: &B) -> Result<TokenResponse, ApiError> {
        let resp = gloo_net::http::Request::post(&self.config.endpoint(path))
            .json(body)
            .map_err(network)?
            .send()
            .await
            .map_err(network)?;
        read_json(resp).await
    }

    /// Footer contact details (`GET /content/footer`).
    ///
    /// Never fails: any error yields the built-in fallback literals.
    pub async fn footer_content(&self) -> FooterContent {
        #[cfg(feature = "hydrate")]
        {
            let result = match gloo_net::http::Request::get(&self.config.endpoint("/content/footer"))
                .send()
                .await
            {
                Ok(resp) => read_json::<FooterContent>(resp).await,
                Err(e) => Err(network(e)),
            };
            result.unwrap_or_else(|e| {
                leptos::logging::warn!("footer content unavailable, using fallback: {e}");
                FooterContent::default()
            })
        }
        #[cfg(not(feature = "hydrate"))]
        {
            FooterContent::default()
        }
    }

    /// List active trips matching `query`.
    ///
    /// # Errors
    ///
    /// Returns an [`ApiError`] if the request fails or the response is malformed.
    pub async fn list_trips(&self, query: &TripQuery) -> Result<TripListResponse, ApiError> {
        #[cfg(feature = "hydrate")]
        {
            let resp = gloo_net::http::Request::get(&self.trips_url(query))
                .send()
                .await
                .map_err(network)?;
            read_json(resp).await
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = query;
            Err(ApiError::Unavailable)
        }
    }

    /// Whether `trip_id` is in the signed-in user's wishlist.
    ///
    /// # Errors
    ///
    /// Returns an [`ApiError`] if the request fails or the token is rejected.
    pub async fn wishlist_contains(&self, token: &str, trip_id: &str) -> Result<bool, ApiError> {
        #[cfg(feature = "hydrate")]
        {
            let url = self.config.endpoint(&wishlist_check_path(trip_id));
            let resp = with_token(gloo_net::http::Request::get(&url), Some(token))
                .send()
                .await
                .map_err(network)?;
            let body: WishlistCheck = read_json(resp).await?;
            Ok(body.in_wishlist)
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (token, trip_id);
            Err(ApiError::Unavailable)
        }
    }

    /// Add `trip_id` to the wishlist (`POST /wishlist`).
    ///
    /// # Errors
    ///
    /// Returns an [`ApiError`] if the request fails or the backend rejects it.
    pub async fn add_to_wishlist(&self, token: &str, trip_id: &str) -> Result<(), ApiError> {
        #[cfg(feature = "hydrate")]
        {
            let payload = serde_json::json!({ "trip_id": trip_id });
            let resp = with_token(gloo_net::http::Request::post(&self.config.endpoint("/wishlist")), Some(token))
                .json(&payload)
                .map_err(network)?
                .send()
                .await
                .map_err(network)?;
            check(resp).await.map(|_| ())
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (token, trip_id);
            Err(ApiError::Unavailable)
        }
    }

    /// Remove `trip_id` from the wishlist (`DELETE /wishlist/{trip_id}`).
    ///
    /// # Errors
    ///
    /// Returns an [`ApiError`] if the request fails or the backend rejects it.
    pub async fn remove_from_wishlist(&self, token: &str, trip_id: &str) -> Result<(), ApiError> {
        #[cfg(feature = "hydrate")]
        {
            let url = self.config.endpoint(&wishlist_item_path(trip_id));
            let resp = with_token(gloo_net::http::Request::delete(&url), Some(token))
                .send()
                .await
                .map_err(network)?;
            check(resp).await.map(|_| ())
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (token, trip_id);
            Err(ApiError::Unavailable)
        }
    }
}

#[async_trait::async_trait(?Send)]
impl AuthApi for HttpApi {
    async fn current_user(&self, token: &str) -> Result<User, ApiError> {
        #[cfg(feature = "hydrate")]
        {
            let resp = with_token(gloo_net::http::Request::get(&self.config.endpoint("/auth/me")), Some(token))
                .send()
                .await
                .map_err(network)?;
            read_json(resp).await
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = token;
            Err(ApiError::Unavailable)
        }
    }

    async fn login(&self, credentials: &Credentials) -> Result<TokenResponse, ApiError> {
        #[cfg(feature = "hydrate")]
        {
            self.post_token_response("/auth/login", credentials).await
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = credentials;
            Err(ApiError::Unavailable)
        }
    }

    async fn register(&self, registration: &Registration) -> Result<TokenResponse, ApiError> {
        #[cfg(feature = "hydrate")]
        {
            self.post_token_response("/auth/register", registration).await
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = registration;
            Err(ApiError::Unavailable)
        }
    }

    async fn exchange_oauth_session(&self, handoff: &str) -> Result<TokenResponse, ApiError> {
        #[cfg(feature = "hydrate")]
        {
            let body = OAuthExchange { session_id: handoff.to_owned() };
            self.post_token_response("/auth/session", &body).await
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = handoff;
            Err(ApiError::Unavailable)
        }
    }

    async fn logout(&self, token: Option<&str>) -> Result<(), ApiError> {
        #[cfg(feature = "hydrate")]
        {
            let resp = with_token(gloo_net::http::Request::post(&self.config.endpoint("/auth/logout")), token)
                .send()
                .await
                .map_err(network)?;
            check(resp).await.map(|_| ())
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = token;
            Err(ApiError::Unavailable)
        }
    }
}
