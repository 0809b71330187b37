//! Wire DTOs for the backend REST API.
//!
//! DESIGN
//! ======
//! Field names mirror the backend's JSON. Unknown fields are ignored so the
//! client keeps working when the backend grows its models.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Serialize};

/// Account role; decides which dashboard a user lands on.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UserRole {
    #[default]
    Client,
    Host,
    Admin,
    Webdev,
}

/// How the account was created.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AuthProvider {
    #[default]
    Email,
    Google,
    Facebook,
    Apple,
}

/// The signed-in user's record as returned by `/auth/me`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub user_id: String,
    /// Human-facing customer number (e.g. `SA-000042`).
    #[serde(default)]
    pub client_id: String,
    pub email: String,
    pub name: String,
    #[serde(default)]
    pub role: UserRole,
    #[serde(default)]
    pub auth_provider: AuthProvider,
    #[serde(default)]
    pub phone: Option<String>,
    /// Avatar image URL.
    #[serde(default)]
    pub avatar: Option<String>,
}

/// Response of every credential-establishing endpoint.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenResponse {
    pub access_token: String,
    #[serde(default = "default_token_type")]
    pub token_type: String,
    pub user: User,
}

fn default_token_type() -> String {
    "bearer".to_owned()
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Credentials {
    pub email: String,
    pub password: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Registration {
    pub name: String,
    pub email: String,
    pub password: String,
}

/// Body of `POST /auth/session`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct OAuthExchange {
    pub session_id: String,
}

/// Trip fields needed to render a card.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct TripSummary {
    pub trip_id: String,
    pub title: String,
    #[serde(default)]
    pub slug: Option<String>,
    pub location: String,
    pub activity_type: String,
    pub duration: String,
    pub difficulty: String,
    pub price: f64,
    #[serde(default = "default_currency")]
    pub currency: String,
    #[serde(default)]
    pub images: Vec<String>,
    #[serde(default)]
    pub rating: f64,
    #[serde(default)]
    pub review_count: u32,
}

fn default_currency() -> String {
    "RM".to_owned()
}

impl TripSummary {
    /// Detail-page path, preferring the slug when the backend provides one.
    #[must_use]
    pub fn detail_path(&self) -> String {
        match self.slug.as_deref().filter(|s| !s.is_empty()) {
            Some(slug) => format!("/trips/{slug}"),
            None => format!("/trips/{}", self.trip_id),
        }
    }
}

/// Paginated `GET /trips` response.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct TripListResponse {
    pub trips: Vec<TripSummary>,
    pub total: u32,
    pub page: u32,
    pub pages: u32,
}

/// Filters for `GET /trips`.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct TripQuery {
    pub search: Option<String>,
    pub activity_type: Option<String>,
    pub featured: Option<bool>,
    pub page: Option<u32>,
    pub limit: Option<u32>,
}

impl TripQuery {
    /// Non-empty filters as query pairs, in a stable order.
    #[must_use]
    pub fn to_pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = Vec::new();
        if let Some(search) = self.search.as_deref().map(str::trim).filter(|s| !s.is_empty()) {
            pairs.push(("search", search.to_owned()));
        }
        if let Some(activity) = self.activity_type.as_deref().filter(|a| !a.is_empty() && *a != "all") {
            pairs.push(("activity_type", activity.to_owned()));
        }
        if let Some(featured) = self.featured {
            pairs.push(("featured", featured.to_string()));
        }
        if let Some(page) = self.page {
            pairs.push(("page", page.to_string()));
        }
        if let Some(limit) = self.limit {
            pairs.push(("limit", limit.to_string()));
        }
        pairs
    }
}

/// Footer section of the site content API.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FooterContent {
    pub company_description: String,
    pub phone_1: String,
    pub phone_2: String,
    pub email: String,
    pub location: String,
    pub whatsapp: String,
    pub facebook_url: String,
    pub instagram_url: String,
    pub tiktok_url: String,
}

impl Default for FooterContent {
    /// Literals shown when the content API is unreachable.
    fn default() -> Self {
        Self {
            company_description: "Your trusted partner for unforgettable adventure travel experiences across Indonesia."
                .to_owned(),
            phone_1: "+60 11-7000 1232".to_owned(),
            phone_2: "+60 11-7000 1232".to_owned(),
            email: "sales@seekeradventure.com".to_owned(),
            location: "Indonesia".to_owned(),
            whatsapp: "601170001232".to_owned(),
            facebook_url: "#".to_owned(),
            instagram_url: "#".to_owned(),
            tiktok_url: "#".to_owned(),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Deserialize)]
pub struct WishlistCheck {
    pub in_wishlist: bool,
}
