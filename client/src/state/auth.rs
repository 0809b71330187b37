//! Authentication state and the controller that owns its lifecycle.
//!
//! SYSTEM CONTEXT
//! ==============
//! One [`AuthController`] is built at the composition root and shared through
//! Leptos context. It is the only writer of the [`SessionStore`] and of the
//! `RwSignal<AuthState>` that route guards and user-aware components read.
//!
//! LIFECYCLE
//! =========
//! `Bootstrapping -> {Unauthenticated, Authenticated}`, then
//! `Authenticated <-> Unauthenticated` through login/register/OAuth completion
//! and logout/failed validation. Bootstrapping is left exactly once per page
//! load and never re-entered.
//!
//! ERROR HANDLING
//! ==============
//! Bootstrap and logout absorb their failures (logged, signed-out result).
//! Login, registration, and the OAuth exchange return errors to the caller so
//! forms and the callback page can react.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use leptos::prelude::*;

use super::session_store::{SessionStore, StorageError};
use crate::config::ClientConfig;
use crate::net::api::AuthApi;
use crate::net::error::ApiError;
use crate::net::types::{Credentials, Registration, TokenResponse, User};
use crate::util::oauth::{self, OAuthError};

/// Authentication state tracking the current user and loading status.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AuthState {
    pub user: Option<User>,
    /// True only while the initial bootstrap check is running.
    pub loading: bool,
}

impl AuthState {
    /// State at page load, before bootstrap has decided anything.
    #[must_use]
    pub fn bootstrapping() -> Self {
        Self { user: None, loading: true }
    }

    #[must_use]
    pub fn is_authenticated(&self) -> bool {
        self.user.is_some()
    }

    #[must_use]
    pub fn phase(&self) -> AuthPhase {
        if self.loading {
            AuthPhase::Bootstrapping
        } else if self.user.is_some() {
            AuthPhase::Authenticated
        } else {
            AuthPhase::Unauthenticated
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AuthPhase {
    Bootstrapping,
    Unauthenticated,
    Authenticated,
}

#[derive(Debug, thiserror::Error)]
pub enum AuthError {
    #[error(transparent)]
    Api(#[from] ApiError),
    #[error("could not persist session: {0}")]
    Storage(#[from] StorageError),
    #[error("oauth redirect failed: {0}")]
    Redirect(#[from] OAuthError),
}

impl AuthError {
    /// Text suitable for a form-level error message.
    #[must_use]
    pub fn user_message(&self) -> String {
        match self {
            Self::Api(e) => e.user_message(),
            Self::Storage(_) => "Your browser blocked saving the session. Check storage settings.".to_owned(),
            Self::Redirect(_) => "Google sign-in is unavailable right now.".to_owned(),
        }
    }
}

/// Runs the wrapped closure when dropped, including on early return, panic,
/// or when the owning future is dropped mid-await.
struct OnDrop<F: FnOnce()>(Option<F>);

impl<F: FnOnce()> Drop for OnDrop<F> {
    fn drop(&mut self) {
        if let Some(f) = self.0.take() {
            f();
        }
    }
}

/// Process-wide authentication controller.
#[derive(Clone)]
pub struct AuthController {
    state: RwSignal<AuthState>,
    api: Arc<dyn AuthApi>,
    store: Arc<SessionStore>,
    config: ClientConfig,
    bootstrapped: Arc<AtomicBool>,
}

impl AuthController {
    pub fn new(api: impl AuthApi + 'static, store: SessionStore, config: ClientConfig) -> Self {
        Self {
            state: RwSignal::new(AuthState::bootstrapping()),
            api: Arc::new(api),
            store: Arc::new(store),
            config,
            bootstrapped: Arc::new(AtomicBool::new(false)),
        }
    }

    /// Reactive state for components; read-only by convention.
    #[must_use]
    pub fn state(&self) -> RwSignal<AuthState> {
        self.state
    }

    /// Untracked snapshot of the current state.
    #[must_use]
    pub fn snapshot(&self) -> AuthState {
        self.state.get_untracked()
    }

    /// Bearer token for authenticated calls made outside this controller.
    #[must_use]
    pub fn access_token(&self) -> Option<String> {
        self.store.token()
    }

    /// Decide the initial auth state for this page load.
    ///
    /// `fragment` is the URL fragment captured synchronously at first render.
    /// When it carries an OAuth handoff this returns without touching the
    /// store or the network, leaving the exchange to the callback page.
    /// Subsequent calls are no-ops.
    pub async fn bootstrap(&self, fragment: &str) {
        if self.bootstrapped.swap(true, Ordering::SeqCst) {
            return;
        }
        let state = self.state;
        let _finish = OnDrop(Some(move || {
            let _ = state.try_update(|s| s.loading = false);
        }));

        if oauth::has_handoff_marker(fragment) {
            leptos::logging::log!("oauth handoff present; deferring session restore to callback");
            return;
        }

        let Some(token) = self.store.token() else {
            self.sign_out_locally();
            return;
        };

        match self.api.current_user(&token).await {
            Ok(user) => {
                if let Err(e) = self.store.save_user(&user) {
                    leptos::logging::warn!("could not refresh cached user: {e}");
                }
                self.state.update(|s| s.user = Some(user));
            }
            Err(e) => {
                if e.is_session_rejection() {
                    leptos::logging::warn!("stored session rejected, signing out: {e}");
                } else {
                    leptos::logging::warn!("session check failed, signing out: {e}");
                }
                self.sign_out_locally();
            }
        }
    }

    /// Sign in with email and password.
    ///
    /// # Errors
    ///
    /// Returns the backend's [`ApiError`] unchanged, or a [`StorageError`] if
    /// the session cannot be persisted.
    pub async fn login(&self, email: &str, password: &str) -> Result<TokenResponse, AuthError> {
        let credentials = Credentials { email: email.trim().to_owned(), password: password.to_owned() };
        let response = self.api.login(&credentials).await?;
        self.establish(&response)?;
        Ok(response)
    }

    /// Create an account and sign in.
    ///
    /// # Errors
    ///
    /// Same as [`AuthController::login`].
    pub async fn register(&self, name: &str, email: &str, password: &str) -> Result<TokenResponse, AuthError> {
        let registration = Registration {
            name: name.trim().to_owned(),
            email: email.trim().to_owned(),
            password: password.to_owned(),
        };
        let response = self.api.register(&registration).await?;
        self.establish(&response)?;
        Ok(response)
    }

    /// Send the page to the identity provider.
    ///
    /// # Errors
    ///
    /// Returns [`AuthError::Redirect`] when the live origin or the configured
    /// provider URL is unusable.
    pub fn begin_oauth_redirect(&self) -> Result<(), AuthError> {
        oauth::redirect_to_provider(&self.config.auth_url)?;
        Ok(())
    }

    /// Exchange the one-time handoff id for a session.
    ///
    /// # Errors
    ///
    /// Returns the backend's [`ApiError`]; the state is left signed out.
    pub async fn complete_oauth_callback(&self, handoff: &str) -> Result<TokenResponse, AuthError> {
        let response = self.api.exchange_oauth_session(handoff).await?;
        self.establish(&response)?;
        Ok(response)
    }

    /// Sign out. The server call is best effort; local state is always cleared.
    pub async fn logout(&self) {
        let token = self.store.token();
        let _cleanup = OnDrop(Some(|| self.sign_out_locally()));
        if let Err(e) = self.api.logout(token.as_deref()).await {
            leptos::logging::warn!("logout request failed: {e}");
        }
    }

    /// Replace the cached user after a profile edit. Ignored when signed out.
    ///
    /// # Errors
    ///
    /// Returns the [`StorageError`] when the record cannot be written; the
    /// visible user is left unchanged so it never drifts from storage.
    pub fn update_user(&self, user: User) -> Result<(), StorageError> {
        if self.store.token().is_none() {
            leptos::logging::warn!("update_user without a session; ignoring");
            return Ok(());
        }
        self.store.save_user(&user)?;
        self.state.update(|s| s.user = Some(user));
        Ok(())
    }

    fn establish(&self, response: &TokenResponse) -> Result<(), StorageError> {
        self.store.save(&response.access_token, &response.user)?;
        let user = response.user.clone();
        self.state.update(|s| s.user = Some(user));
        Ok(())
    }

    fn sign_out_locally(&self) {
        self.store.clear();
        let _ = self.state.try_update(|s| s.user = None);
    }
}
