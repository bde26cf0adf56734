//! Session state for the signed-in player.
//!
//! A [`SessionManager`] holds the identity obtained from the identity provider, persists it to
//! the data directory and restores it on the next launch. The identity is always replaced as a
//! whole, so readers never see a token from one sign-in next to an account ID from another.

mod builder;
mod exchange;
mod file;

pub use builder::SessionManagerBuilder;
pub use exchange::code_from_redirect;

use file::PersistedSession;
use crate::error::{Error, Result};
use crate::helpers::get_client;
use crate::request::Credentials;
use crate::types::{AccountId, HttpClient};
use std::path::{Path, PathBuf};
use std::sync::{Arc, PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};
use chrono::{DateTime, FixedOffset, Utc};

/// Default endpoint of the identity provider.
pub const DEFAULT_AUTH_ENDPOINT: &str = "https://account.theshow.com/xbl_sessions/app25_oauth.json";
/// Default redirect URI registered with the identity provider.
pub const DEFAULT_REDIRECT_URI: &str = "com.mlb.xbl.app://redirect";

/// The signed-in player.
#[derive(Clone, PartialEq, Eq)]
pub struct Identity {
    /// The account token.
    pub account_token: String,
    /// The account ID.
    pub account_id: Option<AccountId>,
    /// The secondary token.
    pub ts_token: Option<String>,
    /// The player's username.
    pub username: Option<String>,
    /// When the token expires.
    pub expires_at: Option<String>,
}

impl Identity {
    /// Parses the expiry as an RFC 3339 date-time.
    pub fn expires_at_datetime(&self) -> Option<DateTime<FixedOffset>> {
        self.expires_at.as_deref()
            .and_then(|expires_at| DateTime::parse_from_rfc3339(expires_at).ok())
    }

    /// Credentials for account-scoped requests. `None` if the account ID is unknown.
    pub fn credentials(&self) -> Option<Credentials> {
        self.account_id.map(|account_id| Credentials::new(account_id, self.account_token.clone()))
    }
}

impl std::fmt::Debug for Identity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Identity")
            .field("account_token", &"<redacted>")
            .field("account_id", &self.account_id)
            .field("ts_token", &self.ts_token.as_ref().map(|_| "<redacted>"))
            .field("username", &self.username)
            .field("expires_at", &self.expires_at)
            .finish()
    }
}

impl From<crate::response::AuthResponse> for Identity {
    fn from(response: crate::response::AuthResponse) -> Self {
        Self {
            account_token: response.account_token,
            account_id: Some(response.account_id),
            ts_token: Some(response.ts_token),
            username: Some(response.username),
            expires_at: Some(response.expiration),
        }
    }
}

/// A snapshot of the session.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SessionState {
    /// The signed-in player. `None` when not authenticated.
    pub identity: Option<Identity>,
    /// Whether an authentication is in flight.
    pub is_loading: bool,
    /// The message of the last failed authentication.
    pub last_error: Option<String>,
}

impl SessionState {
    /// Whether there is a signed-in player.
    pub fn is_authenticated(&self) -> bool {
        self.identity.is_some()
    }
}

/// The result of an authentication attempt that did not fail.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AuthOutcome {
    /// The player is now signed in.
    Authenticated(Identity),
    /// Nothing was done because an attempt was already in flight or a player is already signed
    /// in.
    Skipped,
    /// The exchange completed after a logout. Its result was dropped and nothing was persisted.
    Discarded,
}

/// Manages the signed-in player. Clones share the same state.
#[derive(Debug, Clone)]
pub struct SessionManager {
    /// The session.
    state: Arc<RwLock<SharedState>>,
    /// The client for making requests.
    client: HttpClient,
    /// Endpoint of the identity provider.
    auth_endpoint: String,
    /// Redirect URI registered with the identity provider.
    redirect_uri: String,
    /// Directory the session is persisted to.
    data_directory: PathBuf,
}

#[derive(Debug, Default)]
struct SharedState {
    session: SessionState,
    /// Incremented on every logout. An attempt begun under an older generation is discarded.
    generation: u64,
}

fn read_shared(state: &RwLock<SharedState>) -> RwLockReadGuard<'_, SharedState> {
    state.read().unwrap_or_else(PoisonError::into_inner)
}

fn write_shared(state: &RwLock<SharedState>) -> RwLockWriteGuard<'_, SharedState> {
    state.write().unwrap_or_else(PoisonError::into_inner)
}

/// An authentication in flight. The loading flag is cleared when the attempt is finished or
/// dropped, so a cancelled attempt does not block the next one.
struct Attempt<'a> {
    state: &'a RwLock<SharedState>,
    generation: u64,
    finished: bool,
}

impl<'a> Attempt<'a> {
    /// Marks an attempt as in flight. `None` if one is already in flight or a player is signed
    /// in.
    fn begin(state: &'a RwLock<SharedState>) -> Option<Self> {
        let mut shared = write_shared(state);

        if shared.session.is_loading || shared.session.is_authenticated() {
            log::warn!(
                "Authentication skipped: {}",
                if shared.session.is_loading { "already in progress" } else { "already authenticated" },
            );
            return None;
        }

        shared.session = SessionState {
            is_loading: true,
            ..SessionState::default()
        };

        Some(Self {
            state,
            generation: shared.generation,
            finished: false,
        })
    }

    /// Ends the attempt and applies `commit` in the same critical section. Nothing is applied
    /// if the player logged out since the attempt began. Returns whether `commit` was applied.
    fn finish(
        mut self,
        commit: impl FnOnce(&mut SessionState),
    ) -> bool {
        let mut shared = write_shared(self.state);

        self.finished = true;
        // Logout leaves the flag set, so it still belongs to this attempt.
        shared.session.is_loading = false;

        if shared.generation != self.generation {
            return false;
        }

        commit(&mut shared.session);
        true
    }
}

impl Drop for Attempt<'_> {
    fn drop(&mut self) {
        if !self.finished {
            write_shared(self.state).session.is_loading = false;
            log::debug!("Authentication cancelled");
        }
    }
}

impl SessionManager {
    /// Builder for constructing a [`SessionManager`].
    pub fn builder() -> SessionManagerBuilder {
        SessionManagerBuilder::new()
    }

    /// Exchanges an authorization code for an account token and signs in.
    ///
    /// Returns [`AuthOutcome::Skipped`] without making a request if an authentication is already
    /// in flight or a player is already signed in. On failure the session is left signed out and
    /// [`last_error`](Self::last_error) is set. If the player logs out while the exchange is in
    /// flight its result is dropped and [`AuthOutcome::Discarded`] is returned.
    ///
    /// Dropping the returned future cancels the attempt and a new one may be started.
    pub async fn authenticate(
        &self,
        code: &str,
    ) -> Result<AuthOutcome> {
        let Some(attempt) = Attempt::begin(&self.state) else {
            return Ok(AuthOutcome::Skipped);
        };
        let generation = attempt.generation;
        let exchanged = exchange::exchange_code(
            &self.client,
            &self.auth_endpoint,
            &self.redirect_uri,
            code,
        ).await;
        let identity = match exchanged {
            Ok(response) => Identity::from(response),
            Err(error) => {
                let message = error.to_string();

                if !attempt.finish(|session| session.last_error = Some(message)) {
                    log::debug!("Logged out during failed authentication");
                }

                log::error!("Authentication failed: {error}");
                return Err(error);
            },
        };

        if !attempt.finish(|session| session.identity = Some(identity.clone())) {
            log::info!("Authentication discarded: logged out while in progress");
            return Ok(AuthOutcome::Discarded);
        }

        log::info!("Authenticated as {}", identity.username.as_deref().unwrap_or("unknown user"));

        if let Err(error) = file::save_session(&self.data_directory, &PersistedSession::from(&identity)).await {
            log::warn!("Failed to persist session: {error}");
        }

        // A logout while the record was written may have removed the file before it landed.
        let signed_out = {
            let shared = self.read_state();

            shared.generation != generation && !shared.session.is_authenticated()
        };

        if signed_out {
            if let Err(error) = file::remove_session(&self.data_directory).await {
                log::warn!("Failed to remove session written after logout: {error}");
            }
        }

        Ok(AuthOutcome::Authenticated(identity))
    }

    /// Reads the authorization code from the identity provider's redirect URL and signs in.
    pub async fn authenticate_with_redirect(
        &self,
        redirect_url: &str,
    ) -> Result<AuthOutcome> {
        let code = code_from_redirect(redirect_url)?;

        self.authenticate(&code).await
    }

    /// Signs out and removes the persisted session. Signing out when not signed in is not an
    /// error.
    ///
    /// An authentication in flight keeps [`is_loading`](Self::is_loading) set until its exchange
    /// completes, but its result is discarded.
    pub async fn logout(&self) -> Result<()> {
        {
            let mut shared = self.write_state();
            let is_loading = shared.session.is_loading;

            shared.generation += 1;
            shared.session = SessionState {
                is_loading,
                ..SessionState::default()
            };
        }

        file::remove_session(&self.data_directory).await?;
        log::debug!("Logged out");

        Ok(())
    }

    /// Restores the persisted session. Returns whether a player is now signed in.
    ///
    /// A missing or unreadable record leaves the session signed out. Nothing is done while an
    /// authentication is in flight or when a player is already signed in.
    pub async fn rehydrate(&self) -> bool {
        let generation = {
            let shared = self.read_state();

            if shared.session.is_authenticated() {
                return true;
            }

            if shared.session.is_loading {
                log::debug!("Rehydrate skipped: authentication in progress");
                return false;
            }

            shared.generation
        };
        let identity = match file::load_session(&self.data_directory).await {
            Ok(session) => session.into_identity(),
            Err(error) => {
                log::debug!("No session restored: {error}");
                None
            },
        };
        let mut shared = self.write_state();

        // The session may have changed while the file was read.
        if shared.session.is_loading || shared.generation != generation {
            return shared.session.is_authenticated();
        }

        if !shared.session.is_authenticated() {
            shared.session.identity = identity;
        }

        shared.session.is_authenticated()
    }

    /// A snapshot of the session.
    pub fn state(&self) -> SessionState {
        self.read_state().session.clone()
    }

    /// The signed-in player.
    pub fn identity(&self) -> Option<Identity> {
        self.read_state().session.identity.clone()
    }

    /// Whether a player is signed in.
    pub fn is_authenticated(&self) -> bool {
        self.read_state().session.is_authenticated()
    }

    /// Whether an authentication is in flight.
    pub fn is_loading(&self) -> bool {
        self.read_state().session.is_loading
    }

    /// The message of the last failed authentication.
    pub fn last_error(&self) -> Option<String> {
        self.read_state().session.last_error.clone()
    }

    pub fn account_id(&self) -> Option<AccountId> {
        self.read_state().session.identity.as_ref()?.account_id
    }

    pub fn account_token(&self) -> Option<String> {
        self.read_state().session.identity.as_ref().map(|identity| identity.account_token.clone())
    }

    /// The secondary token.
    pub fn secondary_token(&self) -> Option<String> {
        self.read_state().session.identity.as_ref()?.ts_token.clone()
    }

    pub fn username(&self) -> Option<String> {
        self.read_state().session.identity.as_ref()?.username.clone()
    }

    pub fn expires_at(&self) -> Option<String> {
        self.read_state().session.identity.as_ref()?.expires_at.clone()
    }

    /// Whether the token has expired as of `now`. An expiry that cannot be parsed is treated as
    /// not expired.
    pub fn is_expired(&self, now: DateTime<Utc>) -> bool {
        self.read_state().session.identity.as_ref()
            .and_then(Identity::expires_at_datetime)
            .is_some_and(|expires_at| expires_at <= now)
    }

    /// Credentials for account-scoped requests.
    pub fn credentials(&self) -> Result<Credentials> {
        self.read_state().session.identity.as_ref()
            .and_then(Identity::credentials)
            .ok_or(Error::NotLoggedIn)
    }

    /// The directory the session is persisted to.
    pub fn data_directory(&self) -> &Path {
        &self.data_directory
    }

    fn read_state(&self) -> RwLockReadGuard<'_, SharedState> {
        read_shared(&self.state)
    }

    fn write_state(&self) -> RwLockWriteGuard<'_, SharedState> {
        write_shared(&self.state)
    }
}

impl From<SessionManagerBuilder> for SessionManager {
    fn from(builder: SessionManagerBuilder) -> Self {
        let client = builder.client
            .unwrap_or_else(|| get_client(builder.user_agent));

        Self {
            state: Arc::new(RwLock::new(SharedState::default())),
            client,
            auth_endpoint: builder.auth_endpoint,
            redirect_uri: builder.redirect_uri,
            data_directory: builder.data_directory,
        }
    }
}
