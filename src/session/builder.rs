use super::{SessionManager, DEFAULT_AUTH_ENDPOINT, DEFAULT_REDIRECT_URI};
use crate::helpers::{default_data_directory, USER_AGENT_STRING};
use std::path::PathBuf;
use reqwest_middleware::ClientWithMiddleware;

/// Builder for constructing a [`SessionManager`].
#[derive(Debug, Clone)]
pub struct SessionManagerBuilder {
    /// Endpoint of the identity provider.
    pub(crate) auth_endpoint: String,
    /// Redirect URI registered with the identity provider.
    pub(crate) redirect_uri: String,
    /// The location to persist the session to.
    pub(crate) data_directory: PathBuf,
    /// Client to use for requests.
    pub(crate) client: Option<ClientWithMiddleware>,
    /// User agent for requests. Only used when no client is given.
    pub(crate) user_agent: &'static str,
}

impl Default for SessionManagerBuilder {
    fn default() -> Self {
        Self {
            auth_endpoint: DEFAULT_AUTH_ENDPOINT.into(),
            redirect_uri: DEFAULT_REDIRECT_URI.into(),
            data_directory: default_data_directory(),
            client: None,
            user_agent: USER_AGENT_STRING,
        }
    }
}

impl SessionManagerBuilder {
    /// Creates a new [`SessionManagerBuilder`].
    pub fn new() -> Self {
        Self::default()
    }

    /// Endpoint of the identity provider.
    pub fn auth_endpoint<T>(mut self, auth_endpoint: T) -> Self
    where
        T: Into<String>,
    {
        self.auth_endpoint = auth_endpoint.into();
        self
    }

    /// Redirect URI registered with the identity provider.
    pub fn redirect_uri<T>(mut self, redirect_uri: T) -> Self
    where
        T: Into<String>,
    {
        self.redirect_uri = redirect_uri.into();
        self
    }

    /// The directory the session is persisted to. Defaults to the platform data directory.
    pub fn data_directory<T>(mut self, data_directory: T) -> Self
    where
        T: Into<PathBuf>,
    {
        self.data_directory = data_directory.into();
        self
    }

    /// Client to use for requests.
    pub fn client(mut self, client: ClientWithMiddleware) -> Self {
        self.client = Some(client);
        self
    }

    /// User agent for requests. Ignored if a client is given.
    pub fn user_agent(mut self, user_agent: &'static str) -> Self {
        self.user_agent = user_agent;
        self
    }

    /// Builds the [`SessionManager`].
    pub fn build(self) -> SessionManager {
        self.into()
    }
}
