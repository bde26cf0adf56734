use super::{GameAPI, DEFAULT_GAME_API_BASE, DEFAULT_PUBLIC_API_BASE};
use crate::helpers::USER_AGENT_STRING;
use reqwest_middleware::ClientWithMiddleware;

/// Builder for constructing a [`GameAPI`].
#[derive(Debug, Clone)]
pub struct GameAPIBuilder {
    /// Base URL for account-scoped endpoints.
    pub(crate) game_api_base: String,
    /// Base URL for public endpoints.
    pub(crate) public_api_base: String,
    /// Client to use for requests.
    pub(crate) client: Option<ClientWithMiddleware>,
    /// User agent for requests. Only used when no client is given.
    pub(crate) user_agent: &'static str,
}

impl Default for GameAPIBuilder {
    fn default() -> Self {
        Self {
            game_api_base: DEFAULT_GAME_API_BASE.into(),
            public_api_base: DEFAULT_PUBLIC_API_BASE.into(),
            client: None,
            user_agent: USER_AGENT_STRING,
        }
    }
}

impl GameAPIBuilder {
    /// Creates a new [`GameAPIBuilder`].
    pub fn new() -> Self {
        Self::default()
    }

    /// Base URL for account-scoped endpoints. Defaults to `https://mlb25.theshow.com/apis/app`.
    pub fn game_api_base<T>(mut self, base: T) -> Self
    where
        T: Into<String>,
    {
        self.game_api_base = base.into();
        self
    }

    /// Base URL for public endpoints. Defaults to `https://mlb25.theshow.com/apis`.
    pub fn public_api_base<T>(mut self, base: T) -> Self
    where
        T: Into<String>,
    {
        self.public_api_base = base.into();
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

    /// Builds the [`GameAPI`].
    pub fn build(self) -> GameAPI {
        self.into()
    }
}
