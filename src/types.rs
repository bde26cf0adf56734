//! Types for common values in game API requests and responses.

/// Uniquely identifies a player account.
pub type AccountId = u64;

// Types internally used by the crate.
use reqwest_middleware::ClientWithMiddleware;

pub(crate) type HttpClient = ClientWithMiddleware;
