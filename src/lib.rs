//! A client for the MLB The Show companion web API.
//!
//! [`SessionManager`] signs a player in through the identity provider and keeps the session
//! across launches. [`GameAPI`] makes requests for collections, inventory, the marketplace,
//! wallet balance and packs. Every response is checked against a declared [`schema`] before it
//! is returned, so a change in the API's format surfaces as [`Error::Validation`] rather than a
//! half-filled value.
//!
//! ```no_run
//! use theshow_companion::{GameAPI, SessionManager};
//!
//! # async fn run() -> Result<(), theshow_companion::Error> {
//! let session = SessionManager::builder().build();
//!
//! if !session.rehydrate().await {
//!     session.authenticate_with_redirect("com.mlb.xbl.app://redirect?code=...").await?;
//! }
//!
//! let api = GameAPI::builder().build();
//! let stubs = api.get_stubs(&session.credentials()?).await?;
//!
//! println!("{stubs} stubs");
//! # Ok(())
//! # }
//! ```

pub mod api;
pub mod enums;
pub mod error;
pub mod request;
pub mod response;
pub mod schema;
pub mod session;
pub mod types;

mod helpers;
mod serialize;
#[cfg(test)]
mod testing;

pub use api::{GameAPI, GameAPIBuilder};
pub use error::{Error, FileError, ParameterError, Result};
pub use request::{Credentials, GetListingsOptions};
pub use schema::{Shape, ValidationReport};
pub use session::{AuthOutcome, Identity, SessionManager, SessionManagerBuilder, SessionState};

pub use reqwest;
pub use reqwest_middleware;
