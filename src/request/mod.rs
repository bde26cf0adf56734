//! Request parameter types.

mod credentials;
mod listings;

pub use credentials::Credentials;
pub use listings::{GetListingsOptions, GetListingsOptionsBuilder};
