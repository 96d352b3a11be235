//! Authentication module
//!
//! Supports: anonymous access and HTTP Basic
//!
//! Posterous authenticates with the account's email address and password on
//! every request that needs it. The `Authenticator` attaches them to outgoing
//! requests; endpoints that do not require auth are sent without them.

mod authenticator;
mod types;

pub use authenticator::Authenticator;
pub use types::{AuthConfig, Credentials};

#[cfg(test)]
mod tests;
