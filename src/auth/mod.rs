//! OAuth2 client-credentials authentication against the WNS login endpoint.

pub mod credentials;
pub mod session;
pub mod token_manager;

pub use credentials::Credentials;
pub use session::Session;
pub use token_manager::TokenManager;
