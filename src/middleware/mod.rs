mod admin_auth;
mod token_auth;

pub use admin_auth::*;
pub use token_auth::*;
