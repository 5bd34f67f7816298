mod identity_token;

pub use identity_token::{IdentityToken, InvalidIdentityToken};
