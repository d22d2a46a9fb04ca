pub mod auth;
pub mod cors;

pub use auth::{AuthContext, BearerToken, JwtAuth};
pub use cors::create_cors;
