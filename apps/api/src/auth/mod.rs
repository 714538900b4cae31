// Session verification for tokens issued by the external identity provider.
// This service never issues sessions in production; it only checks them.

pub mod error;
pub mod jwt;
pub mod public_routes;
pub mod session;

pub use error::AuthError;
pub use public_routes::PublicRoutes;
pub use session::Session;
