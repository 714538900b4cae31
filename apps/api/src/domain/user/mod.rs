// User domain module

pub mod value_objects;

pub use value_objects::Email;

use serde::{Deserialize, Serialize};

/// A user as known to the identity provider
///
/// The provider owns the record; this service only mirrors the fields it
/// renders.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: String,
    pub email: Email,
    pub full_name: String,
    pub image_url: Option<String>,
}
