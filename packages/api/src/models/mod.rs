//! Data models exchanged with the API.

mod auth;
mod place;

pub use auth::{LoginRequest, LoginResponse};
pub use place::{Place, PlaceEnvelope};
