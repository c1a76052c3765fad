//! # API crate: client for the HBnB places API
//!
//! Everything the frontend needs to talk to the remote REST API: the wire
//! models, the error taxonomy, and an HTTP client.
//!
//! ## Modules
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`client`] | [`PlacesApi`] trait and its reqwest-backed implementation [`ApiClient`] |
//! | [`error`] | [`ApiError`], the single error type every call returns |
//! | [`models`] | `Place`, login request/response and the single-place envelope |
//!
//! ## Endpoints consumed
//!
//! | Operation | Method | Path | Auth |
//! |-----------|--------|------|------|
//! | [`login`](PlacesApi::login) | POST | `/auth/login` | none |
//! | [`list_places`](PlacesApi::list_places) | GET | `/places` | Bearer |
//! | [`get_place`](PlacesApi::get_place) | GET | `/places/{id}` | Bearer (optional) |
//!
//! Calls are independent: no retries, no timeouts, no caching.

pub mod client;
pub mod error;
pub mod models;

pub use client::{ApiClient, PlacesApi};
pub use error::ApiError;
pub use models::{LoginRequest, LoginResponse, Place, PlaceEnvelope};
