//! # Place: the listing record shown by the client
//!
//! The API owns places; the client only holds the copy from the most recent
//! fetch. Unknown fields (owner, amenities, reviews) are ignored, and a
//! missing `description` decodes as an empty string since the API treats it
//! as optional.
//!
//! `GET /places` returns a bare array of places, while `GET /places/{id}`
//! wraps the record in a [`PlaceEnvelope`] (`{"place": {...}}`).

use serde::{Deserialize, Serialize};

/// A place as delivered by the API.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Place {
    /// Opaque identifier, used only to build the detail link.
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub description: String,
    /// Price per night, currency-agnostic.
    pub price: f64,
    pub latitude: f64,
    pub longitude: f64,
}

/// Envelope around a single place.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct PlaceEnvelope {
    pub place: Place,
}

impl PlaceEnvelope {
    pub fn into_inner(self) -> Place {
        self.place
    }
}
