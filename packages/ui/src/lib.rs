//! This crate contains the page logic and shared UI for the client.
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`controller`] | Page detection, per-page state machines, command dispatch |
//! | [`render`] | Places to view models (pure) |
//! | [`filter`] | Price filter over rendered cards |
//! | [`views`] | Dioxus components mounting the view models |

pub mod browser;
pub mod controller;
pub mod filter;
pub mod render;
pub mod views;

mod client;
pub use client::{make_controller, use_controller, AppController, ClientProvider, PlatformJar};

pub use controller::{
    Command, DetailState, ListingState, ListingView, Outcome, Page, PageController,
};
pub use filter::PriceFilter;
pub use render::{PlaceCard, PlaceDetailsView};
pub use views::{CurrentPage, DetailPage, ListingPage, LoginPage, PlaceCardView, PlaceDetails};
