use dioxus::prelude::*;

use crate::browser;
use crate::client::use_controller;
use crate::controller::Page;

mod listing;
pub use listing::{ListingPage, PlaceCardView};

mod place_detail;
pub use place_detail::{DetailPage, PlaceDetails};

mod login;
pub use login::LoginPage;

/// Mount the view for whichever page the browser loaded.
#[component]
pub fn CurrentPage() -> Element {
    let controller = use_controller();
    let pathname = browser::pathname();

    match controller.page(&pathname) {
        Page::Listing => rsx! { ListingPage {} },
        Page::Detail => rsx! { DetailPage {} },
        Page::Login => rsx! { LoginPage {} },
    }
}
