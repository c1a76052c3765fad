use dioxus::prelude::*;

use crate::browser;
use crate::client::use_controller;
use crate::controller::{Command, ListingView};
use crate::filter::{self, ALL};
use crate::render::PlaceCard;

/// Listing page: login link, price filter and the places list.
///
/// Fetches once on mount when a token is present. A completed fetch resets the
/// filter to `All`.
#[component]
pub fn ListingPage() -> Element {
    let controller = use_controller();
    let mut view = use_signal(|| ListingView::new(controller.initial_listing_state()));

    let loader_controller = controller.clone();
    let _loader = use_resource(move || {
        let controller = loader_controller.clone();
        async move {
            let next = controller.load_listing().await;
            view.write().finish_loading(next);
        }
    });

    let filter_controller = controller.clone();
    let on_filter_change = move |evt: FormEvent| {
        let controller = filter_controller.clone();
        let selection = evt.value();
        spawn(async move {
            let outcome = controller.dispatch(Command::FilterChanged(selection)).await;
            view.write().apply(&outcome);
        });
    };

    let current = view();
    let selection = current.filter.selection();
    let login_page = controller.config().pages.login.clone();
    let login_display = filter::display(current.state.shows_login_link());
    let thresholds = controller.config().filter.thresholds.clone();
    let cards = current.visible_cards();

    rsx! {
        header {
            class: "listing-header",
            a {
                id: "login-link",
                class: "login-button",
                href: "{login_page}",
                style: "display: {login_display};",
                "Login"
            }
        }

        section {
            class: "filter",
            label { r#for: "price-filter", "Max price: " }
            select {
                id: "price-filter",
                value: selection,
                onchange: on_filter_change,
                option { value: ALL, "{ALL}" }
                for threshold in thresholds {
                    option { key: "{threshold}", value: "{threshold}", "{threshold}" }
                }
            }
        }

        section {
            id: "places-list",
            for (card, visible) in cards {
                PlaceCardView { key: "{card.id}", card: card, visible: visible }
            }
        }
    }
}

/// One place in the list. The whole card links to the detail page.
#[component]
pub fn PlaceCardView(card: PlaceCard, visible: bool) -> Element {
    let controller = use_controller();
    let id = card.id.clone();
    let display = filter::display(visible);

    let onclick = move |_| {
        let controller = controller.clone();
        let id = id.clone();
        spawn(async move {
            let outcome = controller.dispatch(Command::ItemClicked(id)).await;
            browser::follow(&outcome);
        });
    };

    rsx! {
        div {
            class: "place",
            style: "cursor: pointer; display: {display};",
            onclick: onclick,
            h3 { "{card.title}" }
            p { "{card.description}" }
            p { class: "place-price", "{card.price}" }
            p { "{card.latitude}" }
            p { "{card.longitude}" }
        }
    }
}
