use dioxus::prelude::*;

use crate::browser;
use crate::client::use_controller;
use crate::controller::DetailState;
use crate::render::PlaceDetailsView;

/// Detail page for the place named by the `id` query parameter.
#[component]
pub fn DetailPage() -> Element {
    let controller = use_controller();
    let mut state = use_signal(|| controller.initial_detail_state(browser::href().as_deref()));

    let loader_controller = controller.clone();
    let _loader = use_resource(move || {
        let controller = loader_controller.clone();
        async move {
            // No id means no request at all.
            let pending = state.peek().pending_id().map(str::to_string);
            if let Some(id) = pending {
                let next = controller.load_detail(&id).await;
                state.set(next);
            }
        }
    });

    rsx! {
        section {
            id: "place-details",
            class: "place-details",
            {
                match state() {
                    DetailState::Loaded(view) => rsx! {
                        PlaceDetails { view: view }
                    },
                    DetailState::Loading { .. } => rsx! {
                        p { "Loading..." }
                    },
                    other => {
                        let message = other.message().unwrap_or_default();
                        rsx! {
                            p { "{message}" }
                        }
                    }
                }
            }
        }
    }
}

/// Labeled fields of one place.
#[component]
pub fn PlaceDetails(view: PlaceDetailsView) -> Element {
    rsx! {
        h1 { "{view.title}" }
        for field in view.fields.iter() {
            p {
                key: "{field.label}",
                strong { "{field.label}:" }
                " {field.value}"
            }
        }
    }
}
