//! Login page view with the email/password form.

use dioxus::prelude::*;

use crate::browser;
use crate::client::use_controller;
use crate::controller::{Command, Outcome};

/// Login page component.
///
/// On success the token is stored and the browser goes to the listing page.
/// On failure an alert is shown and the form stays usable.
#[component]
pub fn LoginPage() -> Element {
    let controller = use_controller();
    let mut email = use_signal(String::new);
    let mut password = use_signal(String::new);
    let mut loading = use_signal(|| false);

    let handle_login = move |evt: FormEvent| {
        evt.prevent_default();
        let controller = controller.clone();
        spawn(async move {
            loading.set(true);
            let outcome = controller
                .dispatch(Command::LoginRequested {
                    email: email(),
                    password: password(),
                })
                .await;
            if let Outcome::Alert(_) = outcome {
                loading.set(false);
            }
            browser::follow(&outcome);
        });
    };

    rsx! {
        div {
            class: "login-container",
            style: "display: flex; flex-direction: column; align-items: center; justify-content: center; min-height: 100vh; padding: 2rem;",

            h1 { "Login" }

            form {
                id: "login-form",
                onsubmit: handle_login,
                style: "display: flex; flex-direction: column; gap: 0.75rem; width: 100%; max-width: 320px;",

                label { r#for: "email", "Email" }
                input {
                    id: "email",
                    name: "email",
                    r#type: "email",
                    required: true,
                    value: email(),
                    oninput: move |evt: FormEvent| email.set(evt.value()),
                }

                label { r#for: "password", "Password" }
                input {
                    id: "password",
                    name: "password",
                    r#type: "password",
                    required: true,
                    value: password(),
                    oninput: move |evt: FormEvent| password.set(evt.value()),
                }

                button {
                    r#type: "submit",
                    disabled: loading(),
                    if loading() { "Logging in..." } else { "Login" }
                }
            }
        }
    }
}
