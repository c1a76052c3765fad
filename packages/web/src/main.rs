use dioxus::prelude::*;

use ui::{ClientProvider, CurrentPage};

fn main() {
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    rsx! {
        document::Title { "HBnB" }

        ClientProvider {
            config_file: include_str!("../hbnb.toml"),
            CurrentPage {}
        }

        style {
            r#"
            body {{
                font-family: -apple-system, BlinkMacSystemFont, "Segoe UI", Helvetica, Arial, sans-serif;
                margin: 0;
                padding: 1rem 2rem;
                color: #37352f;
            }}

            #places-list {{
                display: grid;
                grid-template-columns: repeat(auto-fill, minmax(240px, 1fr));
                gap: 1rem;
            }}

            .place {{
                border: 1px solid #e3e2e0;
                border-radius: 8px;
                padding: 1rem;
            }}

            .place:hover {{
                background-color: #f7f6f3;
            }}

            .filter {{
                margin: 1rem 0;
            }}
            "#
        }
    }
}
