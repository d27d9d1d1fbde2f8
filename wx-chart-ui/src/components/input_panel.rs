//! Query form that asks the backend to fetch and store a weather file.

use crate::components::{ErrorDisplay, Panel};
use crate::remote::{launch, use_remote};
use crate::state::AppState;
use dioxus::prelude::*;
use wx_data::{QueryField, QueryForm};
use wx_gateway::StoreWeather;

const INPUT_STYLE: &str =
    "padding: 8px; border: 1px solid #d1d5db; border-radius: 4px; font-size: 14px; min-width: 0;";

/// Coordinates and date range form. A successful store bumps the
/// file-list refresh signal.
#[component]
pub fn InputPanel() -> Element {
    let mut state = use_context::<AppState>();
    let mut query_form = use_signal(QueryForm::default);
    let mut store = use_remote::<String>();

    let on_submit = move |evt: FormEvent| {
        evt.prevent_default();
        let parsed = query_form.read().to_query();
        match parsed {
            Ok(query) => launch(store, state.gateway(), StoreWeather(query), move |_| {
                state.file_stored();
            }),
            Err(e) => store.write().reject(e.into()),
        }
    };

    let remote = store.read();
    let loading = remote.is_loading();
    let button_style = if loading {
        "grid-column: span 2; padding: 8px; border: none; border-radius: 4px; color: #fff; font-weight: bold; background: #6b7280; cursor: not-allowed;"
    } else {
        "grid-column: span 2; padding: 8px; border: none; border-radius: 4px; color: #fff; font-weight: bold; background: #2563eb; cursor: pointer;"
    };

    rsx! {
        Panel {
            title: "Fetch & Store Data".to_string(),
            form {
                style: "display: grid; grid-template-columns: 1fr 1fr; gap: 12px;",
                onsubmit: on_submit,
                for field in QueryField::ALL {
                    input {
                        key: "{field.name()}",
                        r#type: field.input_type(),
                        name: field.name(),
                        placeholder: field.label(),
                        title: field.label(),
                        step: "any",
                        required: true,
                        style: INPUT_STYLE,
                        value: query_form.read().value(field).to_string(),
                        oninput: move |evt: FormEvent| query_form.write().set(field, evt.value()),
                    }
                }
                button {
                    r#type: "submit",
                    disabled: loading,
                    style: button_style,
                    if loading { "Fetching & Storing..." } else { "Fetch & Store Data" }
                }
            }

            if let Some(err) = remote.error() {
                ErrorDisplay {
                    message: match err.status() {
                        Some(status) => format!("({status}) {err}"),
                        None => err.to_string(),
                    },
                }
            }
            if let Some(file) = remote.data() {
                p {
                    style: "margin: 12px 0 0 0; padding: 8px; background: #E8F5E9; color: #2E7D32; border: 1px solid #A5D6A7; border-radius: 4px; font-size: 14px; word-break: break-all;",
                    "Success! File stored: "
                    strong { "{file}" }
                }
            }
        }
    }
}
