//! List of stored weather files.

use crate::components::{ErrorDisplay, Panel};
use crate::remote::{launch, use_remote};
use crate::state::AppState;
use dioxus::prelude::*;
use log::info;
use wx_data::FileMetadata;
use wx_gateway::ListFiles;

/// Stored files, reloaded on mount, on the Refresh button and whenever the
/// refresh signal moves. Clicking an entry selects it for visualization.
#[component]
pub fn FileBrowser() -> Element {
    let mut state = use_context::<AppState>();
    let files = use_remote::<Vec<FileMetadata>>();
    let refresh = use_memo(move || state.view.read().refresh_signal());

    use_effect(move || {
        info!("Loading stored files (refresh {})", refresh());
        launch(files, state.gateway(), ListFiles, |_| {});
    });

    let on_refresh = move |_: MouseEvent| launch(files, state.gateway(), ListFiles, |_| {});

    let selected = state.view.read().selected_file().map(str::to_string);
    let remote = files.read();
    let loading = remote.is_loading();

    rsx! {
        Panel {
            title: "Stored Files".to_string(),
            action: rsx! {
                button {
                    style: "background: none; border: none; color: #2563eb; font-size: 14px; cursor: pointer; padding: 4px;",
                    disabled: loading,
                    onclick: on_refresh,
                    if loading { "Refreshing..." } else { "Refresh" }
                }
            },

            if let Some(err) = remote.error() {
                ErrorDisplay { message: err.to_string() }
            }
            if loading {
                p { style: "color: #6b7280; font-size: 14px;", "Loading files..." }
            }
            if let Some(list) = remote.data() {
                if list.is_empty() {
                    p { style: "color: #6b7280; font-size: 14px;", "No stored files found." }
                }
                ul {
                    style: "list-style: none; margin: 0; padding: 0; max-height: 24rem; overflow-y: auto; display: flex; flex-direction: column; gap: 8px;",
                    for file in list.iter() {
                        FileEntry {
                            key: "{file.name}",
                            file: file.clone(),
                            selected: selected.as_deref() == Some(file.name.as_str()),
                            on_select: move |name: String| state.select_file(name),
                        }
                    }
                }
            }
        }
    }
}

#[derive(Props, Clone, PartialEq)]
struct FileEntryProps {
    file: FileMetadata,
    selected: bool,
    on_select: EventHandler<String>,
}

#[component]
fn FileEntry(props: FileEntryProps) -> Element {
    let style = if props.selected {
        "cursor: pointer; padding: 8px 10px; border: 1px solid #3b82f6; border-radius: 6px; background: #dbeafe; font-weight: 600;"
    } else {
        "cursor: pointer; padding: 8px 10px; border: 1px solid #e5e7eb; border-radius: 6px; background: #fff;"
    };
    let name = props.file.name.clone();
    let details = format!("{} | {}", props.file.created_label(), props.file.size_label());

    rsx! {
        li {
            style: "{style}",
            onclick: move |_| props.on_select.call(name.clone()),
            p {
                style: "margin: 0; font-size: 14px; color: #1f2937; overflow: hidden; text-overflow: ellipsis; white-space: nowrap;",
                title: "{props.file.name}",
                "{props.file.name}"
            }
            p {
                style: "margin: 2px 0 0 0; font-size: 12px; color: #6b7280; font-weight: normal;",
                "{details}"
            }
        }
    }
}
