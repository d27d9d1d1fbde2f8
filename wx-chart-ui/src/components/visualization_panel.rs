//! Chart and table for the selected file.

use crate::components::{ChartContainer, ErrorDisplay, LoadingSpinner, Panel, WeatherTable};
use crate::js_bridge::{self, ChartConfig};
use crate::remote::{launch, use_remote};
use crate::state::AppState;
use dioxus::prelude::*;
use wx_data::{Pager, RawWeatherData};
use wx_gateway::FileContent;

/// DOM id for the D3 chart container div.
const CHART_CONTAINER_ID: &str = "temperature-chart";

/// Loads the selected file and renders its daily series.
///
/// Data flow:
/// 1. Selecting a file clears the previous rows in `AppState` and bumps the selection.
/// 2. Effect 1 fetches the file's content; on success it is stored in `AppState`.
/// 3. Rows are derived from the stored content; Effect 2 redraws the chart
///    and resets the table to page 1 whenever they change.
#[component]
pub fn VisualizationPanel() -> Element {
    let mut state = use_context::<AppState>();
    let content = use_remote::<RawWeatherData>();
    let mut pager = use_signal(Pager::default);

    let selection = use_memo(move || {
        let view = state.view.read();
        view.selected_file()
            .map(|file| (file.to_string(), view.selection_count()))
    });
    let rows = use_memo(move || state.view.read().chart_rows());

    // ─── Effect 1: fetch content on every selection ───
    use_effect(move || {
        let Some((file, _)) = selection() else {
            return;
        };
        launch(content, state.gateway(), FileContent(file), move |data: &RawWeatherData| {
            state.show_weather(data.clone());
        });
    });

    // ─── Effect 2: new row set -> first page, redraw chart ───
    use_effect(move || {
        let current = rows.read();
        pager.write().reset();

        if current.is_empty() {
            js_bridge::destroy_chart(CHART_CONTAINER_ID);
            return;
        }
        js_bridge::init_charts();
        let unit = current.first().map(|r| r.unit.as_str()).unwrap_or_default();
        let config = ChartConfig::temperature("Daily Temperature", unit);
        js_bridge::render_temperature_chart(CHART_CONTAINER_ID, current.as_slice(), &config);
    });

    let Some(file) = state.view.read().selected_file().map(str::to_string) else {
        return rsx! {
            div {
                style: "padding: 32px; background: #fff; border: 1px solid #e5e7eb; border-radius: 8px; min-height: 300px; display: flex; align-items: center; justify-content: center;",
                p {
                    style: "color: #6b7280; font-size: 16px; text-align: center;",
                    "Select a file from the left panel to view and visualize the weather data."
                }
            }
        };
    };

    let remote = content.read();
    let loading = remote.is_loading();
    let current_rows = rows.read().clone();

    rsx! {
        Panel {
            title: format!("Visualization: {file}"),

            if loading {
                LoadingSpinner { message: "Loading data... (fetching stored file)".to_string() }
            }
            if let Some(err) = remote.error() {
                ErrorDisplay { label: "Error loading data".to_string(), message: err.to_string() }
            }

            if !loading && !current_rows.is_empty() {
                div {
                    style: "margin-bottom: 16px;",
                    h3 { style: "margin: 0 0 12px 0; font-size: 16px;", "Daily Temperature Chart" }
                    ChartContainer { id: CHART_CONTAINER_ID.to_string(), height: 300 }
                }
                WeatherTable { rows: current_rows.clone(), pager }
            }

            if remote.data().is_some() && current_rows.is_empty() {
                p {
                    style: "padding: 16px; text-align: center; color: #6b7280;",
                    "No weather data available for this file."
                }
            }
        }
    }
}
