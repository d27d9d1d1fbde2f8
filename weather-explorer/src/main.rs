//! Weather Explorer Dashboard
//!
//! Fetch weather data for a coordinate and date range, store it on the
//! backend, browse stored files and chart one file's daily temperatures.
//!
//! Layout:
//! - left column: `InputPanel` (store) above `FileBrowser` (list/select)
//! - right column: `VisualizationPanel` (chart + paginated table)
//!
//! The panels only share `AppState`: the selected file, its content, and the
//! refresh signal a successful store bumps to reload the file list.
//!
//! The backend base URL is fixed at build time by `build.rs`
//! (`WX_DEPLOY_PROFILE`, optional `WX_API_BASE_URL`).

use dioxus::prelude::*;
use wx_chart_ui::components::{FileBrowser, InputPanel, VisualizationPanel};
use wx_chart_ui::js_bridge;
use wx_chart_ui::state::AppState;
use wx_gateway::ApiConfig;

const DEPLOY_PROFILE: Option<&str> = option_env!("WX_DEPLOY_PROFILE");
const API_BASE_URL: Option<&str> = option_env!("WX_API_BASE_URL");

fn main() {
    dioxus_logger::init(dioxus_logger::tracing::Level::INFO).expect("failed to init logger");
    log::info!("Starting Weather Explorer ({})", DEPLOY_PROFILE.unwrap_or("local"));
    dioxus::LaunchBuilder::new()
        .with_cfg(dioxus::web::Config::new().rootname("weather-explorer-root"))
        .launch(App);
}

#[component]
fn App() -> Element {
    use_context_provider(|| AppState::new(ApiConfig::resolve(DEPLOY_PROFILE, API_BASE_URL)));

    // Load chart scripts once; rendering polls until they are ready
    use_effect(js_bridge::init_charts);

    rsx! {
        div {
            style: "min-height: 100vh; padding: 16px; background: linear-gradient(135deg, #f9fafb, #ffffff); font-family: system-ui, -apple-system, sans-serif; color: #1f2937;",
            div {
                style: "max-width: 1280px; margin: 0 auto;",
                header {
                    style: "text-align: center; padding: 16px 0; margin-bottom: 24px; border-bottom: 1px solid #bfdbfe;",
                    h1 {
                        style: "margin: 0; font-size: 32px; font-weight: 800; color: #1d4ed8;",
                        "Weather Explorer Dashboard"
                    }
                    p {
                        style: "margin: 4px 0 0 0; font-size: 14px; color: #6b7280;",
                        "Daily temperatures from the Open-Meteo archive"
                    }
                }
                div {
                    style: "display: grid; grid-template-columns: repeat(auto-fit, minmax(320px, 1fr)); gap: 24px; align-items: start;",
                    div {
                        style: "display: flex; flex-direction: column; gap: 24px;",
                        InputPanel {}
                        FileBrowser {}
                    }
                    div {
                        style: "grid-column: span 2; min-width: 0;",
                        VisualizationPanel {}
                    }
                }
            }
        }
    }
}
