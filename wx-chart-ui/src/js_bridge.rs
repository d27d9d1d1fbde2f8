//! Typed wrappers around JS interop via `js_sys::eval()`.
//!
//! The D3.js chart lives in `assets/js/temperature-chart.js` and is embedded
//! at compile time. It is evaluated at global scope once D3 has loaded and
//! its functions are exposed via `window.*`.

use log::error;
use serde::Serialize;
use wasm_bindgen::JsValue;
use wx_data::ChartRow;

static TEMPERATURE_CHART_JS: &str = include_str!("../assets/js/temperature-chart.js");

/// Display options read by `renderTemperatureChart`.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ChartConfig {
    pub title: String,
    pub y_axis_label: String,
    pub max_color: String,
    pub min_color: String,
}

impl ChartConfig {
    /// Max/min temperature lines labelled with the file's unit.
    pub fn temperature(title: &str, unit: &str) -> Self {
        let unit = if unit.is_empty() { "°C" } else { unit };
        Self {
            title: title.to_string(),
            y_axis_label: format!("Temperature ({unit})"),
            max_color: "#e64a19".to_string(),
            min_color: "#1976d2".to_string(),
        }
    }
}

fn describe(err: &JsValue) -> String {
    err.as_string().unwrap_or_else(|| format!("{err:?}"))
}

/// Quote a string as a JS string literal.
fn js_string(value: &str) -> String {
    serde_json::to_string(value).unwrap_or_else(|_| "''".to_string())
}

/// Execute arbitrary JS, wrapping in try/catch so a chart failure never panics.
pub fn call_js(code: &str) {
    let wrapped = format!(
        "try {{ {} }} catch(e) {{ console.warn('WX JS call failed:', e); }}",
        code
    );
    if let Err(e) = js_sys::eval(&wrapped) {
        error!("JS eval failed: {}", describe(&e));
    }
}

/// Load the chart script once D3 is available. Safe to call repeatedly.
pub fn init_charts() {
    let store_js = format!(
        "if (!window.__wxChartsReady && !window.__wxChartScripts) {{ window.__wxChartScripts = {}; }}",
        js_string(TEMPERATURE_CHART_JS)
    );
    call_js(&store_js);

    let init_js = r#"
        (function() {
            if (window.__wxChartsReady || window.__wxChartsPolling) return;
            window.__wxChartsPolling = true;
            var waitForD3 = setInterval(function() {
                if (typeof d3 !== 'undefined') {
                    clearInterval(waitForD3);
                    (0, eval)(window.__wxChartScripts);
                    delete window.__wxChartScripts;
                    if (typeof renderTemperatureChart !== 'undefined') window.renderTemperatureChart = renderTemperatureChart;
                    if (typeof destroyTemperatureChart !== 'undefined') window.destroyTemperatureChart = destroyTemperatureChart;
                    window.__wxChartsReady = true;
                    window.__wxChartsPolling = false;
                    console.log('WX charts initialized');
                }
            }, 100);
        })();
    "#;
    call_js(init_js);
}

/// Polls give up after this many 100 ms ticks (D3 never loaded).
const MAX_POLL_TICKS: u32 = 300;

/// JS that stops the pending render poll for the container, if any.
/// `quoted_id` is already a JS string literal.
fn cancel_poll_js(quoted_id: &str) -> String {
    format!(
        "var polls = window.__wxChartPolls || {{}}; \
         if (polls[{quoted_id}]) {{ clearInterval(polls[{quoted_id}]); delete polls[{quoted_id}]; }}"
    )
}

/// Render the daily temperature chart into `container_id`.
///
/// Polls until D3, the chart script and the container element all exist,
/// since the container is only mounted once the rows have arrived. A new
/// render replaces the container's pending poll.
pub fn render_temperature_chart(container_id: &str, rows: &[ChartRow], config: &ChartConfig) {
    let data_json = serde_json::to_string(rows).unwrap_or_else(|_| "[]".to_string());
    let config_json = serde_json::to_string(config).unwrap_or_else(|_| "{}".to_string());
    let id = js_string(container_id);
    let data = js_string(&data_json);
    let cfg = js_string(&config_json);
    let cancel = cancel_poll_js(&id);
    call_js(&format!(
        r#"
        (function() {{
            {cancel}
            window.__wxChartPolls = window.__wxChartPolls || {{}};
            var ticks = 0;
            var poll = setInterval(function() {{
                ticks += 1;
                var ready = window.__wxChartsReady &&
                    typeof window.renderTemperatureChart !== 'undefined' &&
                    document.getElementById({id});
                if (!ready && ticks < {MAX_POLL_TICKS}) return;
                clearInterval(poll);
                if (window.__wxChartPolls[{id}] === poll) delete window.__wxChartPolls[{id}];
                if (!ready) {{
                    console.warn('[WX] chart not rendered: D3 or container missing');
                    return;
                }}
                try {{
                    window.renderTemperatureChart({id}, {data}, {cfg});
                }} catch(e) {{ console.error('[WX] renderTemperatureChart error:', e); }}
            }}, 100);
            window.__wxChartPolls[{id}] = poll;
        }})();
        "#,
    ));
}

/// Clear whatever chart is drawn in the container and stop its pending render.
pub fn destroy_chart(container_id: &str) {
    let id = js_string(container_id);
    call_js(&format!(
        "{} var el = document.getElementById({id}); if (el) el.innerHTML = '';",
        cancel_poll_js(&id)
    ));
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_js_string_escapes_quotes_and_newlines() {
        assert_eq!(js_string("it's \"x\"\n"), r#""it's \"x\"\n""#);
    }

    #[test]
    fn test_cancel_poll_targets_container() {
        let js = cancel_poll_js(&js_string("temperature-chart"));
        assert!(js.contains(r#"clearInterval(polls["temperature-chart"])"#));
        assert!(js.contains(r#"delete polls["temperature-chart"]"#));
    }

    #[test]
    fn test_temperature_config() {
        let config = ChartConfig::temperature("Daily", "°F");
        assert_eq!(config.y_axis_label, "Temperature (°F)");
        let json = serde_json::to_value(&config).unwrap();
        assert_eq!(json["yAxisLabel"], "Temperature (°F)");
        assert_eq!(json["maxColor"], "#e64a19");

        assert_eq!(
            ChartConfig::temperature("Daily", "").y_axis_label,
            "Temperature (°C)"
        );
    }
}
