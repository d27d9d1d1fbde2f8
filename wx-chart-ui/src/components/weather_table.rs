//! Paginated table of daily temperatures.

use dioxus::prelude::*;
use wx_data::pager::PAGE_SIZE_OPTIONS;
use wx_data::{ChartRow, Pager};

const CELL_STYLE: &str = "padding: 8px 12px; white-space: nowrap; font-size: 13px; color: #4b5563;";
const HEADER_STYLE: &str = "padding: 8px 12px; text-align: left; white-space: nowrap; font-size: 11px; font-weight: 600; color: #6b7280; text-transform: uppercase; letter-spacing: 0.04em;";
const BUTTON_STYLE: &str = "padding: 4px 8px; margin-left: 6px; border: 1px solid #d1d5db; border-radius: 4px; background: #fff; font-size: 13px;";

#[derive(Props, Clone, PartialEq)]
pub struct WeatherTableProps {
    pub rows: Vec<ChartRow>,
    /// Owned by the parent so it can reset the page when the rows change
    pub pager: Signal<Pager>,
}

/// Page-size selector, Previous/Next controls and the current page of rows.
#[component]
pub fn WeatherTable(props: WeatherTableProps) -> Element {
    let mut pager = props.pager;
    let current = *pager.read();
    let total = props.rows.len();
    let page = current.page();
    let total_pages = current.total_pages(total);
    let unit = props
        .rows
        .first()
        .map(|r| r.unit.clone())
        .filter(|u| !u.is_empty())
        .unwrap_or_else(|| "°C".to_string());
    let headers = [
        "Date".to_string(),
        format!("Max Temp ({unit})"),
        format!("Min Temp ({unit})"),
        format!("Apparent Max ({unit})"),
        format!("Apparent Min ({unit})"),
    ];
    let page_rows = current.slice(&props.rows).to_vec();

    rsx! {
        div {
            style: "margin-top: 24px;",
            h3 { style: "margin: 0 0 12px 0; font-size: 16px;", "Raw Data Table" }

            div {
                style: "display: flex; justify-content: space-between; align-items: center; margin-bottom: 12px; font-size: 13px; flex-wrap: wrap; gap: 8px;",
                label {
                    "Rows per page:"
                    select {
                        style: "margin-left: 8px; padding: 2px 4px;",
                        onchange: move |evt: Event<FormData>| {
                            if let Ok(size) = evt.value().parse::<usize>() {
                                pager.write().set_page_size(size);
                            }
                        },
                        for size in PAGE_SIZE_OPTIONS {
                            option {
                                value: "{size}",
                                selected: size == current.page_size(),
                                "{size}"
                            }
                        }
                    }
                }
                div {
                    span { "Page {page} of {total_pages}" }
                    button {
                        style: BUTTON_STYLE,
                        disabled: !current.has_previous(),
                        onclick: move |_| pager.write().previous(),
                        "Previous"
                    }
                    button {
                        style: BUTTON_STYLE,
                        disabled: !current.has_next(total),
                        onclick: move |_| pager.write().next(total),
                        "Next"
                    }
                }
            }

            div {
                style: "overflow-x: auto; border: 1px solid #e5e7eb; border-radius: 6px;",
                table {
                    style: "min-width: 100%; border-collapse: collapse;",
                    thead {
                        style: "background: #f9fafb;",
                        tr {
                            for header in headers.iter() {
                                th { style: HEADER_STYLE, "{header}" }
                            }
                        }
                    }
                    tbody {
                        for row in page_rows.iter() {
                            tr {
                                key: "{row.date}",
                                style: "border-top: 1px solid #e5e7eb;",
                                td { style: "{CELL_STYLE} font-weight: 500; color: #111827;", "{row.date}" }
                                td { style: CELL_STYLE, "{row.temp_max}" }
                                td { style: CELL_STYLE, "{row.temp_min}" }
                                td { style: CELL_STYLE, "{row.apparent_max}" }
                                td { style: CELL_STYLE, "{row.apparent_min}" }
                            }
                        }
                    }
                }
            }
        }
    }
}
