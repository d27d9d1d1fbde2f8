//! Card wrapper shared by the three panels.

use dioxus::prelude::*;

#[derive(Props, Clone, PartialEq)]
pub struct PanelProps {
    pub title: String,
    /// Optional control rendered at the right end of the title row
    pub action: Option<Element>,
    pub children: Element,
}

/// White card with a title row.
#[component]
pub fn Panel(props: PanelProps) -> Element {
    rsx! {
        section {
            style: "padding: 16px; background: #fff; border: 1px solid #e5e7eb; border-radius: 8px; box-shadow: 0 4px 12px rgba(0,0,0,0.06);",
            div {
                style: "display: flex; justify-content: space-between; align-items: center; margin-bottom: 12px; gap: 8px;",
                h2 {
                    style: "margin: 0; font-size: 18px; color: #1f2937; overflow: hidden; text-overflow: ellipsis; white-space: nowrap;",
                    title: "{props.title}",
                    "{props.title}"
                }
                if let Some(action) = props.action {
                    {action}
                }
            }
            {props.children}
        }
    }
}
