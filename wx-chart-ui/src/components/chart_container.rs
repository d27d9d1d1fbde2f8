//! Fixed-height container the D3 chart renders into.

use dioxus::prelude::*;

#[derive(Props, Clone, PartialEq)]
pub struct ChartContainerProps {
    /// DOM id passed to the chart bridge
    pub id: String,
    #[props(default = 300)]
    pub height: u32,
}

#[component]
pub fn ChartContainer(props: ChartContainerProps) -> Element {
    rsx! {
        div {
            id: "{props.id}",
            style: "width: 100%; height: {props.height}px;",
        }
    }
}
