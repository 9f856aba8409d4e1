use dioxus::prelude::*;

use crate::vm::{DonutRingVm, SummaryVm};

#[component]
pub fn SummaryPanel(summary: SummaryVm, on_restart: EventHandler<()>) -> Element {
    rsx! {
        div { class: "summary",
            h2 { "Quiz Summary" }
            DonutChart { ring: summary.ring.clone(), label: summary.ratio_label.clone() }
            p { class: "summary__score", "{summary.score_label}" }
            p { class: "summary__message", "{summary.message}" }
            button {
                class: "summary__restart",
                r#type: "button",
                onclick: move |_| on_restart.call(()),
                "Restart"
            }
        }
    }
}

#[component]
fn DonutChart(ring: DonutRingVm, label: String) -> Element {
    let dash = ring.dash_array();

    rsx! {
        div { class: "donut",
            svg { view_box: "0 0 100 100",
                circle {
                    class: "donut__track",
                    cx: "50",
                    cy: "50",
                    r: "{ring.radius}",
                    fill: "none",
                    stroke_width: "10",
                }
                // Starts at 12 o'clock.
                circle {
                    class: "donut__fill",
                    cx: "50",
                    cy: "50",
                    r: "{ring.radius}",
                    fill: "none",
                    stroke_width: "10",
                    stroke_dasharray: "{dash}",
                    transform: "rotate(-90 50 50)",
                }
            }
            span { class: "donut__label", "{label}" }
        }
    }
}
