use dioxus::prelude::*;
use drishti::model::Severity;

/// Inline error next to the control that triggered it, with a dismiss button.
#[component]
pub fn ErrorAlert(message: String, on_dismiss: EventHandler<()>) -> Element {
    rsx!(
        div { role: "alert", class: "alert alert-error alert-soft flex justify-between",
            span { "{message}" }
            button {
                class: "btn btn-ghost btn-xs",
                onclick: move |_| on_dismiss.call(()),
                "Dismiss"
            }
        }
    )
}

#[component]
pub fn LoadingRow(label: &'static str) -> Element {
    rsx!(
        div { class: "flex items-center gap-2 text-sm opacity-70",
            span { class: "loading loading-spinner loading-sm" }
            "{label}"
        }
    )
}

#[component]
pub fn SeverityBadge(severity: Severity) -> Element {
    let class = match severity {
        Severity::Low => "badge-info",
        Severity::Medium => "badge-warning",
        Severity::High => "badge-error",
        Severity::Critical => "badge-error badge-outline font-bold",
    };

    rsx!(
        span { class: "badge badge-sm {class}", "{severity}" }
    )
}
