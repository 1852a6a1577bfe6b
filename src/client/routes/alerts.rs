use dioxus::prelude::*;
use drishti::{model::alert::Alert, store::AppStore};

use crate::client::{
    components::{ErrorAlert, LoadingRow, Page, SeverityBadge},
    util::{actions, AppSource},
};

#[component]
fn AlertCard(alert: Alert, on_acknowledge: EventHandler<String>) -> Element {
    let alert_id = alert.id.clone();
    let zone = alert.zone_id.clone().unwrap_or_else(|| "All zones".to_string());
    let tone = if alert.acknowledged { "opacity-60" } else { "border-l-4 border-error" };

    rsx!(
        div { class: "card bg-base-200 {tone}",
            div { class: "card-body p-4 gap-1",
                div { class: "flex justify-between items-center gap-2",
                    span { class: "font-semibold", "{alert.title}" }
                    SeverityBadge { severity: alert.severity }
                }
                p { "{alert.message}" }
                div { class: "flex justify-between items-center text-xs opacity-70",
                    span { "{zone} · {alert.timestamp}" }
                    if alert.acknowledged {
                        span {
                            "Acknowledged"
                            if let Some(by) = alert.acknowledged_by.clone() {
                                " by {by}"
                            }
                        }
                    } else {
                        button {
                            class: "btn btn-xs btn-outline",
                            onclick: move |_| on_acknowledge.call(alert_id.clone()),
                            "Acknowledge"
                        }
                    }
                }
            }
        }
    )
}

#[component]
pub fn LiveAlerts() -> Element {
    let mut store = use_context::<Signal<AppStore>>();
    let source = use_context::<AppSource>();

    let state = store.read();
    let alerts: Vec<(String, Alert)> = state
        .alerts
        .alerts()
        .iter()
        .map(|a| (a.id.clone(), a.clone()))
        .collect();
    let unacknowledged = state.alerts.unacknowledged_count();
    let is_loading = state.alerts.is_loading();
    let error = state.alerts.error().map(str::to_string);
    let commander_id = state.auth.commander.as_ref().map(|c| c.id.clone());
    drop(state);

    let acknowledge = use_callback(move |alert_id: String| {
        if let Some(commander_id) = commander_id.clone() {
            actions::acknowledge_alert(store, source.clone(), alert_id, commander_id);
        }
    });

    rsx! {
        Title { "Alerts | Drishti" }
        Page {
            div { class: "flex items-center justify-between",
                h1 { class: "text-2xl", "Live Alerts" }
                span { class: "badge badge-error", "{unacknowledged} unacknowledged" }
            }
            if let Some(message) = error {
                ErrorAlert {
                    message,
                    on_dismiss: move |_| store.write().alerts.clear_error(),
                }
            }
            if is_loading && alerts.is_empty() {
                LoadingRow { label: "Loading alerts" }
            }
            div { class: "flex flex-col gap-2",
                for (id, alert) in alerts {
                    AlertCard { key: "{id}", alert, on_acknowledge: acknowledge }
                }
            }
        }
    }
}
