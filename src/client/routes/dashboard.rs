use dioxus::prelude::*;
use drishti::{
    model::{dashboard::DashboardMetrics, unit::UnitStatus},
    store::AppStore,
};

use crate::client::{
    components::{ErrorAlert, LoadingRow, Page, SeverityBadge},
    router::Route,
    util::{actions, AppSource},
};

#[component]
fn MetricCard(label: &'static str, value: u32, class: &'static str) -> Element {
    rsx!(
        div { class: "stat bg-base-200 rounded-box",
            div { class: "stat-title", "{label}" }
            div { class: "stat-value {class}", "{value}" }
        }
    )
}

#[component]
fn MetricsRow(metrics: DashboardMetrics) -> Element {
    rsx!(
        div { class: "grid grid-cols-2 md:grid-cols-5 gap-2",
            MetricCard { label: "Zones", value: metrics.total_zones, class: "" }
            MetricCard { label: "Bottlenecks", value: metrics.bottlenecks, class: "text-warning" }
            MetricCard { label: "Anomalies", value: metrics.anomalies, class: "text-secondary" }
            MetricCard { label: "Units Dispatched", value: metrics.units_dispatched, class: "text-info" }
            MetricCard { label: "Active Alerts", value: metrics.active_alerts, class: "text-error" }
        }
        p { class: "text-xs opacity-60", "Updated {metrics.last_updated}" }
    )
}

#[component]
pub fn MainDashboard() -> Element {
    let mut store = use_context::<Signal<AppStore>>();
    let source = use_context::<AppSource>();

    let refresh_source = source.clone();
    use_effect(move || actions::refresh_dashboard(store, refresh_source.clone()));

    let state = store.read();
    let metrics = state.dashboard.metrics.clone();
    let is_loading = state.dashboard.is_loading();
    let error = state.dashboard.error().map(str::to_string);
    let latest = state.dashboard.summary_feed().iter().take(5).cloned().collect::<Vec<_>>();
    let available_units = state.units.count_with_status(UnitStatus::Available);
    let unacknowledged = state.alerts.unacknowledged_count();
    drop(state);

    rsx! {
        Title { "Overview | Drishti" }
        Page {
            div { class: "flex items-center justify-between",
                h1 { class: "text-2xl", "Operations Overview" }
                button {
                    class: "btn btn-outline btn-sm",
                    disabled: is_loading,
                    onclick: move |_| actions::refresh_dashboard(store, source.clone()),
                    "Refresh"
                }
            }
            if let Some(message) = error {
                ErrorAlert {
                    message,
                    on_dismiss: move |_| store.write().dashboard.clear_error(),
                }
            }
            if let Some(metrics) = metrics {
                MetricsRow { metrics }
            } else if is_loading {
                LoadingRow { label: "Loading metrics" }
            }
            div { class: "flex flex-wrap gap-2",
                Link { to: Route::DispatchConsole {}, class: "badge badge-lg badge-info",
                    "{available_units} units available"
                }
                Link { to: Route::LiveAlerts {}, class: "badge badge-lg badge-error",
                    "{unacknowledged} unacknowledged alerts"
                }
            }
            div { class: "card shadow-sm",
                div { class: "card-body",
                    div { class: "flex justify-between items-center",
                        h2 { class: "card-title", "Latest Summaries" }
                        Link { to: Route::SummaryFeed {}, class: "link text-sm", "View all" }
                    }
                    ul { class: "list",
                        for entry in latest {
                            li { key: "{entry.id}", class: "list-row",
                                div { class: "flex flex-col",
                                    span { class: "font-semibold", "{entry.zone_name}" }
                                    span { class: "text-sm opacity-80", "{entry.combined_summary}" }
                                }
                                SeverityBadge { severity: entry.severity }
                            }
                        }
                    }
                }
            }
        }
    }
}
