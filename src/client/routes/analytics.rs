use dioxus::prelude::*;
use drishti::{
    model::dashboard::{ChartDataPoint, ZoneStatusDistribution},
    store::AppStore,
};

use crate::client::{
    components::{ErrorAlert, LoadingRow, Page},
    util::{actions, AppSource},
};

/// Horizontal bars scaled against the largest value in the series.
#[component]
fn TrendChart(title: &'static str, points: Vec<ChartDataPoint>) -> Element {
    let max = points.iter().map(|p| p.value).fold(0.0_f64, f64::max);

    rsx!(
        div { class: "card shadow-sm",
            div { class: "card-body",
                h2 { class: "card-title", "{title}" }
                if points.is_empty() {
                    p { class: "opacity-60", "No data" }
                }
                for point in points {
                    {
                        let width = if max > 0.0 { point.value / max * 100.0 } else { 0.0 };
                        let label = point.label.clone().unwrap_or_else(|| point.timestamp.clone());

                        rsx! {
                            div { key: "{point.timestamp}", class: "flex items-center gap-2 text-sm",
                                span { class: "w-40 truncate opacity-70", "{label}" }
                                div { class: "flex-1 bg-base-200 rounded h-3",
                                    div {
                                        class: "bg-primary rounded h-3",
                                        style: "width: {width:.0}%",
                                    }
                                }
                                span { class: "w-12 text-right", "{point.value}" }
                            }
                        }
                    }
                }
            }
        }
    )
}

#[component]
fn StatusDistribution(distribution: ZoneStatusDistribution) -> Element {
    rsx!(
        div { class: "card shadow-sm",
            div { class: "card-body",
                h2 { class: "card-title", "Zone Status" }
                div { class: "grid grid-cols-4 gap-2 text-center",
                    div { p { class: "text-2xl", "{distribution.normal}" } p { class: "text-xs", "normal" } }
                    div { p { class: "text-2xl text-secondary", "{distribution.anomaly}" } p { class: "text-xs", "anomaly" } }
                    div { p { class: "text-2xl text-warning", "{distribution.bottleneck}" } p { class: "text-xs", "bottleneck" } }
                    div { p { class: "text-2xl text-error", "{distribution.critical}" } p { class: "text-xs", "critical" } }
                }
            }
        }
    )
}

#[component]
pub fn AnalyticsPanel() -> Element {
    let mut store = use_context::<Signal<AppStore>>();
    let source = use_context::<AppSource>();

    use_effect(move || {
        if store.peek().dashboard.analytics.is_none() {
            actions::refresh_dashboard(store, source.clone());
        }
    });

    let state = store.read();
    let analytics = state.dashboard.analytics.clone();
    let is_loading = state.dashboard.analytics_status.is_loading;
    let error = state.dashboard.analytics_status.error.clone();
    drop(state);

    rsx! {
        Title { "Analytics | Drishti" }
        Page {
            h1 { class: "text-2xl", "Analytics" }
            if let Some(message) = error {
                ErrorAlert {
                    message,
                    on_dismiss: move |_| store.write().dashboard.analytics_status.clear_error(),
                }
            }
            if let Some(analytics) = analytics {
                StatusDistribution { distribution: analytics.zone_status_distribution }
                div { class: "grid md:grid-cols-3 gap-4",
                    TrendChart { title: "Crowd Density", points: analytics.crowd_density_trend }
                    TrendChart { title: "Anomalies", points: analytics.anomaly_trend }
                    TrendChart { title: "Dispatches", points: analytics.dispatch_trend }
                }
            } else if is_loading {
                LoadingRow { label: "Loading analytics" }
            }
        }
    }
}
