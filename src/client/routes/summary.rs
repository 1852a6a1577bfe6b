use dioxus::prelude::*;
use drishti::store::AppStore;

use crate::client::{
    components::{ErrorAlert, LoadingRow, Page, SeverityBadge},
    util::{actions, AppSource},
};

#[component]
pub fn SummaryFeed() -> Element {
    let mut store = use_context::<Signal<AppStore>>();
    let source = use_context::<AppSource>();

    use_effect(move || {
        if store.peek().dashboard.summary_feed().is_empty() {
            actions::refresh_dashboard(store, source.clone());
        }
    });

    let state = store.read();
    let feed = state.dashboard.summary_feed().to_vec();
    let is_loading = state.dashboard.summary_status.is_loading;
    let error = state.dashboard.summary_status.error.clone();
    drop(state);

    rsx! {
        Title { "Summaries | Drishti" }
        Page {
            h1 { class: "text-2xl", "Summary Feed" }
            if let Some(message) = error {
                ErrorAlert {
                    message,
                    on_dismiss: move |_| store.write().dashboard.summary_status.clear_error(),
                }
            }
            if is_loading && feed.is_empty() {
                LoadingRow { label: "Loading summaries" }
            }
            div { class: "overflow-x-auto",
                table { class: "table table-md",
                    thead {
                        tr {
                            th { "Time" }
                            th { "Zone" }
                            th { "Summary" }
                            th { "Density" }
                            th { "Anomalies" }
                            th { "Severity" }
                            th { "Status" }
                        }
                    }
                    tbody {
                        for entry in feed {
                            tr { key: "{entry.id}",
                                td { class: "text-xs whitespace-nowrap", "{entry.timestamp}" }
                                td { "{entry.zone_name}" }
                                td { "{entry.combined_summary}" }
                                td { "{entry.crowd_density}%" }
                                td { "{entry.anomaly_count}" }
                                td { SeverityBadge { severity: entry.severity } }
                                td { "{entry.status}" }
                            }
                        }
                    }
                }
            }
        }
    }
}
