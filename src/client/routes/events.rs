use dioxus::prelude::*;
use drishti::{
    model::{
        event::{EventFilters, EventLogEntry, EventQuery, EventType},
        Severity,
    },
    store::AppStore,
    util::time::range_from_inputs,
};

use crate::client::{
    components::{ErrorAlert, LoadingRow, Page, SeverityBadge},
    util::{
        actions::{self, EVENT_PAGE_SIZE},
        AppSource,
    },
};

fn toggled<T: PartialEq + Copy>(values: &[T], value: T) -> Vec<T> {
    if values.contains(&value) {
        values.iter().copied().filter(|v| *v != value).collect()
    } else {
        let mut values = values.to_vec();
        values.push(value);
        values
    }
}

fn chip_class(active: bool, tone: &str) -> String {
    if active {
        format!("btn btn-xs {}", tone)
    } else {
        "btn btn-xs btn-outline".to_string()
    }
}

#[component]
fn FilterBar(filters: EventFilters, zones: Vec<String>) -> Element {
    let mut store = use_context::<Signal<AppStore>>();

    let mut update = move |change: Box<dyn FnOnce(&mut EventFilters)>| {
        let mut filters = store.peek().events.filters().clone();
        change(&mut filters);
        store.write().events.set_filters(filters);
    };

    let zone_value = filters.zone_id.clone().unwrap_or_default();
    let resolved_value = match filters.resolved {
        None => "all",
        Some(false) => "open",
        Some(true) => "resolved",
    };
    // Raw input values; the filter only holds a range once both bounds are entered.
    let mut from = use_signal(String::new);
    let mut to = use_signal(String::new);
    let mut set_range = move || {
        let range = range_from_inputs(&from.peek(), &to.peek());
        update(Box::new(move |f| f.time_range = range));
    };

    rsx!(
        div { class: "card bg-base-200",
            div { class: "card-body p-4 gap-3",
                div { class: "flex flex-wrap gap-4 items-end",
                    label { class: "flex flex-col gap-1 text-sm",
                        "Zone"
                        select {
                            class: "select select-sm",
                            value: "{zone_value}",
                            onchange: move |evt| {
                                let value = evt.value();
                                update(Box::new(move |f| {
                                    f.zone_id = Some(value).filter(|v| !v.is_empty());
                                }));
                            },
                            option { value: "", "All zones" }
                            for zone in zones {
                                option { key: "{zone}", value: "{zone}", "{zone}" }
                            }
                        }
                    }
                    label { class: "flex flex-col gap-1 text-sm",
                        "State"
                        select {
                            class: "select select-sm",
                            value: "{resolved_value}",
                            onchange: move |evt| {
                                let resolved = match evt.value().as_str() {
                                    "open" => Some(false),
                                    "resolved" => Some(true),
                                    _ => None,
                                };
                                update(Box::new(move |f| f.resolved = resolved));
                            },
                            option { value: "all", "All" }
                            option { value: "open", "Open" }
                            option { value: "resolved", "Resolved" }
                        }
                    }
                    label { class: "flex flex-col gap-1 text-sm",
                        "From (UTC)"
                        input {
                            class: "input input-sm",
                            r#type: "datetime-local",
                            value: "{from}",
                            onchange: move |evt| {
                                from.set(evt.value());
                                set_range();
                            },
                        }
                    }
                    label { class: "flex flex-col gap-1 text-sm",
                        "To (UTC)"
                        input {
                            class: "input input-sm",
                            r#type: "datetime-local",
                            value: "{to}",
                            onchange: move |evt| {
                                to.set(evt.value());
                                set_range();
                            },
                        }
                    }
                    button {
                        class: "btn btn-sm btn-ghost",
                        disabled: filters.is_empty() && from.read().is_empty() && to.read().is_empty(),
                        onclick: move |_| {
                            from.set(String::new());
                            to.set(String::new());
                            store.write().events.clear_filters();
                        },
                        "Clear filters"
                    }
                }
                div { class: "flex flex-wrap gap-2",
                    for severity in Severity::ALL {
                        button {
                            key: "{severity}",
                            class: chip_class(filters.severity.contains(&severity), "btn-primary"),
                            onclick: move |_| update(Box::new(move |f| f.severity = toggled(&f.severity, severity))),
                            "{severity}"
                        }
                    }
                }
                div { class: "flex flex-wrap gap-2",
                    for event_type in EventType::ALL {
                        button {
                            key: "{event_type:?}",
                            class: chip_class(filters.event_type.contains(&event_type), "btn-secondary"),
                            onclick: move |_| update(Box::new(move |f| f.event_type = toggled(&f.event_type, event_type))),
                            {event_type.as_str()}
                        }
                    }
                }
            }
        }
    )
}

#[component]
fn EventRow(event: EventLogEntry, on_resolve: EventHandler<String>) -> Element {
    let event_id = event.id.clone();
    let unit = event.unit_id.clone().unwrap_or_else(|| "-".to_string());

    rsx!(
        tr {
            td { class: "text-xs whitespace-nowrap", "{event.timestamp}" }
            td { "{event.zone_id}" }
            td { {event.event_type.as_str()} }
            td { SeverityBadge { severity: event.severity } }
            td { "{event.description}" }
            td { "{unit}" }
            td {
                if event.resolved {
                    span { class: "text-xs opacity-70",
                        "Resolved"
                        if let Some(at) = event.resolved_at.clone() {
                            " {at}"
                        }
                    }
                } else {
                    button {
                        class: "btn btn-xs btn-outline",
                        onclick: move |_| on_resolve.call(event_id.clone()),
                        "Resolve"
                    }
                }
            }
        }
    )
}

#[component]
pub fn EventLog() -> Element {
    let mut store = use_context::<Signal<AppStore>>();
    let source = use_context::<AppSource>();

    let query = EventQuery {
        limit: Some(EVENT_PAGE_SIZE),
        zone_id: None,
    };

    let load_source = source.clone();
    let load_query = query.clone();
    use_effect(move || {
        if store.peek().events.events().is_empty() {
            actions::fetch_events(store, load_source.clone(), load_query.clone());
        }
    });

    let state = store.read();
    let rows: Vec<(String, EventLogEntry)> = state
        .events
        .filtered_events()
        .iter()
        .map(|e| (e.id.clone(), e.clone()))
        .collect();
    let shown = rows.len();
    let total = state.events.events().len();
    let filters = state.events.filters().clone();
    let zones: Vec<String> = state.zones.zones.iter().map(|z| z.id.clone()).collect();
    let is_loading = state.events.is_loading();
    let error = state.events.error().map(str::to_string);
    drop(state);

    let refresh_source = source.clone();
    let resolve = use_callback(move |event_id: String| {
        actions::resolve_event(store, source.clone(), event_id);
    });

    rsx! {
        Title { "Event Log | Drishti" }
        Page {
            div { class: "flex items-center justify-between",
                h1 { class: "text-2xl", "Event Log" }
                div { class: "flex items-center gap-2",
                    span { class: "text-sm opacity-70", "{shown} of {total}" }
                    button {
                        class: "btn btn-outline btn-sm",
                        disabled: is_loading,
                        onclick: move |_| actions::fetch_events(store, refresh_source.clone(), query.clone()),
                        "Refresh"
                    }
                }
            }
            FilterBar { filters, zones }
            if let Some(message) = error {
                ErrorAlert {
                    message,
                    on_dismiss: move |_| store.write().events.clear_error(),
                }
            }
            if is_loading && total == 0 {
                LoadingRow { label: "Loading events" }
            }
            div { class: "overflow-x-auto",
                table { class: "table table-sm",
                    thead {
                        tr {
                            th { "Time" }
                            th { "Zone" }
                            th { "Type" }
                            th { "Severity" }
                            th { "Description" }
                            th { "Unit" }
                            th { "" }
                        }
                    }
                    tbody {
                        for (id, event) in rows {
                            EventRow { key: "{id}", event, on_resolve: resolve }
                        }
                    }
                }
            }
        }
    }
}
