use dioxus::prelude::*;
use drishti::{
    model::unit::{Unit, UnitStatus},
    store::AppStore,
};

use crate::client::{
    components::{ErrorAlert, LoadingRow, Page, SeverityBadge},
    util::{actions, AppSource},
};

#[component]
fn UnitRow(unit: Unit, zones: Vec<(String, String)>, on_dispatch: EventHandler<(String, String)>) -> Element {
    let mut target = use_signal(|| zones.first().map(|(id, _)| id.clone()).unwrap_or_default());
    let unit_id = unit.id.clone();
    let assigned = unit.assigned_zone.clone().unwrap_or_else(|| "-".to_string());
    let eta = unit.estimated_arrival.clone().unwrap_or_else(|| "-".to_string());
    let can_dispatch = unit.status != UnitStatus::Offline;

    rsx!(
        tr {
            td { "{unit.name}" }
            td { {unit.unit_type.as_str()} }
            td { span { class: "badge badge-sm", {unit.status.as_str()} } }
            td { "{assigned}" }
            td { class: "text-xs", "{eta}" }
            td {
                div { class: "join",
                    select {
                        class: "select select-sm join-item",
                        value: "{target}",
                        onchange: move |evt| target.set(evt.value()),
                        for (id, name) in zones {
                            option { key: "{id}", value: "{id}", "{name}" }
                        }
                    }
                    button {
                        class: "btn btn-sm btn-primary join-item",
                        disabled: !can_dispatch || target.read().is_empty(),
                        onclick: move |_| on_dispatch.call((unit_id.clone(), target())),
                        "Dispatch"
                    }
                }
            }
        }
    )
}

#[component]
pub fn DispatchConsole() -> Element {
    let mut store = use_context::<Signal<AppStore>>();
    let source = use_context::<AppSource>();

    let state = store.read();
    let rows: Vec<(String, Unit)> = state
        .units
        .units
        .iter()
        .map(|u| (u.id.clone(), u.clone()))
        .collect();
    let recommendations = state.units.recommendations.clone();
    let zones: Vec<(String, String)> = state
        .zones
        .zones
        .iter()
        .map(|z| (z.id.clone(), z.name.clone()))
        .collect();
    let is_loading = state.units.is_loading();
    let error = state.units.error().map(str::to_string);
    let available = state.units.count_with_status(UnitStatus::Available);
    let dispatched = state.units.count_with_status(UnitStatus::Dispatched);
    drop(state);

    let dispatch = use_callback(move |(unit_id, zone_id): (String, String)| {
        actions::dispatch_unit(store, source.clone(), unit_id, zone_id);
    });

    rsx! {
        Title { "Dispatch | Drishti" }
        Page {
            div { class: "flex items-center justify-between",
                h1 { class: "text-2xl", "Dispatch Console" }
                div { class: "flex gap-2",
                    span { class: "badge badge-success", "{available} available" }
                    span { class: "badge badge-info", "{dispatched} dispatched" }
                }
            }
            if let Some(message) = error {
                ErrorAlert {
                    message,
                    on_dismiss: move |_| store.write().units.clear_error(),
                }
            }
            if !recommendations.is_empty() {
                div { class: "card shadow-sm",
                    div { class: "card-body",
                        h2 { class: "card-title", "Recommendations" }
                        ul { class: "list",
                            for (index, rec) in recommendations.into_iter().enumerate() {
                                {
                                    let zone_id = rec.zone_id.clone();
                                    let units = rec
                                        .recommended_units
                                        .iter()
                                        .map(|u| u.name.as_str())
                                        .collect::<Vec<_>>()
                                        .join(", ");

                                    rsx! {
                                        li { key: "{index}-{rec.zone_id}", class: "list-row",
                                            SeverityBadge { severity: rec.priority }
                                            div { class: "flex flex-col",
                                                span { class: "font-semibold", "{rec.zone_id}: {rec.reason}" }
                                                span { class: "text-xs opacity-70",
                                                    "{units} · ~{rec.estimated_response_time} min"
                                                }
                                            }
                                            button {
                                                class: "btn btn-ghost btn-xs",
                                                onclick: move |_| store.write().units.remove_recommendation(&zone_id),
                                                "Dismiss"
                                            }
                                        }
                                    }
                                }
                            }
                        }
                    }
                }
            }
            if is_loading && rows.is_empty() {
                LoadingRow { label: "Loading units" }
            }
            div { class: "overflow-x-auto",
                table { class: "table table-md",
                    thead {
                        tr {
                            th { "Unit" }
                            th { "Type" }
                            th { "Status" }
                            th { "Assigned Zone" }
                            th { "ETA" }
                            th { "Dispatch To" }
                        }
                    }
                    tbody {
                        for (id, unit) in rows {
                            UnitRow {
                                key: "{id}",
                                unit,
                                zones: zones.clone(),
                                on_dispatch: dispatch,
                            }
                        }
                    }
                }
            }
        }
    }
}
