use dioxus::prelude::*;
use drishti::{
    model::{
        ui::{MAX_MAP_ZOOM, MIN_MAP_ZOOM},
        zone::{Zone, ZoneDetails, ZoneStatus},
    },
    store::AppStore,
};

use crate::client::{
    components::{ErrorAlert, LoadingRow, Page, SeverityBadge},
    util::{actions, AppSource},
};

fn status_class(status: ZoneStatus) -> &'static str {
    match status {
        ZoneStatus::Normal => "badge-success",
        ZoneStatus::Anomaly => "badge-secondary",
        ZoneStatus::Bottleneck => "badge-warning",
        ZoneStatus::Critical => "badge-error",
    }
}

#[component]
fn ZoneCard(zone: Zone, selected: bool, on_select: EventHandler<String>) -> Element {
    let border = if selected { "border-primary" } else { "border-base-300" };
    let badge = status_class(zone.status);
    let position = format!("{:.4}, {:.4}", zone.coordinates[0], zone.coordinates[1]);
    let id = zone.id.clone();

    rsx!(
        button {
            class: "card border-2 {border} text-left hover:bg-base-200",
            onclick: move |_| on_select.call(id.clone()),
            div { class: "card-body p-4 gap-2",
                div { class: "flex justify-between items-center",
                    span { class: "font-semibold", "{zone.name}" }
                    span { class: "badge badge-sm {badge}", "{zone.status}" }
                }
                progress {
                    class: "progress w-full",
                    value: "{zone.crowd_density}",
                    max: "100",
                }
                div { class: "flex justify-between text-xs opacity-70",
                    span { "Density {zone.crowd_density}%" }
                    span { "{position}" }
                }
            }
        }
    )
}

#[component]
fn ZoneDetailsPanel(details: ZoneDetails, on_close: EventHandler<()>) -> Element {
    let zone = details.zone.clone();

    rsx!(
        div { class: "card shadow-sm",
            div { class: "card-body gap-3",
                div { class: "flex justify-between items-center",
                    h2 { class: "card-title", "{zone.name}" }
                    button { class: "btn btn-ghost btn-sm", onclick: move |_| on_close.call(()), "Close" }
                }
                p { "{details.summary}" }
                if let Some(area) = zone.area {
                    p { class: "text-sm opacity-70", "Area {area} m²" }
                }
                h3 { class: "font-semibold", "Recent Events" }
                ul { class: "list",
                    for event in details.events {
                        li { key: "{event.id}", class: "list-row",
                            span { class: "text-xs opacity-60", "{event.timestamp}" }
                            span { "{event.description}" }
                            SeverityBadge { severity: event.severity }
                        }
                    }
                }
                h3 { class: "font-semibold", "Nearby Units" }
                ul { class: "list",
                    for unit in details.nearby_units {
                        li { key: "{unit.id}", class: "list-row",
                            span { "{unit.name}" }
                            span { class: "badge badge-sm", {unit.status.as_str()} }
                        }
                    }
                }
            }
        }
    )
}

#[component]
pub fn ZoneMap() -> Element {
    let mut store = use_context::<Signal<AppStore>>();
    let source = use_context::<AppSource>();

    let state = store.read();
    let zones = state.zones.zones.clone();
    let selected = state.zones.selected_zone.clone();
    let selected_id = state.ui.selected_zone.clone();
    let is_loading = state.zones.is_loading();
    let error = state.zones.error().map(str::to_string);
    let map = state.ui.map;
    drop(state);

    let centre = format!("{:.4}, {:.4}", map.center[0], map.center[1]);
    let cards: Vec<(String, Zone, bool)> = zones
        .into_iter()
        .map(|zone| {
            let selected = selected_id.as_deref() == Some(zone.id.as_str());
            (zone.id.clone(), zone, selected)
        })
        .collect();

    let select_zone = use_callback(move |zone_id: String| {
        store.write().ui.set_selected_zone(Some(zone_id.clone()));
        actions::fetch_zone_details(store, source.clone(), zone_id);
    });

    rsx! {
        Title { "Zones | Drishti" }
        Page {
            div { class: "flex items-center justify-between",
                h1 { class: "text-2xl", "Zones" }
                div { class: "join",
                    button {
                        class: "btn btn-sm join-item",
                        disabled: map.zoom <= MIN_MAP_ZOOM,
                        onclick: move |_| {
                            let zoom = store.peek().ui.map.zoom.saturating_sub(1);
                            store.write().ui.set_map_zoom(zoom);
                        },
                        "−"
                    }
                    span { class: "btn btn-sm join-item no-animation", "Zoom {map.zoom}" }
                    button {
                        class: "btn btn-sm join-item",
                        disabled: map.zoom >= MAX_MAP_ZOOM,
                        onclick: move |_| {
                            let zoom = store.peek().ui.map.zoom.saturating_add(1);
                            store.write().ui.set_map_zoom(zoom);
                        },
                        "+"
                    }
                }
            }
            p { class: "text-xs opacity-60", "Centre {centre}" }
            if let Some(message) = error {
                ErrorAlert {
                    message,
                    on_dismiss: move |_| store.write().zones.clear_error(),
                }
            }
            if is_loading && cards.is_empty() {
                LoadingRow { label: "Loading zones" }
            }
            div { class: "grid md:grid-cols-2 xl:grid-cols-3 gap-3",
                for (id, zone, selected) in cards {
                    ZoneCard {
                        key: "{id}",
                        zone,
                        selected,
                        on_select: select_zone,
                    }
                }
            }
            if let Some(details) = selected {
                ZoneDetailsPanel {
                    details,
                    on_close: move |_| {
                        let mut state = store.write();
                        state.zones.clear_selected_zone();
                        state.ui.set_selected_zone(None);
                    },
                }
            }
        }
    }
}
