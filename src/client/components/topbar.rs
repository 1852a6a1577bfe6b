use dioxus::prelude::*;
use dioxus_free_icons::icons::fa_solid_icons::{FaBars, FaBell, FaMoon, FaRightFromBracket, FaSun};
use dioxus_free_icons::Icon;
use drishti::{model::ui::Theme, store::AppStore};

use crate::client::{
    router::Route,
    util::{actions, AppSource},
};

#[component]
pub fn Topbar() -> Element {
    let mut store = use_context::<Signal<AppStore>>();
    let source = use_context::<AppSource>();

    let state = store.read();
    let commander = state.auth.commander.clone();
    let unacknowledged = state.alerts.unacknowledged_count();
    let theme = state.ui.theme;
    let logout_error = state.auth.error().map(str::to_string);
    drop(state);

    rsx! {
        div {
            class: "navbar bg-base-200 sticky top-0 z-10",
            div {
                class: "navbar-start gap-2",
                button {
                    class: "btn btn-ghost btn-square",
                    onclick: move |_| store.write().ui.toggle_sidebar(),
                    Icon { width: 20, height: 20, icon: FaBars }
                }
                div { class: "flex items-center gap-2",
                    p { class: "text-xl", "Drishti" }
                    p { class: "text-xs", "Operations" }
                }
            }
            div {
                class: "navbar-end gap-2",
                if let Some(message) = logout_error {
                    span { class: "text-error text-sm", "{message}" }
                }
                Link {
                    to: Route::LiveAlerts {},
                    class: "btn btn-ghost indicator",
                    if unacknowledged > 0 {
                        span { class: "indicator-item badge badge-error badge-sm", "{unacknowledged}" }
                    }
                    Icon { width: 20, height: 20, icon: FaBell }
                }
                button {
                    class: "btn btn-ghost btn-square",
                    onclick: move |_| store.write().ui.toggle_theme(),
                    if theme == Theme::Light {
                        Icon { width: 20, height: 20, icon: FaMoon }
                    } else {
                        Icon { width: 20, height: 20, icon: FaSun }
                    }
                }
                if let Some(commander) = commander {
                    div { class: "flex flex-col items-end leading-tight",
                        span { class: "font-semibold", "{commander.name}" }
                        span { class: "text-xs opacity-70", "{commander.rank} · {commander.division}" }
                    }
                }
                button {
                    class: "btn btn-outline flex gap-2",
                    onclick: move |_| actions::logout(store, source.clone()),
                    Icon { width: 16, height: 16, icon: FaRightFromBracket }
                    "Logout"
                }
            }
        }
    }
}
