use dioxus::prelude::*;
use drishti::store::AppStore;

use crate::client::{
    components::{Sidebar, Topbar},
    router::Route,
    util::{actions, AppSource},
};

/// Shell around every signed-in view.
///
/// Sends visitors without a session to the login page and loads zones, units and alerts
/// once when the shell first mounts for a signed-in commander. Clicks and key presses
/// anywhere inside refresh the commander's last activity time.
#[component]
pub fn DashboardLayout() -> Element {
    let mut store = use_context::<Signal<AppStore>>();
    let source = use_context::<AppSource>();
    let nav = navigator();

    use_effect(move || {
        if !store.read().auth.is_authenticated {
            nav.replace(Route::LoginPage {});
        }
    });

    use_effect(move || {
        if store.peek().auth.is_authenticated {
            actions::load_operations(store, source.clone());
        }
    });

    let state = store.read();
    if !state.auth.is_authenticated {
        return rsx!();
    }
    let sidebar_open = state.ui.sidebar_open;
    drop(state);

    let mut record_activity = move || {
        if store.peek().auth.last_active_is_stale() {
            store.write().auth.update_last_active();
        }
    };

    rsx! {
        div {
            class: "min-h-screen flex flex-col",
            onclick: move |_| record_activity(),
            onkeydown: move |_| record_activity(),
            Topbar {}
            div { class: "flex flex-1",
                if sidebar_open {
                    Sidebar {}
                }
                main { class: "flex-1 min-w-0",
                    Outlet::<Route> {}
                }
            }
        }
    }
}
