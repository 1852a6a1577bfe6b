use dioxus::prelude::*;
use drishti::store::AppStore;

use crate::client::{
    components::ErrorAlert,
    router::Route,
    util::{actions, AppSource},
};

#[component]
pub fn LoginPage() -> Element {
    let mut store = use_context::<Signal<AppStore>>();
    let source = use_context::<AppSource>();
    let nav = navigator();

    let mut email = use_signal(String::new);
    let mut password = use_signal(String::new);

    use_effect(move || {
        if store.read().auth.is_authenticated {
            nav.replace(Route::MainDashboard {});
        }
    });

    let state = store.read();
    let is_loading = state.auth.is_loading();
    let error = state.auth.error().map(str::to_string);
    drop(state);

    rsx! {
        Title { "Login | Drishti" }
        Meta {
            name: "description",
            content: "Drishti operations dashboard for crowd monitoring and incident response."
        }
        div { class: "min-h-screen flex items-center justify-center p-4",
            form {
                class: "card shadow-sm w-full max-w-sm",
                onsubmit: move |evt| {
                    evt.prevent_default();
                    actions::login(store, source.clone(), email(), password());
                },
                div { class: "card-body gap-3",
                    div { class: "flex items-center gap-2",
                        p { class: "text-2xl", "Drishti" }
                        p { class: "text-xs", "Commander sign in" }
                    }
                    if let Some(message) = error {
                        ErrorAlert {
                            message,
                            on_dismiss: move |_| store.write().auth.clear_error(),
                        }
                    }
                    fieldset { class: "fieldset",
                        label { class: "label", "Email" }
                        input {
                            class: "input w-full",
                            r#type: "email",
                            value: "{email}",
                            oninput: move |evt| email.set(evt.value()),
                        }
                        label { class: "label", "Password" }
                        input {
                            class: "input w-full",
                            r#type: "password",
                            value: "{password}",
                            oninput: move |evt| password.set(evt.value()),
                        }
                    }
                    button {
                        class: "btn btn-primary",
                        r#type: "submit",
                        disabled: is_loading,
                        if is_loading {
                            span { class: "loading loading-spinner loading-sm" }
                        }
                        "Sign in"
                    }
                }
            }
        }
    }
}
