use dioxus::prelude::*;
use drishti::store::AppStore;

use crate::client::{router::Route, util::AppSource};

#[component]
pub fn App() -> Element {
    let store = use_context_provider(|| Signal::new(AppStore::new()));
    use_context_provider(AppSource::from_build_env);

    let theme = store.read().ui.theme;

    rsx! {
        div {
            "data-theme": theme.as_str(),
            class: "min-h-screen bg-base-100 text-base-content",
            ErrorBoundary {
                handle_error: move |errors: ErrorContext| {
                    let message = errors
                        .error()
                        .map(|err| err.to_string())
                        .unwrap_or_else(|| "An unexpected error occurred".to_string());

                    rsx! {
                        div { class: "min-h-screen flex items-center justify-center p-4",
                            div { class: "card shadow-sm w-full max-w-md",
                                div { class: "card-body gap-3",
                                    h2 { class: "card-title", "Something went wrong" }
                                    p { class: "text-sm opacity-80", "{message}" }
                                    div { class: "card-actions justify-end",
                                        button {
                                            class: "btn btn-outline",
                                            onclick: move |_| errors.clear_errors(),
                                            "Try Again"
                                        }
                                        button {
                                            class: "btn btn-primary",
                                            onclick: move |_| {
                                                let _ = document::eval("window.location.reload()");
                                            },
                                            "Reload Page"
                                        }
                                    }
                                }
                            }
                        }
                    }
                },
                Router::<Route> {}
            }
        }
    }
}
