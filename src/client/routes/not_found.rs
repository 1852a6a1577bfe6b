use dioxus::prelude::*;

use crate::client::{components::Page, router::Route};

#[component]
pub fn NotFound(segments: Vec<String>) -> Element {
    let path = segments.join("/");

    rsx!(
        Title { "Not Found | Drishti" }
        Page { class: "items-center justify-center min-h-screen",
            p { class: "text-2xl", "Page not found" }
            p { class: "opacity-70", "/{path}" }
            Link { to: Route::MainDashboard {}, class: "btn btn-primary", "Back to dashboard" }
        }
    )
}
