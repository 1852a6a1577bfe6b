use dioxus::prelude::*;

use crate::client::components::{Page, VideoUpload};

#[component]
pub fn UploadPage() -> Element {
    rsx!(
        Title { "Video Upload | Drishti" }
        Page {
            VideoUpload {}
        }
    )
}
