use dioxus::prelude::*;
use dioxus_free_icons::icons::fa_solid_icons::FaVideo;
use dioxus_free_icons::Icon;
use drishti::{model::upload::UploadMeta, store::upload::validate_upload};

#[cfg(feature = "web")]
use drishti::store::upload::{upload_summary, UploadError};

#[derive(Debug, Clone, PartialEq)]
enum UploadNotice {
    Success(String),
    Failure { title: &'static str, message: String },
}

/// Uploads a surveillance video with its camera, location and zone for frame extraction.
#[component]
pub fn VideoUpload() -> Element {
    let mut meta = use_signal(UploadMeta::default);
    let mut uploading = use_signal(|| false);
    let mut notice = use_signal(|| None::<UploadNotice>);

    let on_file = move |evt: FormEvent| async move {
        let Some(file) = evt.files().into_iter().next() else {
            return;
        };

        let content_type = file.content_type().unwrap_or_default();
        if let Err(err) = validate_upload(&content_type, file.size()) {
            notice.set(Some(UploadNotice::Failure {
                title: err.title(),
                message: err.to_string(),
            }));
            return;
        }

        notice.set(None);

        #[cfg(feature = "web")]
        {
            uploading.set(true);

            let result = match file.read_bytes().await {
                Ok(bytes) => {
                    let meta = meta.read().clone();
                    crate::client::util::upload::upload_video(
                        &file.name(),
                        &content_type,
                        &bytes,
                        &meta,
                    )
                    .await
                }
                Err(e) => Err(UploadError::Request(e.to_string())),
            };

            uploading.set(false);

            notice.set(Some(match result {
                Ok(response) => UploadNotice::Success(upload_summary(&response)),
                Err(err) => UploadNotice::Failure {
                    title: err.title(),
                    message: err.to_string(),
                },
            }));
        }

        #[cfg(not(feature = "web"))]
        notice.set(Some(UploadNotice::Failure {
            title: "Upload failed",
            message: "Video upload is only available in the browser".to_string(),
        }));
    };

    let current = meta.read().clone();

    rsx! {
        div { class: "card shadow-sm w-full max-w-xl",
            div { class: "card-body gap-3",
                h2 { class: "card-title flex gap-2",
                    Icon { width: 20, height: 20, icon: FaVideo }
                    "Upload Surveillance Video"
                }
                fieldset { class: "fieldset",
                    label { class: "label", "Camera" }
                    input {
                        class: "input",
                        value: "{current.camera_id}",
                        oninput: move |evt| meta.write().camera_id = evt.value(),
                    }
                    label { class: "label", "Location" }
                    input {
                        class: "input",
                        value: "{current.location}",
                        oninput: move |evt| meta.write().location = evt.value(),
                    }
                    label { class: "label", "Zone" }
                    input {
                        class: "input",
                        value: "{current.zone_id}",
                        oninput: move |evt| meta.write().zone_id = evt.value(),
                    }
                    label { class: "label", "Video" }
                    input {
                        r#type: "file",
                        class: "file-input",
                        accept: "video/*",
                        disabled: uploading(),
                        onchange: on_file,
                    }
                }
                if uploading() {
                    div { class: "flex items-center gap-2",
                        span { class: "loading loading-spinner loading-sm" }
                        "Processing video..."
                    }
                }
                {
                    match notice() {
                        Some(UploadNotice::Success(message)) => rsx! {
                            div { role: "alert", class: "alert alert-success",
                                span { class: "font-semibold", "Upload complete" }
                                span { "{message}" }
                            }
                        },
                        Some(UploadNotice::Failure { title, message }) => rsx! {
                            div { role: "alert", class: "alert alert-error",
                                span { class: "font-semibold", "{title}" }
                                span { "{message}" }
                            }
                        },
                        None => rsx! {},
                    }
                }
            }
        }
    }
}
