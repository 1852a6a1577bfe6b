use dioxus_logger::tracing;
use drishti::{
    model::upload::{UploadMeta, UploadResponse},
    store::upload::UploadError,
};
use reqwasm::http::Request;
use web_sys::{Blob, BlobPropertyBag, FormData};

/// Analysis backend receiving uploads, fixed at build time.
pub const BACKEND_URL: &str = match option_env!("BACKEND_URL") {
    Some(url) => url,
    None => "http://localhost:8000",
};

fn request_error<E: std::fmt::Debug>(context: &str, err: E) -> UploadError {
    let message = format!("{}: {:?}", context, err);
    tracing::error!("{}", message);

    UploadError::Request(message)
}

/// Posts a video and its metadata to `{BACKEND_URL}/upload` as multipart form data.
///
/// # Returns
/// - `Ok(UploadResponse)` - Backend accepted the video
/// - `Err(UploadError::Rejected)` - Non-success status; carries the response body
/// - `Err(UploadError::Request)` - The request could not be built or sent, or the response
///   was not valid JSON
pub async fn upload_video(
    file_name: &str,
    content_type: &str,
    bytes: &[u8],
    meta: &UploadMeta,
) -> Result<UploadResponse, UploadError> {
    let parts = js_sys::Array::new();
    parts.push(&js_sys::Uint8Array::from(bytes));

    let options = BlobPropertyBag::new();
    options.set_type(content_type);

    let blob = Blob::new_with_u8_array_sequence_and_options(&parts, &options)
        .map_err(|e| request_error("Failed to read video", e))?;

    let form = FormData::new().map_err(|e| request_error("Failed to build form", e))?;
    form.append_with_blob_and_filename("video", &blob, file_name)
        .and_then(|_| form.append_with_str("camera_id", &meta.camera_id))
        .and_then(|_| form.append_with_str("location", &meta.location))
        .and_then(|_| form.append_with_str("zone_id", &meta.zone_id))
        .map_err(|e| request_error("Failed to build form", e))?;

    let response = Request::post(&format!("{}/upload", BACKEND_URL.trim_end_matches('/')))
        .body(form)
        .send()
        .await
        .map_err(|e| {
            tracing::error!("Failed to send upload: {}", e);
            UploadError::Request(e.to_string())
        })?;

    if !response.ok() {
        let body = response
            .text()
            .await
            .unwrap_or_else(|_| format!("Upload failed with status {}", response.status()));

        return Err(UploadError::Rejected(body));
    }

    response.json::<UploadResponse>().await.map_err(|e| {
        tracing::error!("Failed to parse upload response: {}", e);
        UploadError::Request(e.to_string())
    })
}
