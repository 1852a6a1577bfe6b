//! Checks applied to a surveillance video before it is sent to the analysis backend.

use thiserror::Error;

use crate::model::upload::UploadResponse;

/// Largest accepted upload, 500 MiB.
pub const MAX_UPLOAD_BYTES: u64 = 500 * 1024 * 1024;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum UploadError {
    #[error("Please select a video file (mp4, avi, etc.).")]
    InvalidFileType(String),
    #[error("Please upload a video smaller than 500 MB.")]
    FileTooLarge(u64),
    /// The backend answered with a non-success status; carries the response body.
    #[error("{0}")]
    Rejected(String),
    #[error("Unable to process video")]
    Request(String),
}

impl UploadError {
    /// Short heading shown above the message.
    pub fn title(&self) -> &'static str {
        match self {
            Self::InvalidFileType(_) => "Invalid file type",
            Self::FileTooLarge(_) => "File too large",
            Self::Rejected(_) | Self::Request(_) => "Upload failed",
        }
    }
}

/// Rejects anything that is not a video or is larger than [`MAX_UPLOAD_BYTES`].
pub fn validate_upload(content_type: &str, size: u64) -> Result<(), UploadError> {
    if !content_type.starts_with("video/") {
        return Err(UploadError::InvalidFileType(content_type.to_string()));
    }

    if size > MAX_UPLOAD_BYTES {
        return Err(UploadError::FileTooLarge(size));
    }

    Ok(())
}

/// Message shown after a successful upload.
pub fn upload_summary(response: &UploadResponse) -> String {
    format!("Extracted {} motion frames", response.frames.len())
}
