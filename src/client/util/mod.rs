pub mod actions;
pub mod source;
#[cfg(feature = "web")]
pub mod upload;

pub use source::AppSource;
