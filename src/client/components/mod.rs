pub mod feedback;
pub mod layout;
pub mod page;
pub mod sidebar;
pub mod topbar;
pub mod video_upload;

pub use feedback::{ErrorAlert, LoadingRow, SeverityBadge};
pub use layout::DashboardLayout;
pub use page::Page;
pub use sidebar::Sidebar;
pub use topbar::Topbar;
pub use video_upload::VideoUpload;
