pub mod alerts;
pub mod analytics;
pub mod dashboard;
pub mod dispatch;
pub mod events;
pub mod login;
pub mod not_found;
pub mod summary;
pub mod upload;
pub mod zones;

pub use alerts::LiveAlerts;
pub use analytics::AnalyticsPanel;
pub use dashboard::MainDashboard;
pub use dispatch::DispatchConsole;
pub use events::EventLog;
pub use login::LoginPage;
pub use not_found::NotFound;
pub use summary::SummaryFeed;
pub use upload::UploadPage;
pub use zones::ZoneMap;
