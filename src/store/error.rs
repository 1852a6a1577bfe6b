use thiserror::Error;

/// Rejection of an asynchronous store operation.
///
/// The `Display` text is the message a slice stores in its `error` field and the views show
/// next to the triggering control.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum StoreError {
    #[error("Authentication failed")]
    AuthenticationFailed,
    #[error("Logout failed")]
    LogoutFailed,
    #[error("Failed to update FCM token")]
    UpdateFcmToken,
    #[error("Failed to fetch zones")]
    FetchZones,
    /// Unknown zone id or a failed lookup.
    #[error("Failed to fetch zone details")]
    FetchZoneDetails(String),
    #[error("Failed to fetch units")]
    FetchUnits,
    #[error("Failed to dispatch unit")]
    DispatchUnit,
    #[error("Failed to fetch alerts")]
    FetchAlerts,
    #[error("Failed to acknowledge alert")]
    AcknowledgeAlert,
    #[error("Failed to fetch events")]
    FetchEvents,
    #[error("Failed to resolve event")]
    ResolveEvent,
    #[error("Failed to fetch dashboard metrics")]
    FetchMetrics,
    #[error("Failed to fetch analytics data")]
    FetchAnalytics,
    #[error("Failed to fetch summary feed")]
    FetchSummaryFeed,
}
