use dioxus::prelude::*;

use crate::client::{
    components::DashboardLayout,
    routes::{
        AnalyticsPanel, DispatchConsole, EventLog, LiveAlerts, LoginPage, MainDashboard, NotFound,
        SummaryFeed, UploadPage, ZoneMap,
    },
};

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    #[route("/login")]
    LoginPage {},

    #[layout(DashboardLayout)]

        #[route("/")]
        MainDashboard {},

        #[route("/zones")]
        ZoneMap {},

        #[route("/dispatch")]
        DispatchConsole {},

        #[route("/alerts")]
        LiveAlerts {},

        #[route("/events")]
        EventLog {},

        #[route("/summary")]
        SummaryFeed {},

        #[route("/analytics")]
        AnalyticsPanel {},

        #[route("/upload")]
        UploadPage {},

    #[end_layout]

    #[route("/:..segments")]
    NotFound { segments: Vec<String> },
}
