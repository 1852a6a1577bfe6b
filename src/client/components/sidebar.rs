use dioxus::prelude::*;
use dioxus_free_icons::icons::fa_solid_icons::{
    FaChartLine, FaGauge, FaListUl, FaMap, FaNewspaper, FaTriangleExclamation, FaTruckMedical,
    FaVideo,
};
use dioxus_free_icons::Icon;

use crate::client::router::Route;

#[component]
fn SidebarLink(to: Route, label: &'static str, children: Element) -> Element {
    rsx!(
        li {
            Link {
                to: to,
                active_class: "menu-active",
                class: "flex gap-2",
                {children}
                "{label}"
            }
        }
    )
}

#[component]
pub fn Sidebar() -> Element {
    rsx! {
        aside {
            class: "w-56 shrink-0 bg-base-200 min-h-full",
            ul { class: "menu w-full",
                SidebarLink { to: Route::MainDashboard {}, label: "Overview",
                    Icon { width: 16, height: 16, icon: FaGauge }
                }
                SidebarLink { to: Route::ZoneMap {}, label: "Zones",
                    Icon { width: 16, height: 16, icon: FaMap }
                }
                SidebarLink { to: Route::DispatchConsole {}, label: "Dispatch",
                    Icon { width: 16, height: 16, icon: FaTruckMedical }
                }
                SidebarLink { to: Route::LiveAlerts {}, label: "Alerts",
                    Icon { width: 16, height: 16, icon: FaTriangleExclamation }
                }
                SidebarLink { to: Route::EventLog {}, label: "Event Log",
                    Icon { width: 16, height: 16, icon: FaListUl }
                }
                SidebarLink { to: Route::SummaryFeed {}, label: "Summaries",
                    Icon { width: 16, height: 16, icon: FaNewspaper }
                }
                SidebarLink { to: Route::AnalyticsPanel {}, label: "Analytics",
                    Icon { width: 16, height: 16, icon: FaChartLine }
                }
                SidebarLink { to: Route::UploadPage {}, label: "Video Upload",
                    Icon { width: 16, height: 16, icon: FaVideo }
                }
            }
        }
    }
}
