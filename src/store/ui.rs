//! View state with no asynchronous behaviour.

use crate::model::{
    ui::{FilterCriteria, MapView, Theme, MAX_MAP_ZOOM, MIN_MAP_ZOOM},
    Coordinates,
};

#[derive(Debug, Clone, PartialEq)]
pub struct UiState {
    pub sidebar_open: bool,
    pub selected_zone: Option<String>,
    pub map: MapView,
    pub filter_criteria: FilterCriteria,
    pub theme: Theme,
}

impl Default for UiState {
    fn default() -> Self {
        Self {
            sidebar_open: true,
            selected_zone: None,
            map: MapView::default(),
            filter_criteria: FilterCriteria::default(),
            theme: Theme::default(),
        }
    }
}

impl UiState {
    pub fn toggle_sidebar(&mut self) {
        self.sidebar_open = !self.sidebar_open;
    }

    pub fn set_sidebar_open(&mut self, open: bool) {
        self.sidebar_open = open;
    }

    pub fn set_selected_zone(&mut self, zone_id: Option<String>) {
        self.selected_zone = zone_id;
    }

    pub fn set_map_center(&mut self, center: Coordinates) {
        self.map.center = center;
    }

    /// Zoom is clamped to the range the map supports.
    pub fn set_map_zoom(&mut self, zoom: u8) {
        self.map.zoom = zoom.clamp(MIN_MAP_ZOOM, MAX_MAP_ZOOM);
    }

    pub fn set_map_view(&mut self, center: Coordinates, zoom: u8) {
        self.set_map_center(center);
        self.set_map_zoom(zoom);
    }

    pub fn set_filter_criteria(&mut self, criteria: FilterCriteria) {
        self.filter_criteria = criteria;
    }

    pub fn clear_filter_criteria(&mut self) {
        self.filter_criteria = FilterCriteria::default();
    }

    pub fn set_theme(&mut self, theme: Theme) {
        self.theme = theme;
    }

    pub fn toggle_theme(&mut self) {
        self.theme = self.theme.toggled();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{ui::DEFAULT_MAP_ZOOM, Severity};

    #[test]
    fn starts_with_open_sidebar_and_light_theme() {
        let ui = UiState::default();

        assert!(ui.sidebar_open);
        assert_eq!(ui.theme, Theme::Light);
        assert_eq!(ui.map.zoom, DEFAULT_MAP_ZOOM);
        assert_eq!(ui.map.center, [28.6139, 77.2090]);
    }

    #[test]
    fn toggles_flip_back_and_forth() {
        let mut ui = UiState::default();

        ui.toggle_sidebar();
        ui.toggle_theme();
        assert!(!ui.sidebar_open);
        assert_eq!(ui.theme, Theme::Dark);

        ui.toggle_sidebar();
        ui.toggle_theme();
        assert!(ui.sidebar_open);
        assert_eq!(ui.theme, Theme::Light);
    }

    #[test]
    fn zoom_is_clamped() {
        let mut ui = UiState::default();

        ui.set_map_zoom(30);
        assert_eq!(ui.map.zoom, MAX_MAP_ZOOM);

        ui.set_map_view([0.0, 0.0], 1);
        assert_eq!(ui.map.zoom, MIN_MAP_ZOOM);
        assert_eq!(ui.map.center, [0.0, 0.0]);
    }

    #[test]
    fn filter_criteria_set_and_clear() {
        let mut ui = UiState::default();

        ui.set_filter_criteria(FilterCriteria {
            severity: vec![Severity::High],
            ..Default::default()
        });
        assert_eq!(ui.filter_criteria.severity, vec![Severity::High]);

        ui.clear_filter_criteria();
        assert_eq!(ui.filter_criteria, FilterCriteria::default());
    }
}
