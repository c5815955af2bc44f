use branchfinder_core::{AppConfig, LatLng};

/// Fixed map policy values.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MapSettings {
    /// Country-wide view used whenever there is nothing to fit.
    pub default_center: LatLng,
    pub default_zoom: u8,
    /// Close zoom for the single-branch detail map.
    pub detail_zoom: u8,
    /// Filtered counts above this plot no markers.
    pub marker_limit: usize,
    pub bounds_padding: f64,
}

impl Default for MapSettings {
    fn default() -> Self {
        Self {
            default_center: LatLng::new(13.0, 122.0),
            default_zoom: 6,
            detail_zoom: 15,
            marker_limit: 100,
            bounds_padding: 0.1,
        }
    }
}

impl MapSettings {
    #[must_use]
    pub fn from_app_config(config: &AppConfig) -> Self {
        Self {
            default_center: LatLng::new(config.default_center_lat, config.default_center_lng),
            default_zoom: config.default_zoom,
            detail_zoom: config.detail_zoom,
            marker_limit: config.marker_limit,
            bounds_padding: config.bounds_padding,
        }
    }
}
