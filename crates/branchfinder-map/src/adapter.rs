//! Capability surface a mapping widget has to provide.

use branchfinder_core::{LatLng, Popup};

use crate::geometry::Bounds;

/// One live map instance.
pub trait MapAdapter {
    /// Handle to a marker attached to this map.
    type Marker;

    fn set_view(&mut self, center: LatLng, zoom: u8);

    /// Show exactly `bounds`. Any padding has already been applied.
    fn fit_bounds(&mut self, bounds: Bounds);

    fn add_marker(&mut self, point: LatLng, popup: &Popup) -> Self::Marker;

    fn remove_marker(&mut self, marker: Self::Marker);

    fn open_popup(&mut self, marker: &Self::Marker);

    /// Tear the instance down, releasing every marker and layer it holds.
    fn destroy(self)
    where
        Self: Sized,
    {
    }
}

/// Creates map instances.
pub trait MapBackend {
    type Map: MapAdapter;

    fn initialize(&mut self, center: LatLng, zoom: u8) -> Self::Map;
}
