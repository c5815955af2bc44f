//! In-memory map backend.
//!
//! Keeps the state a real widget would show (view, live markers, open popup)
//! plus an ordered event log, so marker policy can be checked without a
//! rendering library and the CLI can print what the map would display.

use std::cell::Cell;
use std::collections::BTreeMap;
use std::rc::Rc;

use branchfinder_core::{LatLng, Popup};
use serde::Serialize;

use crate::adapter::{MapAdapter, MapBackend};
use crate::geometry::{Bounds, Viewport};

/// Most recent events a [`HeadlessMap`] keeps.
pub const EVENT_LOG_LIMIT: usize = 1024;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub struct MarkerId(u64);

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum MapEvent {
    SetView { center: LatLng, zoom: u8 },
    FitBounds { bounds: Bounds },
    AddMarker { id: MarkerId, point: LatLng },
    RemoveMarker { id: MarkerId },
    OpenPopup { id: MarkerId },
}

#[derive(Debug, Default)]
struct Ledger {
    created: Cell<usize>,
    destroyed: Cell<usize>,
}

/// Creates [`HeadlessMap`]s and counts their lifecycles.
#[derive(Debug, Clone, Default)]
pub struct HeadlessBackend {
    ledger: Rc<Ledger>,
}

impl HeadlessBackend {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Map instances created so far.
    #[must_use]
    pub fn instances_created(&self) -> usize {
        self.ledger.created.get()
    }

    /// Map instances created and not yet destroyed.
    #[must_use]
    pub fn live_instances(&self) -> usize {
        self.ledger.created.get() - self.ledger.destroyed.get()
    }
}

impl MapBackend for HeadlessBackend {
    type Map = HeadlessMap;

    fn initialize(&mut self, center: LatLng, zoom: u8) -> HeadlessMap {
        self.ledger.created.set(self.ledger.created.get() + 1);
        HeadlessMap {
            ledger: Rc::clone(&self.ledger),
            view: Viewport::Center { center, zoom },
            markers: BTreeMap::new(),
            open_popup: None,
            next_marker: 0,
            events: Vec::new(),
        }
    }
}

#[derive(Debug)]
pub struct HeadlessMap {
    ledger: Rc<Ledger>,
    view: Viewport,
    markers: BTreeMap<MarkerId, (LatLng, Popup)>,
    open_popup: Option<MarkerId>,
    next_marker: u64,
    events: Vec<MapEvent>,
}

impl HeadlessMap {
    #[must_use]
    pub fn view(&self) -> Viewport {
        self.view
    }

    /// Live markers in the order they were added.
    pub fn markers(&self) -> impl Iterator<Item = (MarkerId, LatLng, &Popup)> + '_ {
        self.markers
            .iter()
            .map(|(id, (point, popup))| (*id, *point, popup))
    }

    #[must_use]
    pub fn marker_count(&self) -> usize {
        self.markers.len()
    }

    /// Popup currently shown, if any.
    #[must_use]
    pub fn opened_popup(&self) -> Option<&Popup> {
        self.open_popup
            .and_then(|id| self.markers.get(&id))
            .map(|(_, popup)| popup)
    }

    /// Recorded events, oldest first. Only the last [`EVENT_LOG_LIMIT`] are kept.
    #[must_use]
    pub fn events(&self) -> &[MapEvent] {
        &self.events
    }

    fn record(&mut self, event: MapEvent) {
        if self.events.len() == EVENT_LOG_LIMIT {
            self.events.remove(0);
        }
        self.events.push(event);
    }
}

impl MapAdapter for HeadlessMap {
    type Marker = MarkerId;

    fn set_view(&mut self, center: LatLng, zoom: u8) {
        self.view = Viewport::Center { center, zoom };
        self.record(MapEvent::SetView { center, zoom });
    }

    fn fit_bounds(&mut self, bounds: Bounds) {
        self.view = Viewport::Fit { bounds };
        self.record(MapEvent::FitBounds { bounds });
    }

    fn add_marker(&mut self, point: LatLng, popup: &Popup) -> MarkerId {
        let id = MarkerId(self.next_marker);
        self.next_marker += 1;
        self.markers.insert(id, (point, popup.clone()));
        self.record(MapEvent::AddMarker { id, point });
        id
    }

    fn remove_marker(&mut self, marker: MarkerId) {
        self.markers.remove(&marker);
        if self.open_popup == Some(marker) {
            self.open_popup = None;
        }
        self.record(MapEvent::RemoveMarker { id: marker });
    }

    fn open_popup(&mut self, marker: &MarkerId) {
        if self.markers.contains_key(marker) {
            self.open_popup = Some(*marker);
            self.record(MapEvent::OpenPopup { id: *marker });
        }
    }

    fn destroy(self) {
        self.ledger.destroyed.set(self.ledger.destroyed.get() + 1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn popup(title: &str) -> Popup {
        Popup {
            title: title.to_string(),
            rows: Vec::new(),
        }
    }

    #[test]
    fn backend_counts_created_and_destroyed_instances() {
        let mut backend = HeadlessBackend::new();
        let first = backend.initialize(LatLng::new(13.0, 122.0), 6);
        let _second = backend.initialize(LatLng::new(13.0, 122.0), 6);
        assert_eq!(backend.instances_created(), 2);
        assert_eq!(backend.live_instances(), 2);
        first.destroy();
        assert_eq!(backend.live_instances(), 1);
    }

    #[test]
    fn markers_are_tracked_until_removed() {
        let mut map = HeadlessBackend::new().initialize(LatLng::new(13.0, 122.0), 6);
        let a = map.add_marker(LatLng::new(14.5, 121.0), &popup("A"));
        let b = map.add_marker(LatLng::new(10.3, 123.9), &popup("B"));
        assert_eq!(map.marker_count(), 2);
        map.remove_marker(a);
        let remaining: Vec<MarkerId> = map.markers().map(|(id, _, _)| id).collect();
        assert_eq!(remaining, vec![b]);
    }

    #[test]
    fn open_popup_requires_live_marker() {
        let mut map = HeadlessBackend::new().initialize(LatLng::new(13.0, 122.0), 6);
        let a = map.add_marker(LatLng::new(14.5, 121.0), &popup("A"));
        map.open_popup(&a);
        assert_eq!(map.opened_popup().map(|p| p.title.as_str()), Some("A"));
        map.remove_marker(a);
        assert!(map.opened_popup().is_none());
        map.open_popup(&a);
        assert!(map.opened_popup().is_none());
    }

    #[test]
    fn view_follows_last_call() {
        let mut map = HeadlessBackend::new().initialize(LatLng::new(13.0, 122.0), 6);
        let bounds = Bounds {
            south: 10.0,
            west: 120.0,
            north: 14.0,
            east: 122.0,
        };
        map.fit_bounds(bounds);
        assert_eq!(map.view(), Viewport::Fit { bounds });
        map.set_view(LatLng::new(13.0, 122.0), 6);
        assert_eq!(map.events().len(), 2);
    }

    #[test]
    fn event_log_keeps_only_most_recent_events() {
        let mut map = HeadlessBackend::new().initialize(LatLng::new(13.0, 122.0), 6);
        for _ in 0..EVENT_LOG_LIMIT {
            let id = map.add_marker(LatLng::new(14.5, 121.0), &popup("A"));
            map.remove_marker(id);
        }
        assert_eq!(map.events().len(), EVENT_LOG_LIMIT);
        assert_eq!(
            map.events().last(),
            Some(&MapEvent::RemoveMarker {
                id: MarkerId(EVENT_LOG_LIMIT as u64 - 1)
            })
        );
        assert_eq!(
            map.events().first(),
            Some(&MapEvent::AddMarker {
                id: MarkerId(EVENT_LOG_LIMIT as u64 / 2),
                point: LatLng::new(14.5, 121.0)
            })
        );
        assert_eq!(map.marker_count(), 0);
    }
}
