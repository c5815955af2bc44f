//! Single-branch map shown in the detail panel.
//!
//! Each focus builds a fresh map instance; the previous one is always
//! destroyed first. The detail map never touches the main map.

use branchfinder_core::{Branch, LatLng, Popup};

use crate::adapter::{MapAdapter, MapBackend};

/// Outcome of focusing a branch.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DetailMap {
    /// The branch has no usable coordinates; the map panel is hidden.
    Hidden,
    Shown { center: LatLng, zoom: u8 },
}

pub struct DetailFocus<B: MapBackend> {
    backend: B,
    zoom: u8,
    map: Option<B::Map>,
}

impl<B: MapBackend> DetailFocus<B> {
    pub fn new(backend: B, zoom: u8) -> Self {
        Self {
            backend,
            zoom,
            map: None,
        }
    }

    /// Show `branch` on a new detail map with its popup open.
    pub fn focus(&mut self, branch: &Branch) -> DetailMap {
        self.teardown();

        let Some(point) = branch.coordinates() else {
            tracing::debug!(
                name = branch.name.as_deref().unwrap_or_default(),
                "branch has no usable coordinates; hiding detail map"
            );
            return DetailMap::Hidden;
        };

        let mut map = self.backend.initialize(point, self.zoom);
        let marker = map.add_marker(point, &Popup::for_detail(branch));
        map.open_popup(&marker);
        self.map = Some(map);

        DetailMap::Shown {
            center: point,
            zoom: self.zoom,
        }
    }

    /// Close the panel, destroying its map if one is open.
    pub fn close(&mut self) {
        self.teardown();
    }

    #[must_use]
    pub fn is_open(&self) -> bool {
        self.map.is_some()
    }

    #[must_use]
    pub fn map(&self) -> Option<&B::Map> {
        self.map.as_ref()
    }

    #[must_use]
    pub fn backend(&self) -> &B {
        &self.backend
    }

    fn teardown(&mut self) {
        if let Some(map) = self.map.take() {
            map.destroy();
        }
    }
}
