//! Main-map marker synchronization.
//!
//! [`plan_markers`] is the pure policy: given the filtered results and the
//! criteria that produced them, decide which branches get markers, what the
//! viewport is, and what the info line says. [`MarkerSynchronizer`] applies a
//! plan to the live map, always removing every previous marker before adding
//! the new set.

use branchfinder_core::{BranchRef, FilterCriteria, LatLng, Popup};
use serde::Serialize;

use crate::adapter::{MapAdapter, MapBackend};
use crate::geometry::{Bounds, Viewport};
use crate::settings::MapSettings;

/// Why a plan has the markers it has.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "reason", rename_all = "snake_case")]
pub enum PlanReason {
    /// Nothing is being searched or filtered.
    NoActiveFilters,
    /// More results than the marker limit.
    TooManyResults { count: usize },
    /// Plottable results were given markers (possibly zero of them).
    Plotted,
}

/// A filtered branch that gets a marker.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PlottedBranch {
    /// Position of the branch in the dataset.
    pub index: usize,
    pub point: LatLng,
    pub popup: Popup,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MarkerPlan {
    pub reason: PlanReason,
    pub markers: Vec<PlottedBranch>,
    pub viewport: Viewport,
    pub message: String,
}

/// Decide markers, viewport, and info message for one update.
#[must_use]
pub fn plan_markers(
    filtered: &[BranchRef<'_>],
    criteria: &FilterCriteria,
    settings: &MapSettings,
) -> MarkerPlan {
    let default_view = Viewport::Center {
        center: settings.default_center,
        zoom: settings.default_zoom,
    };

    if !criteria.has_active_clause() {
        return MarkerPlan {
            reason: PlanReason::NoActiveFilters,
            markers: Vec::new(),
            viewport: default_view,
            message: format!(
                "Use search or filters to see branch locations on the map (max {} results)",
                settings.marker_limit
            ),
        };
    }

    if filtered.len() > settings.marker_limit {
        return MarkerPlan {
            reason: PlanReason::TooManyResults {
                count: filtered.len(),
            },
            markers: Vec::new(),
            viewport: default_view,
            message: format!(
                "Too many results ({}) - Please narrow your search to see markers",
                filtered.len()
            ),
        };
    }

    let markers: Vec<PlottedBranch> = filtered
        .iter()
        .filter_map(|r| {
            r.branch.coordinates().map(|point| PlottedBranch {
                index: r.index,
                point,
                popup: Popup::for_marker(r.branch),
            })
        })
        .collect();

    let viewport = Bounds::from_points(markers.iter().map(|m| m.point)).map_or(
        default_view,
        |bounds| Viewport::Fit {
            bounds: bounds.padded(settings.bounds_padding),
        },
    );

    let message = format!(
        "Showing {} branch locations - Click markers for details",
        markers.len()
    );

    MarkerPlan {
        reason: PlanReason::Plotted,
        markers,
        viewport,
        message,
    }
}

type MarkerOf<B> = <<B as MapBackend>::Map as MapAdapter>::Marker;

/// Owns the main map instance and the markers currently attached to it.
pub struct MarkerSynchronizer<B: MapBackend> {
    backend: B,
    settings: MapSettings,
    map: Option<B::Map>,
    markers: Vec<MarkerOf<B>>,
}

impl<B: MapBackend> MarkerSynchronizer<B> {
    pub fn new(backend: B, settings: MapSettings) -> Self {
        Self {
            backend,
            settings,
            map: None,
            markers: Vec::new(),
        }
    }

    /// Create the main map if it does not exist yet.
    ///
    /// Returns `true` only on the call that created it.
    pub fn ensure_map(&mut self) -> bool {
        if self.map.is_some() {
            return false;
        }
        tracing::debug!(
            center = %self.settings.default_center,
            zoom = self.settings.default_zoom,
            "initializing main map"
        );
        self.map = Some(
            self.backend
                .initialize(self.settings.default_center, self.settings.default_zoom),
        );
        true
    }

    /// Rebuild the marker set from `filtered`.
    ///
    /// Every previously attached marker is removed first. Before the map
    /// exists the plan is still computed and returned, but nothing is drawn.
    pub fn sync(&mut self, filtered: &[BranchRef<'_>], criteria: &FilterCriteria) -> MarkerPlan {
        let plan = plan_markers(filtered, criteria, &self.settings);

        let Some(map) = self.map.as_mut() else {
            tracing::debug!("main map not initialized; skipping marker sync");
            return plan;
        };

        for marker in self.markers.drain(..) {
            map.remove_marker(marker);
        }
        for plotted in &plan.markers {
            self.markers.push(map.add_marker(plotted.point, &plotted.popup));
        }
        match plan.viewport {
            Viewport::Center { center, zoom } => map.set_view(center, zoom),
            Viewport::Fit { bounds } => map.fit_bounds(bounds),
        }

        tracing::debug!(
            filtered = filtered.len(),
            markers = self.markers.len(),
            reason = ?plan.reason,
            "synchronized map markers"
        );
        plan
    }

    #[must_use]
    pub fn has_map(&self) -> bool {
        self.map.is_some()
    }

    #[must_use]
    pub fn map(&self) -> Option<&B::Map> {
        self.map.as_ref()
    }

    /// Number of markers currently attached to the main map.
    #[must_use]
    pub fn marker_count(&self) -> usize {
        self.markers.len()
    }

    #[must_use]
    pub fn backend(&self) -> &B {
        &self.backend
    }

    #[must_use]
    pub fn settings(&self) -> &MapSettings {
        &self.settings
    }
}

#[cfg(test)]
#[path = "sync_test.rs"]
mod tests;
