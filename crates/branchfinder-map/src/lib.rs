//! Map-side logic: which branches get markers, what the viewport shows, and
//! the lifecycle of the main and detail map instances.
//!
//! Nothing here depends on a concrete mapping library. Rendering goes through
//! the [`MapBackend`] / [`MapAdapter`] capability traits; [`HeadlessBackend`]
//! implements them in memory for tests and terminal use.

pub mod adapter;
pub mod detail;
pub mod geometry;
pub mod headless;
pub mod settings;
pub mod sync;

pub use adapter::{MapAdapter, MapBackend};
pub use detail::{DetailFocus, DetailMap};
pub use geometry::{Bounds, Viewport};
pub use headless::{HeadlessBackend, HeadlessMap, MapEvent, MarkerId};
pub use settings::MapSettings;
pub use sync::{plan_markers, MarkerPlan, MarkerSynchronizer, PlanReason, PlottedBranch};
