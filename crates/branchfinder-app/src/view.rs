//! Rendering collaborator consumed by the controller.

use branchfinder_core::{BranchRef, DetailFields, ViewState};
use branchfinder_map::{DetailMap, MarkerPlan};

/// Presents controller output. Implementations only draw; they never change
/// application state.
pub trait ResultsView {
    /// The active view switched.
    fn render_view_state(&mut self, view: ViewState);

    fn render_summary(&mut self, summary: &str);

    /// Result cards for the list view. Never called with an empty slice.
    fn render_cards(&mut self, branches: &[BranchRef<'_>]);

    /// A notice in place of the cards (no results, load failure).
    fn render_notice(&mut self, message: &str);

    /// The outcome of a marker sync on the main map.
    fn render_map(&mut self, plan: &MarkerPlan);

    fn render_detail(&mut self, index: usize, detail: &DetailFields, map: DetailMap);

    fn close_detail(&mut self);
}
