//! The view state machine.
//!
//! `List` is the initial state. Toggling alternates between `List` and `Map`.
//! Entering `Map` creates the main map once and then always re-syncs markers.
//! A criteria change re-filters the dataset and refreshes only the active view.

use branchfinder_core::{
    filter_branches, Branch, BranchRef, DetailFields, FilterCriteria, ViewState,
};
use branchfinder_map::{DetailFocus, MapBackend, MapSettings, MarkerSynchronizer};

use crate::command::Command;
use crate::error::AppError;
use crate::summary::{results_summary, LOAD_ERROR_MESSAGE, NO_RESULTS_MESSAGE};
use crate::view::ResultsView;

pub struct Controller<V: ResultsView, B: MapBackend> {
    dataset: Vec<Branch>,
    criteria: FilterCriteria,
    view_state: ViewState,
    view: V,
    markers: MarkerSynchronizer<B>,
    detail: DetailFocus<B>,
    load_failed: bool,
}

impl<V: ResultsView, B: MapBackend> Controller<V, B> {
    pub fn new(
        dataset: Vec<Branch>,
        view: V,
        main_backend: B,
        detail_backend: B,
        settings: MapSettings,
    ) -> Self {
        Self {
            dataset,
            criteria: FilterCriteria::default(),
            view_state: ViewState::List,
            view,
            markers: MarkerSynchronizer::new(main_backend, settings),
            detail: DetailFocus::new(detail_backend, settings.detail_zoom),
            load_failed: false,
        }
    }

    /// Build a controller from the outcome of a dataset load.
    ///
    /// A failed load leaves the dataset empty; [`Controller::start`] then shows
    /// the load-failure notice instead of results.
    pub fn from_load_result<E: std::error::Error>(
        result: Result<Vec<Branch>, E>,
        view: V,
        main_backend: B,
        detail_backend: B,
        settings: MapSettings,
    ) -> Self {
        match result {
            Ok(dataset) => Self::new(dataset, view, main_backend, detail_backend, settings),
            Err(e) => {
                tracing::warn!(error = %e, "failed to load branch data");
                let mut controller =
                    Self::new(Vec::new(), view, main_backend, detail_backend, settings);
                controller.load_failed = true;
                controller
            }
        }
    }

    /// Render the initial list view.
    pub fn start(&mut self) {
        self.view.render_view_state(self.view_state);
        if self.load_failed {
            self.view.render_notice(LOAD_ERROR_MESSAGE);
            return;
        }
        tracing::info!(branches = self.dataset.len(), "branch data ready");
        self.refresh();
    }

    /// Apply one user action.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::UnknownBranch`] when a selection names a position
    /// outside the dataset.
    pub fn dispatch(&mut self, command: Command) -> Result<(), AppError> {
        tracing::debug!(?command, view = %self.view_state, "dispatching command");
        match command {
            Command::Search(term) => self.criteria.search_term = term,
            Command::SetLocation(location) => self.criteria.location = location,
            Command::SetCategory(category) => self.criteria.category = category,
            Command::ClearFilters => self.criteria.clear(),
            Command::ToggleView => {
                self.toggle_view();
                return Ok(());
            }
            Command::Select(index) => return self.select(index),
            Command::CloseDetail => {
                self.detail.close();
                self.view.close_detail();
                return Ok(());
            }
        }
        self.refresh();
        Ok(())
    }

    /// Recompute the filtered results from the current criteria.
    #[must_use]
    pub fn filtered(&self) -> Vec<BranchRef<'_>> {
        filter_branches(&self.dataset, &self.criteria)
    }

    #[must_use]
    pub fn criteria(&self) -> &FilterCriteria {
        &self.criteria
    }

    #[must_use]
    pub fn view_state(&self) -> ViewState {
        self.view_state
    }

    #[must_use]
    pub fn dataset(&self) -> &[Branch] {
        &self.dataset
    }

    #[must_use]
    pub fn load_failed(&self) -> bool {
        self.load_failed
    }

    #[must_use]
    pub fn view(&self) -> &V {
        &self.view
    }

    pub fn view_mut(&mut self) -> &mut V {
        &mut self.view
    }

    #[must_use]
    pub fn markers(&self) -> &MarkerSynchronizer<B> {
        &self.markers
    }

    #[must_use]
    pub fn detail(&self) -> &DetailFocus<B> {
        &self.detail
    }

    fn toggle_view(&mut self) {
        self.view_state = self.view_state.toggled();
        tracing::debug!(view = %self.view_state, "view toggled");
        self.view.render_view_state(self.view_state);
        if self.view_state == ViewState::Map && self.markers.ensure_map() {
            tracing::info!("main map created");
        }
        self.refresh();
    }

    fn select(&mut self, index: usize) -> Result<(), AppError> {
        let Some(branch) = self.dataset.get(index) else {
            tracing::warn!(index, total = self.dataset.len(), "selected unknown branch");
            return Err(AppError::UnknownBranch {
                index,
                total: self.dataset.len(),
            });
        };
        let fields = DetailFields::from_branch(branch);
        let map = self.detail.focus(branch);
        self.view.render_detail(index, &fields, map);
        Ok(())
    }

    fn refresh(&mut self) {
        let filtered = filter_branches(&self.dataset, &self.criteria);
        self.view
            .render_summary(&results_summary(filtered.len(), self.dataset.len()));

        match self.view_state {
            ViewState::List if filtered.is_empty() => {
                self.view.render_notice(NO_RESULTS_MESSAGE);
            }
            ViewState::List => self.view.render_cards(&filtered),
            ViewState::Map => {
                let plan = self.markers.sync(&filtered, &self.criteria);
                self.view.render_map(&plan);
            }
        }
    }
}
