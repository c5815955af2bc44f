//! Application state and view switching for the branch finder.
//!
//! [`Controller`] owns the dataset, the current [`FilterCriteria`], and the
//! active [`ViewState`]. Every [`Command`] recomputes the filtered results from
//! scratch and re-runs only the active view's rendering.
//!
//! [`FilterCriteria`]: branchfinder_core::FilterCriteria
//! [`ViewState`]: branchfinder_core::ViewState

pub mod command;
pub mod controller;
pub mod error;
pub mod summary;
pub mod view;

pub use command::Command;
pub use controller::Controller;
pub use error::AppError;
pub use summary::{results_summary, LOAD_ERROR_MESSAGE, NO_RESULTS_MESSAGE};
pub use view::ResultsView;
