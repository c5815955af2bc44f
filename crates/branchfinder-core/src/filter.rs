//! Search and filter predicates over the branch dataset.
//!
//! Three clauses are combined with AND: a free-text search over name, area,
//! and address; an exact region-code match; an exact category match. An empty
//! clause matches every branch.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::branch::{Branch, BranchRef};

/// The active search term plus location/type selections.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterCriteria {
    pub search_term: String,
    pub location: String,
    pub category: String,
}

impl FilterCriteria {
    /// The search term as it is matched: trimmed and lower-cased.
    #[must_use]
    pub fn normalized_search_term(&self) -> String {
        self.search_term.trim().to_lowercase()
    }

    /// `true` when at least one clause narrows the dataset.
    #[must_use]
    pub fn has_active_clause(&self) -> bool {
        !self.search_term.trim().is_empty()
            || !self.location.is_empty()
            || !self.category.is_empty()
    }

    /// Reset every clause to its wildcard value.
    pub fn clear(&mut self) {
        self.search_term.clear();
        self.location.clear();
        self.category.clear();
    }

    /// Evaluate all three clauses against one branch.
    #[must_use]
    pub fn matches(&self, branch: &Branch) -> bool {
        self.matches_with_term(branch, &self.normalized_search_term())
    }

    fn matches_with_term(&self, branch: &Branch, term: &str) -> bool {
        matches_search(branch, term)
            && matches_exact(&self.location, branch.location.as_deref())
            && matches_exact(&self.category, branch.category.as_deref())
    }
}

fn matches_search(branch: &Branch, term: &str) -> bool {
    if term.is_empty() {
        return true;
    }
    [
        branch.name.as_deref(),
        branch.area.as_deref(),
        branch.address.as_deref(),
    ]
    .into_iter()
    .flatten()
    .any(|field| field.to_lowercase().contains(term))
}

fn matches_exact(wanted: &str, actual: Option<&str>) -> bool {
    wanted.is_empty() || actual == Some(wanted)
}

/// Return the branches satisfying `criteria`, in dataset order.
///
/// The dataset is never modified; each call produces a fresh sequence.
#[must_use]
pub fn filter_branches<'a>(
    dataset: &'a [Branch],
    criteria: &FilterCriteria,
) -> Vec<BranchRef<'a>> {
    let term = criteria.normalized_search_term();
    dataset
        .iter()
        .enumerate()
        .filter(|(_, branch)| criteria.matches_with_term(branch, &term))
        .map(|(index, branch)| BranchRef { index, branch })
        .collect()
}

/// Sorted, distinct region codes present in the dataset.
#[must_use]
pub fn distinct_locations(dataset: &[Branch]) -> Vec<String> {
    distinct(dataset.iter().filter_map(|b| b.location.as_deref()))
}

/// Sorted, distinct categories present in the dataset.
#[must_use]
pub fn distinct_categories(dataset: &[Branch]) -> Vec<String> {
    distinct(dataset.iter().filter_map(|b| b.category.as_deref()))
}

fn distinct<'a>(values: impl Iterator<Item = &'a str>) -> Vec<String> {
    values
        .collect::<BTreeSet<_>>()
        .into_iter()
        .map(ToOwned::to_owned)
        .collect()
}
