pub const NO_RESULTS_MESSAGE: &str = "No branches found matching your criteria.";
pub const LOAD_ERROR_MESSAGE: &str = "Error loading branch data. Please try again later.";

/// Result count line shown above the list and map.
#[must_use]
pub fn results_summary(count: usize, total: usize) -> String {
    if count == total {
        format!("Showing all {total} branches")
    } else {
        format!("Showing {count} of {total} branches")
    }
}
