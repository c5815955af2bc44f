use branchfinder_core::{filter_branches, Branch};

use super::*;
use crate::headless::{HeadlessBackend, MapEvent};

fn located(name: &str, location: &str, category: &str, lat: &str, lng: &str) -> Branch {
    Branch {
        name: Some(name.to_string()),
        location: Some(location.to_string()),
        category: Some(category.to_string()),
        latitude: Some(lat.to_string()),
        longitude: Some(lng.to_string()),
        ..Branch::default()
    }
}

fn criteria(search: &str, location: &str, category: &str) -> FilterCriteria {
    FilterCriteria {
        search_term: search.to_string(),
        location: location.to_string(),
        category: category.to_string(),
    }
}

fn three_branches() -> Vec<Branch> {
    vec![
        located("BDO Makati", "NCR", "Branch", "14.554730", "121.024445"),
        located("BDO BGC", "NCR", "Branch", "14.551890", "121.051630"),
        located("BDO ATM SM Mall", "NCR", "ATM", "14.535030", "120.982220"),
    ]
}

fn ncr_branches(count: usize) -> Vec<Branch> {
    (0..count)
        .map(|i| located(&format!("NCR Branch {i}"), "NCR", "Branch", "14.5", "121.0"))
        .collect()
}

#[test]
fn no_active_clause_plots_nothing_and_shows_guidance() {
    let data = three_branches();
    let c = FilterCriteria::default();
    let filtered = filter_branches(&data, &c);
    let plan = plan_markers(&filtered, &c, &MapSettings::default());

    assert_eq!(filtered.len(), 3);
    assert_eq!(plan.reason, PlanReason::NoActiveFilters);
    assert!(plan.markers.is_empty());
    assert_eq!(
        plan.message,
        "Use search or filters to see branch locations on the map (max 100 results)"
    );
    assert_eq!(
        plan.viewport,
        Viewport::Center {
            center: LatLng::new(13.0, 122.0),
            zoom: 6
        }
    );
}

#[test]
fn no_active_clause_ignores_dataset_size() {
    let data = ncr_branches(250);
    let c = criteria("   ", "", "");
    let plan = plan_markers(&filter_branches(&data, &c), &c, &MapSettings::default());
    assert_eq!(plan.reason, PlanReason::NoActiveFilters);
    assert!(plan.markers.is_empty());
}

#[test]
fn single_search_hit_centers_on_that_branch() {
    let data = three_branches();
    let c = criteria("makati", "", "");
    let filtered = filter_branches(&data, &c);
    let plan = plan_markers(&filtered, &c, &MapSettings::default());

    assert_eq!(filtered.len(), 1);
    assert_eq!(plan.markers.len(), 1);
    assert_eq!(plan.markers[0].index, 0);
    assert_eq!(plan.viewport.center(), LatLng::new(14.554_73, 121.024_445));
    assert_eq!(
        plan.message,
        "Showing 1 branch locations - Click markers for details"
    );
}

#[test]
fn more_than_limit_plots_nothing_and_reports_count() {
    let data = ncr_branches(120);
    let c = criteria("", "NCR", "");
    let filtered = filter_branches(&data, &c);
    let plan = plan_markers(&filtered, &c, &MapSettings::default());

    assert_eq!(filtered.len(), 120);
    assert_eq!(plan.reason, PlanReason::TooManyResults { count: 120 });
    assert!(plan.markers.is_empty());
    assert!(plan.message.contains("120"));
    assert_eq!(
        plan.message,
        "Too many results (120) - Please narrow your search to see markers"
    );
}

#[test]
fn exactly_the_limit_is_still_plotted() {
    let data = ncr_branches(100);
    let c = criteria("", "NCR", "");
    let plan = plan_markers(&filter_branches(&data, &c), &c, &MapSettings::default());
    assert_eq!(plan.reason, PlanReason::Plotted);
    assert_eq!(plan.markers.len(), 100);
}

#[test]
fn unplottable_results_are_skipped_in_order() {
    let mut data = vec![
        located("ATM 1", "NCR", "ATM", "14.50", "121.00"),
        located("ATM 2", "NCR", "ATM", "14.60", "121.10"),
        located("ATM 3", "VIS", "ATM", "10.30", "123.90"),
        located("ATM 4", "MIN", "ATM", "7.07", "125.61"),
        located("ATM 5", "NCR", "ATM", "14.70", "121.20"),
        located("Branch", "NCR", "Branch", "14.80", "121.30"),
    ];
    data[1].latitude = None;

    let c = criteria("", "", "ATM");
    let filtered = filter_branches(&data, &c);
    let plan = plan_markers(&filtered, &c, &MapSettings::default());

    assert_eq!(filtered.len(), 5);
    let plotted: Vec<usize> = plan.markers.iter().map(|m| m.index).collect();
    assert_eq!(plotted, vec![0, 2, 3, 4]);
    assert_eq!(
        plan.message,
        "Showing 4 branch locations - Click markers for details"
    );
}

#[test]
fn fitted_viewport_is_padded_bounding_box() {
    let data = vec![
        located("North", "NCR", "ATM", "14.0", "122.0"),
        located("South", "NCR", "ATM", "10.0", "120.0"),
    ];
    let c = criteria("", "NCR", "");
    let plan = plan_markers(&filter_branches(&data, &c), &c, &MapSettings::default());

    let Viewport::Fit { bounds } = plan.viewport else {
        panic!("expected fitted viewport, got {:?}", plan.viewport);
    };
    assert!((bounds.south - 9.6).abs() < 1e-9);
    assert!((bounds.north - 14.4).abs() < 1e-9);
    assert!((bounds.west - 119.8).abs() < 1e-9);
    assert!((bounds.east - 122.2).abs() < 1e-9);
}

#[test]
fn active_clause_without_plottable_results_uses_default_view() {
    let mut data = three_branches();
    for b in &mut data {
        b.longitude = Some("not-a-number".to_string());
    }
    let c = criteria("bdo", "", "");
    let plan = plan_markers(&filter_branches(&data, &c), &c, &MapSettings::default());
    assert_eq!(plan.reason, PlanReason::Plotted);
    assert!(plan.markers.is_empty());
    assert_eq!(plan.viewport.center(), LatLng::new(13.0, 122.0));
    assert_eq!(
        plan.message,
        "Showing 0 branch locations - Click markers for details"
    );
}

#[test]
fn marker_limit_comes_from_settings() {
    let data = ncr_branches(20);
    let settings = MapSettings {
        marker_limit: 10,
        ..MapSettings::default()
    };
    let c = criteria("", "NCR", "");
    let plan = plan_markers(&filter_branches(&data, &c), &c, &settings);
    assert_eq!(plan.reason, PlanReason::TooManyResults { count: 20 });

    let idle = plan_markers(&[], &FilterCriteria::default(), &settings);
    assert!(idle.message.ends_with("(max 10 results)"));
}

#[test]
fn ensure_map_is_idempotent() {
    let mut sync = MarkerSynchronizer::new(HeadlessBackend::new(), MapSettings::default());
    assert!(!sync.has_map());
    assert!(sync.ensure_map());
    assert!(!sync.ensure_map());
    assert_eq!(sync.backend().instances_created(), 1);
}

#[test]
fn sync_before_map_exists_draws_nothing() {
    let data = three_branches();
    let c = criteria("bdo", "", "");
    let mut sync = MarkerSynchronizer::new(HeadlessBackend::new(), MapSettings::default());
    let plan = sync.sync(&filter_branches(&data, &c), &c);
    assert_eq!(plan.markers.len(), 3);
    assert_eq!(sync.marker_count(), 0);
    assert_eq!(sync.backend().instances_created(), 0);
}

#[test]
fn sync_attaches_exactly_the_planned_markers() {
    let data = three_branches();
    let c = criteria("bdo", "", "");
    let mut sync = MarkerSynchronizer::new(HeadlessBackend::new(), MapSettings::default());
    sync.ensure_map();
    let plan = sync.sync(&filter_branches(&data, &c), &c);

    let map = sync.map().expect("map");
    assert_eq!(map.marker_count(), 3);
    assert_eq!(sync.marker_count(), 3);
    let titles: Vec<&str> = map.markers().map(|(_, _, p)| p.title.as_str()).collect();
    assert_eq!(titles, vec!["BDO Makati", "BDO BGC", "BDO ATM SM Mall"]);
    assert_eq!(map.view(), plan.viewport);
}

#[test]
fn each_sync_removes_all_previous_markers_first() {
    let data = three_branches();
    let mut sync = MarkerSynchronizer::new(HeadlessBackend::new(), MapSettings::default());
    sync.ensure_map();

    let broad = criteria("bdo", "", "");
    sync.sync(&filter_branches(&data, &broad), &broad);
    let narrow = criteria("", "", "ATM");
    sync.sync(&filter_branches(&data, &narrow), &narrow);

    let map = sync.map().expect("map");
    assert_eq!(map.marker_count(), 1);
    assert_eq!(sync.marker_count(), 1);

    let events = map.events();
    let removes = events
        .iter()
        .filter(|e| matches!(e, MapEvent::RemoveMarker { .. }))
        .count();
    assert_eq!(removes, 3);

    // All removals of the second pass come before its single add.
    let second_pass = &events[4..];
    assert!(matches!(second_pass[0], MapEvent::RemoveMarker { .. }));
    assert!(matches!(second_pass[3], MapEvent::AddMarker { .. }));
}

#[test]
fn clearing_criteria_removes_every_marker() {
    let data = three_branches();
    let mut sync = MarkerSynchronizer::new(HeadlessBackend::new(), MapSettings::default());
    sync.ensure_map();

    let c = criteria("bdo", "", "");
    sync.sync(&filter_branches(&data, &c), &c);
    let cleared = FilterCriteria::default();
    let plan = sync.sync(&filter_branches(&data, &cleared), &cleared);

    assert_eq!(plan.reason, PlanReason::NoActiveFilters);
    assert_eq!(sync.marker_count(), 0);
    assert_eq!(sync.map().expect("map").marker_count(), 0);
}
