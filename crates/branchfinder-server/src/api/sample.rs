//! Dataset served when no data file is configured.

use branchfinder_core::Branch;

fn sample(name: &str, address: &str, lat: &str, lng: &str, category: &str) -> Branch {
    Branch {
        name: Some(name.to_string()),
        address: Some(address.to_string()),
        category: Some(category.to_string()),
        latitude: Some(lat.to_string()),
        longitude: Some(lng.to_string()),
        ..Branch::default()
    }
}

pub(crate) fn sample_branches() -> Vec<Branch> {
    vec![
        sample(
            "BDO Makati",
            "Makati Avenue, Makati City",
            "14.55473",
            "121.024445",
            "branch",
        ),
        sample(
            "BDO BGC",
            "26th Street, Bonifacio Global City",
            "14.55189",
            "121.05163",
            "branch",
        ),
        sample(
            "BDO ATM SM Mall",
            "SM Mall of Asia, Pasay City",
            "14.53503",
            "120.98222",
            "atm",
        ),
    ]
}
