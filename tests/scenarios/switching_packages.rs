//! Scenario: Switching Packages
//!
//! Journey: The user's portal offers several packages. The first usable one
//! is picked automatically, then the user switches package while the first
//! fetch is still in flight.
//!
//! Steps:
//! 1. Package list starts with an unnamed entry
//! 2. Menu for the first named package is fetched
//! 3. A second fetch is issued before the first result lands
//! 4. Results arrive out of order
//!
//! Success Criteria:
//! - Blank package names are skipped
//! - Only the latest fetch may replace the tree
//! - Snapshot readers see exactly the applied descriptors

use portal_nav::{
    ApplyOutcome, FetchedMenu, MenuDescriptor, MenuFetchUseCase, MenuRequest, PackageEntry,
    RouteDecision,
};

use crate::common::*;

/// SCENARIO: Blank package entries are skipped
#[test]
fn scenario_first_named_package_is_used() {
    let api = MockMenuApi::new(
        vec![PackageEntry::new("", "Unnamed"), PackageEntry::new("pkg1", "Package One")],
        portal_descriptors(),
    );
    let use_case = MenuFetchUseCase::new(api);

    let menu = use_case.fetch(MenuRequest::new("token", "Perf")).unwrap();

    assert_eq!(menu.package.as_deref(), Some("pkg1"));
    assert_eq!(menu.descriptors, portal_descriptors());
    assert_eq!(use_case.api().calls(), vec!["packages:Perf", "menu:Perf/pkg1"]);
}

/// SCENARIO: Switching package mid-flight keeps only the latest result
#[test]
fn scenario_out_of_order_results() {
    let (mut session, reader) = default_session("/app/dashboard");

    // Step 3: two fetches in flight
    let first = session.begin_fetch();
    let second = session.begin_fetch();

    let pkg2 = FetchedMenu::new(
        "Perf",
        Some("pkg2".to_string()),
        vec![
            MenuDescriptor::new("Dashboard", "/app/dashboard"),
            MenuDescriptor::new("Alerts", "/app/alerts"),
        ],
    );

    // Step 4: the newer result lands first
    assert!(session.apply_fetch(second, pkg2.clone()).is_applied());
    assert_eq!(
        session.apply_fetch(
            first,
            FetchedMenu::new("Perf", Some("pkg1".to_string()), portal_descriptors()),
        ),
        ApplyOutcome::Stale { ticket: first }
    );

    assert_eq!(session.revision(), 1);
    assert_eq!(session.tree().top_level().len(), 2);
    assert_eq!(session.navigate("/app/alerts"), RouteDecision::Allow);

    let snapshot = reader.latest().unwrap();
    assert_eq!(snapshot.version, 1);
    assert_eq!(snapshot.package.as_deref(), Some("pkg2"));
    assert_eq!(snapshot.descriptors, pkg2.descriptors);
}

/// SCENARIO: A later fetch replaces the tree and resets manual toggles
#[test]
fn scenario_new_package_resets_expansion() {
    let (mut session, reader) = default_session("/app/reports/weekly");
    let ticket = session.begin_fetch();
    session.apply_fetch(ticket, FetchedMenu::new("Perf", Some("pkg1".to_string()), portal_descriptors()));
    session.toggle_top(2);
    let seen = reader.version();

    let ticket = session.begin_fetch();
    session.apply_fetch(ticket, FetchedMenu::new("Perf", Some("pkg2".to_string()), portal_descriptors()));

    assert_eq!(session.active_branch().chain(), &[1, 1]);
    assert_eq!(session.expansion().top(), portal_nav::Expansion::OpenAt(1));
    assert!(reader.changed_since(seen));
    assert_eq!(reader.version(), 2);
}

/// SCENARIO: Readers on other threads observe the published descriptor
#[test]
fn scenario_readers_on_other_threads() {
    let (mut session, reader) = default_session("/app/dashboard");
    let workers: Vec<_> = (0..4).map(|_| reader.clone()).collect();

    let ticket = session.begin_fetch();
    session.apply_fetch(ticket, FetchedMenu::new("Perf", None, portal_descriptors()));

    let handles: Vec<_> = workers
        .into_iter()
        .map(|reader| std::thread::spawn(move || reader.latest().map(|s| s.descriptors.len())))
        .collect();
    for handle in handles {
        assert_eq!(handle.join().unwrap(), Some(3));
    }
}
