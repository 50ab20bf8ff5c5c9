//! Scenario: Browsing the Portal
//!
//! Journey: A signed-in user lands on a report, moves around the menu and
//! eventually types an address the menu does not offer.
//!
//! Steps:
//! 1. Menu arrives while the user is on a nested report
//! 2. User follows a deep link into the admin section
//! 3. User collapses and reopens entries by hand
//! 4. User types an address outside the menu
//!
//! Success Criteria:
//! - The branch holding the location is always open
//! - Only one sibling is open at each level
//! - Unreachable addresses under the reserved prefix are redirected

use portal_nav::{
    build_menu_tree, resolve_active_branch, Expansion, FetchedMenu, MenuNode, MenuTree,
    RedirectReason, RouteDecision, RoutePolicy, RouteSet, RouteValidator,
};

use crate::common::*;

fn titles(session: &portal_nav::NavigationSession) -> Vec<String> {
    session
        .visible_entries()
        .into_iter()
        .map(|entry| entry.title)
        .collect()
}

/// SCENARIO: Menu arrives while the user sits on a nested report
#[test]
fn scenario_menu_opens_on_current_report() {
    let (mut session, _reader) = default_session("/app/reports/daily");

    let ticket = session.begin_fetch();
    let outcome = session.apply_fetch(
        ticket,
        FetchedMenu::new("Perf", Some("pkg1".to_string()), portal_descriptors()),
    );

    assert!(outcome.is_applied());
    assert_eq!(session.active_branch().chain(), &[1, 0]);
    assert_eq!(session.decision(), &RouteDecision::Allow);
    assert_eq!(
        titles(&session),
        vec!["Dashboard", "Reports", "Daily", "Weekly", "Admin"]
    );

    let daily = &session.visible_entries()[2];
    assert!(daily.active);
    assert_eq!(daily.depth, 1);
    assert_eq!(daily.target.as_deref(), Some("/app/reports/daily"));
}

/// SCENARIO: Deep link into another section swaps the open branch
#[test]
fn scenario_deep_link_switches_open_branch() {
    let (mut session, _reader) = default_session("/app/reports/daily");
    let ticket = session.begin_fetch();
    session.apply_fetch(ticket, FetchedMenu::new("Perf", None, portal_descriptors()));

    // Step 2: detail page below a leaf route
    let decision = session.navigate("/app/admin/users/42");

    assert_eq!(decision, RouteDecision::Allow);
    assert_eq!(session.active_branch().top(), Some(2));
    assert_eq!(session.active_branch().child(), Some(0));
    assert_eq!(session.expansion().top(), Expansion::OpenAt(2));
    assert_eq!(titles(&session), vec!["Dashboard", "Reports", "Admin", "Users"]);
}

/// SCENARIO: Parent route with children is active only on an exact match
#[test]
fn scenario_parent_route_exact_and_prefix() {
    let (mut session, _reader) = default_session("/app/admin");
    let ticket = session.begin_fetch();
    session.apply_fetch(ticket, FetchedMenu::new("Perf", None, portal_descriptors()));

    assert_eq!(session.active_branch().top(), Some(2));
    assert_eq!(session.active_branch().child(), None);

    // Reachable through the Admin route but no child claims it
    assert_eq!(session.navigate("/app/admin/settings"), RouteDecision::Allow);
    assert!(session.active_branch().is_none());
}

/// SCENARIO: Manual toggles hold until the location changes
#[test]
fn scenario_manual_toggles_until_location_changes() {
    let (mut session, _reader) = default_session("/app/reports/daily");
    let ticket = session.begin_fetch();
    session.apply_fetch(ticket, FetchedMenu::new("Perf", None, portal_descriptors()));

    // Step 3: open Admin by hand; Reports closes
    session.toggle_top(2);
    assert_eq!(session.expansion().top(), Expansion::OpenAt(2));
    assert_eq!(titles(&session), vec!["Dashboard", "Reports", "Admin", "Users"]);

    // Same location again: the manual choice stays
    session.navigate("/app/reports/daily");
    assert_eq!(session.expansion().top(), Expansion::OpenAt(2));

    // New location: the active branch wins
    session.navigate("/app/reports/weekly");
    assert_eq!(session.expansion().top(), Expansion::OpenAt(1));
    assert_eq!(session.active_branch().chain(), &[1, 1]);
}

/// SCENARIO: Addresses outside the menu
#[test]
fn scenario_unreachable_address_is_redirected() {
    let (mut session, _reader) = default_session("/app/dashboard");
    let ticket = session.begin_fetch();
    session.apply_fetch(ticket, FetchedMenu::new("Perf", None, portal_descriptors()));

    // Step 4: under the reserved prefix but not in the menu
    assert_eq!(
        session.navigate("/app/billing"),
        RouteDecision::Redirect {
            to: "/app/dashboard".to_string(),
            reason: RedirectReason::Unreachable,
        }
    );
    assert!(session.active_branch().is_none());

    // Outside the reserved prefix nothing is enforced
    assert_eq!(session.navigate("/login"), RouteDecision::Allow);

    // The fallback is listed in the menu, so it is reachable
    assert_eq!(session.navigate("/app/dashboard"), RouteDecision::Allow);
}

/// SCENARIO: Two-level menu with a detail page below the nested leaf
#[test]
fn scenario_small_menu_detail_page() {
    let tree = MenuTree::new(vec![
        MenuNode::leaf("A", "/a").with_child(MenuNode::leaf("A1", "/a/1")),
        MenuNode::leaf("B", "/b"),
    ]);
    let routes = RouteSet::from_tree(&tree);
    let validator = RouteValidator::new(RoutePolicy {
        reserved_prefix: "/".to_string(),
        fallback_route: "/b".to_string(),
        ..RoutePolicy::default()
    });

    let branch = resolve_active_branch(&tree, "/a/1/detail");
    assert_eq!(branch.top(), Some(0));
    assert_eq!(branch.child(), Some(0));
    assert_eq!(validator.validate(&routes, "/a/1/detail"), RouteDecision::Allow);

    let branch = resolve_active_branch(&tree, "/c");
    assert_eq!(branch.top(), None);
    assert_eq!(branch.child(), None);
    assert_eq!(
        validator.validate(&routes, "/c"),
        RouteDecision::Redirect {
            to: "/b".to_string(),
            reason: RedirectReason::Unreachable,
        }
    );
}

/// SCENARIO: Descriptor straight from JSON with icons and embedded pages
#[test]
fn scenario_descriptor_json_builds_tree() {
    let json = r#"[
        {"Name": "Home", "Route": "/app/home", "Icon": "<svg viewBox=\"0 0 24 24\"><path d=\"M0 0\"/></svg>", "Permission": ["read"], "SubMenus": null},
        {"Name": "Wiki", "Route": "/app/wiki", "Icon": "", "Permission": null, "SubMenus": [], "EmbeddedMenu": true, "Url": "https://wiki.example.com/a b"}
    ]"#;
    let descriptors: Vec<portal_nav::MenuDescriptor> = serde_json::from_str(json).unwrap();

    let tree = build_menu_tree(&descriptors);

    let home = tree.node_at(&[0]).unwrap();
    let svg = home.icon().as_svg().unwrap();
    assert_eq!(svg.root_attributes.get("viewBox").map(String::as_str), Some("0 0 24 24"));
    assert_eq!(svg.children.len(), 1);
    assert_eq!(home.permissions(), &["read".to_string()]);

    let wiki = tree.node_at(&[1]).unwrap();
    assert!(wiki.icon().is_default());
    let target = wiki.navigation_target().unwrap();
    assert!(target.starts_with("/app/wiki?url="));
    assert!(!target.contains(' '));
}
