use super::harness::TestHarness;

#[test]
fn self_navigation_is_a_silent_noop() {
    let mut harness = TestHarness::new();
    assert!(harness.nav.navigate("home", None).unwrap());

    let before = harness.nav.snapshot_json();
    assert!(!harness.nav.navigate("home", None).unwrap());

    assert_eq!(harness.nav.snapshot_json()["journal"], before["journal"]);
    assert_eq!(harness.nav.snapshot_json()["stack"], before["stack"]);
    assert_eq!(harness.displayed.borrow().len(), 1);
}

#[test]
fn back_round_trip_restores_origin() {
    let mut harness = TestHarness::new();
    harness.nav.navigate("home", None).unwrap();
    harness.nav.navigate("library", None).unwrap();
    assert!(harness.nav.can_go_back());

    assert!(harness.nav.go_back().unwrap());

    assert_eq!(harness.nav.selected_item(), Some(harness.home));
    assert_eq!(harness.journal_ids(), vec!["home".to_string()]);
    assert!(!harness.nav.can_go_back());
}

#[test]
fn backward_renavigation_leaves_no_stale_duplicates() {
    let mut harness = TestHarness::new();
    harness.nav.navigate("home", None).unwrap();
    harness.nav.navigate("library", None).unwrap();
    harness.nav.go_back().unwrap();
    harness.nav.navigate("settings", None).unwrap();

    assert_eq!(
        harness.journal_ids(),
        vec!["home".to_string(), "settings".to_string()]
    );
}

#[test]
fn go_back_at_boundary_is_a_noop() {
    let mut harness = TestHarness::new();
    assert!(!harness.nav.go_back().unwrap());

    harness.nav.navigate("home", None).unwrap();
    assert!(!harness.nav.go_back().unwrap());
    assert_eq!(harness.nav.selected_item(), Some(harness.home));
}

#[test]
fn go_forward_is_a_clean_noop() {
    let mut harness = TestHarness::new();
    assert!(!harness.nav.go_forward().unwrap());

    harness.nav.navigate("home", None).unwrap();
    harness.nav.navigate("library", None).unwrap();
    harness.nav.go_back().unwrap();

    // The trimming journal leaves no forward window to advance into.
    let before = harness.nav.snapshot_json();
    assert!(!harness.nav.go_forward().unwrap());
    assert_eq!(harness.nav.snapshot_json()["journal"], before["journal"]);
}

#[test]
fn repeated_back_traversal_walks_the_journal_down() {
    let mut harness = TestHarness::new();
    harness.nav.navigate("home", None).unwrap();
    harness.nav.navigate("library", None).unwrap();
    harness.nav.navigate("settings", None).unwrap();

    assert!(harness.nav.go_back().unwrap());
    assert_eq!(harness.nav.selected_item(), Some(harness.library));
    assert_eq!(
        harness.journal_ids(),
        vec!["home".to_string(), "library".to_string()]
    );

    assert!(harness.nav.go_back().unwrap());
    assert_eq!(harness.nav.selected_item(), Some(harness.home));
    assert!(!harness.nav.can_go_back());
}

#[test]
fn clear_journal_resets_engine_state() {
    let mut harness = TestHarness::new();
    harness.nav.navigate("home", None).unwrap();
    harness.nav.navigate("library", None).unwrap();

    harness.nav.clear_journal();

    assert!(harness.nav.journal().is_empty());
    assert!(harness.nav.navigation_stack().is_empty());
    assert!(harness.nav.selected_item().is_none());
    assert!(!harness.nav.can_go_back());
    assert!(!harness.nav.tree().get(harness.library).unwrap().is_active);

    // Navigation starts cleanly afterwards.
    assert!(harness.nav.navigate("home", None).unwrap());
    assert_eq!(harness.journal_ids(), vec!["home".to_string()]);
}
