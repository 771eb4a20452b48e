use menushell::{ContentType, NavigationItem};

use super::harness::{StubPage, TestHarness};

#[test]
fn rebuilding_the_index_twice_is_idempotent() {
    let mut harness = TestHarness::new();
    let len_before = harness.nav.registry().len();
    let home = harness.nav.registry().lookup("home");

    harness.nav.rebuild_index();

    assert_eq!(harness.nav.registry().len(), len_before);
    assert_eq!(harness.nav.registry().lookup("home"), home);
    assert_eq!(harness.nav.suggestions().len(), 5);
}

#[test]
fn rebuild_merges_new_items_without_dropping_old_entries() {
    let mut harness = TestHarness::new();
    let len_before = harness.nav.registry().len();

    let extra = ContentType("page:extra");
    harness
        .nav
        .tree_mut()
        .push_root(NavigationItem::new("Extra").with_id("extra").with_target(extra));
    harness.nav.rebuild_index();

    assert!(harness.nav.registry().len() > len_before);
    assert!(harness.nav.registry().lookup("extra").is_some());
    assert!(harness.nav.registry().lookup("home").is_some());
}

#[test]
fn ad_hoc_registrations_survive_a_rebuild() {
    let mut harness = TestHarness::new();
    let adhoc = ContentType("page:adhoc");
    harness
        .nav
        .activator_mut()
        .register_fn(adhoc, move || StubPage::boxed(adhoc));
    harness.nav.navigate_to_type(adhoc, None).unwrap();
    let key = harness.nav.registry().lookup_type(adhoc);

    harness.nav.rebuild_index();

    assert_eq!(harness.nav.registry().lookup_type(adhoc), key);
}
