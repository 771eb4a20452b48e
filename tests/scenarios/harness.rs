use std::cell::{Cell, RefCell};
use std::rc::Rc;

use menushell::{Content, ContentHost, ContentType, ItemKey, NavigationItem, Navigator};

pub(crate) const HOME: ContentType = ContentType("page:home");
pub(crate) const FEED: ContentType = ContentType("page:feed");
pub(crate) const FEED_DETAIL: ContentType = ContentType("page:feed-detail");
pub(crate) const LIBRARY: ContentType = ContentType("page:library");
pub(crate) const SETTINGS: ContentType = ContentType("page:settings");

pub(crate) struct StubPage {
    ty: ContentType,
}

impl StubPage {
    pub(crate) fn boxed(ty: ContentType) -> Box<dyn Content> {
        Box::new(StubPage { ty })
    }
}

impl Content for StubPage {
    fn content_type(&self) -> ContentType {
        self.ty
    }
}

struct RecordingHost {
    displayed: Rc<RefCell<Vec<&'static str>>>,
}

impl ContentHost for RecordingHost {
    fn display(&mut self, content: Box<dyn Content>) {
        self.displayed.borrow_mut().push(content.content_type().name());
    }
}

/// Navigator wired to a small three-branch pane:
///
/// ```text
/// Home            (id "home")
/// └─ Feed         (id "feed", tag "home-feed")
///    └─ Details   (id "feed-detail")
/// Library         (id "library")
/// Settings        (id "settings")
/// ```
///
/// Every content type resolves through the default activator; the veto
/// flag flips the navigating hook.
pub(crate) struct TestHarness {
    pub(crate) nav: Navigator,
    pub(crate) displayed: Rc<RefCell<Vec<&'static str>>>,
    pub(crate) veto: Rc<Cell<bool>>,
    pub(crate) home: ItemKey,
    pub(crate) feed: ItemKey,
    pub(crate) feed_detail: ItemKey,
    pub(crate) library: ItemKey,
}

impl TestHarness {
    pub(crate) fn new() -> Self {
        let mut nav = Navigator::new();

        let tree = nav.tree_mut();
        let home = tree.push_root(
            NavigationItem::new("Home")
                .with_id("home")
                .with_target(HOME),
        );
        let feed = tree
            .push_child(
                home,
                NavigationItem::new("Feed")
                    .with_id("feed")
                    .with_tag("home-feed")
                    .with_target(FEED),
            )
            .expect("home exists");
        let feed_detail = tree
            .push_child(
                feed,
                NavigationItem::new("Details")
                    .with_id("feed-detail")
                    .with_target(FEED_DETAIL),
            )
            .expect("feed exists");
        let library = tree.push_root(
            NavigationItem::new("Library")
                .with_id("library")
                .with_target(LIBRARY),
        );
        tree.push_root(
            NavigationItem::new("Settings")
                .with_id("settings")
                .with_target(SETTINGS),
        );

        for ty in [HOME, FEED, FEED_DETAIL, LIBRARY, SETTINGS] {
            nav.activator_mut().register_fn(ty, move || StubPage::boxed(ty));
        }
        nav.rebuild_index();

        let displayed = Rc::new(RefCell::new(Vec::new()));
        nav.set_content_host(Box::new(RecordingHost {
            displayed: displayed.clone(),
        }));

        let veto = Rc::new(Cell::new(false));
        let veto_flag = veto.clone();
        nav.set_navigating_hook(Box::new(move |_| veto_flag.get()));

        Self {
            nav,
            displayed,
            veto,
            home,
            feed,
            feed_detail,
            library,
        }
    }

    pub(crate) fn stack_ids(&self) -> Vec<String> {
        self.nav
            .navigation_stack()
            .iter()
            .filter_map(|&key| self.nav.tree().get(key).map(|item| item.id.clone()))
            .collect()
    }

    pub(crate) fn journal_ids(&self) -> Vec<String> {
        self.nav.journal().entries().to_vec()
    }

    pub(crate) fn vault_snapshots(&self) -> u64 {
        self.nav.snapshot_json()["vault_snapshots"]
            .as_u64()
            .unwrap_or(0)
    }
}
