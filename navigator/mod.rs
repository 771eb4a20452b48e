/* This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/. */

//! Navigation façade.
//!
//! `Navigator` owns the item tree, the registry, the journal, the
//! stack/vault pair, and the content renderer, and exposes the public
//! navigation operations. All mutation happens on the caller's thread; a
//! navigation either commits atomically (stack, vault, journal, selection)
//! or leaves no trace.
//!
//! Hosts observe the engine through a drained event queue: call
//! `take_events` after driving a navigation and react to the selection,
//! back-button, and bring-into-view changes it reports.

mod stack;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::content::{Content, ContentHost, ContentRenderer, ContentResolver, DefaultActivator,
    NavigatingHook, PageService, RenderOutcome};
use crate::diagnostics::NavigationDiagnostics;
use crate::item::{ContentType, ItemKey, ItemTree, NavigationItem};
use crate::journal::Journal;
use crate::registry::ItemRegistry;
use self::stack::StackState;

/// State change reported to the host after a committed navigation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NavigationEvent {
    SelectionChanged { item: ItemKey },
    BackEnabledChanged(bool),
    BringIntoView(ItemKey),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NavigationError {
    /// Resolution was demanded for an item that has no target type.
    MissingTargetType { id: String },
    /// Every resolution strategy declined the type.
    ResolutionFailed(ContentType),
}

impl std::fmt::Display for NavigationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::MissingTargetType { id } => {
                write!(f, "item '{id}' has no target content type")
            }
            Self::ResolutionFailed(target_type) => {
                write!(f, "no strategy resolved content type '{target_type}'")
            }
        }
    }
}

impl std::error::Error for NavigationError {}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NavigatorOptions {
    /// Pre-allocated journal capacity. The journal itself is unbounded.
    pub journal_capacity_hint: usize,
}

impl Default for NavigatorOptions {
    fn default() -> Self {
        Self {
            journal_capacity_hint: 50,
        }
    }
}

pub struct Navigator {
    tree: ItemTree,
    registry: ItemRegistry,
    journal: Journal,
    stack: StackState,
    renderer: ContentRenderer,
    diagnostics: NavigationDiagnostics,
    suggestions: Vec<String>,
    events: Vec<NavigationEvent>,
    selected: Option<ItemKey>,
    backwards_navigated: bool,
    back_enabled: bool,
}

impl Navigator {
    pub fn new() -> Self {
        Self::with_options(NavigatorOptions::default())
    }

    pub fn with_options(options: NavigatorOptions) -> Self {
        Self {
            tree: ItemTree::new(),
            registry: ItemRegistry::new(),
            journal: Journal::with_capacity(options.journal_capacity_hint),
            stack: StackState::new(),
            renderer: ContentRenderer::new(),
            diagnostics: NavigationDiagnostics::new(),
            suggestions: Vec::new(),
            events: Vec::new(),
            selected: None,
            backwards_navigated: false,
            back_enabled: false,
        }
    }

    pub fn tree(&self) -> &ItemTree {
        &self.tree
    }

    /// Hosts build and mutate the pane tree through this; call
    /// `rebuild_index` afterwards to pick the changes up.
    pub fn tree_mut(&mut self) -> &mut ItemTree {
        &mut self.tree
    }

    pub fn registry(&self) -> &ItemRegistry {
        &self.registry
    }

    /// The "tree changed" signal: re-scan the registry (merge, never
    /// overwrite) and rebuild the suggestion list.
    pub fn rebuild_index(&mut self) {
        self.registry.register_tree(&self.tree);
        self.suggestions.clear();
        for key in self.tree.depth_first_keys() {
            if let Some(item) = self.tree.get(key)
                && item.target_type.is_some()
                && !item.label.is_empty()
            {
                self.suggestions.push(item.label.clone());
            }
        }
    }

    pub fn set_content_resolver(&mut self, resolver: Box<dyn ContentResolver>) {
        self.renderer.set_resolver(resolver);
    }

    pub fn set_page_service(&mut self, page_service: Box<dyn PageService>) {
        self.renderer.set_page_service(page_service);
    }

    pub fn set_content_host(&mut self, host: Box<dyn ContentHost>) {
        self.renderer.set_host(host);
    }

    pub fn set_navigating_hook(&mut self, hook: NavigatingHook) {
        self.renderer.set_navigating_hook(hook);
    }

    pub fn activator_mut(&mut self) -> &mut DefaultActivator {
        self.renderer.activator_mut()
    }

    /// Navigate to an item by id or target tag. Unknown targets are a
    /// silent no-op.
    pub fn navigate(
        &mut self,
        id_or_tag: &str,
        context: Option<Value>,
    ) -> Result<bool, NavigationError> {
        let Some(key) = self.registry.lookup(id_or_tag) else {
            log::debug!("navigation target '{id_or_tag}' not registered");
            return Ok(false);
        };
        self.perform_navigation(key, context, true, true, false)
    }

    /// Navigate to the item registered for a content type. An unknown type
    /// gets an ad-hoc item synthesized and registered around it.
    pub fn navigate_to_type(
        &mut self,
        target_type: ContentType,
        context: Option<Value>,
    ) -> Result<bool, NavigationError> {
        if let Some(key) = self.registry.lookup_type(target_type) {
            return self.perform_navigation(key, context, true, true, false);
        }
        self.navigate_to_unregistered_type(target_type, context, false)
    }

    /// Like `navigate_to_type`, but materializes the target's missing
    /// ancestor chain into the stack before the leaf — deep-linking into a
    /// branch lands on the full path, not a bare leaf.
    pub fn navigate_with_hierarchy(
        &mut self,
        target_type: ContentType,
        context: Option<Value>,
    ) -> Result<bool, NavigationError> {
        if let Some(key) = self.registry.lookup_type(target_type) {
            return self.perform_navigation(key, context, true, true, true);
        }
        self.navigate_to_unregistered_type(target_type, context, true)
    }

    /// Swap the hosted content without touching stack, vault, or journal.
    /// `false` only when neither a resolver nor a page service is wired.
    pub fn replace_content(&mut self, target_type: ContentType, context: Option<Value>) -> bool {
        self.renderer.replace_resolved(target_type, context)
    }

    /// Display an already-constructed instance, bypassing resolution.
    pub fn replace_content_with(
        &mut self,
        instance: Box<dyn Content>,
        context: Option<Value>,
    ) -> bool {
        self.renderer.replace_instance(instance, context)
    }

    /// Navigate to the journal entry preceding the current one. The
    /// backward flag makes the stack replay any parked sub-path for the
    /// target and keeps the journal from growing.
    pub fn go_back(&mut self) -> Result<bool, NavigationError> {
        if !self.journal.can_go_back() {
            return Ok(false);
        }
        let Some(previous) = self.journal.previous_id().map(str::to_owned) else {
            return Ok(false);
        };

        self.backwards_navigated = true;
        let result = self.navigate(&previous, None);
        self.backwards_navigated = false;
        result
    }

    /// Symmetric forward step: bounds-check the journal window, then
    /// navigate to the entry ahead of the cursor. The trimming journal
    /// consumes that window on every back traversal, so at any stable
    /// point this is a clean `false`.
    pub fn go_forward(&mut self) -> Result<bool, NavigationError> {
        let Some(next) = self.journal.forward_id().map(str::to_owned) else {
            return Ok(false);
        };
        self.navigate(&next, None)
    }

    /// Reset journal, stack, and vault; selection is cleared and every
    /// pane item deactivated.
    pub fn clear_journal(&mut self) {
        self.journal.clear();
        self.stack.clear(&mut self.tree);
        self.selected = None;
        self.refresh_back_enabled();
    }

    pub fn can_go_back(&self) -> bool {
        self.journal.can_go_back()
    }

    pub fn selected_item(&self) -> Option<ItemKey> {
        self.selected
    }

    /// Root-to-leaf path of currently active items.
    pub fn navigation_stack(&self) -> &[ItemKey] {
        self.stack.as_slice()
    }

    /// Labels of the active path, root first.
    pub fn breadcrumbs(&self) -> Vec<String> {
        self.stack
            .as_slice()
            .iter()
            .filter_map(|&key| self.tree.get(key).map(|item| item.label.clone()))
            .collect()
    }

    /// Navigable labels, rebuilt by `rebuild_index`.
    pub fn suggestions(&self) -> &[String] {
        &self.suggestions
    }

    /// Navigate to the first pane item whose label matches a chosen
    /// suggestion. Unknown labels are a silent no-op.
    pub fn navigate_to_suggestion(&mut self, label: &str) -> Result<bool, NavigationError> {
        let target = self.tree.depth_first_keys().into_iter().find(|&key| {
            self.tree
                .get(key)
                .is_some_and(|item| item.target_type.is_some() && item.label == label)
        });
        let Some(key) = target else {
            return Ok(false);
        };
        self.perform_navigation(key, None, true, true, false)
    }

    pub fn journal(&self) -> &Journal {
        &self.journal
    }

    pub fn diagnostics(&self) -> &NavigationDiagnostics {
        &self.diagnostics
    }

    pub fn take_events(&mut self) -> Vec<NavigationEvent> {
        std::mem::take(&mut self.events)
    }

    /// Engine state as JSON, for tests and debug overlays.
    pub fn snapshot_json(&self) -> Value {
        #[derive(Serialize)]
        struct EngineSnapshot<'a> {
            counters: &'a NavigationDiagnostics,
            journal: &'a [String],
            journal_index: usize,
            stack: Vec<String>,
            vault_snapshots: usize,
            selected: Option<&'a str>,
        }

        let stack = self
            .stack
            .as_slice()
            .iter()
            .filter_map(|&key| self.tree.get(key).map(|item| item.id.clone()))
            .collect();
        let selected = self
            .selected
            .and_then(|key| self.tree.get(key))
            .map(|item| item.id.as_str());

        serde_json::to_value(EngineSnapshot {
            counters: &self.diagnostics,
            journal: self.journal.entries(),
            journal_index: self.journal.current_index(),
            stack,
            vault_snapshots: self.stack.vault_snapshot_count(),
            selected,
        })
        .unwrap_or(Value::Null)
    }

    fn navigate_to_unregistered_type(
        &mut self,
        target_type: ContentType,
        context: Option<Value>,
        extend_path: bool,
    ) -> Result<bool, NavigationError> {
        let key = self
            .tree
            .push_detached(NavigationItem::new(target_type.name()).with_target(target_type));

        if !self.perform_navigation(key, context, true, true, extend_path)? {
            return Ok(false);
        }

        self.registry.register_item(&self.tree, key);
        Ok(true)
    }

    /// The single internal transition every navigation funnels through.
    ///
    /// Order matters: the self-navigation guard and content rendering run
    /// before any state is touched, so a veto or resolution failure leaves
    /// the engine exactly as it was. Stack and vault update next, then the
    /// journal, then the host-facing events.
    fn perform_navigation(
        &mut self,
        key: ItemKey,
        context: Option<Value>,
        notify: bool,
        bring_into_view: bool,
        extend_path: bool,
    ) -> Result<bool, NavigationError> {
        if self.stack.current() == Some(key) {
            return Ok(false);
        }

        let (item_id, target_type) = {
            let Some(item) = self.tree.get(key) else {
                return Ok(false);
            };
            let Some(target_type) = item.target_type else {
                return Err(NavigationError::MissingTargetType {
                    id: item.id.clone(),
                });
            };
            (item.id.clone(), target_type)
        };

        let instance = self
            .renderer
            .resolve(target_type)
            .ok_or(NavigationError::ResolutionFailed(target_type))?;

        match self.renderer.render(instance, context) {
            RenderOutcome::Cancelled => {
                self.diagnostics.navigations_cancelled += 1;
                return Ok(false);
            }
            RenderOutcome::Committed { header_text } => {
                if let Some(header) = header_text
                    && let Some(item) = self.tree.get_mut(key)
                {
                    item.label = header;
                }
            }
        }

        if !notify {
            return Ok(true);
        }

        let backward = self.backwards_navigated;
        if extend_path {
            self.materialize_ancestors(key);
        }
        self.stack
            .apply(&mut self.tree, key, extend_path, backward, &mut self.diagnostics);
        self.selected = self.stack.current();
        self.expand_ancestors(key);
        self.events.push(NavigationEvent::SelectionChanged { item: key });

        if backward {
            self.diagnostics.journal_trims += 1;
        }
        self.journal.record(&item_id, backward);
        self.refresh_back_enabled();

        if bring_into_view {
            self.events.push(NavigationEvent::BringIntoView(key));
        }

        self.backwards_navigated = false;
        self.diagnostics.navigations_committed += 1;
        log::debug!("{item_id} - {target_type} | navigated");
        Ok(true)
    }

    /// Bring the missing part of the target's ancestor chain onto the
    /// stack, root first. A root-level ancestor from a different branch
    /// takes over the root slot (parking whatever it displaces); deeper
    /// ancestors append.
    fn materialize_ancestors(&mut self, key: ItemKey) {
        for ancestor in self.tree.ancestors(key) {
            if self.stack.contains(ancestor) {
                continue;
            }
            let is_menu = self
                .tree
                .get(ancestor)
                .is_some_and(|item| item.is_menu_element);
            if self.stack.is_empty() || !is_menu {
                self.stack.push_quiet(&mut self.tree, ancestor);
            } else {
                self.stack
                    .update_current_item(&mut self.tree, ancestor, &mut self.diagnostics);
            }
        }
    }

    fn expand_ancestors(&mut self, key: ItemKey) {
        for ancestor in self.tree.ancestors(key) {
            if let Some(item) = self.tree.get_mut(ancestor) {
                item.is_expanded = true;
            }
        }
    }

    fn refresh_back_enabled(&mut self) {
        let can_go_back = self.journal.can_go_back();
        if can_go_back != self.back_enabled {
            self.back_enabled = can_go_back;
            self.events
                .push(NavigationEvent::BackEnabledChanged(can_go_back));
        }
    }
}

impl Default for Navigator {
    fn default() -> Self {
        Self::new()
    }
}
