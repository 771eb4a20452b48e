/* This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/. */

//! Item tree for the navigation pane.
//!
//! The tree is an arena: hosts build items through `push_root`/`push_child`
//! and get back copyable `ItemKey` handles. The engine hands keys around
//! freely (stack, vault, journal lookups) without ever holding references
//! into the arena across mutations. Items are never removed; a changed menu
//! is re-scanned and merged into the registry.

use uuid::Uuid;

/// Stable item handle (arena index — items are never removed).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ItemKey(pub(crate) usize);

impl ItemKey {
    pub fn index(self) -> usize {
        self.0
    }
}

/// Reference to a content type a navigation item points at.
///
/// Content types are named the way viewer and protocol handlers are named:
/// a static id string such as `"page:dashboard"`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ContentType(pub &'static str);

impl ContentType {
    pub fn name(self) -> &'static str {
        self.0
    }
}

impl std::fmt::Display for ContentType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.0)
    }
}

/// A selectable item in the navigation pane.
#[derive(Debug, Clone)]
pub struct NavigationItem {
    /// Stable item identity. Generated when the host does not supply one.
    pub id: String,

    /// Display content, also used as the suggestion and breadcrumb text.
    pub label: String,

    /// Optional secondary lookup key.
    pub target_tag: Option<String>,

    /// Content type to instantiate when the item is selected.
    /// Absent for group/header items.
    pub target_type: Option<ContentType>,

    /// Child items, in pane order.
    pub(crate) children: Vec<ItemKey>,

    /// Parent item, absent for roots and detached items.
    pub(crate) parent: Option<ItemKey>,

    /// True for root-level pane items. Only menu elements may occupy the
    /// root slot of the navigation stack during a vault restore.
    pub is_menu_element: bool,

    /// Whether the item is on the active root-to-leaf path.
    pub is_active: bool,

    /// Whether the item's branch is expanded in the pane.
    pub is_expanded: bool,
}

impl NavigationItem {
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            label: label.into(),
            target_tag: None,
            target_type: None,
            children: Vec::new(),
            parent: None,
            is_menu_element: false,
            is_active: false,
            is_expanded: false,
        }
    }

    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = id.into();
        self
    }

    pub fn with_tag(mut self, tag: impl Into<String>) -> Self {
        self.target_tag = Some(tag.into());
        self
    }

    pub fn with_target(mut self, target_type: ContentType) -> Self {
        self.target_type = Some(target_type);
        self
    }

    pub fn children(&self) -> &[ItemKey] {
        &self.children
    }

    pub fn parent(&self) -> Option<ItemKey> {
        self.parent
    }
}

/// Arena-backed item tree.
#[derive(Debug, Default)]
pub struct ItemTree {
    items: Vec<NavigationItem>,
    roots: Vec<ItemKey>,
}

impl ItemTree {
    pub fn new() -> Self {
        Self {
            items: Vec::new(),
            roots: Vec::new(),
        }
    }

    /// Add a root-level pane item.
    pub fn push_root(&mut self, mut item: NavigationItem) -> ItemKey {
        item.is_menu_element = true;
        item.parent = None;
        let key = ItemKey(self.items.len());
        self.items.push(item);
        self.roots.push(key);
        key
    }

    /// Add a child under an existing item. Returns `None` if the parent
    /// does not exist.
    pub fn push_child(&mut self, parent: ItemKey, mut item: NavigationItem) -> Option<ItemKey> {
        if self.get(parent).is_none() {
            return None;
        }
        item.is_menu_element = false;
        item.parent = Some(parent);
        let key = ItemKey(self.items.len());
        self.items.push(item);
        self.items[parent.0].children.push(key);
        Some(key)
    }

    /// Add an item that belongs to no branch of the pane. Used for ad-hoc
    /// items synthesized around a bare content type.
    pub fn push_detached(&mut self, mut item: NavigationItem) -> ItemKey {
        item.is_menu_element = false;
        item.parent = None;
        let key = ItemKey(self.items.len());
        self.items.push(item);
        key
    }

    pub fn get(&self, key: ItemKey) -> Option<&NavigationItem> {
        self.items.get(key.0)
    }

    pub fn get_mut(&mut self, key: ItemKey) -> Option<&mut NavigationItem> {
        self.items.get_mut(key.0)
    }

    pub fn contains(&self, key: ItemKey) -> bool {
        key.0 < self.items.len()
    }

    pub fn roots(&self) -> &[ItemKey] {
        &self.roots
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Keys of all pane items in depth-first order. Detached items are not
    /// part of any branch and are not visited.
    pub fn depth_first_keys(&self) -> Vec<ItemKey> {
        let mut order = Vec::with_capacity(self.items.len());
        let mut pending: Vec<ItemKey> = self.roots.iter().rev().copied().collect();
        while let Some(key) = pending.pop() {
            order.push(key);
            if let Some(item) = self.get(key) {
                pending.extend(item.children.iter().rev().copied());
            }
        }
        order
    }

    /// Ancestor chain of an item, root first, excluding the item itself.
    pub fn ancestors(&self, key: ItemKey) -> Vec<ItemKey> {
        let mut chain = Vec::new();
        let mut cursor = self.get(key).and_then(|item| item.parent);
        while let Some(parent) = cursor {
            chain.push(parent);
            cursor = self.get(parent).and_then(|item| item.parent);
        }
        chain.reverse();
        chain
    }
}
