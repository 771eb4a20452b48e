/* This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/. */

//! Item registry: O(1) lookup of navigation items by id, tag, and content
//! type.
//!
//! Registration is idempotent — re-scanning a tree merges into the existing
//! maps, the first registration of a key wins, and nothing is ever removed.
//! This lets the pane rebuild its item collection at any time without the
//! registry raising on duplicate keys.

use std::collections::HashMap;

use crate::item::{ContentType, ItemKey, ItemTree};

#[derive(Debug, Default)]
pub struct ItemRegistry {
    /// Item ids and target tags share one namespace.
    by_key: HashMap<String, ItemKey>,
    by_type: HashMap<ContentType, ItemKey>,
}

impl ItemRegistry {
    pub fn new() -> Self {
        Self {
            by_key: HashMap::new(),
            by_type: HashMap::new(),
        }
    }

    /// Depth-first scan of the pane tree. Existing entries win; a second
    /// scan of the same tree is a no-op.
    pub fn register_tree(&mut self, tree: &ItemTree) {
        for key in tree.depth_first_keys() {
            self.register_item(tree, key);
        }
    }

    /// Register a single item by id, tag, and content type.
    pub fn register_item(&mut self, tree: &ItemTree, key: ItemKey) {
        let Some(item) = tree.get(key) else {
            return;
        };
        self.by_key.entry(item.id.clone()).or_insert(key);
        if let Some(tag) = &item.target_tag
            && !tag.is_empty()
        {
            self.by_key.entry(tag.clone()).or_insert(key);
        }
        if let Some(target_type) = item.target_type {
            self.by_type.entry(target_type).or_insert(key);
        }
    }

    pub fn lookup(&self, id_or_tag: &str) -> Option<ItemKey> {
        self.by_key.get(id_or_tag).copied()
    }

    pub fn lookup_type(&self, target_type: ContentType) -> Option<ItemKey> {
        self.by_type.get(&target_type).copied()
    }

    pub fn len(&self) -> usize {
        self.by_key.len() + self.by_type.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_key.is_empty() && self.by_type.is_empty()
    }
}
