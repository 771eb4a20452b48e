/* This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/. */

//! Navigation stack and history vault.
//!
//! The stack is the root-to-leaf path of active items — where we *are*, as
//! opposed to the journal's where we've *been*. When a navigation discards
//! part of the path (switching to a sibling branch, or jumping back up),
//! the discarded suffix is parked in the vault, keyed by the leaf that was
//! abandoned. Backing into that leaf later replays the most recent parked
//! snapshot, rebuilding the exact sub-path that was active. Snapshots are
//! consumed on replay — one restoration per recorded truncation.
//!
//! Invariants at every stable point: the stack is non-empty once navigation
//! has started, holds no duplicate keys, and the active flag of an item
//! mirrors its stack membership.

use std::collections::HashMap;

use crate::diagnostics::NavigationDiagnostics;
use crate::item::{ItemKey, ItemTree};

/// Parked stack suffixes, keyed by the item that was the leaf when its
/// branch was abandoned.
#[derive(Debug, Default)]
pub(crate) struct HistoryVault {
    snapshots: HashMap<ItemKey, Vec<Vec<ItemKey>>>,
}

impl HistoryVault {
    pub(crate) fn record(&mut self, parked_leaf: ItemKey, snapshot: Vec<ItemKey>) {
        self.snapshots.entry(parked_leaf).or_default().push(snapshot);
    }

    /// Remove and return the most recent snapshot for a leaf.
    pub(crate) fn take_latest(&mut self, parked_leaf: ItemKey) -> Option<Vec<ItemKey>> {
        self.snapshots.get_mut(&parked_leaf)?.pop()
    }

    pub(crate) fn snapshot_count(&self) -> usize {
        self.snapshots.values().map(Vec::len).sum()
    }

    pub(crate) fn clear(&mut self) {
        self.snapshots.clear();
    }
}

#[derive(Debug, Default)]
pub(crate) struct StackState {
    stack: Vec<ItemKey>,
    vault: HistoryVault,
}

impl StackState {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    pub(crate) fn current(&self) -> Option<ItemKey> {
        self.stack.last().copied()
    }

    pub(crate) fn contains(&self, key: ItemKey) -> bool {
        self.stack.contains(&key)
    }

    pub(crate) fn is_empty(&self) -> bool {
        self.stack.is_empty()
    }

    pub(crate) fn as_slice(&self) -> &[ItemKey] {
        &self.stack
    }

    pub(crate) fn vault_snapshot_count(&self) -> usize {
        self.vault.snapshot_count()
    }

    /// Apply a committed navigation to the stack and vault.
    ///
    /// Backward navigations first replay any parked snapshot for the target.
    /// `extend_path` selects between the growing path (append the item as
    /// the new leaf) and the replacing path (swap it into the root slot,
    /// parking whatever branch was active). Afterwards the stack is
    /// truncated down to the target, parking anything deeper than it.
    pub(crate) fn apply(
        &mut self,
        tree: &mut ItemTree,
        key: ItemKey,
        extend_path: bool,
        backward: bool,
        diagnostics: &mut NavigationDiagnostics,
    ) {
        if backward {
            self.restore_from_vault(tree, key, diagnostics);
        }

        if extend_path {
            if !self.contains(key) {
                self.push_quiet(tree, key);
            }
        } else {
            self.update_current_item(tree, key, diagnostics);
        }

        self.truncate_to_item(tree, key, diagnostics);
    }

    /// Replacing path: the item becomes the sole stack entry, taking over
    /// the root slot. A multi-level branch being displaced is parked first
    /// so it can be restored when the user backs into its leaf.
    pub(crate) fn update_current_item(
        &mut self,
        tree: &mut ItemTree,
        key: ItemKey,
        diagnostics: &mut NavigationDiagnostics,
    ) {
        if self.contains(key) {
            return;
        }

        if self.stack.len() > 1 {
            self.park_branch(key, diagnostics);
        }

        if self.stack.is_empty() {
            self.push_quiet(tree, key);
        } else {
            self.replace_first(tree, key);
        }

        self.truncate_to_len(tree, 1);
    }

    /// Activate an item and append it as the new leaf.
    pub(crate) fn push_quiet(&mut self, tree: &mut ItemTree, key: ItemKey) {
        if let Some(item) = tree.get_mut(key) {
            item.is_active = true;
        }
        self.stack.push(key);
    }

    pub(crate) fn clear(&mut self, tree: &mut ItemTree) {
        self.truncate_to_len(tree, 0);
        self.vault.clear();
    }

    /// Snapshot the slice of the stack from `incoming`'s position (or the
    /// root when it is not on the stack) up to, but excluding, the current
    /// leaf, and park it under the leaf's key.
    fn park_branch(&mut self, incoming: ItemKey, diagnostics: &mut NavigationDiagnostics) {
        let Some(&parked_leaf) = self.stack.last() else {
            return;
        };
        let start = self
            .stack
            .iter()
            .position(|&key| key == incoming)
            .unwrap_or(0);
        let end = self.stack.len() - 1;
        if start >= end {
            return;
        }

        self.vault.record(parked_leaf, self.stack[start..end].to_vec());
        diagnostics.branches_parked += 1;
    }

    /// Replay the most recent snapshot parked under `key`, then re-append
    /// `key` itself as the leaf. A snapshot whose first element is a
    /// root-level item takes over the root slot; the rest re-push in order.
    /// Snapshots referencing keys a rebuilt tree no longer knows are
    /// skipped, not fatal.
    fn restore_from_vault(
        &mut self,
        tree: &mut ItemTree,
        key: ItemKey,
        diagnostics: &mut NavigationDiagnostics,
    ) {
        let Some(snapshot) = self.vault.take_latest(key) else {
            return;
        };

        if snapshot.iter().any(|&entry| tree.get(entry).is_none()) {
            log::warn!("skipping stack snapshot with stale item keys");
            diagnostics.snapshots_skipped += 1;
            return;
        }

        let mut remainder = snapshot.as_slice();
        if let Some((&first, tail)) = snapshot.split_first()
            && tree.get(first).is_some_and(|item| item.is_menu_element)
        {
            if self.stack.is_empty() {
                self.push_quiet(tree, first);
            } else {
                self.replace_first(tree, first);
            }
            remainder = tail;
        }

        for &entry in remainder {
            if !self.contains(entry) {
                self.push_quiet(tree, entry);
            }
        }

        if !self.contains(key) {
            self.push_quiet(tree, key);
        }

        diagnostics.branches_restored += 1;
    }

    /// Drop everything deeper than `key`, parking the removed suffix first
    /// so the deeper path is deferred into the vault rather than lost.
    fn truncate_to_item(
        &mut self,
        tree: &mut ItemTree,
        key: ItemKey,
        diagnostics: &mut NavigationDiagnostics,
    ) {
        if self.stack.len() <= 1 {
            return;
        }
        let Some(index) = self.stack.iter().position(|&entry| entry == key) else {
            return;
        };
        if index >= self.stack.len() - 1 {
            return;
        }

        self.park_branch(key, diagnostics);
        self.truncate_to_len(tree, index + 1);
    }

    /// Remove tail entries, highest index first, deactivating each.
    fn truncate_to_len(&mut self, tree: &mut ItemTree, len: usize) {
        while self.stack.len() > len {
            if let Some(removed) = self.stack.pop()
                && let Some(item) = tree.get_mut(removed)
            {
                item.is_active = false;
            }
        }
    }

    fn replace_first(&mut self, tree: &mut ItemTree, key: ItemKey) {
        if let Some(&old) = self.stack.first()
            && let Some(item) = tree.get_mut(old)
        {
            item.is_active = false;
        }
        self.stack[0] = key;
        if let Some(item) = tree.get_mut(key) {
            item.is_active = true;
        }
    }
}
