/* This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/. */

//! Linear journal of visited item ids.
//!
//! The journal is an append/trim log with a cursor. Recording a backward
//! navigation first trims the two most recent entries — the forward step
//! being undone and the entry the backward step would otherwise duplicate —
//! so re-traversing a path never piles up stale duplicates. After every
//! record the cursor points at the entry for the active leaf.

const CAPACITY_HINT: usize = 50;

#[derive(Debug)]
pub struct Journal {
    entries: Vec<String>,
    current_index: usize,
}

impl Journal {
    pub fn new() -> Self {
        Self::with_capacity(CAPACITY_HINT)
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            entries: Vec::with_capacity(capacity),
            current_index: 0,
        }
    }

    /// Append the id of a freshly committed navigation. `backward` marks
    /// that the navigation was a back traversal, which trims the log before
    /// appending instead of growing it.
    pub fn record(&mut self, id: &str, backward: bool) {
        if backward {
            let trimmed = self.entries.len().min(2);
            self.entries.truncate(self.entries.len() - trimmed);
            self.current_index = self.current_index.saturating_sub(2);
        }

        self.entries.push(id.to_owned());
        self.current_index = self.entries.len() - 1;

        log::debug!(
            "journal: {} entries, cursor {} -> {}",
            self.entries.len(),
            self.current_index,
            id
        );
    }

    pub fn can_go_back(&self) -> bool {
        self.entries.len() > 1
    }

    /// Id of the entry immediately preceding the cursor.
    pub fn previous_id(&self) -> Option<&str> {
        if self.current_index == 0 {
            return None;
        }
        self.entries.get(self.current_index - 1).map(String::as_str)
    }

    /// Id of the entry immediately ahead of the cursor. The trimming in
    /// `record` consumes the forward window, so at any stable point this
    /// is `None`; the bounds check keeps forward traversal a clean no-op
    /// rather than an unconditional failure.
    pub fn forward_id(&self) -> Option<&str> {
        self.entries.get(self.current_index + 1).map(String::as_str)
    }

    pub fn current_id(&self) -> Option<&str> {
        self.entries.get(self.current_index).map(String::as_str)
    }

    pub fn current_index(&self) -> usize {
        self.current_index
    }

    pub fn entries(&self) -> &[String] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn clear(&mut self) {
        self.entries.clear();
        self.current_index = 0;
    }
}

impl Default for Journal {
    fn default() -> Self {
        Self::new()
    }
}
