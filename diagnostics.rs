/* This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/. */

//! Navigation counters, snapshotted as JSON for tests and debug overlays.

use serde::Serialize;
use serde_json::Value;

#[derive(Debug, Default, Serialize)]
pub struct NavigationDiagnostics {
    pub navigations_committed: u64,
    pub navigations_cancelled: u64,
    pub branches_parked: u64,
    pub branches_restored: u64,
    pub snapshots_skipped: u64,
    pub journal_trims: u64,
}

impl NavigationDiagnostics {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn snapshot_json(&self) -> Value {
        serde_json::to_value(self).unwrap_or(Value::Null)
    }
}
