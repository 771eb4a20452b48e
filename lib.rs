/* This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/. */

//! Hierarchical navigation engine for a menu-structured content host.
//!
//! Core structures:
//! - `ItemTree`: arena-backed tree of selectable items, addressed by `ItemKey`
//! - `ItemRegistry`: O(1) lookup of items by id, tag, and content type
//! - `Journal`: linear visit history with back traversal
//! - `Navigator`: façade orchestrating the stack, vault, journal, and renderer
//!
//! The genuinely stateful part lives in `navigator`: the navigation stack
//! (root-to-leaf path of active items) and the history vault, which parks
//! discarded stack suffixes so that backing into a branch later restores the
//! exact sub-path that was active when the branch was left.

pub mod content;
pub mod diagnostics;
pub mod item;
pub mod journal;
pub mod navigator;
pub mod registry;

pub use content::{
    Content, ContentHost, ContentResolver, DefaultActivator, NavigatingHook, PageService,
};
pub use item::{ContentType, ItemKey, ItemTree, NavigationItem};
pub use navigator::{NavigationError, NavigationEvent, Navigator, NavigatorOptions};
pub use registry::ItemRegistry;

pub const VERSION: &str = env!("CARGO_PKG_VERSION");
