/* This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/. */

//! Content resolution and rendering.
//!
//! A navigation target carries a `ContentType`; turning that into a live
//! content instance goes through an explicit prioritized chain of resolver
//! strategies: an injected `ContentResolver`, then a `PageService`, then the
//! `DefaultActivator`'s registered constructors. The first strategy that
//! yields an instance wins.
//!
//! Rendering runs the host's `on_navigating` veto hook before anything else;
//! a veto aborts the whole navigation with no state change.

use std::collections::HashMap;

use serde_json::Value;

use crate::item::ContentType;

/// A resolved content instance handed to the content host.
pub trait Content {
    /// The content type this instance was resolved for.
    fn content_type(&self) -> ContentType;

    /// Optional header text; when present, the navigation item's display
    /// label is updated to match.
    fn header_text(&self) -> Option<String> {
        None
    }

    /// Attach the external data binding passed along with the navigation.
    fn bind(&mut self, _context: Value) {}
}

/// Dependency-injection style provider, the first resolution strategy.
pub trait ContentResolver {
    fn resolve(&self, target_type: ContentType) -> Option<Box<dyn Content>>;
}

/// Pluggable page service, the second resolution strategy.
pub trait PageService {
    fn page(&self, target_type: ContentType) -> Option<Box<dyn Content>>;
}

/// Sink the engine hands resolved content to. Display has no return value;
/// the engine assumes the host is always available once wired.
pub trait ContentHost {
    fn display(&mut self, content: Box<dyn Content>);
}

/// Hook invoked with the candidate instance before a navigation commits.
/// Returning `true` cancels the navigation.
pub type NavigatingHook = Box<dyn FnMut(&dyn Content) -> bool>;

/// Fallback strategy: constructor closures registered per content type.
#[derive(Default)]
pub struct DefaultActivator {
    constructors: HashMap<ContentType, Box<dyn Fn() -> Box<dyn Content>>>,
}

impl DefaultActivator {
    pub fn new() -> Self {
        Self {
            constructors: HashMap::new(),
        }
    }

    /// Register a constructor for a content type. The last registration for
    /// a type wins.
    pub fn register_fn<F>(&mut self, target_type: ContentType, constructor: F)
    where
        F: Fn() -> Box<dyn Content> + 'static,
    {
        self.constructors.insert(target_type, Box::new(constructor));
    }

    pub fn activate(&self, target_type: ContentType) -> Option<Box<dyn Content>> {
        self.constructors
            .get(&target_type)
            .map(|constructor| constructor())
    }

    pub fn has(&self, target_type: ContentType) -> bool {
        self.constructors.contains_key(&target_type)
    }
}

/// Outcome of a render attempt.
pub(crate) enum RenderOutcome {
    Committed { header_text: Option<String> },
    Cancelled,
}

/// Owns the resolution chain, the content host, and the veto hook.
#[derive(Default)]
pub struct ContentRenderer {
    resolver: Option<Box<dyn ContentResolver>>,
    page_service: Option<Box<dyn PageService>>,
    activator: DefaultActivator,
    host: Option<Box<dyn ContentHost>>,
    on_navigating: Option<NavigatingHook>,
}

impl ContentRenderer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_resolver(&mut self, resolver: Box<dyn ContentResolver>) {
        self.resolver = Some(resolver);
    }

    pub fn set_page_service(&mut self, page_service: Box<dyn PageService>) {
        self.page_service = Some(page_service);
    }

    pub fn set_host(&mut self, host: Box<dyn ContentHost>) {
        self.host = Some(host);
    }

    pub fn set_navigating_hook(&mut self, hook: NavigatingHook) {
        self.on_navigating = Some(hook);
    }

    pub fn activator_mut(&mut self) -> &mut DefaultActivator {
        &mut self.activator
    }

    /// Try the strategies in priority order: resolver, page service,
    /// default activator.
    pub fn resolve(&self, target_type: ContentType) -> Option<Box<dyn Content>> {
        if let Some(resolver) = &self.resolver
            && let Some(instance) = resolver.resolve(target_type)
        {
            return Some(instance);
        }
        if let Some(page_service) = &self.page_service
            && let Some(instance) = page_service.page(target_type)
        {
            return Some(instance);
        }
        self.activator.activate(target_type)
    }

    /// Run the veto hook, then bind the context and hand the instance to
    /// the host. Returns the header text for the caller to copy back into
    /// the item when the navigation commits.
    pub(crate) fn render(&mut self, mut instance: Box<dyn Content>, context: Option<Value>) -> RenderOutcome {
        if let Some(hook) = &mut self.on_navigating
            && hook(instance.as_ref())
        {
            log::debug!("navigation cancelled by hook for {}", instance.content_type());
            return RenderOutcome::Cancelled;
        }

        let header_text = instance.header_text();
        if let Some(context) = context {
            instance.bind(context);
        }
        if let Some(host) = &mut self.host {
            host.display(instance);
        }

        RenderOutcome::Committed { header_text }
    }

    /// Content replacement outside the navigation flow: resolver and page
    /// service only — the default activator is not consulted. Returns
    /// `false` only when both strategies are absent.
    pub fn replace_resolved(&mut self, target_type: ContentType, context: Option<Value>) -> bool {
        if let Some(resolver) = &self.resolver {
            if let Some(instance) = resolver.resolve(target_type) {
                self.replace_instance(instance, context);
            }
            return true;
        }
        if let Some(page_service) = &self.page_service {
            if let Some(instance) = page_service.page(target_type) {
                self.replace_instance(instance, context);
            }
            return true;
        }
        false
    }

    /// Display an already-constructed instance, bypassing resolution and
    /// the veto hook.
    pub fn replace_instance(&mut self, mut instance: Box<dyn Content>, context: Option<Value>) -> bool {
        if let Some(context) = context {
            instance.bind(context);
        }
        if let Some(host) = &mut self.host {
            host.display(instance);
        }
        true
    }
}
