// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Event hub routing UI events to registered callbacks
//!
//! Dispatch is synchronous and runs on the caller's thread. The hub is
//! `!Send` and stays on the thread running the UI loop.
//!
//! # Re-entrancy
//!
//! [`EventHub::trigger`] snapshots the callbacks registered for the event type
//! before calling any of them, and holds no borrow of the registry while they
//! run. Callbacks may therefore subscribe, unsubscribe or trigger through a
//! cloned handle. Changes apply to the next trigger: a callback removed
//! mid-dispatch still runs in the current one, and a callback added
//! mid-dispatch does not.

use super::subscription::Subscription;
use crate::args::EventArgs;
use crate::config::HubConfig;
use crate::event::EventType;
use crate::id::{SequentialIds, SubscriptionId};
use std::cell::RefCell;
use std::collections::HashMap;
use std::fmt;
use std::mem;
use std::rc::Rc;

#[derive(Default)]
struct Registry {
    handlers: HashMap<EventType, Vec<Subscription>>,
    ids: SequentialIds,
}

/// Registry of callbacks keyed by event type.
///
/// Cloning yields another handle to the same registry.
#[derive(Clone)]
pub struct EventHub {
    registry: Rc<RefCell<Registry>>,
    config: Rc<HubConfig>,
}

impl EventHub {
    pub fn new() -> Self {
        Self::with_config(HubConfig::default())
    }

    pub fn with_config(config: HubConfig) -> Self {
        Self {
            registry: Rc::new(RefCell::new(Registry::default())),
            config: Rc::new(config),
        }
    }

    pub fn config(&self) -> &HubConfig {
        &self.config
    }

    /// Number of callbacks registered for `event_type`
    pub fn count(&self, event_type: EventType) -> usize {
        self.registry
            .borrow()
            .handlers
            .get(&event_type)
            .map_or(0, Vec::len)
    }

    /// Number of callbacks registered across all event types
    pub fn total_count(&self) -> usize {
        self.registry.borrow().handlers.values().map(Vec::len).sum()
    }

    pub fn exists(&self, event_type: EventType) -> bool {
        self.count(event_type) > 0
    }

    /// Register a callback for an event type.
    /// Returns the handle used to unsubscribe it.
    pub fn subscribe<F>(&self, event_type: EventType, callback: F) -> SubscriptionId
    where
        F: Fn(&EventArgs) + 'static,
    {
        let mut registry = self.registry.borrow_mut();
        let id = registry.ids.next();
        registry
            .handlers
            .entry(event_type)
            .or_default()
            .push(Subscription::new(id, callback));

        tracing::debug!(hub = %self.config.label, event = %event_type, %id, "subscribed");
        id
    }

    /// Call every callback registered for `event_type`, in subscription order.
    ///
    /// The payload is not checked against the event type.
    pub fn trigger(&self, event_type: EventType, args: &EventArgs) {
        if self.config.warn_on_mismatched_args && args.kind() != event_type.conventional_args() {
            tracing::warn!(
                hub = %self.config.label,
                event = %event_type,
                args = %args.kind(),
                expected = %event_type.conventional_args(),
                "payload does not match event type"
            );
        }

        let snapshot: Vec<Subscription> = self
            .registry
            .borrow()
            .handlers
            .get(&event_type)
            .cloned()
            .unwrap_or_default();

        tracing::trace!(
            hub = %self.config.label,
            event = %event_type,
            callbacks = snapshot.len(),
            "trigger"
        );

        for subscription in &snapshot {
            subscription.invoke(args);
        }
    }

    /// Remove the callback registered under `id`.
    /// Returns false if no callback had that id.
    pub fn unsubscribe(&self, id: SubscriptionId) -> bool {
        let mut removed = Vec::new();
        {
            let mut registry = self.registry.borrow_mut();
            for subscriptions in registry.handlers.values_mut() {
                let (matched, kept): (Vec<_>, Vec<_>) = mem::take(subscriptions)
                    .into_iter()
                    .partition(|subscription| subscription.id == id);
                *subscriptions = kept;
                removed.extend(matched);
            }
            registry.handlers.retain(|_, subscriptions| !subscriptions.is_empty());
        }

        // Callbacks are dropped outside the borrow; their captures may hold hub handles.
        let found = !removed.is_empty();
        drop(removed);

        tracing::debug!(hub = %self.config.label, %id, removed = found, "unsubscribe");
        found
    }

    /// Remove every callback for every event type
    pub fn unsubscribe_all(&self) {
        let handlers = mem::take(&mut self.registry.borrow_mut().handlers);
        let dropped: usize = handlers.values().map(Vec::len).sum();
        drop(handlers);

        tracing::debug!(hub = %self.config.label, dropped, "unsubscribed all");
    }

    /// Ids of every registered callback, ascending
    pub fn subscription_ids(&self) -> Vec<SubscriptionId> {
        let mut ids: Vec<SubscriptionId> = self
            .registry
            .borrow()
            .handlers
            .values()
            .flatten()
            .map(|subscription| subscription.id)
            .collect();
        ids.sort_unstable();
        ids
    }

    /// Event types with at least one callback
    pub fn event_types(&self) -> Vec<EventType> {
        EventType::ALL
            .into_iter()
            .filter(|event_type| self.exists(*event_type))
            .collect()
    }
}

impl Default for EventHub {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for EventHub {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EventHub")
            .field("label", &self.config.label)
            .field("callbacks", &self.total_count())
            .finish()
    }
}

#[cfg(test)]
#[path = "hub_tests.rs"]
mod tests;
