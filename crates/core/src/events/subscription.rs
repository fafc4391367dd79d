// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Registered callbacks

use crate::args::EventArgs;
use crate::id::SubscriptionId;
use std::fmt;
use std::rc::Rc;

/// Handler invoked with the payload of a triggered event.
///
/// Reference counted so a dispatch can keep running a callback that a
/// previous callback in the same dispatch removed.
pub type Callback = Rc<dyn Fn(&EventArgs)>;

/// A callback together with the handle that removes it
#[derive(Clone)]
pub struct Subscription {
    pub id: SubscriptionId,
    callback: Callback,
}

impl Subscription {
    pub fn new(id: SubscriptionId, callback: impl Fn(&EventArgs) + 'static) -> Self {
        Self {
            id,
            callback: Rc::new(callback),
        }
    }

    pub fn invoke(&self, args: &EventArgs) {
        (self.callback)(args)
    }
}

impl fmt::Debug for Subscription {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Subscription")
            .field("id", &self.id)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
#[path = "subscription_tests.rs"]
mod tests;
