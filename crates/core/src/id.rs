// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Subscription handles and their generator

use std::cell::Cell;
use std::fmt;

/// Handle returned by a subscription, used to remove it later
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SubscriptionId(pub u64);

impl fmt::Display for SubscriptionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Sequential id generator starting at 0.
///
/// Ids are never recycled, even after the subscription they named is removed.
#[derive(Debug, Default)]
pub struct SequentialIds {
    next: Cell<u64>,
}

impl SequentialIds {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn next(&self) -> SubscriptionId {
        let n = self.next.get();
        self.next.set(n + 1);
        SubscriptionId(n)
    }

    /// Number of ids issued so far
    pub fn issued(&self) -> u64 {
        self.next.get()
    }
}

#[cfg(test)]
#[path = "id_tests.rs"]
mod tests;
