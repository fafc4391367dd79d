// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Events system for UI interactions
//!
//! This module provides:
//! - `EventHub` - Registry of callbacks keyed by event type, with synchronous dispatch
//! - `Subscription` - A registered callback and its removal handle

mod hub;
mod subscription;

pub use hub::EventHub;
pub use subscription::{Callback, Subscription};
