// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

//! ui-event-core: In-process dispatcher for UI interaction events
//!
//! This crate provides:
//! - Event type tags for pointer and click interactions
//! - Payload records carrying pointer position and interaction time
//! - An event hub mapping tags to ordered callbacks with synchronous dispatch
//! - Clock and configuration abstractions for the embedding application

pub mod clock;
pub mod id;

pub mod args;
pub mod config;
pub mod event;
pub mod events;

// Re-exports
pub use args::{ArgsKind, Click, EventArgs, MouseEnter, MouseLeave, MouseMove, Position};
pub use clock::{Clock, FakeClock, SystemClock};
pub use config::{ConfigError, HubConfig};
pub use event::{EventType, ParseEventTypeError};
pub use events::{EventHub, Subscription};
pub use id::SubscriptionId;
