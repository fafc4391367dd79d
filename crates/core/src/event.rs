// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Event type tags for UI interactions

use crate::args::ArgsKind;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Category of UI interaction a callback can be registered for
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EventType {
    /// Pointer entered the element
    MouseEnter,
    /// Pointer moved within the element
    MouseMove,
    /// Pointer left the element
    MouseLeave,
    /// Primary button click
    LeftClick,
    /// Secondary button click
    RightClick,
}

impl EventType {
    /// Every event type, in declaration order
    pub const ALL: [EventType; 5] = [
        EventType::MouseEnter,
        EventType::MouseMove,
        EventType::MouseLeave,
        EventType::LeftClick,
        EventType::RightClick,
    ];

    /// Stable name for logging and configuration
    pub fn name(&self) -> &'static str {
        match self {
            EventType::MouseEnter => "mouse_enter",
            EventType::MouseMove => "mouse_move",
            EventType::MouseLeave => "mouse_leave",
            EventType::LeftClick => "left_click",
            EventType::RightClick => "right_click",
        }
    }

    /// Payload kind callers conventionally pass when triggering this type.
    ///
    /// The hub never enforces this pairing.
    pub fn conventional_args(&self) -> ArgsKind {
        match self {
            EventType::MouseEnter => ArgsKind::MouseEnter,
            EventType::MouseMove => ArgsKind::MouseMove,
            EventType::MouseLeave => ArgsKind::MouseLeave,
            EventType::LeftClick | EventType::RightClick => ArgsKind::Click,
        }
    }
}

impl fmt::Display for EventType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Returned when a string names no known event type
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown event type: {input:?}")]
pub struct ParseEventTypeError {
    pub input: String,
}

impl FromStr for EventType {
    type Err = ParseEventTypeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_ascii_lowercase().replace('-', "_");
        EventType::ALL
            .into_iter()
            .find(|ty| ty.name() == normalized)
            .ok_or_else(|| ParseEventTypeError {
                input: s.to_string(),
            })
    }
}

#[cfg(test)]
#[path = "event_tests.rs"]
mod tests;
