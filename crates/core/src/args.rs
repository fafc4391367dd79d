// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Event argument payloads
//!
//! Every payload carries a pointer position. Enter, leave and click payloads
//! also carry the time the interaction happened, in Unix milliseconds.

use crate::clock::Clock;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Access to the pointer position shared by every payload
pub trait Position {
    fn x(&self) -> i32;
    fn y(&self) -> i32;
}

/// Pointer moved
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MouseMove {
    pub x: i32,
    pub y: i32,
}

impl MouseMove {
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

/// Pointer entered
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MouseEnter {
    pub x: i32,
    pub y: i32,
    pub timestamp: i64,
}

/// Pointer left
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MouseLeave {
    pub x: i32,
    pub y: i32,
    pub timestamp: i64,
}

/// Button click, used for both primary and secondary buttons
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Click {
    pub x: i32,
    pub y: i32,
    pub timestamp: i64,
}

impl Position for MouseMove {
    fn x(&self) -> i32 {
        self.x
    }

    fn y(&self) -> i32 {
        self.y
    }
}

macro_rules! timestamped_args {
    ($($name:ident),+) => {$(
        impl $name {
            pub fn new(x: i32, y: i32, timestamp: i64) -> Self {
                Self { x, y, timestamp }
            }

            /// Stamp the payload with the clock's current time
            pub fn now(x: i32, y: i32, clock: &impl Clock) -> Self {
                Self::new(x, y, clock.now_ms())
            }
        }

        impl Position for $name {
            fn x(&self) -> i32 {
                self.x
            }

            fn y(&self) -> i32 {
                self.y
            }
        }

        impl From<$name> for EventArgs {
            fn from(args: $name) -> Self {
                EventArgs::$name(args)
            }
        }
    )+};
}

timestamped_args!(MouseEnter, MouseLeave, Click);

impl From<MouseMove> for EventArgs {
    fn from(args: MouseMove) -> Self {
        EventArgs::MouseMove(args)
    }
}

/// Discriminant of an [`EventArgs`] value
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ArgsKind {
    MouseEnter,
    MouseMove,
    MouseLeave,
    Click,
}

impl ArgsKind {
    pub fn name(&self) -> &'static str {
        match self {
            ArgsKind::MouseEnter => "mouse_enter",
            ArgsKind::MouseMove => "mouse_move",
            ArgsKind::MouseLeave => "mouse_leave",
            ArgsKind::Click => "click",
        }
    }
}

impl fmt::Display for ArgsKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Payload handed to callbacks when an event is triggered
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum EventArgs {
    MouseEnter(MouseEnter),
    MouseMove(MouseMove),
    MouseLeave(MouseLeave),
    Click(Click),
}

impl EventArgs {
    pub fn kind(&self) -> ArgsKind {
        match self {
            EventArgs::MouseEnter(_) => ArgsKind::MouseEnter,
            EventArgs::MouseMove(_) => ArgsKind::MouseMove,
            EventArgs::MouseLeave(_) => ArgsKind::MouseLeave,
            EventArgs::Click(_) => ArgsKind::Click,
        }
    }

    /// Interaction time, absent for moves
    pub fn timestamp(&self) -> Option<i64> {
        match self {
            EventArgs::MouseEnter(args) => Some(args.timestamp),
            EventArgs::MouseLeave(args) => Some(args.timestamp),
            EventArgs::Click(args) => Some(args.timestamp),
            EventArgs::MouseMove(_) => None,
        }
    }

    fn position(&self) -> &dyn Position {
        match self {
            EventArgs::MouseEnter(args) => args,
            EventArgs::MouseMove(args) => args,
            EventArgs::MouseLeave(args) => args,
            EventArgs::Click(args) => args,
        }
    }
}

impl Position for EventArgs {
    fn x(&self) -> i32 {
        self.position().x()
    }

    fn y(&self) -> i32 {
        self.position().y()
    }
}

#[cfg(test)]
#[path = "args_tests.rs"]
mod tests;
