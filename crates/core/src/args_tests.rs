// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use super::*;
use crate::clock::FakeClock;

#[test]
fn position_is_shared_by_every_variant() {
    let all: Vec<EventArgs> = vec![
        MouseEnter::new(1, 2, 10).into(),
        MouseMove::new(1, 2).into(),
        MouseLeave::new(1, 2, 10).into(),
        Click::new(1, 2, 10).into(),
    ];

    for args in all {
        assert_eq!((args.x(), args.y()), (1, 2), "{:?}", args.kind());
    }
}

#[test]
fn moves_have_no_timestamp() {
    assert_eq!(EventArgs::from(MouseMove::new(0, 0)).timestamp(), None);
    assert_eq!(EventArgs::from(Click::new(0, 0, 42)).timestamp(), Some(42));
}

#[test]
fn kind_follows_variant() {
    assert_eq!(
        EventArgs::from(MouseLeave::new(3, 4, 0)).kind(),
        ArgsKind::MouseLeave
    );
    assert_eq!(EventArgs::from(Click::new(3, 4, 0)).kind(), ArgsKind::Click);
}

#[test]
fn now_stamps_with_clock_time() {
    let clock = FakeClock::at(1_000);
    let enter = MouseEnter::now(5, 6, &clock);
    clock.advance_ms(250);
    let click = Click::now(5, 6, &clock);

    assert_eq!(enter.timestamp, 1_000);
    assert_eq!(click.timestamp, 1_250);
}

#[test]
fn json_is_tagged_by_kind() {
    let args = EventArgs::from(Click::new(5, 7, 99));
    let json = serde_json::to_value(args).unwrap();
    assert_eq!(
        json,
        serde_json::json!({ "kind": "click", "x": 5, "y": 7, "timestamp": 99 })
    );

    let parsed: EventArgs =
        serde_json::from_str(r#"{ "kind": "mouse_move", "x": -3, "y": 8 }"#).unwrap();
    assert_eq!(parsed, EventArgs::MouseMove(MouseMove::new(-3, 8)));
}
