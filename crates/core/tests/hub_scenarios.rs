// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]

//! Scenario tests for the event hub
//!
//! Drives the public API the way an embedding UI loop would.

use std::cell::RefCell;
use std::rc::Rc;
use ui_event_core::{
    Click, EventArgs, EventHub, EventType, HubConfig, MouseEnter, MouseMove, Position,
    SubscriptionId,
};

#[test]
fn click_handlers_run_in_order_until_removed() {
    let hub = EventHub::new();
    let calls: Rc<RefCell<Vec<(char, i32, i32)>>> = Rc::default();

    let log = Rc::clone(&calls);
    let a = hub.subscribe(EventType::LeftClick, move |args: &EventArgs| {
        log.borrow_mut().push(('A', args.x(), args.y()))
    });
    let log = Rc::clone(&calls);
    hub.subscribe(EventType::LeftClick, move |args: &EventArgs| {
        log.borrow_mut().push(('B', args.x(), args.y()))
    });

    hub.trigger(EventType::LeftClick, &Click::new(5, 7, 0).into());
    assert_eq!(*calls.borrow(), vec![('A', 5, 7), ('B', 5, 7)]);

    calls.borrow_mut().clear();
    assert!(hub.unsubscribe(a));
    hub.trigger(EventType::LeftClick, &Click::new(5, 7, 0).into());
    assert_eq!(*calls.borrow(), vec![('B', 5, 7)]);
}

#[test]
fn fresh_hub_reports_zero_for_right_click() {
    let hub = EventHub::new();
    assert_eq!(hub.count(EventType::RightClick), 0);
    assert!(!hub.exists(EventType::RightClick));
}

#[test]
fn total_count_spans_event_types() {
    let hub = EventHub::new();
    hub.subscribe(EventType::MouseEnter, |_: &EventArgs| {});
    hub.subscribe(EventType::MouseMove, |_: &EventArgs| {});
    assert_eq!(hub.total_count(), 2);
}

#[test]
fn never_issued_id_leaves_registry_unchanged() {
    let hub = EventHub::new();
    let id = hub.subscribe(EventType::MouseMove, |_: &EventArgs| {});

    assert!(!hub.unsubscribe(SubscriptionId(id.0 + 1)));
    assert_eq!(hub.subscription_ids(), vec![id]);
}

#[test]
fn hub_built_from_toml_config() {
    let config = HubConfig::from_toml_str(
        r#"
        label = "sidebar"
        warn_on_mismatched_args = true
        "#,
    )
    .unwrap();
    let hub = EventHub::with_config(config);
    assert_eq!(hub.config().label, "sidebar");

    let seen = Rc::new(RefCell::new(None));
    let sink = Rc::clone(&seen);
    hub.subscribe(EventType::MouseEnter, move |args: &EventArgs| {
        *sink.borrow_mut() = Some(*args)
    });

    // Mismatched payloads are still delivered
    hub.trigger(EventType::MouseEnter, &MouseMove::new(1, 2).into());
    assert_eq!(
        *seen.borrow(),
        Some(EventArgs::MouseMove(MouseMove::new(1, 2)))
    );

    hub.trigger(EventType::MouseEnter, &MouseEnter::new(3, 4, 77).into());
    assert_eq!(seen.borrow().and_then(|args| args.timestamp()), Some(77));
}

#[test]
fn event_types_parse_from_config_names() {
    let types: Vec<EventType> = ["mouse_enter", "left-click", "RIGHT_CLICK"]
        .iter()
        .map(|name| name.parse().unwrap())
        .collect();
    assert_eq!(
        types,
        vec![
            EventType::MouseEnter,
            EventType::LeftClick,
            EventType::RightClick
        ]
    );
    assert!("hover".parse::<EventType>().is_err());
}
