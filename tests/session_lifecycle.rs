//! Session lifecycle through the public contract: creation shape,
//! isolation between sessions, and engine-level rejections.

mod common;

use questhall::engine::contract::PlayRequest;

#[test]
fn new_session_reports_start_room_and_single_discovery() {
    let engine = common::engine();
    let response = common::start(&engine, 1);

    assert_eq!(response.current_room_name, "Grand Foyer");
    assert!(!response.current_room_description.is_empty());
    assert!(response.welcome_text.is_some());
    assert!(response.titles.is_some(), "creation carries the title list");
    assert!(!response.invalid_command);

    let map = response.map.expect("map data present");
    assert_eq!(map.visited_room_count, 1);
    assert_eq!(map.discovered_rooms.len(), 1);
    assert!(map.discovered_rooms[0].is_current_location);
    assert_eq!(map.current_room, map.discovered_rooms[0].number);
}

#[test]
fn unknown_session_is_engine_rejected_regardless_of_command() {
    let engine = common::engine();
    for command in ["go north", "", "inv", "complete nonsense"] {
        let response = common::turn(&engine, "never-issued-id", command);
        assert_eq!(response.session_id, "-1");
        assert!(response.invalid_command, "engine-level rejection");
        assert!(!response.response_text.is_empty());
    }
}

#[test]
fn unknown_title_is_engine_rejected() {
    let engine = common::engine();
    let response = engine.play(PlayRequest::new_session(9000));
    assert_eq!(response.session_id, "-1");
    assert!(response.invalid_command);
}

#[test]
fn sessions_are_fully_isolated() {
    let engine = common::engine();
    let a = common::start(&engine, 1);
    let b = common::start(&engine, 1);
    assert_ne!(a.session_id, b.session_id);

    // Session A picks up the sword; session B's world still has it.
    common::turn(&engine, &a.session_id, "go east");
    let took = common::turn(&engine, &a.session_id, "get sword");
    assert!(took.response_text.contains("sword"));

    common::turn(&engine, &b.session_id, "go east");
    let b_view = common::turn(&engine, &b.session_id, "look");
    assert!(b_view.items_in_room.contains("sword"), "B still sees the sword");

    let b_inv = common::turn(&engine, &b.session_id, "inv");
    assert_eq!(b_inv.response_text, "[Empty]");
}

#[test]
fn same_title_can_run_many_sessions() {
    let engine = common::engine();
    let sessions: Vec<String> = (0..5)
        .map(|_| common::start(&engine, 2).session_id)
        .collect();
    assert_eq!(engine.session_count(), 5);
    for session_id in &sessions {
        let response = common::turn(&engine, session_id, "look");
        assert_eq!(response.session_id, *session_id);
        assert!(!response.invalid_command);
    }
}

#[test]
fn display_preferences_are_echoed_back() {
    let engine = common::engine();
    let prefs = serde_json::json!({"theme": "amber", "panes": 2});
    let mut request = PlayRequest::new_session(1);
    request.display = prefs.clone();
    let opened = engine.play(request);
    assert_eq!(opened.display, prefs);

    // Prefs persist across turns that don't send new ones.
    let next = common::turn(&engine, &opened.session_id, "look");
    assert_eq!(next.display, prefs);
}

#[test]
fn in_world_failures_keep_the_session_usable() {
    let engine = common::engine();
    let opened = common::start(&engine, 1);

    let refused = common::turn(&engine, &opened.session_id, "get unicorn");
    assert_eq!(refused.session_id, opened.session_id);
    assert!(!refused.invalid_command, "in-world refusal, not engine error");
    assert!(!refused.response_text.is_empty());

    let next = common::turn(&engine, &opened.session_id, "inv");
    assert_eq!(next.response_text, "[Empty]");
    assert!(!next.invalid_command);
}
