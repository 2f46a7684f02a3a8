//! Map discovery and rendering properties, observed through the play
//! contract: monotonic discovery, single current room, connection
//! closure, and the rendered text's box discipline.

mod common;

#[test]
fn visited_count_never_decreases_across_a_session() {
    let engine = common::engine();
    let opened = common::start(&engine, 1);
    let session = &opened.session_id;

    let mut last = opened.map.unwrap().visited_room_count;
    let commands = [
        "go west", "go east", "go up", "go north", "go south", "go south", "go up", "go down",
        "go north", "bogus", "look", "go east",
    ];
    for command in commands {
        let response = common::turn(&engine, session, command);
        if let Some(map) = response.map {
            assert!(
                map.visited_room_count >= last,
                "discovery shrank after '{}'",
                command
            );
            last = map.visited_room_count;
        }
    }
}

#[test]
fn every_response_has_exactly_one_current_room() {
    let engine = common::engine();
    let opened = common::start(&engine, 1);
    let session = &opened.session_id;

    for command in ["go west", "go east", "go north", "go up", "go south", "go south"] {
        let response = common::turn(&engine, session, command);
        let map = response.map.expect("map data present");
        let current = map
            .discovered_rooms
            .iter()
            .filter(|r| r.is_current_location)
            .count();
        assert_eq!(current, 1, "after '{}'", command);
    }
}

#[test]
fn connections_always_target_discovered_rooms() {
    let engine = common::engine();
    let opened = common::start(&engine, 1);
    let session = &opened.session_id;

    for command in ["go west", "go east", "go east", "go north", "go south", "go west"] {
        let response = common::turn(&engine, session, command);
        let map = response.map.expect("map data present");
        for room in &map.discovered_rooms {
            for connection in &room.connections {
                assert!(
                    map.discovered_rooms
                        .iter()
                        .any(|r| r.number == connection.target_room),
                    "undiscovered target {} in connections of {}",
                    connection.target_room,
                    room.number
                );
            }
        }
    }
}

#[test]
fn rendered_map_marks_the_player() {
    let engine = common::engine();
    let opened = common::start(&engine, 1);
    assert!(opened.map_text.contains('@'));
    assert!(opened.map_text.starts_with("+--+"));

    let moved = common::turn(&engine, &opened.session_id, "go west");
    let players = moved.map_text.matches('@').count();
    assert_eq!(players, 1, "one player glyph:\n{}", moved.map_text);
}

#[test]
fn rendered_rows_are_rectangular() {
    let engine = common::engine();
    let opened = common::start(&engine, 1);
    let session = &opened.session_id;
    let response = common::walk(&engine, session, &["go west", "go east", "go east"]);
    let widths: Vec<usize> = response.map_text.lines().map(|l| l.len()).collect();
    assert!(!widths.is_empty());
    assert!(widths.windows(2).all(|w| w[0] == w[1]), "{:?}", widths);
}

#[test]
fn connection_dots_appear_between_visited_neighbors() {
    let engine = common::engine();
    let opened = common::start(&engine, 1);
    let response = common::turn(&engine, &opened.session_id, "go west");
    assert!(
        response.map_text.contains(". . "),
        "dotted path between library and foyer:\n{}",
        response.map_text
    );
}

#[test]
fn box_borders_are_never_overwritten_by_paths() {
    let engine = common::engine();
    let opened = common::start(&engine, 1);
    let session = &opened.session_id;
    // Cover horizontal paths, a vertical path, and an up/down marker.
    let response = common::walk(
        &engine,
        session,
        &["go west", "go east", "go east", "go west", "go south", "go up", "go down", "go north"],
    );
    // Every `+` corner must still have a border glyph beside it on the
    // box row; a path dot directly against a corner would mean the
    // connection pass leaked into a box.
    for line in response.map_text.lines() {
        assert!(
            !line.contains("+.") && !line.contains(".+"),
            "path glyph flush against a box corner: {:?}",
            line
        );
    }
}

#[test]
fn map_tracks_the_current_level_only() {
    let engine = common::engine();
    let opened = common::start(&engine, 1);
    let session = &opened.session_id;

    let ground = common::turn(&engine, session, "look").map.unwrap();
    assert_eq!(ground.current_level_name, "Ground Floor");

    let below = common::walk(&engine, session, &["go south", "go down"]);
    let map = below.map.unwrap();
    assert_eq!(map.current_level_name, "Cellar");
    // The rendered map shows the cellar level: exactly one box so far.
    assert_eq!(below.map_text.matches('@').count(), 1);
}

#[test]
fn items_indicator_follows_the_floor() {
    let engine = common::engine();
    let opened = common::start(&engine, 2);
    let session = &opened.session_id;

    // The mess hall floor holds the ration and flare.
    common::turn(&engine, session, "go east");
    let hall = common::turn(&engine, session, "go east");
    assert!(hall.items_in_room.contains("ration"));
    let map = hall.map.unwrap();
    let mess = map
        .discovered_rooms
        .iter()
        .find(|r| r.name == "Mess Hall")
        .unwrap();
    assert!(mess.has_items);

    // Taking everything clears the indicator.
    common::turn(&engine, session, "get ration");
    let cleared = common::turn(&engine, session, "get flare");
    let map = cleared.map.unwrap();
    let mess = map
        .discovered_rooms
        .iter()
        .find(|r| r.name == "Mess Hall")
        .unwrap();
    assert!(!mess.has_items);
}
