//! The engine's request/response contract.
//!
//! In-process today, but shaped as if remote: plain serializable
//! records, no engine types leaking out, and every error path encoded
//! in the response itself. Front ends consume exactly these types.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use crate::map::model::MapModel;
use crate::world::registry::LevelId;
use crate::world::types::{Direction, RoomId, TitleId};

/// The session id carried by invalid/expired/error responses.
pub const INVALID_SESSION: &str = "-1";

/// One entry of the title list.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct TitleInfo {
    pub id: TitleId,
    pub name: String,
    pub version: String,
    pub description: String,
}

/// A single play call. An empty `session_id` asks for a new session,
/// in which case `title_id` selects the world; otherwise `title_id` is
/// ignored. `display` is opaque to the engine and echoed back.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlayRequest {
    #[serde(default)]
    pub session_id: String,
    #[serde(default)]
    pub title_id: TitleId,
    #[serde(default)]
    pub command: String,
    #[serde(default)]
    pub player_name: String,
    #[serde(default)]
    pub display: serde_json::Value,
}

impl PlayRequest {
    /// Request a brand new session of `title_id`.
    pub fn new_session(title_id: TitleId) -> Self {
        PlayRequest {
            session_id: String::new(),
            title_id,
            command: String::new(),
            player_name: String::new(),
            display: serde_json::Value::Null,
        }
    }

    /// Request a command turn in an existing session.
    pub fn command(session_id: &str, command: &str) -> Self {
        PlayRequest {
            session_id: session_id.to_string(),
            title_id: 0,
            command: command.to_string(),
            player_name: String::new(),
            display: serde_json::Value::Null,
        }
    }
}

/// A discovered connection out of a discovered room. Only exits whose
/// target has itself been visited are projected.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct RoomConnection {
    pub direction: Direction,
    pub target_room: RoomId,
    pub discovered: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DiscoveredRoom {
    pub number: RoomId,
    pub name: String,
    pub level: LevelId,
    pub position: (u32, u32),
    pub display_char: char,
    pub has_items: bool,
    pub is_current_location: bool,
    pub connections: Vec<RoomConnection>,
}

/// Static drawing knowledge the UI needs to render the map itself.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MapRenderConfig {
    pub title_name: String,
    pub room_chars: HashMap<RoomId, char>,
    pub level_names: Vec<(LevelId, String)>,
    pub default_char: char,
    pub player_char: char,
    pub item_char: char,
}

/// Projection of one session's [`MapModel`], visited rooms only.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MapData {
    pub current_room: RoomId,
    pub current_level: LevelId,
    pub current_level_name: String,
    pub visited_room_count: usize,
    pub discovered_rooms: Vec<DiscoveredRoom>,
    pub config: MapRenderConfig,
}

impl MapData {
    pub fn project(model: &MapModel) -> MapData {
        let discovered_rooms = model
            .rooms
            .iter()
            .filter(|r| r.visited)
            .map(|room| DiscoveredRoom {
                number: room.number,
                name: room.name.clone(),
                level: room.level,
                position: room.position,
                display_char: room.display_char,
                has_items: room.has_items,
                is_current_location: room.is_current,
                connections: room
                    .exits
                    .open()
                    .filter(|(_, target)| model.is_visited(*target))
                    .map(|(direction, target_room)| RoomConnection {
                        direction,
                        target_room,
                        discovered: true,
                    })
                    .collect(),
            })
            .collect();

        MapData {
            current_room: model.current_room,
            current_level: model.current_level,
            current_level_name: model.level_name(model.current_level).to_string(),
            visited_room_count: model.visited_count(),
            discovered_rooms,
            config: MapRenderConfig {
                title_name: model.title_name.clone(),
                room_chars: model.room_chars.clone(),
                level_names: model.level_names.clone(),
                default_char: model.default_char,
                player_char: model.player_char,
                item_char: model.item_char,
            },
        }
    }
}

/// Everything a front end needs to draw one turn.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlayResponse {
    pub session_id: String,
    pub title_name: String,
    pub current_room_name: String,
    pub current_room_description: String,
    pub items_in_room: String,
    pub health: String,
    pub response_text: String,
    /// Present on new sessions only.
    pub welcome_text: Option<String>,
    pub map: Option<MapData>,
    /// Rendered current-level map, so text front ends need no drawing
    /// code of their own.
    pub map_text: String,
    pub game_completed: bool,
    pub player_dead: bool,
    /// True only when the engine itself rejects the call (unknown or
    /// expired session, internal fault) — never for in-world refusals.
    pub invalid_command: bool,
    /// Present on session creation only.
    pub titles: Option<Vec<TitleInfo>>,
    pub display: serde_json::Value,
}

impl PlayResponse {
    /// The engine-level rejection shape: "-1" session, flag raised,
    /// nothing else populated.
    pub fn rejection(message: &str) -> Self {
        PlayResponse {
            session_id: INVALID_SESSION.to_string(),
            title_name: String::new(),
            current_room_name: String::new(),
            current_room_description: String::new(),
            items_in_room: String::new(),
            health: String::new(),
            response_text: message.to_string(),
            welcome_text: None,
            map: None,
            map_text: String::new(),
            game_completed: false,
            player_dead: false,
            invalid_command: true,
            titles: None,
            display: serde_json::Value::Null,
        }
    }
}
