//! The game engine: the only component front ends talk to.
//!
//! Two operations: [`GameEngine::list_titles`] and [`GameEngine::play`].
//! Play is synchronous request/response — one call fully completes
//! before returning — and the boundary never raises: every failure
//! becomes a well-formed response. Sessions are isolated behind the
//! [`session::SessionStore`]; concurrent calls for different session
//! ids proceed in parallel, and callers serialize their own calls
//! within one session.

pub mod command;
pub mod contract;
pub mod items;
pub mod monsters;
pub mod movement;
pub mod session;
pub mod vitality;

use log::{debug, error, info};
use thiserror::Error;
use uuid::Uuid;

use crate::config::Config;
use crate::engine::contract::{MapData, PlayRequest, PlayResponse, TitleInfo};
use crate::engine::session::{SessionEntry, SessionStore};
use crate::logutil::escape_log;
use crate::map::model::MapModel;
use crate::map::render;
use crate::world::titles;
use crate::world::types::{MessageTag, TitleId};
use crate::world::TitleRegistry;

/// Internal engine failures. These never escape [`GameEngine::play`];
/// they are folded into rejection responses at the boundary.
#[derive(Debug, Error)]
pub enum EngineError {
    #[error("unknown title: {0}")]
    UnknownTitle(TitleId),
    #[error("internal error: {0}")]
    Internal(String),
}

/// Verbs that read state without spending a turn.
const READ_ONLY_VERBS: [&str; 5] = ["look", "inv", "help", "score", "health"];

pub struct GameEngine {
    registry: TitleRegistry,
    store: SessionStore,
    config: Config,
}

impl GameEngine {
    /// Engine over the built-in title registry.
    pub fn new(config: Config) -> Self {
        Self::with_registry(titles::builtin(), config)
    }

    pub fn with_registry(registry: TitleRegistry, config: Config) -> Self {
        let store = SessionStore::new(config.engine.session_timeout);
        GameEngine {
            registry,
            store,
            config,
        }
    }

    /// Static, side-effect-free list of playable titles.
    pub fn list_titles(&self) -> Vec<TitleInfo> {
        self.registry
            .iter()
            .map(|title| {
                let catalog = title.catalog();
                TitleInfo {
                    id: catalog.id,
                    name: catalog.name.clone(),
                    version: catalog.version.clone(),
                    description: catalog.description.clone(),
                }
            })
            .collect()
    }

    /// Run one turn. Never fails: engine-level trouble comes back as a
    /// "-1"-session rejection response.
    pub fn play(&self, request: PlayRequest) -> PlayResponse {
        self.store.purge_expired();
        match self.play_inner(&request) {
            Ok(response) => response,
            Err(err) => {
                error!("play failed: {}", err);
                PlayResponse::rejection(&format!("The engine stumbled: {}", err))
            }
        }
    }

    fn play_inner(&self, request: &PlayRequest) -> Result<PlayResponse, EngineError> {
        if request.session_id.is_empty() {
            self.create_session(request)
        } else {
            self.continue_session(request)
        }
    }

    fn create_session(&self, request: &PlayRequest) -> Result<PlayResponse, EngineError> {
        let session_id = Uuid::new_v4().to_string();
        let player_name = if request.player_name.trim().is_empty() {
            self.config.engine.default_player_name.clone()
        } else {
            request.player_name.trim().to_string()
        };

        let mut game = self
            .registry
            .new_instance(request.title_id, &session_id, &player_name)
            .ok_or(EngineError::UnknownTitle(request.title_id))?;
        let catalog = self
            .registry
            .get(request.title_id)
            .ok_or(EngineError::UnknownTitle(request.title_id))?
            .catalog();

        let start = game.start_room;
        let start_points = game.room(start).map(|r| r.points).unwrap_or(0);
        vitality::award_points(&mut game, &vitality::room_key(start), start_points);
        let sighting = monsters::roll_presence(&mut game, start);

        let welcome = format!(
            "Welcome to {}, {}! {}",
            game.title_name, player_name, game.help_text
        );
        let mut text = movement::describe(&game, start);
        if let Some(sighting) = sighting {
            text = format!("{} {}", text, sighting);
        }

        let map = MapModel::new(catalog, &game.rooms);
        let mut entry = SessionEntry::new(game, map, request.display.clone());
        sync_map(&mut entry);

        info!(
            "new session {} for title {} ({})",
            session_id, request.title_id, entry.game.title_name
        );
        let response = self.respond(
            &entry,
            &session_id,
            text,
            Some(welcome),
            Some(self.list_titles()),
        );
        self.store.insert(&session_id, entry);
        Ok(response)
    }

    fn continue_session(&self, request: &PlayRequest) -> Result<PlayResponse, EngineError> {
        let entry = match self.store.get(&request.session_id) {
            Some(entry) => entry,
            None => {
                info!("play against unknown session {}", escape_log(&request.session_id));
                return Ok(PlayResponse::rejection(
                    "That session is unknown or has expired. Start a new game.",
                ));
            }
        };
        let mut entry = entry.lock().unwrap_or_else(|e| e.into_inner());
        entry.touch();
        if !request.display.is_null() {
            entry.display = request.display.clone();
        }

        let text = self.process_command(&mut entry, &request.command);
        sync_map(&mut entry);
        Ok(self.respond(&entry, &request.session_id, text, None, None))
    }

    /// Interpret and resolve one command against a live session.
    fn process_command(&self, entry: &mut SessionEntry, raw: &str) -> String {
        let mut cmd = command::parse(raw);
        debug!(
            "session {}: '{}' -> verb '{}' modifier '{}' valid {}",
            entry.game.session_id,
            escape_log(raw),
            cmd.verb,
            cmd.modifier,
            cmd.valid
        );
        if !cmd.valid {
            return cmd.message;
        }

        let read_only = READ_ONLY_VERBS.contains(&cmd.verb.as_str());
        if entry.game.player.dead && !read_only {
            return entry.game.flavor(MessageTag::Dead, &cmd.verb);
        }

        let mut moved = false;
        match cmd.verb.as_str() {
            "go" => {
                moved = movement::resolve_go(&mut entry.game, &mut cmd);
            }
            "attack" => monsters::resolve_attack(&mut entry.game, &mut cmd),
            "help" => return entry.game.help_text.clone(),
            "score" => {
                return format!(
                    "{} points after {} turns.",
                    entry.game.player.points, entry.game.player.turns
                );
            }
            "health" => {
                let band = vitality::health_band(&entry.game);
                return format!("You are feeling: {}.", band.as_str());
            }
            _ => {
                let outcome = items::resolve(
                    &mut entry.game,
                    &mut cmd,
                    self.config.engine.clamp_health_to_max,
                );
                moved = outcome.player_moved;
            }
        }

        if moved {
            let room = entry.game.player.room;
            entry.map.update_player_position(room);
            let points = entry.game.room(room).map(|r| r.points).unwrap_or(0);
            vitality::award_points(&mut entry.game, &vitality::room_key(room), points);
            if let Some(sighting) = monsters::roll_presence(&mut entry.game, room) {
                cmd.message = format!("{} {}", cmd.message, sighting);
            }
        }

        if !read_only {
            vitality::apply_attrition(&mut entry.game);
        }
        cmd.message
    }

    fn respond(
        &self,
        entry: &SessionEntry,
        session_id: &str,
        text: String,
        welcome_text: Option<String>,
        titles: Option<Vec<TitleInfo>>,
    ) -> PlayResponse {
        let game = &entry.game;
        let here = game.player.room;
        let (room_name, room_description) = game
            .room(here)
            .map(|r| (r.name.clone(), r.description.clone()))
            .unwrap_or_default();

        let visible = game.items_in_room(here);
        let items_in_room = if visible.is_empty() {
            String::new()
        } else {
            let names: Vec<&str> = visible.iter().map(|i| i.name.as_str()).collect();
            format!("You see: {}.", names.join(", "))
        };

        PlayResponse {
            session_id: session_id.to_string(),
            title_name: game.title_name.clone(),
            current_room_name: room_name,
            current_room_description: room_description,
            items_in_room,
            health: vitality::health_band(game).as_str().to_string(),
            response_text: text,
            welcome_text,
            map: Some(MapData::project(&entry.map)),
            map_text: render::render(&entry.map, entry.map.current_level),
            game_completed: game.exit_room == Some(here),
            player_dead: game.player.dead,
            invalid_command: false,
            titles,
            display: entry.display.clone(),
        }
    }

    /// Live session count, for status displays.
    pub fn session_count(&self) -> usize {
        self.store.len()
    }
}

/// Keep the map's cached per-room state in step with the live world:
/// exits (unlocks reroute them) and floor items (the "+" indicator).
fn sync_map(entry: &mut SessionEntry) {
    let game = &entry.game;
    let updates: Vec<(u32, crate::world::types::Exits, bool)> = game
        .rooms
        .iter()
        .map(|room| {
            (
                room.number,
                room.exits.clone(),
                !game.items_in_room(room.number).is_empty(),
            )
        })
        .collect();
    for (number, exits, has_items) in updates {
        entry.map.update_room_exits(number, &exits);
        entry.map.update_room_items(number, has_items);
    }
}
