//! Per-session map discovery state.
//!
//! The model tracks which rooms a session has seen and keeps a cached,
//! render-ready snapshot per room: grid position, display character,
//! visited/current/items flags, and the raw exit targets copied from
//! the room graph at construction. It is mutated in lock-step with the
//! player's room and consumed by the renderer and the map projection.

use std::collections::HashMap;

use crate::world::registry::{LevelId, TitleCatalog};
use crate::world::types::{Exits, Room, RoomId};

/// Render-ready state of one room on the map.
#[derive(Debug, Clone)]
pub struct MapRoom {
    pub number: RoomId,
    pub name: String,
    pub position: (u32, u32),
    pub level: LevelId,
    pub display_char: char,
    pub visited: bool,
    pub is_current: bool,
    pub has_items: bool,
    pub exits: Exits,
}

/// One session's map of one title. Visited rooms only ever accumulate.
#[derive(Debug, Clone)]
pub struct MapModel {
    pub title_name: String,
    pub rooms: Vec<MapRoom>,
    pub current_room: RoomId,
    pub current_level: LevelId,
    pub level_names: Vec<(LevelId, String)>,
    pub room_chars: HashMap<RoomId, char>,
    pub default_char: char,
    pub player_char: char,
    pub item_char: char,
}

impl MapModel {
    /// Build the map for a fresh session and mark the starting room.
    pub fn new(catalog: &TitleCatalog, rooms: &[Room]) -> Self {
        let layout = &catalog.layout;
        let map_rooms = rooms
            .iter()
            .map(|room| MapRoom {
                number: room.number,
                name: room.name.clone(),
                position: layout.position_of(room.number),
                level: layout.level_of(room.number),
                display_char: layout.char_of(room.number),
                visited: false,
                is_current: false,
                has_items: false,
                exits: room.exits.clone(),
            })
            .collect();

        let mut model = MapModel {
            title_name: catalog.name.clone(),
            rooms: map_rooms,
            current_room: catalog.start_room,
            current_level: layout.level_of(catalog.start_room),
            level_names: layout.level_names.clone(),
            room_chars: layout.room_chars.clone(),
            default_char: layout.default_char,
            player_char: layout.player_char,
            item_char: layout.item_char,
        };
        model.update_player_position(catalog.start_room);
        model
    }

    pub fn room(&self, number: RoomId) -> Option<&MapRoom> {
        self.rooms.iter().find(|r| r.number == number)
    }

    fn room_mut(&mut self, number: RoomId) -> Option<&mut MapRoom> {
        self.rooms.iter_mut().find(|r| r.number == number)
    }

    /// Move the map's notion of the player: unmark the previous current
    /// room, mark the new one visited and current, recompute the level.
    pub fn update_player_position(&mut self, room: RoomId) {
        let previous = self.current_room;
        if let Some(prev) = self.room_mut(previous) {
            prev.is_current = false;
        }
        let level = match self.room_mut(room) {
            Some(next) => {
                next.visited = true;
                next.is_current = true;
                next.level
            }
            None => {
                // Unknown rooms can't unseat the current one.
                if let Some(prev) = self.room_mut(previous) {
                    prev.is_current = true;
                }
                return;
            }
        };
        self.current_room = room;
        self.current_level = level;
    }

    /// Keep a room's "+" indicator in step with its floor contents.
    pub fn update_room_items(&mut self, room: RoomId, has_items: bool) {
        if let Some(r) = self.room_mut(room) {
            r.has_items = has_items;
        }
    }

    /// An unlock reroutes an exit mid-game; the cached copy follows.
    pub fn update_room_exits(&mut self, room: RoomId, exits: &Exits) {
        if let Some(r) = self.room_mut(room) {
            r.exits = exits.clone();
        }
    }

    pub fn visited_count(&self) -> usize {
        self.rooms.iter().filter(|r| r.visited).count()
    }

    pub fn visited_on_level(&self, level: LevelId) -> Vec<&MapRoom> {
        self.rooms
            .iter()
            .filter(|r| r.visited && r.level == level)
            .collect()
    }

    pub fn is_visited(&self, room: RoomId) -> bool {
        self.room(room).map(|r| r.visited).unwrap_or(false)
    }

    pub fn level_name(&self, level: LevelId) -> &str {
        self.level_names
            .iter()
            .find(|(id, _)| *id == level)
            .map(|(_, name)| name.as_str())
            .unwrap_or("Unknown")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::world::titles::{self, Chateau};
    use crate::world::TitleDefinition;

    fn model() -> MapModel {
        let chateau = Chateau::new();
        MapModel::new(chateau.catalog(), &chateau.content().rooms)
    }

    #[test]
    fn test_new_model_marks_only_start_room() {
        let model = model();
        assert_eq!(model.visited_count(), 1);
        let current: Vec<&MapRoom> = model.rooms.iter().filter(|r| r.is_current).collect();
        assert_eq!(current.len(), 1);
        assert_eq!(current[0].number, model.current_room);
        assert!(current[0].visited);
    }

    #[test]
    fn test_update_player_position_moves_current_flag() {
        let mut model = model();
        let start = model.current_room;
        model.update_player_position(2);
        assert_eq!(model.visited_count(), 2);
        assert!(model.room(start).unwrap().visited, "old room stays visited");
        assert!(!model.room(start).unwrap().is_current);
        assert!(model.room(2).unwrap().is_current);
        assert_eq!(model.current_room, 2);
    }

    #[test]
    fn test_level_follows_player() {
        let mut model = model();
        assert_eq!(model.current_level, 1);
        model.update_player_position(6);
        model.update_player_position(20); // cellar stairs
        assert_eq!(model.current_level, 3);
    }

    #[test]
    fn test_visited_count_is_monotonic() {
        let mut model = model();
        let mut last = model.visited_count();
        for room in [2, 1, 3, 1, 2, 6, 20] {
            model.update_player_position(room);
            let count = model.visited_count();
            assert!(count >= last);
            last = count;
        }
    }

    #[test]
    fn test_unknown_room_is_ignored() {
        let mut model = model();
        let before = model.current_room;
        model.update_player_position(9999);
        assert_eq!(model.current_room, before);
    }

    #[test]
    fn test_registry_instance_and_model_agree() {
        let registry = titles::builtin();
        let game = registry.new_instance(1, "s", "p").unwrap();
        let chateau = Chateau::new();
        let model = MapModel::new(chateau.catalog(), &game.rooms);
        assert_eq!(model.rooms.len(), game.rooms.len());
    }
}
