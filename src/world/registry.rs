//! Registry of playable titles.
//!
//! The registry holds every title behind two small interfaces — static
//! catalog metadata and a fresh-content factory — so the engine core
//! stays title-agnostic. New titles are added by registration, not by
//! editing a dispatch site.

use std::collections::HashMap;

use crate::world::types::{GameInstance, Player, RoomId, TitleId, WorldContent};

/// Identifier of a named room grouping on the map (a floor, a deck).
pub type LevelId = u32;

/// Static map geometry for one title: where each room sits on the grid,
/// which level it belongs to, and how it is drawn. Immutable for the
/// life of the title.
#[derive(Debug, Clone)]
pub struct MapLayout {
    pub positions: HashMap<RoomId, (u32, u32)>,
    pub levels: HashMap<RoomId, LevelId>,
    pub level_names: Vec<(LevelId, String)>,
    pub room_chars: HashMap<RoomId, char>,
    pub default_char: char,
    pub player_char: char,
    pub item_char: char,
}

impl MapLayout {
    pub fn level_of(&self, room: RoomId) -> LevelId {
        self.levels.get(&room).copied().unwrap_or(0)
    }

    pub fn level_name(&self, level: LevelId) -> &str {
        self.level_names
            .iter()
            .find(|(id, _)| *id == level)
            .map(|(_, name)| name.as_str())
            .unwrap_or("Unknown")
    }

    pub fn position_of(&self, room: RoomId) -> (u32, u32) {
        self.positions.get(&room).copied().unwrap_or((0, 0))
    }

    pub fn char_of(&self, room: RoomId) -> char {
        self.room_chars
            .get(&room)
            .copied()
            .unwrap_or(self.default_char)
    }
}

/// Per-title metadata: display strings, starting room, vitality
/// constants, and the map layout.
#[derive(Debug, Clone)]
pub struct TitleCatalog {
    pub id: TitleId,
    pub name: String,
    pub version: String,
    pub description: String,
    pub help_text: String,
    pub start_room: RoomId,
    pub exit_room: Option<RoomId>,
    pub max_health: i32,
    /// Per-turn attrition subtracted from health on every processed
    /// command.
    pub health_step: i32,
    pub layout: MapLayout,
}

/// One playable title: its catalog plus a factory for fresh world
/// content. `content()` must return an independent copy every call —
/// sessions never share mutable state.
pub trait TitleDefinition: Send + Sync {
    fn catalog(&self) -> &TitleCatalog;
    fn content(&self) -> WorldContent;
}

/// All registered titles, looked up by id.
pub struct TitleRegistry {
    titles: Vec<Box<dyn TitleDefinition>>,
}

impl TitleRegistry {
    /// Create an empty registry with no titles registered.
    pub fn new() -> Self {
        TitleRegistry { titles: Vec::new() }
    }

    /// Register a title. Later registrations with a duplicate id are
    /// ignored; the first registration wins.
    pub fn with_title(mut self, title: Box<dyn TitleDefinition>) -> Self {
        let id = title.catalog().id;
        if self.get(id).is_none() {
            self.titles.push(title);
        }
        self
    }

    pub fn get(&self, id: TitleId) -> Option<&dyn TitleDefinition> {
        self.titles
            .iter()
            .find(|t| t.catalog().id == id)
            .map(|t| t.as_ref())
    }

    pub fn iter(&self) -> impl Iterator<Item = &dyn TitleDefinition> {
        self.titles.iter().map(|t| t.as_ref())
    }

    /// Build a fresh, fully isolated game instance of a title.
    pub fn new_instance(
        &self,
        id: TitleId,
        session_id: &str,
        player_name: &str,
    ) -> Option<GameInstance> {
        let title = self.get(id)?;
        let catalog = title.catalog();
        let content = title.content();
        Some(GameInstance {
            title_id: catalog.id,
            title_name: catalog.name.clone(),
            help_text: catalog.help_text.clone(),
            exit_room: catalog.exit_room,
            session_id: session_id.to_string(),
            start_room: catalog.start_room,
            max_health: catalog.max_health,
            health_step: catalog.health_step,
            rooms: content.rooms,
            items: content.items,
            monsters: content.monsters,
            messages: content.messages,
            fortunes: content.fortunes,
            player: Player::new(player_name, catalog.start_room, catalog.max_health),
            milestones: Default::default(),
        })
    }
}

impl Default for TitleRegistry {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::world::titles;

    #[test]
    fn test_registry_lists_builtin_titles() {
        let registry = titles::builtin();
        let ids: Vec<TitleId> = registry.iter().map(|t| t.catalog().id).collect();
        assert!(!ids.is_empty());
        for id in &ids {
            assert!(registry.get(*id).is_some());
        }
    }

    #[test]
    fn test_instances_are_isolated() {
        let registry = titles::builtin();
        let id = registry.iter().next().unwrap().catalog().id;
        let mut a = registry.new_instance(id, "s1", "Explorer").unwrap();
        let b = registry.new_instance(id, "s2", "Explorer").unwrap();
        a.rooms[0].name = "Mutated".to_string();
        assert_ne!(a.rooms[0].name, b.rooms[0].name);
    }

    #[test]
    fn test_start_room_exists_and_has_layout() {
        let registry = titles::builtin();
        for title in registry.iter() {
            let catalog = title.catalog();
            let content = title.content();
            assert!(
                content.rooms.iter().any(|r| r.number == catalog.start_room),
                "{}: start room missing from room table",
                catalog.name
            );
            for room in &content.rooms {
                assert!(
                    catalog.layout.positions.contains_key(&room.number),
                    "{}: room {} has no map position",
                    catalog.name,
                    room.number
                );
            }
        }
    }
}
