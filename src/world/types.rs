use rand::Rng;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// Room numbers are unique within a title. There is no reserved value:
/// "no exit" is `None` in an [`Exits`] slot and item whereabouts are a
/// proper [`ItemLocation`], so titles may number rooms freely.
pub type RoomId = u32;

/// Numeric identifier of a title in the registry.
pub type TitleId = u32;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum Direction {
    North,
    South,
    East,
    West,
    Up,
    Down,
}

impl Direction {
    pub const ALL: [Direction; 6] = [
        Direction::North,
        Direction::South,
        Direction::East,
        Direction::West,
        Direction::Up,
        Direction::Down,
    ];

    pub fn index(self) -> usize {
        match self {
            Direction::North => 0,
            Direction::South => 1,
            Direction::East => 2,
            Direction::West => 3,
            Direction::Up => 4,
            Direction::Down => 5,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Direction::North => "north",
            Direction::South => "south",
            Direction::East => "east",
            Direction::West => "west",
            Direction::Up => "up",
            Direction::Down => "down",
        }
    }

    /// Parse a full direction word ("north", "up", ...).
    pub fn from_word(word: &str) -> Option<Direction> {
        match word {
            "north" => Some(Direction::North),
            "south" => Some(Direction::South),
            "east" => Some(Direction::East),
            "west" => Some(Direction::West),
            "up" => Some(Direction::Up),
            "down" => Some(Direction::Down),
            _ => None,
        }
    }
}

/// The six directional exits of a room. `None` means no exit that way.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct Exits([Option<RoomId>; 6]);

impl Exits {
    pub fn new() -> Self {
        Exits([None; 6])
    }

    pub fn with(mut self, direction: Direction, target: RoomId) -> Self {
        self.0[direction.index()] = Some(target);
        self
    }

    pub fn get(&self, direction: Direction) -> Option<RoomId> {
        self.0[direction.index()]
    }

    pub fn set(&mut self, direction: Direction, target: Option<RoomId>) {
        self.0[direction.index()] = target;
    }

    /// Iterate open exits in canonical direction order.
    pub fn open(&self) -> impl Iterator<Item = (Direction, RoomId)> + '_ {
        Direction::ALL
            .iter()
            .filter_map(|d| self.0[d.index()].map(|t| (*d, t)))
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Room {
    pub number: RoomId,
    pub name: String,
    pub description: String,
    pub exits: Exits,
    /// Awarded once, on first entry, through the milestone checklist.
    pub points: u32,
}

impl Room {
    pub fn new(number: RoomId, name: &str, description: &str, exits: Exits) -> Self {
        Room {
            number,
            name: name.to_string(),
            description: description.to_string(),
            exits,
            points: 0,
        }
    }

    pub fn worth(mut self, points: u32) -> Self {
        self.points = points;
        self
    }
}

/// Where an item currently is. Replaces the reserved room-number
/// sentinels of classic engines with an explicit three-case state.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum ItemLocation {
    InRoom(RoomId),
    Carried,
    Worn,
}

/// The single verb an item answers to beyond get/drop/look.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum ActionVerb {
    Pet,
    Use,
    Eat,
    Read,
    Wave,
    Throw,
    Activate,
}

impl ActionVerb {
    pub fn as_str(self) -> &'static str {
        match self {
            ActionVerb::Pet => "pet",
            ActionVerb::Use => "use",
            ActionVerb::Eat => "eat",
            ActionVerb::Read => "read",
            ActionVerb::Wave => "wave",
            ActionVerb::Throw => "throw",
            ActionVerb::Activate => "activate",
        }
    }

    pub fn from_word(word: &str) -> Option<ActionVerb> {
        match word {
            "pet" => Some(ActionVerb::Pet),
            "use" => Some(ActionVerb::Use),
            "eat" => Some(ActionVerb::Eat),
            "read" => Some(ActionVerb::Read),
            "wave" => Some(ActionVerb::Wave),
            "throw" => Some(ActionVerb::Throw),
            "activate" => Some(ActionVerb::Activate),
            _ => None,
        }
    }
}

/// What successfully acting on an item does to the world.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "snake_case")]
pub enum ItemEffect {
    /// Signed delta applied to current health. Over-max is narrated, and
    /// clamped only when the engine config says so.
    Health(i32),
    /// Reroute one exit of one room, opening a previously closed path.
    Unlock {
        room: RoomId,
        direction: Direction,
        destination: RoomId,
    },
    /// Relocate the player.
    Teleport(RoomId),
    /// Item flavor text plus a freshly drawn fortune string.
    Fortune,
    /// The item attaches to the player and trails along.
    Follow,
    /// A pettable creature; `shoo_room` is where shooing sends it home.
    Companion { shoo_room: RoomId },
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ItemAction {
    pub verb: ActionVerb,
    pub effect: ItemEffect,
    /// Awarded once per item on first successful use.
    pub points: u32,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Item {
    pub name: String,
    pub description: String,
    pub location: ItemLocation,
    pub action: Option<ItemAction>,
}

impl Item {
    pub fn new(name: &str, description: &str, location: ItemLocation) -> Self {
        Item {
            name: name.to_string(),
            description: description.to_string(),
            location,
            action: None,
        }
    }

    pub fn with_action(mut self, verb: ActionVerb, effect: ItemEffect, points: u32) -> Self {
        self.action = Some(ItemAction {
            verb,
            effect,
            points,
        });
        self
    }

    /// Pettable creatures can never be picked up with `get`.
    pub fn is_pettable(&self) -> bool {
        matches!(
            self.action,
            Some(ItemAction {
                verb: ActionVerb::Pet,
                ..
            })
        )
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Monster {
    pub key: String,
    pub name: String,
    pub description: String,
    pub home_room: RoomId,
    /// Name of the item that can hurt it.
    pub weapon: String,
    pub hits_to_kill: u32,
    pub can_harm: bool,
    pub hit_chance: f64,
    pub damage: i32,
    pub appear_chance: f64,
    /// Awarded once, on the killing blow.
    pub points: u32,
    pub present: bool,
    pub health: u32,
}

impl Monster {
    pub fn new(
        key: &str,
        name: &str,
        description: &str,
        home_room: RoomId,
        weapon: &str,
        hits_to_kill: u32,
    ) -> Self {
        Monster {
            key: key.to_string(),
            name: name.to_string(),
            description: description.to_string(),
            home_room,
            weapon: weapon.to_string(),
            hits_to_kill,
            can_harm: false,
            hit_chance: 0.0,
            damage: 0,
            appear_chance: 1.0,
            points: 0,
            present: false,
            health: hits_to_kill,
        }
    }

    pub fn harming(mut self, hit_chance: f64, damage: i32) -> Self {
        self.can_harm = true;
        self.hit_chance = hit_chance;
        self.damage = damage;
        self
    }

    pub fn appearing(mut self, chance: f64) -> Self {
        self.appear_chance = chance;
        self
    }

    pub fn worth(mut self, points: u32) -> Self {
        self.points = points;
        self
    }

    pub fn is_dead(&self) -> bool {
        self.health == 0
    }
}

/// Tags group flavor messages; several messages may share one tag and a
/// random member is drawn each time, so repeated failures read fresh.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum MessageTag {
    /// Movement into a wall; tagged with the attempted direction.
    Blocked(Direction),
    /// Any world-changing command issued after death.
    Dead,
    GetFailed,
    GetTaken,
    DropFailed,
    DropDone,
    PetDone,
    PetFailed,
    ShooDone,
    ShooFailed,
    LookNothing,
    LookMissing,
    /// The issued action verb cannot be applied; tagged with the verb.
    CannotDo(ActionVerb),
    Helped,
    Hurt,
    Overfilled,
    FortuneTold,
    AttackMissing,
    AttackUnarmed,
    MonsterHit,
    MonsterKilled,
    MonsterStruck,
    Unknown,
}

/// One template under a tag; `{0}` is the single substitution slot.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct FlavorMessage {
    pub tag: MessageTag,
    pub template: String,
}

impl FlavorMessage {
    pub fn new(tag: MessageTag, template: &str) -> Self {
        FlavorMessage {
            tag,
            template: template.to_string(),
        }
    }

    pub fn fill(&self, value: &str) -> String {
        self.template.replace("{0}", value)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Player {
    pub name: String,
    pub room: RoomId,
    pub health: i32,
    pub max_health: i32,
    pub turns: u32,
    pub verbose: bool,
    pub points: u32,
    pub dead: bool,
}

impl Player {
    pub fn new(name: &str, room: RoomId, max_health: i32) -> Self {
        Player {
            name: name.to_string(),
            room,
            health: max_health,
            max_health,
            turns: 0,
            verbose: true,
            points: 0,
            dead: false,
        }
    }
}

/// The full content of one title, handed out fresh per new session so
/// no two sessions ever share mutable world state.
#[derive(Debug, Clone)]
pub struct WorldContent {
    pub rooms: Vec<Room>,
    pub items: Vec<Item>,
    pub monsters: Vec<Monster>,
    pub messages: Vec<FlavorMessage>,
    pub fortunes: &'static [&'static str],
}

/// One live game: a session's private copy of a title's world plus the
/// player inside it. Created on new-session, destroyed on eviction.
#[derive(Debug, Clone)]
pub struct GameInstance {
    pub title_id: TitleId,
    pub title_name: String,
    pub help_text: String,
    pub exit_room: Option<RoomId>,
    pub session_id: String,
    pub start_room: RoomId,
    pub max_health: i32,
    pub health_step: i32,
    pub rooms: Vec<Room>,
    pub items: Vec<Item>,
    pub monsters: Vec<Monster>,
    pub messages: Vec<FlavorMessage>,
    pub fortunes: &'static [&'static str],
    pub player: Player,
    /// Keys already credited for points. Guarded writes keep revisits
    /// and reuses from ever double-crediting.
    pub milestones: HashSet<String>,
}

impl GameInstance {
    pub fn room(&self, number: RoomId) -> Option<&Room> {
        self.rooms.iter().find(|r| r.number == number)
    }

    pub fn room_mut(&mut self, number: RoomId) -> Option<&mut Room> {
        self.rooms.iter_mut().find(|r| r.number == number)
    }

    pub fn item(&self, name: &str) -> Option<&Item> {
        self.items.iter().find(|i| i.name.eq_ignore_ascii_case(name))
    }

    pub fn item_mut(&mut self, name: &str) -> Option<&mut Item> {
        self.items
            .iter_mut()
            .find(|i| i.name.eq_ignore_ascii_case(name))
    }

    pub fn items_in_room(&self, room: RoomId) -> Vec<&Item> {
        self.items
            .iter()
            .filter(|i| i.location == ItemLocation::InRoom(room))
            .collect()
    }

    pub fn carried_items(&self) -> Vec<&Item> {
        self.items
            .iter()
            .filter(|i| i.location == ItemLocation::Carried)
            .collect()
    }

    /// Draw one flavor message for `tag`, substituting `value` into its
    /// `{0}` slot. Falls back to a plain line if a title ships no
    /// message under the tag; resolvers always have something to say.
    pub fn flavor(&self, tag: MessageTag, value: &str) -> String {
        let pool: Vec<&FlavorMessage> = self.messages.iter().filter(|m| m.tag == tag).collect();
        if pool.is_empty() {
            return format!("Nothing happens with {}.", value);
        }
        let pick = rand::thread_rng().gen_range(0..pool.len());
        pool[pick].fill(value)
    }
}
