//! World content: the data model shared by every title, the registry
//! that hands out fresh per-session copies of a title's world, and the
//! built-in titles themselves.

pub mod fortune;
pub mod registry;
pub mod titles;
pub mod types;

pub use registry::{LevelId, MapLayout, TitleCatalog, TitleDefinition, TitleRegistry};
pub use types::{
    ActionVerb, Direction, Exits, FlavorMessage, GameInstance, Item, ItemAction, ItemEffect,
    ItemLocation, MessageTag, Monster, Player, Room, RoomId, TitleId, WorldContent,
};
