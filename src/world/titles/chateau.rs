//! "Chateau of Dread" — the haunted-manor title. Three levels: the
//! ground floor, the upper floor, and the cellar. The hidden vault in
//! the cellar is the winning room; two keys gate the way down there.

use std::collections::HashMap;

use crate::world::fortune::CLASSIC_FORTUNES;
use crate::world::registry::{MapLayout, TitleCatalog, TitleDefinition};
use crate::world::titles::base_messages;
use crate::world::types::{
    ActionVerb, Direction, Exits, FlavorMessage, Item, ItemEffect, ItemLocation, MessageTag,
    Monster, Room, WorldContent,
};

// Room numbers, grouped by level.
const FOYER: u32 = 1;
const LIBRARY: u32 = 2;
const DINING_HALL: u32 = 3;
const CONSERVATORY: u32 = 4;
const KITCHEN: u32 = 5;
const STAIRCASE: u32 = 6;
const LANDING: u32 = 10;
const BEDROOM: u32 = 11;
const OBSERVATORY: u32 = 12;
const ATTIC: u32 = 13;
const CELLAR_STAIRS: u32 = 20;
const WINE_CELLAR: u32 = 21;
const CRYPT: u32 = 22;
const VAULT: u32 = 23;

const GROUND: u32 = 1;
const UPPER: u32 = 2;
const CELLAR: u32 = 3;

pub struct Chateau {
    catalog: TitleCatalog,
}

impl Chateau {
    pub fn new() -> Self {
        Chateau {
            catalog: TitleCatalog {
                id: 1,
                name: "Chateau of Dread".to_string(),
                version: "1.2".to_string(),
                description: "A storm-wrecked manor, two keys, and a vault nobody has opened in a century.".to_string(),
                help_text: concat!(
                    "Move with go <direction> (or n, s, e, w, u, d). ",
                    "Interact with get, drop, look, inv, pet, shoo, use, eat, read, wave, throw, activate. ",
                    "Fight with attack <monster> with <weapon>. ",
                    "Find both keys and open the hidden vault to win."
                )
                .to_string(),
                start_room: FOYER,
                exit_room: Some(VAULT),
                max_health: 100,
                health_step: 1,
                layout: layout(),
            },
        }
    }
}

impl Default for Chateau {
    fn default() -> Self {
        Self::new()
    }
}

impl TitleDefinition for Chateau {
    fn catalog(&self) -> &TitleCatalog {
        &self.catalog
    }

    fn content(&self) -> WorldContent {
        WorldContent {
            rooms: rooms(),
            items: items(),
            monsters: monsters(),
            messages: messages(),
            fortunes: &CLASSIC_FORTUNES,
        }
    }
}

fn layout() -> MapLayout {
    let positions: HashMap<u32, (u32, u32)> = [
        (FOYER, (2, 2)),
        (LIBRARY, (0, 2)),
        (DINING_HALL, (4, 2)),
        (CONSERVATORY, (2, 0)),
        (KITCHEN, (4, 0)),
        (STAIRCASE, (2, 4)),
        (LANDING, (2, 4)),
        (BEDROOM, (0, 4)),
        (OBSERVATORY, (2, 2)),
        (ATTIC, (2, 0)),
        (CELLAR_STAIRS, (2, 0)),
        (WINE_CELLAR, (0, 0)),
        (CRYPT, (2, 2)),
        (VAULT, (0, 2)),
    ]
    .into();

    let levels: HashMap<u32, u32> = [
        (FOYER, GROUND),
        (LIBRARY, GROUND),
        (DINING_HALL, GROUND),
        (CONSERVATORY, GROUND),
        (KITCHEN, GROUND),
        (STAIRCASE, GROUND),
        (LANDING, UPPER),
        (BEDROOM, UPPER),
        (OBSERVATORY, UPPER),
        (ATTIC, UPPER),
        (CELLAR_STAIRS, CELLAR),
        (WINE_CELLAR, CELLAR),
        (CRYPT, CELLAR),
        (VAULT, CELLAR),
    ]
    .into();

    let room_chars: HashMap<u32, char> = [
        (FOYER, 'F'),
        (LIBRARY, 'L'),
        (DINING_HALL, 'D'),
        (CONSERVATORY, 'C'),
        (KITCHEN, 'K'),
        (STAIRCASE, 'S'),
        (LANDING, 'S'),
        (BEDROOM, 'B'),
        (OBSERVATORY, 'O'),
        (ATTIC, 'A'),
        (CELLAR_STAIRS, 'S'),
        (WINE_CELLAR, 'W'),
        (CRYPT, 'T'),
        (VAULT, 'V'),
    ]
    .into();

    MapLayout {
        positions,
        levels,
        level_names: vec![
            (GROUND, "Ground Floor".to_string()),
            (UPPER, "Upper Floor".to_string()),
            (CELLAR, "Cellar".to_string()),
        ],
        room_chars,
        default_char: '.',
        player_char: '@',
        item_char: '+',
    }
}

fn rooms() -> Vec<Room> {
    vec![
        Room::new(
            FOYER,
            "Grand Foyer",
            "Rain hammers the stained glass above the double doors. A chandelier sways though there is no wind.",
            Exits::new()
                .with(Direction::North, CONSERVATORY)
                .with(Direction::South, STAIRCASE)
                .with(Direction::East, DINING_HALL)
                .with(Direction::West, LIBRARY),
        )
        .worth(5),
        Room::new(
            LIBRARY,
            "Library",
            "Shelves climb out of lantern reach. Something small moves between the stacks.",
            Exits::new().with(Direction::East, FOYER),
        )
        .worth(10),
        Room::new(
            DINING_HALL,
            "Dining Hall",
            "A table set for twenty, dust on every plate. The head chair is pulled out.",
            Exits::new()
                .with(Direction::West, FOYER)
                .with(Direction::North, KITCHEN),
        )
        .worth(5),
        Room::new(
            CONSERVATORY,
            "Conservatory",
            "Dead vines claw the glass roof. A brass stand holds nothing, conspicuously.",
            Exits::new().with(Direction::South, FOYER),
        )
        .worth(10),
        Room::new(
            KITCHEN,
            "Kitchen",
            "Copper pots, cold ovens, and a loaf that looks fresher than it has any right to be.",
            Exits::new().with(Direction::South, DINING_HALL),
        )
        .worth(5),
        Room::new(
            STAIRCASE,
            "Grand Staircase",
            "Marble steps sweep up into the dark. A narrower flight behind them drops toward the cellar.",
            Exits::new()
                .with(Direction::North, FOYER)
                .with(Direction::Up, LANDING)
                .with(Direction::Down, CELLAR_STAIRS),
        )
        .worth(5),
        Room::new(
            LANDING,
            "Upper Landing",
            "The banister is scarred with claw marks. Portraits follow you with their absence of eyes.",
            Exits::new()
                .with(Direction::Down, STAIRCASE)
                .with(Direction::West, BEDROOM)
                .with(Direction::North, OBSERVATORY),
        )
        .worth(10),
        Room::new(
            BEDROOM,
            "Master Bedroom",
            "The four-poster bed is made. The pillow has a dent in it, recent and small.",
            Exits::new().with(Direction::East, LANDING),
        )
        .worth(10),
        Room::new(
            OBSERVATORY,
            "Observatory",
            "A cracked telescope aims at a ceiling hatch sealed with a small silver lock.",
            // North opens toward the attic only after the silver key is used.
            Exits::new().with(Direction::South, LANDING),
        )
        .worth(15),
        Room::new(
            ATTIC,
            "Dusty Attic",
            "Sheeted furniture crowds the rafters. Footprints in the dust end in the middle of the floor.",
            Exits::new().with(Direction::South, OBSERVATORY),
        )
        .worth(20),
        Room::new(
            CELLAR_STAIRS,
            "Cellar Stairs",
            "The air turns cold and tastes of iron. Somewhere below, water drips in threes.",
            Exits::new()
                .with(Direction::Up, STAIRCASE)
                .with(Direction::West, WINE_CELLAR)
                .with(Direction::South, CRYPT),
        )
        .worth(10),
        Room::new(
            WINE_CELLAR,
            "Wine Cellar",
            "Racks of black bottles. One wall rings hollow when the dripping pauses.",
            // West opens toward the vault only after the iron key is used.
            Exits::new().with(Direction::East, CELLAR_STAIRS),
        )
        .worth(15),
        Room::new(
            CRYPT,
            "Crypt",
            "Stone coffins with the lids slid aside. Whatever rested here is resting elsewhere now.",
            Exits::new().with(Direction::North, CELLAR_STAIRS),
        )
        .worth(15),
        Room::new(
            VAULT,
            "Hidden Vault",
            "The hollow wall swings wide. Gold, deeds, letters — the chateau's whole buried history, and daylight through a grate above.",
            Exits::new().with(Direction::East, WINE_CELLAR),
        )
        .worth(100),
    ]
}

fn items() -> Vec<Item> {
    vec![
        Item::new(
            "sword",
            "A dress saber from the foyer's trophy wall. Ceremonial, but the edge is honest.",
            ItemLocation::InRoom(DINING_HALL),
        ),
        Item::new(
            "tome",
            "A fortune-teller's tome bound in cracked green leather. The pages rearrange themselves.",
            ItemLocation::InRoom(LIBRARY),
        )
        .with_action(ActionVerb::Read, ItemEffect::Fortune, 15),
        Item::new(
            "cat",
            "A grey cat with one white ear. It was watching you before you saw it.",
            ItemLocation::InRoom(LIBRARY),
        )
        .with_action(
            ActionVerb::Pet,
            ItemEffect::Companion {
                shoo_room: LIBRARY,
            },
            25,
        ),
        Item::new(
            "bread",
            "A warm loaf. In this house, warm is a warning, but it smells wonderful.",
            ItemLocation::InRoom(KITCHEN),
        )
        .with_action(ActionVerb::Eat, ItemEffect::Health(20), 10),
        Item::new(
            "vial",
            "A stoppered vial of grave-dark liquid. The label has been scratched off with a fingernail.",
            ItemLocation::InRoom(CRYPT),
        )
        .with_action(ActionVerb::Use, ItemEffect::Health(-25), 5),
        Item::new(
            "latchkey",
            "A slim silver latchkey, cold even through your glove. It fits the observatory's hatch lock.",
            ItemLocation::InRoom(BEDROOM),
        )
        .with_action(
            ActionVerb::Use,
            ItemEffect::Unlock {
                room: OBSERVATORY,
                direction: Direction::North,
                destination: ATTIC,
            },
            20,
        ),
        Item::new(
            "passkey",
            "A heavy iron passkey, older than the house. Rust flakes off in the shape of letters.",
            ItemLocation::InRoom(ATTIC),
        )
        .with_action(
            ActionVerb::Use,
            ItemEffect::Unlock {
                room: WINE_CELLAR,
                direction: Direction::West,
                destination: VAULT,
            },
            25,
        ),
        Item::new(
            "amulet",
            "A jet amulet on a tarnished chain. It hums faintly when pointed at the floor.",
            ItemLocation::InRoom(CONSERVATORY),
        )
        .with_action(ActionVerb::Wave, ItemEffect::Teleport(CELLAR_STAIRS), 15),
        Item::new(
            "wisp",
            "A pale flame the size of a thumb, hovering at shoulder height. It seems lonely.",
            ItemLocation::InRoom(WINE_CELLAR),
        )
        .with_action(ActionVerb::Wave, ItemEffect::Follow, 10),
    ]
}

fn monsters() -> Vec<Monster> {
    vec![
        Monster::new(
            "ghoul",
            "the crypt ghoul",
            "A ghoul unfolds from behind a coffin, all knuckles and appetite.",
            CRYPT,
            "sword",
            2,
        )
        .harming(0.5, 10)
        .appearing(0.75)
        .worth(50),
        Monster::new(
            "rats",
            "the rat king's court",
            "A carpet of rats pours from the cellar wall, moving as one animal.",
            CELLAR_STAIRS,
            "sword",
            1,
        )
        .harming(0.4, 5)
        .appearing(0.5)
        .worth(20),
    ]
}

fn messages() -> Vec<FlavorMessage> {
    let mut messages = base_messages();
    messages.extend([
        FlavorMessage::new(
            MessageTag::Blocked(Direction::Up),
            "The ceiling here has opinions about trespassers. No way up.",
        ),
        FlavorMessage::new(
            MessageTag::Blocked(Direction::Down),
            "The floorboards hold, disappointingly. No way down.",
        ),
        FlavorMessage::new(MessageTag::Dead, "The chateau has you now. The dead don't {0}."),
        FlavorMessage::new(
            MessageTag::GetFailed,
            "The chateau keeps its {0}, wherever it is.",
        ),
        FlavorMessage::new(MessageTag::PetDone, "The {0} leans into your hand, purring like a held breath."),
        FlavorMessage::new(MessageTag::FortuneTold, "Ink crawls across the {0} and settles into words."),
        FlavorMessage::new(MessageTag::MonsterStruck, "The {0} rakes you with filthy claws!"),
    ]);
    messages
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_exit_targets_a_real_room() {
        let rooms = rooms();
        for room in &rooms {
            for (direction, target) in room.exits.open() {
                assert!(
                    rooms.iter().any(|r| r.number == target),
                    "room {} exits {} into missing room {}",
                    room.number,
                    direction.as_str(),
                    target
                );
            }
        }
    }

    #[test]
    fn test_unlock_items_target_real_rooms() {
        let rooms = rooms();
        for item in items() {
            if let Some(action) = &item.action {
                if let ItemEffect::Unlock {
                    room, destination, ..
                } = action.effect
                {
                    assert!(rooms.iter().any(|r| r.number == room));
                    assert!(rooms.iter().any(|r| r.number == destination));
                }
            }
        }
    }

    #[test]
    fn test_vault_is_gated_until_unlocked() {
        let rooms = rooms();
        let wine = rooms.iter().find(|r| r.number == WINE_CELLAR).unwrap();
        assert_eq!(wine.exits.get(Direction::West), None);
    }

    #[test]
    fn test_monster_weapons_exist() {
        let items = items();
        for monster in monsters() {
            assert!(
                items
                    .iter()
                    .any(|i| i.name.eq_ignore_ascii_case(&monster.weapon)),
                "weapon {} for {} is not in the item table",
                monster.weapon,
                monster.key
            );
        }
    }
}
