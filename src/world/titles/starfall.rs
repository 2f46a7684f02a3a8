//! "Distress Call: Starfall Station" — the derelict-station title. Two
//! decks; the escape pod bay on the lower deck is the winning room,
//! sealed until the keycard is used.

use std::collections::HashMap;

use crate::world::registry::{MapLayout, TitleCatalog, TitleDefinition};
use crate::world::titles::base_messages;
use crate::world::types::{
    ActionVerb, Direction, Exits, FlavorMessage, Item, ItemEffect, ItemLocation, MessageTag,
    Monster, Room, WorldContent,
};

const CRYO_BAY: u32 = 101;
const JUNCTION: u32 = 102;
const MESS_HALL: u32 = 103;
const HYDROPONICS: u32 = 104;
const ENGINEERING: u32 = 110;
const REACTOR: u32 = 111;
const POD_BAY: u32 = 112;

const DECK_A: u32 = 1;
const DECK_B: u32 = 2;

/// Fortunes rewritten as corrupted computer log fragments.
const STATION_FORTUNES: [&str; 12] = [
    "LOG 0412: the hum in deck B is not the reactor.",
    "LOG 0988: whoever reads this — the pods still work. Probably.",
    "LOG 1signal lost1 do not feed it after the lights cycle.",
    "LOG 2203: hydroponics smells like rain. We never loaded rain.",
    "LOG 2447: left my wrench in engineering. Left everything, really.",
    "LOG 3105: if the junction door sticks, kick low and left.",
    "LOG 3760: the cat was a good idea. The drone misses it.",
    "LOG 4041: counted the rations twice. The numbers disagree.",
    "LOG 4666: it learned to open the vents on Tuesday.",
    "LOG 5150: keycard is wherever Chen was gardening.",
    "LOG 5909: sleep in cryo. Nothing checks the cold places.",
    "LOG 6001: go home. Leave the lights on for the next crew.",
];

pub struct Starfall {
    catalog: TitleCatalog,
}

impl Starfall {
    pub fn new() -> Self {
        Starfall {
            catalog: TitleCatalog {
                id: 2,
                name: "Distress Call: Starfall Station".to_string(),
                version: "0.9".to_string(),
                description: "You wake alone on a silent station. The escape pods are one keycard and one bad idea away.".to_string(),
                help_text: concat!(
                    "Move with go <direction> (or n, s, e, w, u, d). ",
                    "Interact with get, drop, look, inv, pet, shoo, use, eat, read, wave, throw, activate. ",
                    "Fight with attack <monster> with <weapon>. ",
                    "Find the keycard, open the pod bay, and get off the station."
                )
                .to_string(),
                start_room: CRYO_BAY,
                exit_room: Some(POD_BAY),
                max_health: 80,
                health_step: 1,
                layout: layout(),
            },
        }
    }
}

impl Default for Starfall {
    fn default() -> Self {
        Self::new()
    }
}

impl TitleDefinition for Starfall {
    fn catalog(&self) -> &TitleCatalog {
        &self.catalog
    }

    fn content(&self) -> WorldContent {
        WorldContent {
            rooms: rooms(),
            items: items(),
            monsters: monsters(),
            messages: messages(),
            fortunes: &STATION_FORTUNES,
        }
    }
}

fn layout() -> MapLayout {
    let positions: HashMap<u32, (u32, u32)> = [
        (CRYO_BAY, (0, 0)),
        (JUNCTION, (2, 0)),
        (MESS_HALL, (4, 0)),
        (HYDROPONICS, (2, 2)),
        (ENGINEERING, (2, 0)),
        (REACTOR, (4, 0)),
        (POD_BAY, (2, 2)),
    ]
    .into();

    let levels: HashMap<u32, u32> = [
        (CRYO_BAY, DECK_A),
        (JUNCTION, DECK_A),
        (MESS_HALL, DECK_A),
        (HYDROPONICS, DECK_A),
        (ENGINEERING, DECK_B),
        (REACTOR, DECK_B),
        (POD_BAY, DECK_B),
    ]
    .into();

    let room_chars: HashMap<u32, char> = [
        (CRYO_BAY, 'C'),
        (JUNCTION, 'J'),
        (MESS_HALL, 'M'),
        (HYDROPONICS, 'H'),
        (ENGINEERING, 'E'),
        (REACTOR, 'R'),
        (POD_BAY, 'P'),
    ]
    .into();

    MapLayout {
        positions,
        levels,
        level_names: vec![
            (DECK_A, "Deck A".to_string()),
            (DECK_B, "Deck B".to_string()),
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
            CRYO_BAY,
            "Cryo Bay",
            "Nine pods, eight dark. Yours stands open, dripping. The wake-up alarm gave up long ago.",
            Exits::new().with(Direction::East, JUNCTION),
        )
        .worth(5),
        Room::new(
            JUNCTION,
            "Corridor Junction",
            "Four corridors meet under a flickering status board. Every route is listed as NOMINAL, which is a lie.",
            Exits::new()
                .with(Direction::West, CRYO_BAY)
                .with(Direction::East, MESS_HALL)
                .with(Direction::South, HYDROPONICS)
                .with(Direction::Down, ENGINEERING),
        )
        .worth(5),
        Room::new(
            MESS_HALL,
            "Mess Hall",
            "Trays mid-meal, chairs pushed back in a hurry. The coffee machine is the only thing still warm.",
            Exits::new().with(Direction::West, JUNCTION),
        )
        .worth(10),
        Room::new(
            HYDROPONICS,
            "Hydroponics",
            "Overgrown racks drip in the grow-light dusk. Someone was gardening here right up until they weren't.",
            Exits::new().with(Direction::North, JUNCTION),
        )
        .worth(10),
        Room::new(
            ENGINEERING,
            "Engineering Deck",
            "Pipes sweat in the dark. Something has been nesting in the cable trays, and recently.",
            // South opens toward the pod bay only after the keycard is used.
            Exits::new()
                .with(Direction::Up, JUNCTION)
                .with(Direction::East, REACTOR),
        )
        .worth(10),
        Room::new(
            REACTOR,
            "Reactor Core",
            "The core breathes slow and blue behind its shield glass. Warning placards curl off the wall.",
            Exits::new().with(Direction::West, ENGINEERING),
        )
        .worth(15),
        Room::new(
            POD_BAY,
            "Escape Pod Bay",
            "One pod left, prepped and green across the board. The launch rail points at a clean slice of stars.",
            Exits::new().with(Direction::North, ENGINEERING),
        )
        .worth(100),
    ]
}

fn items() -> Vec<Item> {
    vec![
        Item::new(
            "wrench",
            "A meter of engineer's wrench, grip worn smooth. Good for bolts and for things that bite.",
            ItemLocation::InRoom(ENGINEERING),
        ),
        Item::new(
            "ration",
            "A sealed crew ration. The label promises STEW and the contents promise nothing.",
            ItemLocation::InRoom(MESS_HALL),
        )
        .with_action(ActionVerb::Eat, ItemEffect::Health(15), 10),
        Item::new(
            "manual",
            "The station operations manual, swollen with moisture. Margin notes in three handwritings.",
            ItemLocation::InRoom(CRYO_BAY),
        )
        .with_action(ActionVerb::Read, ItemEffect::Fortune, 10),
        Item::new(
            "keycard",
            "A command keycard, half-buried in potting soil. The name CHEN is worn to HEN.",
            ItemLocation::InRoom(HYDROPONICS),
        )
        .with_action(
            ActionVerb::Use,
            ItemEffect::Unlock {
                room: ENGINEERING,
                direction: Direction::South,
                destination: POD_BAY,
            },
            25,
        ),
        Item::new(
            "drone",
            "A maintenance drone the size of a loaf, idling on standby. Its single eye tracks you hopefully.",
            ItemLocation::InRoom(JUNCTION),
        )
        .with_action(
            ActionVerb::Pet,
            ItemEffect::Companion {
                shoo_room: JUNCTION,
            },
            20,
        ),
        Item::new(
            "flare",
            "An emergency flare, tube cracked. Lighting it in your own hand would be a mistake.",
            ItemLocation::InRoom(MESS_HALL),
        )
        .with_action(ActionVerb::Activate, ItemEffect::Health(-10), 5),
        Item::new(
            "tether",
            "A magnetic rescue tether coiled on a belt reel. Throw the anchor end and it reels you to the junction plate.",
            ItemLocation::InRoom(REACTOR),
        )
        .with_action(ActionVerb::Throw, ItemEffect::Teleport(JUNCTION), 15),
    ]
}

fn monsters() -> Vec<Monster> {
    vec![Monster::new(
        "crawler",
        "the vent crawler",
        "The cable trays shift, and a long grey shape unfolds from them, too many joints moving at once.",
        ENGINEERING,
        "wrench",
        2,
    )
    .harming(0.5, 8)
    .appearing(0.66)
    .worth(40)]
}

fn messages() -> Vec<FlavorMessage> {
    let mut messages = base_messages();
    messages.extend([
        FlavorMessage::new(
            MessageTag::Blocked(Direction::Up),
            "The overhead hatch is dogged shut from the other side.",
        ),
        FlavorMessage::new(
            MessageTag::Blocked(Direction::Down),
            "The deck plate here is solid. No way down.",
        ),
        FlavorMessage::new(MessageTag::Dead, "Station log: crew member inactive. The dead don't {0}."),
        FlavorMessage::new(MessageTag::GetFailed, "Inventory scan finds no {0} in this compartment."),
        FlavorMessage::new(MessageTag::PetDone, "The {0} chirps twice and falls in behind you."),
        FlavorMessage::new(MessageTag::FortuneTold, "The {0} flickers and coughs up a log fragment."),
        FlavorMessage::new(MessageTag::MonsterStruck, "The {0} whips a limb through your guard!"),
    ]);
    messages
}
