//! Item interaction resolution.
//!
//! One dispatch table keyed by verb: positional verbs (get, drop, pet,
//! shoo, inv, look) check where things are; action verbs (use, eat,
//! read, wave, throw, activate) additionally require the item's own
//! recorded verb to match, then apply its effect. Resolvers never
//! panic: every failure path fills the command with a flavor message
//! and leaves the world as it was.

use log::debug;

use crate::engine::command::CommandState;
use crate::engine::movement;
use crate::engine::vitality::{self, HealthOutcome};
use crate::world::fortune;
use crate::world::types::{
    ActionVerb, GameInstance, ItemEffect, ItemLocation, MessageTag,
};

/// What an item command did beyond its message, for the orchestrator.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ItemOutcome {
    /// A teleport effect relocated the player; map discovery must catch up.
    pub player_moved: bool,
}

/// Dispatch an item-system verb. `clamp_health` carries the configured
/// over-max policy down to health effects.
pub fn resolve(
    instance: &mut GameInstance,
    command: &mut CommandState,
    clamp_health: bool,
) -> ItemOutcome {
    match command.verb.as_str() {
        "get" => resolve_get(instance, command),
        "drop" => resolve_drop(instance, command),
        "pet" => resolve_pet(instance, command),
        "shoo" => resolve_shoo(instance, command),
        "inv" => resolve_inv(instance, command),
        "look" => resolve_look(instance, command),
        _ => return resolve_action(instance, command, clamp_health),
    }
    ItemOutcome::default()
}

fn resolve_get(instance: &mut GameInstance, command: &mut CommandState) {
    let name = command.modifier.clone();
    let here = instance.player.room;
    let takeable = instance
        .item(&name)
        .map(|i| i.location == ItemLocation::InRoom(here) && !i.is_pettable())
        .unwrap_or(false);
    if !takeable {
        let message = instance.flavor(MessageTag::GetFailed, &name);
        command.fail(message);
        return;
    }
    if let Some(item) = instance.item_mut(&name) {
        item.location = ItemLocation::Carried;
    }
    command.message = instance.flavor(MessageTag::GetTaken, &name);
}

fn resolve_drop(instance: &mut GameInstance, command: &mut CommandState) {
    let name = command.modifier.clone();
    let here = instance.player.room;
    let carried = instance
        .item(&name)
        .map(|i| i.location == ItemLocation::Carried)
        .unwrap_or(false);
    if !carried {
        let message = instance.flavor(MessageTag::DropFailed, &name);
        command.fail(message);
        return;
    }
    if let Some(item) = instance.item_mut(&name) {
        item.location = ItemLocation::InRoom(here);
    }
    command.message = instance.flavor(MessageTag::DropDone, &name);
}

fn resolve_pet(instance: &mut GameInstance, command: &mut CommandState) {
    let name = command.modifier.clone();
    let here = instance.player.room;
    let reachable = instance
        .item(&name)
        .map(|i| {
            i.is_pettable()
                && (i.location == ItemLocation::InRoom(here) || i.location == ItemLocation::Worn)
        })
        .unwrap_or(false);
    if !reachable {
        let message = instance.flavor(MessageTag::PetFailed, &name);
        command.fail(message);
        return;
    }
    let points = instance
        .item(&name)
        .and_then(|i| i.action.as_ref())
        .map(|a| a.points)
        .unwrap_or(0);
    if let Some(item) = instance.item_mut(&name) {
        item.location = ItemLocation::Worn;
    }
    vitality::award_points(instance, &vitality::item_key(&name), points);
    command.message = instance.flavor(MessageTag::PetDone, &name);
}

fn resolve_shoo(instance: &mut GameInstance, command: &mut CommandState) {
    let name = command.modifier.clone();
    let here = instance.player.room;
    let worn = instance
        .item(&name)
        .map(|i| i.location == ItemLocation::Worn)
        .unwrap_or(false);
    if !worn {
        let message = instance.flavor(MessageTag::ShooFailed, &name);
        command.fail(message);
        return;
    }
    // Companions go back to their encoded home; anything else merely
    // stops following and stays here.
    let home = instance
        .item(&name)
        .and_then(|i| i.action.as_ref())
        .and_then(|a| match a.effect {
            ItemEffect::Companion { shoo_room } => Some(shoo_room),
            _ => None,
        })
        .unwrap_or(here);
    if let Some(item) = instance.item_mut(&name) {
        item.location = ItemLocation::InRoom(home);
    }
    command.message = instance.flavor(MessageTag::ShooDone, &name);
}

fn resolve_inv(instance: &GameInstance, command: &mut CommandState) {
    let carried = instance.carried_items();
    if carried.is_empty() {
        command.message = "[Empty]".to_string();
        return;
    }
    let names: Vec<&str> = carried.iter().map(|i| i.name.as_str()).collect();
    command.message = format!("You are carrying: {}.", names.join(", "));
}

fn resolve_look(instance: &GameInstance, command: &mut CommandState) {
    if command.modifier.is_empty() {
        command.message = instance.flavor(MessageTag::LookNothing, "");
        return;
    }
    let name = command.modifier.clone();
    let here = instance.player.room;
    let visible = instance.item(&name).filter(|i| {
        i.location == ItemLocation::Carried
            || i.location == ItemLocation::InRoom(here)
            || i.location == ItemLocation::Worn
    });
    match visible {
        Some(item) => command.message = item.description.clone(),
        None => {
            let message = instance.flavor(MessageTag::LookMissing, &name);
            command.fail(message);
        }
    }
}

/// use / eat / read / wave / throw / activate: the item must be carried
/// and its recorded verb must match, then its effect applies.
fn resolve_action(
    instance: &mut GameInstance,
    command: &mut CommandState,
    clamp_health: bool,
) -> ItemOutcome {
    let mut outcome = ItemOutcome::default();
    let verb = match ActionVerb::from_word(&command.verb) {
        Some(v) => v,
        None => {
            let message = instance.flavor(MessageTag::Unknown, &command.verb);
            command.fail(message);
            return outcome;
        }
    };
    let name = command.modifier.clone();

    let action = instance
        .item(&name)
        .filter(|i| i.location == ItemLocation::Carried)
        .and_then(|i| i.action.clone())
        .filter(|a| a.verb == verb);
    let action = match action {
        Some(a) => a,
        None => {
            let target = if name.is_empty() { "nothing" } else { name.as_str() };
            let message = instance.flavor(MessageTag::CannotDo(verb), target);
            command.fail(message);
            return outcome;
        }
    };
    debug!(
        "session {}: {} {} -> {:?}",
        instance.session_id,
        verb.as_str(),
        name,
        action.effect
    );

    match action.effect {
        ItemEffect::Health(delta) => {
            let result = vitality::apply_health_delta(instance, delta, clamp_health);
            let tag = match result {
                HealthOutcome::Helped => MessageTag::Helped,
                HealthOutcome::Hurt => MessageTag::Hurt,
                HealthOutcome::Overfilled => MessageTag::Overfilled,
            };
            command.message = instance.flavor(tag, &name);
        }
        ItemEffect::Fortune => {
            let told = instance.flavor(MessageTag::FortuneTold, &name);
            command.message = format!("{} \"{}\"", told, fortune::draw(instance.fortunes));
        }
        ItemEffect::Unlock {
            room,
            direction,
            destination,
        } => {
            if let Some(target) = instance.room_mut(room) {
                target.exits.set(direction, Some(destination));
            }
            let place = instance
                .room(room)
                .map(|r| r.name.clone())
                .unwrap_or_default();
            command.message = format!(
                "The {} turns with a heavy click. A way {} has opened in the {}.",
                name,
                direction.as_str(),
                place
            );
        }
        ItemEffect::Teleport(destination) => {
            instance.player.room = destination;
            outcome.player_moved = true;
            command.message = format!(
                "The world lurches sideways. {}",
                movement::describe(instance, destination)
            );
        }
        ItemEffect::Follow => {
            if let Some(item) = instance.item_mut(&name) {
                item.location = ItemLocation::Worn;
            }
            command.message = format!("The {} falls in beside you.", name);
        }
        ItemEffect::Companion { .. } => {
            // Companions answer to pet, not to action verbs.
            let message = instance.flavor(MessageTag::CannotDo(verb), &name);
            command.fail(message);
            return outcome;
        }
    }

    vitality::award_points(instance, &vitality::item_key(&name), action.points);
    outcome
}
