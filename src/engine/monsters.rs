//! Monster presence rolls and combat resolution.

use log::debug;
use rand::Rng;

use crate::engine::command::{self, CommandState};
use crate::engine::vitality;
use crate::world::types::{GameInstance, ItemLocation, MessageTag, RoomId};

/// Re-roll presence for every monster homed in `room`. Called on each
/// room entry; a monster that fails its roll is simply elsewhere this
/// time. Returns the room-description text of whatever showed up.
pub fn roll_presence(instance: &mut GameInstance, room: RoomId) -> Option<String> {
    let mut rng = rand::thread_rng();
    let mut sightings = Vec::new();
    for monster in &mut instance.monsters {
        if monster.home_room != room || monster.is_dead() {
            continue;
        }
        monster.present = rng.gen_bool(monster.appear_chance.clamp(0.0, 1.0));
        if monster.present {
            sightings.push(monster.description.clone());
        }
    }
    if sightings.is_empty() {
        None
    } else {
        Some(sightings.join(" "))
    }
}

/// `attack <monster> with <weapon>`. The pipeline keeps only two
/// tokens, so the weapon clause is re-read from the raw line.
pub fn resolve_attack(instance: &mut GameInstance, command: &mut CommandState) {
    let name = command.modifier.clone();
    let here = instance.player.room;

    let target = instance.monsters.iter().position(|m| {
        m.home_room == here
            && m.present
            && !m.is_dead()
            && (m.key.eq_ignore_ascii_case(&name) || m.name.eq_ignore_ascii_case(&name))
    });
    let target = match target {
        Some(index) => index,
        None => {
            let message = instance.flavor(MessageTag::AttackMissing, &name);
            command.fail(message);
            return;
        }
    };

    let monster_name = instance.monsters[target].name.clone();
    let required = instance.monsters[target].weapon.clone();

    let armed = command::weapon_clause(&command.raw)
        .filter(|weapon| weapon.eq_ignore_ascii_case(&required))
        .map(|weapon| {
            instance
                .item(&weapon)
                .map(|i| i.location == ItemLocation::Carried)
                .unwrap_or(false)
        })
        .unwrap_or(false);
    if !armed {
        let message = instance.flavor(MessageTag::AttackUnarmed, &monster_name);
        command.fail(message);
        return;
    }

    let monster = &mut instance.monsters[target];
    monster.health = monster.health.saturating_sub(1);
    debug!(
        "session {}: hit {} ({} hp left)",
        instance.session_id, monster.key, monster.health
    );

    if monster.is_dead() {
        monster.present = false;
        let key = vitality::monster_key(&monster.key);
        let points = monster.points;
        command.message = instance.flavor(MessageTag::MonsterKilled, &monster_name);
        vitality::award_points(instance, &key, points);
        return;
    }

    command.message = instance.flavor(MessageTag::MonsterHit, &monster_name);

    // A wounded survivor gets its swing in.
    let (can_harm, hit_chance, damage) = {
        let m = &instance.monsters[target];
        (m.can_harm, m.hit_chance, m.damage)
    };
    if can_harm && rand::thread_rng().gen_bool(hit_chance.clamp(0.0, 1.0)) {
        instance.player.health -= damage;
        vitality::check_death(instance);
        let struck = instance.flavor(MessageTag::MonsterStruck, &monster_name);
        command.message = format!("{} {}", command.message, struck);
    }
}
