//! World-graph traversal: validating and executing `go`, and composing
//! the "you can go ..." path text that follows a room description.

use log::debug;

use crate::engine::command::CommandState;
use crate::world::types::{Direction, GameInstance, MessageTag, Room};

/// Compose the exit list sentence for a room. One exit reads plainly;
/// two or more end with "and {last}".
pub fn path_text(room: &Room) -> String {
    let directions: Vec<&str> = room.exits.open().map(|(d, _)| d.as_str()).collect();
    match directions.len() {
        0 => "There is no way out.".to_string(),
        1 => format!("You can go {}.", directions[0]),
        _ => {
            let head = directions[..directions.len() - 1].join(", ");
            format!(
                "You can go {} and {}.",
                head,
                directions[directions.len() - 1]
            )
        }
    }
}

/// Room description plus the path sentence.
pub fn describe(instance: &GameInstance, room: u32) -> String {
    match instance.room(room) {
        Some(r) => format!("{} {}", r.description, path_text(r)),
        None => String::new(),
    }
}

/// Validate and execute a movement command. On success the player is
/// relocated and the new room's composed description is returned in the
/// command message; on failure the command is marked invalid with a
/// direction-tagged flavor message and nothing moves.
pub fn resolve_go(instance: &mut GameInstance, command: &mut CommandState) -> bool {
    if instance.player.dead {
        let message = instance.flavor(MessageTag::Dead, &command.verb);
        command.fail(message);
        return false;
    }

    let direction = match Direction::from_word(&command.modifier) {
        Some(d) => d,
        None => {
            command.fail(crate::engine::command::WRONG_WAY.to_string());
            return false;
        }
    };

    let target = instance
        .room(instance.player.room)
        .and_then(|room| room.exits.get(direction));

    match target {
        Some(destination) => {
            debug!(
                "session {}: move {} from {} to {}",
                instance.session_id,
                direction.as_str(),
                instance.player.room,
                destination
            );
            instance.player.room = destination;
            command.message = describe(instance, destination);
            true
        }
        None => {
            let message = instance.flavor(MessageTag::Blocked(direction), direction.as_str());
            command.fail(message);
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::command;
    use crate::world::titles;
    use crate::world::types::Exits;

    fn instance() -> GameInstance {
        titles::builtin().new_instance(1, "test", "Tester").unwrap()
    }

    #[test]
    fn test_path_text_grammar() {
        let one = Room::new(1, "A", "d", Exits::new().with(Direction::East, 2));
        assert_eq!(path_text(&one), "You can go east.");

        let two = Room::new(
            1,
            "A",
            "d",
            Exits::new()
                .with(Direction::North, 2)
                .with(Direction::East, 3),
        );
        assert_eq!(path_text(&two), "You can go north and east.");

        let three = Room::new(
            1,
            "A",
            "d",
            Exits::new()
                .with(Direction::North, 2)
                .with(Direction::East, 3)
                .with(Direction::Up, 4),
        );
        assert_eq!(path_text(&three), "You can go north, east and up.");

        let none = Room::new(1, "A", "d", Exits::new());
        assert_eq!(path_text(&none), "There is no way out.");
    }

    #[test]
    fn test_valid_move_relocates_player() {
        let mut game = instance();
        let mut cmd = command::parse("go west");
        assert!(resolve_go(&mut game, &mut cmd));
        assert!(cmd.valid);
        assert_ne!(game.player.room, game.start_room);
        assert!(cmd.message.contains("You can go"));
    }

    #[test]
    fn test_blocked_move_changes_nothing() {
        let mut game = instance();
        let mut cmd = command::parse("go up");
        let before = game.player.room;
        assert!(!resolve_go(&mut game, &mut cmd));
        assert!(!cmd.valid);
        assert_eq!(game.player.room, before);
        assert!(!cmd.message.is_empty());
    }

    #[test]
    fn test_dead_player_cannot_move() {
        let mut game = instance();
        game.player.dead = true;
        let before = game.player.room;
        let mut cmd = command::parse("go west");
        assert!(!resolve_go(&mut game, &mut cmd));
        assert_eq!(game.player.room, before);
        assert!(!cmd.message.is_empty());
    }
}
