//! Command interpretation pipeline.
//!
//! Raw input becomes a [`CommandState`]: at most two tokens (verb and
//! modifier, extras dropped), verb synonyms folded to their canonical
//! form, and direction words or abbreviations rewritten to a canonical
//! `go <direction>`. Every other component consumes the record this
//! module produces; nothing downstream re-parses raw text except the
//! attack handler, which needs the `with <weapon>` clause.

use crate::world::types::Direction;

/// Refusal for a token that looks like a direction but isn't one.
pub const WRONG_WAY: &str = "Wrong Way!";

/// The parsed state of one player command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandState {
    pub verb: String,
    pub modifier: String,
    pub raw: String,
    pub valid: bool,
    pub message: String,
}

impl CommandState {
    fn ok(verb: &str, modifier: &str, raw: &str) -> Self {
        CommandState {
            verb: verb.to_string(),
            modifier: modifier.to_string(),
            raw: raw.to_string(),
            valid: true,
            message: String::new(),
        }
    }

    pub fn rejected(raw: &str, message: &str) -> Self {
        CommandState {
            verb: String::new(),
            modifier: String::new(),
            raw: raw.to_string(),
            valid: false,
            message: message.to_string(),
        }
    }

    /// Mark this command failed with an in-world explanation.
    pub fn fail(&mut self, message: String) {
        self.valid = false;
        self.message = message;
    }
}

/// Verbs the engine dispatches on. Anything else is handled as an
/// unknown verb by the orchestrator (in-world refusal, not an error).
pub const KNOWN_VERBS: [&str; 17] = [
    "go", "get", "drop", "pet", "shoo", "inv", "look", "use", "eat", "read", "wave", "throw",
    "activate", "attack", "help", "score", "health",
];

fn canonical_verb(verb: &str) -> &str {
    match verb {
        "take" | "grab" => "get",
        "examine" => "look",
        "fight" | "kill" | "hit" => "attack",
        "i" | "inventory" => "inv",
        "wear" => "pet",
        "move" | "walk" | "run" => "go",
        other => other,
    }
}

/// Expand a direction word or its 1-/3-letter abbreviation.
fn resolve_direction(token: &str) -> Option<Direction> {
    if let Some(direction) = Direction::from_word(token) {
        return Some(direction);
    }
    match token {
        "n" | "nor" => Some(Direction::North),
        "s" | "sou" => Some(Direction::South),
        "e" | "eas" => Some(Direction::East),
        "w" | "wes" => Some(Direction::West),
        "u" => Some(Direction::Up),
        "d" | "dow" => Some(Direction::Down),
        _ => None,
    }
}

/// Tokenize and normalize one line of player input.
pub fn parse(raw: &str) -> CommandState {
    let mut tokens = raw.split_whitespace();
    let verb = match tokens.next() {
        Some(t) => t.to_ascii_lowercase(),
        None => return CommandState::rejected(raw, "You'll have to say something."),
    };
    let modifier = tokens
        .next()
        .map(|t| t.to_ascii_lowercase())
        .unwrap_or_default();

    let verb = canonical_verb(&verb).to_string();

    // `go` with an unresolvable direction is a pipeline rejection, not
    // an in-world one.
    if verb == "go" {
        return match resolve_direction(&modifier) {
            Some(direction) => CommandState::ok("go", direction.as_str(), raw),
            None => CommandState::rejected(raw, WRONG_WAY),
        };
    }

    if KNOWN_VERBS.contains(&verb.as_str()) {
        return CommandState::ok(&verb, &modifier, raw);
    }

    // A bare direction word or abbreviation is shorthand for `go`.
    if let Some(direction) = resolve_direction(&verb) {
        return CommandState::ok("go", direction.as_str(), raw);
    }

    // One- and three-letter tokens read as botched direction attempts.
    if verb.len() == 1 || verb.len() == 3 {
        return CommandState::rejected(raw, WRONG_WAY);
    }

    // Unknown verb: left valid here, refused in-world by the engine.
    CommandState::ok(&verb, &modifier, raw)
}

/// Pull the `with <weapon>` clause out of raw attack text. The
/// two-token pipeline drops it, so the monster resolver reads the raw
/// line instead.
pub fn weapon_clause(raw: &str) -> Option<String> {
    let mut tokens = raw.split_whitespace().skip(2);
    match tokens.next() {
        Some(w) if w.eq_ignore_ascii_case("with") => {
            let weapon: Vec<&str> = tokens.collect();
            if weapon.is_empty() {
                None
            } else {
                Some(weapon.join(" ").to_ascii_lowercase())
            }
        }
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_input_is_invalid_with_empty_tokens() {
        let state = parse("   ");
        assert!(!state.valid);
        assert!(state.verb.is_empty());
        assert!(state.modifier.is_empty());
        assert!(!state.message.is_empty());
    }

    #[test]
    fn test_extra_tokens_are_dropped() {
        let state = parse("get the shiny lamp quickly");
        assert_eq!(state.verb, "get");
        assert_eq!(state.modifier, "the");
        assert_eq!(state.raw, "get the shiny lamp quickly");
    }

    #[test]
    fn test_synonyms_fold_to_canonical_verbs() {
        assert_eq!(parse("take lamp").verb, "get");
        assert_eq!(parse("examine lamp").verb, "look");
        assert_eq!(parse("kill ghoul").verb, "attack");
        assert_eq!(parse("fight ghoul").verb, "attack");
        assert_eq!(parse("inventory").verb, "inv");
    }

    #[test]
    fn test_direction_abbreviations_become_go() {
        for (input, expected) in [
            ("n", "north"),
            ("nor", "north"),
            ("s", "south"),
            ("e", "east"),
            ("wes", "west"),
            ("u", "up"),
            ("d", "down"),
            ("north", "north"),
        ] {
            let state = parse(input);
            assert!(state.valid, "{} should be valid", input);
            assert_eq!(state.verb, "go");
            assert_eq!(state.modifier, expected);
        }
    }

    #[test]
    fn test_unrecognized_abbreviation_is_wrong_way() {
        for input in ["x", "zzz", "q"] {
            let state = parse(input);
            assert!(!state.valid);
            assert_eq!(state.message, WRONG_WAY);
        }
    }

    #[test]
    fn test_go_without_direction_is_wrong_way() {
        let state = parse("go fishing");
        assert!(!state.valid);
        assert_eq!(state.message, WRONG_WAY);
    }

    #[test]
    fn test_unknown_long_verb_stays_valid_for_world_refusal() {
        let state = parse("yodel loudly");
        assert!(state.valid);
        assert_eq!(state.verb, "yodel");
    }

    #[test]
    fn test_weapon_clause_parsing() {
        assert_eq!(
            weapon_clause("attack ghoul with sword"),
            Some("sword".to_string())
        );
        assert_eq!(
            weapon_clause("attack ghoul with silver key"),
            Some("silver key".to_string())
        );
        assert_eq!(weapon_clause("attack ghoul"), None);
        assert_eq!(weapon_clause("attack ghoul with"), None);
    }
}
