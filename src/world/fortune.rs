//! Fortune strings drawn by fortune-effect items.
//!
//! Stateless: a draw is a pure random pick from the title's pool, so it
//! is safe to call from any number of concurrent sessions. Titles may
//! ship their own pool; [`CLASSIC_FORTUNES`] is the shared default.

use rand::Rng;

/// Shared default pool. Short, in-world, and deliberately vague — the
/// same item can be read many times without repeating often.
pub const CLASSIC_FORTUNES: [&str; 24] = [
    "A door closed long ago will open for you.",
    "Count your steps twice before the third stair.",
    "What guards the cellar fears the light you carry.",
    "You will find what you lost where you never were.",
    "Trust the draft; walls do not breathe.",
    "The smallest key turns the heaviest lock.",
    "Something follows you that means no harm.",
    "Feed the cat. The cat remembers.",
    "Your road bends east, whatever the signpost says.",
    "An empty room is never empty twice.",
    "The hungry traveler should not eat what glows.",
    "Maps lie less than memories.",
    "A wall that echoes is a door that sulks.",
    "Beware the floor that is cleaner than the rest.",
    "What you shoo away returns with friends.",
    "The third torch from the corner is not a torch.",
    "Kindness to beasts is armor against them.",
    "Go up when in doubt; dust settles downward.",
    "Your fortune is in another room.",
    "The dead keep excellent secrets and poor company.",
    "Drop nothing you would not kneel for.",
    "A name spoken in the dark stays spoken.",
    "Luck favors the one who reads the walls.",
    "Leave a coin where you slept; you may pass again.",
];

/// Draw one fortune from `pool`.
pub fn draw(pool: &[&str]) -> String {
    if pool.is_empty() {
        return "The page is blank.".to_string();
    }
    let pick = rand::thread_rng().gen_range(0..pool.len());
    pool[pick].to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_draw_comes_from_pool() {
        for _ in 0..50 {
            let fortune = draw(&CLASSIC_FORTUNES);
            assert!(CLASSIC_FORTUNES.contains(&fortune.as_str()));
        }
    }

    #[test]
    fn test_draw_empty_pool_is_safe() {
        assert_eq!(draw(&[]), "The page is blank.");
    }
}
