//! Player vitality: per-turn attrition, health bands, death detection,
//! and the single idempotent point-award entry point.

use log::debug;

use crate::world::types::GameInstance;

/// Display bands for the health report. Purely presentational; the
/// authoritative death check is `health < 1`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HealthBand {
    Great,
    Okay,
    Bad,
    Horrible,
    Dead,
}

impl HealthBand {
    pub fn as_str(self) -> &'static str {
        match self {
            HealthBand::Great => "Great",
            HealthBand::Okay => "Okay",
            HealthBand::Bad => "Bad",
            HealthBand::Horrible => "Horrible",
            HealthBand::Dead => "Dead",
        }
    }
}

/// What a signed health delta did, for narration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HealthOutcome {
    Helped,
    Hurt,
    Overfilled,
}

pub fn health_band(instance: &GameInstance) -> HealthBand {
    let ratio = instance.player.health as f64 / instance.player.max_health.max(1) as f64;
    // Dead is reserved for actual death so the band and the dead flag
    // always agree; a barely-alive player reads Horrible.
    if instance.player.health < 1 {
        HealthBand::Dead
    } else if ratio >= 0.7 {
        HealthBand::Great
    } else if ratio >= 0.5 {
        HealthBand::Okay
    } else if ratio >= 0.3 {
        HealthBand::Bad
    } else {
        HealthBand::Horrible
    }
}

/// Re-derive the dead flag from current health.
pub fn check_death(instance: &mut GameInstance) {
    instance.player.dead = instance.player.health < 1;
}

/// Fixed per-turn attrition, applied once per processed command,
/// independent of any item effects the same turn.
pub fn apply_attrition(instance: &mut GameInstance) {
    instance.player.turns += 1;
    instance.player.health -= instance.health_step;
    check_death(instance);
}

/// Apply a signed item delta to current health. Over-max is narrated;
/// it is numerically clamped only when `clamp_to_max` says so.
pub fn apply_health_delta(
    instance: &mut GameInstance,
    delta: i32,
    clamp_to_max: bool,
) -> HealthOutcome {
    instance.player.health += delta;
    let outcome = if delta < 0 {
        HealthOutcome::Hurt
    } else if instance.player.health > instance.player.max_health {
        HealthOutcome::Overfilled
    } else {
        HealthOutcome::Helped
    };
    if clamp_to_max && instance.player.health > instance.player.max_health {
        instance.player.health = instance.player.max_health;
    }
    check_death(instance);
    outcome
}

/// The only way points are ever added. A key already on the milestone
/// checklist awards nothing, so revisits and reuses never double-credit.
pub fn award_points(instance: &mut GameInstance, key: &str, value: u32) -> bool {
    if instance.milestones.contains(key) {
        return false;
    }
    instance.milestones.insert(key.to_string());
    instance.player.points += value;
    debug!(
        "session {}: +{} points for {} (total {})",
        instance.session_id, value, key, instance.player.points
    );
    true
}

/// Milestone key for a room's first-entry points.
pub fn room_key(number: u32) -> String {
    format!("room:{}", number)
}

/// Milestone key for an item's first successful use.
pub fn item_key(name: &str) -> String {
    format!("item:{}", name.to_ascii_lowercase())
}

/// Milestone key for a monster's killing blow.
pub fn monster_key(key: &str) -> String {
    format!("monster:{}", key.to_ascii_lowercase())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::world::titles;

    fn instance() -> GameInstance {
        titles::builtin().new_instance(1, "test", "Tester").unwrap()
    }

    #[test]
    fn test_health_bands() {
        let mut game = instance();
        let cases = [
            (100, HealthBand::Great),
            (70, HealthBand::Great),
            (69, HealthBand::Okay),
            (50, HealthBand::Okay),
            (49, HealthBand::Bad),
            (30, HealthBand::Bad),
            (29, HealthBand::Horrible),
            (10, HealthBand::Horrible),
            (9, HealthBand::Horrible),
            (1, HealthBand::Horrible),
            (0, HealthBand::Dead),
            (-5, HealthBand::Dead),
        ];
        for (health, band) in cases {
            game.player.health = health;
            assert_eq!(health_band(&game), band, "health {}", health);
        }
    }

    #[test]
    fn test_dead_iff_health_below_one() {
        let mut game = instance();
        game.player.health = 1;
        check_death(&mut game);
        assert!(!game.player.dead);
        game.player.health = 0;
        check_death(&mut game);
        assert!(game.player.dead);
    }

    #[test]
    fn test_attrition_counts_turns_and_decays() {
        let mut game = instance();
        let before = game.player.health;
        apply_attrition(&mut game);
        apply_attrition(&mut game);
        assert_eq!(game.player.turns, 2);
        assert_eq!(game.player.health, before - 2 * game.health_step);
    }

    #[test]
    fn test_award_points_is_idempotent() {
        let mut game = instance();
        assert!(award_points(&mut game, "item:cat", 25));
        assert!(!award_points(&mut game, "item:cat", 25));
        assert_eq!(game.player.points, 25);
    }

    #[test]
    fn test_overfill_narrated_and_unclamped() {
        let mut game = instance();
        game.player.health = game.player.max_health - 5;
        let outcome = apply_health_delta(&mut game, 20, false);
        assert_eq!(outcome, HealthOutcome::Overfilled);
        assert_eq!(game.player.health, game.player.max_health + 15);
    }

    #[test]
    fn test_overfill_clamped_when_configured() {
        let mut game = instance();
        game.player.health = game.player.max_health - 5;
        let outcome = apply_health_delta(&mut game, 20, true);
        assert_eq!(outcome, HealthOutcome::Overfilled);
        assert_eq!(game.player.health, game.player.max_health);
    }

    #[test]
    fn test_negative_delta_is_hurt() {
        let mut game = instance();
        let outcome = apply_health_delta(&mut game, -30, false);
        assert_eq!(outcome, HealthOutcome::Hurt);
    }
}
