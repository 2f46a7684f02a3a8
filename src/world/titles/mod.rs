//! Built-in titles.
//!
//! Each title lives in its own module and registers itself through
//! [`builtin`]. Titles provide their catalog (metadata + map layout)
//! and a content factory; everything else is engine-generic.

mod chateau;
mod starfall;

use crate::world::registry::TitleRegistry;
use crate::world::types::{ActionVerb, Direction, FlavorMessage, MessageTag};

pub use chateau::Chateau;
pub use starfall::Starfall;

/// Registry of every shipped title.
pub fn builtin() -> TitleRegistry {
    TitleRegistry::new()
        .with_title(Box::new(Chateau::new()))
        .with_title(Box::new(Starfall::new()))
}

/// Baseline flavor messages every title starts from. Titles append
/// their own themed lines on top; tags with several entries get random
/// variety at play time.
pub fn base_messages() -> Vec<FlavorMessage> {
    let mut messages = Vec::new();

    // Movement refusals, one flavor per direction plus generics.
    for direction in Direction::ALL {
        messages.push(FlavorMessage::new(
            MessageTag::Blocked(direction),
            &format!("You can't go {} from here.", direction.as_str()),
        ));
        messages.push(FlavorMessage::new(
            MessageTag::Blocked(direction),
            &format!("Something solid blocks the way {}.", direction.as_str()),
        ));
    }

    messages.extend([
        FlavorMessage::new(MessageTag::Dead, "The dead do not {0}. You are quite dead."),
        FlavorMessage::new(MessageTag::Dead, "You try to {0}, but being dead gets in the way."),
        FlavorMessage::new(MessageTag::GetFailed, "You don't see any {0} you could take."),
        FlavorMessage::new(MessageTag::GetFailed, "The {0} is not yours for the taking."),
        FlavorMessage::new(MessageTag::GetTaken, "You take the {0}."),
        FlavorMessage::new(MessageTag::DropFailed, "You aren't carrying a {0}."),
        FlavorMessage::new(MessageTag::DropDone, "You set the {0} down."),
        FlavorMessage::new(MessageTag::PetDone, "The {0} accepts you. It will come along now."),
        FlavorMessage::new(MessageTag::PetFailed, "The {0} wants nothing to do with your hand."),
        FlavorMessage::new(MessageTag::PetFailed, "There is no {0} here to pet."),
        FlavorMessage::new(MessageTag::ShooDone, "The {0} slinks off home."),
        FlavorMessage::new(MessageTag::ShooFailed, "No {0} is following you."),
        FlavorMessage::new(MessageTag::LookNothing, "You see nothing special."),
        FlavorMessage::new(MessageTag::LookMissing, "You don't see any {0} here."),
        FlavorMessage::new(MessageTag::Helped, "The {0} does you a world of good."),
        FlavorMessage::new(MessageTag::Hurt, "The {0} disagrees with you, badly."),
        FlavorMessage::new(
            MessageTag::Overfilled,
            "The {0} leaves you feeling better than whole.",
        ),
        FlavorMessage::new(MessageTag::FortuneTold, "The {0} reveals a hidden truth."),
        FlavorMessage::new(MessageTag::AttackMissing, "There is no {0} here to fight."),
        FlavorMessage::new(
            MessageTag::AttackUnarmed,
            "You flail at it bare-handed. The {0} is unimpressed.",
        ),
        FlavorMessage::new(MessageTag::MonsterHit, "You land a solid blow on the {0}!"),
        FlavorMessage::new(MessageTag::MonsterKilled, "The {0} collapses and does not rise."),
        FlavorMessage::new(MessageTag::MonsterStruck, "The {0} strikes back and draws blood!"),
        FlavorMessage::new(MessageTag::Unknown, "You don't know how to {0}."),
        FlavorMessage::new(MessageTag::Unknown, "Trying to {0} accomplishes nothing."),
    ]);

    // Verb-appropriate refusals for action verbs on the wrong item.
    for verb in [
        ActionVerb::Use,
        ActionVerb::Eat,
        ActionVerb::Read,
        ActionVerb::Wave,
        ActionVerb::Throw,
        ActionVerb::Activate,
    ] {
        messages.push(FlavorMessage::new(
            MessageTag::CannotDo(verb),
            &format!("You can't {} the {{0}}.", verb.as_str()),
        ));
    }
    messages.push(FlavorMessage::new(
        MessageTag::CannotDo(ActionVerb::Eat),
        "Your stomach refuses the {0} outright.",
    ));
    messages.push(FlavorMessage::new(
        MessageTag::CannotDo(ActionVerb::Read),
        "The {0} has nothing written on it.",
    ));

    messages
}
