//! Presence broadcast by the bot.

use serenity::all::ActivityData;

/// Kind of activity shown next to the bot's name.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActivityKind {
    /// Rendered by Discord as "Playing <text>".
    Playing,
}

/// Static presence descriptor sent when the session is identified.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Presence {
    pub kind: ActivityKind,
    pub text: &'static str,
}

impl Presence {
    /// The only presence the bot ever sets.
    pub const WEB_DEV_ACTIVITIES: Presence = Presence {
        kind: ActivityKind::Playing,
        text: "Web Dev Activities",
    };

    /// Converts the descriptor into Serenity's activity type.
    pub fn activity(&self) -> ActivityData {
        match self.kind {
            ActivityKind::Playing => ActivityData::playing(self.text),
        }
    }
}

impl Default for Presence {
    fn default() -> Self {
        Self::WEB_DEV_ACTIVITIES
    }
}
