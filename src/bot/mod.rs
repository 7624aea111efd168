//! Discord gateway session for the Web Dev Activities bot.
//!
//! The bot does not handle commands or guild events. It logs in, broadcasts a
//! fixed "Playing Web Dev Activities" presence and keeps the gateway session
//! alive. Connection state (heartbeats, resumes, reconnects) is managed by
//! Serenity on its own task.
//!
//! # Gateway Intents
//!
//! `GatewayIntents::non_privileged()` is requested. No privileged intent has to
//! be enabled in the Discord Developer Portal.

pub mod handler;
pub mod presence;
pub mod start;

#[cfg(test)]
mod test;
