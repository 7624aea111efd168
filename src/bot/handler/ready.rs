//! Ready event handler for session startup.
//!
//! This module handles the `ready` event which is fired when the bot successfully
//! connects to Discord's gateway and completes the initial handshake. The first
//! ready event releases the task waiting in `DiscordGateway::connect`. Later ready
//! events come from the gateway client re-identifying after a dropped session and
//! are only logged.

use serenity::all::{Context, Ready};
use tokio::sync::{oneshot, Mutex};

/// One-shot signal carrying the connected bot's user name.
pub struct ReadySignal {
    tx: Mutex<Option<oneshot::Sender<String>>>,
}

impl ReadySignal {
    pub fn new(tx: oneshot::Sender<String>) -> Self {
        Self {
            tx: Mutex::new(Some(tx)),
        }
    }

    /// Fires the signal.
    ///
    /// # Arguments
    /// - `bot_name` - Name of the connected bot user
    ///
    /// # Returns
    /// - `true` - The waiting task received the name
    /// - `false` - The signal already fired or nobody is waiting anymore
    pub async fn fire(&self, bot_name: String) -> bool {
        match self.tx.lock().await.take() {
            Some(tx) => tx.send(bot_name).is_ok(),
            None => false,
        }
    }
}

/// Handles the ready event when the bot connects to Discord.
///
/// The presence is part of the identify payload, so nothing has to be set here.
///
/// # Arguments
/// - `signal` - Readiness signal shared with the connecting task
/// - `_ctx` - Discord context, unused
/// - `ready` - Ready event data containing bot user information
pub async fn handle_ready(signal: &ReadySignal, _ctx: Context, ready: Ready) {
    tracing::info!("{} is connected to Discord", ready.user.name);

    if !signal.fire(ready.user.name.clone()).await {
        tracing::debug!("Discord session re-established");
    }
}
