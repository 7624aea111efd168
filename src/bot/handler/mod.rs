use serenity::all::{Context, EventHandler, Ready};
use serenity::async_trait;
use tokio::sync::oneshot;

pub mod ready;

use ready::ReadySignal;

/// Discord bot event handler
///
/// The bot reacts to a single gateway event. Everything else is left to
/// Serenity's defaults.
pub struct Handler {
    pub ready: ReadySignal,
}

impl Handler {
    pub fn new(ready_tx: oneshot::Sender<String>) -> Self {
        Self {
            ready: ReadySignal::new(ready_tx),
        }
    }
}

#[async_trait]
impl EventHandler for Handler {
    /// Called when the bot is ready and connected to Discord
    async fn ready(&self, ctx: Context, ready: Ready) {
        ready::handle_ready(&self.ready, ctx, ready).await;
    }
}
