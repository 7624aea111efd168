use secrecy::ExposeSecret;
use serenity::all::{Client, GatewayIntents, OnlineStatus};
use serenity::async_trait;
use tokio::{sync::oneshot, task::JoinHandle};

use crate::bot::{handler::Handler, presence::Presence};
use crate::config::{BotToken, Config, ConfigSources};
use crate::error::AppError;

/// Connection to the messaging gateway.
///
/// `DiscordGateway` is the production implementation. The trait exists so the
/// bootstrap sequence can run against a recording fake in tests.
#[async_trait]
pub trait Gateway: Send + Sync {
    type Session: Session;

    /// Opens a session authenticated with `token` and broadcasting `presence`.
    ///
    /// Suspends the calling task until the gateway reports the session ready. The
    /// token is consumed; implementations drop it once the client is built.
    async fn connect(&self, token: BotToken, presence: Presence)
        -> Result<Self::Session, AppError>;
}

/// Established gateway session.
#[async_trait]
pub trait Session: Send + Sized {
    /// Name of the connected bot user.
    fn bot_name(&self) -> &str;

    /// Waits until the gateway client stops.
    ///
    /// Under normal operation this never returns.
    async fn wait(self) -> Result<(), AppError>;
}

/// Discord gateway backed by a Serenity client.
pub struct DiscordGateway {
    intents: GatewayIntents,
}

impl DiscordGateway {
    pub fn new() -> Self {
        Self {
            intents: GatewayIntents::non_privileged(),
        }
    }
}

impl Default for DiscordGateway {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl Gateway for DiscordGateway {
    type Session = DiscordSession;

    /// Builds the Serenity client and starts it on a separate task.
    ///
    /// The client task is raced against the ready signal fired by the event
    /// handler. If the client stops first, its error is returned, classified so
    /// that a rejected token surfaces as `AuthError::InvalidToken`.
    ///
    /// # Arguments
    /// - `token` - Bot token, dropped once the client is built
    /// - `presence` - Activity sent with the identify payload
    ///
    /// # Returns
    /// - `Ok(DiscordSession)` - Ready event received
    /// - `Err(AppError::AuthErr)` - Discord rejected the token
    /// - `Err(AppError)` - Client failed to build or stopped before ready
    async fn connect(
        &self,
        token: BotToken,
        presence: Presence,
    ) -> Result<DiscordSession, AppError> {
        let (ready_tx, ready_rx) = oneshot::channel();

        let mut client = Client::builder(token.expose_secret(), self.intents)
            .event_handler(Handler::new(ready_tx))
            .activity(presence.activity())
            .status(OnlineStatus::Online)
            .await
            .map_err(AppError::from_gateway)?;
        drop(token);

        tracing::info!("Starting Discord bot...");

        let mut runner = tokio::spawn(async move { client.start().await });

        tokio::select! {
            ready = ready_rx => match ready {
                Ok(bot_name) => Ok(DiscordSession { bot_name, runner }),
                // Handler dropped without firing, so the client is gone too.
                Err(_) => Err(stopped_before_ready(runner.await?)),
            },
            result = &mut runner => Err(stopped_before_ready(result?)),
        }
    }
}

fn stopped_before_ready(result: Result<(), serenity::Error>) -> AppError {
    match result {
        Ok(()) => AppError::GatewayClosedBeforeReady,
        Err(e) => AppError::from_gateway(e),
    }
}

/// Ready Discord session.
///
/// Holds the task running the Serenity client. Reconnects and heartbeats happen
/// inside that task.
pub struct DiscordSession {
    bot_name: String,
    runner: JoinHandle<Result<(), serenity::Error>>,
}

#[async_trait]
impl Session for DiscordSession {
    fn bot_name(&self) -> &str {
        &self.bot_name
    }

    async fn wait(self) -> Result<(), AppError> {
        self.runner.await?.map_err(AppError::from_gateway)
    }
}

/// Resolves the configuration and starts the gateway session.
///
/// The gateway is only contacted once the token has been resolved, and exactly
/// once. Any error is returned as-is; nothing is retried.
///
/// # Arguments
/// - `sources` - Snapshot of the `.env` file and process environment
/// - `gateway` - Gateway to connect to
///
/// # Returns
/// - `Ok(Session)` - Session is ready
/// - `Err(AppError::ConfigErr)` - No token configured; the gateway was not contacted
/// - `Err(AppError)` - Connection failed
pub async fn bootstrap<G: Gateway>(
    sources: ConfigSources,
    gateway: &G,
) -> Result<G::Session, AppError> {
    let config = Config::resolve(&sources)?;
    drop(sources);

    let session = gateway
        .connect(config.bot_token, Presence::WEB_DEV_ACTIVITIES)
        .await?;

    tracing::info!("Presence set for {}", session.bot_name());

    Ok(session)
}
