use std::sync::Mutex;

use secrecy::ExposeSecret;
use serenity::async_trait;

use crate::{
    bot::{
        presence::{ActivityKind, Presence},
        start::{bootstrap, Gateway, Session},
    },
    config::{BotToken, ConfigSources},
    error::{auth::AuthError, config::ConfigError, AppError},
};
use test_utils::env::env_vars;


/// How the fake gateway answers a connect call.
enum Outcome {
    Ready,
    RejectToken,
}

/// Gateway double that records every connect call.
struct RecordingGateway {
    outcome: Outcome,
    calls: Mutex<Vec<(String, Presence)>>,
}

impl RecordingGateway {
    fn new(outcome: Outcome) -> Self {
        Self {
            outcome,
            calls: Mutex::new(Vec::new()),
        }
    }

    fn calls(&self) -> Vec<(String, Presence)> {
        self.calls.lock().unwrap().clone()
    }
}

struct FakeSession {
    bot_name: String,
}

#[async_trait]
impl Session for FakeSession {
    fn bot_name(&self) -> &str {
        &self.bot_name
    }

    async fn wait(self) -> Result<(), AppError> {
        Ok(())
    }
}

#[async_trait]
impl Gateway for RecordingGateway {
    type Session = FakeSession;

    async fn connect(&self, token: BotToken, presence: Presence) -> Result<FakeSession, AppError> {
        self.calls
            .lock()
            .unwrap()
            .push((token.expose_secret().clone(), presence));

        match self.outcome {
            Outcome::Ready => Ok(FakeSession {
                bot_name: "WebDevBot".to_string(),
            }),
            Outcome::RejectToken => Err(AuthError::InvalidToken.into()),
        }
    }
}
