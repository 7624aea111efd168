//! Error types and process exit code mapping.
//!
//! `AppError` is the top-level error type. It wraps the domain-specific errors
//! and the gateway library's error, and `exit_code()` decides how the process
//! terminates when an error reaches `main`.

pub mod auth;
pub mod config;

use std::process::ExitCode;

use serenity::gateway::GatewayError;
use thiserror::Error;

use crate::error::{auth::AuthError, config::ConfigError};

/// Exit status for configuration errors (`EX_CONFIG` from sysexits.h).
pub const EXIT_CONFIG: u8 = 78;

/// Exit status for rejected credentials (`EX_NOPERM` from sysexits.h).
pub const EXIT_AUTH: u8 = 77;

/// Top-level application error type.
///
/// Every variant is fatal. Nothing is retried or recovered locally; `main` logs
/// the error and exits with the status from [`AppError::exit_code`].
#[derive(Error, Debug)]
pub enum AppError {
    /// Configuration error while resolving the bot token.
    #[error(transparent)]
    ConfigErr(#[from] ConfigError),

    /// Discord refused the credentials.
    #[error(transparent)]
    AuthErr(#[from] AuthError),

    /// Discord gateway or HTTP error from Serenity.
    ///
    /// Boxed due to large size.
    #[error(transparent)]
    DiscordErr(#[from] Box<serenity::Error>),

    /// The task driving the gateway client panicked or was aborted.
    #[error(transparent)]
    TaskErr(#[from] tokio::task::JoinError),

    /// The gateway client returned without error before the session became ready.
    #[error("Discord gateway closed before the session was ready")]
    GatewayClosedBeforeReady,
}

impl AppError {
    /// Classifies a Serenity error, splitting authentication failures out of the
    /// generic Discord error variant.
    ///
    /// A token is considered rejected when the gateway reports
    /// `InvalidAuthentication` or the HTTP API answers 401 Unauthorized.
    pub fn from_gateway(err: serenity::Error) -> Self {
        let rejected = match &err {
            serenity::Error::Gateway(GatewayError::InvalidAuthentication) => true,
            serenity::Error::Http(http) => http.status_code().is_some_and(|s| s.as_u16() == 401),
            _ => false,
        };

        if rejected {
            AuthError::InvalidToken.into()
        } else {
            err.into()
        }
    }

    /// Maps the error to the status the process exits with.
    ///
    /// # Returns
    /// - `78` - Missing or blank token
    /// - `77` - Token rejected by Discord
    /// - `1` - Any other gateway or runtime failure
    pub fn exit_status(&self) -> u8 {
        match self {
            Self::ConfigErr(_) => EXIT_CONFIG,
            Self::AuthErr(_) => EXIT_AUTH,
            _ => 1,
        }
    }

    pub fn exit_code(&self) -> ExitCode {
        ExitCode::from(self.exit_status())
    }
}

/// Manual conversion from serenity::Error to AppError.
///
/// Boxes the error to reduce the size of the AppError enum. Use
/// [`AppError::from_gateway`] instead when authentication failures must be
/// told apart.
impl From<serenity::Error> for AppError {
    fn from(err: serenity::Error) -> Self {
        AppError::DiscordErr(Box::new(err))
    }
}
