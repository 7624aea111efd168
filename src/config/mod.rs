//! Bot token resolution.
//!
//! The token can come from two places: a local `.env` file in the working
//! directory and the process environment. Both are captured once at startup into
//! a [`ConfigSources`] snapshot, which is handed to [`Config::resolve`]. A value
//! defined in `.env` wins over the environment.

use std::{collections::HashMap, fmt, path::Path};

use secrecy::{ExposeSecret, Secret};

use crate::error::config::ConfigError;

#[cfg(test)]
mod test;

/// Key holding the Discord bot token in both sources.
pub const BOT_TOKEN_KEY: &str = "BOT_TOKEN";

/// Local configuration file read from the working directory.
pub const DOTENV_FILE: &str = ".env";

/// Discord bot token.
///
/// Wraps the raw string in a `Secret` so it cannot end up in logs or `Debug`
/// output by accident.
pub struct BotToken(Secret<String>);

impl BotToken {
    pub fn new(token: String) -> Self {
        Self(Secret::new(token))
    }
}

impl ExposeSecret<String> for BotToken {
    fn expose_secret(&self) -> &String {
        self.0.expose_secret()
    }
}

impl fmt::Debug for BotToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("BotToken([REDACTED])")
    }
}

/// Where the resolved token was found.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenSource {
    Dotenv,
    Environment,
}

impl fmt::Display for TokenSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Dotenv => f.write_str(DOTENV_FILE),
            Self::Environment => f.write_str("environment"),
        }
    }
}

/// Snapshot of both configuration sources.
///
/// Production code builds it with [`ConfigSources::from_process`]; tests build
/// it directly from maps so they never have to touch the real environment.
#[derive(Default)]
pub struct ConfigSources {
    dotenv: HashMap<String, String>,
    env: HashMap<String, String>,
}

impl ConfigSources {
    pub fn new(dotenv: HashMap<String, String>, env: HashMap<String, String>) -> Self {
        Self { dotenv, env }
    }

    /// Captures the `.env` file at `path` and the relevant process environment
    /// variables.
    ///
    /// # Arguments
    /// - `path` - Location of the optional `.env` file
    ///
    /// # Returns
    /// - `ConfigSources` with the file entries (empty when the file is absent or
    ///   malformed) and the `BOT_TOKEN` environment variable if it is set and valid
    ///   unicode
    pub fn from_process(path: &Path) -> Self {
        let env = std::env::var(BOT_TOKEN_KEY)
            .ok()
            .map(|value| (BOT_TOKEN_KEY.to_string(), value))
            .into_iter()
            .collect();

        Self::new(read_dotenv(path), env)
    }

    fn lookup(&self, key: &str) -> Option<(&str, TokenSource)> {
        non_blank(self.dotenv.get(key))
            .map(|value| (value, TokenSource::Dotenv))
            .or_else(|| non_blank(self.env.get(key)).map(|value| (value, TokenSource::Environment)))
    }
}

fn non_blank(value: Option<&String>) -> Option<&str> {
    value.map(|v| v.trim()).filter(|v| !v.is_empty())
}

/// Reads the key-value pairs of a dotenv file without touching the process
/// environment.
///
/// A missing file yields an empty map. A file that exists but fails to open or
/// parse is treated the same way after logging a warning; the offending line is
/// never logged since it may hold the token.
///
/// # Arguments
/// - `path` - Location of the dotenv file
///
/// # Returns
/// - Map of all entries defined in the file, or an empty map
pub fn read_dotenv(path: &Path) -> HashMap<String, String> {
    let entries = match dotenvy::from_path_iter(path) {
        Ok(iter) => iter.collect::<Result<HashMap<_, _>, _>>(),
        Err(e) if e.not_found() => return HashMap::new(),
        Err(e) => Err(e),
    };

    match entries {
        Ok(entries) => entries,
        Err(dotenvy::Error::LineParse(_, index)) => {
            tracing::warn!(
                "Ignoring malformed configuration file {} (parse error at position {})",
                path.display(),
                index
            );
            HashMap::new()
        }
        Err(e) => {
            tracing::warn!(
                "Ignoring unreadable configuration file {}: {}",
                path.display(),
                e
            );
            HashMap::new()
        }
    }
}

/// Resolved application configuration.
#[derive(Debug)]
pub struct Config {
    pub bot_token: BotToken,
    pub source: TokenSource,
}

impl Config {
    /// Resolves the bot token from the configuration sources.
    ///
    /// The `.env` value is used if it is defined and non-blank, otherwise the
    /// environment value. Surrounding whitespace is trimmed.
    ///
    /// # Arguments
    /// - `sources` - Snapshot of the `.env` file and process environment
    ///
    /// # Returns
    /// - `Ok(Config)` - Token found in one of the sources
    /// - `Err(ConfigError::MissingToken)` - Neither source defines a non-blank token
    pub fn resolve(sources: &ConfigSources) -> Result<Self, ConfigError> {
        let (token, source) = sources
            .lookup(BOT_TOKEN_KEY)
            .ok_or_else(|| ConfigError::MissingToken(BOT_TOKEN_KEY.to_string()))?;

        tracing::info!("Resolved {} from {}", BOT_TOKEN_KEY, source);

        Ok(Self {
            bot_token: BotToken::new(token.to_string()),
            source,
        })
    }
}
