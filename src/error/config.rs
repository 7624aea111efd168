use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    /// Required configuration value is not set in either source.
    ///
    /// The bot looks for this key in the local `.env` file first and then in the
    /// process environment. Empty or whitespace-only values count as unset.
    #[error("{0} is not set in .env or the process environment")]
    MissingToken(String),
}
