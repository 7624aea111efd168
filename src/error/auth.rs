use thiserror::Error;

#[derive(Error, Debug)]
pub enum AuthError {
    /// Discord rejected the bot token.
    ///
    /// Raised when the gateway closes the connection with an authentication failure
    /// or when the HTTP API answers with 401 Unauthorized. The token is never retried.
    #[error("Discord rejected the bot token")]
    InvalidToken,
}
