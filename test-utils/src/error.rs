use thiserror::Error;

#[derive(Error, Debug)]
pub enum TestError {
    /// Failed to create the temporary directory or write the `.env` file.
    #[error(transparent)]
    Io(#[from] std::io::Error),
}
