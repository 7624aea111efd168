//! Web Dev Activities Bot Test Utils
//!
//! Provides shared testing utilities for the bot's configuration loading. This crate
//! offers a builder for writing throwaway `.env` files into temporary directories and
//! small helpers for building fake process environments.
//!
//! # Overview
//!
//! The test utilities consist of four main components:
//! - **DotenvBuilder**: Fluent builder for the contents of a temporary `.env` file
//! - **DotenvFixture**: Temporary directory holding the written file
//! - **env_vars**: Builds an environment map from key-value pairs
//! - **TestError**: Error types that can occur during test setup
//!
//! # Usage
//!
//! ```rust,ignore
//! use test_utils::{builder::DotenvBuilder, env::env_vars};
//!
//! #[test]
//! fn file_wins() -> Result<(), TestError> {
//!     let fixture = DotenvBuilder::new().entry("BOT_TOKEN", "abc").build()?;
//!     let env = env_vars(&[("BOT_TOKEN", "xyz")]);
//!
//!     let sources = ConfigSources::new(read_dotenv(fixture.path()), env);
//!     // Resolve configuration...
//!
//!     Ok(())
//! }
//! ```

pub mod builder;
pub mod context;
pub mod env;
pub mod error;
