use crate::{
    config::{read_dotenv, Config, ConfigSources, TokenSource, BOT_TOKEN_KEY},
    error::config::ConfigError,
};
use secrecy::ExposeSecret;
use test_utils::{builder::DotenvBuilder, env::env_vars, error::TestError};

mod resolve;
