use super::*;

/// Tests that resolution fails when no source defines the token.
///
/// Expected: Err(ConfigError::MissingToken("BOT_TOKEN"))
#[test]
fn fails_when_token_unset_everywhere() -> Result<(), TestError> {
    let fixture = DotenvBuilder::new().missing().build()?;
    let sources = ConfigSources::new(read_dotenv(fixture.path()), env_vars(&[]));

    let result = Config::resolve(&sources);

    assert!(matches!(
        result,
        Err(ConfigError::MissingToken(ref key)) if key == BOT_TOKEN_KEY
    ));

    Ok(())
}

/// Tests that an empty environment value is rejected.
///
/// Expected: Err(ConfigError::MissingToken)
#[test]
fn fails_when_env_token_blank() {
    let sources = ConfigSources::new(env_vars(&[]), env_vars(&[("BOT_TOKEN", "")]));

    assert!(matches!(
        Config::resolve(&sources),
        Err(ConfigError::MissingToken(_))
    ));
}

/// Tests that a whitespace-only value in both sources is rejected.
///
/// Expected: Err(ConfigError::MissingToken)
#[test]
fn fails_when_both_tokens_whitespace() {
    let sources = ConfigSources::new(
        env_vars(&[("BOT_TOKEN", "   ")]),
        env_vars(&[("BOT_TOKEN", "\t")]),
    );

    assert!(matches!(
        Config::resolve(&sources),
        Err(ConfigError::MissingToken(_))
    ));
}

/// Tests that a token defined in `.env` wins over the environment.
///
/// Expected: Ok with token "abc" from the dotenv source
#[test]
fn prefers_dotenv_over_environment() -> Result<(), TestError> {
    let fixture = DotenvBuilder::new().entry("BOT_TOKEN", "abc").build()?;
    let sources = ConfigSources::new(
        read_dotenv(fixture.path()),
        env_vars(&[("BOT_TOKEN", "xyz")]),
    );

    let config = Config::resolve(&sources).unwrap();

    assert_eq!(config.bot_token.expose_secret(), "abc");
    assert_eq!(config.source, TokenSource::Dotenv);

    Ok(())
}

/// Tests that the environment is used when `.env` is absent.
///
/// Expected: Ok with token "xyz" from the environment
#[test]
fn falls_back_to_environment() -> Result<(), TestError> {
    let fixture = DotenvBuilder::new().missing().build()?;
    let sources = ConfigSources::new(
        read_dotenv(fixture.path()),
        env_vars(&[("BOT_TOKEN", "xyz")]),
    );

    let config = Config::resolve(&sources).unwrap();

    assert_eq!(config.bot_token.expose_secret(), "xyz");
    assert_eq!(config.source, TokenSource::Environment);

    Ok(())
}

/// Tests that a blank `.env` entry does not shadow the environment.
///
/// Expected: Ok with token "xyz" from the environment
#[test]
fn blank_dotenv_entry_falls_back_to_environment() -> Result<(), TestError> {
    let fixture = DotenvBuilder::new().entry("BOT_TOKEN", "").build()?;
    let sources = ConfigSources::new(
        read_dotenv(fixture.path()),
        env_vars(&[("BOT_TOKEN", "xyz")]),
    );

    let config = Config::resolve(&sources).unwrap();

    assert_eq!(config.bot_token.expose_secret(), "xyz");
    assert_eq!(config.source, TokenSource::Environment);

    Ok(())
}

/// Tests that a malformed `.env` file is treated as absent.
///
/// Expected: Ok with token "xyz" from the environment
#[test]
fn malformed_dotenv_falls_back_to_environment() -> Result<(), TestError> {
    let fixture = DotenvBuilder::new()
        .entry("BOT_TOKEN", "abc")
        .line("BOT_TOKEN abc")
        .build()?;
    let sources = ConfigSources::new(
        read_dotenv(fixture.path()),
        env_vars(&[("BOT_TOKEN", "xyz")]),
    );

    let config = Config::resolve(&sources).unwrap();

    assert_eq!(config.bot_token.expose_secret(), "xyz");
    assert_eq!(config.source, TokenSource::Environment);

    Ok(())
}

/// Tests that surrounding whitespace is stripped from the token.
#[test]
fn trims_token() {
    let sources = ConfigSources::new(env_vars(&[]), env_vars(&[("BOT_TOKEN", "  xyz \n")]));

    let config = Config::resolve(&sources).unwrap();

    assert_eq!(config.bot_token.expose_secret(), "xyz");
}

/// Tests that the token never shows up in debug output.
#[test]
fn debug_output_redacts_token() {
    let sources = ConfigSources::new(env_vars(&[]), env_vars(&[("BOT_TOKEN", "super-secret")]));

    let config = Config::resolve(&sources).unwrap();
    let debug = format!("{:?}", config);

    assert!(!debug.contains("super-secret"));
    assert!(debug.contains("REDACTED"));
}
