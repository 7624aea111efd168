use std::fs;

use tempfile::TempDir;

use crate::{context::DotenvFixture, error::TestError};

/// File name written inside the fixture's temporary directory.
const DOTENV_FILE_NAME: &str = ".env";

/// Builder for temporary `.env` files.
///
/// Collects the file's lines, then writes them into a fresh temporary directory
/// when `build()` is called. Use `missing()` to get a fixture whose path points
/// at a file that does not exist.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::builder::DotenvBuilder;
///
/// let fixture = DotenvBuilder::new()
///     .entry("BOT_TOKEN", "abc")
///     .line("# comment")
///     .build()?;
/// ```
pub struct DotenvBuilder {
    /// Raw file lines, written in order and joined with newlines.
    lines: Vec<String>,

    /// Whether the file is written at all.
    create: bool,
}

impl DotenvBuilder {
    /// Creates a builder for an empty `.env` file.
    pub fn new() -> Self {
        Self {
            lines: Vec::new(),
            create: true,
        }
    }

    /// Adds a `KEY=value` entry.
    ///
    /// # Arguments
    /// - `key` - Variable name
    /// - `value` - Unquoted value written verbatim after the `=`
    ///
    /// # Returns
    /// - `Self` - Builder instance for method chaining
    pub fn entry(self, key: &str, value: &str) -> Self {
        self.line(&format!("{key}={value}"))
    }

    /// Adds a raw line, which may be a comment or deliberately malformed.
    pub fn line(mut self, line: &str) -> Self {
        self.lines.push(line.to_string());
        self
    }

    /// Skips writing the file so the fixture path does not exist.
    pub fn missing(mut self) -> Self {
        self.create = false;
        self
    }

    /// Writes the configured file into a new temporary directory.
    ///
    /// # Returns
    /// - `Ok(DotenvFixture)` - Fixture owning the temporary directory
    /// - `Err(TestError::Io)` - Failed to create the directory or write the file
    pub fn build(self) -> Result<DotenvFixture, TestError> {
        let dir = TempDir::new()?;
        let path = dir.path().join(DOTENV_FILE_NAME);

        if self.create {
            let mut contents = self.lines.join("\n");
            contents.push('\n');
            fs::write(&path, contents)?;
        }

        Ok(DotenvFixture::new(dir, path))
    }
}

impl Default for DotenvBuilder {
    fn default() -> Self {
        Self::new()
    }
}
