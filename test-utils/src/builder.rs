use crate::{context::TestContext, error::TestError, fixture::CommandSource};

/// Builder for creating test contexts with a prepared command tree.
///
/// Provides a fluent interface for laying out command source files (and documentation
/// assets) inside a fresh temporary directory. Files are written when `build()` is called,
/// in the order they were added.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::{builder::TestBuilder, fixture::CommandSource};
///
/// let test = TestBuilder::new()
///     .with_command("utility/ping.js", CommandSource::new("ping", "Pong!"))
///     .with_command("utility/fun/roll.js", CommandSource::new("roll", "Roll a die"))
///     .build()?;
/// ```
pub struct TestBuilder {
    /// Files to create below the command root, as (relative path, contents) pairs.
    commands: Vec<(String, Vec<u8>)>,

    /// Files to create below the documentation root.
    docs: Vec<(String, Vec<u8>)>,

    /// Whether the command root directory should exist at all.
    ///
    /// Disabled by `without_commands_root()` to exercise the missing-root path.
    create_commands_root: bool,
}

impl TestBuilder {
    /// Creates a new test builder with an empty command root.
    ///
    /// # Returns
    /// - New `TestBuilder` instance with no files configured
    pub fn new() -> Self {
        Self {
            commands: Vec::new(),
            docs: Vec::new(),
            create_commands_root: true,
        }
    }

    /// Adds a command source file generated from a fixture.
    ///
    /// # Arguments
    /// - `path` - Location relative to the command root, using `/` separators
    /// - `source` - Fixture describing the metadata fields to render
    ///
    /// # Returns
    /// - `Self` - Builder instance for method chaining
    pub fn with_command(self, path: &str, source: CommandSource) -> Self {
        self.with_file(path, source.render())
    }

    /// Adds a file with arbitrary contents below the command root.
    ///
    /// Useful for malformed sources, binary data, or files with other extensions.
    ///
    /// # Arguments
    /// - `path` - Location relative to the command root, using `/` separators
    /// - `contents` - Raw bytes to write
    ///
    /// # Returns
    /// - `Self` - Builder instance for method chaining
    pub fn with_file(mut self, path: &str, contents: impl AsRef<[u8]>) -> Self {
        self.commands
            .push((path.to_string(), contents.as_ref().to_vec()));
        self
    }

    /// Adds a static documentation asset below the docs root.
    pub fn with_doc(mut self, path: &str, contents: impl AsRef<[u8]>) -> Self {
        self.docs.push((path.to_string(), contents.as_ref().to_vec()));
        self
    }

    /// Skips creating the command root directory.
    ///
    /// Any command files added to the builder are ignored.
    pub fn without_commands_root(mut self) -> Self {
        self.create_commands_root = false;
        self
    }

    /// Builds the test context and writes every configured file.
    ///
    /// # Returns
    /// - `Ok(TestContext)` - Context owning the populated temporary directory
    /// - `Err(TestError::Io)` - Failed to create the directory or write a file
    /// - `Err(TestError::InvalidPath)` - A configured path was absolute or contained `..`
    pub fn build(self) -> Result<TestContext, TestError> {
        let context = TestContext::new()?;

        if self.create_commands_root {
            std::fs::create_dir_all(context.commands_root())?;
            for (path, contents) in &self.commands {
                context.write_command(path, contents)?;
            }
        }

        std::fs::create_dir_all(context.docs_root())?;
        for (path, contents) in &self.docs {
            context.write_doc(path, contents)?;
        }

        Ok(context)
    }
}

impl Default for TestBuilder {
    fn default() -> Self {
        Self::new()
    }
}
