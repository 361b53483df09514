use std::{
    path::{Component, Path, PathBuf},
    sync::Arc,
};
use tempfile::TempDir;
use time::Duration;
use tower_sessions::{Expiry, MemoryStore, Session};

use crate::error::TestError;

/// Test context containing a temporary command tree and session.
///
/// The temporary directory is removed when the context is dropped, so tests must keep the
/// context alive for as long as they use `commands_root()` or `docs_root()`. The session is
/// created lazily on first access and persists for the lifetime of the context.
pub struct TestContext {
    /// Temporary directory holding both the command root and the docs root.
    dir: TempDir,

    /// Optional session instance backed by an in-memory store.
    ///
    /// Initialized lazily when `session()` is first called.
    pub session: Option<Session>,
}

impl TestContext {
    /// Creates a new context with an empty temporary directory.
    ///
    /// Neither the command root nor the docs root exist until something creates them;
    /// `TestBuilder::build()` normally does.
    ///
    /// # Returns
    /// - `Ok(TestContext)` - Context owning a fresh temporary directory
    /// - `Err(TestError::Io)` - Failed to create the temporary directory
    pub fn new() -> Result<Self, TestError> {
        Ok(Self {
            dir: tempfile::tempdir()?,
            session: None,
        })
    }

    /// Path of the command root inside the temporary directory.
    pub fn commands_root(&self) -> PathBuf {
        self.dir.path().join("commands")
    }

    /// Path of the documentation root inside the temporary directory.
    pub fn docs_root(&self) -> PathBuf {
        self.dir.path().join("docsweb")
    }

    /// Writes (or overwrites) a file below the command root.
    ///
    /// Parent directories are created as needed. Used by the builder and by tests that
    /// change the tree after a first index build.
    ///
    /// # Arguments
    /// - `path` - Location relative to the command root, using `/` separators
    /// - `contents` - Raw bytes to write
    ///
    /// # Returns
    /// - `Ok(PathBuf)` - Absolute path of the written file
    /// - `Err(TestError)` - Invalid path or failed write
    pub fn write_command(
        &self,
        path: &str,
        contents: impl AsRef<[u8]>,
    ) -> Result<PathBuf, TestError> {
        write_below(&self.commands_root(), path, contents.as_ref())
    }

    /// Writes (or overwrites) a file below the docs root.
    pub fn write_doc(&self, path: &str, contents: impl AsRef<[u8]>) -> Result<PathBuf, TestError> {
        write_below(&self.docs_root(), path, contents.as_ref())
    }

    /// Gets or creates the test session instance.
    ///
    /// Creates a session backed by a fresh `MemoryStore` with the same inactivity expiry
    /// the server uses. Subsequent calls return the same session instance.
    ///
    /// # Example
    /// ```rust,ignore
    /// let mut test = TestBuilder::new().build()?;
    /// let session = test.session();
    ///
    /// session.insert("auth:user", user).await?;
    /// ```
    pub fn session(&mut self) -> &Session {
        self.session.get_or_insert_with(|| {
            Session::new(
                None,
                Arc::new(MemoryStore::default()),
                Some(Expiry::OnInactivity(Duration::days(7))),
            )
        })
    }
}

/// Joins a `/`-separated relative path onto `root`, creating parent directories.
fn write_below(root: &Path, path: &str, contents: &[u8]) -> Result<PathBuf, TestError> {
    let relative = Path::new(path);
    if !relative
        .components()
        .all(|component| matches!(component, Component::Normal(_)))
    {
        return Err(TestError::InvalidPath(path.to_string()));
    }

    let target = root.join(relative);
    if let Some(parent) = target.parent() {
        std::fs::create_dir_all(parent)?;
    }
    std::fs::write(&target, contents)?;

    Ok(target)
}
