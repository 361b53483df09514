//! Command file repository for filesystem access.
//!
//! This module provides the `CommandFileRepository` for discovering command source files
//! below a command root. It is the only place that touches the filesystem on behalf of the
//! feature index and command listing: services receive already-read text and never do I/O.
//! Unreadable entries are logged and skipped so one bad file never hides its siblings.

use std::{
    io,
    path::{Component, Path},
};

use walkdir::{DirEntry, WalkDir};

/// File name suffix identifying command source files.
pub const COMMAND_FILE_EXTENSION: &str = ".js";

/// A command source file read from disk.
#[derive(Debug, Clone, PartialEq)]
pub struct CommandFile {
    /// Path segments relative to the command root, the file name last.
    pub segments: Vec<String>,
    /// Full text of the file, with invalid UTF-8 replaced.
    pub content: String,
}

impl CommandFile {
    /// Relative path joined with `/` regardless of platform.
    pub fn relative_path(&self) -> String {
        self.segments.join("/")
    }

    /// Directory segments between the command root and the file.
    pub fn directories(&self) -> &[String] {
        match self.segments.split_last() {
            Some((_, directories)) => directories,
            None => &[],
        }
    }

    pub fn file_name(&self) -> &str {
        self.segments.last().map(String::as_str).unwrap_or_default()
    }
}

/// Repository providing read access to the command tree.
pub struct CommandFileRepository<'a> {
    root: &'a Path,
}

impl<'a> CommandFileRepository<'a> {
    /// Creates a new CommandFileRepository instance.
    ///
    /// # Arguments
    /// - `root` - Directory holding the command source files
    ///
    /// # Returns
    /// - `CommandFileRepository` - New repository instance
    pub fn new(root: &'a Path) -> Self {
        Self { root }
    }

    /// Checks whether the command root exists as a directory.
    pub fn root_exists(&self) -> bool {
        self.root.is_dir()
    }

    /// Reads every command source file below the root, at any depth.
    ///
    /// Directory entries that cannot be listed and files that cannot be read are skipped.
    /// Symbolic links are not followed. The order of the result is unspecified.
    ///
    /// # Returns
    /// - `Vec<CommandFile>` - Every readable command file; empty when the root is missing
    pub fn find_all(&self) -> Vec<CommandFile> {
        self.find_all_with(|path| std::fs::read(path))
    }

    /// Walks the command tree, reading each command file through `read`.
    pub(crate) fn find_all_with<R>(&self, read: R) -> Vec<CommandFile>
    where
        R: Fn(&Path) -> io::Result<Vec<u8>>,
    {
        if !self.root_exists() {
            return Vec::new();
        }

        WalkDir::new(self.root)
            .into_iter()
            .filter_map(|entry| match entry {
                Ok(entry) => Some(entry),
                Err(err) => {
                    tracing::debug!("Skipping unreadable command tree entry: {}", err);
                    None
                }
            })
            .filter(is_command_file)
            .filter_map(|entry| self.read(&entry, &read))
            .collect()
    }

    /// Reads a single directory entry into a `CommandFile`, or `None` if it cannot be read.
    fn read<R>(&self, entry: &DirEntry, read: &R) -> Option<CommandFile>
    where
        R: Fn(&Path) -> io::Result<Vec<u8>>,
    {
        let segments = match entry.path().strip_prefix(self.root) {
            Ok(relative) => relative
                .components()
                .filter_map(|component| match component {
                    Component::Normal(segment) => Some(segment.to_string_lossy().into_owned()),
                    _ => None,
                })
                .collect::<Vec<_>>(),
            Err(_) => return None,
        };

        match read(entry.path()) {
            Ok(bytes) => Some(CommandFile {
                segments,
                content: String::from_utf8_lossy(&bytes).into_owned(),
            }),
            Err(err) => {
                tracing::debug!(
                    "Skipping unreadable command file {}: {}",
                    entry.path().display(),
                    err
                );
                None
            }
        }
    }
}

fn is_command_file(entry: &DirEntry) -> bool {
    entry.file_type().is_file()
        && entry
            .file_name()
            .to_string_lossy()
            .ends_with(COMMAND_FILE_EXTENSION)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn file(segments: &[&str]) -> CommandFile {
        CommandFile {
            segments: segments.iter().map(|s| s.to_string()).collect(),
            content: String::new(),
        }
    }

    #[test]
    fn splits_directories_from_file_name() {
        let nested = file(&["utility", "fun", "roll.js"]);
        assert_eq!(nested.directories(), ["utility", "fun"]);
        assert_eq!(nested.file_name(), "roll.js");
        assert_eq!(nested.relative_path(), "utility/fun/roll.js");

        let top_level = file(&["ping.js"]);
        assert!(top_level.directories().is_empty());
        assert_eq!(top_level.file_name(), "ping.js");
    }
}
