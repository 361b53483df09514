//! Test fixtures providing reusable command source text.
//!
//! This module contains fixtures that render in-memory command source files for use with
//! `TestBuilder`, or directly as literal input to the metadata extractor. Fixtures never
//! touch the filesystem themselves.
//!
//! # Example
//!
//! ```rust,ignore
//! use test_utils::fixture::CommandSource;
//!
//! let text = CommandSource::new("ping", "Replies with pong")
//!     .aliases(&["p"])
//!     .enabled_slash(true)
//!     .render();
//! ```

pub mod command;

pub use command::{CommandSource, BINARY_SOURCE};
