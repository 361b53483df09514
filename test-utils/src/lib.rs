//! Dashboard Test Utils
//!
//! Provides shared testing utilities for building unit and handler tests for the dashboard.
//! This crate offers a builder pattern for creating test contexts backed by a temporary
//! command tree on disk and an in-memory session store.
//!
//! # Overview
//!
//! The test utilities consist of four main components:
//! - **TestBuilder**: Fluent builder for laying out command files before a test runs
//! - **TestContext**: Test environment owning the temporary directory and session
//! - **CommandSource**: Fixture for generating command source text with metadata fields
//! - **TestError**: Error types that can occur during test setup
//!
//! # Usage
//!
//! ```rust,ignore
//! use test_utils::{builder::TestBuilder, fixture::CommandSource};
//!
//! #[test]
//! fn builds_index() -> Result<(), TestError> {
//!     let test = TestBuilder::new()
//!         .with_command("utility/ping.js", CommandSource::new("ping", "Pong!"))
//!         .build()?;
//!
//!     let root = test.commands_root();
//!     // Run the index builder against `root`...
//!
//!     Ok(())
//! }
//! ```

pub mod builder;
pub mod context;
pub mod error;
pub mod fixture;
