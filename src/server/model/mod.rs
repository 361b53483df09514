//! Server-side domain models.
//!
//! This module contains domain models used throughout the service layer. Domain models are
//! produced by the data layer (command files on disk) or the Discord API and transformed to
//! DTOs at the controller boundary.

pub mod command;
pub mod discord;
pub mod feature;
pub mod user;
