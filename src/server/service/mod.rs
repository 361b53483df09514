//! Service layer for business logic and orchestration.
//!
//! This module contains the service layer of the application, which sits between the
//! controller (API) layer and the data (repository) layer. Services are responsible for:
//!
//! - **Metadata Extraction**: Pulling declarative fields out of command source text
//! - **Indexing**: Grouping, sorting, and summarizing the discovered commands
//! - **Caching**: Serving the last built index until it goes stale
//! - **Orchestration**: Coordinating the OAuth flow with Discord's API

pub mod auth;
pub mod command;
pub mod feature;
pub mod metadata;
