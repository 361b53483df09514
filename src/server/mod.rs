//! Server-side API backend and business logic.
//!
//! This module contains the complete backend of the dashboard: the command documentation
//! index, the command listing, the Discord OAuth2 login, and the static documentation
//! site. The backend uses Axum as the web framework and reads command metadata straight
//! from the bot's command source tree.
//!
//! # Architecture
//!
//! The server follows a layered architecture with clear separation of concerns:
//!
//! - **Controller Layer** (`controller/`) - HTTP request handlers, access control, and DTO conversion
//! - **Service Layer** (`service/`) - Metadata extraction, indexing, caching, and the OAuth flow
//! - **Data Layer** (`data/`) - Filesystem access to the command tree
//! - **Model Layer** (`model/`) - Domain models such as command descriptors and the feature index
//! - **Error Layer** (`error/`) - Application error types and HTTP response mapping
//! - **Middleware** (`middleware/`) - Typed session access and authentication guards
//!
//! # Infrastructure
//!
//! Supporting modules provide application infrastructure:
//!
//! - **Configuration** (`config`) - Environment-based application configuration
//! - **State** (`state`) - Shared application state (HTTP clients, index cache, etc.)
//! - **Startup** (`startup`) - Initialization of tracing, sessions, CORS, and clients
//! - **Router** (`router`) - Axum route configuration and API documentation
//!
//! # Request Flow
//!
//! A typical request flows through these layers:
//!
//! 1. **Router** receives HTTP request and routes to appropriate controller
//! 2. **Middleware** processes authentication and session management
//! 3. **Controller** validates access and calls the service
//! 4. **Service** extracts, groups, or fetches what was asked for
//! 5. **Data** walks and reads the command tree
//! 6. **Controller** converts domain model to DTO, returns HTTP response

pub mod config;
pub mod controller;
pub mod data;
pub mod error;
pub mod middleware;
pub mod model;
pub mod router;
pub mod service;
pub mod startup;
pub mod state;
pub mod util;
