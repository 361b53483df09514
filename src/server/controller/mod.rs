//! HTTP request handlers.
//!
//! Each submodule groups the handlers of one area of the API, annotated with
//! `#[utoipa::path]` so the router can assemble the OpenAPI document from them.

pub mod auth;
pub mod command;
pub mod feature;
pub mod guild;
pub mod health;

#[cfg(test)]
mod test;
