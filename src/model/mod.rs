//! Wire DTOs returned by the HTTP API.
//!
//! These types define the JSON shapes clients see. Server-side domain models convert into
//! them via `into_dto()`; they carry no behavior of their own.

pub mod api;
pub mod command;
pub mod discord;
pub mod feature;
pub mod user;
