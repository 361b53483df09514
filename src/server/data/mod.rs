//! Repository layer for persisted inputs.
//!
//! The dashboard's only persisted input is the bot's command tree on disk. Repositories
//! here read it and hand plain values to the service layer, which never performs I/O
//! itself.

pub mod command_file;

#[cfg(test)]
mod test;
