//! Core types and definitions for the arena shooter simulation.
//!
//! This crate defines the vocabulary shared across all other crates:
//! ids, commands, input intents, state snapshots, events, errors and
//! constants. It has no dependency on any runtime framework.

pub mod commands;
pub mod constants;
pub mod enums;
pub mod error;
pub mod events;
pub mod state;
pub mod types;

#[cfg(test)]
mod tests;
