//! Core types and definitions for the Galaxian engine.
//!
//! This crate defines the vocabulary shared across all other crates:
//! geometry, entity components, commands, events, state snapshots,
//! configuration, and tuning constants. It has no runtime dependency.

pub mod commands;
pub mod components;
pub mod config;
pub mod constants;
pub mod enums;
pub mod error;
pub mod events;
pub mod state;
pub mod types;
