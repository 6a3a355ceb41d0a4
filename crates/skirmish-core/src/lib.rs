//! Core types and definitions for the Skirmish scene.
//!
//! This crate defines the vocabulary shared across the other crates:
//! components, host inputs, scene snapshots, events, constants, config
//! and errors. It has no dependency on the ECS or any runtime framework.

pub mod commands;
pub mod components;
pub mod config;
pub mod constants;
pub mod enums;
pub mod errors;
pub mod events;
pub mod state;
pub mod types;
