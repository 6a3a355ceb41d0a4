//! Scene controller for Skirmish.
//!
//! Owns the hecs world, runs the spawn/aim/contact loop plus a headless
//! stand-in for the host engine's action runner and physics, and produces
//! `SceneSnapshot`s.

pub mod engine;
pub mod score;
pub mod systems;
pub mod world_setup;

pub use engine::SceneController;
pub use skirmish_core as core;
