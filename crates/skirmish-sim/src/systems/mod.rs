//! Systems that operate on the scene world each frame.
//!
//! Systems are plain functions that take `&mut World` (or `&World` for
//! read-only work). State that is not a component is passed in explicitly.

pub mod aim;
pub mod cleanup;
pub mod contact;
pub mod frame_clock;
pub mod movement;
pub mod physics;
pub mod snapshot;
pub mod spawn_scheduler;
