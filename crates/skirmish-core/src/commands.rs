//! Host inputs delivered to the scene.
//!
//! Inputs are queued and applied at the start of the next frame.

use serde::{Deserialize, Serialize};

use crate::types::Point2D;

/// All input the host forwards to the scene.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum HostInput {
    /// A touch (or click) was released at `location`, in scene coordinates.
    TouchEnded { location: Point2D },
}
