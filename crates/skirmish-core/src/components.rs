//! ECS components for hecs entities.
//!
//! Components are plain data structs. Game logic lives in the sim
//! crate's systems, not here.

use serde::{Deserialize, Serialize};

use crate::enums::Category;
use crate::types::{Point2D, Size2D};

/// Set of categories, used as a body's contact-test mask.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CategorySet {
    bits: u8,
}

impl CategorySet {
    pub const EMPTY: CategorySet = CategorySet { bits: 0 };

    pub fn of(categories: &[Category]) -> Self {
        let bits = categories.iter().fold(0, |acc, c| acc | c.bit());
        Self { bits }
    }

    pub fn contains(&self, category: Category) -> bool {
        self.bits & category.bit() != 0
    }

    pub fn is_empty(&self) -> bool {
        self.bits == 0
    }

    pub fn iter(&self) -> impl Iterator<Item = Category> + '_ {
        Category::ALL.into_iter().filter(|c| self.contains(*c))
    }
}

/// Collision volume, centered on the entity position.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum Shape {
    Circle { radius: f32 },
    Rect { half_extents: Point2D },
}

/// Physics body. Category and mask are fixed at spawn.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Body {
    pub category: Category,
    /// Categories whose contact with this body is reported.
    pub contact_mask: CategorySet,
    pub shape: Shape,
    /// Test contacts along the path moved since the last physics step, so a
    /// fast body cannot tunnel through another between two steps.
    #[serde(default)]
    pub precise: bool,
}

/// Scene-space position of an entity's center.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Position(pub Point2D);

/// Linear velocity (units/s). Zero for everything the scene spawns.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Velocity(pub Point2D);

/// Sprite footprint; the renderer owns the texture.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Sprite {
    pub size: Size2D,
}

/// Linear move toward `to`, optionally followed by removal from the scene.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct ScheduledMove {
    pub from: Point2D,
    pub to: Point2D,
    pub duration_secs: f64,
    pub elapsed_secs: f64,
    pub remove_on_finish: bool,
}

impl ScheduledMove {
    pub fn move_then_remove(from: Point2D, to: Point2D, duration_secs: f64) -> Self {
        Self {
            from,
            to,
            duration_secs,
            elapsed_secs: 0.0,
            remove_on_finish: true,
        }
    }

    /// Fraction of the move completed, in `[0, 1]`.
    pub fn progress(&self) -> f32 {
        if self.duration_secs <= 0.0 {
            return 1.0;
        }
        (self.elapsed_secs / self.duration_secs).clamp(0.0, 1.0) as f32
    }

    pub fn is_finished(&self) -> bool {
        self.elapsed_secs >= self.duration_secs
    }

    /// Position along the path at the current progress.
    pub fn current_position(&self) -> Point2D {
        self.from.lerp(self.to, self.progress())
    }
}
