//! Aim/launch calculation: turns a touch point into a projectile flight plan.

use skirmish_core::constants::OVERSHOOT_DISTANCE;
use skirmish_core::errors::Degenerate;
use skirmish_core::types::Point2D;

/// Flight plan for one projectile, consumed by a move-then-remove action.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LaunchPlan {
    /// Unit vector from origin toward the target.
    pub direction: Point2D,
    /// Off-screen point along `direction`.
    pub destination: Point2D,
    pub duration_secs: f64,
}

/// Plan a launch with the default overshoot distance.
pub fn plan(
    origin: Point2D,
    target: Point2D,
    speed: f32,
    screen_width: f32,
) -> Result<LaunchPlan, Degenerate> {
    plan_with_overshoot(origin, target, speed, screen_width, OVERSHOOT_DISTANCE)
}

/// Plan a launch from `origin` toward `target`.
///
/// Only targets strictly to the right of the origin are accepted. The
/// duration is the time to cross the screen width at `speed`, not the time
/// to cover the overshoot path, so projectiles visibly travel faster than
/// `speed`.
pub fn plan_with_overshoot(
    origin: Point2D,
    target: Point2D,
    speed: f32,
    screen_width: f32,
    overshoot: f32,
) -> Result<LaunchPlan, Degenerate> {
    let offset = target - origin;

    // No firing backward or straight up/down.
    if offset.x <= 0.0 {
        return Err(Degenerate::not_ahead());
    }

    let length = offset.length();
    if !(length.is_finite() && length > 0.0) {
        return Err(Degenerate::zero_offset());
    }

    let direction = offset / length;
    let destination = origin + direction * overshoot;
    let duration_secs = (screen_width / speed) as f64;

    Ok(LaunchPlan {
        direction,
        destination,
        duration_secs,
    })
}
