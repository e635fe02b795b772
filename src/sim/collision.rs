//! Collision predicates for axis-aligned bodies and platforms
//!
//! Platforms are one-way: they only catch a body coming down from above.

use super::state::{Body, Platform};

/// Does the body's horizontal span overlap the platform's?
///
/// Both spans are half-open, so touching edges do not overlap.
#[inline]
pub fn spans_overlap(body: &Body, platform: &Platform) -> bool {
    body.pos.x + body.width() > platform.x && body.pos.x < platform.right()
}

/// Decide whether a body lands on (or keeps standing on) a platform this tick
///
/// `prev_y` is the body's bottom edge cached before this tick's integration.
/// A landing needs the body moving down or still, previously strictly above the
/// surface and now at or below it. A grounded body whose previous bottom edge
/// sits exactly on the surface stays supported.
pub fn lands_on(body: &Body, prev_y: f32, was_grounded: bool, platform: &Platform) -> bool {
    if body.vel.y > 0.0 || body.pos.y > platform.y {
        return false;
    }
    let from_above = prev_y > platform.y || (was_grounded && prev_y == platform.y);
    from_above && spans_overlap(body, platform)
}
