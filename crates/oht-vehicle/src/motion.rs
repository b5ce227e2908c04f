//! Constant-speed waypoint stepping and hoist easing.

use oht_core::Point3;

/// Timer comparisons accept this much float accumulation error, so a phase
/// fed in slices that sum to its duration finishes on the last slice.
pub const TIME_EPSILON: f32 = 1e-4;

/// Result of one translation step toward a waypoint.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Step {
    pub position: Point3,
    /// `true` if the waypoint was reached (position snapped onto it).
    pub reached:  bool,
}

/// Move from `from` toward `target` by at most `max_distance` on the rail
/// plane.  A step that would reach or pass the target lands exactly on it;
/// leftover distance is discarded so a junction is never skipped.
pub fn step_toward(from: Point3, target: Point3, max_distance: f32) -> Step {
    let remaining = from.planar_distance(target);
    if remaining <= max_distance || remaining <= f32::EPSILON {
        return Step { position: target, reached: true };
    }
    let t = max_distance / remaining;
    Step {
        position: Point3::new(
            from.x + (target.x - from.x) * t,
            from.y + (target.y - from.y) * t,
            from.z + (target.z - from.z) * t,
        ),
        reached: false,
    }
}

/// Quadratic ease-in-out on `[0, 1]`.
#[inline]
pub fn ease_in_out(t: f32) -> f32 {
    let t = t.clamp(0.0, 1.0);
    if t < 0.5 {
        2.0 * t * t
    } else {
        1.0 - (-2.0 * t + 2.0).powi(2) / 2.0
    }
}

#[inline]
pub fn lerp(a: f32, b: f32, t: f32) -> f32 {
    a + (b - a) * t
}

/// `true` once `elapsed` has reached `duration`, within [`TIME_EPSILON`].
#[inline]
pub fn phase_done(elapsed: f32, duration: f32) -> bool {
    elapsed + TIME_EPSILON >= duration
}
