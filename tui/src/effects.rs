//! Slide transition easing and camera math.

use folio_engine::SlideEffect;

/// Control points of the deck's ease-out curve, `cubic-bezier(0.19, 1, 0.22, 1)`.
const EASE_X1: f32 = 0.19;
const EASE_Y1: f32 = 1.0;
const EASE_X2: f32 = 0.22;
const EASE_Y2: f32 = 1.0;

/// Eased progress of a slide effect in `0.0..=1.0`.
#[must_use]
pub fn eased_progress(effect: &SlideEffect) -> f32 {
    if effect.is_finished() {
        return 1.0;
    }
    ease_out_strong(effect.progress())
}

/// Scroll position, in cells, of the camera along the effect's axis.
///
/// Index `i` sits at `i * extent`; the camera slides from `from` to `to`.
#[must_use]
pub fn camera(effect: &SlideEffect, extent: u16) -> f32 {
    let from = effect.from() as f32;
    let to = effect.to() as f32;
    let t = eased_progress(effect);
    (from + (to - from) * t) * f32::from(extent)
}

#[must_use]
pub fn ease_out_strong(t: f32) -> f32 {
    cubic_bezier(EASE_X1, EASE_Y1, EASE_X2, EASE_Y2, t)
}

fn bezier(p1: f32, p2: f32, t: f32) -> f32 {
    let inv = 1.0 - t;
    3.0 * inv * inv * t * p1 + 3.0 * inv * t * t * p2 + t * t * t
}

fn bezier_slope(p1: f32, p2: f32, t: f32) -> f32 {
    let inv = 1.0 - t;
    3.0 * inv * inv * p1 + 6.0 * inv * t * (p2 - p1) + 3.0 * t * t * (1.0 - p2)
}

/// CSS-style timing function: solve for the curve parameter at `x`, return `y`.
fn cubic_bezier(x1: f32, y1: f32, x2: f32, y2: f32, x: f32) -> f32 {
    let x = x.clamp(0.0, 1.0);
    if x <= 0.0 || x >= 1.0 {
        return x;
    }

    let mut t = x;
    for _ in 0..8 {
        let err = bezier(x1, x2, t) - x;
        if err.abs() < 1e-5 {
            return bezier(y1, y2, t);
        }
        let slope = bezier_slope(x1, x2, t);
        if slope.abs() < 1e-6 {
            break;
        }
        t = (t - err / slope).clamp(0.0, 1.0);
    }

    // Newton stalled; bisect.
    let (mut lo, mut hi) = (0.0_f32, 1.0_f32);
    t = x;
    for _ in 0..32 {
        let value = bezier(x1, x2, t);
        if (value - x).abs() < 1e-5 {
            break;
        }
        if value < x {
            lo = t;
        } else {
            hi = t;
        }
        t = (lo + hi) / 2.0;
    }
    bezier(y1, y2, t)
}
