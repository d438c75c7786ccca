//! Moving rats around the screen.
//!
//! Each corner of a rat is tagged with a heading pointing out and away from the rat in the
//! direction of that corner: the top right corner is tagged with 0 (so headings from 0 to 90°
//! move up and to the right), the top left with 90°, the bottom left with 180° and the bottom
//! right with 270°. Each frame the corners are checked against the visible screen area:
//!
//! - all four corners visible: keep going in the same direction
//! - some corners visible: pick one of the visible corners at random and head off in its
//!   direction (back towards the visible area)
//! - nothing visible: stop where we are
//!
//! This is not a true reflection off of the screen edges, so rats wander a little whenever
//! they reach the edge of the screen.
use crate::{
    core::TrackedWindow,
    pure::geometry::{Rect, Viewports},
};
use rand::{seq::SliceRandom, Rng};
use std::f64::consts::{FRAC_PI_2, PI, TAU};
use tracing::trace;

/// Heading for travel to the right
pub const RIGHT: f64 = 0.0;
/// Heading for travel upwards
pub const UP: f64 = FRAC_PI_2;
/// Heading for travel to the left
pub const LEFT: f64 = PI;
/// Heading for travel downwards
pub const DOWN: f64 = 3.0 * FRAC_PI_2;

/// The headings tagged on each corner of `r` that are currently visible, in the order
/// [RIGHT], [UP], [LEFT], [DOWN].
pub fn on_screen_headings(r: &Rect, viewports: &Viewports) -> Vec<f64> {
    let (top_left, top_right, bottom_right, bottom_left) = r.corners();

    [
        (top_right, RIGHT),
        (top_left, UP),
        (bottom_left, LEFT),
        (bottom_right, DOWN),
    ]
    .into_iter()
    .filter(|&(p, _)| viewports.contains_point(p))
    .map(|(_, heading)| heading)
    .collect()
}

/// A random heading in the quarter turn anticlockwise from `base`, normalised to `[0, 2π)`.
pub fn perturb<R: Rng>(base: f64, rng: &mut R) -> f64 {
    (base + rng.gen_range(0.0..FRAC_PI_2)).rem_euclid(TAU)
}

/// The per frame change in position for a given heading and speed.
///
/// Screen y coordinates increase downwards so the vertical component is negated.
pub fn velocity(heading: f64, speed: f64) -> (i32, i32) {
    let dx = speed * heading.cos();
    let dy = -speed * heading.sin();

    (dx.round() as i32, dy.round() as i32)
}

/// Run a single frame of movement for a rat, returning its new geometry if it moved.
///
/// A rat that moves is always resized to `size`, regardless of the size of the underlying
/// window.
pub fn step<R: Rng>(
    rat: &mut TrackedWindow,
    viewports: &Viewports,
    speed: f64,
    size: (u32, u32),
    rng: &mut R,
) -> Option<Rect> {
    let headings = on_screen_headings(&rat.r, viewports);

    if headings.len() < 4 {
        match headings.choose(rng) {
            Some(&base) => {
                rat.heading = perturb(base, rng);
                rat.is_moving = true;
                trace!(id = %rat.id, heading = rat.heading, "partially off screen: turning");
            }
            None => {
                rat.is_moving = false;
                trace!(id = %rat.id, "off screen: stopping");
            }
        }
    } else {
        rat.is_moving = true;
    }

    if !rat.is_moving {
        return None;
    }

    let (dx, dy) = velocity(rat.heading, speed);
    rat.r.reposition(dx, dy);
    (rat.r.w, rat.r.h) = size;

    Some(rat.r)
}
