//! Bearing offsets: the point `radius` ahead of a position or actor.
//!
//! Model
//! - Headings are compass-like: 0° points along +y and grows clockwise.
//!   Under that convention the offset is `(−r·sin θ, +r·cos θ)`; scripts
//!   encode their headings against this axis, so the sign pattern must not
//!   be swapped for the textbook `(+r·cos θ, +r·sin θ)` form.
//! - The offset is linear in `radius`: zero returns the input position
//!   unchanged, a negative radius lands on the mirrored point behind.
//!
//! Code cross-refs: `actor::{Actor, Mount, heading_deg}`

use nalgebra::Vector2;

use crate::actor::{heading_deg, Actor};

/// The point `radius` ahead of `position` along the heading `angle_deg`.
///
/// Total over floating-point inputs; NaN/infinity propagate untouched.
#[inline]
pub fn point_in_front(position: Vector2<f64>, angle_deg: f64, radius: f64) -> Vector2<f64> {
    let rad = angle_deg * std::f64::consts::PI / 180.0;
    Vector2::new(
        position.x - radius * rad.sin(),
        position.y + radius * rad.cos(),
    )
}

/// The point `radius` ahead of `actor`, plus the heading used to compute it.
///
/// The heading comes from the mount's z-rotation when the actor is mounted
/// and from the actor's own facing angle otherwise. It is returned in
/// degrees so callers can log or reuse it without re-resolving the mount.
pub fn point_in_front_of_actor<A: Actor + ?Sized>(
    actor: &A,
    radius: f64,
) -> (f64, Vector2<f64>) {
    let pos = actor.position();
    let angle = heading_deg(actor);
    let point = point_in_front(Vector2::new(pos.x, pos.y), angle, radius);
    (angle, point)
}
