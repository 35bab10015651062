//! Read-only actor and mount views consumed by the bearing helpers.
//!
//! Purpose
//! - Decouple the geometry kernels from any particular entity store: the
//!   simulation hands us a view, we read position and orientation once per
//!   call and never write back.
//! - Resolve the effective heading: a mounted actor steers by its mount, so
//!   the mount's z-rotation overrides the actor's own facing angle.

use nalgebra::Vector3;

/// Read-only view of a simulated actor.
///
/// Angles are degrees at this boundary; radian conversion happens inside the
/// trigonometric kernels only.
pub trait Actor {
    /// World position. Only x and y feed the 2D helpers; z rides along for
    /// callers that need the full snapshot.
    fn position(&self) -> Vector3<f64>;

    /// Facing angle in degrees (heading convention, see `bearing`).
    fn facing_deg(&self) -> f64;

    /// Mount the actor is attached to, if any. `None` is the normal
    /// unmounted case, not a failure.
    fn mount(&self) -> Option<&dyn Mount>;
}

/// Read-only view of a vehicle-like mount.
pub trait Mount {
    /// Z-axis rotation in degrees.
    fn rotation_z_deg(&self) -> f64;
}

/// Effective heading in degrees: the mount's z-rotation when mounted, the
/// actor's own facing angle otherwise.
#[inline]
pub fn heading_deg<A: Actor + ?Sized>(actor: &A) -> f64 {
    match actor.mount() {
        Some(mount) => mount.rotation_z_deg(),
        None => actor.facing_deg(),
    }
}
