//! 2D bearing and disc-sampling helpers for game-server scripts.
//!
//! Purpose
//! - Provide the small geometry kernel script-side game logic keeps reaching
//!   for: the point some distance in front of an actor, bearing offsets from
//!   a raw position, and random points inside a disc.
//! - Stay stateless. Callers own every entity; this crate reads a
//!   position/orientation snapshot per call and returns computed coordinates.
//!
//! Conventions
//! - Angles cross the API boundary in degrees and become radians only inside
//!   the trigonometric kernels.
//! - Heading 0° points along +y and grows clockwise; see `bearing`.

pub mod actor;
pub mod bearing;
pub mod disc;

/// Library version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

// Convenience re-exports so script code pulls everything from one path.
pub use actor::{heading_deg, Actor, Mount};
pub use bearing::{point_in_front, point_in_front_of_actor};
pub use disc::{point_in_disc, point_in_disc_xy};
pub use nalgebra::{Vector2 as Vec2, Vector3 as Vec3};

/// Common exports for quick imports in callers.
pub mod prelude {
    pub use crate::actor::{heading_deg, Actor, Mount};
    pub use crate::bearing::{point_in_front, point_in_front_of_actor};
    pub use crate::disc::{
        point_in_disc, point_in_disc_replayed, point_in_disc_with, point_in_disc_xy, swap_f64,
        DiscCfg, ReplayToken, StepSource,
    };
    pub use nalgebra::{Vector2 as Vec2, Vector3 as Vec3};
}
