//! Wire a scripted actor and mount through the bearing helpers.
//!
//! Usage:
//!   cargo run -p trig2d --example ahead
//!
//! Prints the point a few radii in front of the same actor on foot and
//! mounted, showing the mount's z-rotation taking over the heading.

use nalgebra::Vector3;
use trig2d::actor::{Actor, Mount};
use trig2d::bearing::point_in_front_of_actor;

struct Rider {
    position: Vector3<f64>,
    facing: f64,
    mount: Option<Saddle>,
}

struct Saddle {
    rotation_z: f64,
}

impl Mount for Saddle {
    fn rotation_z_deg(&self) -> f64 {
        self.rotation_z
    }
}

impl Actor for Rider {
    fn position(&self) -> Vector3<f64> {
        self.position
    }
    fn facing_deg(&self) -> f64 {
        self.facing
    }
    fn mount(&self) -> Option<&dyn Mount> {
        self.mount.as_ref().map(|m| m as &dyn Mount)
    }
}

fn main() {
    let mut rider = Rider {
        position: Vector3::new(1500.0, -320.0, 12.5),
        facing: 45.0,
        mount: None,
    };

    for radius in [2.0, 5.0, 10.0] {
        let (angle, p) = point_in_front_of_actor(&rider, radius);
        println!("on foot  r={radius:>4}  heading={angle:>5.1}  point=({:.2}, {:.2})", p.x, p.y);
    }

    rider.mount = Some(Saddle { rotation_z: 270.0 });
    for radius in [2.0, 5.0, 10.0] {
        let (angle, p) = point_in_front_of_actor(&rider, radius);
        println!("mounted  r={radius:>4}  heading={angle:>5.1}  point=({:.2}, {:.2})", p.x, p.y);
    }
}
