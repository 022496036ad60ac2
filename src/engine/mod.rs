mod engine;
mod raycast;

pub use engine::{Engine, TickOutcome};
pub use raycast::{Heading, RayHit, RayStep, RayWalk, Side, cast_ray, column_angle};
