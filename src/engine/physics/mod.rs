// Collision queries against static level geometry

mod collision;

pub use collision::{wall_collision, wall_top_collision, Obstacle, ObstacleKind};
