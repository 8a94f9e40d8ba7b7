// AABB collision against static obstacles

use crate::core::math::Rect;
use glam::Vec2;

/// Fraction of the sprite width used for collision
pub const HITBOX_WIDTH_FACTOR: f32 = 0.2;

/// Fraction of the sprite height used for collision
pub const HITBOX_HEIGHT_FACTOR: f32 = 0.8;

/// How far above an obstacle top the hitbox bottom may be and still land on it
pub const TOP_APPROACH_TOLERANCE: f32 = 20.0;

/// How far the hitbox bottom may sink below an obstacle top and still rest on it
pub const TOP_REST_TOLERANCE: f32 = 2.0;

/// Cosmetic obstacle category. Both kinds collide the same way.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ObstacleKind {
    Wall,
    Platform,
}

/// Static axis-aligned obstacle in level space
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Obstacle {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
    pub kind: ObstacleKind,
}

impl Obstacle {
    pub fn new(x: f32, y: f32, width: f32, height: f32, kind: ObstacleKind) -> Self {
        Self {
            x,
            y,
            width,
            height,
            kind,
        }
    }

    pub fn wall(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self::new(x, y, width, height, ObstacleKind::Wall)
    }

    pub fn platform(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self::new(x, y, width, height, ObstacleKind::Platform)
    }

    pub fn bounds(&self) -> Rect {
        Rect::new(self.x, self.y, self.width, self.height)
    }
}

/// Collision box for a sprite of the given visual size anchored at its center.
///
/// Sprites carry a lot of transparent padding, so only the middle
/// 20% x 80% of the frame collides.
pub fn hitbox(center: Vec2, width: f32, height: f32) -> Rect {
    Rect::centered(center, width, height).narrowed(HITBOX_WIDTH_FACTOR, HITBOX_HEIGHT_FACTOR)
}

/// Resolve horizontal movement from `old_x` to `proposed_x` against the obstacles.
///
/// Returns `proposed_x` unchanged when nothing is crossed. When several
/// obstacles would be crossed, the first one in the direction of travel wins.
pub fn wall_collision(
    obstacles: &[Obstacle],
    old_x: f32,
    y: f32,
    width: f32,
    height: f32,
    proposed_x: f32,
) -> f32 {
    let before = hitbox(Vec2::new(old_x, y), width, height);
    let after = hitbox(Vec2::new(proposed_x, y), width, height);
    let half_width = before.width / 2.0;

    let mut corrected = proposed_x;

    for obstacle in obstacles {
        let bounds = obstacle.bounds();
        if !after.overlaps_vertically(&bounds) {
            continue;
        }

        if proposed_x > old_x {
            // Moving right into the obstacle's left face
            if before.right() <= bounds.left() && after.right() > bounds.left() {
                corrected = corrected.min(bounds.left() - half_width);
            }
        } else if proposed_x < old_x {
            // Moving left into the obstacle's right face
            if before.left() >= bounds.right() && after.left() < bounds.right() {
                corrected = corrected.max(bounds.right() + half_width);
            }
        }
    }

    corrected
}

/// Find the highest obstacle top the sprite at (`x`, `y`) can stand on.
///
/// An obstacle qualifies when it overlaps the hitbox horizontally, the hitbox
/// bottom is between `TOP_APPROACH_TOLERANCE` above and `TOP_REST_TOLERANCE`
/// below its top, and the hitbox top is still above it.
pub fn wall_top_collision(
    obstacles: &[Obstacle],
    x: f32,
    y: f32,
    width: f32,
    height: f32,
) -> Option<f32> {
    let body = hitbox(Vec2::new(x, y), width, height);

    obstacles
        .iter()
        .map(Obstacle::bounds)
        .filter(|bounds| body.overlaps_horizontally(bounds))
        .filter(|bounds| {
            body.bottom() >= bounds.top() - TOP_APPROACH_TOLERANCE
                && body.bottom() <= bounds.top() + TOP_REST_TOLERANCE
                && body.top() < bounds.top()
        })
        .map(|bounds| bounds.top())
        .reduce(f32::min)
}
