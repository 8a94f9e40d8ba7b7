// Level geometry: floor, bounds and static obstacles

use crate::engine::physics::{self, Obstacle};

/// Height of the floor strip at the bottom of the screen
pub const FLOOR_HEIGHT: f32 = 100.0;

/// Default level length in screens
pub const SCREENS_PER_LEVEL: f32 = 3.0;

/// Static level layout. Obstacles are fixed once the level is built.
#[derive(Debug, Clone)]
pub struct Level {
    level_width: f32,
    level_height: f32,
    floor_height: f32,
    obstacles: Vec<Obstacle>,
}

impl Level {
    /// Level three screens wide
    pub fn new(screen_width: f32, screen_height: f32) -> Self {
        Self::with_width(screen_height, screen_width * SCREENS_PER_LEVEL)
    }

    /// Level of an explicit width, as tall as the screen
    pub fn with_width(screen_height: f32, level_width: f32) -> Self {
        Self {
            level_width,
            level_height: screen_height,
            floor_height: FLOOR_HEIGHT,
            obstacles: Vec::new(),
        }
    }

    pub fn with_obstacles(mut self, obstacles: impl IntoIterator<Item = Obstacle>) -> Self {
        self.obstacles.extend(obstacles);
        self
    }

    /// Y of the floor's top surface
    pub fn floor_y(&self) -> f32 {
        self.level_height - self.floor_height
    }

    pub fn floor_height(&self) -> f32 {
        self.floor_height
    }

    pub fn level_width(&self) -> f32 {
        self.level_width
    }

    pub fn level_height(&self) -> f32 {
        self.level_height
    }

    pub fn obstacles(&self) -> &[Obstacle] {
        &self.obstacles
    }

    /// Follow a new screen height; the floor stays anchored to the bottom
    pub fn resize(&mut self, screen_height: f32) {
        self.level_height = screen_height;
    }

    /// Resolve a horizontal move against every obstacle
    pub fn check_wall_collision(
        &self,
        old_x: f32,
        y: f32,
        width: f32,
        height: f32,
        proposed_x: f32,
    ) -> f32 {
        physics::wall_collision(&self.obstacles, old_x, y, width, height, proposed_x)
    }

    /// Top of the obstacle the sprite can stand on, if any
    pub fn check_wall_top_collision(&self, x: f32, y: f32, width: f32, height: f32) -> Option<f32> {
        physics::wall_top_collision(&self.obstacles, x, y, width, height)
    }

    /// Ground under the sprite: an obstacle top when it is above the floor
    pub fn effective_ground(&self, x: f32, y: f32, width: f32, height: f32) -> f32 {
        let floor = self.floor_y();
        match self.check_wall_top_collision(x, y, width, height) {
            Some(top) if top < floor => top,
            _ => floor,
        }
    }
}
