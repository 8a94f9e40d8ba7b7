// Side-scrolling camera that follows a target inside level bounds

use glam::Vec2;

/// Horizontal follow camera.
///
/// `position` is the left edge of the view in level space. The camera keeps
/// its target centered until it reaches either end of the level.
#[derive(Debug, Clone)]
pub struct CameraController {
    position: Vec2,
    viewport_width: f32,
    viewport_height: f32,
    level_width: f32,
}

impl CameraController {
    pub fn new(viewport_width: f32, viewport_height: f32, level_width: f32) -> Self {
        Self {
            position: Vec2::ZERO,
            viewport_width,
            viewport_height,
            level_width,
        }
    }

    /// Center on `target_x`, clamped to [0, level_width - viewport_width]
    pub fn follow(&mut self, target_x: f32) {
        let max_x = self.max_x();
        self.position.x = (target_x - self.viewport_width / 2.0).clamp(0.0, max_x);
    }

    fn max_x(&self) -> f32 {
        (self.level_width - self.viewport_width).max(0.0)
    }

    pub fn position(&self) -> Vec2 {
        self.position
    }

    /// Translation to apply to level-space drawing
    pub fn offset(&self) -> Vec2 {
        -self.position
    }

    pub fn viewport(&self) -> Vec2 {
        Vec2::new(self.viewport_width, self.viewport_height)
    }

    /// Resize the viewport, keeping the current view inside the level
    pub fn resize(&mut self, width: f32, height: f32) {
        self.viewport_width = width;
        self.viewport_height = height;
        self.position.x = self.position.x.clamp(0.0, self.max_x());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn camera() -> CameraController {
        CameraController::new(800.0, 600.0, 2400.0)
    }

    #[test]
    fn test_follow_centers_target() {
        let mut camera = camera();
        camera.follow(1000.0);
        assert_eq!(camera.position().x, 600.0);
        assert_eq!(camera.offset(), Vec2::new(-600.0, 0.0));
    }

    #[test]
    fn test_follow_clamps_to_level() {
        let mut camera = camera();
        camera.follow(100.0);
        assert_eq!(camera.position().x, 0.0);

        camera.follow(2350.0);
        assert_eq!(camera.position().x, 1600.0);
        assert_eq!(camera.offset(), Vec2::new(-1600.0, 0.0));
    }

    #[test]
    fn test_level_narrower_than_view() {
        let mut camera = CameraController::new(800.0, 600.0, 500.0);
        camera.follow(400.0);
        assert_eq!(camera.position().x, 0.0);
        camera.follow(2000.0);
        assert_eq!(camera.position().x, 0.0);
    }

    #[test]
    fn test_resize_reclamps() {
        let mut camera = camera();
        camera.follow(2400.0);
        camera.resize(1200.0, 600.0);
        assert_eq!(camera.position().x, 1200.0);
        assert_eq!(camera.viewport(), Vec2::new(1200.0, 600.0));
    }
}
