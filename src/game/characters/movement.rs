// Player movement controller - velocity, facing, ground and slide state

use super::stats::MovementConfig;
use crate::core::math::Transform;

/// Movement state. Handed out as a copy so callers can't mutate it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MovementState {
    pub velocity_x: f32,
    pub velocity_y: f32,
    pub is_moving: bool,
    pub facing_right: bool,
    pub is_on_ground: bool,
}

impl Default for MovementState {
    fn default() -> Self {
        Self {
            velocity_x: 0.0,
            velocity_y: 0.0,
            is_moving: false,
            facing_right: true,
            is_on_ground: false,
        }
    }
}

/// In-progress slide. All fields are zero when no slide is running.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct SlideState {
    /// Single source of truth for "slide drives horizontal displacement"
    pub is_sliding: bool,
    /// Signed total displacement
    pub slide_distance: f32,
    pub total_frames: u32,
    pub current_frame: u32,
    /// `slide_distance / total_frames`, fixed when the slide starts
    pub per_frame_delta: f32,
}

/// Owns velocity, facing, ground contact, speed boost and slide state
#[derive(Debug)]
pub struct MovementController {
    state: MovementState,
    config: MovementConfig,
    current_speed: f32,
    /// Consecutive ticks the speed boost has been held
    running_frames: u32,
    slide: SlideState,
}

impl Default for MovementController {
    fn default() -> Self {
        Self::new(MovementConfig::default())
    }
}

impl MovementController {
    pub fn new(config: MovementConfig) -> Self {
        Self {
            state: MovementState::default(),
            current_speed: config.base_speed,
            config,
            running_frames: 0,
            slide: SlideState::default(),
        }
    }

    /// Copy of the current movement state
    pub fn snapshot(&self) -> MovementState {
        self.state
    }

    pub fn move_right(&mut self) {
        self.state.velocity_x = self.current_speed;
        self.state.is_moving = true;
        self.state.facing_right = true;
    }

    pub fn move_left(&mut self) {
        self.state.velocity_x = -self.current_speed;
        self.state.is_moving = true;
        self.state.facing_right = false;
    }

    /// Change facing without touching velocity
    pub fn face(&mut self, right: bool) {
        self.state.facing_right = right;
    }

    pub fn stop_moving(&mut self) {
        self.state.velocity_x = 0.0;
        self.state.is_moving = false;
    }

    /// Jump if grounded. Returns whether the jump happened.
    pub fn jump(&mut self) -> bool {
        if !self.state.is_on_ground {
            return false;
        }
        self.state.velocity_y = -self.config.jump_force;
        self.state.is_on_ground = false;
        true
    }

    pub fn apply_gravity(&mut self) {
        self.state.velocity_y += self.config.gravity;
    }

    /// Integrate velocity into the target's position (not used while sliding)
    pub fn update_position(&self, target: &mut Transform) {
        target.position.x += self.state.velocity_x;
        target.position.y += self.state.velocity_y;
    }

    /// Mirror the target to match facing, keeping its scale magnitude
    pub fn update_facing(&self, target: &mut Transform) {
        let magnitude = target.scale.x.abs();
        target.scale.x = if self.state.facing_right {
            magnitude
        } else {
            -magnitude
        };
    }

    /// Zero velocities and stop moving
    pub fn reset(&mut self) {
        self.state.velocity_x = 0.0;
        self.state.velocity_y = 0.0;
        self.state.is_moving = false;
    }

    /// Set ground contact. Landing zeroes vertical velocity.
    pub fn set_on_ground(&mut self, on_ground: bool) {
        self.state.is_on_ground = on_ground;
        if on_ground {
            self.state.velocity_y = 0.0;
        }
    }

    pub fn is_on_ground(&self) -> bool {
        self.state.is_on_ground
    }

    /// Use boosted speed; counts one running frame per call
    pub fn enable_speed_boost(&mut self) {
        self.current_speed = self.config.base_speed + self.config.speed_boost;
        self.running_frames = self.running_frames.saturating_add(1);
    }

    pub fn disable_speed_boost(&mut self) {
        self.current_speed = self.config.base_speed;
        self.running_frames = 0;
    }

    pub fn reset_running_frames(&mut self) {
        self.running_frames = 0;
    }

    /// True once the boost has been held long enough to slide
    pub fn can_slide(&self) -> bool {
        self.running_frames >= self.config.slide_threshold
    }

    /// Begin a slide covering `distance` over `total_frames` ticks.
    /// Ignored while a slide is already running.
    pub fn start_slide(&mut self, distance: f32, total_frames: u32) {
        if self.slide.is_sliding {
            return;
        }

        let per_frame_delta = if total_frames == 0 {
            0.0
        } else {
            distance / total_frames as f32
        };
        self.slide = SlideState {
            is_sliding: true,
            slide_distance: distance,
            total_frames,
            current_frame: 0,
            per_frame_delta,
        };
        self.stop_moving();
    }

    /// Advance the slide one tick and return the horizontal displacement to apply.
    ///
    /// Keeps returning the same delta until `end_slide`; ending the slide is
    /// the animation's job.
    pub fn update_slide(&mut self) -> f32 {
        if !self.slide.is_sliding {
            return 0.0;
        }
        self.slide.current_frame += 1;
        self.slide.per_frame_delta
    }

    /// Clear the slide and the running frames, so the next slide needs a full run-up
    pub fn end_slide(&mut self) {
        if self.slide.is_sliding {
            log::debug!("Slide ended after {} frames", self.slide.current_frame);
        }
        self.slide = SlideState::default();
        self.running_frames = 0;
    }

    pub fn is_sliding(&self) -> bool {
        self.slide.is_sliding
    }

    pub fn slide_state(&self) -> SlideState {
        self.slide
    }

    /// Snap the target onto `ground_y` if its bottom edge reached it.
    ///
    /// Returns true when the target is resting on the ground this tick.
    pub fn handle_ground_collision(
        &mut self,
        target: &mut Transform,
        ground_y: f32,
        target_height: f32,
    ) -> bool {
        let half_height = target_height / 2.0;
        let bottom = target.position.y + half_height;

        if bottom >= ground_y {
            target.position.y = ground_y - half_height;
            self.set_on_ground(true);
            true
        } else {
            self.state.is_on_ground = false;
            false
        }
    }
}
