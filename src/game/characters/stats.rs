// Movement and player tuning
//
// Values are in pixels and frames: the game advances in fixed ticks, so
// speeds are pixels per tick and gravity is pixels per tick squared.

/// Movement tuning, immutable once the controller is built
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MovementConfig {
    /// Horizontal speed without boost
    pub base_speed: f32,
    /// Upward velocity applied on jump
    pub jump_force: f32,
    /// Added to vertical velocity every airborne tick
    pub gravity: f32,
    /// Extra speed while the boost key is held
    pub speed_boost: f32,
    /// Consecutive boosted ticks needed before a slide is allowed
    pub slide_threshold: u32,
}

pub const BASE_MOVEMENT: MovementConfig = MovementConfig {
    base_speed: 2.0,
    jump_force: 10.0,
    gravity: 0.5,
    speed_boost: 1.0,
    slide_threshold: 30,
};

impl Default for MovementConfig {
    fn default() -> Self {
        BASE_MOVEMENT
    }
}

impl MovementConfig {
    /// Check every field, returning the config unchanged if it is usable
    pub fn validated(self) -> Result<Self, ConfigError> {
        positive("base_speed", self.base_speed)?;
        positive("jump_force", self.jump_force)?;
        non_negative("gravity", self.gravity)?;
        non_negative("speed_boost", self.speed_boost)?;
        if self.slide_threshold == 0 {
            return Err(ConfigError::ZeroSlideThreshold);
        }
        Ok(self)
    }
}

/// Player sprite and slide tuning
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlayerConfig {
    /// Uniform sprite scale
    pub scale: f32,
    /// Width of one sprite sheet frame before scaling
    pub frame_width: f32,
    /// Height of one sprite sheet frame before scaling
    pub frame_height: f32,
    /// Slide distance per unit of scale
    pub slide_distance_per_scale: f32,
    /// Ticks each sprite frame is shown
    pub ticks_per_frame: u32,
}

pub const BASE_PLAYER: PlayerConfig = PlayerConfig {
    scale: 2.0,
    frame_width: 120.0,
    frame_height: 80.0,
    slide_distance_per_scale: 7.0,
    ticks_per_frame: 5,
};

impl Default for PlayerConfig {
    fn default() -> Self {
        BASE_PLAYER
    }
}

impl PlayerConfig {
    /// Total horizontal distance of one slide (unsigned)
    pub fn slide_distance(&self) -> f32 {
        self.slide_distance_per_scale * self.scale
    }

    pub fn validated(self) -> Result<Self, ConfigError> {
        positive("scale", self.scale)?;
        positive("frame_width", self.frame_width)?;
        positive("frame_height", self.frame_height)?;
        non_negative("slide_distance_per_scale", self.slide_distance_per_scale)?;
        if self.ticks_per_frame == 0 {
            return Err(ConfigError::ZeroTicksPerFrame);
        }
        Ok(self)
    }
}

/// Tuning validation errors
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ConfigError {
    #[error("{field} must be a positive number, got {value}")]
    NotPositive { field: &'static str, value: f32 },

    #[error("{field} must not be negative, got {value}")]
    Negative { field: &'static str, value: f32 },

    #[error("slide threshold must be at least one frame")]
    ZeroSlideThreshold,

    #[error("ticks per frame must be at least one")]
    ZeroTicksPerFrame,
}

fn positive(field: &'static str, value: f32) -> Result<(), ConfigError> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(ConfigError::NotPositive { field, value })
    }
}

fn non_negative(field: &'static str, value: f32) -> Result<(), ConfigError> {
    if value.is_finite() && value >= 0.0 {
        Ok(())
    } else {
        Err(ConfigError::Negative { field, value })
    }
}
