// Animation states the player switches between

use super::movement::MovementState;

/// Animations driven by movement
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum PlayerAnimation {
    /// Standing still on ground
    #[default]
    Idle,
    /// Moving horizontally on ground
    Run,
    /// In the air after a jump or a slide off a ledge
    Jump,
    /// Fixed-distance slide
    Slide,
}

impl PlayerAnimation {
    /// Sprite sheet animation name
    pub fn animation_name(&self) -> &'static str {
        match self {
            Self::Idle => "idle",
            Self::Run => "run",
            Self::Jump => "jump",
            Self::Slide => "slideAll",
        }
    }

    /// Whether the animation repeats
    pub fn loops(&self) -> bool {
        matches!(self, Self::Idle | Self::Run)
    }

    /// Ground animation for the current movement: run while moving, idle otherwise
    pub fn grounded(movement: &MovementState) -> Self {
        if movement.is_moving {
            Self::Run
        } else {
            Self::Idle
        }
    }

    /// Animation to fall back to after a one-shot animation ends
    pub fn settled(movement: &MovementState) -> Self {
        if movement.is_on_ground {
            Self::grounded(movement)
        } else {
            Self::Jump
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn movement(is_moving: bool, is_on_ground: bool) -> MovementState {
        MovementState {
            is_moving,
            is_on_ground,
            ..MovementState::default()
        }
    }

    #[test]
    fn test_animation_names() {
        assert_eq!(PlayerAnimation::Idle.animation_name(), "idle");
        assert_eq!(PlayerAnimation::Run.animation_name(), "run");
        assert_eq!(PlayerAnimation::Jump.animation_name(), "jump");
        assert_eq!(PlayerAnimation::Slide.animation_name(), "slideAll");
    }

    #[test]
    fn test_one_shots_do_not_loop() {
        assert!(PlayerAnimation::Idle.loops());
        assert!(PlayerAnimation::Run.loops());
        assert!(!PlayerAnimation::Jump.loops());
        assert!(!PlayerAnimation::Slide.loops());
    }

    #[test]
    fn test_settled_state() {
        assert_eq!(
            PlayerAnimation::settled(&movement(true, true)),
            PlayerAnimation::Run
        );
        assert_eq!(
            PlayerAnimation::settled(&movement(false, true)),
            PlayerAnimation::Idle
        );
        assert_eq!(
            PlayerAnimation::settled(&movement(true, false)),
            PlayerAnimation::Jump
        );
    }
}
