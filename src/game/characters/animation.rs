// Character animation playback (frame bookkeeping only, drawing lives elsewhere)

use std::collections::HashMap;

/// Animation lookup/playback errors
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AnimationError {
    #[error("Animation not found: {0}")]
    Unknown(String),
}

/// A single animation clip
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnimationClip {
    /// Name of the animation (e.g., "idle", "run", "slideAll")
    pub name: String,
    /// Number of frames in the animation
    pub frame_count: u32,
}

impl AnimationClip {
    pub fn new(name: &str, frame_count: u32) -> Self {
        Self {
            name: name.to_string(),
            frame_count,
        }
    }
}

/// Knight sprite sheet animations and their frame counts
pub const KNIGHT_ANIMATIONS: &[(&str, u32)] = &[
    ("attack", 4),
    ("attack2", 4),
    ("attack2NoMovement", 4),
    ("attackCombo", 10),
    ("attackComboNoMovement", 10),
    ("attackNoMovement", 4),
    ("crouch", 1),
    ("crouchAll", 13),
    ("crouchAttack", 4),
    ("crouchTransition", 3),
    ("crouchWalk", 8),
    ("dash", 2),
    ("death", 10),
    ("deathNoMovement", 10),
    ("fall", 3),
    ("hit", 1),
    ("idle", 10),
    ("jump", 3),
    ("jumpFallInbetween", 2),
    ("roll", 12),
    ("run", 10),
    ("slide", 1),
    ("slideAll", 4),
    ("slideTransitionEnd", 3),
    ("slideTransitionStart", 2),
    ("turnAround", 3),
    ("wallClimb", 6),
    ("wallClimbNoMovement", 4),
    ("wallHang", 1),
    ("wallSlide", 3),
];

/// Plays one named clip at a time, advancing a fixed number of ticks per frame
#[derive(Debug)]
pub struct AnimationPlayer {
    /// All available animations
    animations: HashMap<String, AnimationClip>,
    /// Currently playing animation name
    current_animation: String,
    /// Whether the current animation loops
    looping: bool,
    /// Current frame index
    current_frame: u32,
    /// Ticks spent on the current frame
    frame_ticks: u32,
    /// Ticks each frame is shown
    ticks_per_frame: u32,
    /// Whether the animation is playing
    playing: bool,
}

impl AnimationPlayer {
    pub fn new(ticks_per_frame: u32) -> Self {
        Self {
            animations: HashMap::new(),
            current_animation: String::new(),
            looping: true,
            current_frame: 0,
            frame_ticks: 0,
            ticks_per_frame: ticks_per_frame.max(1),
            playing: false,
        }
    }

    /// Create an animation player with the knight's animations, starting on idle
    pub fn with_knight_animations(ticks_per_frame: u32) -> Self {
        let mut player = Self::new(ticks_per_frame);
        for (name, frames) in KNIGHT_ANIMATIONS {
            player.add_animation(AnimationClip::new(name, *frames));
        }
        player.current_animation = "idle".to_string();
        player.playing = true;
        player
    }

    pub fn add_animation(&mut self, clip: AnimationClip) {
        self.animations.insert(clip.name.clone(), clip);
    }

    /// Switch to an animation and play it from its first frame.
    ///
    /// On an unknown name the current animation keeps playing.
    pub fn play(&mut self, name: &str, looping: bool) -> Result<(), AnimationError> {
        if !self.animations.contains_key(name) {
            return Err(AnimationError::Unknown(name.to_string()));
        }

        self.current_animation = name.to_string();
        self.looping = looping;
        self.current_frame = 0;
        self.frame_ticks = 0;
        self.playing = true;
        Ok(())
    }

    /// Advance one tick.
    ///
    /// Returns true on the tick a non-looping animation finishes.
    pub fn tick(&mut self) -> bool {
        if !self.playing {
            return false;
        }

        let Some(clip) = self.animations.get(&self.current_animation) else {
            return false;
        };
        let frame_count = clip.frame_count;

        self.frame_ticks += 1;
        if self.frame_ticks < self.ticks_per_frame {
            return false;
        }
        self.frame_ticks = 0;
        self.current_frame += 1;

        if self.current_frame < frame_count {
            return false;
        }

        if self.looping {
            self.current_frame = 0;
            false
        } else {
            // Stay on last frame
            self.current_frame = frame_count.saturating_sub(1);
            self.playing = false;
            true
        }
    }

    /// Frame count of a named animation
    pub fn total_frames(&self, name: &str) -> Option<u32> {
        self.animations.get(name).map(|clip| clip.frame_count)
    }

    pub fn current_animation(&self) -> &str {
        &self.current_animation
    }

    pub fn current_frame(&self) -> u32 {
        self.current_frame
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_knight_animations_loaded() {
        let player = AnimationPlayer::with_knight_animations(5);
        assert_eq!(player.current_animation(), "idle");
        assert_eq!(player.total_frames("slideAll"), Some(4));
        assert_eq!(player.total_frames("run"), Some(10));
        assert_eq!(player.total_frames("missing"), None);
        for (name, frames) in KNIGHT_ANIMATIONS {
            assert_eq!(player.total_frames(name), Some(*frames));
        }
    }

    #[test]
    fn test_play_unknown_keeps_current() {
        let mut player = AnimationPlayer::with_knight_animations(5);
        player.play("run", true).unwrap();

        let err = player.play("moonwalk", true).unwrap_err();
        assert_eq!(err, AnimationError::Unknown("moonwalk".to_string()));
        assert_eq!(player.current_animation(), "run");
    }

    #[test]
    fn test_tick_advances_frames() {
        let mut player = AnimationPlayer::new(2);
        player.add_animation(AnimationClip::new("test", 4));
        player.play("test", true).unwrap();

        player.tick();
        assert_eq!(player.current_frame(), 0);
        player.tick();
        assert_eq!(player.current_frame(), 1);
    }

    #[test]
    fn test_looping_wraps() {
        let mut player = AnimationPlayer::new(1);
        player.add_animation(AnimationClip::new("test", 3));
        player.play("test", true).unwrap();

        for _ in 0..3 {
            assert!(!player.tick());
        }
        assert_eq!(player.current_frame(), 0);
        // Still running after the wrap
        player.tick();
        assert_eq!(player.current_frame(), 1);
    }

    #[test]
    fn test_one_shot_completes_once() {
        let mut player = AnimationPlayer::with_knight_animations(5);
        player.play("slideAll", false).unwrap();

        let completed_at: Vec<u32> = (1..=30).filter(|_| player.tick()).collect();

        assert_eq!(completed_at, vec![20]);
        assert_eq!(player.current_frame(), 3);
        // Held on the last frame
        assert!(!player.tick());
        assert_eq!(player.current_frame(), 3);
    }

    #[test]
    fn test_replay_restarts() {
        let mut player = AnimationPlayer::new(1);
        player.add_animation(AnimationClip::new("test", 4));
        player.play("test", false).unwrap();
        player.tick();
        player.tick();

        player.play("test", false).unwrap();
        assert_eq!(player.current_frame(), 0);
        let completed_at: Vec<u32> = (1..=6).filter(|_| player.tick()).collect();
        assert_eq!(completed_at, vec![4]);
    }
}
