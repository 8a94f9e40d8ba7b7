// Player character - glues input-driven movement, level collision and animation

use glam::Vec2;

use super::animation::AnimationPlayer;
use super::movement::{MovementController, MovementState};
use super::state::PlayerAnimation;
use super::stats::{ConfigError, MovementConfig, PlayerConfig};
use crate::core::math::Transform;
use crate::game::level::Level;

/// Something that happened to the player during a tick
#[derive(Debug, Clone, PartialEq)]
pub enum PlayerEvent {
    Jumped { velocity_y: f32 },
    /// Touched ground after being airborne
    Landed { ground_y: f32 },
    SlideStarted { distance: f32, total_frames: u32 },
    SlideEnded,
    /// Horizontal movement was stopped by an obstacle at this x
    WallHit { x: f32 },
    AnimationChanged { from: String, to: String },
}

/// The controllable character
#[derive(Debug)]
pub struct Player {
    transform: Transform,
    config: PlayerConfig,
    movement: MovementController,
    animation: AnimationPlayer,
    /// Events recorded since the last drain
    events: Vec<PlayerEvent>,
}

impl Default for Player {
    fn default() -> Self {
        Self::build(PlayerConfig::default(), MovementConfig::default())
    }
}

impl Player {
    /// Create a player with validated tuning
    pub fn new(config: PlayerConfig, movement: MovementConfig) -> Result<Self, ConfigError> {
        Ok(Self::build(config.validated()?, movement.validated()?))
    }

    fn build(config: PlayerConfig, movement: MovementConfig) -> Self {
        Self {
            transform: Transform::new(Vec2::ZERO, Vec2::splat(config.scale)),
            animation: AnimationPlayer::with_knight_animations(config.ticks_per_frame),
            movement: MovementController::new(movement),
            config,
            events: Vec::new(),
        }
    }

    pub fn set_position(&mut self, x: f32, y: f32) {
        self.transform.position = Vec2::new(x, y);
    }

    pub fn position(&self) -> Vec2 {
        self.transform.position
    }

    pub fn transform(&self) -> &Transform {
        &self.transform
    }

    /// Visual width of the current frame
    pub fn width(&self) -> f32 {
        self.size().x
    }

    /// Visual height of the current frame
    pub fn height(&self) -> f32 {
        self.size().y
    }

    fn size(&self) -> Vec2 {
        self.transform
            .scaled_size(self.config.frame_width, self.config.frame_height)
    }

    /// Copy of the movement state
    pub fn movement(&self) -> MovementState {
        self.movement.snapshot()
    }

    pub fn current_animation(&self) -> &str {
        self.animation.current_animation()
    }

    pub fn animation_frame(&self) -> u32 {
        self.animation.current_frame()
    }

    /// Switch animation. Unknown names are logged and ignored.
    pub fn play_animation(&mut self, name: &str, looping: bool) {
        let from = self.animation.current_animation().to_string();
        match self.animation.play(name, looping) {
            Ok(()) => {
                self.events.push(PlayerEvent::AnimationChanged {
                    from,
                    to: name.to_string(),
                });
            }
            Err(err) => log::warn!("{}", err),
        }
    }

    fn play(&mut self, animation: PlayerAnimation) {
        self.play_animation(animation.animation_name(), animation.loops());
    }

    fn is_showing(&self, animation: PlayerAnimation) -> bool {
        self.current_animation() == animation.animation_name()
    }

    pub fn move_right(&mut self) {
        self.move_horizontally(true);
    }

    pub fn move_left(&mut self) {
        self.move_horizontally(false);
    }

    fn move_horizontally(&mut self, right: bool) {
        // A slide can be re-aimed visually but keeps its own displacement
        if self.movement.is_sliding() {
            self.movement.face(right);
            self.movement.update_facing(&mut self.transform);
            return;
        }

        if right {
            self.movement.move_right();
        } else {
            self.movement.move_left();
        }

        if !self.is_showing(PlayerAnimation::Run)
            && !self.is_showing(PlayerAnimation::Jump)
            && self.movement.is_on_ground()
        {
            self.play(PlayerAnimation::Run);
        }
        self.movement.update_facing(&mut self.transform);
    }

    pub fn stop_moving(&mut self) {
        if self.movement.is_sliding() {
            return;
        }

        self.movement.stop_moving();
        if self.is_showing(PlayerAnimation::Run) {
            self.play(PlayerAnimation::Idle);
        }
    }

    pub fn jump(&mut self) {
        if !self.movement.jump() {
            return;
        }

        self.events.push(PlayerEvent::Jumped {
            velocity_y: self.movement.snapshot().velocity_y,
        });
        if !self.is_showing(PlayerAnimation::Jump) {
            self.play(PlayerAnimation::Jump);
        }
    }

    /// Start a slide in the facing direction, lasting one pass of the slide animation
    pub fn slide(&mut self) {
        if self.movement.is_sliding() {
            return;
        }

        let name = PlayerAnimation::Slide.animation_name();
        let Some(total_frames) = self.animation.total_frames(name) else {
            log::warn!("Cannot slide without the '{}' animation", name);
            return;
        };

        let direction = if self.movement.snapshot().facing_right {
            1.0
        } else {
            -1.0
        };
        let distance = self.config.slide_distance() * direction;

        self.movement.start_slide(distance, total_frames);
        let slide = self.movement.slide_state();
        self.events.push(PlayerEvent::SlideStarted {
            distance: slide.slide_distance,
            total_frames: slide.total_frames,
        });
        self.play(PlayerAnimation::Slide);
        self.movement.update_facing(&mut self.transform);
    }

    /// Whether input may start new movement (false while sliding)
    pub fn can_move(&self) -> bool {
        !self.movement.is_sliding()
    }

    pub fn is_on_ground(&self) -> bool {
        self.movement.is_on_ground()
    }

    pub fn can_slide(&self) -> bool {
        self.movement.can_slide()
    }

    pub fn enable_speed_boost(&mut self) {
        self.movement.enable_speed_boost();
    }

    pub fn disable_speed_boost(&mut self) {
        self.movement.disable_speed_boost();
    }

    /// Advance physics, collision and animation by one tick
    pub fn update(&mut self, level: &Level) {
        if !self.movement.is_on_ground() {
            self.movement.apply_gravity();
        }

        let old_x = self.transform.position.x;

        if self.movement.is_sliding() {
            self.transform.position.x += self.movement.update_slide();
            self.transform.position.y += self.movement.snapshot().velocity_y;
        } else {
            self.movement.update_position(&mut self.transform);
        }

        let (width, height) = (self.width(), self.height());
        let Vec2 { x, y } = self.transform.position;

        let corrected_x = level.check_wall_collision(old_x, y, width, height, x);
        if corrected_x != x {
            self.transform.position.x = corrected_x;
            // Hitting a wall is a hard stop
            self.movement.stop_moving();
            self.events.push(PlayerEvent::WallHit { x: corrected_x });
        }

        let ground_y = level.effective_ground(self.transform.position.x, y, width, height);

        let was_on_ground = self.movement.is_on_ground();
        let landed = self
            .movement
            .handle_ground_collision(&mut self.transform, ground_y, height);
        if landed && !was_on_ground {
            self.events.push(PlayerEvent::Landed { ground_y });
        }

        if landed && self.is_showing(PlayerAnimation::Jump) && !self.movement.is_sliding() {
            self.play(PlayerAnimation::grounded(&self.movement.snapshot()));
        }

        if self.animation.tick() {
            self.on_animation_complete();
        }
    }

    fn on_animation_complete(&mut self) {
        if !self.is_showing(PlayerAnimation::Slide) {
            return;
        }

        self.movement.end_slide();
        self.movement.reset_running_frames();
        self.events.push(PlayerEvent::SlideEnded);
        self.play(PlayerAnimation::settled(&self.movement.snapshot()));
    }

    /// Take all events recorded since the last call
    pub fn drain_events(&mut self) -> Vec<PlayerEvent> {
        std::mem::take(&mut self.events)
    }

    /// Put the player back at a spawn point with no motion
    pub fn reset(&mut self, x: f32, y: f32) {
        self.set_position(x, y);
        self.movement.end_slide();
        self.movement.disable_speed_boost();
        self.movement.reset();
        self.movement.set_on_ground(false);
        self.play(PlayerAnimation::Idle);
        self.events.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::physics::Obstacle;
    use approx::assert_relative_eq;

    // Floor at y = 500
    fn level() -> Level {
        Level::with_width(600.0, 2400.0)
    }

    /// Player standing on the floor of `level()`
    fn grounded_player(level: &Level) -> Player {
        let mut player = Player::default();
        player.set_position(200.0, 420.0);
        player.update(level);
        player.drain_events();
        player
    }

    fn ready_to_slide(player: &mut Player) {
        for _ in 0..30 {
            player.enable_speed_boost();
        }
    }

    #[test]
    fn test_default_player() {
        let player = Player::default();
        assert_eq!(player.current_animation(), "idle");
        assert_eq!(player.width(), 240.0);
        assert_eq!(player.height(), 160.0);
        assert!(!player.is_on_ground());
        assert!(player.can_move());
    }

    #[test]
    fn test_rejects_invalid_config() {
        let config = PlayerConfig {
            scale: 0.0,
            ..PlayerConfig::default()
        };
        assert!(Player::new(config, MovementConfig::default()).is_err());
    }

    #[test]
    fn test_falls_and_lands_on_floor() {
        let level = level();
        let mut player = Player::default();
        player.set_position(200.0, 100.0);

        for _ in 0..120 {
            player.update(&level);
        }

        assert!(player.is_on_ground());
        assert_relative_eq!(player.position().y + player.height() / 2.0, 500.0);
        let landings = player
            .drain_events()
            .into_iter()
            .filter(|e| matches!(e, PlayerEvent::Landed { .. }))
            .count();
        assert_eq!(landings, 1);
    }

    #[test]
    fn test_jump_and_return_to_idle() {
        let level = level();
        let mut player = grounded_player(&level);

        player.jump();
        assert_eq!(player.current_animation(), "jump");
        assert!(!player.is_on_ground());
        assert_eq!(
            player.drain_events()[0],
            PlayerEvent::Jumped { velocity_y: -10.0 }
        );

        player.update(&level);
        assert!(player.position().y < 420.0);

        for _ in 0..60 {
            player.update(&level);
        }
        assert!(player.is_on_ground());
        assert_eq!(player.current_animation(), "idle");
    }

    #[test]
    fn test_landing_while_moving_runs() {
        let level = level();
        let mut player = grounded_player(&level);

        player.jump();
        player.move_right();
        // Still shows the jump while airborne
        assert_eq!(player.current_animation(), "jump");

        for _ in 0..60 {
            player.update(&level);
        }
        assert_eq!(player.current_animation(), "run");
    }

    #[test]
    fn test_airborne_jump_is_ignored() {
        let mut player = Player::default();
        player.jump();
        assert!(player.drain_events().is_empty());
        assert_eq!(player.current_animation(), "idle");
    }

    #[test]
    fn test_run_and_stop_animations() {
        let level = level();
        let mut player = grounded_player(&level);

        player.move_left();
        assert_eq!(player.current_animation(), "run");
        assert_eq!(player.transform().scale.x, -2.0);

        player.stop_moving();
        assert_eq!(player.current_animation(), "idle");
        assert_eq!(player.movement().velocity_x, 0.0);
    }

    #[test]
    fn test_velocity_moves_player() {
        let level = level();
        let mut player = grounded_player(&level);

        player.move_right();
        player.update(&level);
        assert_relative_eq!(player.position().x, 202.0);
    }

    #[test]
    fn test_slide_covers_animation_length() {
        let level = level();
        let mut player = grounded_player(&level);
        ready_to_slide(&mut player);

        player.slide();
        assert!(!player.can_move());
        assert_eq!(player.current_animation(), "slideAll");

        // slideAll: 4 frames x 5 ticks, 14px / 4 frames per tick
        for _ in 0..20 {
            player.update(&level);
        }

        assert!(player.can_move());
        assert!(!player.can_slide());
        assert_relative_eq!(player.position().x, 270.0, epsilon = 1e-3);
        assert_eq!(player.current_animation(), "idle");

        let events = player.drain_events();
        assert!(events.contains(&PlayerEvent::SlideStarted {
            distance: 14.0,
            total_frames: 4
        }));
        assert!(events.contains(&PlayerEvent::SlideEnded));
    }

    #[test]
    fn test_slide_left_when_facing_left() {
        let level = level();
        let mut player = grounded_player(&level);
        player.move_left();
        player.stop_moving();
        ready_to_slide(&mut player);

        player.slide();
        player.update(&level);

        assert_relative_eq!(player.position().x, 196.5);
    }

    #[test]
    fn test_direction_during_slide_only_turns() {
        let level = level();
        let mut player = grounded_player(&level);
        ready_to_slide(&mut player);
        player.slide();

        player.move_left();
        assert_eq!(player.movement().velocity_x, 0.0);
        assert!(!player.movement().facing_right);
        assert_eq!(player.transform().scale.x, -2.0);
        assert_eq!(player.current_animation(), "slideAll");

        // Displacement keeps its original direction
        player.update(&level);
        assert_relative_eq!(player.position().x, 203.5);
    }

    #[test]
    fn test_stop_during_slide_is_ignored() {
        let level = level();
        let mut player = grounded_player(&level);
        ready_to_slide(&mut player);
        player.slide();

        player.stop_moving();
        assert_eq!(player.current_animation(), "slideAll");
        assert!(!player.can_move());
    }

    #[test]
    fn test_slide_ending_in_air_shows_jump() {
        let level = level();
        let mut player = Player::default();
        player.set_position(200.0, 0.0);
        ready_to_slide(&mut player);

        player.slide();
        for _ in 0..20 {
            player.update(&level);
        }

        assert!(!player.is_on_ground());
        assert_eq!(player.current_animation(), "jump");
    }

    #[test]
    fn test_wall_stops_player() {
        // Hitbox is 48px wide, so the right edge is x + 24
        let level = level().with_obstacles([Obstacle::wall(230.0, 300.0, 40.0, 200.0)]);
        let mut player = grounded_player(&level);

        for _ in 0..10 {
            player.move_right();
            player.update(&level);
        }

        assert_relative_eq!(player.position().x, 206.0);
        assert_eq!(player.movement().velocity_x, 0.0);
        assert!(player
            .drain_events()
            .iter()
            .any(|e| matches!(e, PlayerEvent::WallHit { .. })));
    }

    #[test]
    fn test_lands_on_platform_top() {
        let level = level().with_obstacles([Obstacle::platform(0.0, 400.0, 300.0, 100.0)]);
        let mut player = Player::default();
        player.set_position(150.0, 200.0);

        for _ in 0..60 {
            player.update(&level);
        }

        assert!(player.is_on_ground());
        assert_relative_eq!(player.position().y + player.height() / 2.0, 400.0);
        assert!(player
            .drain_events()
            .contains(&PlayerEvent::Landed { ground_y: 400.0 }));
    }

    #[test]
    fn test_walks_off_platform_and_falls() {
        let level = level().with_obstacles([Obstacle::platform(0.0, 400.0, 300.0, 100.0)]);
        let mut player = Player::default();
        player.set_position(250.0, 320.0);
        player.update(&level);
        assert!(player.is_on_ground());

        for _ in 0..40 {
            player.move_right();
            player.update(&level);
        }
        for _ in 0..60 {
            player.update(&level);
        }

        assert_relative_eq!(player.position().y + player.height() / 2.0, 500.0);
    }

    #[test]
    fn test_unknown_animation_is_ignored() {
        let mut player = Player::default();
        player.play_animation("moonwalk", true);

        assert_eq!(player.current_animation(), "idle");
        assert!(player.drain_events().is_empty());
    }

    #[test]
    fn test_reset() {
        let level = level();
        let mut player = grounded_player(&level);
        ready_to_slide(&mut player);
        player.slide();

        player.reset(50.0, 60.0);

        assert_eq!(player.position(), Vec2::new(50.0, 60.0));
        assert!(player.can_move());
        assert!(!player.can_slide());
        assert_eq!(player.current_animation(), "idle");
        assert!(player.drain_events().is_empty());
    }
}
