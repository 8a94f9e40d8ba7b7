// Game world - owns the level, the player and everything that reacts to them

use crate::engine::camera::CameraController;
use crate::engine::input::{InputError, InputState};
use crate::engine::physics::{Obstacle, ObstacleKind};
use crate::game::characters::{ConfigError, MovementConfig, Player, PlayerConfig, PlayerEvent};
use crate::game::input_handler::PlayerInputHandler;
use crate::game::level::Level;

/// Spawn point relative to the screen size
const SPAWN_X_FRACTION: f32 = 0.25;
const SPAWN_Y_FRACTION: f32 = 0.5;

/// Errors building a world
#[derive(Debug, thiserror::Error)]
pub enum WorldError {
    #[error("input setup failed: {0}")]
    Input(#[from] InputError),

    #[error("invalid player tuning: {0}")]
    Config(#[from] ConfigError),
}

fn spawn_point(screen_width: f32, screen_height: f32) -> (f32, f32) {
    (
        screen_width * SPAWN_X_FRACTION,
        screen_height * SPAWN_Y_FRACTION,
    )
}

/// One playable scene
#[derive(Debug)]
pub struct GameWorld {
    level: Level,
    player: Player,
    input: PlayerInputHandler,
    camera: CameraController,
    spawn: (f32, f32),
}

impl GameWorld {
    /// Build a world around an existing level and player
    pub fn new(
        level: Level,
        mut player: Player,
        screen_width: f32,
        screen_height: f32,
    ) -> Result<Self, WorldError> {
        let spawn = spawn_point(screen_width, screen_height);
        player.reset(spawn.0, spawn.1);

        let mut camera = CameraController::new(screen_width, screen_height, level.level_width());
        camera.follow(spawn.0);

        Ok(Self {
            input: PlayerInputHandler::new()?,
            level,
            player,
            camera,
            spawn,
        })
    }

    /// Default level with a few walls and platforms to run across
    pub fn demo(screen_width: f32, screen_height: f32) -> Result<Self, WorldError> {
        let level = demo_level(screen_width, screen_height);
        let walls = level
            .obstacles()
            .iter()
            .filter(|obstacle| obstacle.kind == ObstacleKind::Wall)
            .count();
        log::info!(
            "Level: {}x{} with {} obstacles ({} walls), floor {} px thick",
            level.level_width(),
            level.level_height(),
            level.obstacles().len(),
            walls,
            level.floor_height()
        );
        let player = Player::new(PlayerConfig::default(), MovementConfig::default())?;
        Self::new(level, player, screen_width, screen_height)
    }

    /// Run one tick: input, then physics, then camera. Returns the player's events.
    pub fn tick(&mut self, input: &InputState) -> Vec<PlayerEvent> {
        self.input.handle_input(&mut self.player, input);
        self.player.update(&self.level);
        self.camera.follow(self.player.position().x);

        self.player.drain_events()
    }

    /// Put the player back at the spawn point
    pub fn restart(&mut self) {
        self.player.reset(self.spawn.0, self.spawn.1);
        self.input.reset();
        self.camera.follow(self.spawn.0);
        log::info!("World restarted");
    }

    /// Follow a new screen size. The floor and the spawn point move with it.
    pub fn resize(&mut self, screen_width: f32, screen_height: f32) {
        self.level.resize(screen_height);
        self.camera.resize(screen_width, screen_height);
        self.spawn = spawn_point(screen_width, screen_height);
        log::debug!(
            "Floor at y={}, spawn at {:?}",
            self.level.floor_y(),
            self.spawn
        );
    }

    pub fn player(&self) -> &Player {
        &self.player
    }

    pub fn camera(&self) -> &CameraController {
        &self.camera
    }

    pub fn input_handler(&self) -> &PlayerInputHandler {
        &self.input
    }
}

fn demo_level(screen_width: f32, screen_height: f32) -> Level {
    let base = Level::new(screen_width, screen_height);
    let floor_y = base.floor_y();

    base.with_obstacles([
        Obstacle::platform(screen_width * 0.6, floor_y - 80.0, 200.0, 20.0),
        Obstacle::wall(screen_width * 1.1, floor_y - 80.0, 60.0, 80.0),
        Obstacle::platform(screen_width * 1.5, floor_y - 90.0, 240.0, 20.0),
        // Too tall to jump
        Obstacle::wall(screen_width * 2.2, floor_y - 140.0, 80.0, 140.0),
    ])
}

#[cfg(test)]
mod tests {
    use super::*;

    fn world() -> GameWorld {
        GameWorld::new(Level::new(800.0, 600.0), Player::default(), 800.0, 600.0).unwrap()
    }

    fn keys(pressed: &[&str]) -> InputState {
        InputState::with_pressed(pressed.iter().copied())
    }

    #[test]
    fn test_spawns_in_air() {
        let world = world();
        assert_eq!(world.player().position().x, 200.0);
        assert_eq!(world.player().position().y, 300.0);
        assert!(!world.player().is_on_ground());
        assert_eq!(world.camera().position().x, 0.0);
    }

    #[test]
    fn test_player_falls_to_floor() {
        let mut world = world();
        let mut landed = false;
        for _ in 0..60 {
            landed |= world
                .tick(&InputState::default())
                .iter()
                .any(|e| matches!(e, PlayerEvent::Landed { ground_y } if *ground_y == 500.0));
        }
        assert!(landed);
        assert!(world.player().is_on_ground());
    }

    #[test]
    fn test_camera_follows_player() {
        let mut world = world();
        for _ in 0..400 {
            world.tick(&keys(&["d"]));
        }

        let player_x = world.player().position().x;
        assert!(player_x > 400.0);
        assert_eq!(world.camera().position().x, player_x - 400.0);
    }

    #[test]
    fn test_restart() {
        let mut world = world();
        for _ in 0..100 {
            world.tick(&keys(&["d"]));
        }

        world.restart();

        assert_eq!(world.player().position().x, 200.0);
        assert!(world.input_handler().active_actions().is_empty());
        assert_eq!(world.camera().position().x, 0.0);
    }

    #[test]
    fn test_resize_moves_spawn() {
        let mut world = world();
        world.resize(1000.0, 720.0);
        world.restart();

        assert_eq!(world.player().position().x, 250.0);
        assert_eq!(world.player().position().y, 360.0);
        assert_eq!(world.level.floor_y(), 620.0);
        assert_eq!(world.camera().viewport(), glam::Vec2::new(1000.0, 720.0));
    }

    #[test]
    fn test_config_error_converts() {
        let err: WorldError = ConfigError::ZeroTicksPerFrame.into();
        assert!(matches!(err, WorldError::Config(ConfigError::ZeroTicksPerFrame)));
    }

    #[test]
    fn test_demo_level_is_playable() {
        let mut world = GameWorld::demo(800.0, 600.0).unwrap();
        assert_eq!(world.level.obstacles().len(), 4);
        for _ in 0..600 {
            world.tick(&keys(&["d", "shift"]));
        }
        assert!(world.player().position().x > 200.0);
    }
}
