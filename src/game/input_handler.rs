// Player input bindings - maps keys to player actions by priority

use crate::engine::input::{ActionCondition, ActionSystem, InputError, InputState, PlayerAction};
use crate::game::characters::Player;

pub const JUMP_KEY: &str = "w";
pub const SLIDE_KEY: &str = " ";
pub const LEFT_KEY: &str = "a";
pub const RIGHT_KEY: &str = "d";
pub const BOOST_KEY: &str = "shift";

pub const JUMP_ACTION: &str = "jump";
pub const SLIDE_ACTION: &str = "slide";
pub const MOVEMENT_ACTION: &str = "movement";
pub const IDLE_ACTION: &str = "idle";

/// Horizontal direction requested by the movement keys
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Left,
    Right,
}

/// Resolve the held direction keys.
///
/// With both held, the most recently pressed one wins. If the press order
/// can't tell, the current facing is kept.
pub fn movement_direction(state: &InputState, facing_right: bool) -> Option<Direction> {
    match (state.is_pressed(LEFT_KEY), state.is_pressed(RIGHT_KEY)) {
        (false, false) => None,
        (true, false) => Some(Direction::Left),
        (false, true) => Some(Direction::Right),
        (true, true) => match state.last_pressed_among(&[RIGHT_KEY, LEFT_KEY]) {
            Some(key) if key == RIGHT_KEY => Some(Direction::Right),
            Some(_) => Some(Direction::Left),
            None if facing_right => Some(Direction::Right),
            None => Some(Direction::Left),
        },
    }
}

/// Turns keyboard snapshots into player commands
///
/// | Action   | Priority | Keys        | Blocks |
/// |----------|----------|-------------|--------|
/// | jump     | 100      | W           | no     |
/// | slide    | 90       | Space       | yes    |
/// | movement | 50       | A / D       | yes    |
/// | idle     | 0        | neither A/D | no     |
///
/// Idle also drops the speed boost, so a slide needs a fresh run-up.
pub struct PlayerInputHandler {
    actions: ActionSystem<Player>,
}

impl PlayerInputHandler {
    pub fn new() -> Result<Self, InputError> {
        let mut actions = ActionSystem::new();

        actions.register_action(
            PlayerAction::new(
                JUMP_ACTION,
                100,
                ActionCondition::keys([JUMP_KEY])
                    .with_check(|_, player: &Player| player.can_move() && player.is_on_ground()),
            )
            .on_press(|player: &mut Player, _| player.jump())
            .non_blocking(),
        )?;

        actions.register_action(
            PlayerAction::new(
                SLIDE_ACTION,
                90,
                ActionCondition::keys([SLIDE_KEY])
                    .with_check(|_, player: &Player| player.can_move() && player.can_slide()),
            )
            .on_press(|player: &mut Player, _| player.slide()),
        )?;

        actions.register_action(
            PlayerAction::new(
                MOVEMENT_ACTION,
                50,
                ActionCondition::keys([LEFT_KEY, RIGHT_KEY]).any(),
            )
            .on_hold(|player: &mut Player, state| {
                if state.is_pressed(BOOST_KEY) {
                    player.enable_speed_boost();
                } else {
                    player.disable_speed_boost();
                }

                match movement_direction(state, player.movement().facing_right) {
                    Some(Direction::Right) => player.move_right(),
                    Some(Direction::Left) => player.move_left(),
                    None => {}
                }
            }),
        )?;

        actions.register_action(
            PlayerAction::new(
                IDLE_ACTION,
                0,
                ActionCondition::always().excluding([LEFT_KEY, RIGHT_KEY]),
            )
            .on_hold(|player: &mut Player, _| {
                player.stop_moving();
                player.disable_speed_boost();
            })
            .non_blocking(),
        )?;

        log::debug!("Input actions by priority: {:?}", actions.action_names());
        Ok(Self { actions })
    }

    /// Run one frame of input against the player
    pub fn handle_input(&mut self, player: &mut Player, state: &InputState) {
        self.actions.process_input(state, player);
    }

    /// Forget held actions, e.g. after a restart or focus loss
    pub fn reset(&mut self) {
        self.actions.reset();
    }

    pub fn active_actions(&self) -> Vec<String> {
        self.actions.active_actions()
    }
}

impl std::fmt::Debug for PlayerInputHandler {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PlayerInputHandler")
            .field("actions", &self.actions)
            .finish()
    }
}
