// Input handling system
//
// Turns raw keyboard state into per-frame behavior through a table of
// prioritized actions.
//
// ## Architecture
//
// - `keyboard`: Tracks held keys and press order from window events
// - `state`: Per-frame `InputState` snapshot handed to the action system
// - `action`: Priority-ordered action rules with press/hold/release edges
//
// ## Usage Example
//
// ```rust
// use engine::input::{ActionCondition, ActionSystem, KeyboardState, PlayerAction};
//
// let mut actions: ActionSystem<Player> = ActionSystem::new();
// actions.register_action(
//     PlayerAction::new("jump", 100, ActionCondition::keys(["w"]))
//         .on_press(|player, _| player.jump())
//         .non_blocking(),
// )?;
//
// // Once per frame
// let state = keyboard.snapshot();
// actions.process_input(&state, &mut player);
// ```

pub mod action;
pub mod keyboard;
pub mod state;

pub use action::{ActionCondition, ActionSystem, PlayerAction};
pub use keyboard::KeyboardState;
pub use state::InputState;

/// Input configuration errors
#[derive(Debug, thiserror::Error)]
pub enum InputError {
    #[error("Action already registered: {0}")]
    DuplicateAction(String),
}
