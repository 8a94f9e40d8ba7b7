// Character system
//
// Everything the controllable player is made of: tuning, movement,
// animation playback and the orchestrating `Player`.

pub mod animation;
pub mod movement;
pub mod player;
pub mod state;
pub mod stats;

// Re-export commonly used types
pub use player::{Player, PlayerEvent};
pub use stats::{ConfigError, MovementConfig, PlayerConfig};
