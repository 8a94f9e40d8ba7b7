// Game layer: the player, the level and how input drives them

pub mod characters;
pub mod input_handler;
pub mod level;
pub mod world;

pub use world::GameWorld;
