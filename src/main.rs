use anyhow::Result;
use log::{debug, info};
use winit::{
    event::{ElementState, Event, WindowEvent},
    event_loop::EventLoop,
    keyboard::{Key, NamedKey},
    window::WindowBuilder,
};

mod core;
mod engine;
mod game;

use engine::game_loop::{GameLoop, TICKS_PER_SECOND};
use engine::input::KeyboardState;
use game::characters::PlayerEvent;
use game::GameWorld;

fn main() -> Result<()> {
    // Initialize logger
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Info)
        .parse_default_env()
        .init();

    info!("Starting Knight Runner...");

    // Create event loop and window
    let event_loop = EventLoop::new()?;
    let window = WindowBuilder::new()
        .with_title("Knight Runner")
        .with_inner_size(winit::dpi::LogicalSize::new(1280, 720))
        .with_resizable(true)
        .build(&event_loop)?;

    let size = window.inner_size();
    let mut world = GameWorld::demo(size.width as f32, size.height as f32)
        .map_err(|e| anyhow::anyhow!("Failed to build the world: {}", e))?;
    let mut keyboard = KeyboardState::new();
    let mut game_loop = GameLoop::new();

    info!(
        "Window created, simulating at {} ticks per second",
        TICKS_PER_SECOND
    );
    info!("Controls: A/D move, Shift run, W jump, Space slide, P pause, R restart, Esc quit");

    // Main event loop
    event_loop
        .run(move |event, elwt| match event {
            Event::WindowEvent {
                event: WindowEvent::CloseRequested,
                ..
            } => {
                info!("Close requested, shutting down...");
                elwt.exit();
            }
            Event::WindowEvent {
                event: WindowEvent::Resized(physical_size),
                ..
            } => {
                info!("Window resized to {:?}", physical_size);
                world.resize(physical_size.width as f32, physical_size.height as f32);
            }
            Event::WindowEvent {
                event: WindowEvent::Focused(false),
                ..
            } => {
                // Key releases are lost while unfocused
                keyboard.clear();
            }
            Event::WindowEvent {
                event: WindowEvent::KeyboardInput { event, .. },
                ..
            } => {
                if event.state == ElementState::Pressed && !event.repeat {
                    match &event.logical_key {
                        Key::Named(NamedKey::Escape) => elwt.exit(),
                        Key::Character(c) if c.as_str().eq_ignore_ascii_case("p") => {
                            game_loop.toggle_pause();
                            window.set_title(if game_loop.is_paused() {
                                "Knight Runner (paused)"
                            } else {
                                "Knight Runner"
                            });
                        }
                        Key::Character(c) if c.as_str().eq_ignore_ascii_case("r") => {
                            world.restart();
                        }
                        _ => {}
                    }
                }
                keyboard.process_keyboard_event(&event);
            }
            Event::WindowEvent {
                event: WindowEvent::RedrawRequested,
                ..
            } => {
                let ticks = game_loop.begin_frame();
                for _ in 0..ticks {
                    let input = keyboard.snapshot();
                    for event in world.tick(&input) {
                        match event {
                            PlayerEvent::Jumped { velocity_y } => {
                                debug!("Jumped with vy={:.1}", velocity_y)
                            }
                            PlayerEvent::Landed { ground_y } => {
                                debug!("Landed on y={:.1}", ground_y)
                            }
                            PlayerEvent::SlideStarted {
                                distance,
                                total_frames,
                            } => debug!("Sliding {} px over {} frames", distance, total_frames),
                            PlayerEvent::SlideEnded => debug!("Slide finished"),
                            PlayerEvent::WallHit { x } => {
                                debug!("Bumped into a wall at x={:.1}", x)
                            }
                            PlayerEvent::AnimationChanged { from, to } => {
                                debug!("Animation {} -> {}", from, to)
                            }
                        }
                    }
                }

                if game_loop.frame_count() % 600 == 0 {
                    let player = world.player();
                    info!(
                        "FPS: {:.1}, tick {}, player at {:?} ({} frame {})",
                        game_loop.fps(),
                        game_loop.tick_count(),
                        player.position(),
                        player.current_animation(),
                        player.animation_frame()
                    );
                    debug!(
                        "Facing {}, camera offset {:?} over a {:?} view, active {:?}",
                        if player.transform().scale.x < 0.0 { "left" } else { "right" },
                        world.camera().offset(),
                        world.camera().viewport(),
                        world.input_handler().active_actions()
                    );
                }
            }
            Event::AboutToWait => {
                // Request redraw on next frame
                window.request_redraw();
            }
            _ => {}
        })
        .map_err(|e| anyhow::anyhow!("Event loop error: {}", e))?;

    Ok(())
}
