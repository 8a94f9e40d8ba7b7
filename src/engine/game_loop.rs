/// Tick scheduler
///
/// Game logic advances in whole ticks at a fixed rate no matter how fast
/// frames arrive. Movement values are tuned per tick, so running more or
/// fewer ticks per frame is how the simulation keeps real-time speed.
use std::time::{Duration, Instant};

/// Target tick rate
pub const TICKS_PER_SECOND: u32 = 60;
const TICK_DURATION: Duration = Duration::from_micros(16_667); // ~1/60 second

/// Maximum ticks per frame to prevent spiral of death
const MAX_TICKS_PER_FRAME: u32 = 5;

/// FPS tracking window (average over last N frames)
const FPS_WINDOW_SIZE: usize = 60;

/// Frame timing and pause state
#[derive(Debug)]
pub struct GameLoop {
    /// Time not yet consumed by ticks
    accumulator: Duration,

    last_frame_time: Instant,

    paused: bool,

    /// Recent frame durations for FPS calculation
    frame_times: Vec<Duration>,

    frame_count: u64,

    tick_count: u64,

    current_fps: f32,
}

impl GameLoop {
    pub fn new() -> Self {
        Self {
            accumulator: Duration::ZERO,
            last_frame_time: Instant::now(),
            paused: false,
            frame_times: Vec::with_capacity(FPS_WINDOW_SIZE),
            frame_count: 0,
            tick_count: 0,
            current_fps: 0.0,
        }
    }

    /// Begin a new frame, returns the number of ticks to run
    pub fn begin_frame(&mut self) -> u32 {
        let now = Instant::now();
        let frame_time = now.duration_since(self.last_frame_time);
        self.last_frame_time = now;
        self.advance(frame_time)
    }

    /// Account for `frame_time` of wall clock and return the ticks it buys
    pub fn advance(&mut self, frame_time: Duration) -> u32 {
        self.frame_count += 1;

        self.frame_times.push(frame_time);
        if self.frame_times.len() > FPS_WINDOW_SIZE {
            self.frame_times.remove(0);
        }

        // Update FPS counter every 10 frames
        if self.frame_count % 10 == 0 {
            self.update_fps();
        }

        if self.paused {
            return 0;
        }

        self.accumulator += frame_time;

        let mut ticks = 0;
        while self.accumulator >= TICK_DURATION && ticks < MAX_TICKS_PER_FRAME {
            self.accumulator -= TICK_DURATION;
            ticks += 1;
        }

        // Drop the backlog after a stall instead of replaying it later
        if ticks == MAX_TICKS_PER_FRAME && self.accumulator >= TICK_DURATION {
            log::debug!("Dropping {:?} of tick backlog", self.accumulator);
            self.accumulator = Duration::ZERO;
        }

        self.tick_count += u64::from(ticks);
        ticks
    }

    pub fn fps(&self) -> f32 {
        self.current_fps
    }

    pub fn frame_count(&self) -> u64 {
        self.frame_count
    }

    /// Total ticks handed out since start
    pub fn tick_count(&self) -> u64 {
        self.tick_count
    }

    pub fn is_paused(&self) -> bool {
        self.paused
    }

    pub fn pause(&mut self) {
        if !self.paused {
            self.paused = true;
            log::info!("Game paused");
        }
    }

    pub fn resume(&mut self) {
        if self.paused {
            self.paused = false;
            // Reset accumulator to prevent a tick burst
            self.accumulator = Duration::ZERO;
            self.last_frame_time = Instant::now();
            log::info!("Game resumed");
        }
    }

    pub fn toggle_pause(&mut self) {
        if self.paused {
            self.resume();
        } else {
            self.pause();
        }
    }

    fn update_fps(&mut self) {
        if self.frame_times.is_empty() {
            self.current_fps = 0.0;
            return;
        }

        let total: Duration = self.frame_times.iter().sum();
        let avg_frame_time = total / self.frame_times.len() as u32;

        self.current_fps = if avg_frame_time.as_secs_f32() > 0.0 {
            1.0 / avg_frame_time.as_secs_f32()
        } else {
            0.0
        };
    }
}

impl Default for GameLoop {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_game_loop_creation() {
        let game_loop = GameLoop::new();
        assert_eq!(game_loop.frame_count(), 0);
        assert_eq!(game_loop.tick_count(), 0);
        assert!(!game_loop.is_paused());
    }

    #[test]
    fn test_toggle_pause() {
        let mut game_loop = GameLoop::new();

        game_loop.toggle_pause();
        assert!(game_loop.is_paused());

        game_loop.toggle_pause();
        assert!(!game_loop.is_paused());
    }

    #[test]
    fn test_paused_no_ticks() {
        let mut game_loop = GameLoop::new();
        game_loop.pause();

        assert_eq!(game_loop.advance(Duration::from_millis(50)), 0);
        assert_eq!(game_loop.frame_count(), 1);
        assert_eq!(game_loop.tick_count(), 0);
    }

    #[test]
    fn test_one_tick_per_tick_duration() {
        let mut game_loop = GameLoop::new();
        assert_eq!(game_loop.advance(TICK_DURATION), 1);
        assert_eq!(game_loop.advance(TICK_DURATION * 3), 3);
        assert_eq!(game_loop.tick_count(), 4);
    }

    #[test]
    fn test_short_frames_accumulate() {
        let mut game_loop = GameLoop::new();
        let half = TICK_DURATION / 2;

        assert_eq!(game_loop.advance(half), 0);
        assert_eq!(game_loop.advance(half + Duration::from_micros(1)), 1);
    }

    #[test]
    fn test_long_frame_is_capped() {
        let mut game_loop = GameLoop::new();

        // 300ms would be 18 ticks
        assert_eq!(
            game_loop.advance(Duration::from_millis(300)),
            MAX_TICKS_PER_FRAME
        );
        // Backlog is dropped
        assert_eq!(game_loop.advance(Duration::ZERO), 0);
    }

    #[test]
    fn test_resume_discards_accumulated_time() {
        let mut game_loop = GameLoop::new();
        game_loop.advance(TICK_DURATION / 2);
        game_loop.pause();
        game_loop.resume();

        assert_eq!(game_loop.advance(TICK_DURATION / 2), 0);
    }

    #[test]
    fn test_fps() {
        let mut game_loop = GameLoop::new();
        for _ in 0..10 {
            game_loop.advance(Duration::from_millis(20));
        }
        assert_relative_eq!(game_loop.fps(), 50.0, epsilon = 0.01);
    }
}
