//! Brick Breaker - A single-screen block-breaking arcade game
//!
//! Core modules:
//! - `sim`: Deterministic simulation (physics, collisions, game state)
//! - `game`: Frame driver wiring the simulation to its collaborators
//! - `platform`: Browser/native input abstraction
//! - `renderer`: WebGPU rendering pipeline
//! - `settings`: Persisted preferences and playfield configuration

#[cfg(target_arch = "wasm32")]
pub mod audio;
pub mod game;
pub mod platform;
pub mod renderer;
pub mod settings;
pub mod sim;

pub use game::{GameLoop, Presenter, SoundSink};
pub use settings::Settings;

/// Game configuration constants
pub mod consts {
    /// Default playfield dimensions (pixels)
    pub const DEFAULT_PLAYFIELD_WIDTH: f32 = 800.0;
    pub const DEFAULT_PLAYFIELD_HEIGHT: f32 = 600.0;

    /// Paddle defaults
    pub const PADDLE_WIDTH: f32 = 100.0;
    pub const PADDLE_HEIGHT: f32 = 20.0;
    /// Distance from the bottom edge to the paddle's top
    pub const PADDLE_BOTTOM_OFFSET: f32 = 30.0;
    /// Horizontal movement per tick
    pub const PADDLE_SPEED: f32 = 8.0;
    /// Fraction of the paddle's per-tick movement imparted to the ball
    pub const PADDLE_INFLUENCE: f32 = 0.2;
    /// Maximum bounce angle off the paddle, measured from vertical
    pub const MAX_BOUNCE_ANGLE: f32 = std::f32::consts::FRAC_PI_3;

    /// Ball defaults
    pub const BALL_RADIUS: f32 = 8.0;
    /// Distance from the bottom edge to the ball's serve position
    pub const BALL_START_OFFSET: f32 = 50.0;
    pub const BALL_START_DX: f32 = 4.0;
    pub const BALL_START_DY: f32 = -4.0;

    /// Block grid
    pub const BLOCK_WIDTH: f32 = 80.0;
    pub const BLOCK_HEIGHT: f32 = 20.0;
    pub const BLOCK_PADDING: f32 = 10.0;
    pub const BLOCK_OFFSET_TOP: f32 = 50.0;
    pub const BLOCK_COLUMNS: usize = 8;
    pub const BLOCK_ROWS: usize = 5;

    /// Rules
    pub const STARTING_LIVES: u8 = 3;
    pub const POINTS_PER_BLOCK: u32 = 10;
}
