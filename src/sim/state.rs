//! Game state and core simulation types
//!
//! Everything the simulation mutates lives in [`GameState`]. Collaborators
//! only ever see it by shared reference.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::collision::Rect;
use super::layout::generate_blocks;
use crate::consts::*;

/// Playfield dimensions, fixed for the session
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Playfield {
    pub width: f32,
    pub height: f32,
}

impl Default for Playfield {
    fn default() -> Self {
        Self {
            width: DEFAULT_PLAYFIELD_WIDTH,
            height: DEFAULT_PLAYFIELD_HEIGHT,
        }
    }
}

impl Playfield {
    pub const fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }
}

/// Current phase of gameplay
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum GamePhase {
    /// Active gameplay
    #[default]
    Playing,
    /// Out of lives or board cleared; only a restart leaves this phase
    GameOver,
}

/// Direction the paddle moved on the last tick
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum PaddleDirection {
    Left,
    Right,
    #[default]
    Idle,
}

/// The player's paddle
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Paddle {
    /// Top-left corner; y never changes after creation
    pub pos: Vec2,
    pub width: f32,
    pub height: f32,
    /// Horizontal movement per tick
    pub speed: f32,
    pub direction: PaddleDirection,
}

impl Paddle {
    /// Paddle centered horizontally near the bottom of the playfield
    pub fn new(playfield: Playfield) -> Self {
        Self {
            pos: Vec2::new(
                playfield.width / 2.0 - PADDLE_WIDTH / 2.0,
                playfield.height - PADDLE_BOTTOM_OFFSET,
            ),
            width: PADDLE_WIDTH,
            height: PADDLE_HEIGHT,
            speed: PADDLE_SPEED,
            direction: PaddleDirection::Idle,
        }
    }

    /// Move back to the horizontal center
    pub fn recenter(&mut self, playfield: Playfield) {
        self.pos.x = playfield.width / 2.0 - self.width / 2.0;
        self.direction = PaddleDirection::Idle;
    }

    /// Largest x the paddle may occupy
    #[inline]
    pub fn max_x(&self, playfield: Playfield) -> f32 {
        (playfield.width - self.width).max(0.0)
    }

    #[inline]
    pub fn center_x(&self) -> f32 {
        self.pos.x + self.width / 2.0
    }

    pub fn rect(&self) -> Rect {
        Rect::new(self.pos.x, self.pos.y, self.width, self.height)
    }
}

/// The ball
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Ball {
    pub pos: Vec2,
    pub vel: Vec2,
    pub radius: f32,
}

impl Ball {
    /// Ball at its serve position
    pub fn new(playfield: Playfield) -> Self {
        let mut ball = Self {
            pos: Vec2::ZERO,
            vel: Vec2::ZERO,
            radius: BALL_RADIUS,
        };
        ball.reset(playfield);
        ball
    }

    /// Return to the serve position and velocity
    pub fn reset(&mut self, playfield: Playfield) {
        self.pos = Vec2::new(playfield.width / 2.0, playfield.height - BALL_START_OFFSET);
        self.vel = Vec2::new(BALL_START_DX, BALL_START_DY);
    }

    #[inline]
    pub fn speed(&self) -> f32 {
        self.vel.length()
    }

    #[inline]
    pub fn left(&self) -> f32 {
        self.pos.x - self.radius
    }

    #[inline]
    pub fn right(&self) -> f32 {
        self.pos.x + self.radius
    }

    #[inline]
    pub fn top(&self) -> f32 {
        self.pos.y - self.radius
    }

    #[inline]
    pub fn bottom(&self) -> f32 {
        self.pos.y + self.radius
    }
}

/// Block colors, one per grid row from top to bottom
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BlockColor {
    Red,
    Orange,
    Yellow,
    Green,
    Blue,
}

impl BlockColor {
    /// Row palette
    pub const PALETTE: [BlockColor; BLOCK_ROWS] = [
        BlockColor::Red,
        BlockColor::Orange,
        BlockColor::Yellow,
        BlockColor::Green,
        BlockColor::Blue,
    ];

    /// Color for a grid row (wraps if the grid ever grows)
    pub fn for_row(row: usize) -> Self {
        Self::PALETTE[row % Self::PALETTE.len()]
    }

    /// 8-bit RGB components
    pub fn rgb(&self) -> [u8; 3] {
        match self {
            BlockColor::Red => [0xFF, 0x00, 0x00],
            BlockColor::Orange => [0xFF, 0x7F, 0x00],
            BlockColor::Yellow => [0xFF, 0xFF, 0x00],
            BlockColor::Green => [0x00, 0xFF, 0x00],
            BlockColor::Blue => [0x00, 0x00, 0xFF],
        }
    }
}

/// A block entity
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Block {
    pub rect: Rect,
    pub color: BlockColor,
    /// Cleared on hit, never set again until restart
    pub active: bool,
}

/// Named audio triggers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SoundCue {
    /// Ball bounced off a side or the top wall
    WallHit,
    /// Ball bounced off the paddle
    PaddleHit,
    /// Block destroyed
    BlockBreak,
    /// Ball missed with lives remaining
    LifeLost,
    /// Out of lives or board cleared
    GameOver,
}

/// Side effects produced by a tick or restart, in emission order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameEvent {
    Sound(SoundCue),
    /// Score display must show the new value
    ScoreChanged(u32),
    /// Lives display must show the new value
    LivesChanged(u8),
}

/// Complete game state (deterministic, serializable)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameState {
    pub playfield: Playfield,
    /// Score
    pub score: u32,
    /// Player lives
    pub lives: u8,
    /// Current phase
    pub phase: GamePhase,
    /// Simulation tick counter
    pub time_ticks: u64,
    /// Player paddle
    pub paddle: Paddle,
    /// Paddle x at the end of the previous tick, for spin on paddle hits
    pub prev_paddle_x: f32,
    pub ball: Ball,
    /// Blocks in creation order (collision scan priority)
    pub blocks: Vec<Block>,
}

impl GameState {
    /// Create a fresh game for the given playfield
    pub fn new(playfield: Playfield) -> Self {
        let paddle = Paddle::new(playfield);
        Self {
            playfield,
            score: 0,
            lives: STARTING_LIVES,
            phase: GamePhase::Playing,
            time_ticks: 0,
            prev_paddle_x: paddle.pos.x,
            paddle,
            ball: Ball::new(playfield),
            blocks: generate_blocks(playfield.width),
        }
    }

    #[inline]
    pub fn is_game_over(&self) -> bool {
        self.phase == GamePhase::GameOver
    }

    /// Blocks still standing, in scan order
    pub fn active_blocks(&self) -> impl Iterator<Item = &Block> {
        self.blocks.iter().filter(|b| b.active)
    }

    pub fn active_block_count(&self) -> usize {
        self.active_blocks().count()
    }

    /// True once every block has been destroyed
    pub fn is_cleared(&self) -> bool {
        self.blocks.iter().all(|b| !b.active)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_game_defaults() {
        let state = GameState::new(Playfield::default());
        assert_eq!(state.score, 0);
        assert_eq!(state.lives, 3);
        assert_eq!(state.phase, GamePhase::Playing);
        assert_eq!(state.active_block_count(), 40);
        assert!(!state.is_cleared());
        assert_eq!(state.paddle.pos, Vec2::new(350.0, 570.0));
        assert_eq!(state.prev_paddle_x, state.paddle.pos.x);
        assert_eq!(state.ball.pos, Vec2::new(400.0, 550.0));
        assert_eq!(state.ball.vel, Vec2::new(4.0, -4.0));
    }

    #[test]
    fn test_ball_extents() {
        let ball = Ball::new(Playfield::default());
        assert_eq!(ball.left(), 392.0);
        assert_eq!(ball.right(), 408.0);
        assert_eq!(ball.top(), 542.0);
        assert_eq!(ball.bottom(), 558.0);
        assert!((ball.speed() - 32f32.sqrt()).abs() < 1e-6);
    }

    #[test]
    fn test_paddle_recenter() {
        let playfield = Playfield::new(640.0, 480.0);
        let mut paddle = Paddle::new(playfield);
        paddle.pos.x = 12.0;
        paddle.direction = PaddleDirection::Left;
        paddle.recenter(playfield);
        assert_eq!(paddle.pos.x, 270.0);
        assert_eq!(paddle.center_x(), 320.0);
        assert_eq!(paddle.direction, PaddleDirection::Idle);
        assert_eq!(paddle.max_x(playfield), 540.0);
    }

    #[test]
    fn test_block_palette_by_row() {
        assert_eq!(BlockColor::for_row(0), BlockColor::Red);
        assert_eq!(BlockColor::for_row(4), BlockColor::Blue);
        assert_eq!(BlockColor::Orange.rgb(), [0xFF, 0x7F, 0x00]);
    }

    #[test]
    fn test_cleared_when_all_inactive() {
        let mut state = GameState::new(Playfield::default());
        for block in &mut state.blocks {
            block.active = false;
        }
        assert!(state.is_cleared());
        assert_eq!(state.active_block_count(), 0);
    }

    #[test]
    fn test_state_serializes_to_json() {
        let state = GameState::new(Playfield::default());
        let json = serde_json::to_string(&state).expect("serialize");
        let back: GameState = serde_json::from_str(&json).expect("deserialize");
        assert_eq!(back.blocks.len(), 40);
        assert_eq!(back.ball.pos, state.ball.pos);
    }
}
