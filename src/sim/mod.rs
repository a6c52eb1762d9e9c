//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - One fixed step per tick, no delta-time scaling
//! - No randomness
//! - Stable iteration order (block creation order)
//! - No rendering or platform dependencies

pub mod collision;
pub mod layout;
pub mod state;
pub mod tick;

pub use collision::{BounceAxis, Rect, circle_intersects_rect, resolve_axis};
pub use layout::generate_blocks;
pub use state::{
    Ball, Block, BlockColor, GameEvent, GamePhase, GameState, Paddle, PaddleDirection, Playfield,
    SoundCue,
};
pub use tick::{TickInput, restart, tick};
