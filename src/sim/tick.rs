//! Fixed-step simulation tick
//!
//! Core game loop that advances simulation deterministically. One call is one
//! frame's worth of motion; there is no delta-time scaling.

use glam::Vec2;

use super::collision::{circle_intersects_rect, resolve_axis};
use super::layout::generate_blocks;
use super::state::{GameEvent, GamePhase, GameState, PaddleDirection, SoundCue};
use crate::consts::*;

/// Input commands for a single tick (deterministic)
#[derive(Debug, Clone, Default)]
pub struct TickInput {
    /// Left arrow held
    pub left: bool,
    /// Right arrow held (wins over `left`)
    pub right: bool,
    /// Idle/demo mode - autopilot drives the paddle
    pub idle_mode: bool,
}

/// Advance the game state by one tick, returning the side effects it produced
pub fn tick(state: &mut GameState, input: &TickInput) -> Vec<GameEvent> {
    let mut events = Vec::new();

    // Frozen until restart
    if state.phase == GamePhase::GameOver {
        return events;
    }

    let input = if input.idle_mode {
        autopilot(state)
    } else {
        input.clone()
    };

    state.time_ticks += 1;

    move_paddle(state, &input);
    move_ball(state, &mut events);
    check_block_collision(state, &mut events);

    events
}

/// Reset score, lives, paddle, ball and the block grid
pub fn restart(state: &mut GameState) -> Vec<GameEvent> {
    let playfield = state.playfield;

    state.score = 0;
    state.lives = STARTING_LIVES;
    state.phase = GamePhase::Playing;
    state.time_ticks = 0;

    state.paddle.recenter(playfield);
    state.prev_paddle_x = state.paddle.pos.x;
    state.ball.reset(playfield);
    state.blocks = generate_blocks(playfield.width);

    log::info!("Game restarted");

    vec![
        GameEvent::ScoreChanged(state.score),
        GameEvent::LivesChanged(state.lives),
    ]
}

/// Steer the paddle center toward the ball
fn autopilot(state: &GameState) -> TickInput {
    let paddle = &state.paddle;
    let dead_zone = paddle.speed / 2.0;
    let offset = state.ball.pos.x - paddle.center_x();

    TickInput {
        left: offset < -dead_zone,
        right: offset > dead_zone,
        idle_mode: true,
    }
}

fn move_paddle(state: &mut GameState, input: &TickInput) {
    let max_x = state.paddle.max_x(state.playfield);
    let paddle = &mut state.paddle;

    if input.right && paddle.pos.x < max_x {
        paddle.pos.x = (paddle.pos.x + paddle.speed).min(max_x);
        paddle.direction = PaddleDirection::Right;
    } else if input.left && paddle.pos.x > 0.0 {
        paddle.pos.x = (paddle.pos.x - paddle.speed).max(0.0);
        paddle.direction = PaddleDirection::Left;
    } else {
        paddle.direction = PaddleDirection::Idle;
    }
}

fn move_ball(state: &mut GameState, events: &mut Vec<GameEvent>) {
    let playfield = state.playfield;
    let ball = &mut state.ball;

    ball.pos += ball.vel;

    // Side walls
    if ball.right() > playfield.width || ball.left() < 0.0 {
        ball.vel.x = -ball.vel.x;
        events.push(GameEvent::Sound(SoundCue::WallHit));
    }
    // Top wall; the bottom is a miss, not a bounce
    if ball.top() < 0.0 {
        ball.vel.y = -ball.vel.y;
        events.push(GameEvent::Sound(SoundCue::WallHit));
    }

    // Paddle: bounce angle from hit position, plus spin from paddle motion
    let paddle = &state.paddle;
    if ball.bottom() > paddle.pos.y
        && ball.bottom() < paddle.pos.y + paddle.height
        && ball.pos.x > paddle.pos.x
        && ball.pos.x < paddle.pos.x + paddle.width
    {
        let relative = (ball.pos.x - paddle.center_x()) / (paddle.width / 2.0);
        let angle = relative * MAX_BOUNCE_ANGLE;
        let speed = ball.speed();

        ball.vel = Vec2::new(speed * angle.sin(), -speed * angle.cos());
        ball.vel.x += (paddle.pos.x - state.prev_paddle_x) * PADDLE_INFLUENCE;

        events.push(GameEvent::Sound(SoundCue::PaddleHit));
    }

    // Miss
    if ball.bottom() > playfield.height {
        state.lives = state.lives.saturating_sub(1);
        events.push(GameEvent::LivesChanged(state.lives));

        if state.lives == 0 {
            state.phase = GamePhase::GameOver;
            events.push(GameEvent::Sound(SoundCue::GameOver));
            log::info!("Game over at tick {} (score {})", state.time_ticks, state.score);
        } else {
            events.push(GameEvent::Sound(SoundCue::LifeLost));
            ball.reset(playfield);
            log::info!("Life lost, {} remaining", state.lives);
        }
    }

    state.prev_paddle_x = state.paddle.pos.x;
}

/// At most one block breaks per tick: the first active one in creation order
fn check_block_collision(state: &mut GameState, events: &mut Vec<GameEvent>) {
    let center = state.ball.pos;
    let radius = state.ball.radius;

    let Some(block) = state
        .blocks
        .iter_mut()
        .find(|b| b.active && circle_intersects_rect(center, radius, &b.rect))
    else {
        return;
    };

    block.active = false;
    let axis = resolve_axis(center, radius, &block.rect);
    log::debug!("Block {:?} at ({}, {}) broken", block.color, block.rect.x, block.rect.y);

    state.score = state.score.saturating_add(POINTS_PER_BLOCK);
    events.push(GameEvent::ScoreChanged(state.score));
    events.push(GameEvent::Sound(SoundCue::BlockBreak));

    state.ball.vel = axis.apply(state.ball.vel);

    if state.is_cleared() {
        state.phase = GamePhase::GameOver;
        events.push(GameEvent::Sound(SoundCue::GameOver));
        log::info!("Board cleared at tick {} (score {})", state.time_ticks, state.score);
    }
}
