//! Shape generation for 2D primitives
//!
//! Everything is emitted as triangle lists in playfield coordinates; the
//! pipeline maps them to clip space.

use glam::Vec2;
use std::f32::consts::PI;

use super::vertex::{Vertex, colors};
use crate::sim::{GameState, Playfield, Rect};

/// Spacing of the backdrop grid lines
pub const GRID_SPACING: f32 = 30.0;
/// Segments used to tessellate the ball
pub const BALL_SEGMENTS: u32 = 24;
const GRID_LINE_WIDTH: f32 = 1.0;
const BLOCK_OUTLINE_WIDTH: f32 = 1.0;

/// Generate vertices for a filled rectangle
pub fn rect(r: &Rect, color: [f32; 4]) -> Vec<Vertex> {
    let (x0, y0, x1, y1) = (r.x, r.y, r.right(), r.bottom());
    vec![
        Vertex::new(x0, y0, color),
        Vertex::new(x1, y0, color),
        Vertex::new(x0, y1, color),
        Vertex::new(x0, y1, color),
        Vertex::new(x1, y0, color),
        Vertex::new(x1, y1, color),
    ]
}

/// Generate vertices for a rectangle border drawn inside its bounds
pub fn rect_outline(r: &Rect, thickness: f32, color: [f32; 4]) -> Vec<Vertex> {
    let t = thickness.min(r.width / 2.0).min(r.height / 2.0);
    let edges = [
        Rect::new(r.x, r.y, r.width, t),
        Rect::new(r.x, r.bottom() - t, r.width, t),
        Rect::new(r.x, r.y + t, t, r.height - 2.0 * t),
        Rect::new(r.right() - t, r.y + t, t, r.height - 2.0 * t),
    ];
    edges.iter().flat_map(|e| rect(e, color)).collect()
}

/// Generate vertices for a filled circle
pub fn circle(center: Vec2, radius: f32, color: [f32; 4], segments: u32) -> Vec<Vertex> {
    let mut vertices = Vec::with_capacity((segments * 3) as usize);

    for i in 0..segments {
        let theta1 = (i as f32 / segments as f32) * 2.0 * PI;
        let theta2 = ((i + 1) as f32 / segments as f32) * 2.0 * PI;

        // Triangle from center to edge
        vertices.push(Vertex::new(center.x, center.y, color));
        vertices.push(Vertex::new(
            center.x + radius * theta1.cos(),
            center.y + radius * theta1.sin(),
            color,
        ));
        vertices.push(Vertex::new(
            center.x + radius * theta2.cos(),
            center.y + radius * theta2.sin(),
            color,
        ));
    }

    vertices
}

/// Generate vertices for the backdrop grid
pub fn grid(playfield: Playfield, spacing: f32, color: [f32; 4]) -> Vec<Vertex> {
    let mut vertices = Vec::new();

    let mut x = 0.0;
    while x < playfield.width {
        let line = Rect::new(x, 0.0, GRID_LINE_WIDTH, playfield.height);
        vertices.extend(rect(&line, color));
        x += spacing;
    }

    let mut y = 0.0;
    while y < playfield.height {
        let line = Rect::new(0.0, y, playfield.width, GRID_LINE_WIDTH);
        vertices.extend(rect(&line, color));
        y += spacing;
    }

    vertices
}

/// Build the whole frame: grid, active blocks, paddle, ball, game-over veil
pub fn scene(state: &GameState, show_grid: bool) -> Vec<Vertex> {
    let mut vertices = Vec::new();

    if show_grid {
        vertices.extend(grid(state.playfield, GRID_SPACING, colors::GRID));
    }

    for block in state.active_blocks() {
        vertices.extend(rect(&block.rect, colors::block(block.color)));
        vertices.extend(rect_outline(
            &block.rect,
            BLOCK_OUTLINE_WIDTH,
            colors::BLOCK_OUTLINE,
        ));
    }

    vertices.extend(rect(&state.paddle.rect(), colors::PADDLE));
    vertices.extend(circle(
        state.ball.pos,
        state.ball.radius,
        colors::BALL,
        BALL_SEGMENTS,
    ));

    if state.is_game_over() {
        let veil = Rect::new(0.0, 0.0, state.playfield.width, state.playfield.height);
        vertices.extend(rect(&veil, colors::GAME_OVER_VEIL));
    }

    vertices
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::GamePhase;

    #[test]
    fn test_rect_covers_corners() {
        let verts = rect(&Rect::new(10.0, 20.0, 30.0, 40.0), [1.0; 4]);
        assert_eq!(verts.len(), 6);
        let xs: Vec<f32> = verts.iter().map(|v| v.position[0]).collect();
        let ys: Vec<f32> = verts.iter().map(|v| v.position[1]).collect();
        assert_eq!(xs.iter().cloned().fold(f32::MAX, f32::min), 10.0);
        assert_eq!(xs.iter().cloned().fold(f32::MIN, f32::max), 40.0);
        assert_eq!(ys.iter().cloned().fold(f32::MAX, f32::min), 20.0);
        assert_eq!(ys.iter().cloned().fold(f32::MIN, f32::max), 60.0);
    }

    #[test]
    fn test_outline_is_four_edges() {
        let verts = rect_outline(&Rect::new(0.0, 0.0, 80.0, 20.0), 1.0, [0.0; 4]);
        assert_eq!(verts.len(), 24);
    }

    #[test]
    fn test_circle_stays_within_radius() {
        let center = Vec2::new(100.0, 100.0);
        let verts = circle(center, 8.0, [1.0; 4], 16);
        assert_eq!(verts.len(), 48);
        for v in verts {
            let d = Vec2::from(v.position).distance(center);
            assert!(d <= 8.0 + 1e-4);
        }
    }

    #[test]
    fn test_grid_line_count() {
        // 800/30 -> 27 vertical, 600/30 -> 20 horizontal
        let verts = grid(Playfield::new(800.0, 600.0), 30.0, colors::GRID);
        assert_eq!(verts.len(), (27 + 20) * 6);
    }

    #[test]
    fn test_scene_skips_inactive_blocks() {
        let mut state = GameState::new(Playfield::default());
        let full = scene(&state, false).len();

        state.blocks[0].active = false;
        let fewer = scene(&state, false).len();
        // Fill plus outline
        assert_eq!(full - fewer, 6 + 24);
    }

    #[test]
    fn test_scene_adds_veil_when_game_over() {
        let mut state = GameState::new(Playfield::default());
        let playing = scene(&state, true).len();
        state.phase = GamePhase::GameOver;
        let over = scene(&state, true);
        assert_eq!(over.len(), playing + 6);
        assert_eq!(over.last().map(|v| v.color), Some(colors::GAME_OVER_VEIL));
    }
}
