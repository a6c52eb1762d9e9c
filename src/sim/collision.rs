//! Collision detection and response for axis-aligned geometry
//!
//! The ball is tested as its bounding circle against rectangles using the
//! expanded-edge test. Bounce response is a deliberately simple axis
//! heuristic rather than a swept/continuous solver; it mis-classifies some
//! corner hits and that behavior is part of the game's feel.

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// Axis-aligned rectangle in playfield coordinates (origin top-left, y down)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Rect {
    pub const fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    #[inline]
    pub fn right(&self) -> f32 {
        self.x + self.width
    }

    #[inline]
    pub fn bottom(&self) -> f32 {
        self.y + self.height
    }
}

/// Which velocity components a collision flips
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct BounceAxis {
    pub flip_dx: bool,
    pub flip_dy: bool,
}

impl BounceAxis {
    /// Apply the flips to a velocity
    #[inline]
    pub fn apply(self, vel: Vec2) -> Vec2 {
        Vec2::new(
            if self.flip_dx { -vel.x } else { vel.x },
            if self.flip_dy { -vel.y } else { vel.y },
        )
    }
}

/// Check whether a ball's bounding circle overlaps a rectangle
///
/// Expanded-edge test: the center must lie within `radius` of the rectangle
/// on both axes. Strict comparisons, so merely touching is not a hit.
pub fn circle_intersects_rect(center: Vec2, radius: f32, rect: &Rect) -> bool {
    center.x + radius > rect.x
        && center.x - radius < rect.right()
        && center.y + radius > rect.y
        && center.y - radius < rect.bottom()
}

/// Decide the bounce axis for a ball that overlaps `rect`
///
/// Flips dy when the ball's vertical extent crosses the top or bottom edge,
/// otherwise flips dx. Exactly one flag is set.
pub fn resolve_axis(center: Vec2, radius: f32, rect: &Rect) -> BounceAxis {
    let crosses_horizontal_edge =
        center.y + radius > rect.bottom() || center.y - radius < rect.y;
    BounceAxis {
        flip_dx: !crosses_horizontal_edge,
        flip_dy: crosses_horizontal_edge,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const BLOCK: Rect = Rect::new(100.0, 50.0, 80.0, 20.0);

    #[test]
    fn test_circle_overlaps_rect_top_edge() {
        // Ball center 5px above the block, radius 8 reaches into it
        assert!(circle_intersects_rect(Vec2::new(140.0, 45.0), 8.0, &BLOCK));
    }

    #[test]
    fn test_circle_touching_is_not_a_hit() {
        // Bottom of the ball exactly on the block's top edge
        assert!(!circle_intersects_rect(Vec2::new(140.0, 42.0), 8.0, &BLOCK));
        // Right of the ball exactly on the block's left edge
        assert!(!circle_intersects_rect(Vec2::new(92.0, 60.0), 8.0, &BLOCK));
    }

    #[test]
    fn test_circle_clear_miss() {
        assert!(!circle_intersects_rect(Vec2::new(300.0, 300.0), 8.0, &BLOCK));
    }

    #[test]
    fn test_expanded_edge_counts_corner_box() {
        // Outside the true circle but inside the expanded box at the corner
        let center = Vec2::new(BLOCK.x - 6.0, BLOCK.y - 6.0);
        assert!(circle_intersects_rect(center, 8.0, &BLOCK));
    }

    #[test]
    fn test_resolve_top_hit_flips_dy() {
        let axis = resolve_axis(Vec2::new(140.0, 45.0), 8.0, &BLOCK);
        assert_eq!(
            axis,
            BounceAxis {
                flip_dx: false,
                flip_dy: true
            }
        );
    }

    #[test]
    fn test_resolve_bottom_hit_flips_dy() {
        let axis = resolve_axis(Vec2::new(140.0, 75.0), 8.0, &BLOCK);
        assert!(axis.flip_dy);
        assert!(!axis.flip_dx);
    }

    #[test]
    fn test_resolve_side_hit_flips_dx() {
        // Vertically contained within the block band, entering from the left
        let axis = resolve_axis(Vec2::new(99.0, 60.0), 2.0, &BLOCK);
        assert!(axis.flip_dx);
        assert!(!axis.flip_dy);
    }

    #[test]
    fn test_resolve_corner_prefers_dy() {
        // Corner hits crossing the top edge are classified as vertical
        let axis = resolve_axis(Vec2::new(BLOCK.x - 6.0, BLOCK.y - 6.0), 8.0, &BLOCK);
        assert!(axis.flip_dy);
    }

    #[test]
    fn test_bounce_axis_apply() {
        let vel = Vec2::new(3.0, -4.0);
        let flipped = BounceAxis {
            flip_dx: false,
            flip_dy: true,
        }
        .apply(vel);
        assert_eq!(flipped, Vec2::new(3.0, 4.0));
        assert_eq!(BounceAxis::default().apply(vel), vel);
    }
}
