//! Block grid generation
//!
//! The board is always the same 5×8 grid, horizontally centered on the
//! playfield, one palette color per row.

use super::collision::Rect;
use super::state::{Block, BlockColor};
use crate::consts::*;

/// Total width of the grid, padding between columns included
pub const GRID_WIDTH: f32 =
    (BLOCK_WIDTH + BLOCK_PADDING) * BLOCK_COLUMNS as f32 - BLOCK_PADDING;

/// Build a fresh, fully active block grid in row-major order
pub fn generate_blocks(playfield_width: f32) -> Vec<Block> {
    let offset_left = (playfield_width - GRID_WIDTH) / 2.0;

    let mut blocks = Vec::with_capacity(BLOCK_ROWS * BLOCK_COLUMNS);
    for row in 0..BLOCK_ROWS {
        let color = BlockColor::for_row(row);
        for col in 0..BLOCK_COLUMNS {
            blocks.push(Block {
                rect: Rect::new(
                    col as f32 * (BLOCK_WIDTH + BLOCK_PADDING) + offset_left,
                    row as f32 * (BLOCK_HEIGHT + BLOCK_PADDING) + BLOCK_OFFSET_TOP,
                    BLOCK_WIDTH,
                    BLOCK_HEIGHT,
                ),
                color,
                active: true,
            });
        }
    }

    log::debug!(
        "Generated {} blocks (offset_left {:.1})",
        blocks.len(),
        offset_left
    );
    blocks
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_grid_has_forty_active_blocks() {
        let blocks = generate_blocks(800.0);
        assert_eq!(blocks.len(), 40);
        assert!(blocks.iter().all(|b| b.active));
    }

    #[test]
    fn test_grid_is_centered() {
        let blocks = generate_blocks(800.0);
        let left = blocks.iter().map(|b| b.rect.x).fold(f32::MAX, f32::min);
        let right = blocks.iter().map(|b| b.rect.right()).fold(f32::MIN, f32::max);
        assert_eq!(left, 45.0);
        assert_eq!(right, 755.0);
        assert_eq!(left, 800.0 - right);
    }

    #[test]
    fn test_grid_positions_row_major() {
        let blocks = generate_blocks(800.0);
        // Second block sits one column to the right of the first
        assert_eq!(blocks[1].rect.x - blocks[0].rect.x, 90.0);
        assert_eq!(blocks[1].rect.y, blocks[0].rect.y);
        // Ninth block starts the second row
        assert_eq!(blocks[8].rect.x, blocks[0].rect.x);
        assert_eq!(blocks[8].rect.y, 80.0);
        // Bottom row
        assert_eq!(blocks[39].rect.y, 170.0);
        assert_eq!(blocks[0].rect.width, 80.0);
        assert_eq!(blocks[0].rect.height, 20.0);
    }

    #[test]
    fn test_row_colors() {
        let blocks = generate_blocks(800.0);
        for (row, chunk) in blocks.chunks(BLOCK_COLUMNS).enumerate() {
            assert!(chunk.iter().all(|b| b.color == BlockColor::PALETTE[row]));
        }
    }

    #[test]
    fn test_layout_is_deterministic() {
        let a = generate_blocks(1024.0);
        let b = generate_blocks(1024.0);
        assert!(a.iter().zip(&b).all(|(x, y)| x.rect == y.rect && x.color == y.color));
    }
}
