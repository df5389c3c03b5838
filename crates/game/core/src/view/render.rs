//! Read-only render boundary.
//!
//! Drawing happens outside the core. A renderer takes a [`RenderView`] after
//! each step and blits one tileset image per visible cell.
use crate::state::{Cell, Grid, PixelPoint, Position, TileRect, codes};

use super::Frame;

/// Tileset image index for a cell.
///
/// Identical to the cell code except arrows: the tileset stores the arrow
/// sprites three compass steps out of phase with flight direction.
pub const fn tile_index(cell: Cell) -> u8 {
    match cell {
        Cell::Arrow(facing) => codes::ARROW + ((facing.index() + 3) & 7),
        other => other.code(),
    }
}

/// One cell to draw.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct VisibleTile {
    pub position: Position,
    /// Top-left corner on screen, offset already applied.
    pub screen: PixelPoint,
    pub tile: u8,
}

/// Snapshot handed to the renderer between steps.
#[derive(Clone, Copy, Debug)]
pub struct RenderView<'a> {
    pub grid: &'a Grid,
    pub active: TileRect,
    pub offset: PixelPoint,
    pub tile_size: u32,
}

impl<'a> RenderView<'a> {
    pub fn new(grid: &'a Grid, frame: Frame, tile_size: u32) -> Self {
        Self {
            grid,
            active: frame.active,
            offset: frame.offset,
            tile_size,
        }
    }

    /// Every cell inside the active rectangle, row-major.
    pub fn visible_tiles(&self) -> impl Iterator<Item = VisibleTile> + '_ {
        let tile = self.tile_size as i32;
        let offset = self.offset;
        self.active.positions().filter_map(move |position| {
            let cell = self.grid.cell(position)?;
            Some(VisibleTile {
                position,
                screen: PixelPoint::new(offset.x + position.x * tile, offset.y + position.y * tile),
                tile: tile_index(cell),
            })
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::{Direction, MapDimensions};

    #[test]
    fn arrows_use_rotated_sprites() {
        assert_eq!(tile_index(Cell::Arrow(Direction::North)), 19);
        assert_eq!(tile_index(Cell::Arrow(Direction::SouthWest)), 16);
        assert_eq!(tile_index(Cell::Arrow(Direction::NorthWest)), 18);
        assert_eq!(tile_index(Cell::Wall), codes::WALL);
        assert_eq!(tile_index(Cell::Heart), codes::HEART);
    }

    #[test]
    fn visible_tiles_cover_the_active_rect_with_offset() {
        let mut grid = Grid::new(MapDimensions::new(8, 8));
        grid.set(Position::new(3, 2), Cell::Wall).unwrap();
        let frame = Frame {
            offset: PixelPoint::new(-32, -16),
            active: TileRect::new(2, 1, 5, 3),
        };

        let view = RenderView::new(&grid, frame, 16);
        let tiles: Vec<_> = view.visible_tiles().collect();

        assert_eq!(tiles.len(), 6);
        assert_eq!(tiles[0].position, Position::new(2, 1));
        assert_eq!(tiles[0].screen, PixelPoint::new(0, 0));
        let wall = tiles
            .iter()
            .find(|t| t.position == Position::new(3, 2))
            .unwrap();
        assert_eq!(wall.tile, codes::WALL);
        assert_eq!(wall.screen, PixelPoint::new(16, 16));
    }
}
