use crate::state::{MapDimensions, PixelPoint, TileRect};

/// Size of the visible play area in pixels.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ViewportSize {
    pub width: u32,
    pub height: u32,
}

impl ViewportSize {
    pub const fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }
}

/// Scroll offset for one axis.
///
/// Centres `focal` in a `view`-pixel window over a `map`-pixel axis, then
/// clamps to `[-(map - view), 0]` so the window never leaves the map. When
/// the map is narrower than the window the offset is pinned at 0.
pub fn axis_offset(focal: i32, view: i32, map: i32) -> i32 {
    let lowest = (view - map).min(0);
    (view / 2 - focal).max(lowest).min(0)
}

/// Half-open tile range `[first, last)` whose pixels intersect the window
/// at `offset`, rounded outward and clamped to `tiles`.
fn axis_tiles(offset: i32, view: i32, tile: i32, tiles: i32) -> (i32, i32) {
    let start = -offset;
    let first = start / tile;
    let last = (start + view + tile - 1) / tile;
    (first.clamp(0, tiles), last.clamp(0, tiles))
}

/// What the camera shows this tick: the pixel offset to draw the grid at
/// and the active rectangle of tiles the AI pass may touch.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Frame {
    pub offset: PixelPoint,
    pub active: TileRect,
}

impl Frame {
    /// Derives the frame for a focal pixel position.
    pub fn compute(
        focal: PixelPoint,
        viewport: ViewportSize,
        tile_size: u32,
        map: MapDimensions,
    ) -> Self {
        let tile = tile_size.max(1) as i32;
        let (view_w, view_h) = (viewport.width as i32, viewport.height as i32);
        let (tiles_w, tiles_h) = (map.width as i32, map.height as i32);

        let offset = PixelPoint::new(
            axis_offset(focal.x, view_w, tiles_w * tile),
            axis_offset(focal.y, view_h, tiles_h * tile),
        );
        let (left, right) = axis_tiles(offset.x, view_w, tile, tiles_w);
        let (top, bottom) = axis_tiles(offset.y, view_h, tile, tiles_h);

        Self {
            offset,
            active: TileRect::new(left, top, right, bottom),
        }
    }
}
