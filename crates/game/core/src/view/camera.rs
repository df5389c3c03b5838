use crate::state::{PixelPoint, Position};

/// Smoothed camera focal point ("center of gravity") in pixels.
///
/// The cog trails the characters: it is pulled toward their average pixel
/// position by a bounded amount every tick, so a level's view glides instead
/// of jumping one tile per move cycle.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Camera {
    cog: PixelPoint,
}

impl Camera {
    pub const fn new(cog: PixelPoint) -> Self {
        Self { cog }
    }

    pub const fn focus(&self) -> PixelPoint {
        self.cog
    }

    /// Centre pixel of the average of `positions`, or of tile (0, 0) when
    /// there are none.
    pub fn target(positions: impl IntoIterator<Item = Position>, tile_size: u32) -> PixelPoint {
        let tile = tile_size as i32;
        let (mut sum_x, mut sum_y, mut count) = (0i32, 0i32, 0i32);
        for position in positions {
            sum_x += position.x * tile;
            sum_y += position.y * tile;
            count += 1;
        }

        let half = tile / 2;
        if count == 0 {
            return PixelPoint::new(half, half);
        }
        PixelPoint::new(sum_x / count + half, sum_y / count + half)
    }

    pub fn snap(&mut self, target: PixelPoint) {
        self.cog = target;
    }

    /// Moves toward `target` by at most `speed` pixels per axis.
    pub fn follow(&mut self, target: PixelPoint, speed: i32) {
        self.cog.x += (target.x - self.cog.x).clamp(-speed, speed);
        self.cog.y += (target.y - self.cog.y).clamp(-speed, speed);
    }
}
