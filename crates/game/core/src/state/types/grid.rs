use crate::config::GameConfig;
use crate::state::{GridError, LevelDecodeError};

use super::{Cell, Direction, MapDimensions, Position};

/// Half-open rectangle of tiles: `left <= x < right`, `top <= y < bottom`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TileRect {
    pub left: i32,
    pub top: i32,
    pub right: i32,
    pub bottom: i32,
}

impl TileRect {
    pub const EMPTY: Self = Self::new(0, 0, 0, 0);

    pub const fn new(left: i32, top: i32, right: i32, bottom: i32) -> Self {
        Self {
            left,
            top,
            right,
            bottom,
        }
    }

    pub const fn width(&self) -> i32 {
        self.right - self.left
    }

    pub const fn height(&self) -> i32 {
        self.bottom - self.top
    }

    pub const fn is_empty(&self) -> bool {
        self.right <= self.left || self.bottom <= self.top
    }

    pub const fn contains(&self, position: Position) -> bool {
        position.x >= self.left
            && position.x < self.right
            && position.y >= self.top
            && position.y < self.bottom
    }

    pub fn intersect(&self, other: &TileRect) -> TileRect {
        TileRect::new(
            self.left.max(other.left),
            self.top.max(other.top),
            self.right.min(other.right),
            self.bottom.min(other.bottom),
        )
    }

    /// Row-major iteration over every position inside the rectangle.
    pub fn positions(&self) -> impl Iterator<Item = Position> + use<> {
        let TileRect {
            left,
            top,
            right,
            bottom,
        } = *self;
        (top..bottom).flat_map(move |y| (left..right).map(move |x| Position::new(x, y)))
    }
}

/// The shared dungeon map: a dense, row-major array of cells.
///
/// Every cell holds exactly one [`Cell`]. Accessors do not enforce gameplay
/// rules; the engine is responsible for keeping entity markers consistent.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Grid {
    dimensions: MapDimensions,
    cells: Vec<Cell>,
}

impl Grid {
    /// Creates an empty grid (all [`Cell::Space`]).
    pub fn new(dimensions: MapDimensions) -> Self {
        Self {
            dimensions,
            cells: vec![Cell::Space; dimensions.cell_count()],
        }
    }

    /// Builds a grid from decoded boundary codes.
    pub fn from_codes(dimensions: MapDimensions, codes: &[u8]) -> Result<Self, LevelDecodeError> {
        let mut grid = Self::new(dimensions);
        grid.load(codes)?;
        Ok(grid)
    }

    pub fn dimensions(&self) -> MapDimensions {
        self.dimensions
    }

    pub fn width(&self) -> u32 {
        self.dimensions.width
    }

    pub fn height(&self) -> u32 {
        self.dimensions.height
    }

    /// Rectangle covering the whole grid.
    pub fn bounds(&self) -> TileRect {
        TileRect::new(0, 0, self.width() as i32, self.height() as i32)
    }

    pub fn contains(&self, position: Position) -> bool {
        self.dimensions.contains(position)
    }

    fn index(&self, position: Position) -> Option<usize> {
        self.contains(position)
            .then(|| position.y as usize * self.width() as usize + position.x as usize)
    }

    fn out_of_range(&self, position: Position) -> GridError {
        GridError::OutOfRange {
            position,
            width: self.width(),
            height: self.height(),
        }
    }

    /// Non-failing lookup; `None` outside the grid.
    pub fn cell(&self, position: Position) -> Option<Cell> {
        self.index(position).map(|index| self.cells[index])
    }

    pub fn get(&self, position: Position) -> Result<Cell, GridError> {
        self.cell(position)
            .ok_or_else(|| self.out_of_range(position))
    }

    pub fn set(&mut self, position: Position, cell: Cell) -> Result<(), GridError> {
        let index = self
            .index(position)
            .ok_or_else(|| self.out_of_range(position))?;
        self.cells[index] = cell;
        Ok(())
    }

    /// Clears `position` only if it still holds `expected`.
    ///
    /// Returns whether the cell was cleared. Positions outside the grid are
    /// left alone.
    pub fn erase(&mut self, position: Position, expected: Cell) -> bool {
        match self.index(position) {
            Some(index) if self.cells[index] == expected => {
                self.cells[index] = Cell::Space;
                true
            }
            _ => false,
        }
    }

    /// Clears the region of [`Cell::Lock`] cells 8-connected to `origin`.
    ///
    /// Does nothing unless `origin` itself is a lock. Returns the number of
    /// cells cleared. Uses an explicit worklist, so region size is bounded
    /// only by the grid.
    pub fn unlock(&mut self, origin: Position) -> usize {
        let mut cleared = 0;
        let mut pending = vec![origin];

        while let Some(position) = pending.pop() {
            let Some(index) = self.index(position) else {
                continue;
            };
            // Clearing on visit doubles as the visited mark.
            if self.cells[index] != Cell::Lock {
                continue;
            }
            self.cells[index] = Cell::Space;
            cleared += 1;
            pending.extend(Direction::ALL.iter().map(|&d| position.step(d)));
        }

        cleared
    }

    /// First cell (row-major) equal to `cell`.
    pub fn find(&self, cell: Cell) -> Result<Position, GridError> {
        let width = self.width() as usize;
        self.cells
            .iter()
            .position(|&candidate| candidate == cell)
            .map(|index| Position::new((index % width) as i32, (index / width) as i32))
            .ok_or(GridError::NotFound(cell))
    }

    /// Destroys every ghost inside `rect` and returns the score earned,
    /// `10 × Σ(severity + 1)`. Cells outside `rect` are untouched.
    pub fn detonate(&mut self, rect: TileRect) -> u32 {
        let area = rect.intersect(&self.bounds());
        let width = self.width() as usize;
        let mut score = 0;

        for position in area.positions() {
            let index = position.y as usize * width + position.x as usize;
            if let Cell::Ghost(severity) = self.cells[index] {
                self.cells[index] = Cell::Space;
                score += GameConfig::GHOST_BOMB_SCORE * severity.weight();
            }
        }

        score
    }

    /// Replaces the grid contents with decoded level codes.
    ///
    /// The payload is validated in full before anything is written, so on
    /// error the previous contents are retained.
    pub fn load(&mut self, codes: &[u8]) -> Result<(), LevelDecodeError> {
        let expected = self.cells.len();
        if codes.len() != expected {
            return Err(LevelDecodeError::SizeMismatch {
                expected,
                actual: codes.len(),
            });
        }

        let decoded = codes
            .iter()
            .enumerate()
            .map(|(index, &code)| {
                Cell::from_code(code).ok_or(LevelDecodeError::InvalidCode { index, code })
            })
            .collect::<Result<Vec<_>, _>>()?;

        self.cells = decoded;
        Ok(())
    }

    /// Encodes the grid back into boundary codes.
    pub fn codes(&self) -> Vec<u8> {
        self.cells.iter().map(|cell| cell.code()).collect()
    }

    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// Counts cells matching `predicate`.
    pub fn count(&self, predicate: impl Fn(Cell) -> bool) -> usize {
        self.cells.iter().filter(|&&cell| predicate(cell)).count()
    }
}
