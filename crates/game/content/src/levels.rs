//! Packed level format and the built-in arena.
//!
//! Level files store two cells per byte: the low nibble holds the cell at an
//! even x, the high nibble the cell at the following odd x. Bytes run in
//! row-major order with no header, so a `width × height` level is exactly
//! `width × height / 2` bytes. Only codes below 16 fit, which covers every
//! cell a level can start with.

use game_core::{LevelDecodeError, LevelSnapshot, MapDimensions, Position, codes};

const NIBBLE: u8 = 0x0f;

fn packed_len(dimensions: MapDimensions) -> Result<usize, LevelDecodeError> {
    if dimensions.width % 2 != 0 {
        return Err(LevelDecodeError::OddWidth {
            width: dimensions.width,
        });
    }
    Ok(dimensions.cell_count() / 2)
}

/// Unpacks a level file into `width × height` cell codes.
pub fn decode_level(bytes: &[u8], dimensions: MapDimensions) -> Result<Vec<u8>, LevelDecodeError> {
    let expected = packed_len(dimensions)?;
    if bytes.len() != expected {
        return Err(LevelDecodeError::ByteLength {
            expected,
            actual: bytes.len(),
        });
    }

    Ok(bytes
        .iter()
        .flat_map(|&byte| [byte & NIBBLE, byte >> 4])
        .collect())
}

/// Packs cell codes back into the level file layout.
///
/// Fails on codes that do not fit a nibble (arrows and players are never
/// stored in level files).
pub fn encode_level(cells: &[u8], dimensions: MapDimensions) -> Result<Vec<u8>, LevelDecodeError> {
    packed_len(dimensions)?;
    if cells.len() != dimensions.cell_count() {
        return Err(LevelDecodeError::SizeMismatch {
            expected: dimensions.cell_count(),
            actual: cells.len(),
        });
    }
    if let Some((index, &code)) = cells.iter().enumerate().find(|&(_, &code)| code > NIBBLE) {
        return Err(LevelDecodeError::InvalidCode { index, code });
    }

    Ok(cells
        .chunks_exact(2)
        .map(|pair| pair[0] | (pair[1] << 4))
        .collect())
}

/// Walled arena with up stairs at (2,2) and down stairs at (10,10).
///
/// Features that fall outside (or on the border of) a small map are left
/// out.
pub fn fallback_arena(dimensions: MapDimensions) -> Vec<u8> {
    let width = dimensions.width as i32;
    let height = dimensions.height as i32;
    let mut cells = vec![codes::SPACE; dimensions.cell_count()];

    for y in 0..height {
        for x in 0..width {
            if x == 0 || y == 0 || x == width - 1 || y == height - 1 {
                cells[(y * width + x) as usize] = codes::WALL;
            }
        }
    }

    let mut place = |position: Position, code: u8| {
        let interior = position.x > 0
            && position.y > 0
            && position.x < width - 1
            && position.y < height - 1;
        if interior {
            cells[(position.y * width + position.x) as usize] = code;
        }
    };
    place(Position::new(2, 2), codes::STAIRS_UP);
    place(Position::new(10, 10), codes::STAIRS_DOWN);

    cells
}

/// Level set holding only [`fallback_arena`] as level 0.
pub fn fallback_levels(dimensions: MapDimensions) -> LevelSnapshot {
    LevelSnapshot::single(dimensions, fallback_arena(dimensions))
}

#[cfg(test)]
mod tests {
    use game_core::{Cell, Grid, LevelOracle};

    use super::*;

    #[test]
    fn low_nibble_is_the_even_column() {
        let dimensions = MapDimensions::new(4, 1);
        let cells = decode_level(&[0x31, 0x0d], dimensions).unwrap();
        assert_eq!(cells, vec![1, 3, 13, 0]);
    }

    #[test]
    fn decode_rejects_wrong_sizes() {
        let dimensions = MapDimensions::new(4, 2);
        assert_eq!(
            decode_level(&[0; 3], dimensions),
            Err(LevelDecodeError::ByteLength {
                expected: 4,
                actual: 3
            })
        );
        assert_eq!(
            decode_level(&[0; 3], MapDimensions::new(3, 2)),
            Err(LevelDecodeError::OddWidth { width: 3 })
        );
    }

    #[test]
    fn encode_refuses_runtime_only_codes() {
        let dimensions = MapDimensions::new(2, 1);
        assert_eq!(
            encode_level(&[codes::WALL, codes::PLAYER], dimensions),
            Err(LevelDecodeError::InvalidCode {
                index: 1,
                code: codes::PLAYER
            })
        );
        assert_eq!(
            encode_level(&[codes::WALL, codes::HEART], dimensions),
            Ok(vec![0xc1])
        );
    }

    #[test]
    fn fallback_arena_is_walled_with_both_stairs() {
        let dimensions = MapDimensions::new(60, 30);
        let grid = Grid::from_codes(dimensions, &fallback_arena(dimensions)).unwrap();

        assert_eq!(grid.find(Cell::StairsUp), Ok(Position::new(2, 2)));
        assert_eq!(grid.find(Cell::StairsDown), Ok(Position::new(10, 10)));
        assert_eq!(grid.cell(Position::new(0, 15)), Some(Cell::Wall));
        assert_eq!(grid.cell(Position::new(59, 29)), Some(Cell::Wall));
        assert_eq!(grid.cell(Position::new(30, 15)), Some(Cell::Space));

        let packed = encode_level(grid.codes().as_slice(), dimensions).unwrap();
        assert_eq!(decode_level(&packed, dimensions).unwrap(), grid.codes());
    }

    #[test]
    fn small_arena_drops_features_that_do_not_fit() {
        let dimensions = MapDimensions::new(8, 6);
        let cells = fallback_arena(dimensions);

        assert!(!cells.contains(&codes::STAIRS_DOWN));
        assert_eq!(cells[2 * 8 + 2], codes::STAIRS_UP);
        assert_eq!(fallback_levels(dimensions).level_count(), 1);
    }
}
