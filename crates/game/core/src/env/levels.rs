use crate::state::MapDimensions;

/// Source of decoded level data.
///
/// Levels are addressed by index and handed out as already-decoded cell
/// codes (`width × height`, row-major). Byte layouts are the implementor's
/// concern.
pub trait LevelOracle: Send + Sync {
    /// Size every level decodes to.
    fn dimensions(&self) -> MapDimensions;

    /// Decoded codes for level `index`, if present.
    fn level(&self, index: u32) -> Option<&[u8]>;

    /// One past the highest level index available.
    fn level_count(&self) -> u32;

    fn contains(&self, index: u32) -> bool {
        self.level(index).is_some()
    }
}

/// In-memory [`LevelOracle`] over already decoded levels.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LevelSnapshot {
    dimensions: MapDimensions,
    /// `None` marks a gap (e.g. a missing level file).
    levels: Vec<Option<Vec<u8>>>,
}

impl LevelSnapshot {
    pub fn new(dimensions: MapDimensions) -> Self {
        Self {
            dimensions,
            levels: Vec::new(),
        }
    }

    /// Single-level snapshot.
    pub fn single(dimensions: MapDimensions, codes: Vec<u8>) -> Self {
        let mut snapshot = Self::new(dimensions);
        snapshot.push(codes);
        snapshot
    }

    /// Appends the next level.
    pub fn push(&mut self, codes: Vec<u8>) {
        self.levels.push(Some(codes));
    }

    /// Stores `codes` as level `index`, leaving gaps below it empty.
    pub fn insert(&mut self, index: u32, codes: Vec<u8>) {
        let index = index as usize;
        if self.levels.len() <= index {
            self.levels.resize(index + 1, None);
        }
        self.levels[index] = Some(codes);
    }

    pub fn is_empty(&self) -> bool {
        self.levels.iter().all(Option::is_none)
    }

    /// Number of levels actually present.
    pub fn available(&self) -> usize {
        self.levels.iter().flatten().count()
    }
}

impl LevelOracle for LevelSnapshot {
    fn dimensions(&self) -> MapDimensions {
        self.dimensions
    }

    fn level(&self, index: u32) -> Option<&[u8]> {
        self.levels.get(index as usize)?.as_deref()
    }

    fn level_count(&self) -> u32 {
        self.levels.len() as u32
    }
}
