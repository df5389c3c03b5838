use super::Tick;

/// Frame counter plus the cadence bookkeeping for move cycles.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TickClock {
    /// Ticks elapsed since the session started.
    pub now: Tick,
    /// Tick at which the last move cycle ran.
    pub last_move: Tick,
    /// Number of move cycles run so far. Feeds deterministic seeds.
    pub move_cycles: u64,
}

impl TickClock {
    pub fn new() -> Self {
        Self::default()
    }

    /// Advances one tick and reports whether a move cycle is due.
    pub fn advance(&mut self, ticks_per_move: u32) -> bool {
        self.now = self.now + 1;
        if self.now.since(self.last_move) >= u64::from(ticks_per_move) {
            self.last_move = self.now;
            self.move_cycles += 1;
            true
        } else {
            false
        }
    }
}

/// Four-phase checkerboard rotor partitioning the AI pass.
///
/// Each phase visits every second column and every second row; phase bit 0
/// picks the column parity and bit 1 the row parity, so four consecutive
/// phases cover every cell exactly once.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Rotor(u8);

impl Rotor {
    pub const PHASES: u8 = 4;

    pub const fn new() -> Self {
        Self(0)
    }

    pub const fn phase(self) -> u8 {
        self.0
    }

    /// Parity (0 or 1) of the columns visited in this phase.
    pub const fn column_parity(self) -> i32 {
        (self.0 & 1) as i32
    }

    /// Parity (0 or 1) of the rows visited in this phase.
    pub const fn row_parity(self) -> i32 {
        ((self.0 >> 1) & 1) as i32
    }

    /// Moves to the next phase, wrapping after four.
    pub fn advance(&mut self) {
        self.0 = (self.0 + 1) % Self::PHASES;
    }

    pub fn reset(&mut self) {
        self.0 = 0;
    }
}
