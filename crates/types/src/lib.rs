//! Shared types module - pure data structures and constants
//!
//! This crate defines the fundamental types used throughout the board core.
//! All types are plain data with no external dependencies, making them usable
//! in any context (core simulation, engine, host integration, tests).
//!
//! # Coordinates
//!
//! The board is addressed as `(x, y)` with `x` growing rightward and `y`
//! growing downward: row 0 is the top row. Gravity therefore moves tiles
//! toward higher `y`, and cleared cells collect at `y = 0` before refill.
//!
//! # Kinds
//!
//! A tile kind is a small integer `0..kinds` where `kinds` comes from
//! [`BoardConfig`]. The number of distinct kinds is capped at
//! [`MAX_TILE_KINDS`] so candidate sets can live on the stack.

use std::error::Error;
use std::fmt;

/// Upper bound on the configured number of tile kinds.
pub const MAX_TILE_KINDS: usize = 16;

/// Fewest kinds for which a board can be filled without forced runs.
pub const MIN_TILE_KINDS: u8 = 3;

/// A tile's visual/match category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TileKind(pub u8);

impl TileKind {
    /// Index into kind-sized tables.
    #[inline]
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

/// Stable identity of a cell in the board arena.
///
/// A cell keeps its id for the lifetime of the board: drops and swaps change
/// the coordinate a cell is mapped to, never the id.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CellId(pub u32);

impl CellId {
    /// Index into arena-sized tables.
    #[inline]
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

/// A board coordinate. Only ever constructed in-bounds by the board itself;
/// free-standing values (e.g. parsed input) must go through bounds checks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Coord {
    pub x: u8,
    pub y: u8,
}

impl Coord {
    pub fn new(x: u8, y: u8) -> Self {
        Self { x, y }
    }

    /// Whether `other` is one of the four cardinal neighbors.
    pub fn is_adjacent(self, other: Coord) -> bool {
        let dx = (self.x as i16 - other.x as i16).abs();
        let dy = (self.y as i16 - other.y as i16).abs();
        dx + dy == 1
    }

    /// Step one cell in `dir` without bounds knowledge; the caller resolves
    /// the result against a board.
    pub fn step(self, dir: Direction) -> (i16, i16) {
        let (dx, dy) = dir.delta();
        (self.x as i16 + dx as i16, self.y as i16 + dy as i16)
    }
}

impl fmt::Display for Coord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// The four cardinal directions, as coordinate arithmetic.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    pub const ALL: [Direction; 4] = [
        Direction::Up,
        Direction::Down,
        Direction::Left,
        Direction::Right,
    ];

    /// Unit offset for this direction. `Up` points toward row 0.
    pub fn delta(self) -> (i8, i8) {
        match self {
            Direction::Up => (0, -1),
            Direction::Down => (0, 1),
            Direction::Left => (-1, 0),
            Direction::Right => (1, 0),
        }
    }
}

/// Board construction parameters.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BoardConfig {
    /// Number of columns.
    pub width: u8,
    /// Number of rows.
    pub height: u8,
    /// Number of distinct tile kinds, `3..=MAX_TILE_KINDS`.
    pub kinds: u8,
}

impl BoardConfig {
    pub fn new(width: u8, height: u8, kinds: u8) -> Self {
        Self {
            width,
            height,
            kinds,
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.width == 0 || self.height == 0 {
            return Err(ConfigError::ZeroDimension);
        }
        if self.kinds < MIN_TILE_KINDS {
            return Err(ConfigError::TooFewKinds { kinds: self.kinds });
        }
        if self.kinds as usize > MAX_TILE_KINDS {
            return Err(ConfigError::TooManyKinds { kinds: self.kinds });
        }
        Ok(())
    }

    pub fn cell_count(&self) -> usize {
        self.width as usize * self.height as usize
    }
}

impl Default for BoardConfig {
    /// The classic 8x8 board with five kinds.
    fn default() -> Self {
        Self {
            width: 8,
            height: 8,
            kinds: 5,
        }
    }
}

/// Invalid board construction parameters.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigError {
    ZeroDimension,
    TooFewKinds { kinds: u8 },
    TooManyKinds { kinds: u8 },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::ZeroDimension => write!(f, "board dimensions must be positive"),
            ConfigError::TooFewKinds { kinds } => {
                write!(f, "{kinds} tile kinds configured, need at least {MIN_TILE_KINDS}")
            }
            ConfigError::TooManyKinds { kinds } => {
                write!(f, "{kinds} tile kinds configured, cap is {MAX_TILE_KINDS}")
            }
        }
    }
}

impl Error for ConfigError {}

/// Board access and consistency failures.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BoardError {
    /// Coordinate outside `[0, width) x [0, height)`. A caller bug.
    OutOfBounds { x: i16, y: i16 },
    /// A cell's recorded coordinate disagrees with the slot table. The board
    /// is corrupted; the episode must halt rather than continue on bad state.
    MisplacedCell { cell: CellId },
}

impl fmt::Display for BoardError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BoardError::OutOfBounds { x, y } => {
                write!(f, "coordinate ({x}, {y}) is outside the board")
            }
            BoardError::MisplacedCell { cell } => {
                write!(f, "cell {} is not at its recorded coordinate", cell.0)
            }
        }
    }
}

impl Error for BoardError {}

/// Why a swap request was rejected before any state change.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SwapError {
    /// One of the coordinates is off the board.
    OutOfBounds { x: i16, y: i16 },
    /// The cells are not cardinal neighbors.
    NotAdjacent,
    /// A cascade episode is resolving; input is rejected, not queued.
    Locked,
    /// The board failed a consistency check mid-swap.
    Corrupted(BoardError),
}

impl SwapError {
    /// Short machine-readable code, mainly for host-side logging.
    pub fn code(self) -> &'static str {
        match self {
            SwapError::OutOfBounds { .. } => "out_of_bounds",
            SwapError::NotAdjacent => "not_adjacent",
            SwapError::Locked => "locked",
            SwapError::Corrupted(_) => "corrupted",
        }
    }
}

impl fmt::Display for SwapError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SwapError::OutOfBounds { x, y } => {
                write!(f, "swap coordinate ({x}, {y}) is outside the board")
            }
            SwapError::NotAdjacent => write!(f, "swap cells are not adjacent"),
            SwapError::Locked => write!(f, "board is locked while a cascade resolves"),
            SwapError::Corrupted(e) => write!(f, "swap aborted: {e}"),
        }
    }
}

impl Error for SwapError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            SwapError::Corrupted(e) => Some(e),
            _ => None,
        }
    }
}
