#![deny(
    unsafe_code,
    missing_docs,
    dead_code,
    unused_results,
    non_snake_case,
    unreachable_pub
)]

//! Core contracts shared across the Snake engine.
//!
//! This crate defines the message surface that connects adapters, the
//! authoritative world, and pure systems. Adapters submit [`Command`] values
//! describing desired mutations, the world executes those commands via its
//! `apply` entry point, and then broadcasts [`Event`] values for systems to
//! react to. Systems consume event streams, query immutable snapshots, and
//! respond exclusively with new command batches.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Title shown on the game window.
pub const WINDOW_TITLE: &str = "Snake";

/// Commands that express all permissible world mutations.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Command {
    /// Replaces the board and restarts the round on it.
    ConfigureBoard {
        /// Board geometry the world should adopt.
        board: Board,
    },
    /// Checks whether the head rests on the food and grows the snake if so.
    ConsumeFood,
    /// Queues a heading change applied by the next advance.
    SteerSnake {
        /// Heading requested by the player.
        heading: Direction,
    },
    /// Moves the snake one cell along its heading.
    AdvanceSnake,
    /// Places the food on the provided cell.
    PlaceFood {
        /// Cell that should hold the food.
        cell: CellCoord,
    },
}

/// Events broadcast by the world after processing commands.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Event {
    /// Announces that the world adopted a new board.
    BoardConfigured {
        /// Board now in effect.
        board: Board,
    },
    /// Confirms that the snake's head consumed the food.
    FoodEaten {
        /// Cell the food occupied.
        cell: CellCoord,
        /// Target length after growing.
        target_length: usize,
    },
    /// Confirms that food was placed on the board.
    FoodPlaced {
        /// Cell now holding the food.
        cell: CellCoord,
    },
    /// Reports that a food placement request was rejected.
    FoodRejected {
        /// Cell provided in the placement request.
        cell: CellCoord,
        /// Specific reason the placement failed.
        reason: PlacementError,
    },
    /// Confirms that a queued heading was accepted as the current heading.
    HeadingChanged {
        /// Heading before the change.
        from: Direction,
        /// Heading after the change.
        to: Direction,
    },
    /// Reports that a steering request reversed the current heading.
    HeadingRejected {
        /// Heading that was requested.
        requested: Direction,
        /// Heading that remains in effect.
        current: Direction,
    },
    /// Confirms that the snake advanced by one cell.
    SnakeAdvanced {
        /// Head cell before the move.
        from: CellCoord,
        /// Head cell after the move.
        to: CellCoord,
        /// Tail cell released by the move, if the snake did not grow.
        vacated: Option<CellCoord>,
    },
    /// Reports that the head ran into the snake's own body.
    SnakeCollided {
        /// Cell where the collision happened.
        cell: CellCoord,
    },
    /// Announces that the snake was returned to its initial state.
    SnakeReset {
        /// Single cell occupied after the reset.
        cell: CellCoord,
        /// Heading chosen for the new round.
        heading: Direction,
    },
}

/// Cardinal headings available to the snake.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction {
    /// Movement toward decreasing row indices.
    Up,
    /// Movement toward increasing row indices.
    Down,
    /// Movement toward decreasing column indices.
    Left,
    /// Movement toward increasing column indices.
    Right,
}

impl Direction {
    /// All headings in a fixed order.
    pub const ALL: [Direction; 4] = [
        Direction::Up,
        Direction::Down,
        Direction::Left,
        Direction::Right,
    ];

    /// Unit vector of the heading as `(column delta, row delta)`.
    #[must_use]
    pub const fn delta(self) -> (i64, i64) {
        match self {
            Self::Up => (0, -1),
            Self::Down => (0, 1),
            Self::Left => (-1, 0),
            Self::Right => (1, 0),
        }
    }

    /// Heading pointing the other way.
    #[must_use]
    pub const fn opposite(self) -> Self {
        match self {
            Self::Up => Self::Down,
            Self::Down => Self::Up,
            Self::Left => Self::Right,
            Self::Right => Self::Left,
        }
    }

    /// Reports whether `other` is the exact reverse of this heading.
    #[must_use]
    pub fn is_opposite(self, other: Direction) -> bool {
        self.opposite() == other
    }
}

/// Location of a single grid cell expressed as column and row coordinates.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct CellCoord {
    column: u32,
    row: u32,
}

impl CellCoord {
    /// Creates a new grid cell coordinate.
    #[must_use]
    pub const fn new(column: u32, row: u32) -> Self {
        Self { column, row }
    }

    /// Zero-based column index of the cell.
    #[must_use]
    pub const fn column(&self) -> u32 {
        self.column
    }

    /// Zero-based row index of the cell.
    #[must_use]
    pub const fn row(&self) -> u32 {
        self.row
    }
}

/// Toroidal playing field made of square cells.
///
/// Moving past one edge re-enters from the opposite edge, so every cell has
/// exactly four neighbours regardless of its position.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Board {
    columns: u32,
    rows: u32,
    cell_length: u32,
}

impl Board {
    /// Reference window width in pixels.
    pub const REFERENCE_WIDTH: u32 = 640;
    /// Reference window height in pixels.
    pub const REFERENCE_HEIGHT: u32 = 480;
    /// Reference side length of a cell in pixels.
    pub const REFERENCE_CELL_LENGTH: u32 = 20;

    /// Creates a board measured in whole cells.
    pub fn new(columns: u32, rows: u32, cell_length: u32) -> Result<Self, BoardError> {
        if columns == 0 {
            return Err(BoardError::ZeroColumns);
        }
        if rows == 0 {
            return Err(BoardError::ZeroRows);
        }
        if cell_length == 0 {
            return Err(BoardError::ZeroCellLength);
        }

        Ok(Self {
            columns,
            rows,
            cell_length,
        })
    }

    /// Creates a board from pixel dimensions that divide evenly into cells.
    pub fn from_pixels(width: u32, height: u32, cell_length: u32) -> Result<Self, BoardError> {
        if cell_length == 0 {
            return Err(BoardError::ZeroCellLength);
        }
        for dimension in [width, height] {
            if dimension % cell_length != 0 {
                return Err(BoardError::MisalignedDimension {
                    dimension,
                    cell_length,
                });
            }
        }

        Self::new(width / cell_length, height / cell_length, cell_length)
    }

    /// Number of cell columns.
    #[must_use]
    pub const fn columns(&self) -> u32 {
        self.columns
    }

    /// Number of cell rows.
    #[must_use]
    pub const fn rows(&self) -> u32 {
        self.rows
    }

    /// Side length of a single cell in pixels.
    #[must_use]
    pub const fn cell_length(&self) -> u32 {
        self.cell_length
    }

    /// Board width in pixels.
    #[must_use]
    pub const fn pixel_width(&self) -> u32 {
        self.columns * self.cell_length
    }

    /// Board height in pixels.
    #[must_use]
    pub const fn pixel_height(&self) -> u32 {
        self.rows * self.cell_length
    }

    /// Total number of cells on the board.
    #[must_use]
    pub fn cell_count(&self) -> usize {
        let count = u64::from(self.columns) * u64::from(self.rows);
        usize::try_from(count).unwrap_or(usize::MAX)
    }

    /// Cell the snake starts from and returns to after a collision.
    #[must_use]
    pub const fn center(&self) -> CellCoord {
        CellCoord::new(self.columns / 2, self.rows / 2)
    }

    /// Reports whether the cell lies on the board.
    #[must_use]
    pub const fn contains(&self, cell: CellCoord) -> bool {
        cell.column() < self.columns && cell.row() < self.rows
    }

    /// Upper-left pixel of the cell.
    #[must_use]
    pub const fn pixel_origin(&self, cell: CellCoord) -> (u32, u32) {
        (
            cell.column() * self.cell_length,
            cell.row() * self.cell_length,
        )
    }

    /// Neighbouring cell in the given heading, wrapping around the edges.
    #[must_use]
    pub fn step(&self, cell: CellCoord, direction: Direction) -> CellCoord {
        let (column_delta, row_delta) = direction.delta();
        CellCoord::new(
            wrap(cell.column(), column_delta, self.columns),
            wrap(cell.row(), row_delta, self.rows),
        )
    }
}

impl Default for Board {
    fn default() -> Self {
        Self {
            columns: Self::REFERENCE_WIDTH / Self::REFERENCE_CELL_LENGTH,
            rows: Self::REFERENCE_HEIGHT / Self::REFERENCE_CELL_LENGTH,
            cell_length: Self::REFERENCE_CELL_LENGTH,
        }
    }
}

fn wrap(value: u32, delta: i64, bound: u32) -> u32 {
    let wrapped = (i64::from(value) + delta).rem_euclid(i64::from(bound));
    // rem_euclid keeps the result within 0..bound, which always fits in u32.
    wrapped as u32
}

/// Reasons a board description may be rejected.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
pub enum BoardError {
    /// Boards need at least one column.
    #[error("board must have at least one column")]
    ZeroColumns,
    /// Boards need at least one row.
    #[error("board must have at least one row")]
    ZeroRows,
    /// Cells must cover at least one pixel.
    #[error("cell length must be positive")]
    ZeroCellLength,
    /// A pixel dimension does not divide into whole cells.
    #[error("dimension {dimension} is not a multiple of the cell length {cell_length}")]
    MisalignedDimension {
        /// Offending dimension in pixels.
        dimension: u32,
        /// Cell length it was divided by.
        cell_length: u32,
    },
}

/// Reasons a food placement request may be rejected by the world.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PlacementError {
    /// The requested cell lies outside the board.
    OutOfBounds,
    /// The requested cell is covered by the snake.
    Occupied,
}

/// Immutable representation of the snake used for queries.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SnakeSnapshot {
    /// Occupied cells ordered from head to tail.
    pub body: Vec<CellCoord>,
    /// Heading currently in effect.
    pub heading: Direction,
    /// Length the body grows toward.
    pub target_length: usize,
}
