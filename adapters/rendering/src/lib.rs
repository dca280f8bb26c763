#![deny(
    unsafe_code,
    missing_docs,
    dead_code,
    unused_results,
    non_snake_case,
    unreachable_pub
)]

//! Shared rendering contracts for Snake adapters.

use anyhow::Result as AnyResult;
use glam::Vec2;
use snake_core::{Board, CellCoord, Direction};
use std::time::Duration;

/// Colors used by the game's presentation.
pub mod palette {
    use super::Color;

    /// Frame background.
    pub const BACKGROUND: Color = Color::from_rgb_u8(0, 0, 0);
    /// Outline drawn around every occupied cell.
    pub const BORDER: Color = Color::from_rgb_u8(93, 216, 228);
    /// Fill of the food cell.
    pub const FOOD: Color = Color::from_rgb_u8(255, 0, 0);
    /// Fill of the snake's cells.
    pub const SNAKE: Color = Color::from_rgb_u8(0, 255, 0);
}

/// RGBA color used when presenting frames.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Color {
    /// Red channel intensity in the range 0.0..=1.0.
    pub red: f32,
    /// Green channel intensity in the range 0.0..=1.0.
    pub green: f32,
    /// Blue channel intensity in the range 0.0..=1.0.
    pub blue: f32,
    /// Alpha channel intensity in the range 0.0..=1.0.
    pub alpha: f32,
}

impl Color {
    /// Creates an opaque color from byte RGB values.
    #[must_use]
    pub const fn from_rgb_u8(red: u8, green: u8, blue: u8) -> Self {
        Self {
            red: red as f32 / 255.0,
            green: green as f32 / 255.0,
            blue: blue as f32 / 255.0,
            alpha: 1.0,
        }
    }
}

/// Input snapshot gathered by adapters before updating the scene.
#[derive(Clone, Debug, PartialEq, Eq, Default)]
pub struct FrameInput {
    /// Directional keys pressed during this frame, in the order observed.
    pub direction_presses: Vec<Direction>,
}

/// Anything placed on the board that can be drawn as filled cells.
pub trait Drawable {
    /// Cells covered by the object.
    fn cells(&self) -> &[CellPresentation];

    /// Fill color of every cell.
    fn fill(&self) -> Color;
}

/// Grid cell expressed in column and row indices.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct CellPresentation {
    /// Zero-based column index of the cell.
    pub column: u32,
    /// Zero-based row index of the cell.
    pub row: u32,
}

impl CellPresentation {
    /// Creates a new cell descriptor.
    #[must_use]
    pub const fn new(column: u32, row: u32) -> Self {
        Self { column, row }
    }
}

impl From<CellCoord> for CellPresentation {
    fn from(cell: CellCoord) -> Self {
        Self::new(cell.column(), cell.row())
    }
}

/// The food cell.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FoodPresentation {
    cell: [CellPresentation; 1],
    color: Color,
}

impl FoodPresentation {
    /// Creates a food descriptor using the standard food color.
    #[must_use]
    pub const fn new(cell: CellPresentation) -> Self {
        Self {
            cell: [cell],
            color: palette::FOOD,
        }
    }
}

impl Drawable for FoodPresentation {
    fn cells(&self) -> &[CellPresentation] {
        &self.cell
    }

    fn fill(&self) -> Color {
        self.color
    }
}

/// The snake's body ordered from head to tail.
#[derive(Clone, Debug, PartialEq)]
pub struct SnakePresentation {
    body: Vec<CellPresentation>,
    color: Color,
}

impl SnakePresentation {
    /// Creates a snake descriptor using the standard snake color.
    #[must_use]
    pub fn new(body: Vec<CellPresentation>) -> Self {
        Self {
            body,
            color: palette::SNAKE,
        }
    }
}

impl Drawable for SnakePresentation {
    fn cells(&self) -> &[CellPresentation] {
        &self.body
    }

    fn fill(&self) -> Color {
        self.color
    }
}

/// Describes the square cell grid adapters draw onto.
///
/// Built from an already validated [`Board`], so the cell length is always
/// positive.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BoardPresentation {
    /// Number of columns contained in the grid.
    pub columns: u32,
    /// Number of rows contained in the grid.
    pub rows: u32,
    /// Side length of a single cell in pixels.
    pub cell_length: f32,
    /// Color of the one pixel outline drawn around occupied cells.
    pub border_color: Color,
}

impl BoardPresentation {
    /// Creates a descriptor matching the world's board.
    #[must_use]
    pub fn from_board(board: Board) -> Self {
        Self {
            columns: board.columns(),
            rows: board.rows(),
            cell_length: board.cell_length() as f32,
            border_color: palette::BORDER,
        }
    }

    /// Total width of the grid in pixels.
    #[must_use]
    pub fn width(&self) -> f32 {
        self.columns as f32 * self.cell_length
    }

    /// Total height of the grid in pixels.
    #[must_use]
    pub fn height(&self) -> f32 {
        self.rows as f32 * self.cell_length
    }

    /// Upper-left corner of the cell in pixels.
    #[must_use]
    pub fn cell_origin(&self, cell: CellPresentation) -> Vec2 {
        Vec2::new(
            cell.column as f32 * self.cell_length,
            cell.row as f32 * self.cell_length,
        )
    }
}

/// Scene description combining the board and its inhabitants.
#[derive(Clone, Debug, PartialEq)]
pub struct Scene {
    /// Grid the scene is drawn on.
    pub board: BoardPresentation,
    /// Food currently on the board.
    pub food: Option<FoodPresentation>,
    /// The snake.
    pub snake: SnakePresentation,
}

impl Scene {
    /// Creates a new scene descriptor.
    #[must_use]
    pub fn new(
        board: BoardPresentation,
        food: Option<FoodPresentation>,
        snake: SnakePresentation,
    ) -> Self {
        Self { board, food, snake }
    }

    /// Objects to draw, food first so the snake is painted over it.
    #[must_use]
    pub fn layers(&self) -> Vec<&dyn Drawable> {
        let mut layers: Vec<&dyn Drawable> = Vec::with_capacity(2);
        if let Some(food) = &self.food {
            layers.push(food);
        }
        layers.push(&self.snake);
        layers
    }
}

/// Presentation descriptor consumed by rendering backends.
#[derive(Clone, Debug, PartialEq)]
pub struct Presentation {
    /// Title used by the created window.
    pub window_title: String,
    /// Solid color used to clear each frame.
    pub clear_color: Color,
    /// Scene content that should be displayed.
    pub scene: Scene,
}

impl Presentation {
    /// Constructs a new presentation descriptor.
    #[must_use]
    pub fn new<T>(window_title: T, clear_color: Color, scene: Scene) -> Self
    where
        T: Into<String>,
    {
        Self {
            window_title: window_title.into(),
            clear_color,
            scene,
        }
    }
}

/// Rendering backend capable of presenting Snake scenes.
pub trait RenderingBackend {
    /// Runs the rendering backend until the window is closed.
    ///
    /// The provided `update_scene` closure receives the elapsed frame time and
    /// the input captured by the adapter, and may mutate the scene before it
    /// is rendered.
    fn run<F>(self, presentation: Presentation, update_scene: F) -> AnyResult<()>
    where
        F: FnMut(Duration, FrameInput, &mut Scene) + 'static;
}
