#![deny(
    unsafe_code,
    missing_docs,
    dead_code,
    unused_results,
    non_snake_case,
    unreachable_pub
)]

//! Authoritative world state management for Snake.

use std::collections::VecDeque;

use rand::{seq::SliceRandom, SeedableRng};
use rand_chacha::ChaCha8Rng;
use snake_core::{Board, CellCoord, Command, Direction, Event, PlacementError};

const DEFAULT_SEED: u64 = 0x5a4e_1b3c_77d2_09e1;
const INITIAL_HEADING: Direction = Direction::Right;
const INITIAL_LENGTH: usize = 1;

/// Body cells at indices below this offset never count as a collision.
const COLLISION_SKIP: usize = 2;

/// Represents the authoritative Snake world state.
#[derive(Debug)]
pub struct World {
    board: Board,
    snake: Snake,
    food: Option<CellCoord>,
    rng: ChaCha8Rng,
}

impl World {
    /// Creates a world on the reference board using a fixed seed.
    #[must_use]
    pub fn new() -> Self {
        Self::with_seed(DEFAULT_SEED)
    }

    /// Creates a world on the reference board whose reset headings derive
    /// from `seed`.
    #[must_use]
    pub fn with_seed(seed: u64) -> Self {
        let board = Board::default();
        Self {
            snake: Snake::spawn(board.center(), INITIAL_HEADING),
            food: None,
            rng: ChaCha8Rng::seed_from_u64(seed),
            board,
        }
    }

    fn reset_snake(&mut self, out_events: &mut Vec<Event>) {
        let heading = Direction::ALL
            .choose(&mut self.rng)
            .copied()
            .unwrap_or(INITIAL_HEADING);
        let cell = self.board.center();
        self.snake = Snake::spawn(cell, heading);
        self.food = None;
        out_events.push(Event::SnakeReset { cell, heading });
    }

    fn advance_snake(&mut self, out_events: &mut Vec<Event>) {
        let snake = &mut self.snake;
        let Some(from) = snake.head() else {
            return;
        };

        if let Some(queued) = snake.queued.take() {
            if queued != snake.heading && !queued.is_opposite(snake.heading) {
                out_events.push(Event::HeadingChanged {
                    from: snake.heading,
                    to: queued,
                });
                snake.heading = queued;
            }
        }

        let to = self.board.step(from, snake.heading);
        snake.body.push_front(to);

        let vacated = if snake.body.len() > snake.target_length {
            snake.body.pop_back()
        } else {
            None
        };
        out_events.push(Event::SnakeAdvanced { from, to, vacated });

        if snake.body.iter().skip(COLLISION_SKIP).any(|cell| *cell == to) {
            out_events.push(Event::SnakeCollided { cell: to });
            self.reset_snake(out_events);
        }
    }
}

impl Default for World {
    fn default() -> Self {
        Self::new()
    }
}

/// Applies the provided command to the world, mutating state deterministically.
pub fn apply(world: &mut World, command: Command, out_events: &mut Vec<Event>) {
    match command {
        Command::ConfigureBoard { board } => {
            world.board = board;
            world.snake = Snake::spawn(board.center(), INITIAL_HEADING);
            world.food = None;
            out_events.push(Event::BoardConfigured { board });
            out_events.push(Event::SnakeReset {
                cell: board.center(),
                heading: INITIAL_HEADING,
            });
        }
        Command::ConsumeFood => {
            let Some(food) = world.food else {
                return;
            };
            if world.snake.head() == Some(food) {
                world.snake.target_length = world.snake.target_length.saturating_add(1);
                world.food = None;
                out_events.push(Event::FoodEaten {
                    cell: food,
                    target_length: world.snake.target_length,
                });
            }
        }
        Command::SteerSnake { heading } => {
            let current = world.snake.heading;
            if heading.is_opposite(current) {
                out_events.push(Event::HeadingRejected {
                    requested: heading,
                    current,
                });
            } else {
                world.snake.queued = Some(heading);
            }
        }
        Command::AdvanceSnake => world.advance_snake(out_events),
        Command::PlaceFood { cell } => {
            if !world.board.contains(cell) {
                out_events.push(Event::FoodRejected {
                    cell,
                    reason: PlacementError::OutOfBounds,
                });
            } else if world.snake.occupies(cell) {
                out_events.push(Event::FoodRejected {
                    cell,
                    reason: PlacementError::Occupied,
                });
            } else {
                world.food = Some(cell);
                out_events.push(Event::FoodPlaced { cell });
            }
        }
    }
}

/// Query functions that provide read-only access to the world state.
pub mod query {
    use std::collections::HashSet;

    use super::World;
    use snake_core::{Board, CellCoord, Direction, SnakeSnapshot};

    /// Provides the board the world currently plays on.
    #[must_use]
    pub fn board(world: &World) -> Board {
        world.board
    }

    /// Captures a read-only snapshot of the snake.
    #[must_use]
    pub fn snake(world: &World) -> SnakeSnapshot {
        let snake = &world.snake;
        SnakeSnapshot {
            body: snake.body.iter().copied().collect(),
            heading: snake.heading,
            target_length: snake.target_length,
        }
    }

    /// Heading currently in effect.
    #[must_use]
    pub fn heading(world: &World) -> Direction {
        world.snake.heading
    }

    /// Cell occupied by the snake's head.
    #[must_use]
    pub fn head(world: &World) -> Option<CellCoord> {
        world.snake.head()
    }

    /// Cells covered by the snake's body.
    #[must_use]
    pub fn occupied_cells(world: &World) -> HashSet<CellCoord> {
        world.snake.body.iter().copied().collect()
    }

    /// Cell holding the food, if any has been placed since the last meal.
    #[must_use]
    pub fn food(world: &World) -> Option<CellCoord> {
        world.food
    }
}

#[derive(Clone, Debug)]
struct Snake {
    body: VecDeque<CellCoord>,
    heading: Direction,
    queued: Option<Direction>,
    target_length: usize,
}

impl Snake {
    fn spawn(cell: CellCoord, heading: Direction) -> Self {
        Self {
            body: VecDeque::from([cell]),
            heading,
            queued: None,
            target_length: INITIAL_LENGTH,
        }
    }

    fn head(&self) -> Option<CellCoord> {
        self.body.front().copied()
    }

    fn occupies(&self, cell: CellCoord) -> bool {
        self.body.contains(&cell)
    }
}
