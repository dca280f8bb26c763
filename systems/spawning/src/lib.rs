#![deny(
    unsafe_code,
    missing_docs,
    dead_code,
    unused_results,
    non_snake_case,
    unreachable_pub
)]

//! Spawning system responsible for placing food on free cells.

use std::collections::HashSet;

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use snake_core::{Board, CellCoord, Command, Event};

/// Configuration parameters required to construct the spawning system.
#[derive(Clone, Copy, Debug)]
pub struct Config {
    rng_seed: u64,
}

impl Config {
    /// Creates a new configuration using the provided seed.
    #[must_use]
    pub const fn new(rng_seed: u64) -> Self {
        Self { rng_seed }
    }
}

/// System that relocates the food whenever the world asks for it.
#[derive(Debug)]
pub struct FoodSpawner {
    rng: ChaCha8Rng,
}

impl FoodSpawner {
    /// Creates a new spawning system using the supplied configuration.
    #[must_use]
    pub fn new(config: Config) -> Self {
        Self {
            rng: ChaCha8Rng::seed_from_u64(config.rng_seed),
        }
    }

    /// Consumes world events and emits a placement when the food must move.
    ///
    /// At most one placement is emitted per batch, regardless of how many
    /// triggering events it contains.
    pub fn handle(
        &mut self,
        events: &[Event],
        board: Board,
        occupied: &HashSet<CellCoord>,
        out: &mut Vec<Command>,
    ) {
        let needs_food = events.iter().any(|event| {
            matches!(
                event,
                Event::FoodEaten { .. } | Event::SnakeReset { .. } | Event::BoardConfigured { .. }
            )
        });
        if !needs_food {
            return;
        }

        if let Some(cell) = self.place(board, occupied) {
            out.push(Command::PlaceFood { cell });
        }
    }

    /// Draws uniformly random cells until one is not occupied.
    ///
    /// Returns `None` only when every cell of the board is occupied.
    pub fn place(&mut self, board: Board, occupied: &HashSet<CellCoord>) -> Option<CellCoord> {
        let free_cells = board
            .cell_count()
            .saturating_sub(occupied.iter().filter(|cell| board.contains(**cell)).count());
        if free_cells == 0 {
            return None;
        }

        loop {
            let cell = CellCoord::new(
                self.rng.gen_range(0..board.columns()),
                self.rng.gen_range(0..board.rows()),
            );
            if !occupied.contains(&cell) {
                return Some(cell);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn full_board_yields_no_placement() {
        let board = Board::new(2, 2, 10).expect("valid board");
        let occupied: HashSet<_> = (0..2)
            .flat_map(|row| (0..2).map(move |column| CellCoord::new(column, row)))
            .collect();

        let mut spawner = FoodSpawner::new(Config::new(3));
        assert_eq!(spawner.place(board, &occupied), None);
    }

    #[test]
    fn single_free_cell_is_found() {
        let board = Board::new(3, 3, 10).expect("valid board");
        let free = CellCoord::new(2, 1);
        let occupied: HashSet<_> = (0..3)
            .flat_map(|row| (0..3).map(move |column| CellCoord::new(column, row)))
            .filter(|cell| *cell != free)
            .collect();

        let mut spawner = FoodSpawner::new(Config::new(11));
        assert_eq!(spawner.place(board, &occupied), Some(free));
    }

    #[test]
    fn unrelated_events_do_not_place_food() {
        let mut spawner = FoodSpawner::new(Config::new(5));
        let mut commands = Vec::new();

        spawner.handle(
            &[Event::SnakeAdvanced {
                from: CellCoord::new(0, 0),
                to: CellCoord::new(1, 0),
                vacated: Some(CellCoord::new(0, 0)),
            }],
            Board::default(),
            &HashSet::new(),
            &mut commands,
        );

        assert!(commands.is_empty());
    }
}
