#![deny(
    unsafe_code,
    missing_docs,
    dead_code,
    unused_results,
    non_snake_case,
    unreachable_pub
)]

//! Game loop orchestration shared by the `snake` binary and its tests.
//!
//! [`Simulation`] owns the world and every system. Each tick it checks
//! whether the head reached the food, applies at most one latched heading,
//! advances the snake and lets the spawning system answer whatever the world
//! reported.

use std::time::Duration;

use snake_core::{Board, Command, Event, WINDOW_TITLE};
use snake_rendering::{
    palette, BoardPresentation, CellPresentation, FoodPresentation, FrameInput, Presentation,
    Scene, SnakePresentation,
};
use snake_system_spawning::{Config as SpawningConfig, FoodSpawner};
use snake_system_steering::Steering;
use snake_world::{self as world, query, World};

/// Reference tick rate of the game loop.
pub const TICKS_PER_SECOND: u32 = 10;

/// Simulated time between two ticks at the reference rate.
pub const TICK_INTERVAL: Duration = Duration::from_millis(1000 / TICKS_PER_SECOND as u64);

const DEFAULT_WORLD_SEED: u64 = 0x2c1b_3c6d_4e5f_6071;
const DEFAULT_FOOD_SEED: u64 = 0x7f4a_7c15_9e37_79b9;

/// Parameters required to construct a [`Simulation`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SimulationConfig {
    board: Board,
    tick_interval: Duration,
    world_seed: u64,
    food_seed: u64,
}

impl SimulationConfig {
    /// Creates a configuration with explicit board, pacing and seeds.
    #[must_use]
    pub const fn new(board: Board, tick_interval: Duration, world_seed: u64, food_seed: u64) -> Self {
        Self {
            board,
            tick_interval,
            world_seed,
            food_seed,
        }
    }

    /// Board the game is played on.
    #[must_use]
    pub const fn board(&self) -> Board {
        self.board
    }

    /// Simulated time between two ticks.
    #[must_use]
    pub const fn tick_interval(&self) -> Duration {
        self.tick_interval
    }
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self::new(
            Board::default(),
            TICK_INTERVAL,
            DEFAULT_WORLD_SEED,
            DEFAULT_FOOD_SEED,
        )
    }
}

/// Owns the world and its systems for the lifetime of the process.
#[derive(Debug)]
pub struct Simulation {
    world: World,
    spawner: FoodSpawner,
    steering: Steering,
    tick_interval: Duration,
    accumulator: Duration,
}

impl Simulation {
    /// Creates a simulation and places the first food.
    #[must_use]
    pub fn new(config: SimulationConfig) -> Self {
        let mut simulation = Self {
            world: World::with_seed(config.world_seed),
            spawner: FoodSpawner::new(SpawningConfig::new(config.food_seed)),
            steering: Steering::new(),
            tick_interval: config.tick_interval,
            accumulator: Duration::ZERO,
        };
        simulation.submit(Command::ConfigureBoard {
            board: config.board,
        });
        simulation
    }

    /// Read-only access to the authoritative world.
    #[must_use]
    pub fn world(&self) -> &World {
        &self.world
    }

    /// Records the frame's input and runs the tick if one became due.
    ///
    /// At most one tick runs per frame. Time lost to a stalled frame is
    /// dropped rather than replayed, so every tick is drawn.
    ///
    /// Returns whether a tick ran.
    pub fn advance(&mut self, dt: Duration, input: &FrameInput) -> bool {
        self.steering
            .observe(&input.direction_presses, query::heading(&self.world));

        if self.tick_interval.is_zero() {
            return false;
        }

        self.accumulator = self
            .accumulator
            .saturating_add(dt)
            .min(self.tick_interval);
        if self.accumulator < self.tick_interval {
            return false;
        }

        self.accumulator = Duration::ZERO;
        self.tick();
        true
    }

    /// Runs a single tick of the game loop.
    pub fn tick(&mut self) {
        self.submit(Command::ConsumeFood);

        let mut steering_commands = Vec::new();
        self.steering.handle(&mut steering_commands);
        for command in steering_commands {
            self.submit(command);
        }

        self.submit(Command::AdvanceSnake);
    }

    /// Builds the scene shown for the current world state.
    #[must_use]
    pub fn scene(&self) -> Scene {
        let board = BoardPresentation::from_board(query::board(&self.world));
        let food = query::food(&self.world).map(|cell| FoodPresentation::new(cell.into()));
        let body = query::snake(&self.world)
            .body
            .into_iter()
            .map(CellPresentation::from)
            .collect();

        Scene::new(board, food, SnakePresentation::new(body))
    }

    /// Replaces `scene` with the current world state.
    pub fn populate_scene(&self, scene: &mut Scene) {
        *scene = self.scene();
    }

    /// Presentation descriptor used to open the game window.
    #[must_use]
    pub fn presentation(&self) -> Presentation {
        Presentation::new(WINDOW_TITLE, palette::BACKGROUND, self.scene())
    }

    /// Applies a command and lets the systems answer until the world settles.
    pub fn submit(&mut self, command: Command) {
        let mut events = Vec::new();
        world::apply(&mut self.world, command, &mut events);

        while !events.is_empty() {
            for event in &events {
                if let Event::FoodPlaced { cell } = event {
                    log::debug!("food placed at ({}, {})", cell.column(), cell.row());
                }
            }

            let mut commands = Vec::new();
            self.spawner.handle(
                &events,
                query::board(&self.world),
                &query::occupied_cells(&self.world),
                &mut commands,
            );

            events.clear();
            for command in commands {
                world::apply(&mut self.world, command, &mut events);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use snake_core::Direction;

    #[test]
    fn default_config_ticks_ten_times_per_second() {
        let config = SimulationConfig::default();

        assert_eq!(config.tick_interval(), Duration::from_millis(100));
        assert_eq!(config.board(), Board::default());
    }

    #[test]
    fn zero_tick_interval_never_ticks() {
        let config = SimulationConfig::new(Board::default(), Duration::ZERO, 1, 2);
        let mut simulation = Simulation::new(config);

        let ticked = simulation.advance(Duration::from_secs(5), &FrameInput::default());

        assert!(!ticked);
        assert_eq!(
            query::head(simulation.world()),
            Some(Board::default().center())
        );
    }

    #[test]
    fn partial_intervals_accumulate() {
        let mut simulation = Simulation::new(SimulationConfig::default());
        let input = FrameInput::default();

        assert!(!simulation.advance(Duration::from_millis(60), &input));
        assert!(simulation.advance(Duration::from_millis(60), &input));
        assert!(!simulation.advance(Duration::from_millis(60), &input));
    }

    #[test]
    fn stalled_frame_runs_a_single_tick() {
        let mut simulation = Simulation::new(SimulationConfig::default());
        let input = FrameInput::default();
        let start = Board::default().center();

        assert!(simulation.advance(Duration::from_secs(2), &input));
        assert_eq!(
            query::head(simulation.world()),
            Some(Board::default().step(start, Direction::Right))
        );

        // The stalled time is not carried into the next frame.
        assert!(!simulation.advance(Duration::from_millis(10), &input));
        assert!(simulation.advance(Duration::from_millis(90), &input));
    }

    #[test]
    fn steering_input_is_applied_on_the_next_tick() {
        let mut simulation = Simulation::new(SimulationConfig::default());
        let input = FrameInput {
            direction_presses: vec![Direction::Up],
        };

        assert!(!simulation.advance(Duration::from_millis(10), &input));
        assert_eq!(query::heading(simulation.world()), Direction::Right);

        assert!(simulation.advance(Duration::from_millis(90), &FrameInput::default()));
        assert_eq!(query::heading(simulation.world()), Direction::Up);
    }
}
