use std::time::Duration;

use snake_cli::{Simulation, SimulationConfig};
use snake_core::{CellCoord, Command, Direction};
use snake_rendering::{palette, CellPresentation, Drawable, FrameInput};
use snake_world::query;

const TICK: Duration = Duration::from_millis(100);
const FAR_CORNER: CellCoord = CellCoord::new(0, 0);

fn simulation() -> Simulation {
    let mut simulation = Simulation::new(SimulationConfig::default());
    simulation.submit(Command::PlaceFood { cell: FAR_CORNER });
    simulation
}

fn head_pixels(simulation: &Simulation) -> (u32, u32) {
    let world = simulation.world();
    query::board(world).pixel_origin(query::head(world).expect("snake has a head"))
}

fn press(simulation: &mut Simulation, heading: Direction) {
    let input = FrameInput {
        direction_presses: vec![heading],
    };
    assert!(simulation.advance(TICK, &input));
}

/// Drops food in front of the head; the snake walks onto it and eats it on
/// the following tick.
fn feed(simulation: &mut Simulation) {
    let world = simulation.world();
    let ahead = query::board(world).step(
        query::head(world).expect("snake has a head"),
        query::heading(world),
    );
    simulation.submit(Command::PlaceFood { cell: ahead });
    simulation.tick();
    simulation.tick();
}

/// Feeds the snake until its body reaches `length`, then parks the food in
/// the far corner.
fn grow_to(simulation: &mut Simulation, length: usize) {
    while query::snake(simulation.world()).body.len() < length {
        feed(simulation);
    }
    simulation.submit(Command::PlaceFood { cell: FAR_CORNER });
    assert_eq!(query::snake(simulation.world()).body.len(), length);
}

#[test]
fn first_food_is_placed_off_the_snake() {
    let simulation = Simulation::new(SimulationConfig::default());
    let world = simulation.world();

    let food = query::food(world).expect("food placed at start-up");
    assert!(!query::occupied_cells(world).contains(&food));
}

#[test]
fn three_idle_ticks_move_the_head_sixty_pixels_right() {
    let mut simulation = simulation();
    assert_eq!(head_pixels(&simulation), (320, 240));

    for _ in 0..3 {
        assert!(simulation.advance(TICK, &FrameInput::default()));
    }

    assert_eq!(head_pixels(&simulation), (380, 240));
    let snake = query::snake(simulation.world());
    assert_eq!(snake.body, vec![CellCoord::new(19, 12)]);
    assert_eq!(snake.target_length, 1);
}

#[test]
fn right_edge_wraps_to_left_edge() {
    let mut simulation = simulation();
    for _ in 0..15 {
        simulation.tick();
    }
    assert_eq!(head_pixels(&simulation), (620, 240));

    simulation.tick();

    assert_eq!(head_pixels(&simulation), (0, 240));
}

#[test]
fn bottom_edge_wraps_to_top_edge() {
    let mut simulation = simulation();
    press(&mut simulation, Direction::Down);
    for _ in 0..10 {
        simulation.tick();
    }
    assert_eq!(head_pixels(&simulation), (320, 460));

    simulation.tick();

    assert_eq!(head_pixels(&simulation), (320, 0));
}

#[test]
fn eating_grows_by_one_and_moves_the_food() {
    let mut simulation = simulation();
    simulation.submit(Command::PlaceFood {
        cell: CellCoord::new(17, 12),
    });

    simulation.tick();
    simulation.tick();

    let world = simulation.world();
    let snake = query::snake(world);
    assert_eq!(snake.target_length, 2);
    assert_eq!(snake.body, vec![CellCoord::new(18, 12), CellCoord::new(17, 12)]);
    let food = query::food(world).expect("food relocated");
    assert!(!query::occupied_cells(world).contains(&food));
}

#[test]
fn reverse_press_is_ignored() {
    let mut simulation = simulation();

    press(&mut simulation, Direction::Left);

    assert_eq!(query::heading(simulation.world()), Direction::Right);
    assert_eq!(head_pixels(&simulation), (340, 240));
}

#[test]
fn tight_u_turn_of_four_segments_chases_its_own_tail() {
    let mut simulation = simulation();
    grow_to(&mut simulation, 4);
    let head = query::head(simulation.world()).expect("snake has a head");
    let board = query::board(simulation.world());

    press(&mut simulation, Direction::Up);
    press(&mut simulation, Direction::Left);
    press(&mut simulation, Direction::Down);

    // The tail leaves the cell before the head enters it.
    let snake = query::snake(simulation.world());
    assert_eq!(snake.body.len(), 4);
    assert_eq!(snake.target_length, 4);
    assert_eq!(
        query::head(simulation.world()),
        Some(board.step(head, Direction::Left))
    );
}

#[test]
fn stalled_frame_advances_one_cell() {
    let mut simulation = simulation();

    assert!(simulation.advance(Duration::from_secs(2), &FrameInput::default()));

    assert_eq!(head_pixels(&simulation), (340, 240));
}

#[test]
fn self_collision_restarts_the_round() {
    let mut simulation = simulation();
    grow_to(&mut simulation, 5);

    press(&mut simulation, Direction::Up);
    press(&mut simulation, Direction::Left);
    press(&mut simulation, Direction::Down);

    let world = simulation.world();
    let center = query::board(world).center();
    let snake = query::snake(world);
    assert_eq!(snake.body, vec![center]);
    assert_eq!(snake.target_length, 1);
    let food = query::food(world).expect("food relocated after reset");
    assert_ne!(food, center);
}

#[test]
fn scene_reflects_world_state() {
    let simulation = simulation();
    let scene = simulation.scene();

    assert_eq!(scene.board.width(), 640.0);
    assert_eq!(scene.board.height(), 480.0);
    let food = scene.food.expect("food in scene");
    assert_eq!(food.cells(), &[CellPresentation::new(0, 0)]);
    assert_eq!(food.fill(), palette::FOOD);
    assert_eq!(scene.snake.cells().len(), 1);
    assert_eq!(scene.snake.fill(), palette::SNAKE);

    let presentation = simulation.presentation();
    assert_eq!(presentation.window_title, "Snake");
    assert_eq!(presentation.clear_color, palette::BACKGROUND);
}
