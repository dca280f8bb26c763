#![deny(
    unsafe_code,
    missing_docs,
    dead_code,
    unused_results,
    non_snake_case,
    unreachable_pub
)]

//! Macroquad-backed rendering adapter for Snake.
//!
//! Macroquad's optional audio stack depends on native ALSA development
//! libraries, so the dependency is declared without its default `audio`
//! feature. The game has no sound.

use anyhow::Result;
use glam::Vec2;
use macroquad::input::{is_key_pressed, is_quit_requested, prevent_quit, KeyCode};
use snake_core::Direction;
use snake_rendering::{Color, FrameInput, Presentation, RenderingBackend, Scene};
use std::time::Duration;

const ARROW_KEYS: [KeyCode; 4] = [KeyCode::Up, KeyCode::Down, KeyCode::Left, KeyCode::Right];
const BORDER_THICKNESS: f32 = 1.0;

/// Rendering backend implemented on top of macroquad.
#[derive(Debug, Default)]
pub struct MacroquadBackend {
    swap_interval: Option<i32>,
}

impl MacroquadBackend {
    /// Returns a backend that requests the platform's default swap interval.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Configures the backend to request a specific swap interval from the platform.
    #[must_use]
    pub fn with_swap_interval(mut self, swap_interval: Option<i32>) -> Self {
        self.swap_interval = swap_interval;
        self
    }

    /// Configures the backend to either synchronise presentation with the display refresh rate
    /// or render as fast as possible.
    #[must_use]
    pub fn with_vsync(self, enabled: bool) -> Self {
        let swap_interval = if enabled { Some(1) } else { Some(0) };
        self.with_swap_interval(swap_interval)
    }
}

impl RenderingBackend for MacroquadBackend {
    fn run<F>(self, presentation: Presentation, mut update_scene: F) -> Result<()>
    where
        F: FnMut(Duration, FrameInput, &mut Scene) + 'static,
    {
        let Self { swap_interval } = self;
        let Presentation {
            window_title,
            clear_color,
            scene,
        } = presentation;

        let mut config = macroquad::window::Conf {
            window_title,
            window_width: scene.board.width().round() as i32,
            window_height: scene.board.height().round() as i32,
            window_resizable: false,
            ..macroquad::window::Conf::default()
        };
        if let Some(swap_interval) = swap_interval {
            config.platform.swap_interval = Some(swap_interval);
        }
        log::info!(
            "opening {}x{} window",
            config.window_width,
            config.window_height
        );

        macroquad::Window::from_config(config, async move {
            let mut scene = scene;
            let background = to_macroquad_color(clear_color);
            prevent_quit();

            loop {
                if is_quit_requested() {
                    log::info!("window close requested");
                    break;
                }

                let dt_seconds = macroquad::time::get_frame_time();
                let frame_dt = Duration::from_secs_f32(dt_seconds.max(0.0));
                let frame_input = gather_frame_input(is_key_pressed);

                update_scene(frame_dt, frame_input, &mut scene);

                macroquad::window::clear_background(background);
                for rectangle in cell_rectangles(&scene) {
                    draw_cell(rectangle);
                }

                macroquad::window::next_frame().await;
            }
        });

        Ok(())
    }
}

/// Maps an arrow key to the heading it requests.
fn direction_for_key(key: KeyCode) -> Option<Direction> {
    match key {
        KeyCode::Up => Some(Direction::Up),
        KeyCode::Down => Some(Direction::Down),
        KeyCode::Left => Some(Direction::Left),
        KeyCode::Right => Some(Direction::Right),
        _ => None,
    }
}

fn gather_frame_input<P>(is_pressed: P) -> FrameInput
where
    P: Fn(KeyCode) -> bool,
{
    let direction_presses = ARROW_KEYS
        .into_iter()
        .filter(|key| is_pressed(*key))
        .filter_map(direction_for_key)
        .collect();

    FrameInput { direction_presses }
}

/// One filled, outlined cell in screen space.
#[derive(Clone, Copy, Debug, PartialEq)]
struct CellRectangle {
    origin: Vec2,
    side: f32,
    fill: Color,
    border: Color,
}

fn cell_rectangles(scene: &Scene) -> Vec<CellRectangle> {
    let board = scene.board;
    scene
        .layers()
        .into_iter()
        .flat_map(|layer| {
            let fill = layer.fill();
            layer.cells().iter().map(move |cell| CellRectangle {
                origin: board.cell_origin(*cell),
                side: board.cell_length,
                fill,
                border: board.border_color,
            })
        })
        .collect()
}

fn draw_cell(rectangle: CellRectangle) {
    let CellRectangle {
        origin,
        side,
        fill,
        border,
    } = rectangle;
    macroquad::shapes::draw_rectangle(origin.x, origin.y, side, side, to_macroquad_color(fill));
    macroquad::shapes::draw_rectangle_lines(
        origin.x,
        origin.y,
        side,
        side,
        BORDER_THICKNESS,
        to_macroquad_color(border),
    );
}

fn to_macroquad_color(color: Color) -> macroquad::color::Color {
    macroquad::color::Color::new(color.red, color.green, color.blue, color.alpha)
}
