#![deny(
    unsafe_code,
    missing_docs,
    dead_code,
    unused_results,
    non_snake_case,
    unreachable_pub
)]

//! Steering system that turns directional key presses into heading commands.

use snake_core::{Command, Direction};

/// Maps the presses observed in one polling pass to a heading change.
///
/// Presses that would reverse `current` are ignored. When several valid
/// presses arrive together the last one wins.
#[must_use]
pub fn steer(presses: &[Direction], current: Direction) -> Option<Direction> {
    presses
        .iter()
        .copied()
        .filter(|heading| !heading.is_opposite(current))
        .last()
}

/// Latches at most one heading change between two ticks.
#[derive(Debug, Default)]
pub struct Steering {
    latched: Option<Direction>,
}

impl Steering {
    /// Creates a steering latch with nothing queued.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Records the presses of a polling pass against the current heading.
    pub fn observe(&mut self, presses: &[Direction], current: Direction) {
        if let Some(heading) = steer(presses, current) {
            self.latched = Some(heading);
        }
    }

    /// Emits the latched heading as a steering command and clears the latch.
    pub fn handle(&mut self, out: &mut Vec<Command>) {
        if let Some(heading) = self.latched.take() {
            out.push(Command::SteerSnake { heading });
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_presses_yield_nothing() {
        assert_eq!(steer(&[], Direction::Up), None);
    }

    #[test]
    fn reverse_press_is_ignored() {
        assert_eq!(steer(&[Direction::Left], Direction::Right), None);
        assert_eq!(steer(&[Direction::Down], Direction::Up), None);
    }

    #[test]
    fn last_valid_press_wins() {
        let presses = [Direction::Up, Direction::Down, Direction::Left];
        assert_eq!(steer(&presses, Direction::Right), Some(Direction::Down));
    }

    #[test]
    fn same_heading_is_passed_through() {
        assert_eq!(
            steer(&[Direction::Right], Direction::Right),
            Some(Direction::Right)
        );
    }

    #[test]
    fn latch_is_cleared_after_handling() {
        let mut steering = Steering::new();
        steering.observe(&[Direction::Up], Direction::Right);

        let mut commands = Vec::new();
        steering.handle(&mut commands);
        steering.handle(&mut commands);

        assert_eq!(
            commands,
            vec![Command::SteerSnake {
                heading: Direction::Up,
            }]
        );
    }
}
