//! CLI command implementations.
//!
//! This module contains the implementation of each CLI command.

pub mod build;
pub mod configs;
pub mod history;
pub mod parts;
pub mod play;
pub mod stats;

use owo_colors::OwoColorize;
use xscore_core::{Composite, Player};

/// Player 1 in blue, player 2 in red
pub fn paint(player: Player, text: &str) -> String {
    match player {
        Player::One => text.blue().to_string(),
        Player::Two => text.red().to_string(),
    }
}

/// Look up a 1-based list number
pub fn nth<T>(items: &[T], number: usize) -> Option<&T> {
    number.checked_sub(1).and_then(|index| items.get(index))
}

pub fn print_composites(composites: &[Composite]) {
    for (index, composite) in composites.iter().enumerate() {
        println!("{:>3}. {}", index + 1, composite.name());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_nth_is_one_based() {
        let items = ["a", "b"];
        assert_eq!(nth(&items, 0), None);
        assert_eq!(nth(&items, 1), Some(&"a"));
        assert_eq!(nth(&items, 2), Some(&"b"));
        assert_eq!(nth(&items, 3), None);
    }
}
