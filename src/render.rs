//! Plain-text rendering of a game board, shared by the console front ends.

use crate::game::Game;
use crate::types::{Slot, TowerId};

/// Instructions for playing the puzzle, including the legend used by `render_board`.
pub const HELP_MESSAGE: &str = "\
The Tower of Hanoi is an old puzzle in which you must move every Disk from the
first Tower (the leftmost one) to the last Tower (the rightmost one).

  * Only the topmost Disk of a Tower can be moved.
  * A Disk can never be placed on top of a smaller Disk.
  * Disks always fall as far down a Tower as possible.
  * Your first move must be from Tower 1.

Disk sizes are represented by numbers. [1] means 'A Disk with size 1.'
[ ] means 'This spot is empty.'";

/// Renders all three towers side by side, with tower numbers as a header.
///
/// ```text
///  1   2   3
/// [1] [ ] [ ]
/// [2] [ ] [ ]
/// ```
pub fn render_board(game: &Game) -> String {
    let width = game.disks().to_string().len();

    let header = TowerId::ALL
        .iter()
        .map(|id| format!("{:^w$}", id.number(), w = width + 2))
        .collect::<Vec<_>>()
        .join(" ");

    let mut lines = vec![header.trim_end().to_string()];
    lines.extend(game.render_state().iter().map(|row| {
        row.iter()
            .map(|slot| render_slot(*slot, width))
            .collect::<Vec<_>>()
            .join(" ")
    }));

    lines.join("\n")
}

fn render_slot(slot: Slot, width: usize) -> String {
    match slot {
        Slot::Occupied(disk) => format!("[{:^width$}]", disk.size()),
        Slot::Empty => format!("[{:width$}]", ""),
    }
}
