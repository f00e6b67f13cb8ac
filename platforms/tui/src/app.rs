use action::Action;
use hanoi::{Game, MoveError, MoveOutcome, Slot, TowerId, MAX_DISKS};
use keymap::{Config, KeyMapConfig};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Margin, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span, Text},
    widgets::{Block, BorderType, Borders, Padding, Paragraph},
    Frame,
};
use tracing::debug;

const BLOCK_PADDING: Padding = Padding::new(1, 1, 0, 0);
const DISK_COLORS: [Color; 6] = [
    Color::Red,
    Color::Yellow,
    Color::Green,
    Color::Cyan,
    Color::Blue,
    Color::Magenta,
];

pub struct App {
    game: Game,
    // Source tower chosen by the first key press of a move.
    selected: Option<TowerId>,
    message: String,
    show_help: bool,
    pub(crate) keymap: Config<Action>,
}

impl App {
    pub fn new(game: Game) -> Self {
        Self {
            game,
            selected: None,
            message: "Pick a tower to move from (1, 2, 3). Press 'h' for help.".to_string(),
            show_help: false,
            keymap: Action::keymap_config(),
        }
    }

    pub fn render(&mut self, f: &mut Frame) {
        let inner_area = f.area().inner(Margin::new(1, 0));

        let main_chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3), // Stats
                Constraint::Min(0),    // Towers or help
                Constraint::Length(3), // Status
            ])
            .split(inner_area);

        self.render_stats(f, main_chunks[0]);

        if self.show_help {
            self.render_help(f, main_chunks[1]);
        } else {
            self.render_towers(f, main_chunks[1]);
        }

        self.render_status(f, main_chunks[2]);
    }

    fn render_stats(&self, f: &mut Frame, area: Rect) {
        let (status_text, status_color) = if self.game.is_over() {
            ("SOLVED", Color::Green)
        } else if self.game.num_moves_made() == 0 {
            ("READY", Color::Blue)
        } else {
            ("PLAYING", Color::Yellow)
        };

        let text = vec![Line::from(vec![
            Span::styled("Disks: ", Style::default().fg(Color::Yellow)),
            Span::raw(self.game.disks().to_string()),
            Span::styled(" | Moves: ", Style::default().fg(Color::Yellow)),
            Span::raw(self.game.num_moves_made().to_string()),
            Span::styled(" | Minimum: ", Style::default().fg(Color::Yellow)),
            Span::raw(self.game.min_moves_required().to_string()),
            Span::styled(" | Status: ", Style::default().fg(Color::Yellow)),
            Span::styled(
                status_text,
                Style::default()
                    .fg(status_color)
                    .add_modifier(Modifier::BOLD),
            ),
        ])];

        let paragraph = Paragraph::new(text)
            .block(block("Tower of Hanoi").title_alignment(Alignment::Center));

        f.render_widget(paragraph, area);
    }

    fn render_towers(&self, f: &mut Frame, area: Rect) {
        let columns = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Ratio(1, 3); 3])
            .split(area);

        for (id, column) in TowerId::ALL.into_iter().zip(columns.iter()) {
            let tower = self.game.tower(id);

            let mut lines = vec![Line::from("|")];
            lines.extend(tower.slots().iter().map(|slot| disk_line(*slot)));
            lines.push(Line::from("─".repeat(column.width.saturating_sub(4) as usize)));

            let title = format!("Tower {id}");
            let mut tower_block = block(&title);
            if self.selected == Some(id) {
                tower_block = tower_block.border_style(
                    Style::default()
                        .fg(Color::Yellow)
                        .add_modifier(Modifier::BOLD),
                );
            }

            let paragraph = Paragraph::new(lines)
                .alignment(Alignment::Center)
                .block(tower_block);

            f.render_widget(paragraph, *column);
        }
    }

    fn render_help(&self, f: &mut Frame, area: Rect) {
        let help_text = vec![
            Line::from("Controls:"),
            Line::from("  1 2 3 - Pick the source tower, then the destination tower"),
            Line::from("  Esc - Clear the picked source tower"),
            Line::from("  r - Start over"),
            Line::from("  h - Toggle this help"),
            Line::from("  q - Quit"),
            Line::from(""),
            Line::from("Rules:"),
            Line::from("  Move every disk from tower 1 to tower 3."),
            Line::from("  Only the topmost disk of a tower can be moved."),
            Line::from("  A disk can never rest on a smaller disk."),
            Line::from("  Your first move must be from tower 1."),
            Line::from(format!("  Towers hold up to {MAX_DISKS} disks.")),
        ];

        let paragraph = section("Help", help_text);

        f.render_widget(paragraph, area);
    }

    fn render_status(&self, f: &mut Frame, area: Rect) {
        let status = Text::from(Line::from(vec![
            Span::raw("Selected: "),
            Span::styled(
                self.selected
                    .map_or_else(|| "-".to_string(), |id| id.to_string()),
                Style::default().fg(Color::Yellow),
            ),
            Span::raw(format!(" | {}", self.message)),
        ]));

        f.render_widget(Paragraph::new(status).block(block("Status")), area);
    }

    /// Handles a tower key: the first press picks the source, the second makes the move.
    pub fn select_tower(&mut self, id: TowerId) {
        if self.game.is_over() {
            self.message = "Puzzle solved! Press 'r' to play again.".to_string();
            return;
        }

        let Some(from) = self.selected.take() else {
            self.selected = Some(id);
            self.message = format!("Moving from tower {id}. Pick the destination.");
            return;
        };

        self.message = match self.game.apply_move(from, id) {
            Ok(MoveOutcome::Cancelled) => "Move canceled.".to_string(),
            Ok(MoveOutcome::Moved { disk, from, to }) if self.game.is_over() => {
                debug!(size = disk.size(), %from, %to, "final move");
                format!(
                    "Congratulations, you solved the puzzle in {} moves (minimum {})!",
                    self.game.num_moves_made(),
                    self.game.min_moves_required()
                )
            }
            Ok(MoveOutcome::Moved { disk, from, to }) => {
                format!("Moved disk {} from tower {from} to tower {to}.", disk.size())
            }
            Err(e) => describe(&e).to_string(),
        };
    }

    pub fn cancel_selection(&mut self) {
        if self.selected.take().is_some() {
            self.message = "Selection cleared.".to_string();
        }
    }

    pub fn reset_game(&mut self) {
        self.game.reset();
        self.selected = None;
        self.message = "Game reset".to_string();
    }

    pub fn toggle_help(&mut self) {
        self.show_help = !self.show_help;
    }
}

/// Player-facing explanation of a rejected move.
fn describe(error: &MoveError) -> &'static str {
    match error {
        MoveError::InvalidMove { .. } => {
            "Invalid move! Disks must always be smaller than the disks they are on top of."
        }
        MoveError::NoDisks => "There are no disks on that tower.",
        MoveError::InvalidFirstMove => "Your first move must be from tower 1!",
    }
}

fn disk_line(slot: Slot) -> Line<'static> {
    match slot.disk() {
        Some(disk) => {
            let size = disk.size() as usize;
            let label = format!(" {size} ");
            let bar = format!("{label:=^width$}", width = 2 * size + label.len());
            let color = DISK_COLORS[(size - 1) % DISK_COLORS.len()];
            Line::from(Span::styled(bar, Style::default().fg(color)))
        }
        None => Line::from("|"),
    }
}

fn section<'a>(title: &'a str, content: Vec<Line<'a>>) -> Paragraph<'a> {
    Paragraph::new(content).block(block(title))
}

fn block(title: &str) -> Block {
    Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .title(format!(" {title} "))
        .padding(BLOCK_PADDING)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_two_presses_make_a_move() {
        let mut app = App::new(Game::new(2).unwrap());

        app.select_tower(TowerId::One);
        assert_eq!(app.selected, Some(TowerId::One));
        assert_eq!(app.game.num_moves_made(), 0);

        app.select_tower(TowerId::Two);
        assert_eq!(app.selected, None);
        assert_eq!(app.game.num_moves_made(), 1);
        assert_eq!(app.message, "Moved disk 1 from tower 1 to tower 2.");
    }

    #[test]
    fn test_rejected_move_shows_reason() {
        let mut app = App::new(Game::new(2).unwrap());

        app.select_tower(TowerId::Two);
        app.select_tower(TowerId::One);

        assert_eq!(app.message, "Your first move must be from tower 1!");
        assert_eq!(app.selected, None);
    }

    #[test]
    fn test_solving_and_reset() {
        let mut app = App::new(Game::new(1).unwrap());

        app.select_tower(TowerId::One);
        app.select_tower(TowerId::Three);
        assert!(app.message.starts_with("Congratulations"));

        app.select_tower(TowerId::Two);
        assert_eq!(app.selected, None);

        app.reset_game();
        assert!(!app.game.is_over());
        assert_eq!(app.game.num_moves_made(), 0);
    }

    #[test]
    fn test_cancel_selection() {
        let mut app = App::new(Game::new(3).unwrap());

        app.select_tower(TowerId::One);
        app.cancel_selection();

        assert_eq!(app.selected, None);
        assert_eq!(app.message, "Selection cleared.");
    }

    #[test]
    fn test_disk_line_width_grows_with_size() {
        let small = disk_line(Slot::Occupied(hanoi::Disk::new(1).unwrap()));
        let large = disk_line(Slot::Occupied(hanoi::Disk::new(3).unwrap()));

        assert_eq!(small.width(), 5);
        assert_eq!(large.width(), 9);
        assert_eq!(disk_line(Slot::Empty).width(), 1);
    }
}
