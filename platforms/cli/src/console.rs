//! Prompt-driven console play. Input and output are generic so the dialogue can be driven
//! from a script or a test as well as a terminal.

use hanoi::{
    parse_move, render_board, Game, Move, MoveError, MoveOutcome, TowerId, HELP_MESSAGE,
};
use std::io::{self, BufRead, Write};
use tracing::debug;

pub struct Console<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Console<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Asks for the number of disks per tower until a valid number is given.
    /// Returns `None` if the input ends first.
    pub fn ask_game(&mut self) -> io::Result<Option<Game>> {
        loop {
            let Some(answer) = self.prompt("How many Disks per Tower do you want?")? else {
                return Ok(None);
            };

            match answer.parse::<u32>() {
                Ok(disks) => match Game::new(disks) {
                    Ok(game) => return Ok(Some(game)),
                    Err(e) => writeln!(self.output, "Error: {e}")?,
                },
                Err(_) => writeln!(self.output, "Error: please type in a whole number.")?,
            }
        }
    }

    /// Offers the instructions and prints them on a yes.
    pub fn offer_instructions(&mut self) -> io::Result<()> {
        loop {
            let Some(answer) = self.prompt(
                "Do you want to see instructions on how to play Tower of Hanoi? (Type yes or no)",
            )?
            else {
                return Ok(());
            };

            match answer.chars().next().map(|c| c.to_ascii_lowercase()) {
                Some('y') => return self.print_instructions(),
                Some('n') => return Ok(()),
                _ => writeln!(self.output, "Error: must type 'yes' or 'no'")?,
            }
        }
    }

    pub fn print_instructions(&mut self) -> io::Result<()> {
        writeln!(self.output, "{HELP_MESSAGE}\n")
    }

    /// Asks for a source and destination tower.
    ///
    /// A complete move such as `1 3` is accepted at the first prompt. Answers other than
    /// 1, 2 or 3 start the question over.
    pub fn ask_move(&mut self) -> io::Result<Option<Move>> {
        loop {
            let Some(from) =
                self.prompt("From which Tower do you want to move a Disk? (e.g., 1)")?
            else {
                return Ok(None);
            };

            if let Ok(mv) = parse_move(&from) {
                return Ok(Some(mv));
            }

            let Ok(from) = from.parse::<TowerId>() else {
                self.print_unknown_tower()?;
                continue;
            };

            let Some(to) = self.prompt("Which Tower are you moving the Disk to? (e.g., 2)")?
            else {
                return Ok(None);
            };

            match to.parse::<TowerId>() {
                Ok(to) => return Ok(Some(Move::new(from, to))),
                Err(_) => self.print_unknown_tower()?,
            }
        }
    }

    /// Plays until the puzzle is solved or the input ends. Returns `true` if solved.
    pub fn play(&mut self, game: &mut Game) -> io::Result<bool> {
        while !game.is_over() {
            self.print_board(game)?;

            let Some(mv) = self.ask_move()? else {
                return Ok(false);
            };

            match game.apply(mv) {
                Ok(MoveOutcome::Cancelled) => writeln!(self.output, "Move canceled.")?,
                Ok(MoveOutcome::Moved { .. }) => {}
                Err(e) => writeln!(self.output, "Error: {}", describe(&e))?,
            }
        }

        self.print_board(game)?;
        self.print_summary(game)?;
        Ok(true)
    }

    /// Applies `moves` without prompting, reporting every rejected move.
    pub fn replay(&mut self, game: &mut Game, moves: Vec<Move>) -> io::Result<()> {
        for (n, (mv, result)) in moves.iter().zip(game.apply_all(moves.clone())).enumerate() {
            if let Err(e) = result {
                writeln!(self.output, "Move {} ({mv}): Error: {}", n + 1, describe(&e))?;
            }
        }
        Ok(())
    }

    pub fn print_board(&mut self, game: &Game) -> io::Result<()> {
        writeln!(self.output, "{}", render_board(game))
    }

    pub fn print_summary(&mut self, game: &Game) -> io::Result<()> {
        if game.is_over() {
            writeln!(self.output, "Congratulations, you solved the puzzle!")?;
        }
        writeln!(
            self.output,
            "Minimum number of moves required: {}",
            game.min_moves_required()
        )?;
        writeln!(self.output, "Number of moves you made: {}", game.num_moves_made())
    }

    fn print_unknown_tower(&mut self) -> io::Result<()> {
        writeln!(
            self.output,
            "Error: you must type 1, 2, or 3 to refer to Towers."
        )
    }

    /// Writes `question` and reads one trimmed answer line. `None` means end of input.
    fn prompt(&mut self, question: &str) -> io::Result<Option<String>> {
        writeln!(self.output, "{question}")?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            debug!("input closed");
            return Ok(None);
        }
        Ok(Some(line.trim().to_string()))
    }
}

/// Player-facing explanation of a rejected move.
pub fn describe(error: &MoveError) -> &'static str {
    match error {
        MoveError::InvalidMove { .. } => {
            "Invalid move! Disks must always be smaller than the Disks they are on top of."
        }
        MoveError::NoDisks => "No Disks in a Tower you specified.",
        MoveError::InvalidFirstMove => "Your first move must be from Tower 1!",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn console(input: &str) -> Console<Cursor<Vec<u8>>, Vec<u8>> {
        Console::new(Cursor::new(input.as_bytes().to_vec()), Vec::new())
    }

    fn output(console: Console<Cursor<Vec<u8>>, Vec<u8>>) -> String {
        String::from_utf8(console.output).unwrap()
    }

    #[test]
    fn test_ask_game_reprompts() {
        let mut console = console("three\n0\n2\n");

        let game = console.ask_game().unwrap().unwrap();
        assert_eq!(game.disks(), 2);

        let out = output(console);
        assert!(out.contains("Error: please type in a whole number."));
        assert!(out.contains("Invalid disk count: 0"));
    }

    #[test]
    fn test_ask_game_end_of_input() {
        let mut console = console("");
        assert!(console.ask_game().unwrap().is_none());
    }

    #[test]
    fn test_offer_instructions() {
        let mut console = console("maybe\nYes\n");
        console.offer_instructions().unwrap();

        let out = output(console);
        assert!(out.contains("Error: must type 'yes' or 'no'"));
        assert!(out.contains("[ ] means 'This spot is empty.'"));
    }

    #[test]
    fn test_ask_move_two_prompts() {
        let mut console = console("4\n1\n3\n");

        let mv = console.ask_move().unwrap().unwrap();
        assert_eq!(mv, Move::new(TowerId::One, TowerId::Three));
        assert!(output(console).contains("Error: you must type 1, 2, or 3 to refer to Towers."));
    }

    #[test]
    fn test_ask_move_single_line() {
        let mut console = console("2 -> 1\n");

        let mv = console.ask_move().unwrap().unwrap();
        assert_eq!(mv, Move::new(TowerId::Two, TowerId::One));
    }

    #[test]
    fn test_play_one_disk() {
        let mut console = console("1\n1\n1\n3\n");
        let mut game = Game::new(1).unwrap();

        assert!(console.play(&mut game).unwrap());

        let out = output(console);
        assert!(out.contains("Move canceled."));
        assert!(out.contains("Congratulations, you solved the puzzle!"));
        assert!(out.contains("Minimum number of moves required: 1"));
        assert!(out.contains("Number of moves you made: 1"));
    }

    #[test]
    fn test_play_reports_rule_errors() {
        let mut console = console("2 1\n2 3\n");
        let mut game = Game::new(2).unwrap();

        assert!(!console.play(&mut game).unwrap());

        let out = output(console);
        assert!(out.contains("Error: Your first move must be from Tower 1!"));
        assert!(out.contains("Error: No Disks in a Tower you specified."));
        assert_eq!(game.num_moves_made(), 0);
    }

    #[test]
    fn test_replay_reports_rejected_moves() {
        let mut console = console("");
        let mut game = Game::new(2).unwrap();
        let moves = vec![
            Move::new(TowerId::One, TowerId::Two),
            Move::new(TowerId::One, TowerId::Two),
        ];

        console.replay(&mut game, moves).unwrap();

        assert_eq!(game.num_moves_made(), 1);
        assert!(output(console).contains("Move 2 (1 -> 2): Error: Invalid move!"));
    }
}
