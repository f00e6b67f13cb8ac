//! This module defines the `Game` struct, a single session of the puzzle. It owns the three
//! towers, counts moves, and reports when the puzzle has been solved.

use serde::Serialize;
use tracing::{debug, info};

use crate::tower::Tower;
use crate::types::{
    HanoiError, Move, MoveError, MoveOutcome, Slot, TowerId, MAX_DISKS, MIN_DISKS, TOWER_COUNT,
};

/// One row of the board: the slot at the same depth in each tower, left to right.
pub type Row = [Slot; TOWER_COUNT];

/// A session of Tower of Hanoi.
///
/// At the beginning the first tower is full of disks and the other two are empty. The
/// puzzle is solved once the third tower is full.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Game {
    towers: [Tower; TOWER_COUNT],
    disks: u32,
    min_moves_required: u64,
    num_moves_made: u64,
}

/// A serializable view of a game, for front ends that display or export state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Snapshot {
    pub disks: u32,
    pub min_moves_required: u64,
    pub num_moves_made: u64,
    pub is_over: bool,
    /// Rows top to bottom, one slot per tower.
    pub rows: Vec<Row>,
}

impl Game {
    /// Creates a new game with `disks` disks per tower.
    ///
    /// # Errors
    ///
    /// * `HanoiError::InvalidDiskCount` if `disks` is outside `MIN_DISKS..=MAX_DISKS`.
    pub fn new(disks: u32) -> Result<Self, HanoiError> {
        check_disk_count(disks)?;

        debug!(disks, "new game");

        Ok(Self {
            towers: initial_towers(disks),
            disks,
            min_moves_required: min_moves_for(disks),
            num_moves_made: 0,
        })
    }

    /// Creates a game over externally constructed towers, left to right.
    ///
    /// The towers are not checked for ordering; a full tower anywhere still blocks moves
    /// into it.
    ///
    /// # Errors
    ///
    /// * `HanoiError::MismatchedTowers` if the towers differ in length or have no slots.
    /// * `HanoiError::InvalidDiskCount` if the towers have more than `MAX_DISKS` slots.
    pub fn from_towers(towers: [Tower; TOWER_COUNT]) -> Result<Self, HanoiError> {
        let len = towers[0].len();
        if len == 0 || towers.iter().any(|tower| tower.len() != len) {
            return Err(HanoiError::MismatchedTowers);
        }

        let disks = u32::try_from(len).map_err(|_| HanoiError::InvalidDiskCount(u32::MAX))?;
        check_disk_count(disks)?;

        Ok(Self {
            towers,
            disks,
            min_moves_required: min_moves_for(disks),
            num_moves_made: 0,
        })
    }

    /// Returns `true` if the third tower is completely full of disks.
    pub fn is_over(&self) -> bool {
        self.tower(TowerId::Three).is_full()
    }

    /// Moves the topmost disk of `from` onto `to`.
    ///
    /// Moving a tower onto itself is a no-op that returns `MoveOutcome::Cancelled` and does
    /// not count as a move. Otherwise the move count increases only when the move succeeds.
    pub fn apply_move(&mut self, from: TowerId, to: TowerId) -> Result<MoveOutcome, MoveError> {
        if from == to {
            debug!(tower = %from, "move cancelled");
            return Ok(MoveOutcome::Cancelled);
        }

        let (source, dest) = self.towers_mut(from, to);
        let disk = source.move_disk_to(dest).inspect_err(|err| {
            debug!(%from, %to, error = %err, "move rejected");
        })?;

        self.num_moves_made += 1;
        debug!(%from, %to, size = disk.size(), moves = self.num_moves_made, "disk moved");

        if self.is_over() {
            info!(
                moves = self.num_moves_made,
                min_moves = self.min_moves_required,
                "puzzle solved"
            );
        }

        Ok(MoveOutcome::Moved { disk, from, to })
    }

    /// Applies a single `Move`.
    pub fn apply(&mut self, mv: Move) -> Result<MoveOutcome, MoveError> {
        self.apply_move(mv.from, mv.to)
    }

    /// Applies every move in order, returning one result per move.
    ///
    /// A rejected move leaves the game unchanged, so later moves are still applied.
    pub fn apply_all<I>(&mut self, moves: I) -> Vec<Result<MoveOutcome, MoveError>>
    where
        I: IntoIterator<Item = Move>,
    {
        moves.into_iter().map(|mv| self.apply(mv)).collect()
    }

    /// Returns the board as rows from top to bottom, each holding one slot per tower.
    pub fn render_state(&self) -> Vec<Row> {
        (0..self.disks as usize)
            .map(|depth| {
                TowerId::ALL.map(|id| self.tower(id).get(depth).unwrap_or_default())
            })
            .collect()
    }

    /// Returns a serializable view of the current state.
    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            disks: self.disks,
            min_moves_required: self.min_moves_required,
            num_moves_made: self.num_moves_made,
            is_over: self.is_over(),
            rows: self.render_state(),
        }
    }

    /// Starts the puzzle over with the same number of disks.
    pub fn reset(&mut self) {
        self.towers = initial_towers(self.disks);
        self.num_moves_made = 0;
    }

    /// Returns the number of disks per tower.
    pub fn disks(&self) -> u32 {
        self.disks
    }

    pub fn tower(&self, id: TowerId) -> &Tower {
        &self.towers[id.index()]
    }

    pub fn towers(&self) -> &[Tower; TOWER_COUNT] {
        &self.towers
    }

    /// Returns `2^N - 1`, the fewest moves that solve the puzzle.
    pub fn min_moves_required(&self) -> u64 {
        self.min_moves_required
    }

    /// Returns the number of successful moves made so far.
    pub fn num_moves_made(&self) -> u64 {
        self.num_moves_made
    }

    /// Borrows two distinct towers mutably. `a` and `b` must differ.
    fn towers_mut(&mut self, a: TowerId, b: TowerId) -> (&mut Tower, &mut Tower) {
        let (i, j) = (a.index(), b.index());
        if i < j {
            let (left, right) = self.towers.split_at_mut(j);
            (&mut left[i], &mut right[0])
        } else {
            let (left, right) = self.towers.split_at_mut(i);
            (&mut right[0], &mut left[j])
        }
    }
}

fn check_disk_count(disks: u32) -> Result<(), HanoiError> {
    if (MIN_DISKS..=MAX_DISKS).contains(&disks) {
        Ok(())
    } else {
        Err(HanoiError::InvalidDiskCount(disks))
    }
}

fn initial_towers(disks: u32) -> [Tower; TOWER_COUNT] {
    [Tower::full(disks), Tower::empty(disks), Tower::empty(disks)]
}

/// `2^disks - 1` for `disks` in `1..=64`.
fn min_moves_for(disks: u32) -> u64 {
    u64::MAX >> (u64::BITS - disks)
}
