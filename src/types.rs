//! This module defines the core data structures and types used throughout the puzzle,
//! including disks, tower slots, tower identifiers, moves, and error types.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::num::NonZeroU32;
use std::str::FromStr;
use thiserror::Error;

use crate::Rule;

/// The number of towers in the puzzle.
pub const TOWER_COUNT: usize = 3;
/// The smallest allowed number of disks per tower.
pub const MIN_DISKS: u32 = 1;
/// The largest allowed number of disks per tower, so that `2^N - 1` fits in a `u64`.
pub const MAX_DISKS: u32 = 64;
/// The number of disks per tower used by front ends when none is given.
pub const DEFAULT_DISKS: u32 = 3;

/// A disk in the puzzle, ranked by size. The smaller the size, the smaller the disk.
///
/// Disks have no identity beyond their size and are never mutated once created.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Disk {
    size: NonZeroU32,
}

impl Disk {
    /// Creates a disk of the given size. Returns `None` for size `0`.
    pub fn new(size: u32) -> Option<Self> {
        NonZeroU32::new(size).map(|size| Self { size })
    }

    /// Returns the size rank of this disk.
    pub fn size(&self) -> u32 {
        self.size.get()
    }

    /// Returns `true` if this disk is strictly smaller than `other`.
    pub fn is_smaller_than(&self, other: &Disk) -> bool {
        self.size < other.size
    }
}

impl fmt::Display for Disk {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Disk({})", self.size)
    }
}

/// A single position in a tower, either empty or holding a disk.
///
/// Serializes as `null` for an empty slot and as the disk size otherwise.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "Option<Disk>", into = "Option<Disk>")]
pub enum Slot {
    /// No disk at this position.
    #[default]
    Empty,
    /// A disk rests at this position.
    Occupied(Disk),
}

impl Slot {
    /// Returns the disk in this slot, if any.
    pub fn disk(&self) -> Option<Disk> {
        match self {
            Slot::Empty => None,
            Slot::Occupied(disk) => Some(*disk),
        }
    }

    pub fn is_empty(&self) -> bool {
        matches!(self, Slot::Empty)
    }
}

impl From<Option<Disk>> for Slot {
    fn from(disk: Option<Disk>) -> Self {
        disk.map_or(Slot::Empty, Slot::Occupied)
    }
}

impl From<Slot> for Option<Disk> {
    fn from(slot: Slot) -> Self {
        slot.disk()
    }
}

/// Identifies one of the three towers. Tower one is the leftmost (starting) tower and
/// tower three the rightmost (goal) tower.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TowerId {
    One,
    Two,
    Three,
}

impl TowerId {
    /// All towers, left to right.
    pub const ALL: [TowerId; TOWER_COUNT] = [TowerId::One, TowerId::Two, TowerId::Three];

    /// Returns the 0-based position of this tower.
    pub fn index(self) -> usize {
        match self {
            TowerId::One => 0,
            TowerId::Two => 1,
            TowerId::Three => 2,
        }
    }

    /// Returns the 1-based number players use to refer to this tower.
    pub fn number(self) -> u32 {
        self.index() as u32 + 1
    }
}

impl fmt::Display for TowerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.number())
    }
}

impl TryFrom<u32> for TowerId {
    type Error = HanoiError;

    fn try_from(number: u32) -> Result<Self, Self::Error> {
        match number {
            1 => Ok(TowerId::One),
            2 => Ok(TowerId::Two),
            3 => Ok(TowerId::Three),
            other => Err(HanoiError::UnknownTower(other.to_string())),
        }
    }
}

impl FromStr for TowerId {
    type Err = HanoiError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "1" => Ok(TowerId::One),
            "2" => Ok(TowerId::Two),
            "3" => Ok(TowerId::Three),
            other => Err(HanoiError::UnknownTower(other.to_string())),
        }
    }
}

/// A request to move the topmost disk of one tower onto another.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Move {
    /// The tower the disk is taken from.
    pub from: TowerId,
    /// The tower the disk is placed on.
    pub to: TowerId,
}

impl Move {
    pub fn new(from: TowerId, to: TowerId) -> Self {
        Self { from, to }
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} -> {}", self.from, self.to)
    }
}

/// The result of a move request that did not violate any rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveOutcome {
    /// The disk was relocated and the move counted.
    Moved {
        disk: Disk,
        from: TowerId,
        to: TowerId,
    },
    /// Source and destination were the same tower; nothing changed.
    Cancelled,
}

/// Rule violations raised by a move. None of them changes any tower.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum MoveError {
    /// The source tower holds no disks.
    #[error("the Tower is empty; it has no Disks")]
    NoDisks,
    /// The destination's topmost disk is not larger than the disk being moved.
    #[error("can't move {disk} on top of smaller {onto}")]
    InvalidMove { disk: Disk, onto: Disk },
    /// The destination tower is completely full. In play this only happens when moving
    /// into tower one before it has been emptied.
    #[error("1st move must be from Tower 1")]
    InvalidFirstMove,
}

/// Errors raised while setting up a game or reading player input.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum HanoiError {
    /// The requested number of disks per tower is outside `MIN_DISKS..=MAX_DISKS`.
    #[error("Invalid disk count: {0} (must be between {MIN_DISKS} and {MAX_DISKS})")]
    InvalidDiskCount(u32),
    /// A tower reference other than 1, 2 or 3.
    #[error("Unknown tower: '{0}' (must be 1, 2, or 3)")]
    UnknownTower(String),
    /// Externally supplied towers do not share one non-zero slot count.
    #[error("Towers must all have the same, non-zero number of slots")]
    MismatchedTowers,
    /// Indicates a syntax error in move notation.
    #[error("Move parsing error: {0}")]
    ParseError(#[from] Box<pest::error::Error<Rule>>),
    /// Indicates an error reading a move script from the file system.
    #[error("File error: {0}")]
    FileError(String),
    /// A move was rejected by the puzzle's rules.
    #[error("Invalid move: {0}")]
    Move(#[from] MoveError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_disk_smaller_than() {
        let disk_one = Disk::new(1).unwrap();
        let disk_two = Disk::new(2).unwrap();
        assert!(disk_one.is_smaller_than(&disk_two));
        assert!(!disk_two.is_smaller_than(&disk_one));

        let disk_three = Disk::new(1).unwrap();
        assert!(!disk_one.is_smaller_than(&disk_three));
        assert_eq!(disk_one, disk_three);
    }

    #[test]
    fn test_disk_rejects_zero_size() {
        assert!(Disk::new(0).is_none());
        assert_eq!(Disk::new(7).map(|d| d.size()), Some(7));
    }

    #[test]
    fn test_slot_serialization() {
        let empty = serde_json::to_string(&Slot::Empty).unwrap();
        let occupied = serde_json::to_string(&Slot::Occupied(Disk::new(2).unwrap())).unwrap();

        assert_eq!(empty, "null");
        assert_eq!(occupied, "2");

        let slot: Slot = serde_json::from_str("3").unwrap();
        assert_eq!(slot.disk().map(|d| d.size()), Some(3));
        assert!(serde_json::from_str::<Slot>("0").is_err());
    }

    #[test]
    fn test_tower_id_conversions() {
        assert_eq!("1".parse::<TowerId>().unwrap(), TowerId::One);
        assert_eq!(" 3 ".parse::<TowerId>().unwrap(), TowerId::Three);
        assert_eq!(TowerId::try_from(2).unwrap(), TowerId::Two);
        assert_eq!(TowerId::Three.index(), 2);
        assert_eq!(TowerId::Two.to_string(), "2");

        assert_eq!(
            "4".parse::<TowerId>(),
            Err(HanoiError::UnknownTower("4".to_string()))
        );
        assert!(TowerId::try_from(0).is_err());
    }

    #[test]
    fn test_error_display() {
        let error = HanoiError::InvalidDiskCount(0);

        let error_msg = format!("{}", error);
        assert!(error_msg.contains("Invalid disk count"));
        assert!(error_msg.contains('0'));

        let error = MoveError::InvalidMove {
            disk: Disk::new(3).unwrap(),
            onto: Disk::new(1).unwrap(),
        };
        assert_eq!(error.to_string(), "can't move Disk(3) on top of smaller Disk(1)");
    }
}
