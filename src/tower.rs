//! This module defines the `Tower` struct, a fixed-capacity column of slots holding disks.
//! It owns move validation and the placement of incoming disks.

use crate::types::{Disk, MoveError, Slot};

/// A tower, or pole, in the puzzle.
///
/// Slot `0` is the top of the physical stack and higher indices are deeper. Disks always
/// rest as far down as possible and are ordered smallest to largest from the top. The
/// number of slots is fixed when the tower is created.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tower {
    slots: Vec<Slot>,
}

impl Tower {
    /// Creates a tower with `num_disks` slots.
    ///
    /// When `seeded` is true, slot `i` holds a disk of size `i + 1`, so the smallest disk is
    /// on top. Otherwise every slot is empty.
    pub fn new(num_disks: u32, seeded: bool) -> Self {
        let slots = (1..=num_disks)
            .map(|size| if seeded { Disk::new(size).into() } else { Slot::Empty })
            .collect();

        Self { slots }
    }

    /// Creates a tower full of disks ranked `1..=num_disks`.
    pub fn full(num_disks: u32) -> Self {
        Self::new(num_disks, true)
    }

    /// Creates a tower with `num_disks` empty slots.
    pub fn empty(num_disks: u32) -> Self {
        Self::new(num_disks, false)
    }

    /// Creates a tower from an explicit slot sequence, top first.
    ///
    /// The slots are taken as given; no ordering or gap checks are made.
    pub fn from_slots(slots: Vec<Slot>) -> Self {
        Self { slots }
    }

    /// Returns the number of slots.
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    /// Returns the slot at `index`, or `None` if the index is out of range.
    pub fn get(&self, index: usize) -> Option<Slot> {
        self.slots.get(index).copied()
    }

    /// Replaces the slot at `index`. Out-of-range indices are ignored.
    pub fn set(&mut self, index: usize, slot: Slot) {
        if let Some(current) = self.slots.get_mut(index) {
            *current = slot;
        }
    }

    /// Returns all slots, top first.
    pub fn slots(&self) -> &[Slot] {
        &self.slots
    }

    /// Returns `true` if every slot holds a disk.
    pub fn is_full(&self) -> bool {
        self.slots.iter().all(|slot| !slot.is_empty())
    }

    /// Returns `true` if no slot holds a disk.
    pub fn is_empty(&self) -> bool {
        self.slots.iter().all(Slot::is_empty)
    }

    pub fn disk_count(&self) -> usize {
        self.slots.iter().filter(|slot| !slot.is_empty()).count()
    }

    /// Returns the smallest (topmost) disk without removing it.
    ///
    /// # Errors
    ///
    /// * `MoveError::NoDisks` if the tower is empty.
    pub fn get_smallest_disk(&self) -> Result<Disk, MoveError> {
        self.get_topmost_disk_or_none().ok_or(MoveError::NoDisks)
    }

    /// Returns the topmost disk, or `None` if the tower is empty.
    pub fn get_topmost_disk_or_none(&self) -> Option<Disk> {
        self.slots.iter().find_map(Slot::disk)
    }

    /// Returns the deepest index an incoming disk can fall to.
    ///
    /// This is the last of the empty slots counted from the top. Returns `None` when slot
    /// `0` is already occupied.
    pub fn get_bottommost_empty_index(&self) -> Option<usize> {
        self.slots
            .iter()
            .take_while(|slot| slot.is_empty())
            .count()
            .checked_sub(1)
    }

    /// Moves the topmost disk of this tower onto `other`.
    ///
    /// The disk lands in the deepest empty slot of `other`. After the move both towers keep
    /// their ordering; a rejected move leaves both towers exactly as they were.
    ///
    /// # Returns
    ///
    /// * `Ok(Disk)` with the disk that was moved.
    /// * `Err(MoveError::InvalidFirstMove)` if `other` is completely full (or has no room
    ///   at the top).
    /// * `Err(MoveError::NoDisks)` if this tower is empty.
    /// * `Err(MoveError::InvalidMove)` if the topmost disk of `other` is not larger than
    ///   the disk being moved.
    pub fn move_disk_to(&mut self, other: &mut Tower) -> Result<Disk, MoveError> {
        // A full destination can only be the starting tower before the first move.
        if other.is_full() {
            return Err(MoveError::InvalidFirstMove);
        }

        let (index, disk) = self.take_smallest_disk()?;

        let Some(landing) = other.get_bottommost_empty_index() else {
            self.set(index, Slot::Occupied(disk));
            return Err(MoveError::InvalidFirstMove);
        };

        if let Some(onto) = other.get_topmost_disk_or_none() {
            if !disk.is_smaller_than(&onto) {
                self.set(index, Slot::Occupied(disk));
                return Err(MoveError::InvalidMove { disk, onto });
            }
        }

        other.set(landing, Slot::Occupied(disk));
        Ok(disk)
    }

    /// Removes the topmost disk, returning it together with the index it was taken from.
    fn take_smallest_disk(&mut self) -> Result<(usize, Disk), MoveError> {
        let (index, disk) = self
            .slots
            .iter()
            .enumerate()
            .find_map(|(i, slot)| slot.disk().map(|disk| (i, disk)))
            .ok_or(MoveError::NoDisks)?;

        self.slots[index] = Slot::Empty;
        Ok((index, disk))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn disk(size: u32) -> Disk {
        Disk::new(size).unwrap()
    }

    fn sizes(tower: &Tower) -> Vec<Option<u32>> {
        tower
            .slots()
            .iter()
            .map(|slot| slot.disk().map(|d| d.size()))
            .collect()
    }

    #[test]
    fn test_seeded_tower_holds_increasing_disks() {
        let tower = Tower::full(3);

        assert_eq!(tower.len(), 3);
        assert!(tower.is_full());
        assert_eq!(sizes(&tower), vec![Some(1), Some(2), Some(3)]);
    }

    #[test]
    fn test_empty_tower() {
        let tower = Tower::empty(4);

        assert_eq!(tower.len(), 4);
        assert!(tower.is_empty());
        assert_eq!(tower.disk_count(), 0);
        assert_eq!(tower.get_topmost_disk_or_none(), None);
        assert_eq!(tower.get_smallest_disk(), Err(MoveError::NoDisks));
        assert_eq!(tower.get_bottommost_empty_index(), Some(3));
    }

    #[test]
    fn test_take_smallest_disk_until_empty() {
        let mut tower = Tower::full(3);

        assert_eq!(tower.take_smallest_disk().unwrap().1.size(), 1);
        assert_eq!(tower.take_smallest_disk().unwrap().1.size(), 2);
        assert_eq!(tower.take_smallest_disk().unwrap().1.size(), 3);

        assert_eq!(tower.take_smallest_disk(), Err(MoveError::NoDisks));
        assert!(tower.is_empty());
    }

    #[test]
    fn test_bottommost_empty_index() {
        let tower = Tower::from_slots(vec![Slot::Empty, Slot::Empty, Slot::Occupied(disk(3))]);
        assert_eq!(tower.get_bottommost_empty_index(), Some(1));

        assert_eq!(Tower::full(2).get_bottommost_empty_index(), None);
    }

    #[test]
    fn test_move_lands_in_deepest_empty_slot() {
        let mut source = Tower::full(3);
        let mut dest = Tower::empty(3);

        assert_eq!(source.move_disk_to(&mut dest), Ok(disk(1)));
        assert_eq!(sizes(&source), vec![None, Some(2), Some(3)]);
        assert_eq!(sizes(&dest), vec![None, None, Some(1)]);
    }

    #[test]
    fn test_invalid_move_rolls_back() {
        let mut source = Tower::from_slots(vec![
            Slot::Empty,
            Slot::Occupied(disk(2)),
            Slot::Occupied(disk(3)),
        ]);
        let mut dest = Tower::from_slots(vec![Slot::Empty, Slot::Empty, Slot::Occupied(disk(1))]);
        let (source_before, dest_before) = (source.clone(), dest.clone());

        let result = source.move_disk_to(&mut dest);

        assert_eq!(
            result,
            Err(MoveError::InvalidMove {
                disk: disk(2),
                onto: disk(1)
            })
        );
        assert_eq!(source, source_before);
        assert_eq!(dest, dest_before);
        assert_eq!(source.get_smallest_disk(), Ok(disk(2)));
    }

    #[test]
    fn test_move_from_empty_tower() {
        let mut source = Tower::empty(2);
        let mut dest = Tower::empty(2);

        assert_eq!(source.move_disk_to(&mut dest), Err(MoveError::NoDisks));
        assert!(dest.is_empty());
    }

    #[test]
    fn test_move_into_full_tower() {
        let mut source = Tower::full(3);
        let mut dest = Tower::full(3);

        assert_eq!(source.move_disk_to(&mut dest), Err(MoveError::InvalidFirstMove));
        assert_eq!(source, Tower::full(3));
        assert_eq!(dest, Tower::full(3));
    }

    #[test]
    fn test_move_into_tower_without_room_at_top() {
        // Slot 0 is occupied but a lower slot is empty, so there is nowhere to land.
        let mut source = Tower::from_slots(vec![Slot::Empty, Slot::Occupied(disk(1))]);
        let mut dest = Tower::from_slots(vec![Slot::Occupied(disk(2)), Slot::Empty]);
        let (source_before, dest_before) = (source.clone(), dest.clone());

        assert_eq!(source.move_disk_to(&mut dest), Err(MoveError::InvalidFirstMove));
        assert_eq!(source, source_before);
        assert_eq!(dest, dest_before);
    }

    #[test]
    fn test_set_ignores_out_of_range() {
        let mut tower = Tower::empty(1);
        tower.set(5, Slot::Occupied(disk(1)));

        assert!(tower.is_empty());
        assert_eq!(tower.get(5), None);
        assert_eq!(tower.get(0), Some(Slot::Empty));
    }
}
