//! Domain types for the sheep and wolves river-crossing puzzle.
//!
//! A puzzle instance is a pair of species totals; a configuration is the
//! occupancy of both banks plus the side the boat is docked at. Everything
//! here is a small `Copy` value type so configurations can serve directly
//! as visited-set keys.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

/// Which bank the boat is docked at - flips on every crossing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BoatSide {
    Left,
    Right,
}

/// Cargo loads allowed on an outbound trip (departing the left bank).
/// The boat must carry exactly two animals.
const OUTBOUND_CARGO: [Move; 3] = [Move::new(1, 1), Move::new(0, 2), Move::new(2, 0)];

/// Cargo loads allowed on a return trip (departing the right bank).
/// The boat may carry one animal, or one of each species.
const RETURN_CARGO: [Move; 3] = [Move::new(0, 1), Move::new(1, 0), Move::new(1, 1)];

impl BoatSide {
    pub fn opposite(self) -> BoatSide {
        match self {
            BoatSide::Left => BoatSide::Right,
            BoatSide::Right => BoatSide::Left,
        }
    }

    /// The cargo loads a trip departing this side may carry, in the
    /// catalog's enumeration order. The two directions allow different
    /// subsets; that asymmetry is a fixed rule of the puzzle.
    pub fn allowed_cargo(self) -> &'static [Move] {
        match self {
            BoatSide::Left => &OUTBOUND_CARGO,
            BoatSide::Right => &RETURN_CARGO,
        }
    }
}

/// One boat trip's cargo: how many sheep and wolves cross together.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Move {
    pub sheep: u32,
    pub wolves: u32,
}

impl Move {
    /// Every cargo the boat can carry, in canonical enumeration order.
    pub const ALL: [Move; 5] = [
        Move::new(0, 1),
        Move::new(1, 0),
        Move::new(1, 1),
        Move::new(0, 2),
        Move::new(2, 0),
    ];

    pub const fn new(sheep: u32, wolves: u32) -> Self {
        Self { sheep, wolves }
    }

    /// Total animals aboard for this crossing.
    pub fn passengers(self) -> u32 {
        self.sheep + self.wolves
    }
}

/// Occupancy of one river bank.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct BankCount {
    pub sheep: u32,
    pub wolves: u32,
}

impl BankCount {
    pub const EMPTY: BankCount = BankCount::new(0, 0);

    pub const fn new(sheep: u32, wolves: u32) -> Self {
        Self { sheep, wolves }
    }

    /// Remove a departing cargo from this bank.
    ///
    /// Returns `None` when the bank does not hold the animals the cargo
    /// names, so an impossible load can never produce a phantom count.
    pub fn send(self, cargo: Move) -> Option<BankCount> {
        Some(BankCount {
            sheep: self.sheep.checked_sub(cargo.sheep)?,
            wolves: self.wolves.checked_sub(cargo.wolves)?,
        })
    }

    /// Land an arriving cargo on this bank.
    pub fn receive(self, cargo: Move) -> BankCount {
        BankCount {
            sheep: self.sheep + cargo.sheep,
            wolves: self.wolves + cargo.wolves,
        }
    }

    /// A bank is safe unless wolves strictly outnumber sheep while at
    /// least one sheep is present. Sheepless banks are always safe.
    pub fn is_safe(self) -> bool {
        self.sheep == 0 || self.sheep >= self.wolves
    }

    /// Check both counts against the instance totals.
    pub fn within(self, puzzle: &Puzzle) -> bool {
        self.sheep <= puzzle.sheep && self.wolves <= puzzle.wolves
    }
}

/// A puzzle instance: the fixed species totals.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Puzzle {
    pub sheep: u32,
    pub wolves: u32,
}

impl Puzzle {
    pub const fn new(sheep: u32, wolves: u32) -> Self {
        Self { sheep, wolves }
    }

    /// The starting layout: every animal on the left bank, boat on the left.
    pub fn initial_configuration(&self) -> Configuration {
        Configuration {
            left: self.all_animals(),
            right: BankCount::EMPTY,
            boat: BoatSide::Left,
        }
    }

    /// A bank holding every animal in the instance.
    pub fn all_animals(&self) -> BankCount {
        BankCount::new(self.sheep, self.wolves)
    }
}

/// A full state of the world: both bank occupancies plus the boat side.
///
/// Immutable once constructed; derived states come from [`Configuration::apply`].
/// Structural equality and hashing make this the canonical key for
/// visited-state deduplication.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Configuration {
    pub left: BankCount,
    pub right: BankCount,
    pub boat: BoatSide,
}

impl Configuration {
    pub fn new(left: BankCount, right: BankCount, boat: BoatSide) -> Self {
        Self { left, right, boat }
    }

    /// Check this configuration against the puzzle rules: both banks must
    /// be safe and neither may hold more of a species than the instance
    /// total. Counts below zero cannot occur; cargo loading rejects them
    /// before a configuration is ever built.
    pub fn is_valid(&self, puzzle: &Puzzle) -> bool {
        self.left.is_safe()
            && self.right.is_safe()
            && self.left.within(puzzle)
            && self.right.within(puzzle)
    }

    /// Goal test: the left bank is exactly empty and the right bank holds
    /// exactly the instance totals. The boat side does not participate.
    pub fn is_goal(&self, puzzle: &Puzzle) -> bool {
        self.left == BankCount::EMPTY && self.right == puzzle.all_animals()
    }

    /// Carry `cargo` across the river: flip the boat side, remove the
    /// cargo from the departure bank, land it on the arrival bank.
    ///
    /// Returns `None` when the departure bank lacks the animals. Does not
    /// check the direction rule table or the safety invariant; callers
    /// that need those use [`BoatSide::allowed_cargo`] and
    /// [`Configuration::is_valid`].
    pub fn apply(&self, cargo: Move) -> Option<Configuration> {
        let (left, right) = match self.boat {
            BoatSide::Left => (self.left.send(cargo)?, self.right.receive(cargo)),
            BoatSide::Right => (self.left.receive(cargo), self.right.send(cargo)?),
        };
        Some(Configuration {
            left,
            right,
            boat: self.boat.opposite(),
        })
    }

    /// Enumerate the legal one-crossing successors of this configuration.
    ///
    /// Tries each cargo the departure side allows, in table order, and
    /// keeps the results that pass [`Configuration::is_valid`]. Pure; a
    /// successor may revisit an earlier configuration (including the
    /// start), deduplication is the solver's concern.
    pub fn successors(&self, puzzle: &Puzzle) -> SmallVec<[(Configuration, Move); 3]> {
        let mut next = SmallVec::new();
        for &cargo in self.boat.allowed_cargo() {
            if let Some(candidate) = self.apply(cargo) {
                if candidate.is_valid(puzzle) {
                    next.push((candidate, cargo));
                }
            }
        }
        next
    }
}
