//! Floating-point register catalog and save-set sizing
//!
//! The 32 FPRs are identified by a code in `0..32`.  When a set of them has
//! to be preserved across a call, each one is stored as a single
//! double-precision slot regardless of its working precision, so the save
//! area for a set is `8 * |set|` bytes and each register's slot lives at
//! `8 * code` within a full register dump.

use crate::Error;
use serde::{Deserialize, Serialize};
use static_assertions::const_assert;

/// Canonical display names, indexed by register code
const NAMES: [&str; Fpr::TOTAL as usize] = [
    "f0", "f1", "f2", "f3", "f4", "f5", "f6", "f7", "f8", "f9", "f10", "f11",
    "f12", "f13", "f14", "f15", "f16", "f17", "f18", "f19", "f20", "f21",
    "f22", "f23", "f24", "f25", "f26", "f27", "f28", "f29", "f30", "f31",
];

/// A floating-point register, identified by its code
#[derive(
    Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash, Serialize, Deserialize,
)]
#[serde(try_from = "u8", into = "u8")]
pub struct Fpr(u8);

impl Fpr {
    /// Number of floating-point registers in the catalog
    pub const TOTAL: u8 = 32;

    /// Width of one save/restore slot
    ///
    /// Every float register is saved as a double, whatever precision it
    /// currently holds.
    pub const SLOT_BYTES: u32 = std::mem::size_of::<f64>() as u32;

    /// Builds a register from its code, or `None` if it's out of range
    pub const fn from_code(code: u8) -> Option<Fpr> {
        if code < Fpr::TOTAL {
            Some(Fpr(code))
        } else {
            None
        }
    }

    /// Looks up a register by textual name
    ///
    /// Unlike the GPRs, the float registers have no aliases; this is a plain
    /// scan of the canonical table.  Returns `None` for an unrecognized name.
    pub fn from_name(name: &str) -> Option<Fpr> {
        NAMES.iter().position(|&n| n == name).map(|i| Fpr(i as u8))
    }

    /// Returns the register's code
    pub const fn code(self) -> u8 {
        self.0
    }

    /// Returns the register's canonical name
    pub const fn name(self) -> &'static str {
        NAMES[self.0 as usize]
    }

    /// Byte offset of this register's slot within a linear register dump
    ///
    /// The dump is an array of [`Fpr::SLOT_BYTES`]-wide slots indexed by
    /// register code.
    pub const fn dump_offset_in_bytes(self) -> u32 {
        self.0 as u32 * Fpr::SLOT_BYTES
    }
}

impl std::fmt::Display for Fpr {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

impl std::fmt::Debug for Fpr {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

impl std::str::FromStr for Fpr {
    type Err = Error;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Fpr::from_name(s).ok_or_else(|| Error::UnknownRegister(s.to_owned()))
    }
}

// Deserialization goes through the same bounds check as `from_code`, so a
// deserialized value is always in the catalog.
impl TryFrom<u8> for Fpr {
    type Error = Error;
    fn try_from(code: u8) -> Result<Self, Self::Error> {
        Fpr::from_code(code).ok_or(Error::InvalidRegisterCode(code))
    }
}

impl From<Fpr> for u8 {
    fn from(r: Fpr) -> u8 {
        r.code()
    }
}

// The set mask must cover the whole catalog
const_assert!(Fpr::TOTAL as u32 <= u32::BITS);

/// A set of floating-point registers, e.g. the ones live across a call
///
/// This is a plain bitset over register codes: a cheap `Copy` value owned by
/// whoever is emitting the save/restore sequence.  Iteration yields registers
/// in ascending code order.
#[derive(
    Copy, Clone, Default, Eq, PartialEq, Hash, Serialize, Deserialize,
)]
pub struct FprSet(u32);

impl FprSet {
    /// The empty set
    pub const EMPTY: FprSet = FprSet(0);

    /// The full catalog
    pub const ALL: FprSet = FprSet(((1u64 << Fpr::TOTAL) - 1) as u32);

    /// Builds an empty set
    pub const fn new() -> FprSet {
        FprSet::EMPTY
    }

    /// Adds a register to the set; adding a member twice is a no-op
    pub const fn insert(&mut self, r: Fpr) {
        self.0 |= 1 << r.code();
    }

    /// Removes a register from the set
    pub const fn remove(&mut self, r: Fpr) {
        self.0 &= !(1 << r.code());
    }

    /// Checks whether the set contains the given register
    pub const fn contains(self, r: Fpr) -> bool {
        self.0 & (1 << r.code()) != 0
    }

    /// Number of registers in the set
    pub const fn len(self) -> u32 {
        self.0.count_ones()
    }

    /// Checks whether the set is empty
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// Returns an iterator over members, in ascending code order
    pub const fn iter(self) -> FprSetIter {
        FprSetIter(self.0)
    }

    /// Canonicalizes a set before its save sequence is emitted
    ///
    /// The output never adds registers to the input.  Right now this is the
    /// identity transform.
    // TODO: write the actual reduction pass; upstream never finished it
    pub const fn reduce_for_push(self) -> FprSet {
        self
    }

    /// Total size of the save area for this set
    pub const fn size_in_bytes(self) -> u32 {
        self.len() * Fpr::SLOT_BYTES
    }

    /// Stack space consumed by pushing this set
    ///
    /// Identical to [`FprSet::size_in_bytes`] on this target; there is no
    /// per-set alignment padding.
    pub const fn push_size_in_bytes(self) -> u32 {
        self.size_in_bytes()
    }
}

impl std::fmt::Debug for FprSet {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_set().entries(self.iter()).finish()
    }
}

impl std::ops::BitOr for FprSet {
    type Output = FprSet;
    /// Set union
    fn bitor(self, rhs: FprSet) -> FprSet {
        FprSet(self.0 | rhs.0)
    }
}

impl std::ops::BitAnd for FprSet {
    type Output = FprSet;
    /// Set intersection
    fn bitand(self, rhs: FprSet) -> FprSet {
        FprSet(self.0 & rhs.0)
    }
}

impl std::ops::Sub for FprSet {
    type Output = FprSet;
    /// Set difference
    fn sub(self, rhs: FprSet) -> FprSet {
        FprSet(self.0 & !rhs.0)
    }
}

impl FromIterator<Fpr> for FprSet {
    fn from_iter<T: IntoIterator<Item = Fpr>>(iter: T) -> FprSet {
        let mut out = FprSet::new();
        for r in iter {
            out.insert(r);
        }
        out
    }
}

impl IntoIterator for FprSet {
    type Item = Fpr;
    type IntoIter = FprSetIter;
    fn into_iter(self) -> FprSetIter {
        self.iter()
    }
}

/// Iterator over the members of an [`FprSet`]
#[derive(Copy, Clone)]
pub struct FprSetIter(u32);

impl Iterator for FprSetIter {
    type Item = Fpr;
    fn next(&mut self) -> Option<Fpr> {
        if self.0 == 0 {
            None
        } else {
            let code = self.0.trailing_zeros() as u8;
            self.0 &= self.0 - 1;
            Some(Fpr(code))
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let n = self.0.count_ones() as usize;
        (n, Some(n))
    }
}

impl ExactSizeIterator for FprSetIter {}
