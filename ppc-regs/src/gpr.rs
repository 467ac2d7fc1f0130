//! General-purpose register catalog
//!
//! The 32 GPRs are identified by a code in `0..32`, with `r1` serving as the
//! stack pointer.  Codes double as indices into the canonical name table, so
//! name lookup is a linear scan; this path is only hit by textual tooling
//! (assembly directives, debug output), never during compilation proper.

use crate::Error;
use serde::{Deserialize, Serialize};

/// Canonical display names, indexed by register code
const NAMES: [&str; Gpr::TOTAL as usize] = [
    "r0", "r1", "r2", "r3", "r4", "r5", "r6", "r7", "r8", "r9", "r10", "r11",
    "r12", "r13", "r14", "r15", "r16", "r17", "r18", "r19", "r20", "r21",
    "r22", "r23", "r24", "r25", "r26", "r27", "r28", "r29", "r30", "r31",
];

/// A general-purpose register, identified by its code
///
/// Values are always valid: the only constructors are the role constants,
/// [`Gpr::from_code`], and [`Gpr::from_name`], all of which stay within the
/// catalog.
#[derive(
    Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash, Serialize, Deserialize,
)]
#[serde(try_from = "u8", into = "u8")]
pub struct Gpr(u8);

impl Gpr {
    /// Number of general-purpose registers in the catalog
    pub const TOTAL: u8 = 32;

    /// Stack pointer (`r1`, conventionally written `sp`)
    pub const SP: Gpr = Gpr(1);

    /// First argument / return value register (`r3`)
    pub const RETURN_VALUE: Gpr = Gpr(3);

    /// Scratch register used for indirect calls (`r12`)
    pub const CALL_SCRATCH: Gpr = Gpr(12);

    /// Builds a register from its code, or `None` if it's out of range
    pub const fn from_code(code: u8) -> Option<Gpr> {
        if code < Gpr::TOTAL {
            Some(Gpr(code))
        } else {
            None
        }
    }

    /// Looks up a register by textual name
    ///
    /// Returns `None` for an unrecognized name; that's an expected outcome
    /// (e.g. malformed assembly input), and callers report it upward as a
    /// parse error.
    pub fn from_name(name: &str) -> Option<Gpr> {
        // Check for some register aliases first.
        if name == "sp" || name == "r1" {
            return Some(Gpr::SP);
        }
        if name == "r12" {
            return Some(Gpr::CALL_SCRATCH);
        }
        if name == "r3" {
            return Some(Gpr::RETURN_VALUE);
        }

        NAMES.iter().position(|&n| n == name).map(|i| Gpr(i as u8))
    }

    /// Returns the register's code
    pub const fn code(self) -> u8 {
        self.0
    }

    /// Returns the register's canonical name
    pub const fn name(self) -> &'static str {
        NAMES[self.0 as usize]
    }
}

impl std::fmt::Display for Gpr {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

impl std::fmt::Debug for Gpr {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

impl std::str::FromStr for Gpr {
    type Err = Error;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Gpr::from_name(s).ok_or_else(|| Error::UnknownRegister(s.to_owned()))
    }
}

// Deserialization goes through the same bounds check as `from_code`, so a
// deserialized value is always in the catalog.
impl TryFrom<u8> for Gpr {
    type Error = Error;
    fn try_from(code: u8) -> Result<Self, Self::Error> {
        Gpr::from_code(code).ok_or(Error::InvalidRegisterCode(code))
    }
}

impl From<Gpr> for u8 {
    fn from(r: Gpr) -> u8 {
        r.code()
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn canonical_names_resolve_to_their_own_code() {
        for (i, name) in NAMES.iter().enumerate() {
            assert_eq!(Gpr::from_name(name), Gpr::from_code(i as u8));
        }
    }

    #[test]
    fn aliases() {
        assert_eq!(Gpr::from_name("sp"), Some(Gpr::SP));
        assert_eq!(Gpr::from_name("r1"), Some(Gpr::SP));
        assert_eq!(Gpr::from_name("r12"), Some(Gpr::CALL_SCRATCH));
        assert_eq!(Gpr::from_name("r3"), Some(Gpr::RETURN_VALUE));
        assert_eq!(Gpr::SP.code(), 1);
        assert_eq!(Gpr::CALL_SCRATCH.code(), 12);
        assert_eq!(Gpr::RETURN_VALUE.code(), 3);
    }

    #[test]
    fn unknown_names() {
        assert_eq!(Gpr::from_name("not_a_register"), None);
        assert_eq!(Gpr::from_name("r32"), None);
        assert_eq!(Gpr::from_name("R1"), None); // case-sensitive
        assert_eq!(Gpr::from_name(""), None);
    }

    #[test]
    fn code_bounds() {
        assert_eq!(Gpr::from_code(31).map(Gpr::code), Some(31));
        assert_eq!(Gpr::from_code(32), None);
        assert_eq!(Gpr::from_code(u8::MAX), None);
    }

    #[test]
    fn parse_errors_name_the_input() {
        let err = "cr7".parse::<Gpr>().unwrap_err();
        assert_eq!(err, Error::UnknownRegister("cr7".to_owned()));
        assert_eq!(err.to_string(), "unknown register cr7");
    }

    #[test]
    fn display_uses_canonical_name() {
        let sp: Gpr = "sp".parse().unwrap();
        assert_eq!(sp.to_string(), "r1");
    }
}
