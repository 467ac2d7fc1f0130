//! Register-file plumbing for a PowerPC JIT backend.
//!
//! This crate owns the two register catalogs of the 32-bit PowerPC target
//! (the general-purpose registers `r0..r31` and the floating-point registers
//! `f0..f31`), plus the small amount of logic built on top of them:
//!
//! - **Name resolution**, used when translating textual register references
//!   (inline-assembly directives, disassembly, debug spew) back into register
//!   codes.  A handful of registers go by more than one conventional name;
//!   those aliases are resolved before the canonical tables are scanned.
//! - **Save-area sizing** for sets of floating-point registers that must be
//!   preserved across a call.  Every float register is saved as one
//!   double-precision slot, so the arithmetic is byte-counting over a bitset.
//!
//! Both catalogs are fixed at compile time and never change for the life of
//! the process; everything here is a pure function over them.
//!
//! ```
//! use ppc_regs::{Fpr, FprSet, Gpr};
//!
//! // "sp" is an alias for r1
//! let sp: Gpr = "sp".parse()?;
//! assert_eq!(sp, Gpr::SP);
//! assert_eq!(sp.name(), "r1");
//!
//! // Size the save area for a pair of clobbered float registers
//! let clobbered: FprSet = [Fpr::from_code(1).unwrap(), Fpr::from_code(14).unwrap()]
//!     .into_iter()
//!     .collect();
//! assert_eq!(clobbered.size_in_bytes(), 16);
//! # Ok::<(), ppc_regs::Error>(())
//! ```
//!
//! Lookups that can miss return an [`Option`]; the [`FromStr`](std::str::FromStr)
//! impls wrap a miss into [`Error::UnknownRegister`] for callers that want to
//! report a parse error upward.

mod error;
pub mod fpr;
pub mod gpr;

pub use error::Error;
pub use fpr::{Fpr, FprSet};
pub use gpr::Gpr;
