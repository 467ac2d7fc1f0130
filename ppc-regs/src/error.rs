//! Module containing the crate's universal error type
use thiserror::Error;

/// Universal error type for register parsing
#[derive(Error, Debug, Eq, PartialEq)]
pub enum Error {
    /// Name is neither a canonical register name nor a known alias
    #[error("unknown register {0}")]
    UnknownRegister(String),

    /// Code falls outside the register catalog
    #[error("register code {0} is out of range")]
    InvalidRegisterCode(u8),
}
