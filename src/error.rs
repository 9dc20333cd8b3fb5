//! Error kinds for script validation

use thiserror::Error;

/// Flat, numeric-coded validation failures.
///
/// Every kind is fatal to the current run: a rejected transaction is
/// simply invalid and must be resubmitted with corrected contents.
/// Unexpected host failures surface as `Syscall` with the host's own
/// code; domain-rule violations map to the most specific kind.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("script args have the wrong length")]
    ArgumentLength,

    #[error("malformed script, witness or cell field")]
    Encoding,

    #[error("host query failed with code {0}")]
    Syscall(i32),

    #[error("script exceeds the maximum size")]
    ScriptTooLong,

    #[error("capacity arithmetic overflowed")]
    Overflow,

    #[error("output pixel coordinate has no matching group input")]
    CoordinateMismatch,

    #[error("replacement output below the required capacity")]
    OutputAmountNotEnough,

    #[error("too many type-hash inputs")]
    TooManyTypeHashInputs,

    #[error("wallet input has no paired output")]
    PairingInputFailed,

    #[error("wallet output has no paired input")]
    PairingOutputFailed,

    #[error("duplicated input type hash")]
    DuplicatedInputTypeHash,

    #[error("duplicated output type hash")]
    DuplicatedOutputTypeHash,

    #[error("official fee outputs below the required amount")]
    OfficialFeeInsufficient,

    #[error("witness exceeds the maximum size")]
    WitnessTooLarge,

    #[error("signature verification failed")]
    SignatureMismatch,
}

impl ValidationError {
    /// Stable exit code matching the original on-chain deployment.
    pub fn code(&self) -> i32 {
        match self {
            Self::ArgumentLength => -1,
            Self::Encoding => -2,
            Self::Syscall(code) => *code,
            Self::ScriptTooLong => -21,
            Self::WitnessTooLarge => -22,
            Self::SignatureMismatch => -31,
            Self::Overflow => -51,
            Self::OutputAmountNotEnough => -52,
            Self::TooManyTypeHashInputs => -53,
            Self::PairingInputFailed => -54,
            Self::PairingOutputFailed => -55,
            Self::DuplicatedInputTypeHash => -56,
            Self::DuplicatedOutputTypeHash => -57,
            Self::OfficialFeeInsufficient => -58,
            Self::CoordinateMismatch => -61,
        }
    }
}

pub type Result<T> = std::result::Result<T, ValidationError>;
