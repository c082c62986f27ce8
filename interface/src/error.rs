//! Error types for the SMDAO interface and client layers.

use thiserror::Error;

/// Caller-supplied arguments violate a documented constraint.
///
/// Raised before any encoding work begins and never retried.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("proposal must offer 2 to 5 options, got {count}")]
    OptionCountOutOfRange { count: usize },

    #[error("option index {index} is out of range for a proposal with {option_count} options")]
    OptionIndexOutOfRange { index: u8, option_count: usize },

    #[error("vote weight {weight} exceeds staked balance {staked}")]
    VoteWeightExceedsStake { weight: u64, staked: u64 },

    #[error("staked balance {staked} is below the required minimum {required}")]
    InsufficientStake { staked: u64, required: u64 },

    #[error("proposal is not active")]
    ProposalNotActive,

    #[error("voting closed at {end_time}")]
    VotingClosed { end_time: u64 },

    #[error("unstake amount {amount} exceeds staked balance {staked}")]
    UnstakeExceedsStake { amount: u64, staked: u64 },

    #[error("account has not been initialized")]
    UninitializedAccount,
}

/// The wire layer could not satisfy an internal invariant of the fixed
/// payload layout.  Treated as a programming defect, not retried.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum EncodingError {
    #[error("text field of {len} bytes does not fit a 32-bit length prefix")]
    TextTooLong { len: usize },

    #[error("list of {len} elements does not fit a 32-bit count prefix")]
    ListTooLong { len: usize },

    #[error("payload ended unexpectedly at byte {offset}")]
    UnexpectedEndOfData { offset: usize },

    #[error("{remaining} trailing bytes after the final field")]
    TrailingData { remaining: usize },

    #[error("unknown opcode {opcode}")]
    UnknownOpcode { opcode: u8 },

    #[error("unknown proposal type tag {tag}")]
    UnknownProposalType { tag: u8 },

    #[error("text field is not valid UTF-8")]
    InvalidUtf8,
}

/// Unified failure for instruction packing and building.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SmdaoError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error(transparent)]
    Encoding(#[from] EncodingError),
}
