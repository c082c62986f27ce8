//! SMDAO Client SDK
//!
//! Everything a wallet-connected front end needs to talk to the SMDAO
//! governance program, short of signing and submitting:
//!
//! - [`pda`]: deterministic account addresses from the program's seed
//!   families and the caller's wallet key
//! - [`builders`]: one function per on-chain operation, producing a
//!   complete [`solana_instruction::Instruction`] with its ordered account
//!   list and packed payload
//! - [`preflight`]: the program's argument rules checked locally against
//!   fetched account state, before a transaction is ever built
//! - [`rewards`]: stake-threshold and reward-accrual estimates for display
//!
//! Each call is independent and pure; the wallet layer owns identity,
//! signatures, and submission.

pub mod builders;
pub mod pda;
pub mod preflight;
pub mod rewards;

/// The SPL token program, referenced by the stake, unstake, and
/// claim-rewards account lists.
pub mod spl_token {
    solana_pubkey::declare_id!("TokenkegQfeZyiNwAJbNbGKPFXCWuBvf9Ss623VQ5DA");
}
