//! Program-derived addresses for SMDAO accounts.
//!
//! Every seeded account the program touches is derived here from a fixed
//! seed prefix plus, where applicable, the owning wallet's key or the
//! proposal's decimal id.  Derivation is deterministic: the same inputs
//! always yield the same `(address, bump)` pair.

use {
    smdao_interface::constants::{
        CREATOR_SEED, PROGRAM_STATE_SEED, PROPOSAL_SEED, REWARDS_SEED, STAKE_SEED, USER_SEED,
    },
    solana_pubkey::Pubkey,
};

/// Creator profile account for `wallet`.
pub fn find_creator_address(wallet: &Pubkey) -> (Pubkey, u8) {
    Pubkey::find_program_address(&[CREATOR_SEED, wallet.as_ref()], &smdao_interface::id())
}

/// User staking/voting account for `wallet`.
pub fn find_user_address(wallet: &Pubkey) -> (Pubkey, u8) {
    Pubkey::find_program_address(&[USER_SEED, wallet.as_ref()], &smdao_interface::id())
}

/// The singleton program-state account holding the proposal counter.
pub fn find_program_state_address() -> (Pubkey, u8) {
    Pubkey::find_program_address(&[PROGRAM_STATE_SEED], &smdao_interface::id())
}

/// Proposal account for `proposal_id`.
///
/// The id is seeded as its decimal string, matching how every reader of the
/// account derives it.
pub fn find_proposal_address(proposal_id: u64) -> (Pubkey, u8) {
    Pubkey::find_program_address(
        &[PROPOSAL_SEED, proposal_id.to_string().as_bytes()],
        &smdao_interface::id(),
    )
}

/// Stake vault for `wallet`.
pub fn find_stake_address(wallet: &Pubkey) -> (Pubkey, u8) {
    Pubkey::find_program_address(&[STAKE_SEED, wallet.as_ref()], &smdao_interface::id())
}

/// Rewards vault for `wallet`.
pub fn find_rewards_address(wallet: &Pubkey) -> (Pubkey, u8) {
    Pubkey::find_program_address(&[REWARDS_SEED, wallet.as_ref()], &smdao_interface::id())
}
