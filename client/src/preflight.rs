//! Local enforcement of the program's argument rules.
//!
//! The program re-checks everything on-chain; running the same rules here
//! against already-fetched account state lets a front end reject a bad
//! action before it builds, signs, and submits a doomed transaction.  All
//! checks are pure functions over decoded state.

use {
    crate::rewards,
    smdao_interface::{
        constants::{MAX_PROPOSAL_OPTIONS, MIN_PROPOSAL_OPTIONS},
        error::ValidationError,
        state::{Creator, Proposal, User},
    },
};

/// Can `user` cast this vote on `proposal` at `now_ms`?
///
/// Checks, in order: both accounts initialized, proposal active, voting
/// window still open, option index in range, stake at or above the
/// proposal-type minimum, weight within the staked balance.
pub fn check_vote(
    proposal: &Proposal,
    user: &User,
    option_index: u8,
    vote_weight: u64,
    now_ms: u64,
) -> Result<(), ValidationError> {
    if !user.is_initialized() || !proposal.is_initialized() {
        return Err(ValidationError::UninitializedAccount);
    }
    if !proposal.is_active {
        return Err(ValidationError::ProposalNotActive);
    }
    if now_ms > proposal.end_time {
        return Err(ValidationError::VotingClosed {
            end_time: proposal.end_time,
        });
    }
    proposal.check_option_index(option_index)?;

    let required = rewards::min_stake_to_vote(proposal.proposal_type);
    if user.staked_amount < required {
        return Err(ValidationError::InsufficientStake {
            staked: user.staked_amount,
            required,
        });
    }
    if vote_weight > user.staked_amount {
        return Err(ValidationError::VoteWeightExceedsStake {
            weight: vote_weight,
            staked: user.staked_amount,
        });
    }
    Ok(())
}

/// Can `user` release `amount` staked tokens?
pub fn check_unstake(user: &User, amount: u64) -> Result<(), ValidationError> {
    if !user.is_initialized() {
        return Err(ValidationError::UninitializedAccount);
    }
    if amount > user.staked_amount {
        return Err(ValidationError::UnstakeExceedsStake {
            amount,
            staked: user.staked_amount,
        });
    }
    Ok(())
}

/// Can `creator` publish a proposal with these options?
pub fn check_create_proposal(
    creator: &Creator,
    options: &[String],
) -> Result<(), ValidationError> {
    if !creator.is_initialized() {
        return Err(ValidationError::UninitializedAccount);
    }
    let count = options.len();
    if !(MIN_PROPOSAL_OPTIONS..=MAX_PROPOSAL_OPTIONS).contains(&count) {
        return Err(ValidationError::OptionCountOutOfRange { count });
    }
    Ok(())
}
