//! Stake thresholds and reward-accrual estimates.
//!
//! The program is the source of truth for reward accounting; these mirrors
//! of its formulas let a front end show a user what claiming now would
//! yield, without a round trip.
//!
//! Accrual: 1 token per day per [`REWARD_STAKE_UNIT`] staked, measured from
//! the last claim.

use smdao_interface::{
    constants::{MIN_STAKE_FOR_IDEA, MIN_STAKE_FOR_PROPOSAL, MS_PER_DAY, REWARD_STAKE_UNIT},
    state::ProposalType,
};

/// Minimum staked balance required to vote on a proposal of this type.
pub fn min_stake_to_vote(proposal_type: ProposalType) -> u64 {
    match proposal_type {
        ProposalType::Idea => MIN_STAKE_FOR_IDEA,
        ProposalType::Proposal => MIN_STAKE_FOR_PROPOSAL,
    }
}

/// Rewards accrued between `last_claim_time_ms` and `now_ms` on
/// `staked_amount`.
///
/// `reward = (staked / unit) × elapsed_ms / ms_per_day`
///
/// Zero when `now_ms` does not exceed the last claim; `None` on arithmetic
/// overflow (unreachable for sane inputs).
pub fn pending_rewards(
    staked_amount: u64,
    last_claim_time_ms: u64,
    now_ms: u64,
) -> Option<u64> {
    if now_ms <= last_claim_time_ms {
        return Some(0);
    }
    let elapsed_ms = now_ms.saturating_sub(last_claim_time_ms);
    let daily_rate = staked_amount.checked_div(REWARD_STAKE_UNIT)?;

    let reward = (daily_rate as u128)
        .checked_mul(elapsed_ms as u128)?
        .checked_div(MS_PER_DAY as u128)?;
    u64::try_from(reward).ok()
}
