//! Constants shared with the SMDAO governance program.

// ---------------------------------------------------------------------------
// PDA seeds
//
// Each seeded account is derived from one of these prefixes plus, where
// noted, the owning wallet's key or the proposal's decimal id.
// ---------------------------------------------------------------------------

/// Creator profile account: `["creator", wallet]`.
pub const CREATOR_SEED: &[u8] = b"creator";

/// User staking/voting account: `["user", wallet]`.
pub const USER_SEED: &[u8] = b"user";

/// Global proposal counter: `["program-state"]`.
pub const PROGRAM_STATE_SEED: &[u8] = b"program-state";

/// Proposal account: `["proposal", decimal proposal id]`.
pub const PROPOSAL_SEED: &[u8] = b"proposal";

/// Per-user stake vault: `["stake", wallet]`.
pub const STAKE_SEED: &[u8] = b"stake";

/// Per-user rewards vault: `["rewards", wallet]`.
pub const REWARDS_SEED: &[u8] = b"rewards";

// ---------------------------------------------------------------------------
// Proposal limits
// ---------------------------------------------------------------------------

/// Fewest vote options a proposal may offer.
pub const MIN_PROPOSAL_OPTIONS: usize = 2;

/// Most vote options a proposal may offer.  The program's vote-bucket
/// layout depends on this bound.
pub const MAX_PROPOSAL_OPTIONS: usize = 5;

// ---------------------------------------------------------------------------
// Stake thresholds
//
// Minimum staked balance required to vote, by proposal type.
// ---------------------------------------------------------------------------

/// Idea proposals: low stake requirement.
pub const MIN_STAKE_FOR_IDEA: u64 = 10;

/// Full proposals: higher stake requirement.
pub const MIN_STAKE_FOR_PROPOSAL: u64 = 100;

// ---------------------------------------------------------------------------
// Reward accrual
//
// The program accrues 1 token per day per `REWARD_STAKE_UNIT` staked.
// ---------------------------------------------------------------------------

/// Staked tokens per unit of daily reward.
pub const REWARD_STAKE_UNIT: u64 = 100;

/// Milliseconds per reward accrual day.
pub const MS_PER_DAY: u64 = 86_400_000;
