//! Account state types for the SMDAO governance program.
//!
//! Serialised with Borsh.  The program allocates accounts larger than their
//! payload and leaves the tail zeroed, so every `deserialize` here reads a
//! leading prefix and tolerates trailing padding.  There is no discriminator
//! byte; the `initialized` flag distinguishes live accounts from blank ones.

use {
    crate::error::{EncodingError, ValidationError},
    borsh::{BorshDeserialize, BorshSerialize},
    solana_pubkey::Pubkey,
};

/// The kind of proposal a creator publishes.
///
/// The tag doubles as the wire selector byte.
#[derive(Debug, Clone, Copy, PartialEq, Eq, BorshSerialize, BorshDeserialize)]
#[borsh(use_discriminant = true)]
pub enum ProposalType {
    /// Lightweight suggestion; low stake requirement to vote.
    Idea = 0,
    /// Full proposal; higher stake requirement to vote.
    Proposal = 1,
}

impl ProposalType {
    /// The single-byte wire selector.
    pub fn tag(self) -> u8 {
        self as u8
    }

    /// Inverse of [`Self::tag`].
    pub fn from_tag(tag: u8) -> Result<Self, EncodingError> {
        match tag {
            0 => Ok(Self::Idea),
            1 => Ok(Self::Proposal),
            tag => Err(EncodingError::UnknownProposalType { tag }),
        }
    }
}

// ---------------------------------------------------------------------------
// Creator
// ---------------------------------------------------------------------------

/// A creator's on-chain profile.
#[derive(Debug, Clone, PartialEq, Eq, BorshSerialize, BorshDeserialize)]
pub struct Creator {
    pub initialized: bool,

    /// Wallet that owns this profile.
    pub owner: Pubkey,

    /// Display name.
    pub name: String,

    /// Links to the creator's platforms, in the order they were registered.
    pub platform_links: Vec<String>,

    /// Ids of proposals this creator has published.
    pub proposals: Vec<u64>,

    /// Tokens pooled under this creator.
    pub token_pool: u64,
}

impl Creator {
    /// Deserialise from raw account data, tolerating trailing padding.
    pub fn deserialize(data: &[u8]) -> Result<Self, std::io::Error> {
        let mut cursor = data;
        BorshDeserialize::deserialize_reader(&mut cursor)
    }

    pub fn is_initialized(&self) -> bool {
        self.initialized
    }
}

// ---------------------------------------------------------------------------
// User
// ---------------------------------------------------------------------------

/// One cast vote, kept in the voter's history.
#[derive(Debug, Clone, PartialEq, Eq, BorshSerialize, BorshDeserialize)]
pub struct VoteRecord {
    pub proposal_id: u64,
    pub option_index: u8,
    pub vote_weight: u64,
    /// Unix milliseconds when the vote was cast.
    pub timestamp: u64,
}

/// A wallet's staking and voting account.
#[derive(Debug, Clone, PartialEq, Eq, BorshSerialize, BorshDeserialize)]
pub struct User {
    pub initialized: bool,

    /// The owning wallet.
    pub wallet: Pubkey,

    /// Currently staked balance.  Caps the weight of any single vote.
    pub staked_amount: u64,

    /// Every vote this user has cast.
    pub voting_history: Vec<VoteRecord>,

    /// Lifetime rewards claimed so far.
    pub rewards_earned: u64,

    /// Unix milliseconds of the last reward claim; accrual restarts here.
    pub last_claim_time: u64,
}

impl User {
    /// Deserialise from raw account data, tolerating trailing padding.
    pub fn deserialize(data: &[u8]) -> Result<Self, std::io::Error> {
        let mut cursor = data;
        BorshDeserialize::deserialize_reader(&mut cursor)
    }

    pub fn is_initialized(&self) -> bool {
        self.initialized
    }
}

// ---------------------------------------------------------------------------
// Proposal
// ---------------------------------------------------------------------------

/// On-chain state of a single proposal.
#[derive(Debug, Clone, PartialEq, Eq, BorshSerialize, BorshDeserialize)]
pub struct Proposal {
    pub initialized: bool,

    /// Monotonically increasing id assigned from the program state counter.
    pub id: u64,

    /// The creator profile account this proposal belongs to.
    pub creator: Pubkey,

    pub title: String,

    pub description: String,

    /// Vote options; index order matches the `votes` buckets.
    pub options: Vec<String>,

    /// Accumulated vote weight per option, same order as `options`.
    pub votes: Vec<u64>,

    pub proposal_type: ProposalType,

    /// Unix milliseconds when the proposal was created.
    pub create_time: u64,

    /// Unix milliseconds when voting closes.
    pub end_time: u64,

    /// Total weight across all options.
    pub total_votes: u64,

    pub is_active: bool,
}

impl Proposal {
    /// Deserialise from raw account data, tolerating trailing padding.
    pub fn deserialize(data: &[u8]) -> Result<Self, std::io::Error> {
        let mut cursor = data;
        BorshDeserialize::deserialize_reader(&mut cursor)
    }

    pub fn is_initialized(&self) -> bool {
        self.initialized
    }

    pub fn option_count(&self) -> usize {
        self.options.len()
    }

    /// Whether votes are still being accepted at `now_ms`.
    pub fn is_open(&self, now_ms: u64) -> bool {
        self.is_active && now_ms <= self.end_time
    }

    /// Reject option indices past the end of the option list.
    pub fn check_option_index(&self, index: u8) -> Result<(), ValidationError> {
        if usize::from(index) >= self.options.len() {
            return Err(ValidationError::OptionIndexOutOfRange {
                index,
                option_count: self.options.len(),
            });
        }
        Ok(())
    }

    /// Accumulated weight for one option, `None` if the index is out of
    /// range.
    pub fn votes_for_option(&self, index: u8) -> Option<u64> {
        self.votes.get(usize::from(index)).copied()
    }
}

// ---------------------------------------------------------------------------
// ProgramState
// ---------------------------------------------------------------------------

/// Global counter the program uses to assign proposal ids.
#[derive(Debug, Clone, PartialEq, Eq, BorshSerialize, BorshDeserialize)]
pub struct ProgramState {
    pub proposal_counter: u64,
}

impl ProgramState {
    /// Deserialise from raw account data, tolerating trailing padding.
    pub fn deserialize(data: &[u8]) -> Result<Self, std::io::Error> {
        let mut cursor = data;
        BorshDeserialize::deserialize_reader(&mut cursor)
    }

    /// The id the program will assign to the next created proposal.
    pub fn next_proposal_id(&self) -> u64 {
        self.proposal_counter
    }
}
