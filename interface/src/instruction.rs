//! Instruction definitions for the SMDAO governance program.
//!
//! The payload layout is a frozen compatibility contract with the deployed
//! program, so it is encoded by hand against the conventions in [`crate::wire`]
//! rather than derived: the first byte is the opcode, text is u32-LE
//! length-prefixed UTF-8, lists are u32-LE count-prefixed, and wider integers
//! are little-endian at natural width.  Opcode values must never be reordered
//! or reused; doing so is a wire-incompatible breaking change.

use crate::{
    constants::{MAX_PROPOSAL_OPTIONS, MIN_PROPOSAL_OPTIONS},
    error::{EncodingError, SmdaoError, ValidationError},
    state::ProposalType,
    wire,
};

/// Instructions accepted by the SMDAO governance program.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SmdaoInstruction {
    /// Register a creator profile for the signing wallet.  Sent once per
    /// wallet.
    ///
    /// # Accounts expected
    ///
    /// 0. `[writable]`         — Creator profile PDA (`["creator", wallet]`).
    /// 1. `[signer, writable]` — Wallet registering the profile (pays rent).
    /// 2. `[]`                 — System program.
    InitializeCreator {
        name: String,
        platform_links: Vec<String>,
    },

    /// Create a new proposal under the signer's creator profile.
    ///
    /// Option order is positional: the program tallies votes into the bucket
    /// at each option's index, so the list order is semantically significant.
    ///
    /// # Accounts expected
    ///
    /// 0. `[writable]`         — Proposal PDA (`["proposal", decimal id]`).
    /// 1. `[writable]`         — Creator profile PDA.
    /// 2. `[signer, writable]` — Creator's wallet (pays rent).
    /// 3. `[writable]`         — Program state PDA (proposal counter).
    /// 4. `[]`                 — System program.
    CreateProposal {
        title: String,
        description: String,
        /// 2 to 5 entries; positional vote-bucket index.
        options: Vec<String>,
        proposal_type: ProposalType,
        /// Voting deadline, unix milliseconds.
        end_time: u64,
    },

    /// Cast a weighted vote for one option of an open proposal.
    ///
    /// # Accounts expected
    ///
    /// 0. `[writable]`         — User account PDA (`["user", wallet]`).
    /// 1. `[writable]`         — Proposal PDA.
    /// 2. `[signer]`           — Voter's wallet.
    Vote {
        proposal_id: u64,
        /// Must match an existing option position.
        option_index: u8,
        vote_weight: u64,
    },

    /// Lock tokens into the signer's stake vault.
    ///
    /// # Accounts expected
    ///
    /// 0. `[writable]`         — User account PDA.
    /// 1. `[writable]`         — User's token account (source of funds).
    /// 2. `[writable]`         — Stake vault PDA (`["stake", wallet]`).
    /// 3. `[signer]`           — Wallet.
    /// 4. `[]`                 — SPL token program.
    Stake { amount: u64 },

    /// Release previously staked tokens back to the signer.
    ///
    /// # Accounts expected
    ///
    /// 0. `[writable]`         — User account PDA.
    /// 1. `[writable]`         — User's token account (receives funds).
    /// 2. `[writable]`         — Stake vault PDA.
    /// 3. `[signer]`           — Wallet.
    /// 4. `[]`                 — SPL token program.
    Unstake { amount: u64 },

    /// Claim all accrued staking rewards.  Zero-payload instruction.
    ///
    /// # Accounts expected
    ///
    /// 0. `[writable]`         — User account PDA.
    /// 1. `[writable]`         — User's token account (receives rewards).
    /// 2. `[writable]`         — Rewards vault PDA (`["rewards", wallet]`).
    /// 3. `[signer]`           — Wallet.
    /// 4. `[]`                 — SPL token program.
    ClaimRewards,
}

impl SmdaoInstruction {
    /// The leading dispatch tag for this instruction.
    pub fn opcode(&self) -> u8 {
        match self {
            Self::InitializeCreator { .. } => 0,
            Self::CreateProposal { .. } => 1,
            Self::Vote { .. } => 2,
            Self::Stake { .. } => 3,
            Self::Unstake { .. } => 4,
            Self::ClaimRewards => 5,
        }
    }

    /// Check the documented argument constraints without encoding anything.
    pub fn validate(&self) -> Result<(), ValidationError> {
        match self {
            Self::CreateProposal { options, .. } => {
                let count = options.len();
                if !(MIN_PROPOSAL_OPTIONS..=MAX_PROPOSAL_OPTIONS).contains(&count) {
                    return Err(ValidationError::OptionCountOutOfRange { count });
                }
                Ok(())
            }
            Self::InitializeCreator { .. }
            | Self::Vote { .. }
            | Self::Stake { .. }
            | Self::Unstake { .. }
            | Self::ClaimRewards => Ok(()),
        }
    }

    /// Serialise into the program's payload layout.
    ///
    /// Pure: identical arguments always produce byte-identical output.
    /// Fails with [`ValidationError`] before any bytes are produced if an
    /// argument violates a documented constraint.
    pub fn pack(&self) -> Result<Vec<u8>, SmdaoError> {
        self.validate()?;

        let mut buf = vec![self.opcode()];
        match self {
            Self::InitializeCreator {
                name,
                platform_links,
            } => {
                wire::append_str(&mut buf, name)?;
                wire::append_str_list(&mut buf, platform_links)?;
            }
            Self::CreateProposal {
                title,
                description,
                options,
                proposal_type,
                end_time,
            } => {
                wire::append_str(&mut buf, title)?;
                wire::append_str(&mut buf, description)?;
                wire::append_str_list(&mut buf, options)?;
                buf.push(proposal_type.tag());
                wire::append_u64(&mut buf, *end_time);
            }
            Self::Vote {
                proposal_id,
                option_index,
                vote_weight,
            } => {
                wire::append_u64(&mut buf, *proposal_id);
                buf.push(*option_index);
                wire::append_u64(&mut buf, *vote_weight);
            }
            Self::Stake { amount } | Self::Unstake { amount } => {
                wire::append_u64(&mut buf, *amount);
            }
            Self::ClaimRewards => {}
        }
        Ok(buf)
    }

    /// Inverse of [`Self::pack`].
    ///
    /// Rejects unknown opcodes, truncated payloads, trailing bytes, and
    /// invalid UTF-8, then re-applies the argument validation `pack`
    /// enforces.
    pub fn unpack(data: &[u8]) -> Result<Self, SmdaoError> {
        let mut reader = wire::Reader::new(data);
        let opcode = reader.read_u8()?;
        let instruction = match opcode {
            0 => Self::InitializeCreator {
                name: reader.read_str()?,
                platform_links: reader.read_str_list()?,
            },
            1 => {
                let title = reader.read_str()?;
                let description = reader.read_str()?;
                let options = reader.read_str_list()?;
                let proposal_type = ProposalType::from_tag(reader.read_u8()?)?;
                let end_time = reader.read_u64()?;
                Self::CreateProposal {
                    title,
                    description,
                    options,
                    proposal_type,
                    end_time,
                }
            }
            2 => Self::Vote {
                proposal_id: reader.read_u64()?,
                option_index: reader.read_u8()?,
                vote_weight: reader.read_u64()?,
            },
            3 => Self::Stake {
                amount: reader.read_u64()?,
            },
            4 => Self::Unstake {
                amount: reader.read_u64()?,
            },
            5 => Self::ClaimRewards,
            opcode => return Err(EncodingError::UnknownOpcode { opcode }.into()),
        };
        reader.finish()?;
        instruction.validate()?;
        Ok(instruction)
    }
}
