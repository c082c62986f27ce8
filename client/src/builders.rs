//! Instruction builders, one per SMDAO operation.
//!
//! Each builder maps the caller's wallet key and typed arguments to a
//! complete [`Instruction`]: the fixed, ordered account list with its
//! signer/writable flags, and the opcode-tagged payload.  The flags are
//! owned here; callers never supply them.  Argument validation runs before
//! any encoding, so a builder either returns a well-formed instruction or
//! nothing.

use {
    crate::{pda, spl_token},
    log::trace,
    smdao_interface::{
        error::SmdaoError,
        instruction::SmdaoInstruction,
        state::ProposalType,
    },
    solana_instruction::{AccountMeta, Instruction},
    solana_pubkey::Pubkey,
    solana_sdk_ids::system_program,
};

/// Register a creator profile for `wallet`.
pub fn initialize_creator(
    wallet: &Pubkey,
    name: &str,
    platform_links: &[String],
) -> Result<Instruction, SmdaoError> {
    let data = SmdaoInstruction::InitializeCreator {
        name: name.to_string(),
        platform_links: platform_links.to_vec(),
    }
    .pack()?;

    let (creator_address, _) = pda::find_creator_address(wallet);
    trace!("initialize_creator: wallet={wallet} creator={creator_address}");

    Ok(Instruction {
        program_id: smdao_interface::id(),
        accounts: vec![
            AccountMeta::new(creator_address, false),
            AccountMeta::new(*wallet, true),
            AccountMeta::new_readonly(system_program::id(), false),
        ],
        data,
    })
}

/// Publish a proposal under `wallet`'s creator profile.
///
/// `proposal_id` is the id the program will assign: read it from the
/// program-state counter (`ProgramState::next_proposal_id`) so the proposal
/// account derivation matches what every later reader derives.
#[allow(clippy::too_many_arguments)]
pub fn create_proposal(
    wallet: &Pubkey,
    proposal_id: u64,
    title: &str,
    description: &str,
    options: &[String],
    proposal_type: ProposalType,
    end_time: u64,
) -> Result<Instruction, SmdaoError> {
    let data = SmdaoInstruction::CreateProposal {
        title: title.to_string(),
        description: description.to_string(),
        options: options.to_vec(),
        proposal_type,
        end_time,
    }
    .pack()?;

    let (proposal_address, _) = pda::find_proposal_address(proposal_id);
    let (creator_address, _) = pda::find_creator_address(wallet);
    let (program_state_address, _) = pda::find_program_state_address();
    trace!("create_proposal: wallet={wallet} id={proposal_id} proposal={proposal_address}");

    Ok(Instruction {
        program_id: smdao_interface::id(),
        accounts: vec![
            AccountMeta::new(proposal_address, false),
            AccountMeta::new(creator_address, false),
            AccountMeta::new(*wallet, true),
            AccountMeta::new(program_state_address, false),
            AccountMeta::new_readonly(system_program::id(), false),
        ],
        data,
    })
}

/// Cast a weighted vote from `wallet` on one option of a proposal.
pub fn vote(
    wallet: &Pubkey,
    proposal_id: u64,
    option_index: u8,
    vote_weight: u64,
) -> Result<Instruction, SmdaoError> {
    let data = SmdaoInstruction::Vote {
        proposal_id,
        option_index,
        vote_weight,
    }
    .pack()?;

    let (user_address, _) = pda::find_user_address(wallet);
    let (proposal_address, _) = pda::find_proposal_address(proposal_id);
    trace!("vote: wallet={wallet} proposal={proposal_id} option={option_index} weight={vote_weight}");

    Ok(Instruction {
        program_id: smdao_interface::id(),
        accounts: vec![
            AccountMeta::new(user_address, false),
            AccountMeta::new(proposal_address, false),
            AccountMeta::new_readonly(*wallet, true),
        ],
        data,
    })
}

/// Lock `amount` tokens from `token_account` into `wallet`'s stake vault.
pub fn stake(
    wallet: &Pubkey,
    token_account: &Pubkey,
    amount: u64,
) -> Result<Instruction, SmdaoError> {
    let data = SmdaoInstruction::Stake { amount }.pack()?;
    trace!("stake: wallet={wallet} amount={amount}");
    Ok(Instruction {
        program_id: smdao_interface::id(),
        accounts: token_flow_accounts(wallet, token_account, pda::find_stake_address(wallet).0),
        data,
    })
}

/// Release `amount` staked tokens from `wallet`'s stake vault back to
/// `token_account`.
pub fn unstake(
    wallet: &Pubkey,
    token_account: &Pubkey,
    amount: u64,
) -> Result<Instruction, SmdaoError> {
    let data = SmdaoInstruction::Unstake { amount }.pack()?;
    trace!("unstake: wallet={wallet} amount={amount}");
    Ok(Instruction {
        program_id: smdao_interface::id(),
        accounts: token_flow_accounts(wallet, token_account, pda::find_stake_address(wallet).0),
        data,
    })
}

/// Claim all accrued rewards for `wallet` into `token_account`.
pub fn claim_rewards(
    wallet: &Pubkey,
    token_account: &Pubkey,
) -> Result<Instruction, SmdaoError> {
    let data = SmdaoInstruction::ClaimRewards.pack()?;
    trace!("claim_rewards: wallet={wallet}");
    Ok(Instruction {
        program_id: smdao_interface::id(),
        accounts: token_flow_accounts(wallet, token_account, pda::find_rewards_address(wallet).0),
        data,
    })
}

/// The shared account list for operations that move tokens between a user's
/// token account and one of their program vaults: user PDA, token account,
/// vault, signing wallet, token program.
fn token_flow_accounts(
    wallet: &Pubkey,
    token_account: &Pubkey,
    vault: Pubkey,
) -> Vec<AccountMeta> {
    let (user_address, _) = pda::find_user_address(wallet);
    vec![
        AccountMeta::new(user_address, false),
        AccountMeta::new(*token_account, false),
        AccountMeta::new(vault, false),
        AccountMeta::new_readonly(*wallet, true),
        AccountMeta::new_readonly(spl_token::id(), false),
    ]
}
