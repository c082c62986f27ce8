//! SMDAO Governance Program Interface
//!
//! Wire-level contract between the SMDAO dApp and the deployed governance
//! program: the instruction set and its payload codec, the account state
//! layouts the program writes, and the constants both sides must agree on.
//!
//! ## Operations
//!
//! | Opcode | Instruction       | Payload                                              |
//! |:------:|-------------------|------------------------------------------------------|
//! | 0      | InitializeCreator | name, platform links                                 |
//! | 1      | CreateProposal    | title, description, options, proposal type, end time |
//! | 2      | Vote              | proposal id, option index, vote weight               |
//! | 3      | Stake             | amount                                               |
//! | 4      | Unstake           | amount                                               |
//! | 5      | ClaimRewards      | —                                                    |
//!
//! ## Wire format
//!
//! The first payload byte is the opcode; it is the program's sole dispatch
//! key and its values are frozen.  Text is a 4-byte little-endian length
//! prefix followed by raw UTF-8 bytes; a list of text is a 4-byte
//! little-endian count prefix followed by each element in order.  Wider
//! integers are little-endian at their natural width; enum selectors are
//! single unsigned bytes.
//!
//! Everything here is pure and synchronous.  Signing and submission belong
//! to the wallet and transport layers.

pub mod constants;
pub mod error;
pub mod instruction;
pub mod state;
pub mod wire;

solana_pubkey::declare_id!("EnQqRpk1hTBoLYNeQ565ayWrCWTADL9JmcuMHgGX64Xp");
