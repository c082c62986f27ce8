//! Property-based tests for the instruction codec.
//!
//! Properties tested:
//! 1. `unpack(pack(x)) == x` for every encodable instruction.
//! 2. Packing is idempotent: identical inputs, byte-identical output.
//! 3. The opcode tag leads every payload and is stable per variant.
//! 4. Option lists outside [2, 5] never produce a payload.
//! 5. ClaimRewards is exactly one byte.

#[cfg(test)]
mod tests {
    use {
        proptest::prelude::*,
        smdao_interface::{instruction::SmdaoInstruction, state::ProposalType},
    };

    fn arb_proposal_type() -> impl Strategy<Value = ProposalType> {
        prop_oneof![Just(ProposalType::Idea), Just(ProposalType::Proposal)]
    }

    fn arb_instruction() -> impl Strategy<Value = SmdaoInstruction> {
        prop_oneof![
            (any::<String>(), prop::collection::vec(any::<String>(), 0..4)).prop_map(
                |(name, platform_links)| SmdaoInstruction::InitializeCreator {
                    name,
                    platform_links,
                },
            ),
            (
                any::<String>(),
                any::<String>(),
                prop::collection::vec(any::<String>(), 2..=5),
                arb_proposal_type(),
                any::<u64>(),
            )
                .prop_map(
                    |(title, description, options, proposal_type, end_time)| {
                        SmdaoInstruction::CreateProposal {
                            title,
                            description,
                            options,
                            proposal_type,
                            end_time,
                        }
                    },
                ),
            (any::<u64>(), any::<u8>(), any::<u64>()).prop_map(
                |(proposal_id, option_index, vote_weight)| SmdaoInstruction::Vote {
                    proposal_id,
                    option_index,
                    vote_weight,
                },
            ),
            any::<u64>().prop_map(|amount| SmdaoInstruction::Stake { amount }),
            any::<u64>().prop_map(|amount| SmdaoInstruction::Unstake { amount }),
            Just(SmdaoInstruction::ClaimRewards),
        ]
    }

    // ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
    // 1. Round trip
    // ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(500))]

        #[test]
        fn pack_unpack_round_trips(instruction in arb_instruction()) {
            let packed = instruction.pack().unwrap();
            let unpacked = SmdaoInstruction::unpack(&packed).unwrap();
            prop_assert_eq!(unpacked, instruction);
        }
    }

    // ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
    // 2. Idempotence
    // ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(500))]

        #[test]
        fn pack_is_idempotent(instruction in arb_instruction()) {
            prop_assert_eq!(instruction.pack().unwrap(), instruction.pack().unwrap());
        }
    }

    // ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
    // 3. Opcode stability
    // ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(500))]

        #[test]
        fn opcode_leads_every_payload(instruction in arb_instruction()) {
            let packed = instruction.pack().unwrap();
            prop_assert_eq!(packed[0], instruction.opcode());

            // The tag table is frozen.
            let expected = match &instruction {
                SmdaoInstruction::InitializeCreator { .. } => 0,
                SmdaoInstruction::CreateProposal { .. } => 1,
                SmdaoInstruction::Vote { .. } => 2,
                SmdaoInstruction::Stake { .. } => 3,
                SmdaoInstruction::Unstake { .. } => 4,
                SmdaoInstruction::ClaimRewards => 5,
            };
            prop_assert_eq!(instruction.opcode(), expected);
        }
    }

    // ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
    // 4. Option-count bound is enforced before encoding
    // ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(200))]

        #[test]
        fn oversized_option_lists_never_encode(
            title in any::<String>(),
            description in any::<String>(),
            options in prop::collection::vec(any::<String>(), 6..10),
            proposal_type in arb_proposal_type(),
            end_time in any::<u64>(),
        ) {
            let result = SmdaoInstruction::CreateProposal {
                title,
                description,
                options,
                proposal_type,
                end_time,
            }
            .pack();
            prop_assert!(result.is_err());
        }

        #[test]
        fn undersized_option_lists_never_encode(
            title in any::<String>(),
            description in any::<String>(),
            options in prop::collection::vec(any::<String>(), 0..2),
            proposal_type in arb_proposal_type(),
            end_time in any::<u64>(),
        ) {
            let result = SmdaoInstruction::CreateProposal {
                title,
                description,
                options,
                proposal_type,
                end_time,
            }
            .pack();
            prop_assert!(result.is_err());
        }
    }

    // ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
    // 5. Zero-payload instruction
    // ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

    #[test]
    fn claim_rewards_is_exactly_one_byte() {
        assert_eq!(SmdaoInstruction::ClaimRewards.pack().unwrap(), vec![5]);
    }
}
