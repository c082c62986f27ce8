//! SMDAO Property-Based Invariant Tests
//!
//! Uses proptest to verify the wire-format laws of the instruction codec:
//! - Length-prefixed text and list encodings round-trip exactly
//! - Instruction packing is pure, idempotent, and opcode-led
//! - Address derivation and instruction building are deterministic

pub mod instruction_invariants;
pub mod wire_invariants;
