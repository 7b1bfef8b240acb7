//! WebAssembly-style instruction set definitions.
//!
//! This crate provides the opcode table, the immediate operand shapes each
//! opcode carries, and the [`OperatorVisitor`] dispatch interface that
//! decoders drive and consumers implement.
//!
//! The vector extension opcodes and their lane immediates are only present
//! with the `simd` feature.

// The bitflags crate is used by the opcode table
pub use bitflags;

mod operators;

pub mod imm;
pub mod opcode;
pub mod types;
pub mod visitor;

pub use imm::{
    BranchImm, BranchTableImm, CallImm, CallIndirectImm, ControlStructureImm, GetOrSetVariableImm,
    Immediate, ImmediateOperand, Literal, LiteralImm, LiteralValue, LoadOrStoreImm, MemoryImm,
    NoImm, UnknownImm,
};
#[cfg(feature = "simd")]
pub use imm::{LaneIndexImm, ShuffleImm, SimdImmediate, SwizzleImm};
pub use opcode::{Opcode, OpcodeFlags, lookup, opcode_count, opcode_table};
pub use types::{ResultType, ValueType};
pub use visitor::{LOG_TARGET, Operator, OperatorVisitor, visit_operators};
