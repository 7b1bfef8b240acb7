//! Textual description of immediate operands.
//!
//! The output of [`describe_immediate`] is appended directly after an
//! opcode's mnemonic, so every non-empty description starts with a space.
//! Formatting never fails: references to functions or types that are not in
//! the module are rendered as [`INVALID_FUNCTION_INDEX`] or
//! [`INVALID_TYPE_INDEX`]; the only side effect is a `trace` record carrying
//! the underlying [`LookupError`].
//!
//! Vector immediates are described whenever `oplog-isa` is built with its
//! `simd` feature, whichever crate enabled it.

use std::fmt::{self, Write};

use oplog_ir::{FunctionType, LookupError, Module};
use oplog_isa::{Immediate, Opcode};

/// Rendered in place of a signature when a call names a function outside the
/// function index space.
pub const INVALID_FUNCTION_INDEX: &str = "<invalid function index>";

/// Rendered in place of a signature when a type index is outside the type
/// table.
pub const INVALID_TYPE_INDEX: &str = "<invalid type index>";

/// Mnemonic followed by the operand description, e.g. `"br_table 1 [0,2]"`.
pub fn describe_operator(module: &Module, opcode: Opcode, imm: Immediate<'_>) -> String {
    let mut out = String::from(opcode.name());
    write_immediate(&mut out, module, imm);
    out
}

/// Operand description alone; empty for opcodes without operands.
pub fn describe_immediate(module: &Module, imm: Immediate<'_>) -> String {
    let mut out = String::new();
    write_immediate(&mut out, module, imm);
    out
}

fn write_immediate(out: &mut String, module: &Module, imm: Immediate<'_>) {
    oplog_isa::match_immediate!(imm, {
        Immediate::None | Immediate::Memory => {}
        Immediate::ControlStructure { result_type } => {
            let _ = write!(out, " : {result_type}");
        }
        Immediate::Branch { target_depth } => {
            let _ = write!(out, " {target_depth}");
        }
        Immediate::BranchTable {
            default_target_depth,
            target_depths,
        } => {
            let _ = write!(out, " {default_target_depth} ");
            write_list(out, target_depths);
        }
        Immediate::Literal(value) => {
            let _ = write!(out, " {value}");
        }
        Immediate::Variable { variable_index } => {
            let _ = write!(out, " {variable_index}");
        }
        Immediate::Call { function_index } => {
            let _ = write!(out, " {function_index} ");
            write_signature(out, module.function_type(function_index));
        }
        Immediate::CallIndirect { type_index } => {
            out.push(' ');
            write_signature(out, module.signature(type_index));
        }
        Immediate::LoadOrStore {
            alignment_log2,
            offset,
        } => {
            // The exponent is not validated; past 63 the power is spelled out.
            match 1u64.checked_shl(u32::from(alignment_log2)) {
                Some(alignment) => {
                    let _ = write!(out, " align={alignment} offset={offset}");
                }
                None => {
                    let _ = write!(out, " align=2^{alignment_log2} offset={offset}");
                }
            }
        }
        Immediate::Unknown { raw } => {
            let _ = write!(out, " {raw:#06x}");
        }
    } simd(simd) => simd::write_simd_immediate(out, simd))
}

fn write_signature(out: &mut String, lookup: Result<&FunctionType, LookupError>) {
    match lookup {
        Ok(ty) => {
            let _ = write!(out, "{ty}");
        }
        Err(err) => {
            log::trace!("describing unresolved signature: {err}");
            out.push_str(match err {
                LookupError::InvalidFunctionIndex { .. } => INVALID_FUNCTION_INDEX,
                LookupError::InvalidTypeIndex { .. } => INVALID_TYPE_INDEX,
            });
        }
    }
}

/// `[a,b,c]`, or `[]` for no items.
fn write_list<I>(out: &mut String, items: I)
where
    I: IntoIterator,
    I::Item: fmt::Display,
{
    out.push('[');
    for (i, item) in items.into_iter().enumerate() {
        if i > 0 {
            out.push(',');
        }
        let _ = write!(out, "{item}");
    }
    out.push(']');
}

oplog_isa::cfg_simd! {
    mod simd {
        use std::fmt;

        use oplog_isa::SimdImmediate;

        use super::write_list;

        /// One shuffle entry: `a<index>` selects from the first operand,
        /// `b<index>` from the second.
        struct ShuffleLane {
            index: u8,
            num_lanes: usize,
        }

        impl fmt::Display for ShuffleLane {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                let operand = if usize::from(self.index) < self.num_lanes {
                    'a'
                } else {
                    'b'
                };
                write!(f, "{operand}{}", self.index)
            }
        }

        pub(super) fn write_simd_immediate(out: &mut String, imm: SimdImmediate<'_>) {
            use std::fmt::Write;

            match imm {
                SimdImmediate::LaneIndex { lane_index } => {
                    let _ = write!(out, " {lane_index}");
                }
                SimdImmediate::Swizzle { lane_indices } => {
                    out.push(' ');
                    write_list(out, lane_indices);
                }
                SimdImmediate::Shuffle { lane_indices } => {
                    let num_lanes = lane_indices.len();
                    out.push(' ');
                    write_list(
                        out,
                        lane_indices
                            .iter()
                            .map(|&index| ShuffleLane { index, num_lanes }),
                    );
                }
            }
        }
    }
}
