//! Immediate operand shapes.
//!
//! Each opcode carries exactly one of the structs below, fixed by the
//! operator table. [`Immediate`] is the closed, borrowed view over all of
//! them, obtained through [`ImmediateOperand::as_immediate`].

use std::fmt;

use crate::types::ResultType;

/// Implemented by every immediate shape.
pub trait ImmediateOperand: Clone + Default + fmt::Debug {
    /// Borrow this immediate as the tagged [`Immediate`] view.
    fn as_immediate(&self) -> Immediate<'_>;
}

/// Tagged view over every immediate shape.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Immediate<'a> {
    /// No operands.
    None,
    /// `block`, `loop`, `if`.
    ControlStructure { result_type: ResultType },
    /// `br`, `br_if`.
    Branch { target_depth: u32 },
    /// `br_table`. `target_depths` may be empty.
    BranchTable {
        default_target_depth: u32,
        target_depths: &'a [u32],
    },
    Literal(Literal),
    /// Local or global index.
    Variable { variable_index: u32 },
    Call { function_index: u32 },
    CallIndirect { type_index: u32 },
    LoadOrStore { alignment_log2: u8, offset: u32 },
    /// `memory.size`, `memory.grow`.
    Memory,
    /// Raw encoding the decoder could not map to an opcode.
    Unknown { raw: u16 },
    #[cfg(feature = "simd")]
    Simd(SimdImmediate<'a>),
}

/// Vector-extension immediates.
#[cfg(feature = "simd")]
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum SimdImmediate<'a> {
    LaneIndex { lane_index: u8 },
    /// Lane permutation of one operand.
    Swizzle { lane_indices: &'a [u8] },
    /// Lane selection from two operands: indices below the lane count pick
    /// from the first, the rest from the second.
    Shuffle { lane_indices: &'a [u8] },
}

/// A literal constant of one of the four numeric widths.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Literal {
    I32(i32),
    I64(i64),
    F32(f32),
    F64(f64),
}

impl fmt::Display for Literal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Literal::I32(v) => write!(f, "{v}"),
            Literal::I64(v) => write!(f, "{v}"),
            Literal::F32(v) => write!(f, "{v}"),
            Literal::F64(v) => write!(f, "{v}"),
        }
    }
}

/// Native types usable as [`LiteralImm`] values.
pub trait LiteralValue: Copy + Default + fmt::Debug + PartialEq {
    fn to_literal(self) -> Literal;
}

impl LiteralValue for i32 {
    fn to_literal(self) -> Literal {
        Literal::I32(self)
    }
}

impl LiteralValue for i64 {
    fn to_literal(self) -> Literal {
        Literal::I64(self)
    }
}

impl LiteralValue for f32 {
    fn to_literal(self) -> Literal {
        Literal::F32(self)
    }
}

impl LiteralValue for f64 {
    fn to_literal(self) -> Literal {
        Literal::F64(self)
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct NoImm;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ControlStructureImm {
    pub result_type: ResultType,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct BranchImm {
    /// Relative nesting depth of the target.
    pub target_depth: u32,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct BranchTableImm {
    pub default_target_depth: u32,
    pub target_depths: Vec<u32>,
}

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct LiteralImm<T> {
    pub value: T,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct GetOrSetVariableImm {
    pub variable_index: u32,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct CallImm {
    pub function_index: u32,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct CallIndirectImm {
    /// Index into the module's type table.
    pub type_index: u32,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct LoadOrStoreImm {
    /// Alignment as a power-of-two exponent.
    pub alignment_log2: u8,
    pub offset: u32,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct MemoryImm;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct UnknownImm {
    pub raw: u16,
}

#[cfg(feature = "simd")]
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct LaneIndexImm<const NUM_LANES: usize> {
    pub lane_index: u8,
}

#[cfg(feature = "simd")]
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SwizzleImm<const NUM_LANES: usize> {
    pub lane_indices: [u8; NUM_LANES],
}

#[cfg(feature = "simd")]
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ShuffleImm<const NUM_LANES: usize> {
    /// `0..NUM_LANES` selects from the first operand,
    /// `NUM_LANES..2 * NUM_LANES` from the second.
    pub lane_indices: [u8; NUM_LANES],
}

// `[u8; N]: Default` only exists for small fixed `N`.
#[cfg(feature = "simd")]
impl<const NUM_LANES: usize> Default for SwizzleImm<NUM_LANES> {
    fn default() -> Self {
        Self {
            lane_indices: [0; NUM_LANES],
        }
    }
}

#[cfg(feature = "simd")]
impl<const NUM_LANES: usize> Default for ShuffleImm<NUM_LANES> {
    fn default() -> Self {
        Self {
            lane_indices: [0; NUM_LANES],
        }
    }
}

impl ImmediateOperand for NoImm {
    fn as_immediate(&self) -> Immediate<'_> {
        Immediate::None
    }
}

impl ImmediateOperand for ControlStructureImm {
    fn as_immediate(&self) -> Immediate<'_> {
        Immediate::ControlStructure {
            result_type: self.result_type,
        }
    }
}

impl ImmediateOperand for BranchImm {
    fn as_immediate(&self) -> Immediate<'_> {
        Immediate::Branch {
            target_depth: self.target_depth,
        }
    }
}

impl ImmediateOperand for BranchTableImm {
    fn as_immediate(&self) -> Immediate<'_> {
        Immediate::BranchTable {
            default_target_depth: self.default_target_depth,
            target_depths: &self.target_depths,
        }
    }
}

impl<T: LiteralValue> ImmediateOperand for LiteralImm<T> {
    fn as_immediate(&self) -> Immediate<'_> {
        Immediate::Literal(self.value.to_literal())
    }
}

impl ImmediateOperand for GetOrSetVariableImm {
    fn as_immediate(&self) -> Immediate<'_> {
        Immediate::Variable {
            variable_index: self.variable_index,
        }
    }
}

impl ImmediateOperand for CallImm {
    fn as_immediate(&self) -> Immediate<'_> {
        Immediate::Call {
            function_index: self.function_index,
        }
    }
}

impl ImmediateOperand for CallIndirectImm {
    fn as_immediate(&self) -> Immediate<'_> {
        Immediate::CallIndirect {
            type_index: self.type_index,
        }
    }
}

impl ImmediateOperand for LoadOrStoreImm {
    fn as_immediate(&self) -> Immediate<'_> {
        Immediate::LoadOrStore {
            alignment_log2: self.alignment_log2,
            offset: self.offset,
        }
    }
}

impl ImmediateOperand for MemoryImm {
    fn as_immediate(&self) -> Immediate<'_> {
        Immediate::Memory
    }
}

impl ImmediateOperand for UnknownImm {
    fn as_immediate(&self) -> Immediate<'_> {
        Immediate::Unknown { raw: self.raw }
    }
}

#[cfg(feature = "simd")]
impl<const NUM_LANES: usize> ImmediateOperand for LaneIndexImm<NUM_LANES> {
    fn as_immediate(&self) -> Immediate<'_> {
        Immediate::Simd(SimdImmediate::LaneIndex {
            lane_index: self.lane_index,
        })
    }
}

#[cfg(feature = "simd")]
impl<const NUM_LANES: usize> ImmediateOperand for SwizzleImm<NUM_LANES> {
    fn as_immediate(&self) -> Immediate<'_> {
        Immediate::Simd(SimdImmediate::Swizzle {
            lane_indices: &self.lane_indices,
        })
    }
}

#[cfg(feature = "simd")]
impl<const NUM_LANES: usize> ImmediateOperand for ShuffleImm<NUM_LANES> {
    fn as_immediate(&self) -> Immediate<'_> {
        Immediate::Simd(SimdImmediate::Shuffle {
            lane_indices: &self.lane_indices,
        })
    }
}
