//! Operator logging for WebAssembly-style visitors.
//!
//! [`LoggingProxy`] wraps any [`OperatorVisitor`](oplog_isa::OperatorVisitor).
//! For every instruction it receives, it formats the mnemonic and operands
//! with [`describe_operator`], hands the line to the wrapped visitor's
//! `log_operator`, and then forwards the instruction unchanged.

pub mod describe;
pub mod proxy;

pub use describe::{
    INVALID_FUNCTION_INDEX, INVALID_TYPE_INDEX, describe_immediate, describe_operator,
};
pub use proxy::LoggingProxy;
