//! Module metadata consulted when describing call instructions.

pub mod error;
pub mod function;
pub mod module;
pub mod types;

pub use error::{LookupError, TooManyEntries};
pub use function::{FunctionDef, FunctionImport, FunctionTable};
pub use module::Module;
pub use types::FunctionType;
