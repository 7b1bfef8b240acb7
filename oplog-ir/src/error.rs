use thiserror::Error;

#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum LookupError {
    #[error("function index {index} out of bounds (function count: {count})")]
    InvalidFunctionIndex { index: u32, count: usize },

    #[error("type index {index} out of bounds (type count: {count})")]
    InvalidTypeIndex { index: u32, count: usize },
}

/// A table already holds as many entries as a `u32` index can name.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
#[error("table with {0} entries exceeds u32 index capacity")]
pub struct TooManyEntries(pub usize);

pub type Result<T> = std::result::Result<T, LookupError>;

/// Index the next entry appended to a table of `len` entries receives.
pub(crate) fn next_index(len: usize) -> std::result::Result<u32, TooManyEntries> {
    u32::try_from(len).map_err(|_| TooManyEntries(len))
}
