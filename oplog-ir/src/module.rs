use crate::error::{LookupError, Result, TooManyEntries, next_index};
use crate::function::FunctionTable;
use crate::types::FunctionType;

/// The parts of a module the operator description needs: the type table and
/// the function index space.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Module {
    pub types: Vec<FunctionType>,
    pub functions: FunctionTable,
}

impl Module {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a signature to the type table and return its index.
    pub fn add_type(&mut self, ty: FunctionType) -> std::result::Result<u32, TooManyEntries> {
        let index = next_index(self.types.len())?;
        self.types.push(ty);
        Ok(index)
    }

    /// Signature at `type_index` in the type table.
    pub fn signature(&self, type_index: u32) -> Result<&FunctionType> {
        usize::try_from(type_index)
            .ok()
            .and_then(|i| self.types.get(i))
            .ok_or(LookupError::InvalidTypeIndex {
                index: type_index,
                count: self.types.len(),
            })
    }

    /// Signature of the function at `function_index`.
    ///
    /// Fails with [`LookupError::InvalidFunctionIndex`] when the function
    /// does not exist, and with [`LookupError::InvalidTypeIndex`] when it
    /// exists but names a type outside the table.
    pub fn function_type(&self, function_index: u32) -> Result<&FunctionType> {
        let type_index =
            self.functions
                .type_index(function_index)
                .ok_or(LookupError::InvalidFunctionIndex {
                    index: function_index,
                    count: self.functions.len(),
                })?;
        self.signature(type_index)
    }
}
