use crate::error::{TooManyEntries, next_index};

/// An imported function.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FunctionImport {
    pub module: String,
    pub name: String,
    /// Index into the module's type table.
    pub type_index: u32,
}

/// A function defined in the module body.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FunctionDef {
    /// Index into the module's type table.
    pub type_index: u32,
}

/// Function index space: imports first, then definitions.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FunctionTable {
    pub imports: Vec<FunctionImport>,
    pub defs: Vec<FunctionDef>,
}

impl FunctionTable {
    pub fn len(&self) -> usize {
        self.imports.len() + self.defs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.imports.is_empty() && self.defs.is_empty()
    }

    /// Type-table index of the function at `function_index`, or `None` if
    /// the index is outside the index space.
    pub fn type_index(&self, function_index: u32) -> Option<u32> {
        let index = usize::try_from(function_index).ok()?;
        match index.checked_sub(self.imports.len()) {
            None => Some(self.imports[index].type_index),
            Some(def) => self.defs.get(def).map(|f| f.type_index),
        }
    }

    /// Append an import and return its function index.
    ///
    /// Imports must all be added before any definition, otherwise the
    /// indices already handed out for definitions shift.
    pub fn import(
        &mut self,
        module: impl Into<String>,
        name: impl Into<String>,
        type_index: u32,
    ) -> Result<u32, TooManyEntries> {
        debug_assert!(self.defs.is_empty(), "import added after a definition");
        let index = next_index(self.len())?;
        self.imports.push(FunctionImport {
            module: module.into(),
            name: name.into(),
            type_index,
        });
        Ok(index)
    }

    /// Append a definition and return its function index.
    pub fn define(&mut self, type_index: u32) -> Result<u32, TooManyEntries> {
        let index = next_index(self.len())?;
        self.defs.push(FunctionDef { type_index });
        Ok(index)
    }
}
