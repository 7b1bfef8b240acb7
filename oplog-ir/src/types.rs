use std::fmt;

use oplog_isa::{ResultType, ValueType};

/// Function signature.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct FunctionType {
    pub params: Vec<ValueType>,
    pub result: ResultType,
}

impl FunctionType {
    pub fn new(params: impl Into<Vec<ValueType>>, result: impl Into<ResultType>) -> Self {
        Self {
            params: params.into(),
            result: result.into(),
        }
    }
}

/// `(i32,i64)->f32`; a function with no parameters and no result is
/// `()->none`.
impl fmt::Display for FunctionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("(")?;
        for (i, param) in self.params.iter().enumerate() {
            if i > 0 {
                f.write_str(",")?;
            }
            write!(f, "{param}")?;
        }
        write!(f, ")->{}", self.result)
    }
}
