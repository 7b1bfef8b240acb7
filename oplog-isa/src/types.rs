use std::fmt;

/// Type of a single value on the operand stack.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ValueType {
    I32,
    I64,
    F32,
    F64,
    #[cfg(feature = "simd")]
    V128,
}

impl ValueType {
    /// Lowercase textual name, as used in mnemonics.
    pub const fn name(self) -> &'static str {
        match self {
            ValueType::I32 => "i32",
            ValueType::I64 => "i64",
            ValueType::F32 => "f32",
            ValueType::F64 => "f64",
            #[cfg(feature = "simd")]
            ValueType::V128 => "v128",
        }
    }
}

impl fmt::Display for ValueType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Result of a control structure or function: nothing, or one value.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum ResultType {
    #[default]
    None,
    Value(ValueType),
}

impl ResultType {
    pub const fn name(self) -> &'static str {
        match self {
            ResultType::None => "none",
            ResultType::Value(ty) => ty.name(),
        }
    }
}

impl From<ValueType> for ResultType {
    fn from(ty: ValueType) -> Self {
        ResultType::Value(ty)
    }
}

impl fmt::Display for ResultType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
