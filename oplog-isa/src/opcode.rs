use std::fmt;

bitflags::bitflags! {
    /// Coarse classification of an opcode.
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
    pub struct OpcodeFlags: u16 {
        /// Structured control flow (`block`, `if`, `end`, branches, ...).
        const CONTROL    = 1 << 0;
        /// Transfers control to an enclosing label.
        const BRANCH     = 1 << 1;
        /// Control never falls through to the next instruction.
        const TERMINATOR = 1 << 2;
        const CALL       = 1 << 3;
        /// Reads or writes a local or global.
        const VARIABLE   = 1 << 4;
        const LOAD       = 1 << 5;
        const STORE      = 1 << 6;
        /// Operates on the memory as a whole.
        const MEMORY     = 1 << 7;
        const CONST      = 1 << 8;
        /// Vector extension opcode.
        const SIMD       = 1 << 9;
    }
}

macro_rules! define_opcode {
    ($( $code:literal $op:ident => $visit:ident $name:literal $imm:ty [$($flag:ident)|*] )*) => {
        /// Instruction kind.
        ///
        /// Discriminants are the binary encodings; prefixed opcodes keep the
        /// prefix byte in the high byte (`0xfdNN`).
        #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
        #[repr(u16)]
        pub enum Opcode {
            $( $op = $code, )*
            /// Reserved for encodings the decoder could not recognise.
            Unknown = 0xffff,
        }

        impl Opcode {
            const TABLE: &'static [Opcode] = &[$( Opcode::$op, )*];

            /// Mnemonic, e.g. `"i32.add"`.
            pub const fn name(self) -> &'static str {
                match self {
                    $( Opcode::$op => $name, )*
                    Opcode::Unknown => "unknown",
                }
            }

            pub const fn flags(self) -> OpcodeFlags {
                match self {
                    $( Opcode::$op => OpcodeFlags::empty()$(.union(OpcodeFlags::$flag))*, )*
                    Opcode::Unknown => OpcodeFlags::empty(),
                }
            }

            /// Map a binary encoding back to its opcode. Never returns
            /// [`Opcode::Unknown`].
            pub const fn from_raw(raw: u16) -> Option<Self> {
                match raw {
                    $( $code => Some(Opcode::$op), )*
                    _ => None,
                }
            }
        }
    };
}

crate::for_each_operator!(define_opcode);

impl Opcode {
    /// Binary encoding.
    #[inline]
    pub const fn raw(self) -> u16 {
        self as u16
    }

    /// Whether the encoding needs a prefix byte.
    #[inline]
    pub const fn is_prefixed(self) -> bool {
        self.raw() > 0xff
    }
}

impl fmt::Display for Opcode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Every opcode of the instruction set in table order, excluding
/// [`Opcode::Unknown`].
pub fn opcode_table() -> impl ExactSizeIterator<Item = Opcode> + Clone {
    Opcode::TABLE.iter().copied()
}

/// Number of opcodes yielded by [`opcode_table`].
pub fn opcode_count() -> usize {
    Opcode::TABLE.len()
}

/// Look up an opcode by its binary encoding.
pub fn lookup(raw: u16) -> Option<Opcode> {
    Opcode::from_raw(raw)
}
