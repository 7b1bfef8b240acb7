use crate::imm::{Immediate, ImmediateOperand, UnknownImm};
use crate::opcode::Opcode;

/// `log` target used by the default [`OperatorVisitor::log_operator`].
pub const LOG_TARGET: &str = "oplog::operator";

macro_rules! define_visitor {
    ($( $code:literal $op:ident => $visit:ident $name:literal $imm:ty [$($flag:ident)|*] )*) => {
        /// Per-opcode dispatch interface implemented by interpreters,
        /// validators, code generators and decorators around them.
        ///
        /// There is one method per opcode, each taking that opcode's
        /// immediate shape. Pass `Default::default()` for opcodes whose
        /// immediate the caller does not have.
        pub trait OperatorVisitor {
            /// Result of visiting one instruction. Visitors that can fail
            /// use `Result<_, E>`.
            type Output;

            /// Receive one formatted line describing an instruction.
            ///
            /// The default routes it to the `log` facade at debug level.
            fn log_operator(&mut self, text: String) {
                log::debug!(target: LOG_TARGET, "{text}");
            }

            $(
                #[doc = concat!("`", $name, "`")]
                fn $visit(&mut self, imm: $imm) -> Self::Output;
            )*

            /// An encoding the decoder could not map to an opcode.
            fn visit_unknown(&mut self, imm: UnknownImm) -> Self::Output;
        }

        impl<V: OperatorVisitor + ?Sized> OperatorVisitor for &mut V {
            type Output = V::Output;

            fn log_operator(&mut self, text: String) {
                (**self).log_operator(text)
            }

            $(
                fn $visit(&mut self, imm: $imm) -> Self::Output {
                    (**self).$visit(imm)
                }
            )*

            fn visit_unknown(&mut self, imm: UnknownImm) -> Self::Output {
                (**self).visit_unknown(imm)
            }
        }

        /// A decoded instruction: an opcode paired with its immediate.
        #[derive(Clone, Debug, PartialEq)]
        pub enum Operator {
            $( $op($imm), )*
            Unknown(UnknownImm),
        }

        impl Operator {
            pub fn opcode(&self) -> Opcode {
                match self {
                    $( Operator::$op(_) => Opcode::$op, )*
                    Operator::Unknown(_) => Opcode::Unknown,
                }
            }

            pub fn immediate(&self) -> Immediate<'_> {
                match self {
                    $( Operator::$op(imm) => imm.as_immediate(), )*
                    Operator::Unknown(imm) => imm.as_immediate(),
                }
            }

            /// The operator for `opcode` with a default-constructed
            /// immediate.
            pub fn with_default_imm(opcode: Opcode) -> Self {
                match opcode {
                    $( Opcode::$op => Operator::$op(Default::default()), )*
                    Opcode::Unknown => Operator::Unknown(UnknownImm::default()),
                }
            }

            /// Dispatch to the visitor method for this operator's opcode.
            pub fn visit<V: OperatorVisitor + ?Sized>(self, visitor: &mut V) -> V::Output {
                match self {
                    $( Operator::$op(imm) => visitor.$visit(imm), )*
                    Operator::Unknown(imm) => visitor.visit_unknown(imm),
                }
            }
        }
    };
}

crate::for_each_operator!(define_visitor);

/// Dispatch `operators` to `visitor` in order, stopping at the first error.
///
/// The error is returned exactly as the visitor produced it.
pub fn visit_operators<V, E, I>(visitor: &mut V, operators: I) -> Result<(), E>
where
    V: OperatorVisitor<Output = Result<(), E>> + ?Sized,
    I: IntoIterator<Item = Operator>,
{
    for operator in operators {
        operator.visit(visitor)?;
    }
    Ok(())
}
