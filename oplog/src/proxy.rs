use oplog_ir::Module;
use oplog_isa::{ImmediateOperand, Opcode, OperatorVisitor, UnknownImm};

use crate::describe::describe_operator;

/// Visitor decorator that logs each instruction before forwarding it.
///
/// For every `visit_*` call the proxy formats one line (mnemonic plus
/// operands), passes it to the inner visitor's
/// [`log_operator`](OperatorVisitor::log_operator), then makes the same call
/// on the inner visitor with the untouched immediate and returns its output
/// as is. An error from the inner visitor therefore arrives after its log
/// line has been emitted.
///
/// `V` may be an owned visitor or `&mut` to one.
///
/// ```ignore
/// let mut proxy = LoggingProxy::new(&module, &mut interpreter);
/// oplog_isa::visit_operators(&mut proxy, operators)?;
/// ```
pub struct LoggingProxy<'m, V> {
    module: &'m Module,
    inner: V,
}

impl<'m, V> LoggingProxy<'m, V> {
    pub fn new(module: &'m Module, inner: V) -> Self {
        Self { module, inner }
    }

    /// Module used to resolve call signatures.
    pub fn module(&self) -> &'m Module {
        self.module
    }

    pub fn inner(&self) -> &V {
        &self.inner
    }

    pub fn inner_mut(&mut self) -> &mut V {
        &mut self.inner
    }

    pub fn into_inner(self) -> V {
        self.inner
    }
}

impl<V: OperatorVisitor> LoggingProxy<'_, V> {
    fn log<I: ImmediateOperand>(&mut self, opcode: Opcode, imm: &I) {
        let text = describe_operator(self.module, opcode, imm.as_immediate());
        self.inner.log_operator(text);
    }
}

macro_rules! define_logging_visit {
    ($( $code:literal $op:ident => $visit:ident $name:literal $imm:ty [$($flag:ident)|*] )*) => {
        $(
            fn $visit(&mut self, imm: $imm) -> Self::Output {
                self.log(Opcode::$op, &imm);
                self.inner.$visit(imm)
            }
        )*
    };
}

impl<V: OperatorVisitor> OperatorVisitor for LoggingProxy<'_, V> {
    type Output = V::Output;

    // Stacked proxies all log into the innermost visitor.
    fn log_operator(&mut self, text: String) {
        self.inner.log_operator(text);
    }

    oplog_isa::for_each_operator!(define_logging_visit);

    fn visit_unknown(&mut self, imm: UnknownImm) -> Self::Output {
        self.log(Opcode::Unknown, &imm);
        self.inner.visit_unknown(imm)
    }
}
