use oplog_isa::*;

#[derive(Debug, PartialEq, Eq, thiserror::Error)]
#[error("visitor rejected `{0}`")]
pub struct Rejected(pub Opcode);

/// Visitor that records every operator it receives and every line logged
/// to it, optionally failing on one opcode.
#[derive(Default)]
pub struct Recorder {
    pub visited: Vec<Operator>,
    pub logged: Vec<String>,
    pub reject: Option<Opcode>,
}

impl Recorder {
    fn record(&mut self, operator: Operator) -> Result<(), Rejected> {
        let opcode = operator.opcode();
        self.visited.push(operator);
        match self.reject {
            Some(rejected) if rejected == opcode => Err(Rejected(opcode)),
            _ => Ok(()),
        }
    }
}

macro_rules! record_operator {
    ($( $code:literal $op:ident => $visit:ident $name:literal $imm:ty [$($flag:ident)|*] )*) => {
        $(
            fn $visit(&mut self, imm: $imm) -> Self::Output {
                self.record(Operator::$op(imm))
            }
        )*
    };
}

impl OperatorVisitor for Recorder {
    type Output = Result<(), Rejected>;

    fn log_operator(&mut self, text: String) {
        self.logged.push(text);
    }

    oplog_isa::for_each_operator!(record_operator);

    fn visit_unknown(&mut self, imm: UnknownImm) -> Self::Output {
        self.record(Operator::Unknown(imm))
    }
}
