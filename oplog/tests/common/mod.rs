use oplog_ir::{FunctionType, Module};
use oplog_isa::*;

pub fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

#[derive(Debug, PartialEq, Eq, thiserror::Error)]
#[error("consumer rejected `{0}`")]
pub struct Rejected(pub Opcode);

/// What reached the consumer, in arrival order.
#[derive(Clone, Debug, PartialEq)]
pub enum Event {
    Log(String),
    Visit(Operator),
}

/// Consumer that records log lines and visited operators in one stream,
/// optionally failing on one opcode.
#[derive(Default)]
pub struct Consumer {
    pub events: Vec<Event>,
    pub reject: Option<Opcode>,
}

impl Consumer {
    pub fn rejecting(opcode: Opcode) -> Self {
        Self {
            reject: Some(opcode),
            ..Self::default()
        }
    }

    pub fn logged(&self) -> Vec<&str> {
        self.events
            .iter()
            .filter_map(|event| match event {
                Event::Log(text) => Some(text.as_str()),
                Event::Visit(_) => None,
            })
            .collect()
    }

    pub fn visited(&self) -> Vec<&Operator> {
        self.events
            .iter()
            .filter_map(|event| match event {
                Event::Visit(operator) => Some(operator),
                Event::Log(_) => None,
            })
            .collect()
    }

    fn record(&mut self, operator: Operator) -> Result<(), Rejected> {
        let opcode = operator.opcode();
        self.events.push(Event::Visit(operator));
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

impl OperatorVisitor for Consumer {
    type Output = Result<(), Rejected>;

    fn log_operator(&mut self, text: String) {
        log::debug!(target: LOG_TARGET, "{text}");
        self.events.push(Event::Log(text));
    }

    oplog_isa::for_each_operator!(record_operator);

    fn visit_unknown(&mut self, imm: UnknownImm) -> Self::Output {
        self.record(Operator::Unknown(imm))
    }
}

/// Types: 0 = `(i32,i32)->i32`, 1 = `()->none`.
/// Functions: 0 = import `env.print` of type 1, 1 = defined of type 0,
/// 2 = defined with a dangling type index.
pub fn module() -> Module {
    let mut module = Module::new();
    let binary = module.add_type(FunctionType::new(
        [ValueType::I32, ValueType::I32],
        ValueType::I32,
    ))
    .unwrap();
    let nullary = module.add_type(FunctionType::default()).unwrap();
    module.functions.import("env", "print", nullary).unwrap();
    module.functions.define(binary).unwrap();
    module.functions.define(99).unwrap();
    module
}
