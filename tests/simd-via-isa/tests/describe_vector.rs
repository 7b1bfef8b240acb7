//! `oplog` built without its own `simd` feature still describes vector
//! immediates once `oplog-isa` has the feature.

use oplog::{LoggingProxy, describe_immediate};
use oplog_ir::Module;
use oplog_isa::*;

struct Lines(Vec<String>);

macro_rules! accept_operator {
    ($( $code:literal $op:ident => $visit:ident $name:literal $imm:ty [$($flag:ident)|*] )*) => {
        $(
            fn $visit(&mut self, _imm: $imm) {}
        )*
    };
}

impl OperatorVisitor for Lines {
    type Output = ();

    fn log_operator(&mut self, text: String) {
        self.0.push(text);
    }

    oplog_isa::for_each_operator!(accept_operator);

    fn visit_unknown(&mut self, _imm: UnknownImm) {}
}

#[test]
fn vector_opcodes_are_present() {
    assert!(opcode_table().any(|op| op.flags().contains(OpcodeFlags::SIMD)));
}

#[test]
fn shuffle_is_described() {
    let imm = ShuffleImm::<4> {
        lane_indices: [0, 4, 3, 7],
    };
    assert_eq!(
        describe_immediate(&Module::new(), imm.as_immediate()),
        " [a0,b4,a3,b7]"
    );
}

#[test]
fn proxy_logs_vector_instructions() {
    let module = Module::new();
    let mut lines = Lines(Vec::new());
    let mut proxy = LoggingProxy::new(&module, &mut lines);
    proxy.visit_i8x16_extract_lane_u(LaneIndexImm { lane_index: 9 });
    proxy.visit_v16x8_swizzle(SwizzleImm {
        lane_indices: [7, 6, 5, 4, 3, 2, 1, 0],
    });
    assert_eq!(
        lines.0,
        vec!["i8x16.extract_lane_u 9", "v16x8.swizzle [7,6,5,4,3,2,1,0]"]
    );
}
